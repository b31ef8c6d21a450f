//! Terminal output formatting
//!
//! Display utilities for the console, shared formatting helpers and the
//! gallows drawings used by both interfaces.

pub mod display;
pub mod formatters;
pub mod gallows;

pub use display::{
    banner, categories_listing, print_banner, print_categories, print_stats, stats_summary,
};
pub use gallows::gallows;
