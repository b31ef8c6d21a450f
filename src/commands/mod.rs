//! Command implementations

pub mod session;
pub mod simple;
pub mod stats;

pub use session::{
    CategoryChoice, RoundRecord, SessionPort, SessionSummary, open_word_pool, play_round,
    run_session, run_session_with,
};
pub use simple::{ConsolePort, run_simple};
pub use stats::{list_categories, show_stats};
