//! Embedded default categories
//!
//! Category word lists compiled into the binary at build time and written to
//! disk the first time a words directory is opened.

// Include generated category lists from build script
include!(concat!(env!("OUT_DIR"), "/categories.rs"));
