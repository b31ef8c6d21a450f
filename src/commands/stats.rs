//! Read-only commands: statistics and category listing

use super::session::open_word_pool;
use crate::config::SessionConfig;
use crate::output::{print_categories, print_stats};
use crate::stats::load_stats;
use anyhow::Result;

/// Print the saved cumulative statistics
///
/// # Errors
///
/// Returns an error if the stats file exists but cannot be read.
pub fn show_stats(config: &SessionConfig) -> Result<()> {
    let stats = load_stats(&config.paths.stats_file)?;
    print_stats(&stats);
    Ok(())
}

/// Print every category with its word count
///
/// Seeds the default categories first when the words directory is new.
///
/// # Errors
///
/// Returns an error if the word files cannot be prepared.
pub fn list_categories(config: &SessionConfig) -> Result<()> {
    let pool = open_word_pool(config)?;
    print_categories(&pool);
    Ok(())
}
