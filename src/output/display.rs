//! Display functions for the console
//!
//! Each block is rendered to a `String` so it can go to stdout or to any
//! other writer.

use super::formatters::win_rate_bar;
use crate::stats::CumulativeStats;
use crate::wordlists::WordPool;
use colored::Colorize;

/// Welcome banner
#[must_use]
pub fn banner() -> String {
    let rule = "═".repeat(40).cyan();
    format!(
        "{rule}\n{}\n  Categories, scoring, round logs and gallows art.\n{rule}",
        "  Welcome to Hangman!".bright_yellow().bold()
    )
}

/// Cumulative statistics block
#[must_use]
pub fn stats_summary(stats: &CumulativeStats) -> String {
    format!(
        "\n{}\nGames played: {}  Wins: {}  Losses: {}  Total score: {}\nWin rate: [{}] {:.2}%  Avg score/game: {:.2}\n{}",
        "-- Current Statistics --".bright_cyan().bold(),
        stats.games_played,
        stats.wins.to_string().green(),
        stats.losses.to_string().red(),
        stats.total_score.to_string().bright_yellow(),
        win_rate_bar(stats.win_rate, 20).green(),
        stats.win_rate,
        stats.average_score_per_game,
        "-".repeat(30)
    )
}

/// Every category with its word count, then the aggregated pool
#[must_use]
pub fn categories_listing(pool: &WordPool) -> String {
    let mut lines = vec![format!("\n{}", "Categories".bright_cyan().bold())];
    for name in pool.categories() {
        let count = pool.category_words(&name).map_or(0, <[String]>::len);
        lines.push(format!("  • {name:<16} {count:>5} words"));
    }
    lines.push(format!(
        "  • {:<16} {:>5} words",
        "all",
        pool.all_words().len()
    ));
    lines.join("\n")
}

pub fn print_banner() {
    println!("{}", banner());
}

pub fn print_stats(stats: &CumulativeStats) {
    println!("{}", stats_summary(stats));
}

pub fn print_categories(pool: &WordPool) {
    println!("{}", categories_listing(pool));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Outcome;

    #[test]
    fn stats_summary_shows_rates() {
        let stats = CumulativeStats::default()
            .record(Outcome::Win, 60)
            .record(Outcome::Loss, 0);
        let text = stats_summary(&stats);
        assert!(text.contains("Games played: 2"));
        assert!(text.contains("50.00%"));
        assert!(text.contains("Avg score/game: 30.00"));
    }

    #[test]
    fn categories_listing_counts_words() {
        let pool = WordPool::from_categories([(
            "Science",
            vec!["optics".to_string(), "botany".to_string()],
        )]);
        let text = categories_listing(&pool);
        assert!(text.contains("Science"));
        assert!(text.contains("    2 words"));
    }
}
