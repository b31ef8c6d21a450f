//! Plain-text rendering of a round log

use crate::engine::{MAX_WRONG, RoundResult};
use crate::stats::CumulativeStats;

const FOOTER_WIDTH: usize = 40;

/// Render the log text for a finished round
///
/// The embedded statistics are `prior` with this round already folded in.
/// Output is deterministic for a given input.
#[must_use]
pub fn render_round_log(result: &RoundResult, prior: &CumulativeStats, artifact: &str) -> String {
    let after = prior.fold(result);

    let mut lines = vec![
        format!("Game: {artifact}"),
        format!("Category Source: {}", result.source),
        format!("Word: {}", result.word),
        format!("Word Length: {}", result.word.len()),
        String::new(),
        "Guesses (in order):".to_string(),
    ];
    lines.extend(result.guess_log.iter().map(ToString::to_string));

    let wrong_list = if result.wrong_guesses.is_empty() {
        "None".to_string()
    } else {
        result.wrong_guesses.join(", ")
    };

    lines.extend([
        String::new(),
        format!("Wrong Guesses List: {wrong_list}"),
        format!("Wrong Guesses Count: {}", result.wrong_guesses.len()),
        format!("Remaining Attempts at End: {}", result.attempts_remaining),
        format!("Result: {}", result.outcome),
        format!("Points Earned: {}", result.score),
        format!("Total Score (after this round): {}", after.total_score),
        String::new(),
        format!("Games Played: {}", after.games_played),
        format!("Wins: {}", after.wins),
        format!("Losses: {}", after.losses),
        format!("Win Rate: {:.2}%", after.win_rate),
        String::new(),
        format!(
            "Date & Time: {}",
            result.started_at.format("%Y-%m-%d %H:%M:%S")
        ),
        "-".repeat(FOOTER_WIDTH),
        "Session Notes:".to_string(),
        format!(
            "- Gallows final stage: {}",
            MAX_WRONG - result.attempts_remaining
        ),
        "- Progress trace recorded in guesses above.".to_string(),
    ]);

    let mut text = lines.join("\n");
    text.push('\n');
    text
}
