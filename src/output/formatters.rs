//! Formatting utilities for terminal output

/// Comma-separated guessed tokens, or `-` when there are none
#[must_use]
pub fn guessed_list(guessed: &[String]) -> String {
    if guessed.is_empty() {
        "-".to_string()
    } else {
        guessed.join(", ")
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max).max(0.0) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a win rate percentage as a bar
#[must_use]
pub fn win_rate_bar(win_rate: f64, width: usize) -> String {
    create_progress_bar(win_rate, 100.0, width)
}

/// Remaining attempts as filled and spent pips, e.g. `♥♥♥♡♡♡`
#[must_use]
pub fn attempts_pips(remaining: u32, total: u32) -> String {
    let remaining = remaining.min(total) as usize;
    let spent = total as usize - remaining;
    format!("{}{}", "♥".repeat(remaining), "♡".repeat(spent))
}
