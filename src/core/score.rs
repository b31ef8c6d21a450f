//! Round scoring
//!
//! - base = word length * 10
//! - bonus = remaining attempts * 5
//! - penalty = wrong guesses * 8
//! - anything but a win scores 0

use super::Outcome;

const POINTS_PER_LETTER: u32 = 10;
const POINTS_PER_ATTEMPT_LEFT: u32 = 5;
const PENALTY_PER_WRONG_GUESS: u32 = 8;

/// Points earned for a finished round
///
/// # Examples
/// ```
/// use hangman::core::{Outcome, round_score};
///
/// assert_eq!(round_score(Outcome::Win, 3, 5, 1), 47);
/// assert_eq!(round_score(Outcome::Loss, 3, 0, 6), 0);
/// ```
#[must_use]
pub fn round_score(
    outcome: Outcome,
    word_len: usize,
    attempts_remaining: u32,
    wrong_guesses: usize,
) -> u32 {
    if !outcome.is_win() {
        return 0;
    }

    let base = word_len as u32 * POINTS_PER_LETTER;
    let bonus = attempts_remaining * POINTS_PER_ATTEMPT_LEFT;
    let penalty = wrong_guesses as u32 * PENALTY_PER_WRONG_GUESS;
    (base + bonus).saturating_sub(penalty)
}
