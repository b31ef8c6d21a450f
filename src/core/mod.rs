//! Core domain types for Hangman
//!
//! This module contains the fundamental domain types: the target word, guess
//! classification, round outcomes and scoring. Everything here is pure and
//! free of I/O.

mod guess;
mod outcome;
mod score;
mod word;

pub use guess::{GUESS_COMMAND, GuessInput, GuessRecord, is_alphabetic_word, normalize};
pub use outcome::Outcome;
pub use score::round_score;
pub use word::{Word, WordError};
