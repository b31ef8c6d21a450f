//! Interaction boundary between a round and whoever is playing it

use crate::core::Word;

/// Snapshot of a round handed to the port before each prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundView {
    /// Revealed letters, `_` for hidden ones, space separated
    pub mask: String,
    /// Correct letters and wrong-guess tokens together, sorted
    pub guessed: Vec<String>,
    pub attempts_remaining: u32,
    /// Gallows stage, `0..=MAX_WRONG`
    pub stage: usize,
}

/// Request/response capability the round engine drives
///
/// The engine blocks on every call. Implementations decide how state is
/// presented and how answers are collected.
pub trait InteractionPort {
    /// Present the current state of the round
    fn show_round_state(&mut self, view: &RoundView);

    /// Ask for the next guess
    ///
    /// Returns `None` when the player has confirmed quitting the round.
    fn request_guess(&mut self) -> Option<String>;

    /// Ask for a full-word guess after a bare `guess` command
    ///
    /// Returns `None` when the player cancels this attempt.
    fn request_full_word(&mut self) -> Option<String>;

    /// Informational message
    fn notify(&mut self, message: &str);

    fn announce_win(&mut self, word: &Word, score: u32);

    fn announce_loss(&mut self, word: &Word);
}
