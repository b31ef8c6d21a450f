//! Scripted interaction port
//!
//! Replays canned answers and records everything the engine shows. Used to
//! drive rounds and whole sessions without a terminal.

use super::port::{InteractionPort, RoundView};
use crate::core::Word;
use std::collections::VecDeque;

/// Port that answers from queues and records every call
///
/// When the guess queue runs dry, `request_guess` returns `None` (quit).
/// When the full-word queue runs dry, `request_full_word` returns `None` (cancel).
#[derive(Debug, Default)]
pub struct ScriptedPort {
    guesses: VecDeque<String>,
    full_words: VecDeque<Option<String>>,
    views: Vec<RoundView>,
    notices: Vec<String>,
    wins: Vec<(String, u32)>,
    losses: Vec<String>,
}

impl ScriptedPort {
    /// Create a port that answers guess prompts from `guesses`, in order
    pub fn new<I, S>(guesses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            guesses: guesses.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Answers for follow-up full-word prompts; `None` cancels
    #[must_use]
    pub fn with_full_words<'a, I>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = Option<&'a str>>,
    {
        self.full_words = words.into_iter().map(|w| w.map(str::to_string)).collect();
        self
    }

    /// Queue more guesses, e.g. for the next round of a session
    pub fn push_guesses<I, S>(&mut self, guesses: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.guesses.extend(guesses.into_iter().map(Into::into));
    }

    #[must_use]
    pub fn views(&self) -> &[RoundView] {
        &self.views
    }

    #[must_use]
    pub fn notices(&self) -> &[String] {
        &self.notices
    }

    #[must_use]
    pub fn wins(&self) -> &[(String, u32)] {
        &self.wins
    }

    #[must_use]
    pub fn losses(&self) -> &[String] {
        &self.losses
    }

    #[must_use]
    pub fn remaining_inputs(&self) -> usize {
        self.guesses.len()
    }
}

impl InteractionPort for ScriptedPort {
    fn show_round_state(&mut self, view: &RoundView) {
        self.views.push(view.clone());
    }

    fn request_guess(&mut self) -> Option<String> {
        self.guesses.pop_front()
    }

    fn request_full_word(&mut self) -> Option<String> {
        self.full_words.pop_front().flatten()
    }

    fn notify(&mut self, message: &str) {
        self.notices.push(message.to_string());
    }

    fn announce_win(&mut self, word: &Word, score: u32) {
        self.wins.push((word.text().to_string(), score));
    }

    fn announce_loss(&mut self, word: &Word) {
        self.losses.push(word.text().to_string());
    }
}
