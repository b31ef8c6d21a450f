//! Round engine
//!
//! Runs the guess/reveal state machine for one word: renders state through the
//! interaction port, applies each guess to the [`RoundState`], and produces a
//! [`RoundResult`] once the round is won, lost or quit.

use super::port::{InteractionPort, RoundView};
use crate::core::{
    GuessInput, GuessRecord, Outcome, Word, is_alphabetic_word, normalize, round_score,
};
use chrono::{DateTime, Local};
use rustc_hash::FxHashSet;
use tracing::{debug, info};

/// Wrong guesses allowed before a round is lost
pub const MAX_WRONG: u32 = 6;

/// Phase of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    InProgress,
    Won,
    Lost,
    Quit,
}

/// Effect of applying one guess to the round state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessEffect {
    /// Letter is in the word
    Hit,
    /// Letter is not in the word; one attempt consumed
    Miss,
    /// Full-word guess matched
    Solved,
    /// Full-word guess did not match; one attempt consumed
    WrongWord,
    /// Letter was guessed before; nothing changed
    AlreadyGuessed,
    /// Full-word guess contained non-letters; nothing changed
    NotAlphabetic,
}

/// Mutable state of one round
///
/// Invariants:
/// - `attempts_remaining == MAX_WRONG - wrong_guesses.len()`
/// - a letter is never both a correct guess and a wrong guess
#[derive(Debug, Clone)]
pub struct RoundState {
    guessed_correct: FxHashSet<char>,
    wrong_guesses: Vec<String>,
    attempts_remaining: u32,
    guess_log: Vec<GuessRecord>,
}

impl Default for RoundState {
    fn default() -> Self {
        Self::new()
    }
}

impl RoundState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            guessed_correct: FxHashSet::default(),
            wrong_guesses: Vec::new(),
            attempts_remaining: MAX_WRONG,
            guess_log: Vec::new(),
        }
    }

    #[must_use]
    pub const fn guessed_correct(&self) -> &FxHashSet<char> {
        &self.guessed_correct
    }

    #[must_use]
    pub fn wrong_guesses(&self) -> &[String] {
        &self.wrong_guesses
    }

    #[must_use]
    pub const fn attempts_remaining(&self) -> u32 {
        self.attempts_remaining
    }

    #[must_use]
    pub fn guess_log(&self) -> &[GuessRecord] {
        &self.guess_log
    }

    /// Gallows stage to draw, one step per wrong guess
    #[must_use]
    pub const fn stage(&self) -> usize {
        (MAX_WRONG - self.attempts_remaining) as usize
    }

    /// Won or lost, checked in that order; `InProgress` otherwise
    #[must_use]
    pub fn phase(&self, word: &Word) -> RoundPhase {
        if word.is_revealed_by(&self.guessed_correct) {
            RoundPhase::Won
        } else if self.attempts_remaining == 0 {
            RoundPhase::Lost
        } else {
            RoundPhase::InProgress
        }
    }

    /// Build the view shown before each prompt
    #[must_use]
    pub fn view(&self, word: &Word) -> RoundView {
        let mut guessed: Vec<String> = self
            .guessed_correct
            .iter()
            .map(char::to_string)
            .chain(self.wrong_guesses.iter().cloned())
            .collect();
        guessed.sort();
        guessed.dedup();

        RoundView {
            mask: word.mask(&self.guessed_correct),
            guessed,
            attempts_remaining: self.attempts_remaining,
            stage: self.stage(),
        }
    }

    fn already_guessed(&self, letter: char) -> bool {
        self.guessed_correct.contains(&letter)
            || self
                .wrong_guesses
                .iter()
                .any(|w| w.chars().eq(std::iter::once(letter)))
    }

    /// Apply a single-letter guess
    pub fn guess_letter(&mut self, word: &Word, letter: char) -> GuessEffect {
        let letter = letter.to_ascii_lowercase();
        if self.already_guessed(letter) {
            return GuessEffect::AlreadyGuessed;
        }

        if word.has_letter(letter) {
            self.guessed_correct.insert(letter);
            self.record(letter.to_string(), true);
            GuessEffect::Hit
        } else {
            self.miss(letter.to_string());
            GuessEffect::Miss
        }
    }

    /// Apply a full-word guess
    ///
    /// An exact match reveals every letter at no cost. A one-letter attempt
    /// follows the letter rules. Every other wrong attempt costs an attempt,
    /// repeats included.
    pub fn guess_word(&mut self, word: &Word, attempt: &str) -> GuessEffect {
        let attempt = normalize(attempt);
        if !is_alphabetic_word(&attempt) {
            return GuessEffect::NotAlphabetic;
        }

        let mut chars = attempt.chars();
        if let (Some(letter), None) = (chars.next(), chars.next()) {
            return self.guess_letter(word, letter);
        }

        if attempt == word.text() {
            self.guessed_correct.extend(word.letters());
            self.record(attempt, true);
            return GuessEffect::Solved;
        }

        self.miss(attempt);
        GuessEffect::WrongWord
    }

    fn miss(&mut self, token: String) {
        self.attempts_remaining = self.attempts_remaining.saturating_sub(1);
        self.wrong_guesses.push(token.clone());
        self.record(token, false);
    }

    fn record(&mut self, text: String, correct: bool) {
        let sequence = self.guess_log.len() + 1;
        self.guess_log.push(GuessRecord {
            sequence,
            text,
            correct,
        });
    }
}

/// Immutable snapshot of a finished round
#[derive(Debug, Clone)]
pub struct RoundResult {
    pub word: Word,
    /// Category the word came from, or `all`
    pub source: String,
    pub score: u32,
    pub outcome: Outcome,
    pub wrong_guesses: Vec<String>,
    pub guess_log: Vec<GuessRecord>,
    pub attempts_remaining: u32,
    pub started_at: DateTime<Local>,
}

/// Drives one round against an interaction port
pub struct RoundEngine<'p, P: InteractionPort + ?Sized> {
    word: Word,
    source: String,
    state: RoundState,
    started_at: DateTime<Local>,
    port: &'p mut P,
}

impl<'p, P: InteractionPort + ?Sized> RoundEngine<'p, P> {
    /// Create an engine for `word`, drawn from `source`
    pub fn new(word: Word, source: impl Into<String>, port: &'p mut P) -> Self {
        Self {
            word,
            source: source.into(),
            state: RoundState::new(),
            started_at: Local::now(),
            port,
        }
    }

    /// Run the round to completion
    ///
    /// Malformed input never ends the round; it is reported and re-prompted.
    pub fn play(mut self) -> RoundResult {
        info!(length = self.word.len(), source = %self.source, "round started");

        let outcome = loop {
            let view = self.state.view(&self.word);
            self.port.show_round_state(&view);

            match self.state.phase(&self.word) {
                RoundPhase::Won => break Outcome::Win,
                RoundPhase::Lost => break Outcome::Loss,
                RoundPhase::InProgress | RoundPhase::Quit => {}
            }

            let Some(raw) = self.port.request_guess() else {
                break Outcome::Quit;
            };
            self.handle_input(&raw);
        };

        self.finish(outcome)
    }

    fn handle_input(&mut self, raw: &str) {
        match GuessInput::parse(raw) {
            GuessInput::Empty => {
                self.port
                    .notify("No input detected. Enter a letter or a command.");
            }
            GuessInput::Letter(letter) => {
                let effect = self.state.guess_letter(&self.word, letter);
                debug!(%letter, ?effect, "letter guess");
                let message = match effect {
                    GuessEffect::Hit => "Correct!".to_string(),
                    GuessEffect::Miss => "Wrong!".to_string(),
                    _ => format!("You already guessed '{letter}'. No penalty."),
                };
                self.port.notify(&message);
            }
            GuessInput::FullWord(inline) => {
                let attempt = match inline {
                    Some(text) => text,
                    None => match self.port.request_full_word() {
                        Some(text) => normalize(&text),
                        None => {
                            self.port.notify("Full-word guess cancelled.");
                            return;
                        }
                    },
                };
                self.handle_full_word(&attempt);
            }
            GuessInput::Invalid => {
                self.port.notify(
                    "Please input a single alphabetic character, or 'guess <word>' to guess the full word.",
                );
            }
        }
    }

    fn handle_full_word(&mut self, attempt: &str) {
        let effect = self.state.guess_word(&self.word, attempt);
        debug!(?effect, "full-word guess");
        let message = match effect {
            GuessEffect::Solved => "Full-word guess correct!".to_string(),
            GuessEffect::Hit => "Correct!".to_string(),
            GuessEffect::Miss => "Wrong!".to_string(),
            GuessEffect::WrongWord => {
                format!("Full-word guess '{attempt}' is incorrect. -1 attempt.")
            }
            GuessEffect::AlreadyGuessed => {
                format!("You already guessed '{attempt}'. No penalty.")
            }
            GuessEffect::NotAlphabetic => "Full-word guess must be alphabetic.".to_string(),
        };
        self.port.notify(&message);
    }

    fn finish(mut self, outcome: Outcome) -> RoundResult {
        let score = round_score(
            outcome,
            self.word.len(),
            self.state.attempts_remaining,
            self.state.wrong_guesses.len(),
        );

        match outcome {
            Outcome::Win => self.port.announce_win(&self.word, score),
            Outcome::Loss => self.port.announce_loss(&self.word),
            Outcome::Quit => self.port.notify("Round quit. No points awarded."),
        }

        info!(%outcome, score, "round finished");

        let RoundState {
            wrong_guesses,
            attempts_remaining,
            guess_log,
            ..
        } = self.state;

        RoundResult {
            word: self.word,
            source: self.source,
            score,
            outcome,
            wrong_guesses,
            guess_log,
            attempts_remaining,
            started_at: self.started_at,
        }
    }
}
