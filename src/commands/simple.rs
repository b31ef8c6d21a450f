//! Simple console mode
//!
//! Line-based play over any reader and writer, stdin/stdout by default.

use super::session::{CategoryChoice, SessionPort, run_session};
use crate::config::SessionConfig;
use crate::core::Word;
use crate::engine::{InteractionPort, MAX_WRONG, RoundView};
use crate::output::formatters::{attempts_pips, guessed_list};
use crate::output::{banner, gallows, stats_summary};
use crate::stats::CumulativeStats;
use anyhow::Result;
use colored::Colorize;
use std::fmt::Display;
use std::io::{self, BufRead, StdinLock, Stdout, Write};
use tracing::warn;

/// Console front end for a play session
///
/// End of input or a read error is treated as the player quitting.
pub struct ConsolePort<R, W> {
    input: R,
    output: W,
}

impl ConsolePort<StdinLock<'static>, Stdout> {
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsolePort<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn say(&mut self, text: impl Display) {
        if let Err(err) = writeln!(self.output, "{text}") {
            warn!(error = %err, "console write failed");
        }
    }

    /// Prompt and read one trimmed line, `None` on end of input
    fn ask(&mut self, prompt: &str) -> Option<String> {
        if let Err(err) = write!(self.output, "{prompt}").and_then(|()| self.output.flush()) {
            warn!(error = %err, "console write failed");
        }

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim().to_string()),
            Err(err) => {
                warn!(error = %err, "console read failed");
                None
            }
        }
    }

    fn confirm(&mut self, prompt: &str) -> bool {
        self.ask(prompt)
            .is_some_and(|answer| matches!(answer.to_lowercase().as_str(), "y" | "yes"))
    }
}

impl<R: BufRead, W: Write> InteractionPort for ConsolePort<R, W> {
    fn show_round_state(&mut self, view: &RoundView) {
        self.say(gallows(view.stage));
        self.say(format!("Word:     {}", view.mask.bold()));
        self.say(format!("Guessed:  {}", guessed_list(&view.guessed)));
        self.say(format!(
            "Attempts: {} ({} left)",
            attempts_pips(view.attempts_remaining, MAX_WRONG).red(),
            view.attempts_remaining
        ));
    }

    fn request_guess(&mut self) -> Option<String> {
        loop {
            let line = self.ask("Enter a letter, 'guess' to guess the word, or 'quit': ")?;
            if !line.eq_ignore_ascii_case("quit") {
                return Some(line);
            }
            if self.confirm("Are you sure you want to quit this round? (y/n): ") {
                return None;
            }
            self.say("Continuing the round.");
        }
    }

    fn request_full_word(&mut self) -> Option<String> {
        self.ask("Enter your full-word guess (blank to cancel): ")
            .filter(|word| !word.is_empty())
    }

    fn notify(&mut self, message: &str) {
        self.say(message.bright_white());
    }

    fn announce_win(&mut self, word: &Word, score: u32) {
        self.say(
            format!("You guessed it! The word was '{word}'. +{score} points")
                .bright_green()
                .bold(),
        );
    }

    fn announce_loss(&mut self, word: &Word) {
        self.say(format!("Out of attempts. The word was '{word}'.").red().bold());
    }
}

impl<R: BufRead, W: Write> SessionPort for ConsolePort<R, W> {
    fn welcome(&mut self) {
        self.say(banner());
    }

    fn show_stats(&mut self, stats: &CumulativeStats) {
        self.say(stats_summary(stats));
    }

    fn prompt_category(&mut self, categories: &[String]) -> CategoryChoice {
        self.say(format!("Categories: {}", categories.join(", ")));
        self.ask("Choose a category (Enter for all, 'quit' to exit): ")
            .map_or(CategoryChoice::Quit, |input| {
                CategoryChoice::parse(&input, categories)
            })
    }

    fn new_word_info(&mut self, source: &str, length: usize) {
        self.say(format!(
            "\nNew word from {}: {length} letters",
            source.bright_cyan()
        ));
    }

    fn play_again(&mut self) -> bool {
        self.confirm("Play again? (y/n): ")
    }

    fn farewell(&mut self, message: &str) {
        self.say(format!("\n{message}"));
    }
}

/// Run a console session on stdin/stdout
///
/// # Errors
///
/// Returns an error if the data directory cannot be prepared or a round
/// cannot be recorded.
pub fn run_simple(config: &SessionConfig) -> Result<()> {
    let mut port = ConsolePort::stdio();
    run_session(&mut port, config)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::RoundEngine;
    use std::io::Cursor;

    fn port(input: &str) -> ConsolePort<Cursor<Vec<u8>>, Vec<u8>> {
        ConsolePort::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(port: ConsolePort<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(port.into_output()).unwrap()
    }

    #[test]
    fn quit_needs_confirmation() {
        let mut port = port("quit\nn\nx\nquit\ny\n");
        assert_eq!(port.request_guess().as_deref(), Some("x"));
        assert_eq!(port.request_guess(), None);
        assert!(output(port).contains("Continuing the round."));
    }

    #[test]
    fn end_of_input_quits() {
        let mut port = port("");
        assert_eq!(port.request_guess(), None);
        assert_eq!(port.request_full_word(), None);
        assert!(!port.play_again());
        assert_eq!(port.prompt_category(&[]), CategoryChoice::Quit);
    }

    #[test]
    fn blank_full_word_cancels() {
        let mut port = port("\n  tiger \n");
        assert_eq!(port.request_full_word(), None);
        assert_eq!(port.request_full_word().as_deref(), Some("tiger"));
    }

    #[test]
    fn category_prompt_parses_choice() {
        let categories = vec!["Animals".to_string(), "Science".to_string()];
        let mut port = port("science\n\n");
        assert_eq!(
            port.prompt_category(&categories),
            CategoryChoice::Named("Science".to_string())
        );
        assert_eq!(port.prompt_category(&categories), CategoryChoice::All);
        assert!(output(port).contains("Animals, Science"));
    }

    #[test]
    fn plays_a_round_through_the_console() {
        let mut port = port("o\nguess\nowl\n");
        let result = RoundEngine::new(Word::new("owl").unwrap(), "Animals", &mut port).play();

        assert!(result.outcome.is_win());
        let text = output(port);
        assert!(text.contains("_ _ _"));
        assert!(text.contains("o _ _"));
        assert!(text.contains("Full-word guess correct!"));
        assert!(text.contains("The word was 'owl'"));
    }
}
