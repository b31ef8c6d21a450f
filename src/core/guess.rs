//! Guess input classification
//!
//! Turns raw player input into a typed guess before the round engine applies it.

use std::fmt;

/// Command word that introduces a full-word guess
pub const GUESS_COMMAND: &str = "guess";

/// Classified player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessInput {
    /// Nothing left after trimming
    Empty,
    /// A single alphabetic character
    Letter(char),
    /// The `guess` command, with the inline word if one was given
    FullWord(Option<String>),
    /// Anything else
    Invalid,
}

impl GuessInput {
    /// Classify raw input
    ///
    /// # Examples
    /// ```
    /// use hangman::core::GuessInput;
    ///
    /// assert_eq!(GuessInput::parse("  E "), GuessInput::Letter('e'));
    /// assert_eq!(
    ///     GuessInput::parse("guess Tiger"),
    ///     GuessInput::FullWord(Some("tiger".to_string()))
    /// );
    /// assert_eq!(GuessInput::parse("guess"), GuessInput::FullWord(None));
    /// assert_eq!(GuessInput::parse("42"), GuessInput::Invalid);
    /// ```
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let input = normalize(raw);
        if input.is_empty() {
            return Self::Empty;
        }

        // The command is the whole first token: `guesswork` is not `guess work`
        let mut parts = input.splitn(2, char::is_whitespace);
        if parts.next() == Some(GUESS_COMMAND) {
            let inline = parts
                .next()
                .map(str::trim)
                .filter(|rest| !rest.is_empty())
                .map(str::to_string);
            return Self::FullWord(inline);
        }

        let mut chars = input.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_alphabetic() => Self::Letter(c),
            _ => Self::Invalid,
        }
    }
}

/// Trim surrounding whitespace and lowercase
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// True when a full-word attempt is made of ASCII letters only
#[must_use]
pub fn is_alphabetic_word(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_ascii_alphabetic())
}

/// One entry of the chronological guess trace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    /// 1-based position in the round
    pub sequence: usize,
    pub text: String,
    pub correct: bool,
}

impl fmt::Display for GuessRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.correct { "Correct" } else { "Wrong" };
        write!(f, "{}. {}  -> {status}", self.sequence, self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_empty_and_whitespace() {
        assert_eq!(GuessInput::parse(""), GuessInput::Empty);
        assert_eq!(GuessInput::parse("   \t "), GuessInput::Empty);
    }

    #[test]
    fn parse_single_letter_normalized() {
        assert_eq!(GuessInput::parse("a"), GuessInput::Letter('a'));
        assert_eq!(GuessInput::parse(" Q\n"), GuessInput::Letter('q'));
    }

    #[test]
    fn parse_rejects_non_letters() {
        assert_eq!(GuessInput::parse("7"), GuessInput::Invalid);
        assert_eq!(GuessInput::parse("?"), GuessInput::Invalid);
        assert_eq!(GuessInput::parse("ab"), GuessInput::Invalid);
        assert_eq!(GuessInput::parse("é"), GuessInput::Invalid);
    }

    #[test]
    fn parse_guess_command() {
        assert_eq!(GuessInput::parse("GUESS"), GuessInput::FullWord(None));
        assert_eq!(GuessInput::parse("guess   "), GuessInput::FullWord(None));
        assert_eq!(
            GuessInput::parse("guess  Koala "),
            GuessInput::FullWord(Some("koala".to_string()))
        );
    }

    #[test]
    fn parse_guess_keeps_multiword_remainder() {
        // Validation of the remainder happens in the engine
        assert_eq!(
            GuessInput::parse("guess new zealand"),
            GuessInput::FullWord(Some("new zealand".to_string()))
        );
    }

    #[test]
    fn guess_prefix_is_not_a_command() {
        assert_eq!(GuessInput::parse("guesswork"), GuessInput::Invalid);
    }

    #[test]
    fn alphabetic_word_check() {
        assert!(is_alphabetic_word("tiger"));
        assert!(!is_alphabetic_word(""));
        assert!(!is_alphabetic_word("ti ger"));
        assert!(!is_alphabetic_word("t1ger"));
    }

    #[test]
    fn guess_record_display() {
        let hit = GuessRecord {
            sequence: 1,
            text: "e".to_string(),
            correct: true,
        };
        let miss = GuessRecord {
            sequence: 2,
            text: "zebra".to_string(),
            correct: false,
        };
        assert_eq!(hit.to_string(), "1. e  -> Correct");
        assert_eq!(miss.to_string(), "2. zebra  -> Wrong");
    }
}
