//! Round outcome

use serde::{Deserialize, Serialize};
use std::fmt;

/// Terminal classification of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Loss,
    Quit,
}

impl Outcome {
    /// Label used in logs and messages
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Win => "Win",
            Self::Loss => "Loss",
            Self::Quit => "Quit",
        }
    }

    /// Whether the outcome adds to the win count
    ///
    /// Quit counts as a loss wherever wins and losses are tallied.
    #[must_use]
    pub const fn is_win(self) -> bool {
        matches!(self, Self::Win)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
