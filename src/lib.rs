//! Hangman
//!
//! A console word-guessing game with word categories, scoring, per-round log
//! files and cumulative statistics.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::core::Word;
//! use hangman::engine::{RoundEngine, ScriptedPort};
//!
//! // Play a round with scripted input
//! let word = Word::new("cat").unwrap();
//! let mut port = ScriptedPort::new(["c", "a", "t"]);
//! let result = RoundEngine::new(word, "Animals", &mut port).play();
//!
//! assert!(result.outcome.is_win());
//! assert_eq!(result.score, 60);
//! ```

// Core domain types
pub mod core;

// Round state machine
pub mod engine;

// Cumulative statistics
pub mod stats;

// Per-round log files
pub mod logbook;

// Word lists and the word pool
pub mod wordlists;

// Paths and session settings
pub mod config;

// Diagnostic tracing
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
