//! Round engine
//!
//! The guess/reveal state machine and the port it talks through.

mod port;
mod round;
mod scripted;

pub use port::{InteractionPort, RoundView};
pub use round::{GuessEffect, MAX_WRONG, RoundEngine, RoundPhase, RoundResult, RoundState};
pub use scripted::ScriptedPort;
