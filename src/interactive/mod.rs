//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{App, CrosstermKeys, InputMode, KeySource, Message, MessageStyle, TuiPort, run_tui};
pub use rendering::ui;
