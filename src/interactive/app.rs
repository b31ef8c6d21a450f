//! TUI application state and the terminal port

use crate::commands::{CategoryChoice, SessionPort, run_session};
use crate::config::SessionConfig;
use crate::core::Word;
use crate::engine::{InteractionPort, RoundView};
use crate::output::print_stats;
use crate::stats::CumulativeStats;
use anyhow::{Result, anyhow};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use std::io;
use tracing::warn;

/// Messages kept on screen
const MESSAGE_LIMIT: usize = 8;

/// Source of key presses
pub trait KeySource {
    /// Block until the next key press
    ///
    /// # Errors
    ///
    /// Returns an error if no further key can be read.
    fn next_key(&mut self) -> Result<KeyEvent>;
}

/// Key presses from the real terminal
pub struct CrosstermKeys;

impl KeySource for CrosstermKeys {
    fn next_key(&mut self) -> Result<KeyEvent> {
        loop {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (fixes Windows double-input bug)
                if key.kind == KeyEventKind::Press {
                    return Ok(key);
                }
            }
        }
    }
}

/// What the input box is collecting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Category,
    Guess,
    FullWord,
    Confirm,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Everything the screen shows
#[derive(Debug, Clone)]
pub struct App {
    pub view: Option<RoundView>,
    pub source: Option<String>,
    pub word_length: Option<usize>,
    /// The answer, once the round is over
    pub revealed: Option<String>,
    pub stats: CumulativeStats,
    pub categories: Vec<String>,
    pub messages: Vec<Message>,
    pub input_mode: InputMode,
    pub prompt: String,
    pub input_buffer: String,
    pub should_exit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    #[must_use]
    pub fn new() -> Self {
        Self {
            view: None,
            source: None,
            word_length: None,
            revealed: None,
            stats: CumulativeStats::default(),
            categories: Vec::new(),
            messages: Vec::new(),
            input_mode: InputMode::Category,
            prompt: String::new(),
            input_buffer: String::new(),
            should_exit: false,
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MESSAGE_LIMIT {
            self.messages.remove(0);
        }
    }
}

/// Session port drawing to a ratatui terminal
///
/// A draw or key failure is stored and from then on every prompt answers as
/// if the player quit, so the session unwinds normally.
pub struct TuiPort<B: Backend, K: KeySource> {
    terminal: Terminal<B>,
    keys: K,
    app: App,
    error: Option<anyhow::Error>,
}

impl<B: Backend, K: KeySource> TuiPort<B, K> {
    pub fn new(terminal: Terminal<B>, keys: K) -> Self {
        Self {
            terminal,
            keys,
            app: App::new(),
            error: None,
        }
    }

    #[must_use]
    pub const fn app(&self) -> &App {
        &self.app
    }

    pub const fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }

    /// The first terminal failure, if any
    pub fn take_error(&mut self) -> Option<anyhow::Error> {
        self.error.take()
    }

    const fn halted(&self) -> bool {
        self.app.should_exit || self.error.is_some()
    }

    fn fail(&mut self, err: anyhow::Error) {
        warn!(error = %err, "terminal failure, ending session");
        if self.error.is_none() {
            self.error = Some(err);
        }
    }

    fn draw(&mut self) {
        if self.error.is_some() {
            return;
        }
        let app = &self.app;
        let drawn = self
            .terminal
            .draw(|f| super::rendering::ui(f, app))
            .map(|_| ());
        if let Err(err) = drawn {
            self.fail(err.into());
        }
    }

    /// Collect one line of input; `None` on cancel or exit
    fn read_line(&mut self, mode: InputMode, prompt: &str) -> Option<String> {
        if self.halted() {
            return None;
        }
        self.app.input_mode = mode;
        self.app.prompt = prompt.to_string();
        self.app.input_buffer.clear();

        loop {
            self.draw();
            if self.halted() {
                return None;
            }
            let key = match self.keys.next_key() {
                Ok(key) => key,
                Err(err) => {
                    self.fail(err);
                    return None;
                }
            };

            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.app.should_exit = true;
                    return None;
                }
                KeyCode::Esc if mode == InputMode::Guess => self.app.input_buffer.clear(),
                KeyCode::Esc => return None,
                KeyCode::Enter => {
                    let line = std::mem::take(&mut self.app.input_buffer);
                    return Some(line.trim().to_string());
                }
                KeyCode::Backspace => {
                    self.app.input_buffer.pop();
                }
                KeyCode::Char(c) => self.app.input_buffer.push(c),
                _ => {}
            }
        }
    }

    fn confirm(&mut self, prompt: &str) -> bool {
        self.read_line(InputMode::Confirm, prompt)
            .is_some_and(|answer| matches!(answer.to_lowercase().as_str(), "y" | "yes"))
    }
}

impl<B: Backend, K: KeySource> InteractionPort for TuiPort<B, K> {
    fn show_round_state(&mut self, view: &RoundView) {
        self.app.view = Some(view.clone());
        self.draw();
    }

    fn request_guess(&mut self) -> Option<String> {
        loop {
            let line = self.read_line(InputMode::Guess, " Letter, 'guess <word>', or 'quit' ")?;
            if !line.eq_ignore_ascii_case("quit") {
                return Some(line);
            }
            if self.confirm(" Quit this round? (y/n) ") {
                return None;
            }
            self.app
                .add_message("Continuing the round.", MessageStyle::Info);
        }
    }

    fn request_full_word(&mut self) -> Option<String> {
        self.read_line(InputMode::FullWord, " Full-word guess | ESC to cancel ")
            .filter(|word| !word.is_empty())
    }

    fn notify(&mut self, message: &str) {
        self.app.add_message(message, MessageStyle::Info);
    }

    fn announce_win(&mut self, word: &Word, score: u32) {
        self.app.revealed = Some(word.text().to_string());
        self.app.add_message(
            &format!("You guessed it! '{word}' earns {score} points."),
            MessageStyle::Success,
        );
    }

    fn announce_loss(&mut self, word: &Word) {
        self.app.revealed = Some(word.text().to_string());
        self.app
            .add_message(&format!("Out of attempts. The word was '{word}'."), MessageStyle::Error);
    }
}

impl<B: Backend, K: KeySource> SessionPort for TuiPort<B, K> {
    fn welcome(&mut self) {
        self.app.add_message(
            "Welcome to Hangman! Pick a category to start.",
            MessageStyle::Info,
        );
    }

    fn show_stats(&mut self, stats: &CumulativeStats) {
        self.app.stats = stats.clone();
    }

    fn prompt_category(&mut self, categories: &[String]) -> CategoryChoice {
        self.app.categories = categories.to_vec();
        self.read_line(
            InputMode::Category,
            " Category | Enter for all, 'quit' to exit ",
        )
        .map_or(CategoryChoice::Quit, |input| {
            CategoryChoice::parse(&input, categories)
        })
    }

    fn new_word_info(&mut self, source: &str, length: usize) {
        self.app.view = None;
        self.app.revealed = None;
        self.app.source = Some(source.to_string());
        self.app.word_length = Some(length);
        self.app.add_message(
            &format!("New word from {source}: {length} letters"),
            MessageStyle::Info,
        );
    }

    fn play_again(&mut self) -> bool {
        self.confirm(" Play again? (y/n) ")
    }

    fn farewell(&mut self, message: &str) {
        self.app.add_message(message, MessageStyle::Success);
        self.draw();
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails, the session cannot be
/// recorded, or the terminal fails mid-session.
pub fn run_tui(config: &SessionConfig) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    let mut port = TuiPort::new(terminal, CrosstermKeys);
    let res = run_session(&mut port, config);
    let terminal_error = port.take_error();

    // Restore terminal
    disable_raw_mode()?;
    let terminal = port.terminal_mut();
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    let summary = res?;
    if let Some(err) = terminal_error {
        return Err(anyhow!("terminal failure: {err}"));
    }
    print_stats(&summary.stats);
    Ok(())
}
