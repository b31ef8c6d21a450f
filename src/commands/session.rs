//! Play session
//!
//! Repeats rounds until the player quits: pick a category, draw a word, play
//! the round, write its log, fold and save the statistics.

use crate::config::SessionConfig;
use crate::core::Word;
use crate::engine::{InteractionPort, RoundEngine, RoundResult};
use crate::logbook::{ArtifactRef, Logbook};
use crate::stats::{CumulativeStats, load_stats, save_stats};
use crate::wordlists::{WordPool, WordSource};
use anyhow::{Context, Result};
use tracing::{info, warn};

/// Player's answer to the category prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryChoice {
    /// A known category, with its canonical name
    Named(String),
    /// Draw from every word
    All,
    /// Input matched no category; treated as `All`
    Unknown(String),
    /// End the session
    Quit,
}

impl CategoryChoice {
    /// Interpret category prompt input
    ///
    /// Blank input picks every word, `quit` ends the session, anything else is
    /// matched case-insensitively against `categories`.
    ///
    /// # Examples
    /// ```
    /// use hangman::commands::CategoryChoice;
    ///
    /// let categories = vec!["Animals".to_string()];
    /// assert_eq!(
    ///     CategoryChoice::parse("animals", &categories),
    ///     CategoryChoice::Named("Animals".to_string())
    /// );
    /// assert_eq!(CategoryChoice::parse("", &categories), CategoryChoice::All);
    /// assert_eq!(CategoryChoice::parse("QUIT", &categories), CategoryChoice::Quit);
    /// ```
    #[must_use]
    pub fn parse(input: &str, categories: &[String]) -> Self {
        let input = input.trim();
        if input.is_empty() {
            return Self::All;
        }
        if input.eq_ignore_ascii_case("quit") {
            return Self::Quit;
        }
        categories
            .iter()
            .find(|name| name.eq_ignore_ascii_case(input))
            .map_or_else(|| Self::Unknown(input.to_string()), |name| Self::Named(name.clone()))
    }
}

/// Session-level prompts on top of the round interaction
pub trait SessionPort: InteractionPort {
    fn welcome(&mut self);

    fn show_stats(&mut self, stats: &CumulativeStats);

    fn prompt_category(&mut self, categories: &[String]) -> CategoryChoice;

    /// A word was drawn from `source`; only its length is revealed
    fn new_word_info(&mut self, source: &str, length: usize);

    fn play_again(&mut self) -> bool;

    fn farewell(&mut self, message: &str);
}

/// A round after it has been logged and folded into the statistics
#[derive(Debug, Clone)]
pub struct RoundRecord {
    pub result: RoundResult,
    pub stats: CumulativeStats,
    pub artifact: ArtifactRef,
}

/// How a session ended
#[derive(Debug, Clone)]
pub struct SessionSummary {
    pub rounds: usize,
    pub stats: CumulativeStats,
}

/// Play one round, write its log and fold its outcome into `prior`
///
/// # Errors
///
/// Returns an error if the round log cannot be written.
pub fn play_round<P: InteractionPort + ?Sized>(
    word: Word,
    source: &str,
    port: &mut P,
    logbook: &Logbook,
    prior: &CumulativeStats,
) -> Result<RoundRecord> {
    let result = RoundEngine::new(word, source, port).play();
    let artifact = logbook.record(&result, prior)?;
    let stats = prior.fold(&result);
    Ok(RoundRecord {
        result,
        stats,
        artifact,
    })
}

/// Open the word pool for a session, padding it to the configured size
///
/// # Errors
///
/// Returns an error if the data directories or word files cannot be prepared.
pub fn open_word_pool(config: &SessionConfig) -> Result<WordPool> {
    config.paths.ensure_dirs()?;
    let mut pool = WordPool::open(&config.paths.words_dir)?;
    pool.ensure_minimum_words(config.min_words)?;
    Ok(pool)
}

/// Run a full session against the on-disk word pool
///
/// # Errors
///
/// See [`run_session_with`].
pub fn run_session<P: SessionPort>(port: &mut P, config: &SessionConfig) -> Result<SessionSummary> {
    let mut pool = open_word_pool(config)?;
    let categories = pool.categories();
    run_session_with(port, &mut pool, &categories, config)
}

/// Run a full session with an explicit word source
///
/// # Errors
///
/// Returns an error if stats cannot be loaded or saved, a round log cannot be
/// written, or the word source has no word for the chosen pool.
pub fn run_session_with<P, W>(
    port: &mut P,
    words: &mut W,
    categories: &[String],
    config: &SessionConfig,
) -> Result<SessionSummary>
where
    P: SessionPort,
    W: WordSource + ?Sized,
{
    let paths = &config.paths;
    paths.ensure_dirs()?;
    let logbook = Logbook::new(&paths.log_dir);
    let mut stats = load_stats(&paths.stats_file)?;
    let mut rounds = 0;

    port.welcome();

    loop {
        port.show_stats(&stats);

        let choice = match &config.category {
            Some(name) => CategoryChoice::parse(name, categories),
            None => port.prompt_category(categories),
        };
        let category = match choice {
            CategoryChoice::Quit => {
                port.farewell("Goodbye, thanks for playing!");
                break;
            }
            CategoryChoice::Named(name) => Some(name),
            CategoryChoice::All => None,
            CategoryChoice::Unknown(name) => {
                warn!(category = %name, "unknown category");
                port.notify(&format!(
                    "Category '{name}' not recognized; selecting from all categories."
                ));
                None
            }
        };

        let (word, source) = match words.next_word(category.as_deref()) {
            Ok(drawn) => drawn,
            Err(err) => {
                port.notify(&err.to_string());
                return Err(err).context("cannot start a round");
            }
        };
        port.new_word_info(&source, word.len());

        let record = play_round(word, &source, port, &logbook, &stats)?;
        rounds += 1;
        stats = record.stats;
        save_stats(&paths.stats_file, &stats)?;
        info!(
            artifact = %record.artifact.name,
            games = stats.games_played,
            "round recorded"
        );

        if !port.play_again() {
            port.farewell("Thanks for playing, see you next time!");
            break;
        }
    }

    Ok(SessionSummary { rounds, stats })
}
