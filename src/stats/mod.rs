//! Cumulative statistics across sessions
//!
//! [`CumulativeStats`] is a plain value: the session loads it once, folds each
//! finished round into it, and writes it back in full after every round.

use crate::core::Outcome;
use crate::engine::RoundResult;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, warn};

/// Aggregate record persisted as `stats.json`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CumulativeStats {
    pub games_played: u32,
    pub wins: u32,
    pub losses: u32,
    pub total_score: u64,
    /// Percentage, `0..=100`
    pub win_rate: f64,
    pub average_score_per_game: f64,
}

impl CumulativeStats {
    /// Fold one finished round into the totals
    #[must_use]
    pub fn fold(&self, result: &RoundResult) -> Self {
        self.record(result.outcome, result.score)
    }

    /// Fold an outcome and its score into the totals
    ///
    /// Anything other than a win counts as a loss, including a quit.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::Outcome;
    /// use hangman::stats::CumulativeStats;
    ///
    /// let stats = CumulativeStats::default()
    ///     .record(Outcome::Win, 47)
    ///     .record(Outcome::Quit, 0);
    /// assert_eq!(stats.games_played, 2);
    /// assert_eq!(stats.losses, 1);
    /// assert!((stats.win_rate - 50.0).abs() < f64::EPSILON);
    /// ```
    #[must_use]
    pub fn record(&self, outcome: Outcome, score: u32) -> Self {
        let mut next = self.clone();
        next.games_played += 1;
        if outcome.is_win() {
            next.wins += 1;
        } else {
            next.losses += 1;
        }
        next.total_score += u64::from(score);
        next.refresh_derived();
        next
    }

    /// Recompute win rate and average score from the counters
    fn refresh_derived(&mut self) {
        if self.games_played == 0 {
            self.win_rate = 0.0;
            self.average_score_per_game = 0.0;
        } else {
            let games = f64::from(self.games_played);
            self.win_rate = 100.0 * f64::from(self.wins) / games;
            self.average_score_per_game = self.total_score as f64 / games;
        }
    }
}

/// Load stats from a JSON file
///
/// A missing file yields empty stats. So does a file that cannot be parsed,
/// after logging a warning.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read.
pub fn load_stats(path: &Path) -> Result<CumulativeStats> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no stats yet");
            return Ok(CumulativeStats::default());
        }
        Err(err) => {
            return Err(err).with_context(|| format!("read stats {}", path.display()));
        }
    };

    match serde_json::from_str::<CumulativeStats>(&raw) {
        Ok(mut stats) => {
            stats.refresh_derived();
            Ok(stats)
        }
        Err(err) => {
            warn!(path = %path.display(), error = %err, "unreadable stats, starting fresh");
            Ok(CumulativeStats::default())
        }
    }
}

/// Overwrite the stats file with the full record
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the file
/// cannot be written.
pub fn save_stats(path: &Path, stats: &CumulativeStats) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create stats dir {}", parent.display()))?;
    }
    let mut buf = serde_json::to_string_pretty(stats)?;
    buf.push('\n');
    fs::write(path, buf).with_context(|| format!("write stats {}", path.display()))?;
    debug!(path = %path.display(), games = stats.games_played, "stats saved");
    Ok(())
}
