//! Session configuration and on-disk layout

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Default size the aggregated word pool is padded to
pub const DEFAULT_MIN_WORDS: usize = 1000;

/// Where words, logs and stats live under a data directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GamePaths {
    pub data_dir: PathBuf,
    /// Category files and `words.txt`
    pub words_dir: PathBuf,
    /// Per-round artifacts and `stats.json`
    pub log_dir: PathBuf,
    pub stats_file: PathBuf,
}

impl GamePaths {
    #[must_use]
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        let data_dir = data_dir.into();
        let words_dir = data_dir.join("words");
        let log_dir = data_dir.join("game_log");
        let stats_file = log_dir.join("stats.json");
        Self {
            data_dir,
            words_dir,
            log_dir,
            stats_file,
        }
    }

    /// Create the words and log directories if missing
    ///
    /// # Errors
    ///
    /// Returns an error if either directory cannot be created.
    pub fn ensure_dirs(&self) -> Result<()> {
        for dir in [&self.words_dir, &self.log_dir] {
            create_dir(dir)?;
        }
        Ok(())
    }
}

fn create_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))
}

/// Settings for one play session
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub paths: GamePaths,
    pub min_words: usize,
    /// Category used for every round instead of prompting
    pub category: Option<String>,
}

impl SessionConfig {
    #[must_use]
    pub fn new(paths: GamePaths) -> Self {
        Self {
            paths,
            min_words: DEFAULT_MIN_WORDS,
            category: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_layout() {
        let paths = GamePaths::new("/tmp/hangman");
        assert!(paths.words_dir.ends_with("hangman/words"));
        assert!(paths.log_dir.ends_with("hangman/game_log"));
        assert!(paths.stats_file.ends_with("game_log/stats.json"));
    }

    #[test]
    fn ensure_dirs_creates_both() {
        let temp = tempfile::tempdir().expect("tempdir");
        let paths = GamePaths::new(temp.path().join("data"));
        paths.ensure_dirs().unwrap();
        assert!(paths.words_dir.is_dir());
        assert!(paths.log_dir.is_dir());
    }

    #[test]
    fn session_defaults() {
        let config = SessionConfig::new(GamePaths::new("."));
        assert_eq!(config.min_words, DEFAULT_MIN_WORDS);
        assert!(config.category.is_none());
    }
}
