//! Per-round log artifacts under the game log directory
//!
//! Each finished round gets its own `game<N>/log.txt`. Numbers come from the
//! directories already present: the largest numeric identifier plus one.
//! Artifacts are written once and never touched again.

mod render;

pub use render::render_round_log;

use crate::engine::RoundResult;
use crate::stats::CumulativeStats;
use anyhow::{Context, Result, bail};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Directory name prefix for round artifacts
pub const ARTIFACT_PREFIX: &str = "game";

/// File holding the rendered log inside an artifact directory
pub const LOG_FILE_NAME: &str = "log.txt";

/// Give up after this many lost races for the same number
const MAX_CREATE_ATTEMPTS: u32 = 16;

/// Location of a written artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactRef {
    pub id: u64,
    pub name: String,
    pub log_path: PathBuf,
}

/// Writes round artifacts into one directory
#[derive(Debug, Clone)]
pub struct Logbook {
    dir: PathBuf,
}

impl Logbook {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Next artifact number, derived from existing artifact directories
    ///
    /// # Errors
    ///
    /// Returns an error if the directory exists but cannot be listed.
    pub fn next_id(&self) -> Result<u64> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(1),
            Err(err) => {
                return Err(err).with_context(|| format!("list {}", self.dir.display()));
            }
        };

        let mut max_id = 0;
        for entry in entries {
            let entry = entry.with_context(|| format!("list {}", self.dir.display()))?;
            if !entry.file_type().is_ok_and(|t| t.is_dir()) {
                continue;
            }
            if let Some(id) = entry.file_name().to_str().and_then(parse_artifact_id) {
                max_id = max_id.max(id);
            }
        }
        max_id
            .checked_add(1)
            .with_context(|| format!("artifact numbers exhausted in {}", self.dir.display()))
    }

    /// Render and persist the log for a finished round
    ///
    /// # Errors
    ///
    /// Returns an error if no fresh artifact directory can be created or the
    /// log cannot be written.
    pub fn record(&self, result: &RoundResult, prior: &CumulativeStats) -> Result<ArtifactRef> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("create log dir {}", self.dir.display()))?;

        let (id, dir) = self.claim_artifact_dir()?;
        let name = artifact_name(id);
        let text = render_round_log(result, prior, &name);
        let log_path = dir.join(LOG_FILE_NAME);
        write_new_file(&log_path, &text)?;

        info!(artifact = %name, outcome = %result.outcome, "round log written");
        Ok(ArtifactRef { id, name, log_path })
    }

    /// Create a directory that did not exist before, bumping the number on collision
    fn claim_artifact_dir(&self) -> Result<(u64, PathBuf)> {
        let mut id = self.next_id()?;
        for _ in 0..MAX_CREATE_ATTEMPTS {
            let dir = self.dir.join(artifact_name(id));
            match fs::create_dir(&dir) {
                Ok(()) => return Ok((id, dir)),
                Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
                    debug!(id, "artifact taken, trying next");
                    let Some(next) = id.checked_add(1) else {
                        bail!("artifact numbers exhausted in {}", self.dir.display());
                    };
                    id = next;
                }
                Err(err) => {
                    return Err(err).with_context(|| format!("create {}", dir.display()));
                }
            }
        }
        bail!(
            "could not claim a new artifact in {} after {MAX_CREATE_ATTEMPTS} attempts",
            self.dir.display()
        )
    }
}

/// Directory name for an artifact number
#[must_use]
pub fn artifact_name(id: u64) -> String {
    format!("{ARTIFACT_PREFIX}{id}")
}

/// Numeric identifier of an artifact directory name
///
/// Digits after the prefix are read in order; names without digits, or not
/// starting with the prefix, have no identifier.
///
/// # Examples
/// ```
/// use hangman::logbook::parse_artifact_id;
///
/// assert_eq!(parse_artifact_id("game12"), Some(12));
/// assert_eq!(parse_artifact_id("game_old"), None);
/// assert_eq!(parse_artifact_id("notes"), None);
/// ```
#[must_use]
pub fn parse_artifact_id(name: &str) -> Option<u64> {
    let rest = name.strip_prefix(ARTIFACT_PREFIX)?;
    let digits: String = rest.chars().filter(char::is_ascii_digit).collect();
    digits.parse().ok()
}

/// Write the full contents to a temporary sibling, then move it into place
fn write_new_file(path: &Path, contents: &str) -> Result<()> {
    let tmp = path.with_extension("tmp");
    let mut file = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&tmp)
        .with_context(|| format!("create {}", tmp.display()))?;
    file.write_all(contents.as_bytes())
        .and_then(|()| file.sync_all())
        .with_context(|| format!("write {}", tmp.display()))?;
    drop(file);

    if path.exists() {
        bail!("refusing to overwrite {}", path.display());
    }
    fs::rename(&tmp, path).with_context(|| format!("move log into {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Outcome, Word};
    use chrono::Local;

    fn loss(word: &str) -> RoundResult {
        RoundResult {
            word: Word::new(word).unwrap(),
            source: "all".to_string(),
            score: 0,
            outcome: Outcome::Loss,
            wrong_guesses: Vec::new(),
            guess_log: Vec::new(),
            attempts_remaining: 0,
            started_at: Local::now(),
        }
    }

    #[test]
    fn parse_ids() {
        assert_eq!(parse_artifact_id("game1"), Some(1));
        assert_eq!(parse_artifact_id("game007"), Some(7));
        assert_eq!(parse_artifact_id("game"), None);
        assert_eq!(parse_artifact_id("game-draft"), None);
        assert_eq!(parse_artifact_id("stats.json"), None);
    }

    #[test]
    fn missing_dir_starts_at_one() {
        let temp = tempfile::tempdir().expect("tempdir");
        let logbook = Logbook::new(temp.path().join("game_log"));
        assert_eq!(logbook.next_id().unwrap(), 1);
    }

    #[test]
    fn next_id_skips_gaps() {
        let temp = tempfile::tempdir().expect("tempdir");
        for name in ["game1", "game2", "game4"] {
            fs::create_dir(temp.path().join(name)).unwrap();
        }
        let logbook = Logbook::new(temp.path());
        assert_eq!(logbook.next_id().unwrap(), 5);
    }

    #[test]
    fn next_id_ignores_non_numeric_and_files() {
        let temp = tempfile::tempdir().expect("tempdir");
        fs::create_dir(temp.path().join("game3")).unwrap();
        fs::create_dir(temp.path().join("game_backup")).unwrap();
        fs::create_dir(temp.path().join("archive99")).unwrap();
        fs::write(temp.path().join("game50"), "not a dir").unwrap();
        fs::write(temp.path().join("stats.json"), "{}").unwrap();

        let logbook = Logbook::new(temp.path());
        assert_eq!(logbook.next_id().unwrap(), 4);
    }

    #[test]
    fn maximum_artifact_number_is_an_error() {
        let temp = tempfile::tempdir().expect("tempdir");
        fs::create_dir(temp.path().join(artifact_name(u64::MAX))).unwrap();
        let logbook = Logbook::new(temp.path());

        let err = logbook.next_id().unwrap_err();
        assert!(err.to_string().contains("artifact numbers exhausted"));
        assert!(logbook.record(&loss("gnu"), &CumulativeStats::default()).is_err());
        assert!(!temp.path().join("game0").exists());
    }

    #[test]
    fn record_creates_numbered_artifacts() {
        let temp = tempfile::tempdir().expect("tempdir");
        let logbook = Logbook::new(temp.path().join("game_log"));
        let prior = CumulativeStats::default();

        let first = logbook.record(&loss("seal"), &prior).unwrap();
        let second = logbook.record(&loss("crab"), &prior).unwrap();

        assert_eq!(first.name, "game1");
        assert_eq!(second.name, "game2");
        let text = fs::read_to_string(&second.log_path).unwrap();
        assert!(text.starts_with("Game: game2\n"));
        assert!(text.contains("Word: crab\n"));
        assert!(!second.log_path.with_extension("tmp").exists());
    }

    #[test]
    fn record_never_overwrites_existing_artifacts() {
        let temp = tempfile::tempdir().expect("tempdir");
        let existing = temp.path().join("game7");
        fs::create_dir(&existing).unwrap();
        fs::write(existing.join(LOG_FILE_NAME), "keep me").unwrap();

        let logbook = Logbook::new(temp.path());
        let artifact = logbook.record(&loss("eel"), &CumulativeStats::default()).unwrap();

        assert_eq!(artifact.id, 8);
        assert_eq!(fs::read_to_string(existing.join(LOG_FILE_NAME)).unwrap(), "keep me");
    }
}
