//! Category-aware word pool backed by a words directory
//!
//! Layout:
//! - `<words_dir>/categories/<Name>.txt`: one category per file
//! - `<words_dir>/words.txt`: the aggregated "all words" pool

use super::DEFAULT_CATEGORIES;
use super::loader::{load_from_file, write_to_file};
use crate::core::Word;
use anyhow::{Context, Result};
use rand::Rng;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashMap;
use std::collections::BTreeSet;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Label reported when a word comes from the aggregated pool
pub const ALL_WORDS_LABEL: &str = "all";

/// Upper bound on suffix rounds in [`expand`]
pub const MAX_EXPANSION_ROUNDS: usize = 2000;

/// Base words used when there is nothing to expand from
const FALLBACK_WORDS: &[&str] = &[
    "hangman",
    "python",
    "programming",
    "science",
    "country",
    "animal",
    "computer",
    "network",
];

/// Error type for word selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordPoolError {
    /// The chosen pool has no words
    NoWordsAvailable { pool: String },
}

impl fmt::Display for WordPoolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWordsAvailable { pool } => {
                write!(f, "No words available in pool '{pool}'")
            }
        }
    }
}

impl std::error::Error for WordPoolError {}

/// Supplies target words for new rounds
pub trait WordSource {
    /// Pick a word from `category`, or from every word when `None` or unknown
    ///
    /// Returns the word and the label of the pool it came from.
    ///
    /// # Errors
    ///
    /// Returns `WordPoolError::NoWordsAvailable` if the chosen pool is empty.
    fn next_word(&mut self, category: Option<&str>) -> Result<(Word, String), WordPoolError>;
}

/// Word pool loaded from a words directory
#[derive(Debug, Clone)]
pub struct WordPool {
    words_file: PathBuf,
    categories: FxHashMap<String, Vec<String>>,
    all_words: Vec<String>,
}

impl WordPool {
    /// Open a words directory, seeding default categories where missing
    ///
    /// Aggregates every category plus `words.txt` into the "all" pool and
    /// writes the result back to `words.txt`.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or its files cannot be created,
    /// read or written.
    pub fn open(words_dir: &Path) -> Result<Self> {
        let categories_dir = words_dir.join("categories");
        fs::create_dir_all(&categories_dir)
            .with_context(|| format!("create {}", categories_dir.display()))?;
        seed_default_categories(&categories_dir)?;

        let categories = load_categories(&categories_dir)?;
        let words_file = words_dir.join("words.txt");

        let mut aggregated: BTreeSet<String> =
            categories.values().flatten().cloned().collect();
        if words_file.exists() {
            let extra = load_from_file(&words_file)
                .with_context(|| format!("read {}", words_file.display()))?;
            aggregated.extend(extra);
        }

        let pool = Self {
            words_file,
            categories,
            all_words: aggregated.into_iter().collect(),
        };
        pool.persist()?;

        info!(
            categories = pool.categories.len(),
            words = pool.all_words.len(),
            "word pool loaded"
        );
        Ok(pool)
    }

    /// Build a pool in memory, without a backing directory
    ///
    /// Nothing is persisted by [`WordPool::ensure_minimum_words`] for such a pool.
    #[must_use]
    pub fn from_categories<I, S>(categories: I) -> Self
    where
        I: IntoIterator<Item = (S, Vec<String>)>,
        S: Into<String>,
    {
        let categories: FxHashMap<String, Vec<String>> = categories
            .into_iter()
            .map(|(name, words)| (name.into(), words))
            .collect();
        let all_words = categories
            .values()
            .flatten()
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        Self {
            words_file: PathBuf::new(),
            categories,
            all_words,
        }
    }

    /// Category names, sorted
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        let mut names: Vec<String> = self.categories.keys().cloned().collect();
        names.sort();
        names
    }

    /// Words in a category, matched case-insensitively
    #[must_use]
    pub fn category_words(&self, name: &str) -> Option<&[String]> {
        self.categories
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, words)| words.as_slice())
    }

    /// The aggregated pool
    #[must_use]
    pub fn all_words(&self) -> &[String] {
        &self.all_words
    }

    /// Pad the aggregated pool to at least `min_words` entries
    ///
    /// Returns how many synthetic words were added.
    ///
    /// # Errors
    ///
    /// Returns an error if `words.txt` cannot be written.
    pub fn ensure_minimum_words(&mut self, min_words: usize) -> Result<usize> {
        if self.all_words.len() >= min_words {
            return Ok(0);
        }

        let before = self.all_words.len();
        let expanded = expand(&self.all_words, min_words);
        if expanded.len() < min_words {
            warn!(
                target = min_words,
                reached = expanded.len(),
                "word pool could not reach minimum size"
            );
        }
        self.all_words = expanded.into_iter().collect();
        self.persist()?;

        let added = self.all_words.len() - before;
        info!(added, total = self.all_words.len(), "word pool padded");
        Ok(added)
    }

    /// Pick a word using the given random source
    ///
    /// # Errors
    ///
    /// Returns `WordPoolError::NoWordsAvailable` if the chosen pool is empty.
    pub fn pick<R: Rng + ?Sized>(
        &self,
        category: Option<&str>,
        rng: &mut R,
    ) -> Result<(Word, String), WordPoolError> {
        let named = category.and_then(|name| {
            self.categories
                .iter()
                .find(|(key, _)| key.eq_ignore_ascii_case(name))
        });

        let (pool, label) = match named {
            Some((name, words)) => (words.as_slice(), name.clone()),
            None => (self.all_words.as_slice(), ALL_WORDS_LABEL.to_string()),
        };

        pool.choose(rng)
            .and_then(|text| Word::new(text.as_str()).ok())
            .map(|word| {
                debug!(source = %label, "word picked");
                (word, label.clone())
            })
            .ok_or(WordPoolError::NoWordsAvailable { pool: label })
    }

    fn persist(&self) -> Result<()> {
        if self.words_file.as_os_str().is_empty() {
            return Ok(());
        }
        write_to_file(&self.words_file, &self.all_words)
            .with_context(|| format!("write {}", self.words_file.display()))
    }
}

impl WordSource for WordPool {
    fn next_word(&mut self, category: Option<&str>) -> Result<(Word, String), WordPoolError> {
        self.pick(category, &mut rand::rng())
    }
}

/// Grow `base` to `target` entries with deterministic alphabetic variants
///
/// Round `n` appends the `n`-th suffix (`a`, `b`, ..., `z`, `aa`, ...) to every
/// base word in sorted order, stopping as soon as `target` is reached or after
/// [`MAX_EXPANSION_ROUNDS`] rounds. An empty base falls back to a few built-in
/// words. Base words are always kept.
///
/// # Examples
/// ```
/// use hangman::wordlists::expand;
///
/// let words = expand(&["cat".to_string()], 3);
/// let words: Vec<&str> = words.iter().map(String::as_str).collect();
/// assert_eq!(words, vec!["cat", "cata", "catb"]);
/// ```
#[must_use]
pub fn expand(base: &[String], target: usize) -> BTreeSet<String> {
    let mut words: BTreeSet<String> = base.iter().cloned().collect();
    let seeds: Vec<String> = if words.is_empty() {
        FALLBACK_WORDS.iter().map(|w| (*w).to_string()).collect()
    } else {
        words.iter().cloned().collect()
    };
    if words.is_empty() {
        words.extend(seeds.iter().cloned());
    }

    'rounds: for round in 1..=MAX_EXPANSION_ROUNDS {
        if words.len() >= target {
            break;
        }
        let suffix = alpha_suffix(round);
        for seed in &seeds {
            words.insert(format!("{seed}{suffix}"));
            if words.len() >= target {
                break 'rounds;
            }
        }
    }
    words
}

/// Bijective base-26 letters: 1 -> `a`, 26 -> `z`, 27 -> `aa`
fn alpha_suffix(mut n: usize) -> String {
    let mut letters = Vec::new();
    while n > 0 {
        n -= 1;
        letters.push(b'a' + (n % 26) as u8);
        n /= 26;
    }
    letters.reverse();
    String::from_utf8(letters).unwrap_or_default()
}

fn seed_default_categories(categories_dir: &Path) -> Result<()> {
    for (name, words) in DEFAULT_CATEGORIES {
        let path = categories_dir.join(format!("{name}.txt"));
        if path.exists() {
            continue;
        }
        let words: Vec<String> = words.iter().map(|w| (*w).to_string()).collect();
        write_to_file(&path, &words).with_context(|| format!("write {}", path.display()))?;
        debug!(category = name, "default category written");
    }
    Ok(())
}

fn load_categories(categories_dir: &Path) -> Result<FxHashMap<String, Vec<String>>> {
    let mut categories = FxHashMap::default();
    let entries = fs::read_dir(categories_dir)
        .with_context(|| format!("list {}", categories_dir.display()))?;

    for entry in entries {
        let path = entry
            .with_context(|| format!("list {}", categories_dir.display()))?
            .path();
        if path.extension().and_then(|e| e.to_str()) != Some("txt") {
            continue;
        }
        let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };

        let words = load_from_file(&path).with_context(|| format!("read {}", path.display()))?;
        if words.is_empty() {
            debug!(category = name, "skipping empty category");
            continue;
        }
        categories.insert(name.to_string(), words);
    }
    Ok(categories)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn strings(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| (*w).to_string()).collect()
    }

    fn sample_pool() -> WordPool {
        WordPool::from_categories([
            ("Animals", strings(&["otter", "seal"])),
            ("Science", strings(&["optics"])),
        ])
    }

    #[test]
    fn alpha_suffix_sequence() {
        assert_eq!(alpha_suffix(1), "a");
        assert_eq!(alpha_suffix(26), "z");
        assert_eq!(alpha_suffix(27), "aa");
        assert_eq!(alpha_suffix(28), "ab");
        assert_eq!(alpha_suffix(702), "zz");
        assert_eq!(alpha_suffix(703), "aaa");
    }

    #[test]
    fn expand_reaches_target_deterministically() {
        let base = strings(&["lion", "bee"]);
        let first = expand(&base, 7);
        let second = expand(&base, 7);

        assert_eq!(first.len(), 7);
        assert_eq!(first, second);
        assert!(first.contains("lion"));
        assert!(first.contains("bee"));
        assert!(first.contains("beea"));
        assert!(first.contains("liona"));
        assert!(first.iter().all(|w| w.chars().all(|c| c.is_ascii_lowercase())));
    }

    #[test]
    fn expand_keeps_larger_base() {
        let base = strings(&["a", "b", "c"]);
        assert_eq!(expand(&base, 2).len(), 3);
    }

    #[test]
    fn expand_empty_base_uses_fallback() {
        let words = expand(&[], 10);
        assert_eq!(words.len(), 10);
        assert!(words.contains("hangman"));
    }

    #[test]
    fn expand_terminates_on_unreachable_target() {
        let base = strings(&["x"]);
        let words = expand(&base, usize::MAX);
        assert_eq!(words.len(), MAX_EXPANSION_ROUNDS + 1);
    }

    #[test]
    fn categories_sorted() {
        assert_eq!(sample_pool().categories(), vec!["Animals", "Science"]);
    }

    #[test]
    fn pick_from_named_category() {
        let pool = sample_pool();
        let mut rng = StdRng::seed_from_u64(7);
        let (word, label) = pool.pick(Some("animals"), &mut rng).unwrap();
        assert_eq!(label, "Animals");
        assert!(["otter", "seal"].contains(&word.text()));
    }

    #[test]
    fn unknown_category_falls_back_to_all() {
        let pool = sample_pool();
        let mut rng = StdRng::seed_from_u64(7);
        let (_, label) = pool.pick(Some("Planets"), &mut rng).unwrap();
        assert_eq!(label, ALL_WORDS_LABEL);

        let (_, label) = pool.pick(None, &mut rng).unwrap();
        assert_eq!(label, ALL_WORDS_LABEL);
    }

    #[test]
    fn empty_pool_is_an_error() {
        let pool = WordPool::from_categories(Vec::<(String, Vec<String>)>::new());
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            pool.pick(None, &mut rng).unwrap_err(),
            WordPoolError::NoWordsAvailable {
                pool: ALL_WORDS_LABEL.to_string()
            }
        );
    }

    #[test]
    fn open_seeds_defaults_and_persists_all_words() {
        let temp = tempfile::tempdir().expect("tempdir");
        let words_dir = temp.path().join("words");
        let pool = WordPool::open(&words_dir).expect("open");

        let expected: Vec<String> = DEFAULT_CATEGORIES
            .iter()
            .map(|(name, _)| (*name).to_string())
            .collect();
        assert_eq!(pool.categories(), expected);
        assert!(words_dir.join("categories").join("Animals.txt").is_file());

        let on_disk = load_from_file(words_dir.join("words.txt")).unwrap();
        assert_eq!(on_disk, pool.all_words());
    }

    #[test]
    fn open_keeps_user_categories_and_extra_words() {
        let temp = tempfile::tempdir().expect("tempdir");
        let words_dir = temp.path().join("words");
        let categories_dir = words_dir.join("categories");
        fs::create_dir_all(&categories_dir).unwrap();
        fs::write(categories_dir.join("Animals.txt"), "Yak\nemu\n").unwrap();
        fs::write(categories_dir.join("Empty.txt"), "\n 42 \n").unwrap();
        fs::write(words_dir.join("words.txt"), "zephyr\n").unwrap();

        let pool = WordPool::open(&words_dir).expect("open");

        assert_eq!(
            pool.category_words("Animals").unwrap(),
            &strings(&["emu", "yak"])[..]
        );
        assert!(pool.category_words("Empty").is_none());
        assert!(pool.all_words().contains(&"zephyr".to_string()));
        assert!(pool.all_words().contains(&"yak".to_string()));
    }

    #[test]
    fn ensure_minimum_pads_and_persists() {
        let temp = tempfile::tempdir().expect("tempdir");
        let words_dir = temp.path().join("words");
        let mut pool = WordPool::open(&words_dir).expect("open");
        let before = pool.all_words().len();

        let added = pool.ensure_minimum_words(before + 25).unwrap();
        assert_eq!(added, 25);
        assert_eq!(pool.all_words().len(), before + 25);

        let on_disk = load_from_file(words_dir.join("words.txt")).unwrap();
        assert_eq!(on_disk.len(), before + 25);

        // Already large enough
        assert_eq!(pool.ensure_minimum_words(10).unwrap(), 0);
    }
}
