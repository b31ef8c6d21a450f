//! Word list loading utilities
//!
//! Reads line-oriented word files and cleans every entry down to lowercase
//! ASCII letters.

use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::Path;

/// Clean one raw line into a candidate word
///
/// Lowercases and drops every character that is not `a-z`. Returns `None`
/// when nothing is left.
///
/// # Examples
/// ```
/// use hangman::wordlists::loader::clean_word;
///
/// assert_eq!(clean_word(" New Zealand "), Some("newzealand".to_string()));
/// assert_eq!(clean_word("C++"), Some("c".to_string()));
/// assert_eq!(clean_word("42"), None);
/// ```
#[must_use]
pub fn clean_word(line: &str) -> Option<String> {
    let cleaned: String = line
        .trim()
        .to_lowercase()
        .chars()
        .filter(char::is_ascii_lowercase)
        .collect();
    (!cleaned.is_empty()).then_some(cleaned)
}

/// Clean, deduplicate and sort a list of raw entries
#[must_use]
pub fn words_from_lines<'a, I>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .filter_map(clean_word)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Load words from a file
///
/// Returns the cleaned, deduplicated and sorted entries, skipping blank lines.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use hangman::wordlists::loader::load_from_file;
///
/// let words = load_from_file("words/categories/Animals.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_lines(content.lines()))
}

/// Write one word per line
///
/// # Errors
///
/// Returns an I/O error if the file cannot be written.
pub fn write_to_file<P: AsRef<Path>>(path: P, words: &[String]) -> io::Result<()> {
    fs::write(path, words.join("\n"))
}
