//! Word lists for Hangman
//!
//! Default categories are embedded at build time and seeded onto disk; the
//! [`WordPool`] loads whatever categories the words directory holds.

mod embedded;
pub mod loader;
mod pool;

pub use embedded::DEFAULT_CATEGORIES;
pub use pool::{
    ALL_WORDS_LABEL, MAX_EXPANSION_ROUNDS, WordPool, WordPoolError, WordSource, expand,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_category_names() {
        let names: Vec<&str> = DEFAULT_CATEGORIES.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, vec!["Animals", "Countries", "Programming", "Science"]);
    }

    #[test]
    fn default_words_are_valid() {
        use crate::core::Word;

        for (name, words) in DEFAULT_CATEGORIES {
            for &word in *words {
                assert!(Word::new(word).is_ok(), "'{word}' in '{name}' is not a valid word");
            }
        }
    }

    #[test]
    fn default_categories_are_sorted_and_unique() {
        for (name, words) in DEFAULT_CATEGORIES {
            assert!(
                words.windows(2).all(|pair| pair[0] < pair[1]),
                "category '{name}' is not sorted and unique"
            );
        }
    }
}
