//! Gallows drawings, one per wrong guess

use crate::engine::MAX_WRONG;

/// Gallows art indexed by stage, `0..=MAX_WRONG`
pub const STAGES: [&str; MAX_WRONG as usize + 1] = [
    "  +---+\n  |   |\n      |\n      |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n      |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n  |   |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n /|   |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n /|\\  |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n /|\\  |\n /    |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n /|\\  |\n / \\  |\n      |\n=========",
];

/// Drawing for a stage, clamped to the last one
#[must_use]
pub fn gallows(stage: usize) -> &'static str {
    STAGES[stage.min(STAGES.len() - 1)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_stage_per_wrong_guess() {
        assert_eq!(STAGES.len(), MAX_WRONG as usize + 1);
    }

    #[test]
    fn stages_have_same_height() {
        let heights: Vec<usize> = STAGES.iter().map(|s| s.lines().count()).collect();
        assert!(heights.windows(2).all(|pair| pair[0] == pair[1]));
    }

    #[test]
    fn stage_is_clamped() {
        assert_eq!(gallows(0), STAGES[0]);
        assert_eq!(gallows(99), STAGES[STAGES.len() - 1]);
    }

    #[test]
    fn empty_gallows_has_no_figure() {
        assert!(!gallows(0).contains('O'));
        assert!(gallows(MAX_WRONG as usize).contains("/ \\"));
    }
}
