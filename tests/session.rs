//! End-to-end sessions against a temporary data directory

use hangman::commands::{
    CategoryChoice, SessionPort, open_word_pool, run_session, run_session_with,
};
use hangman::config::{GamePaths, SessionConfig};
use hangman::core::Word;
use hangman::engine::{InteractionPort, RoundView, ScriptedPort};
use hangman::stats::{CumulativeStats, load_stats};
use hangman::wordlists::WordPool;
use std::collections::VecDeque;
use std::fs;

/// Answers session prompts from queues and plays rounds through a `ScriptedPort`
struct Player {
    round: ScriptedPort,
    categories: VecDeque<&'static str>,
    again: VecDeque<bool>,
    stats_seen: Vec<CumulativeStats>,
}

impl Player {
    fn new(guesses: &[&str], categories: &[&'static str], again: &[bool]) -> Self {
        Self {
            round: ScriptedPort::new(guesses.iter().copied()),
            categories: categories.iter().copied().collect(),
            again: again.iter().copied().collect(),
            stats_seen: Vec::new(),
        }
    }
}

impl InteractionPort for Player {
    fn show_round_state(&mut self, view: &RoundView) {
        self.round.show_round_state(view);
    }
    fn request_guess(&mut self) -> Option<String> {
        self.round.request_guess()
    }
    fn request_full_word(&mut self) -> Option<String> {
        self.round.request_full_word()
    }
    fn notify(&mut self, message: &str) {
        self.round.notify(message);
    }
    fn announce_win(&mut self, word: &Word, score: u32) {
        self.round.announce_win(word, score);
    }
    fn announce_loss(&mut self, word: &Word) {
        self.round.announce_loss(word);
    }
}

impl SessionPort for Player {
    fn welcome(&mut self) {}
    fn show_stats(&mut self, stats: &CumulativeStats) {
        self.stats_seen.push(stats.clone());
    }
    fn prompt_category(&mut self, categories: &[String]) -> CategoryChoice {
        self.categories
            .pop_front()
            .map_or(CategoryChoice::Quit, |input| {
                CategoryChoice::parse(input, categories)
            })
    }
    fn new_word_info(&mut self, _source: &str, _length: usize) {}
    fn play_again(&mut self) -> bool {
        self.again.pop_front().unwrap_or(false)
    }
    fn farewell(&mut self, _message: &str) {}
}

fn config(root: &std::path::Path, min_words: usize) -> SessionConfig {
    let mut config = SessionConfig::new(GamePaths::new(root));
    config.min_words = min_words;
    config
}

#[test]
fn opening_the_pool_seeds_and_pads_words() {
    let temp = tempfile::tempdir().expect("tempdir");
    let config = config(temp.path(), 500);

    let pool = open_word_pool(&config).unwrap();

    assert_eq!(
        pool.categories(),
        vec!["Animals", "Countries", "Programming", "Science"]
    );
    assert!(pool.all_words().len() >= 500);
    let categories_dir = config.paths.words_dir.join("categories");
    assert!(categories_dir.join("Animals.txt").is_file());
    let saved = fs::read_to_string(config.paths.words_dir.join("words.txt")).unwrap();
    assert_eq!(saved.lines().count(), pool.all_words().len());
}

#[test]
fn custom_category_files_are_picked_up() {
    let temp = tempfile::tempdir().expect("tempdir");
    let config = config(temp.path(), 1);
    let categories_dir = config.paths.words_dir.join("categories");
    fs::create_dir_all(&categories_dir).unwrap();
    fs::write(categories_dir.join("Birds.txt"), "Owl\nwren\n\nowl\n").unwrap();

    let pool = open_word_pool(&config).unwrap();
    assert_eq!(
        pool.category_words("birds").unwrap(),
        ["owl".to_string(), "wren".to_string()]
    );
}

#[test]
fn two_sessions_accumulate_stats_and_logs() {
    let temp = tempfile::tempdir().expect("tempdir");
    let config = config(temp.path(), 1);
    let mut pool = WordPool::from_categories([("Birds", vec!["owl".to_string()])]);
    let categories = pool.categories();

    let mut first = Player::new(&["o", "guess owl"], &["birds"], &[false]);
    let summary = run_session_with(&mut first, &mut pool, &categories, &config).unwrap();
    assert_eq!(summary.stats.wins, 1);
    assert_eq!(summary.stats.total_score, 60);

    let mut second = Player::new(&["a", "b", "c", "d", "e", "f"], &[""], &[false]);
    let summary = run_session_with(&mut second, &mut pool, &categories, &config).unwrap();

    // The second session starts from what the first one saved
    assert_eq!(second.stats_seen[0].games_played, 1);
    assert_eq!(summary.stats.games_played, 2);
    assert_eq!(summary.stats.losses, 1);
    assert!((summary.stats.win_rate - 50.0).abs() < f64::EPSILON);
    assert_eq!(load_stats(&config.paths.stats_file).unwrap(), summary.stats);

    let second_log =
        fs::read_to_string(config.paths.log_dir.join("game2").join("log.txt")).unwrap();
    assert!(second_log.starts_with("Game: game2\n"));
    assert!(second_log.contains("Category Source: all\n"));
    assert!(second_log.contains("Result: Loss\n"));
    assert!(second_log.contains("Wrong Guesses List: a, b, c, d, e, f\n"));
}

#[test]
fn session_on_disk_pool_with_preset_category() {
    let temp = tempfile::tempdir().expect("tempdir");
    let mut config = config(temp.path(), 100);
    config.category = Some("Countries".to_string());

    // Quit every round straight away, twice
    let mut player = Player::new(&[], &[], &[true, false]);
    let summary = run_session(&mut player, &config).unwrap();

    assert_eq!(summary.rounds, 2);
    assert_eq!(summary.stats.losses, 2);
    assert_eq!(summary.stats.total_score, 0);
    for name in ["game1", "game2"] {
        let log = fs::read_to_string(config.paths.log_dir.join(name).join("log.txt")).unwrap();
        assert!(log.contains("Category Source: Countries\n"));
        assert!(log.contains("Result: Quit\n"));
    }
}
