//! Synthetic catalogs for benchmarking and testing the sort engine.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::core::Game;

/// Storefronts a generated record may come from.
pub const PLATFORMS: [&str; 6] = [
    "Nintendo Switch",
    "Xbox One X",
    "PlayStation 5",
    "PC",
    "macOS",
    "Linux",
];

/// Genre labels a generated record may carry.
pub const GENRES: [&str; 8] = [
    "Action",
    "Adventure",
    "Puzzle",
    "RPG",
    "Racing",
    "Simulation",
    "Sports",
    "Strategy",
];

const MIN_TITLE_LEN: usize = 5;
const MAX_TITLE_LEN: usize = 25;
const MAX_GENRES: usize = 3;

/// Create a random number generator, seeded when reproducibility is wanted.
#[must_use]
pub fn create_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    }
}

/// Generate `count` random records.
///
/// Titles are 5 to 25 characters drawn from `'0'..='z'` with the punctuation
/// between the digit, upper-case and lower-case blocks skipped. Scores are
/// uniform in `[1.0, 5.0)`. Each record gets up to three distinct genres,
/// possibly none, so every relation sees both ties and empty keys.
pub fn generate_catalog<R: Rng>(count: usize, rng: &mut R) -> Vec<Game> {
    (0..count).map(|_| random_game(rng)).collect()
}

fn random_game<R: Rng>(rng: &mut R) -> Game {
    let len = rng.gen_range(MIN_TITLE_LEN..=MAX_TITLE_LEN);
    let title: String = (0..len).map(|_| random_title_char(rng)).collect();

    let genre_count = rng.gen_range(0..=MAX_GENRES);
    let genres = GENRES
        .choose_multiple(rng, genre_count)
        .map(|g| g.to_string())
        .collect();

    let score = rng.gen_range(1.0..5.0);
    let platform = PLATFORMS[rng.gen_range(0..PLATFORMS.len())];

    Game::new(title, genres, score, platform)
}

fn random_title_char<R: Rng>(rng: &mut R) -> char {
    loop {
        let c = rng.gen_range(b'0'..=b'z');
        if c.is_ascii_alphanumeric() {
            return c as char;
        }
    }
}
