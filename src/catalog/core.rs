/// Game records: the sortable values of a catalog.
use std::fmt;

/// A single catalog entry.
///
/// Fields are private so that every mutation goes through a setter. The
/// genre list is kept in ascending order at all times, which lets the
/// genre relation compare two lists directly without re-sorting them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Game {
    title: String,
    score: f64,
    genres: Vec<String>,
    platform: String,
}

impl Game {
    pub fn new(
        title: impl Into<String>,
        genres: Vec<String>,
        score: f64,
        platform: impl Into<String>,
    ) -> Self {
        Game {
            title: title.into(),
            score,
            genres: normalize_genres(genres),
            platform: platform.into(),
        }
    }

    #[inline]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[inline]
    pub fn score(&self) -> f64 {
        self.score
    }

    /// Genre labels, always in ascending lexical order.
    #[inline]
    pub fn genres(&self) -> &[String] {
        &self.genres
    }

    #[inline]
    pub fn platform(&self) -> &str {
        &self.platform
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_score(&mut self, score: f64) {
        self.score = score;
    }

    /// Replace the genre list. The new list is sorted before it is stored.
    pub fn set_genres(&mut self, genres: Vec<String>) {
        self.genres = normalize_genres(genres);
    }

    pub fn set_platform(&mut self, platform: impl Into<String>) {
        self.platform = platform.into();
    }
}

fn normalize_genres(mut genres: Vec<String>) -> Vec<String> {
    genres.sort_unstable();
    genres
}

/// One tab-separated row: title, score, comma-joined genres, platform.
impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{:.2}\t{}\t{}",
            self.title,
            self.score,
            self.genres.join(","),
            self.platform
        )
    }
}
