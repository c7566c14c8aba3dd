/// Ordering relations over game records.
/// Every relation is a primary key plus a tie-break key, which makes it a
/// strict total order: two records compare equal only when both keys match.
/// All comparison functions are allocation-free.
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use super::error::SortError;
use crate::catalog::Game;

/// Byte-wise comparison of two strings.
#[inline]
pub fn compare_ordinal(a: &str, b: &str) -> Ordering {
    a.as_bytes().cmp(b.as_bytes())
}

/// Case-insensitive comparison: both operands are lower-cased char by char,
/// without building the lowered strings.
pub fn compare_ignore_case(a: &str, b: &str) -> Ordering {
    let la = a.chars().flat_map(char::to_lowercase);
    let lb = b.chars().flat_map(char::to_lowercase);
    la.cmp(lb)
}

/// Title, then platform.
pub fn compare_titles(a: &Game, b: &Game) -> Ordering {
    compare_ordinal(a.title(), b.title())
        .then_with(|| compare_ordinal(a.platform(), b.platform()))
}

/// Score, then title.
/// Uses the IEEE-754 total order so a NaN score cannot break transitivity.
/// Adding `+0.0` folds `-0.0` into `+0.0`, so equal scores reach the tie-break.
pub fn compare_scores(a: &Game, b: &Game) -> Ordering {
    (a.score() + 0.0)
        .total_cmp(&(b.score() + 0.0))
        .then_with(|| compare_ordinal(a.title(), b.title()))
}

/// Genre lists compared element by element, then title.
/// An empty list sorts first; a list that is a prefix of another sorts
/// before it. Genre lists are already sorted inside each record.
pub fn compare_genres(a: &Game, b: &Game) -> Ordering {
    a.genres()
        .iter()
        .map(String::as_bytes)
        .cmp(b.genres().iter().map(String::as_bytes))
        .then_with(|| compare_ordinal(a.title(), b.title()))
}

/// Platform ignoring case, then title in its original case.
pub fn compare_platforms(a: &Game, b: &Game) -> Ordering {
    compare_ignore_case(a.platform(), b.platform())
        .then_with(|| compare_ordinal(a.title(), b.title()))
}

/// Concrete less-than predicate. Selected once per sort so the hot loops
/// never branch on which relation is active.
pub type LessFn = fn(&Game, &Game) -> bool;

/// The orderings a catalog can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Relation {
    #[default]
    Title,
    Score,
    Genre,
    Platform,
}

impl Relation {
    pub const ALL: [Relation; 4] = [
        Relation::Title,
        Relation::Score,
        Relation::Genre,
        Relation::Platform,
    ];

    /// Three-way comparison for this relation.
    pub fn compare(self, a: &Game, b: &Game) -> Ordering {
        match self {
            Relation::Title => compare_titles(a, b),
            Relation::Score => compare_scores(a, b),
            Relation::Genre => compare_genres(a, b),
            Relation::Platform => compare_platforms(a, b),
        }
    }

    /// Strict less-than predicate for this relation.
    pub fn less_fn(self) -> LessFn {
        match self {
            Relation::Title => |a: &Game, b: &Game| compare_titles(a, b) == Ordering::Less,
            Relation::Score => |a: &Game, b: &Game| compare_scores(a, b) == Ordering::Less,
            Relation::Genre => |a: &Game, b: &Game| compare_genres(a, b) == Ordering::Less,
            Relation::Platform => |a: &Game, b: &Game| compare_platforms(a, b) == Ordering::Less,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Relation::Title => "title",
            Relation::Score => "score",
            Relation::Genre => "genre",
            Relation::Platform => "platform",
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Relation {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "title" | "titles" => Ok(Relation::Title),
            "score" | "scores" | "rating" => Ok(Relation::Score),
            "genre" | "genres" => Ok(Relation::Genre),
            "platform" | "platforms" => Ok(Relation::Platform),
            _ => Err(SortError::UnknownRelation(s.to_string())),
        }
    }
}
