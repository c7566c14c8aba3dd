/// Sort configuration, algorithm dispatch and ordering checks.
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

use log::debug;

use super::compare::Relation;
use super::error::SortError;
use super::insertion::binary_insertion_sort;
use super::merge::merge_sort;
use super::timsort::{DEFAULT_RUN_SIZE, timsort_with_run_size};
use crate::catalog::Game;

/// The interchangeable sorting algorithms. All of them are stable, so for
/// the same input and relation they produce identical output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    BinaryInsertion,
    MergeSort,
    Timsort { run_size: NonZeroUsize },
    /// The standard library's stable sort, kept as the reference ordering.
    Std,
}

impl Default for Algorithm {
    fn default() -> Self {
        Algorithm::Timsort {
            run_size: DEFAULT_RUN_SIZE,
        }
    }
}

impl Algorithm {
    /// Every algorithm, with the hybrid sort using `run_size`.
    pub fn all(run_size: NonZeroUsize) -> [Algorithm; 4] {
        [
            Algorithm::BinaryInsertion,
            Algorithm::MergeSort,
            Algorithm::Timsort { run_size },
            Algorithm::Std,
        ]
    }

    /// Sort `v` in place so that no element is less than its predecessor.
    pub fn sort<T, F>(self, v: &mut [T], mut is_less: F)
    where
        T: Clone,
        F: FnMut(&T, &T) -> bool,
    {
        match self {
            Algorithm::BinaryInsertion => binary_insertion_sort(v, is_less),
            Algorithm::MergeSort => merge_sort(v, is_less),
            Algorithm::Timsort { run_size } => timsort_with_run_size(v, run_size, is_less),
            Algorithm::Std => v.sort_by(|a, b| {
                if is_less(a, b) {
                    Ordering::Less
                } else if is_less(b, a) {
                    Ordering::Greater
                } else {
                    Ordering::Equal
                }
            }),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::BinaryInsertion => "insertion",
            Algorithm::MergeSort => "merge",
            Algorithm::Timsort { .. } => "timsort",
            Algorithm::Std => "std",
        }
    }

    /// Replace the run size of a hybrid sort; other algorithms are unchanged.
    pub fn with_run_size(self, run_size: NonZeroUsize) -> Self {
        match self {
            Algorithm::Timsort { .. } => Algorithm::Timsort { run_size },
            other => other,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Timsort { run_size } => write!(f, "timsort(run={})", run_size),
            other => f.write_str(other.name()),
        }
    }
}

impl FromStr for Algorithm {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "insertion" | "binary-insertion" | "bis" => Ok(Algorithm::BinaryInsertion),
            "merge" | "mergesort" | "merge-sort" => Ok(Algorithm::MergeSort),
            "timsort" | "tim" | "hybrid" => Ok(Algorithm::default()),
            "std" | "stable" | "reference" => Ok(Algorithm::Std),
            _ => Err(SortError::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Parse a hybrid-sort run size. Zero is rejected.
pub fn parse_run_size(s: &str) -> Result<NonZeroUsize, SortError> {
    s.trim()
        .parse::<NonZeroUsize>()
        .map_err(|_| SortError::InvalidRunSize(s.to_string()))
}

/// Configuration for sorting a catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortConfig {
    pub relation: Relation,
    pub algorithm: Algorithm,
    /// Largest first. Implemented by swapping the relation's operands, which
    /// keeps it a strict total order, so stability is unaffected.
    pub descending: bool,
}

impl SortConfig {
    pub fn new(relation: Relation, algorithm: Algorithm) -> Self {
        SortConfig {
            relation,
            algorithm,
            descending: false,
        }
    }
}

#[inline]
fn game<H: Borrow<Game>>(handle: &H) -> &Game {
    handle.borrow()
}

/// Sort a slice of record handles (`&Game`, `Rc<Game>`, `Arc<Game>`, ...)
/// as configured. Only the handles move; the records are never touched.
pub fn sort_games<H>(games: &mut [H], config: &SortConfig)
where
    H: Borrow<Game> + Clone,
{
    debug!(
        "sorting {} records by {}{} using {}",
        games.len(),
        config.relation,
        if config.descending { " (descending)" } else { "" },
        config.algorithm
    );

    let less = config.relation.less_fn();
    if config.descending {
        config
            .algorithm
            .sort(games, |a: &H, b: &H| less(game(b), game(a)));
    } else {
        config
            .algorithm
            .sort(games, |a: &H, b: &H| less(game(a), game(b)));
    }
}

/// Index `i` of the first adjacent pair where `v[i + 1]` is less than
/// `v[i]`, or `None` if `v` is sorted.
pub fn find_disorder<T, F>(v: &[T], mut is_less: F) -> Option<usize>
where
    F: FnMut(&T, &T) -> bool,
{
    v.windows(2).position(|w| is_less(&w[1], &w[0]))
}

pub fn is_sorted_by<T, F>(v: &[T], is_less: F) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    find_disorder(v, is_less).is_none()
}

/// First out-of-order position of a catalog under `config`.
pub fn find_game_disorder<H: Borrow<Game>>(games: &[H], config: &SortConfig) -> Option<usize> {
    let less = config.relation.less_fn();
    if config.descending {
        find_disorder(games, |a, b| less(game(b), game(a)))
    } else {
        find_disorder(games, |a, b| less(game(a), game(b)))
    }
}
