use itertools::Itertools;
use serde::Serialize;

use crate::board::Grid;
use crate::letters::{letter_count, letters_of};
use crate::location::{Location, GRID_SIZE};

/// Whether `traces` all cover one and the same set of cells.
///
/// An empty list trivially does.
pub(crate) fn same_cells(traces: &[Vec<Location>]) -> bool {
    let Some(first) = traces.first() else { return true };
    traces.iter().flatten().unique().count() == first.len()
}

/// Whether every non-empty word in `words` can be found in `grid` on exactly one set of cells.
///
/// Several traces over the same cells (a word retracing itself) are not ambiguous.
/// A word that cannot be found at all fails.
pub fn is_unique<S: AsRef<str>>(grid: &Grid, words: &[S]) -> bool {
    words.iter()
        .map(|word| word.as_ref().trim())
        .filter(|word| !word.is_empty())
        .all(|word| {
            let traces = grid.find_word(&letters_of(word));
            traces.len() == 1 || (traces.len() > 1 && same_cells(&traces))
        })
}

/// The verdict on one word of a [`GridCheck`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WordStatus {
    /// Found on exactly one set of cells.
    Valid,
    /// Not found at all.
    Missing,
    /// Found on more than one set of cells.
    Multiple,
    /// The word is blank.
    Empty,
}

/// Result of [`check_grid`]: per-word traces and statuses, in input order.
#[derive(Clone, Debug, Serialize)]
pub struct GridCheck {
    /// Every trace found for each word.
    pub locations: Vec<Vec<Vec<Location>>>,
    /// The status of each word.
    pub statuses: Vec<WordStatus>,
    /// Whether the grid is a playable puzzle for these words.
    pub valid: bool,
}

/// Check a hand-edited grid against its word list.
///
/// The grid is valid when there is at least one word, every word is [`WordStatus::Valid`] or
/// [`WordStatus::Empty`], and, unless `ignore_letter_count` is set, the trimmed words total exactly 48 letters.
pub fn check_grid<S: AsRef<str>>(grid: &Grid, words: &[S], ignore_letter_count: bool) -> GridCheck {
    if words.is_empty() {
        return GridCheck { locations: Vec::new(), statuses: Vec::new(), valid: false };
    }

    let (locations, statuses): (Vec<_>, Vec<_>) = words.iter()
        .map(|word| {
            let word = word.as_ref().trim();
            if word.is_empty() {
                return (Vec::new(), WordStatus::Empty);
            }

            let traces = grid.find_word(&letters_of(word));
            let status = match traces.len() {
                0 => WordStatus::Missing,
                1 => WordStatus::Valid,
                _ if same_cells(&traces) => WordStatus::Valid,
                _ => WordStatus::Multiple,
            };
            (traces, status)
        })
        .unzip();

    let total: usize = words.iter().map(|word| letter_count(word.as_ref().trim())).sum();
    let valid = statuses.iter().all(|status| matches!(status, WordStatus::Valid | WordStatus::Empty))
        && (ignore_letter_count || total == GRID_SIZE);

    GridCheck { locations, statuses, valid }
}
