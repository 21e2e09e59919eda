use std::collections::{HashMap, HashSet};

use itertools::Itertools;
use log::debug;
use serde::Serialize;

use crate::board::Grid;
use crate::letters::{first_letter, letters_of, word_key};
use crate::location::Location;
use crate::rows::{LetterRow, WordPath};

/// A stored layout rebuilt for display and editing.
#[derive(Clone, Debug, Default, Serialize)]
pub struct Preview {
    /// The letters, as the rows placed them.
    pub grid: Grid,
    /// One path per word that could be traced, in the order words first appear in the rows.
    pub paths: Vec<WordPath>,
}

struct WordCells {
    display: String,
    cells: HashSet<Location>,
}

/// Rebuild grid and word paths from persisted rows (`lenient-reconstruction` mode).
///
/// Stored data may predate the current generator, so nothing here is an error:
/// rows without a word or letter and rows pointing off the board are skipped,
/// and when two rows claim the same cell the later one wins.
///
/// For each word, a trace covering exactly its recorded cells is preferred, then any trace of the word, then the
/// recorded cells in row-major order if they happen to form a chain of neighbors. Words matching none of these are
/// left out of the paths while their letters stay on the grid.
pub fn reconstruct_preview(rows: &[LetterRow]) -> Preview {
    let mut grid = Grid::default();
    let mut order: Vec<String> = Vec::new();
    let mut words: HashMap<String, WordCells> = HashMap::new();

    for row in rows {
        let display = row.word.trim();
        let key = word_key(display);
        let Some(letter) = first_letter(row.letter.trim()) else {
            debug!("skipping row without letter for {:?}", display);
            continue;
        };
        if key.is_empty() {
            debug!("skipping row without word at ({}, {})", row.cx, row.cy);
            continue;
        }
        let Some(location) = row.location() else {
            debug!("skipping {:?} of {:?} off the board at ({}, {})", row.letter, display, row.cx, row.cy);
            continue;
        };

        grid.set(location, Some(letter));
        words.entry(key.clone())
            .or_insert_with(|| {
                order.push(key);
                WordCells { display: display.to_owned(), cells: HashSet::new() }
            })
            .cells
            .insert(location);
    }

    let paths = order.iter()
        .filter_map(|key| words.get(key))
        .filter_map(|word| {
            let path = trace_recorded(&grid, word);
            if path.is_none() {
                debug!("dropping {:?}: its cells do not form a path", word.display);
            }
            path.map(|locations| WordPath::from_locations(&word.display, &locations, &grid))
        })
        .collect_vec();

    Preview { grid, paths }
}

fn trace_recorded(grid: &Grid, word: &WordCells) -> Option<Vec<Location>> {
    if word.cells.is_empty() {
        return None;
    }

    let traces = grid.find_word(&letters_of(&word.display));
    let exact = traces.iter()
        .find(|trace| trace.len() == word.cells.len() && trace.iter().all(|cell| word.cells.contains(cell)));
    if let Some(trace) = exact.or(traces.first()) {
        return Some(trace.clone());
    }

    let fallback = word.cells.iter().copied().sorted_by_key(Location::index).collect_vec();
    fallback.iter()
        .tuple_windows()
        .all(|(a, b)| a.touches(b))
        .then_some(fallback)
}
