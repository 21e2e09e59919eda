use std::collections::{BTreeMap, HashSet};

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::board::Grid;
use crate::letters::{letters_of, to_german_lower_case, word_key};
use crate::location::Location;

/// One persisted letter: which word it belongs to and where it sits.
///
/// Coordinates are 1-based with the axes swapped against [`Location`]: `cx` is the row (`y + 1`) and `cy` the
/// column (`x + 1`). Stored data depends on this shape; do not change it.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct LetterRow {
    /// The word this letter belongs to, as entered.
    #[serde(default)]
    pub word: String,
    /// The letter itself.
    #[serde(default)]
    pub letter: String,
    /// Row, 1-based.
    #[serde(default)]
    pub cx: i64,
    /// Column, 1-based.
    #[serde(default)]
    pub cy: i64,
}

impl LetterRow {
    /// The row for `letter` of `word` placed at `location`.
    pub fn at(word: &str, letter: &str, location: Location) -> Self {
        Self {
            word: word.to_owned(),
            letter: letter.to_owned(),
            cx: location.1 as i64 + 1,
            cy: location.0 as i64 + 1,
        }
    }

    /// The board location this row points at, or [`None`] if the coordinates are off the board.
    pub fn location(&self) -> Option<Location> {
        Location::checked(self.cy.checked_sub(1)?, self.cx.checked_sub(1)?)
    }
}

/// One cell of a [`WordPath`].
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PathCell {
    /// Column, 0-based.
    pub x: usize,
    /// Row, 0-based.
    pub y: usize,
    /// The letter in this cell.
    pub letter: String,
}

impl PathCell {
    /// The board location of this cell.
    pub fn location(&self) -> Location {
        Location(self.x, self.y)
    }
}

/// The cells spelling one word, in letter order.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct WordPath {
    /// The word.
    pub word: String,
    /// One cell per letter.
    pub cells: Vec<PathCell>,
}

impl WordPath {
    pub(crate) fn from_locations(word: &str, locations: &[Location], grid: &Grid) -> Self {
        Self {
            word: word.to_owned(),
            cells: locations.iter()
                .map(|location| PathCell {
                    x: location.0,
                    y: location.1,
                    letter: grid.get(*location).map(ToString::to_string).unwrap_or_default(),
                })
                .collect_vec(),
        }
    }
}

/// A letter as nested under its word in stored documents.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct LetterCoord {
    /// The letter.
    #[serde(default)]
    pub letter: String,
    /// Row, 1-based.
    #[serde(default)]
    pub cx: i64,
    /// Column, 1-based.
    #[serde(default)]
    pub cy: i64,
}

/// A stored word document with its letters nested inside.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct WordRecord {
    /// The word.
    #[serde(default)]
    pub word: String,
    /// Its letters, in any order.
    #[serde(default, alias = "game_letter")]
    pub letters: Vec<LetterCoord>,
}

/// Sort rows by word key, then by lower-cased letter, then by `cx` and `cy`. The sort is stable.
pub fn sort_rows(rows: &mut [LetterRow]) {
    rows.sort_by_cached_key(|row| (word_key(&row.word), to_german_lower_case(&row.letter), row.cx, row.cy));
}

/// Flatten nested word documents into sorted [`LetterRow`]s.
pub fn flatten_word_records(records: &[WordRecord]) -> Vec<LetterRow> {
    let mut rows = records.iter()
        .flat_map(|record| record.letters.iter().map(|coord| LetterRow {
            word: record.word.clone(),
            letter: coord.letter.clone(),
            cx: coord.cx,
            cy: coord.cy,
        }))
        .collect_vec();
    sort_rows(&mut rows);
    rows
}

/// The distinct, non-empty word keys found in `rows`, in first-seen order.
pub fn unique_word_keys(rows: &[LetterRow]) -> Vec<String> {
    let mut seen = HashSet::new();
    rows.iter()
        .map(|row| word_key(&row.word))
        .filter(|key| !key.is_empty() && seen.insert(key.clone()))
        .collect_vec()
}

#[derive(Serialize)]
struct ExportLetter {
    letter: String,
    #[serde(rename = "cX")]
    cx: i64,
    #[serde(rename = "cY")]
    cy: i64,
}

/// Export the words of a finished grid as pretty JSON, keyed by lower-cased word.
///
/// Each word maps to its letters with 1-based `cX` (row) and `cY` (column), taken from the first trace of the
/// word. Blank words and words not found on the grid are left out.
pub fn export_words_json<S: AsRef<str>>(grid: &Grid, words: &[S]) -> serde_json::Result<String> {
    let mut export: BTreeMap<String, Vec<ExportLetter>> = BTreeMap::new();

    for word in words.iter().map(|word| word.as_ref().trim()).filter(|word| !word.is_empty()) {
        let traces = grid.find_word(&letters_of(word));
        let Some(trace) = traces.first() else { continue };

        let lowered = to_german_lower_case(word);
        let letters = letters_of(&lowered)
            .into_iter()
            .zip(trace)
            .map(|(letter, location)| {
                let row = LetterRow::at(&lowered, &letter, *location);
                ExportLetter { letter: row.letter, cx: row.cx, cy: row.cy }
            })
            .collect_vec();
        export.insert(lowered, letters);
    }

    serde_json::to_string_pretty(&export)
}
