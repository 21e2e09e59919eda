use std::fmt::{Display, Formatter};

use itertools::Itertools;
use ndarray::Array2;
use serde::{Serialize, Serializer};

use crate::letters::{first_letter, Letter};
use crate::location::{Location, GRID_HEIGHT, GRID_SIZE, GRID_WIDTH};
use crate::shape::Step;

/// The string a blank cell is rendered as, a no-break space (`U+00A0`).
pub const BLANK: &str = "\u{00A0}";

/// The 6x8 board of letters, stored row-major as an `(8, 6)` [`Array2`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: Array2<Option<Letter>>,
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            cells: Array2::from_elem((GRID_HEIGHT, GRID_WIDTH), None),
        }
    }
}

impl Grid {
    /// Build a grid from 48 row-major strings, the inverse of [`Grid::to_strings`].
    ///
    /// Blank or whitespace entries become empty cells; only the first letter of each entry is kept and
    /// entries beyond the 48th are ignored.
    pub fn from_strings<S: AsRef<str>>(cells: &[S]) -> Self {
        let mut grid = Self::default();
        for (index, value) in cells.iter().take(GRID_SIZE).enumerate() {
            if let Some(location) = Location::from_index(index) {
                grid.set(location, first_letter(value.as_ref().trim()));
            }
        }
        grid
    }

    /// The letter at `location`, or [`None`] for a blank or off-board location.
    pub fn get(&self, location: Location) -> Option<&Letter> {
        self.cells.get(location.as_index()).and_then(Option::as_ref)
    }

    /// Overwrite the cell at `location`. Off-board locations are ignored.
    pub fn set(&mut self, location: Location, letter: Option<Letter>) {
        if let Some(cell) = self.cells.get_mut(location.as_index()) {
            *cell = letter;
        }
    }

    /// Whether no cell holds a letter.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// Number of cells holding a letter.
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Flatten to 48 row-major strings with blanks rendered as [`BLANK`].
    pub fn to_strings(&self) -> Vec<String> {
        self.cells.iter()
            .map(|cell| cell.as_ref().map_or_else(|| BLANK.to_owned(), Letter::to_string))
            .collect_vec()
    }

    /// Every trace spelling `letters` on this grid, following all eight directions between neighbors.
    ///
    /// Each trace lists one location per letter in word order and visits no location twice.
    /// An empty word has no traces.
    pub fn find_word(&self, letters: &[Letter]) -> Vec<Vec<Location>> {
        let mut traces = Vec::new();
        if letters.is_empty() {
            return traces;
        }

        let mut path = Vec::with_capacity(letters.len());
        for (index, _) in self.cells.indexed_iter() {
            self.trace(Location::from(index), letters, &mut path, &mut traces);
        }

        traces
    }

    fn trace(&self, at: Location, letters: &[Letter], path: &mut Vec<Location>, traces: &mut Vec<Vec<Location>>) {
        let Some((head, rest)) = letters.split_first() else { return };
        if self.get(at) != Some(head) {
            return;
        }

        path.push(at);
        if rest.is_empty() {
            traces.push(path.clone());
        } else {
            for (_, neighbor) in Step::neighbors_of(at) {
                if !path.contains(&neighbor) {
                    self.trace(neighbor, rest, path, traces);
                }
            }
        }
        path.pop();
    }
}

/// Reshape 48 row-major cells into 8 rows of 6 columns.
///
/// Missing trailing cells are padded with [`BLANK`].
pub fn to_grid_rows<S: AsRef<str>>(cells: &[S]) -> Vec<Vec<String>> {
    let shaped = Array2::from_shape_fn((GRID_HEIGHT, GRID_WIDTH), |(y, x)| {
        cells.get(y * GRID_WIDTH + x).map_or_else(|| BLANK.to_owned(), |cell| cell.as_ref().to_owned())
    });

    shaped.rows()
        .into_iter()
        .map(|row| row.to_vec())
        .collect_vec()
}

impl Serialize for Grid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_strings().serialize(serializer)
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut out = String::with_capacity(self.cells.nrows() * (self.cells.ncols() + 1));

        for row in self.cells.rows() {
            for cell in row {
                match cell {
                    Some(letter) => out.push_str(letter),
                    None => out.push('.'),
                }
            }
            out.push('\n');
        }

        write!(f, "{}", out)
    }
}
