use ndarray::Ix;
use serde::Serialize;

pub(crate) type Coord = usize;

/// Number of columns on a word-weave board.
pub const GRID_WIDTH: Coord = 6;
/// Number of rows on a word-weave board.
pub const GRID_HEIGHT: Coord = 8;
/// Number of cells on a word-weave board.
pub const GRID_SIZE: usize = GRID_WIDTH * GRID_HEIGHT;

#[derive(Clone, Eq, Hash, Copy, PartialEq, Ord, PartialOrd, Debug, Serialize)]
/// A location `(x, y)` on the board. The top left corner is `Location(0, 0)`.
///
/// The derived ordering compares `x` first; use [`Location::index`] for row-major order.
pub struct Location(pub Coord, pub Coord);

impl Location {
    /// Build a location from a row-major flat index in `0..48`, or [`None`] if the index is off the board.
    pub fn from_index(index: usize) -> Option<Self> {
        (index < GRID_SIZE).then(|| Self(index % GRID_WIDTH, index / GRID_WIDTH))
    }

    /// Build a location from signed coordinates, as found in persisted rows, or [`None`] if off the board.
    pub fn checked(x: i64, y: i64) -> Option<Self> {
        let x = Coord::try_from(x).ok()?;
        let y = Coord::try_from(y).ok()?;
        let location = Self(x, y);
        location.in_bounds().then_some(location)
    }

    /// Row-major flat index, `y * 6 + x`.
    pub fn index(&self) -> usize {
        self.1 * GRID_WIDTH + self.0
    }

    /// `(row, column)` pair for indexing an [`ndarray::Array2`].
    pub(crate) fn as_index(&self) -> (Coord, Coord) {
        (self.1, self.0)
    }

    pub(crate) fn offset_by(self, rhs: (isize, isize)) -> Self {
        Self(self.0.wrapping_add_signed(rhs.0), self.1.wrapping_add_signed(rhs.1))
    }

    /// Whether this location lies on the 6x8 board.
    pub fn in_bounds(&self) -> bool {
        self.0 < GRID_WIDTH && self.1 < GRID_HEIGHT
    }

    /// Whether `other` is one of the eight cells surrounding `self`.
    pub fn touches(&self, other: &Location) -> bool {
        self != other && self.0.abs_diff(other.0) <= 1 && self.1.abs_diff(other.1) <= 1
    }
}

impl From<(Ix, Ix)> for Location {
    fn from(value: (Ix, Ix)) -> Self {
        Self(value.1, value.0)
    }
}
