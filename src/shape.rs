use itertools::Itertools;
use strum::VariantArray;

use crate::location::Location;

/// The eight directions a word may take from one letter to the next.
///
/// Variants are declared in the order traces explore them: vertical first, then the three steps to the
/// left, then the three steps to the right.
/// [`crate::reconstruct_preview`] picks the first trace found, so this order is observable.
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub enum Step {
    /// `y - 1`
    Up,
    /// `y + 1`
    Down,
    /// `x - 1, y - 1`
    UpLeft,
    /// `x - 1`
    Left,
    /// `x - 1, y + 1`
    DownLeft,
    /// `x + 1, y - 1`
    UpRight,
    /// `x + 1`
    Right,
    /// `x + 1, y + 1`
    DownRight,
}

impl Step {
    /// The directions which, stepping from one location to another, land on a higher flat index.
    pub const FORWARD_VARIANTS: &'static [Self] = &[Self::Down, Self::DownLeft, Self::Right, Self::DownRight];

    /// Attempt the step from `location` in the direction specified by `self` and return the resultant [`Location`].
    ///
    /// The result may lie off the board; check [`Location::in_bounds`].
    pub fn attempt_from(&self, location: Location) -> Location {
        match self {
            Self::Up => location.offset_by((0, -1)),
            Self::Down => location.offset_by((0, 1)),
            Self::UpLeft => location.offset_by((-1, -1)),
            Self::Left => location.offset_by((-1, 0)),
            Self::DownLeft => location.offset_by((-1, 1)),
            Self::UpRight => location.offset_by((1, -1)),
            Self::Right => location.offset_by((1, 0)),
            Self::DownRight => location.offset_by((1, 1)),
        }
    }

    /// Every on-board neighbor of `location`, in trace order.
    pub fn neighbors_of(location: Location) -> Vec<(Self, Location)> {
        Self::VARIANTS.iter()
            .map(|dir| (*dir, dir.attempt_from(location)))
            .filter(|(_, neighbor)| neighbor.in_bounds())
            .collect_vec()
    }
}
