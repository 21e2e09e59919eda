use std::collections::{HashMap, HashSet};

use itertools::Itertools;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::graph::WeaveGraph;
use crate::letters::Letter;
use crate::location::Location;

/// Lays a single word onto free, connected cells of one island.
///
/// `longest` should hold, for every cell of `graph`, the length of the longest simple path starting there (see
/// [`WeaveGraph::longest_paths_bounded`]); cells scoring below the word length are never chosen as a start.
pub struct WordPlacer<'a> {
    graph: &'a WeaveGraph,
    occupied: &'a HashSet<Location>,
    longest: &'a HashMap<Location, usize>,
}

impl<'a> WordPlacer<'a> {
    /// Construct a placer over `graph`, avoiding the `occupied` cells.
    pub fn new(graph: &'a WeaveGraph, occupied: &'a HashSet<Location>, longest: &'a HashMap<Location, usize>) -> Self {
        Self { graph, occupied, longest }
    }

    /// Attempt to place `letters`, returning one location per letter in word order.
    ///
    /// A single start cell is drawn uniformly among the free cells that can hold the word; from there every
    /// continuation is tried in shuffled order with backtracking. [`None`] means no path exists from that start,
    /// which is an ordinary outcome the caller retries.
    pub fn place<R: Rng + ?Sized>(&self, letters: &[Letter], rng: &mut R) -> Option<Vec<Location>> {
        if letters.is_empty() {
            return None;
        }

        let starts = self.graph.cells()
            .into_iter()
            .filter(|cell| !self.occupied.contains(cell))
            .filter(|cell| self.longest.get(cell).copied().unwrap_or(0) >= letters.len())
            .collect_vec();
        let start = *starts.choose(rng)?;

        let mut path = Vec::with_capacity(letters.len());
        path.push(start);
        self.extend(&mut path, letters.len(), rng).then_some(path)
    }

    fn extend<R: Rng + ?Sized>(&self, path: &mut Vec<Location>, length: usize, rng: &mut R) -> bool {
        if path.len() == length {
            return true;
        }
        let Some(last) = path.last().copied() else { return false };

        let mut candidates = self.graph.neighbors(last)
            .into_iter()
            .filter(|cell| !self.occupied.contains(cell) && !path.contains(cell))
            .collect_vec();
        candidates.shuffle(rng);

        for next in candidates {
            path.push(next);
            if self.extend(path, length, rng) {
                return true;
            }
            path.pop();
        }

        false
    }
}
