//! The adjacency graph of a word-weave board and how it is built.

use petgraph::graphmap::UnGraphMap;
use rand::Rng;

use crate::graph::{Edge, WeaveGraph};
use crate::location::{Location, GRID_HEIGHT, GRID_SIZE, GRID_WIDTH};
use crate::shape::Step;

/// A builder for the word-weave adjacency graph.
///
/// Every cell starts connected to its (up to) eight surrounding cells.
/// Then, for each 2x2 block spanning two adjacent rows, one of the two crossing diagonals is cut at random, so two
/// letters can never be linked along both diagonals of the same square.
#[derive(Clone)]
pub struct GridGraphBuilder {
    prune_diagonals: bool,
}

impl Default for GridGraphBuilder {
    fn default() -> Self {
        Self {
            prune_diagonals: true,
        }
    }
}

impl GridGraphBuilder {
    /// Construct a builder with random diagonal pruning enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable the random diagonal pruning. Disabled, the graph is the full eight-neighborhood.
    pub fn prune_diagonals(&mut self, enabled: bool) -> &mut Self {
        self.prune_diagonals = enabled;
        self
    }

    /// Build a fresh graph, drawing one coin per pruned 2x2 block from `rng`.
    ///
    /// Blocks are visited row by row from the top, left to right, so a seeded `rng` always yields the same graph.
    pub fn build<R: Rng + ?Sized>(&self, rng: &mut R) -> WeaveGraph {
        let mut graph = UnGraphMap::with_capacity(
            GRID_SIZE,
            // orthogonal edges, plus both diagonals of every 2x2 block
            (GRID_WIDTH - 1) * GRID_HEIGHT + (GRID_HEIGHT - 1) * GRID_WIDTH + 2 * (GRID_WIDTH - 1) * (GRID_HEIGHT - 1),
        );

        for y in 0..GRID_HEIGHT {
            for x in 0..GRID_WIDTH {
                let location = Location(x, y);
                graph.add_node(location);

                // add edges to higher-indexed neighbors only; the graph is undirected
                for direction in Step::FORWARD_VARIANTS {
                    let other = direction.attempt_from(location);
                    if other.in_bounds() {
                        graph.add_edge(location, other, Edge { direction: *direction });
                    }
                }
            }
        }

        if self.prune_diagonals {
            for y in 1..GRID_HEIGHT {
                for x in 0..GRID_WIDTH - 1 {
                    // either "/" from (x, y) up to (x + 1, y - 1), or "\" from (x + 1, y) up to (x, y - 1)
                    let (lower, upper) = match rng.gen_bool(0.5) {
                        true => (Location(x, y), Location(x + 1, y - 1)),
                        false => (Location(x + 1, y), Location(x, y - 1)),
                    };
                    graph.remove_edge(lower, upper);
                }
            }
        }

        WeaveGraph { graph }
    }
}
