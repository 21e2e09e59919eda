use std::collections::{HashMap, HashSet, VecDeque};

use itertools::Itertools;
use petgraph::graphmap::UnGraphMap;

use crate::location::Location;
use crate::shape::Step;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub(crate) struct Edge {
    // direction from lower indexed endpoint
    pub(crate) direction: Step,
}

/// Adjacency between board cells, after diagonal pruning.
///
/// Build the full board with a [`GridGraphBuilder`](crate::builder::GridGraphBuilder); islands are carved out of it
/// with [`WeaveGraph::subgraph`].
#[derive(Clone, Debug)]
pub struct WeaveGraph {
    pub(crate) graph: UnGraphMap<Location, Edge>,
}

impl WeaveGraph {
    /// Number of cells in this graph.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of adjacencies in this graph.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Whether `location` is a cell of this graph.
    pub fn contains(&self, location: Location) -> bool {
        self.graph.contains_node(location)
    }

    /// Whether `a` and `b` are adjacent.
    pub fn are_adjacent(&self, a: Location, b: Location) -> bool {
        self.graph.contains_edge(a, b)
    }

    /// The forward [`Step`] joining `a` and `b`, i.e. the step from whichever of the two has the lower flat index.
    pub fn edge_direction(&self, a: Location, b: Location) -> Option<Step> {
        self.graph.edge_weight(a, b).map(|edge| edge.direction)
    }

    /// Cells of this graph in row-major order.
    pub fn cells(&self) -> Vec<Location> {
        self.graph.nodes().sorted_by_key(Location::index).collect_vec()
    }

    /// Neighbors of `location` in row-major order. Empty if `location` is not in the graph.
    pub fn neighbors(&self, location: Location) -> Vec<Location> {
        if !self.contains(location) {
            return Vec::new();
        }
        self.graph.neighbors(location).sorted_by_key(Location::index).collect_vec()
    }

    /// The sub-graph induced by `island`: those cells and only the edges between them.
    pub fn subgraph(&self, island: &[Location]) -> WeaveGraph {
        let members: HashSet<Location> = island.iter().copied().collect();
        let mut graph = UnGraphMap::with_capacity(island.len(), island.len() * 4);

        for location in island.iter().filter(|l| self.contains(**l)) {
            graph.add_node(*location);
        }
        for (a, b, edge) in self.graph.all_edges() {
            if members.contains(&a) && members.contains(&b) {
                graph.add_edge(a, b, *edge);
            }
        }

        WeaveGraph { graph }
    }

    /// Partition the cells not in `excluded` into maximal connected components ("islands").
    ///
    /// Every free cell lands in exactly one island. Islands are ordered by their lowest flat index and each
    /// island lists its cells in breadth-first discovery order.
    pub fn islands(&self, excluded: &HashSet<Location>) -> Vec<Vec<Location>> {
        let mut islands = Vec::new();
        let mut seen: HashSet<Location> = HashSet::with_capacity(self.node_count());

        for start in self.cells() {
            if excluded.contains(&start) || seen.contains(&start) {
                continue;
            }

            let mut island = Vec::new();
            let mut queue = VecDeque::from([start]);
            seen.insert(start);

            while let Some(current) = queue.pop_front() {
                island.push(current);
                for neighbor in self.neighbors(current) {
                    if !excluded.contains(&neighbor) && seen.insert(neighbor) {
                        queue.push_back(neighbor);
                    }
                }
            }

            islands.push(island);
        }

        islands
    }

    /// For every cell, the number of cells on the longest simple path starting there.
    ///
    /// The search is exhaustive and its cost grows exponentially with the number of cells. It is meant for islands
    /// of a dozen cells or so; on the full 48-cell board it does not finish in any practical time.
    /// Use [`WeaveGraph::longest_paths_bounded`] whenever only "at least `n` cells" matters.
    pub fn longest_paths(&self) -> HashMap<Location, usize> {
        self.longest_paths_bounded(self.node_count())
    }

    /// Like [`WeaveGraph::longest_paths`], but every score is capped at `limit`.
    ///
    /// The search from a cell stops as soon as a path of `limit` cells is found.
    pub fn longest_paths_bounded(&self, limit: usize) -> HashMap<Location, usize> {
        let mut visited = HashSet::with_capacity(self.node_count());

        self.graph.nodes()
            .map(|start| {
                visited.clear();
                (start, self.longest_from(start, limit, &mut visited))
            })
            .collect()
    }

    fn longest_from(&self, at: Location, limit: usize, visited: &mut HashSet<Location>) -> usize {
        if limit <= 1 {
            return limit;
        }

        visited.insert(at);
        let mut best = 1;
        for neighbor in self.graph.neighbors(at) {
            if visited.contains(&neighbor) {
                continue;
            }
            best = best.max(1 + self.longest_from(neighbor, limit - 1, visited));
            if best >= limit {
                break;
            }
        }
        visited.remove(&at);

        best
    }
}
