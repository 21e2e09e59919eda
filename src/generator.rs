use std::collections::HashSet;

use itertools::Itertools;
use log::{debug, info, trace};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::Grid;
use crate::builder::GridGraphBuilder;
use crate::check::is_unique;
use crate::graph::WeaveGraph;
use crate::letters::{letters_of, Letter};
use crate::location::Location;
use crate::placer::WordPlacer;
use crate::rows::{LetterRow, WordPath};

/// Limits on how hard [`LayoutGenerator::generate`] tries.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneratorConfig {
    /// Full attempts, each on a freshly pruned graph.
    pub attempts: usize,
    /// Tries at placing the leading word of an island before the island is given up.
    pub placement_retries: usize,
    /// Placement tries allowed within one attempt, across all islands and recursion levels.
    pub placement_budget: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            attempts: 50,
            placement_retries: 50,
            placement_budget: 20_000,
        }
    }
}

/// Reasons [`LayoutGenerator::generate`] may fail.
///
/// Both are ordinary outcomes; the caller should ask for different words or simply try again.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum GenerationFailure {
    /// Every attempt failed to weave the words into the board.
    #[error("Es konnte kein gültiges Layout erzeugt werden ({attempts} Versuche). Bitte die Wörter anpassen und erneut versuchen.")]
    Exhausted {
        /// Attempts made.
        attempts: usize,
    },
    /// A word has no letters and can never be placed.
    #[error("Leeres Wort an Position {index}.")]
    EmptyWord {
        /// Position of the word in the input.
        index: usize,
    },
}

/// A finished, uniqueness-checked layout.
#[derive(Clone, Debug, Serialize)]
pub struct Layout {
    /// The 48 letters of the board.
    pub grid: Grid,
    /// One row per letter, ready to persist; words appear in input order.
    pub rows: Vec<LetterRow>,
    /// One path per input word, in input order.
    pub paths: Vec<WordPath>,
}

impl Layout {
    /// The board as 48 row-major strings.
    pub fn cells(&self) -> Vec<String> {
        self.grid.to_strings()
    }
}

struct Candidate {
    word: String,
    letters: Vec<Letter>,
}

struct Placement {
    // position in the caller's word list
    index: usize,
    path: Vec<Location>,
}

/// Weaves words into the 6x8 board.
///
/// One attempt shuffles the words, prunes a fresh graph, then fills the board island by island: each island of free
/// cells receives a random combination of the remaining words whose letters exactly cover it, placed one word at a
/// time with backtracking. Every tentative placement is checked for uniqueness against all words placed so far.
#[derive(Clone, Default)]
pub struct LayoutGenerator {
    config: GeneratorConfig,
    builder: GridGraphBuilder,
}

impl LayoutGenerator {
    /// Construct a generator with `config` and the default graph builder.
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            config,
            builder: GridGraphBuilder::default(),
        }
    }

    /// The limits this generator runs with.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate a layout for `words`, drawing all randomness from `rng`.
    ///
    /// Words are used as given; run [`validate_generation_input`](crate::validate_generation_input) first.
    /// Returns [`GenerationFailure::Exhausted`] once every attempt has failed.
    pub fn generate<S: AsRef<str>, R: Rng + ?Sized>(&self, words: &[S], rng: &mut R) -> Result<Layout, GenerationFailure> {
        let candidates = words.iter()
            .map(|word| Candidate { word: word.as_ref().to_owned(), letters: letters_of(word.as_ref()) })
            .collect_vec();
        if let Some(index) = candidates.iter().position(|candidate| candidate.letters.is_empty()) {
            return Err(GenerationFailure::EmptyWord { index });
        }

        for attempt in 1..=self.config.attempts {
            let mut order = (0..candidates.len()).collect_vec();
            order.shuffle(rng);
            let graph = self.builder.build(rng);

            let mut search = Search {
                config: &self.config,
                candidates: &candidates,
                rng: &mut *rng,
                placements: Vec::with_capacity(candidates.len()),
                spent: 0,
            };
            if !search.fill_region(&graph, order) {
                debug!("attempt {}/{} failed after {} placement tries", attempt, self.config.attempts, search.spent);
                continue;
            }

            match search.into_layout() {
                Some(layout) => {
                    info!("generated layout for {} words on attempt {}", candidates.len(), attempt);
                    return Ok(layout);
                }
                None => debug!("attempt {}/{} left words unplaced", attempt, self.config.attempts),
            }
        }

        Err(GenerationFailure::Exhausted { attempts: self.config.attempts })
    }
}

/// Shorthand for [`LayoutGenerator::generate`] with the default builder.
pub fn generate_layout<S: AsRef<str>, R: Rng + ?Sized>(words: &[S], config: GeneratorConfig, rng: &mut R) -> Result<Layout, GenerationFailure> {
    LayoutGenerator::new(config).generate(words, rng)
}

// state of a single attempt
struct Search<'a, R: Rng + ?Sized> {
    config: &'a GeneratorConfig,
    candidates: &'a [Candidate],
    rng: &'a mut R,
    placements: Vec<Placement>,
    spent: usize,
}

impl<R: Rng + ?Sized> Search<'_, R> {
    fn occupied(&self) -> HashSet<Location> {
        self.placements.iter().flat_map(|placement| placement.path.iter().copied()).collect()
    }

    fn grid(&self) -> Grid {
        let mut grid = Grid::default();
        for placement in &self.placements {
            let letters = &self.candidates[placement.index].letters;
            for (location, letter) in placement.path.iter().zip(letters) {
                grid.set(*location, Some(letter.clone()));
            }
        }
        grid
    }

    fn len_of(&self, index: usize) -> usize {
        self.candidates[index].letters.len()
    }

    /// Fill the free cells of `region` with exactly the words in `remaining`.
    fn fill_region(&mut self, region: &WeaveGraph, mut remaining: Vec<usize>) -> bool {
        if remaining.is_empty() {
            return true;
        }

        let islands = region.islands(&self.occupied());
        let (Some(smallest), Some(largest)) = (islands.iter().map(Vec::len).min(), islands.iter().map(Vec::len).max()) else {
            return false;
        };
        let (Some(shortest), Some(longest)) = (remaining.iter().map(|i| self.len_of(*i)).min(), remaining.iter().map(|i| self.len_of(*i)).max()) else {
            return false;
        };
        if smallest < shortest || longest > largest {
            trace!("islands {}..={} cannot hold words {}..={}", smallest, largest, shortest, longest);
            return false;
        }

        for island in &islands {
            let lengths = remaining.iter().map(|i| self.len_of(*i)).collect_vec();
            let Some(chosen) = sample_combination(&lengths, island.len(), &mut *self.rng) else {
                trace!("no combination of {} words covers an island of {}", remaining.len(), island.len());
                return false;
            };
            let combination = chosen.iter().map(|position| remaining[*position]).collect_vec();

            if !self.fill_island(&region.subgraph(island), &combination) {
                return false;
            }
            remaining.retain(|index| !combination.contains(index));
        }

        remaining.is_empty()
    }

    /// Place the first word of `combination` inside `island`, then recurse into what is left of the island.
    fn fill_island(&mut self, island: &WeaveGraph, combination: &[usize]) -> bool {
        let Some((&first, rest)) = combination.split_first() else { return true };
        let letters = self.candidates[first].letters.clone();
        let longest = island.longest_paths_bounded(letters.len());
        let checkpoint = self.placements.len();

        for _ in 0..self.config.placement_retries {
            if self.spent >= self.config.placement_budget {
                trace!("placement budget of {} spent", self.config.placement_budget);
                return false;
            }
            self.spent += 1;

            let occupied = self.occupied();
            let Some(path) = WordPlacer::new(island, &occupied, &longest).place(&letters, &mut *self.rng) else {
                continue;
            };
            self.placements.push(Placement { index: first, path });

            let words = self.placements.iter().map(|placement| self.candidates[placement.index].word.as_str()).collect_vec();
            if is_unique(&self.grid(), &words) {
                let mut rest = rest.to_vec();
                rest.shuffle(&mut *self.rng);
                if self.fill_region(island, rest) {
                    return true;
                }
            } else {
                trace!("placing {:?} made the grid ambiguous", self.candidates[first].word);
            }

            self.placements.truncate(checkpoint);
        }

        false
    }

    fn into_layout(self) -> Option<Layout> {
        let mut by_index: Vec<Option<&Placement>> = vec![None; self.candidates.len()];
        for placement in &self.placements {
            let slot = by_index.get_mut(placement.index)?;
            if slot.replace(placement).is_some() {
                return None;
            }
        }

        let grid = self.grid();
        let mut rows = Vec::with_capacity(grid.filled());
        let mut paths = Vec::with_capacity(self.candidates.len());
        for (candidate, placement) in self.candidates.iter().zip(by_index) {
            let placement = placement?;
            for (location, letter) in placement.path.iter().zip(&candidate.letters) {
                rows.push(LetterRow::at(&candidate.word, letter, *location));
            }
            paths.push(WordPath::from_locations(&candidate.word, &placement.path, &grid));
        }

        Some(Layout { grid, rows, paths })
    }
}

/// Draw, uniformly at random, a set of positions into `lengths` whose lengths sum to `target`.
///
/// Positions are returned in ascending order. [`None`] if no such set exists or `target` is zero.
pub(crate) fn sample_combination<R: Rng + ?Sized>(lengths: &[usize], target: usize, rng: &mut R) -> Option<Vec<usize>> {
    if target == 0 {
        return None;
    }

    // counts[i][s]: subsets of lengths[i..] summing to s
    let mut counts = vec![vec![0u128; target + 1]; lengths.len() + 1];
    counts[lengths.len()][0] = 1;
    for i in (0..lengths.len()).rev() {
        for s in 0..=target {
            let skip = counts[i + 1][s];
            let take = if s >= lengths[i] { counts[i + 1][s - lengths[i]] } else { 0 };
            counts[i][s] = skip.saturating_add(take);
        }
    }

    let total = counts[0][target];
    if total == 0 {
        return None;
    }

    let mut pick = rng.gen_range(0..total);
    let mut left = target;
    let mut chosen = Vec::new();
    for (i, length) in lengths.iter().enumerate() {
        if left == 0 {
            break;
        }
        let take = if left >= *length { counts[i + 1][left - length] } else { 0 };
        if pick < take {
            chosen.push(i);
            left -= length;
        } else {
            pick -= take;
        }
    }

    (left == 0).then_some(chosen)
}
