#![warn(missing_docs)]

//! # `wordweave`
//!
//! A layout generator for word-weave puzzles: a fixed board of 6 columns and 8 rows in which a set of words, 48
//! letters in total, is hidden. Each word snakes through neighboring cells (diagonals included), the words
//! together cover every cell exactly once, and no word can be found a second time anywhere else on the board.
//!
//! Check editor input with [`validate_generation_input`], then call [`LayoutGenerator::generate`] (or the
//! [`generate_layout`] shorthand) with a random source of your choice.
//! The resulting [`Layout`] carries the grid, one [`LetterRow`] per letter for storage, and one [`WordPath`] per word.
//! Stored rows are turned back into a grid with [`reconstruct_preview`], which is deliberately lenient about
//! damaged legacy data.
//!
//! # Internals
//! The board is an undirected graph G whose vertices are cells and whose edges join neighboring cells.
//! Left as is, the eight-neighborhood offers too many alternative routes between two letters, so for every 2x2
//! block one of its two crossing diagonals is removed at random (see [`GridGraphBuilder`]).
//!
//! A generation attempt then proceeds as follows:
//! 1. Split the free vertices of G into connected components, "islands".
//! 2. For each island, draw a combination of the remaining words whose letters exactly cover it.
//! A board split into islands no combination can cover is abandoned early.
//! 3. Lay the first word of the combination along a random simple path inside the island ([`WordPlacer`]),
//! starting from a cell that has a long enough path in front of it.
//! 4. Write the placed words into a grid and look every one of them up again, along all eight directions.
//! If any word shows up on a second set of cells, undo the placement and try again.
//! 5. Recurse into what is left of the island with the rest of the combination.
//!
//! Each attempt runs on a freshly pruned graph; the whole thing is retried a bounded number of times.
//! All randomness is drawn from the [`rand::Rng`] passed in, so a seeded generator reproduces a layout exactly.

pub use board::{to_grid_rows, Grid, BLANK};
pub use builder::GridGraphBuilder;
pub use check::{check_grid, is_unique, GridCheck, WordStatus};
pub use generator::{generate_layout, GenerationFailure, GeneratorConfig, Layout, LayoutGenerator};
pub use graph::WeaveGraph;
pub use letters::{letter_count, letters_of, to_german_lower_case, to_german_upper_case, word_key, Letter};
pub use location::{Location, GRID_HEIGHT, GRID_SIZE, GRID_WIDTH};
pub use placer::WordPlacer;
pub use preview::{reconstruct_preview, Preview};
pub use rows::{export_words_json, flatten_word_records, sort_rows, unique_word_keys, LetterCoord, LetterRow, PathCell, WordPath, WordRecord};
pub use shape::Step;
pub use words::{has_same_word_set, normalize_word_lines, parse_words, validate_generation_input, InputError, ParsedWords, Validation};

pub(crate) mod board;
pub mod builder;
pub(crate) mod check;
pub(crate) mod generator;
pub(crate) mod graph;
pub(crate) mod letters;
pub(crate) mod location;
pub(crate) mod placer;
pub(crate) mod preview;
pub(crate) mod rows;
pub(crate) mod shape;
pub(crate) mod words;
#[cfg(feature = "wasm")]
pub mod wasm;
mod tests;
