use std::collections::HashSet;

use itertools::Itertools;
use serde::Serialize;
use thiserror::Error;

use crate::letters::{is_word_char, letter_count, word_key};
use crate::location::GRID_SIZE;
use crate::rows::{unique_word_keys, LetterRow};

/// Candidate words parsed from free text, one per line.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedWords {
    /// Every non-blank line, trimmed, in input order.
    pub words: Vec<String>,
    /// Letters across all words, valid or not.
    pub total_letters: usize,
    /// Words containing anything besides Latin letters and `ÄÖÜäöüßẞ`.
    pub invalid_words: Vec<String>,
}

/// Parse free text into candidate words: one per line, trimmed, blank lines dropped.
pub fn parse_words(text: &str) -> ParsedWords {
    let words = text.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect_vec();

    let invalid_words = words.iter()
        .filter(|word| !word.chars().all(is_word_char))
        .cloned()
        .collect_vec();

    ParsedWords {
        total_letters: words.iter().map(|word| letter_count(word)).sum(),
        words,
        invalid_words,
    }
}

/// Reasons a word list cannot be handed to the generator.
///
/// Messages are shown to editors as-is.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum InputError {
    /// No words were entered.
    #[error("Bitte mindestens ein Wort eingeben (ein Wort pro Zeile).")]
    NoWords,
    /// At least one word contains a character outside the allowed alphabet.
    #[error("Ungültige Zeichen gefunden. Erlaubt sind nur Buchstaben (inkl. ÄÖÜẞ).")]
    InvalidCharacters {
        /// The offending words.
        words: Vec<String>,
    },
    /// The words do not fill the board exactly.
    #[error("Die Wörter müssen zusammen genau {expected} Buchstaben ergeben (aktuell: {total}).")]
    LetterCount {
        /// Letters required.
        expected: usize,
        /// Letters entered.
        total: usize,
    },
    /// The same word was entered more than once, ignoring case and surrounding whitespace.
    #[error("Doppelte Wörter sind nicht erlaubt: {}.", .words.join(", "))]
    DuplicateWords {
        /// Each repeated word, as entered the second time.
        words: Vec<String>,
    },
}

/// The outcome of [`validate_generation_input`]: the parse, plus the first rule it breaks.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Validation {
    /// The parsed word list.
    pub parsed: ParsedWords,
    /// [`None`] if the words can be generated.
    pub error: Option<InputError>,
}

/// Check editor input before generating.
///
/// Rules, in order: at least one word, only allowed characters, exactly 48 letters, no duplicate words.
pub fn validate_generation_input<S: AsRef<str>>(lines: &[S]) -> Validation {
    let parsed = parse_words(&lines.iter().map(|line| line.as_ref()).join("\n"));
    let error = first_input_error(&parsed);
    Validation { parsed, error }
}

fn first_input_error(parsed: &ParsedWords) -> Option<InputError> {
    if parsed.words.is_empty() {
        return Some(InputError::NoWords);
    }
    if !parsed.invalid_words.is_empty() {
        return Some(InputError::InvalidCharacters { words: parsed.invalid_words.clone() });
    }
    if parsed.total_letters != GRID_SIZE {
        return Some(InputError::LetterCount { expected: GRID_SIZE, total: parsed.total_letters });
    }

    let mut seen = HashSet::new();
    let duplicates = parsed.words.iter()
        .filter(|word| !seen.insert(word_key(word)))
        .unique_by(|word| word_key(word))
        .cloned()
        .collect_vec();
    if !duplicates.is_empty() {
        return Some(InputError::DuplicateWords { words: duplicates });
    }

    None
}

/// Tidy the editor's word lines so exactly one empty line trails the list.
pub fn normalize_word_lines<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    let mut next = lines.iter().map(|line| line.as_ref().to_owned()).collect_vec();
    if next.last().map_or(true, |line| !line.trim().is_empty()) {
        next.push(String::new());
    }
    while next.len() > 1 && next[next.len() - 1].trim().is_empty() && next[next.len() - 2].trim().is_empty() {
        next.pop();
    }
    next
}

/// Whether the words typed into the editor are the words a stored layout was generated for.
///
/// Both sides are compared as sets of word keys, so case, surrounding whitespace and `ß`/`ẞ` do not matter.
/// Repeated input words never match, since the stored layout cannot hold a word twice.
pub fn has_same_word_set<S: AsRef<str>>(word_lines: &[S], rows: &[LetterRow]) -> bool {
    let expected = parse_words(&word_lines.iter().map(|line| line.as_ref()).join("\n"))
        .words
        .iter()
        .map(|word| word_key(word))
        .collect_vec();
    let generated = unique_word_keys(rows);

    expected.len() == generated.len() && expected.iter().all(|key| generated.contains(key))
}
