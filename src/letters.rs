use smol_str::SmolStr;
use unicode_segmentation::UnicodeSegmentation;

/// A single letter of a word. Letters are extended grapheme clusters, so `ß`, `ẞ` and `Ä` each count once.
pub type Letter = SmolStr;

/// Lower-case Eszett, `U+00DF`.
const LOWER_CASE_ESZETT: char = 'ß';
/// Upper-case Eszett, `U+1E9E`.
const UPPER_CASE_ESZETT: char = 'ẞ';

/// Split `word` into its letters.
pub fn letters_of(word: &str) -> Vec<Letter> {
    word.graphemes(true).map(SmolStr::new).collect()
}

/// Count the letters of `word` without allocating them.
pub fn letter_count(word: &str) -> usize {
    word.graphemes(true).count()
}

/// The first letter of `value`, if any.
pub(crate) fn first_letter(value: &str) -> Option<Letter> {
    value.graphemes(true).next().map(SmolStr::new)
}

/// The comparison key for a word: trimmed and lower-cased.
///
/// Lower-casing folds `ẞ` onto `ß`, so both spellings share a key.
pub fn word_key(word: &str) -> String {
    word.trim().to_lowercase()
}

/// Whether `c` belongs to the alphabet accepted for puzzle words.
pub(crate) fn is_word_char(c: char) -> bool {
    c.is_ascii_alphabetic() || matches!(c, 'Ä' | 'Ö' | 'Ü' | 'ä' | 'ö' | 'ü' | LOWER_CASE_ESZETT | UPPER_CASE_ESZETT)
}

/// Convert to German upper case.
///
/// Unlike [`str::to_uppercase`], `ß` becomes `ẞ` rather than `SS`, so the letter count is preserved.
pub fn to_german_upper_case(value: &str) -> String {
    value.replace(LOWER_CASE_ESZETT, &UPPER_CASE_ESZETT.to_string()).to_uppercase()
}

/// Convert to German lower case.
pub fn to_german_lower_case(value: &str) -> String {
    value.to_lowercase()
}
