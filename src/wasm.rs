//! JSON-in, JSON-out bindings for the browser editor.

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::generator::{GeneratorConfig, LayoutGenerator};
use crate::rows::LetterRow;
use crate::{has_same_word_set, reconstruct_preview, validate_generation_input};

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|error| JsValue::from_str(&error.to_string()))
}

fn from_json<'de, T: serde::Deserialize<'de>>(raw: &'de str) -> Result<T, JsValue> {
    serde_json::from_str(raw).map_err(|error| JsValue::from_str(&error.to_string()))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ValidationOutput {
    parsed: crate::ParsedWords,
    error: Option<String>,
}

/// Validate editor lines, given as a JSON array of strings.
///
/// Returns JSON `{parsed, error}` where `error` is a message or `null`.
#[wasm_bindgen(js_name = validateGenerationInput)]
pub fn validate_generation_input_json(lines_json: &str) -> Result<String, JsValue> {
    let lines: Vec<String> = from_json(lines_json)?;
    let validation = validate_generation_input(&lines);
    to_json(&ValidationOutput {
        parsed: validation.parsed,
        error: validation.error.map(|error| error.to_string()),
    })
}

/// Generate a layout for a JSON array of words.
///
/// `options_json` may override any [`GeneratorConfig`] field. Returns the layout as JSON, or `null` when every
/// attempt failed.
#[wasm_bindgen(js_name = generateLayout)]
pub fn generate_layout_json(words_json: &str, options_json: Option<String>) -> Result<String, JsValue> {
    let words: Vec<String> = from_json(words_json)?;
    let config = match options_json {
        Some(raw) => from_json::<GeneratorConfig>(&raw)?,
        None => GeneratorConfig::default(),
    };

    // no OS entropy on wasm32-unknown-unknown
    let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
    let mut rng = StdRng::seed_from_u64(seed);

    match LayoutGenerator::new(config).generate(&words, &mut rng) {
        Ok(layout) => to_json(&layout),
        Err(_) => Ok("null".to_owned()),
    }
}

/// Rebuild grid and paths from a JSON array of stored letter rows.
#[wasm_bindgen(js_name = reconstructPreview)]
pub fn reconstruct_preview_json(rows_json: &str) -> Result<String, JsValue> {
    let rows: Vec<LetterRow> = from_json(rows_json)?;
    to_json(&reconstruct_preview(&rows))
}

/// Whether the JSON array of editor lines names the same words as the JSON array of stored rows.
#[wasm_bindgen(js_name = hasSameWordSet)]
pub fn has_same_word_set_json(word_lines_json: &str, rows_json: &str) -> Result<bool, JsValue> {
    let word_lines: Vec<String> = from_json(word_lines_json)?;
    let rows: Vec<LetterRow> = from_json(rows_json)?;
    Ok(has_same_word_set(&word_lines, &rows))
}
