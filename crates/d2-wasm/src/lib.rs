//! WASM bindings for the D2 tokenizer.
//!
//! Exposes `tokenize()` and `highlight()` to JavaScript via wasm-bindgen,
//! for browser-based editors that drive their own token styling or embed
//! pre-rendered HTML.

use serde::Serialize;
use wasm_bindgen::prelude::*;

/// One token as seen from JavaScript: `{ kind, start, end, text }` with
/// byte offsets into the UTF-8 source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenRow {
    pub kind: String,
    pub start: usize,
    pub end: usize,
    pub text: String,
}

fn token_rows(source: &str) -> Vec<TokenRow> {
    d2_lexer::Scanner::new(source)
        .map(|token| TokenRow {
            kind: format!("{:?}", token.kind),
            start: token.start,
            end: token.end,
            text: token.text(source).to_string(),
        })
        .collect()
}

/// Tokenize D2 source.
///
/// Returns a JS array of `{ kind, start, end, text }` objects.
#[wasm_bindgen]
pub fn tokenize(source: &str) -> Result<JsValue, JsError> {
    let array = js_sys::Array::new();
    for row in token_rows(source) {
        let value =
            serde_wasm_bindgen::to_value(&row).map_err(|e| JsError::new(&e.to_string()))?;
        array.push(&value);
    }
    Ok(array.into())
}

/// Render D2 source as highlighted HTML.
#[wasm_bindgen]
pub fn highlight(source: &str) -> String {
    d2_syntax::html::render(source)
}

/// Get the tooling version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
