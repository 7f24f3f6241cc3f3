//! ANSI terminal renderer.
//!
//! Walks the token stream and wraps each categorized token in an SGR color
//! sequence. Uncategorized text passes through untouched, so stripping the
//! escape sequences from the output reproduces the input exactly.

use crate::highlight::{category_for, HighlightCategory};
use d2_lexer::Scanner;

const RESET: &str = "\x1b[0m";

fn sgr(category: HighlightCategory) -> &'static str {
    match category {
        HighlightCategory::Identifier => "\x1b[39m",
        HighlightCategory::String => "\x1b[32m",
        HighlightCategory::Comment => "\x1b[90m",
        HighlightCategory::Operator => "\x1b[36m",
        HighlightCategory::Colon => "\x1b[37m",
        HighlightCategory::Braces => "\x1b[33m",
        HighlightCategory::Parentheses => "\x1b[33m",
        HighlightCategory::Brackets => "\x1b[33m",
        HighlightCategory::Number => "\x1b[35m",
        HighlightCategory::Keyword => "\x1b[1;34m",
    }
}

/// Render `source` with ANSI colors.
pub fn render(source: &str) -> String {
    let mut out = String::with_capacity(source.len() * 2);
    for token in Scanner::new(source) {
        match category_for(token.kind) {
            Some(category) => {
                out.push_str(sgr(category));
                out.push_str(token.text(source));
                out.push_str(RESET);
            }
            None => out.push_str(token.text(source)),
        }
    }
    out
}
