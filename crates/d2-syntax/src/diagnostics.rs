//! Degraded-token reporting.
//!
//! The scanner itself never fails; this pass makes its leniency visible by
//! walking the token stream and reporting the spots where input degraded:
//! bad characters and delimited tokens whose closer never arrived. The
//! highlighter keeps rendering such tokens normally — diagnostics are for
//! lint-style surfacing only.

use d2_lexer::{Scanner, Token, TokenKind};

/// A single finding, positioned 1-based for human output.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("line {line}, column {column}: {message}")]
pub struct Diagnostic {
    pub message: String,
    pub line: usize,
    pub column: usize,
}

/// Scan `source` and report every degraded token, in source order.
pub fn check(source: &str) -> Vec<Diagnostic> {
    Scanner::new(source)
        .filter_map(|token| {
            let message = describe(&token, source)?;
            let (line, column) = line_col(source, token.start);
            Some(Diagnostic { message, line, column })
        })
        .collect()
}

fn describe(token: &Token, source: &str) -> Option<String> {
    let text = token.text(source);
    match token.kind {
        TokenKind::BadCharacter => Some(format!("unexpected character {text:?}")),
        TokenKind::String if !string_terminated(text) => {
            Some("unterminated string".to_string())
        }
        TokenKind::BlockComment if !block_comment_terminated(text) => {
            Some("unterminated block comment".to_string())
        }
        // Single `|` tokens are plain pipes; only opened multiline strings
        // can be left unclosed.
        TokenKind::Pipe if text.len() > 1 && !text.ends_with('|') => {
            Some("unterminated multiline string".to_string())
        }
        _ => None,
    }
}

/// The closing quote must be present and not itself escaped.
fn string_terminated(text: &str) -> bool {
    let mut chars = text.chars();
    let Some(quote) = chars.next() else {
        return false;
    };
    let mut escaped = false;
    let mut closed = false;
    for c in chars {
        if closed {
            return false;
        }
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == quote {
            closed = true;
        }
    }
    closed
}

/// Open and close delimiters must not overlap, so six quotes is the
/// shortest complete block comment.
fn block_comment_terminated(text: &str) -> bool {
    text.len() >= 6 && text.ends_with("\"\"\"")
}

/// 1-based line and column (in characters) of a byte offset.
fn line_col(source: &str, offset: usize) -> (usize, usize) {
    let before = &source[..offset];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    let column = before[line_start..].chars().count() + 1;
    (line, column)
}
