//! Cursor context detection.
//!
//! All questions about "where is the cursor" are answered from the token
//! stream, never from ad-hoc text matching, so context detection stays
//! consistent with highlighting even on malformed input.
//!
//! Offsets are byte offsets and must lie on character boundaries (cursor
//! positions always do).

use d2_lexer::{Scanner, Token, TokenKind};

/// An open `{` block surrounding the cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Name from a `name: {` opener; anonymous braces have none.
    pub name: Option<String>,
    /// Byte offset just past the opening `{`.
    pub content_start: usize,
}

/// Innermost block still open at `offset`.
pub fn enclosing_block(source: &str, offset: usize) -> Option<Block> {
    let mut stack = block_stack(source, offset);
    stack.pop()
}

/// Innermost *named* block still open at `offset`. Anonymous braces nested
/// inside it do not hide it.
pub fn enclosing_named_block(source: &str, offset: usize) -> Option<Block> {
    block_stack(source, offset)
        .into_iter()
        .rev()
        .find(|block| block.name.is_some())
}

fn block_stack(source: &str, offset: usize) -> Vec<Block> {
    let mut stack = Vec::new();
    // The two significant tokens before each `{` decide its name.
    let mut prev: Option<Token> = None;
    let mut prev2: Option<Token> = None;

    for token in Scanner::new(source) {
        if token.end > offset {
            break;
        }
        if token.kind == TokenKind::Whitespace {
            continue;
        }
        match token.kind {
            TokenKind::LBrace => {
                let name = match (prev2, prev) {
                    (Some(name_tok), Some(colon)) if colon.kind == TokenKind::Colon => {
                        word_text(&name_tok, source)
                    }
                    _ => None,
                };
                stack.push(Block {
                    name,
                    content_start: token.end,
                });
            }
            TokenKind::RBrace => {
                stack.pop();
            }
            _ => {}
        }
        prev2 = prev;
        prev = Some(token);
    }
    stack
}

/// Whether the cursor sits in the value position of `key:` on the current
/// line, tolerating a partially typed value that touches the cursor.
/// Returns the typed prefix (empty right after the colon). `key` also
/// matches as the last segment of a dotted path (`x.shape:`).
pub fn value_position_after(source: &str, offset: usize, key: &str) -> Option<String> {
    let line_start = source[..offset].rfind('\n').map_or(0, |i| i + 1);
    let line = &source[line_start..offset];

    let significant: Vec<Token> = Scanner::new(line)
        .filter(|t| t.kind != TokenKind::Whitespace)
        .collect();
    let mut rev = significant.iter().rev();

    let last = rev.next()?;
    let (key_token, partial) = if last.kind == TokenKind::Colon {
        (rev.next()?, String::new())
    } else if is_word(last.kind) && last.end == line.len() {
        let colon = rev.next()?;
        if colon.kind != TokenKind::Colon {
            return None;
        }
        (rev.next()?, last.text(line).to_string())
    } else {
        return None;
    };

    if !is_word(key_token.kind) || !matches_key(key_token.text(line), key) {
        return None;
    }
    Some(partial)
}

fn is_word(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Identifier | TokenKind::Keyword | TokenKind::Number
    )
}

fn word_text(token: &Token, source: &str) -> Option<String> {
    is_word(token.kind).then(|| token.text(source).to_string())
}

fn matches_key(text: &str, key: &str) -> bool {
    text == key
        || text
            .strip_suffix(key)
            .is_some_and(|prefix| prefix.ends_with('.'))
}
