//! Node-property completion inside `name: {` blocks.

use crate::context;
use d2_lexer::{Scanner, Token, TokenKind};
use std::collections::HashSet;

/// Properties offered inside a node block.
pub const NODE_PROPERTIES: &[&str] = &["shape", "icon", "style", "label"];

/// Property candidates at `offset`: empty outside a named block; inside
/// one, the node properties not already defined in that block.
pub fn suggest_properties(source: &str, offset: usize) -> Vec<&'static str> {
    let Some(block) = context::enclosing_named_block(source, offset) else {
        return Vec::new();
    };
    let defined = defined_properties(&source[block.content_start..offset]);
    NODE_PROPERTIES
        .iter()
        .filter(|property| !defined.contains(**property))
        .copied()
        .collect()
}

/// Property names assigned at the start of a line (or right after the
/// opening brace) within the block content scanned so far.
fn defined_properties(content: &str) -> HashSet<&str> {
    let tokens: Vec<Token> = Scanner::new(content).collect();
    let mut defined = HashSet::new();
    let mut at_line_start = true;

    let mut i = 0;
    while i < tokens.len() {
        let token = &tokens[i];
        if token.kind == TokenKind::Whitespace {
            if token.text(content).contains('\n') {
                at_line_start = true;
            }
            i += 1;
            continue;
        }
        if at_line_start
            && matches!(token.kind, TokenKind::Keyword | TokenKind::Identifier)
        {
            let next = tokens[i + 1..]
                .iter()
                .find(|t| t.kind != TokenKind::Whitespace);
            if next.is_some_and(|t| t.kind == TokenKind::Colon) {
                defined.insert(token.text(content));
            }
        }
        at_line_start = false;
        i += 1;
    }
    defined
}
