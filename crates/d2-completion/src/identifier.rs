//! Node-name harvesting.
//!
//! Candidates come from two places: block definitions (`name: {`) and the
//! endpoints of connections (`a -> b`, `a <- b`, `a <-> b`, `a -- b`).
//! Only identifier tokens count; reserved words opening blocks (`style: {`)
//! are configuration, not nodes.

use crate::context;
use d2_lexer::{Scanner, Token, TokenKind};

fn is_connection(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Arrow | TokenKind::ArrowLeft | TokenKind::ArrowBoth | TokenKind::Connection
    )
}

/// All node names defined in `source`, sorted and deduplicated.
pub fn collect_identifiers(source: &str) -> Vec<String> {
    let significant: Vec<Token> = Scanner::new(source)
        .filter(|t| t.kind != TokenKind::Whitespace)
        .collect();

    let mut names = Vec::new();
    for (i, token) in significant.iter().enumerate() {
        // name: {
        if token.kind == TokenKind::Identifier
            && significant.get(i + 1).is_some_and(|t| t.kind == TokenKind::Colon)
            && significant.get(i + 2).is_some_and(|t| t.kind == TokenKind::LBrace)
        {
            names.push(token.text(source).to_string());
        }
        // a -> b and friends
        if is_connection(token.kind) {
            for neighbor in [i.checked_sub(1).and_then(|j| significant.get(j)), significant.get(i + 1)]
                .into_iter()
                .flatten()
            {
                if neighbor.kind == TokenKind::Identifier {
                    names.push(neighbor.text(source).to_string());
                }
            }
        }
    }
    names.sort();
    names.dedup();
    names
}

/// Identifier candidates at `offset`: every known node name except the one
/// whose block the cursor is inside (a node does not complete to itself).
pub fn suggest_identifiers(source: &str, offset: usize) -> Vec<String> {
    let current = context::enclosing_named_block(source, offset).and_then(|b| b.name);
    collect_identifiers(source)
        .into_iter()
        .filter(|name| Some(name.as_str()) != current.as_deref())
        .collect()
}
