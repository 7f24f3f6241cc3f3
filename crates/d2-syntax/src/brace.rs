//! Brace pairing.
//!
//! Declares the structural bracket pairs of the language and matches them
//! over an existing token stream. No scanning happens here; callers hand in
//! the tokens they already have.

use d2_lexer::{Token, TokenKind};

/// A paired bracket type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BracePair {
    pub open: TokenKind,
    pub close: TokenKind,
    /// Structural pairs delimit blocks and participate in code folding and
    /// auto-insertion.
    pub structural: bool,
}

/// `{` / `}` is the only structural pair.
pub const PAIRS: &[BracePair] = &[BracePair {
    open: TokenKind::LBrace,
    close: TokenKind::RBrace,
    structural: true,
}];

/// Auto-inserting a paired brace is allowed in front of every token type.
pub fn pair_allowed_before(_next: Option<TokenKind>) -> bool {
    true
}

/// Index of the token matching the brace at `index`, scanning forward from
/// an opening brace or backward from a closing one. `None` when the token
/// is not a brace or its partner is missing (unbalanced input).
pub fn matching_brace(tokens: &[Token], index: usize) -> Option<usize> {
    match tokens.get(index)?.kind {
        TokenKind::LBrace => {
            let mut depth = 0usize;
            for (i, token) in tokens.iter().enumerate().skip(index + 1) {
                match token.kind {
                    TokenKind::LBrace => depth += 1,
                    TokenKind::RBrace => {
                        if depth == 0 {
                            return Some(i);
                        }
                        depth -= 1;
                    }
                    _ => {}
                }
            }
            None
        }
        TokenKind::RBrace => {
            let mut depth = 0usize;
            for i in (0..index).rev() {
                match tokens[i].kind {
                    TokenKind::RBrace => depth += 1,
                    TokenKind::LBrace => {
                        if depth == 0 {
                            return Some(i);
                        }
                        depth -= 1;
                    }
                    _ => {}
                }
            }
            None
        }
        _ => None,
    }
}

/// Match the brace under the cursor: finds the brace token containing
/// `offset` and returns its partner token.
pub fn matching_brace_at(tokens: &[Token], offset: usize) -> Option<Token> {
    let index = tokens.iter().position(|t| {
        t.contains(offset) && matches!(t.kind, TokenKind::LBrace | TokenKind::RBrace)
    })?;
    matching_brace(tokens, index).map(|i| tokens[i])
}
