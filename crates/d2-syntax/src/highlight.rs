//! Token kind → display category mapping.
//!
//! The categories are the only classification the editor-facing layers
//! see; renderers and color schemes key off these, never off raw token
//! kinds.

use d2_lexer::TokenKind;

/// Display category for a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HighlightCategory {
    Identifier,
    String,
    Comment,
    Operator,
    Colon,
    Braces,
    Parentheses,
    Brackets,
    Number,
    Keyword,
}

impl HighlightCategory {
    /// Stable lowercase name, used for CSS classes and scheme lookups.
    pub fn name(self) -> &'static str {
        match self {
            HighlightCategory::Identifier => "identifier",
            HighlightCategory::String => "string",
            HighlightCategory::Comment => "comment",
            HighlightCategory::Operator => "operator",
            HighlightCategory::Colon => "colon",
            HighlightCategory::Braces => "braces",
            HighlightCategory::Parentheses => "parentheses",
            HighlightCategory::Brackets => "brackets",
            HighlightCategory::Number => "number",
            HighlightCategory::Keyword => "keyword",
        }
    }
}

/// The display category for `kind`, or `None` for tokens that render with
/// no attributes (whitespace, escape-skips, bad characters).
pub fn category_for(kind: TokenKind) -> Option<HighlightCategory> {
    use TokenKind::*;
    match kind {
        Identifier => Some(HighlightCategory::Identifier),
        String => Some(HighlightCategory::String),
        Comment | BlockComment => Some(HighlightCategory::Comment),
        Arrow | ArrowLeft | ArrowBoth | Connection => Some(HighlightCategory::Operator),
        Pipe | Star => Some(HighlightCategory::Operator),
        Colon | Semicolon => Some(HighlightCategory::Colon),
        LBrace | RBrace => Some(HighlightCategory::Braces),
        LParen | RParen => Some(HighlightCategory::Parentheses),
        LBracket | RBracket => Some(HighlightCategory::Brackets),
        Number => Some(HighlightCategory::Number),
        Keyword => Some(HighlightCategory::Keyword),
        Whitespace | BadCharacter => None,
    }
}
