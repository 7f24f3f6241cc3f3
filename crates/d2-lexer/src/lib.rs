//! D2 Lexer
//!
//! Tokenizes D2 diagram source into a flat, classified token stream for
//! syntax highlighting, brace matching, and cursor-context detection.
//! Handles connections (`->`, `<-`, `<->`, `--`), `key: value` attributes,
//! `#` and `"""` comments, quoted and `|...|` multiline strings, and the
//! reserved-word table.
//!
//! The scanner never fails: partial or corrupted input degrades into
//! `BadCharacter` tokens or delimited tokens that run to end-of-range, and
//! the produced tokens always tile the scanned range exactly. That
//! leniency is load-bearing — the scanner runs on every keystroke of an
//! in-progress edit, where most intermediate states are not valid diagrams.
//!
//! # Example
//!
//! ```
//! use d2_lexer::{Scanner, TokenKind};
//!
//! let source = "x -> y";
//! let tokens = Scanner::tokenize(source);
//! assert_eq!(tokens.len(), 5);
//! assert_eq!(tokens[2].kind, TokenKind::Arrow);
//! assert_eq!(tokens[2].text(source), "->");
//! ```

pub mod keywords;
pub mod scanner;
pub mod token;

pub use keywords::is_keyword;
pub use scanner::Scanner;
pub use token::{Token, TokenKind};
