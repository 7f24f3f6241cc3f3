//! D2 Syntax Services
//!
//! The thin layers between the token stream and an editor: the token-kind →
//! display-category mapping with ANSI and HTML renderers, brace pairing
//! over token streams, line/block commenting conventions, file
//! association, and lint-style reporting of degraded tokens.
//!
//! Everything here consumes `d2-lexer` tokens; nothing re-scans text on
//! its own.

pub mod ansi;
pub mod brace;
pub mod comment;
pub mod diagnostics;
pub mod filetype;
pub mod highlight;
pub mod html;

pub use brace::{matching_brace, matching_brace_at, BracePair, PAIRS};
pub use diagnostics::{check, Diagnostic};
pub use highlight::{category_for, HighlightCategory};
