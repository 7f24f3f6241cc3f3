//! D2 Completion
//!
//! Completion candidates for D2 sources, computed from the token stream:
//! node identifiers (block definitions and connection endpoints), shape
//! values after `shape:`, and node properties inside `name: {` blocks.
//!
//! The host editor owns popups, ranking, and insertion; this crate only
//! answers "which candidates, at this cursor offset".

pub mod context;
pub mod identifier;
pub mod property;
pub mod shape;

pub use context::{enclosing_block, enclosing_named_block, Block};
pub use identifier::{collect_identifiers, suggest_identifiers};
pub use property::{suggest_properties, NODE_PROPERTIES};
pub use shape::{suggest_shapes, SHAPE_VALUES};
