//! Shape-value completion after `shape:`.

use crate::context;

/// Values offered for the `shape` attribute. `c4-person` is a valid value
/// the scanner does not reserve, so this list is independent of the
/// keyword table.
pub const SHAPE_VALUES: &[&str] = &[
    "rectangle",
    "square",
    "page",
    "parallelogram",
    "document",
    "cylinder",
    "queue",
    "package",
    "step",
    "callout",
    "stored_data",
    "person",
    "diamond",
    "oval",
    "circle",
    "hexagon",
    "cloud",
    "c4-person",
];

/// Shape candidates at `offset`: empty unless the cursor is in the value
/// position of `shape:` on the current line; otherwise every shape value
/// matching the typed prefix.
pub fn suggest_shapes(source: &str, offset: usize) -> Vec<&'static str> {
    match context::value_position_after(source, offset, "shape") {
        Some(prefix) => SHAPE_VALUES
            .iter()
            .filter(|shape| shape.starts_with(&prefix))
            .copied()
            .collect(),
        None => Vec::new(),
    }
}
