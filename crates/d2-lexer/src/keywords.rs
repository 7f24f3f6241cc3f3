//! The reserved-word table for D2.
//!
//! Membership is checked only after a full identifier-shaped run has been
//! scanned, so keywords are whole-token matches and case-sensitive.
//! `stroke-widths` is an identifier, `stroke-width` is a keyword.

use once_cell::sync::Lazy;
use std::collections::HashSet;

static KEYWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        // Structural
        "label",
        "description",
        "desc",
        "style",
        "shape",
        "direction",
        "grid-columns",
        "grid-gap",
        "grid-rows",
        // Style properties
        "font",
        "font-size",
        "font-color",
        "bold",
        "italic",
        "underline",
        "border-radius",
        "fill",
        "fill-pattern",
        "stroke",
        "stroke-width",
        "stroke-dash",
        "animated",
        "opacity",
        "shadow",
        "multiple",
        "3d",
        "double-border",
        "text-transform",
        // Layout
        "width",
        "height",
        "top",
        "left",
        "near",
        "icon",
        "tooltip",
        "link",
        "class",
        "vars",
        "scenarios",
        // Booleans
        "true",
        "false",
        // Shape names
        "rectangle",
        "square",
        "circle",
        "page",
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
        "hexagon",
        "cloud",
        "parallelogram",
        "trapezoid",
        // Arrowhead names ("diamond" is one too, listed under shapes)
        "triangle",
        "arrow",
        "box",
        "cross",
        "cf-one",
        "cf-one-required",
        "cf-many",
        "cf-many-required",
        // Other
        "filled",
    ]
    .into_iter()
    .collect()
});

/// Whether `text` is a reserved word.
pub fn is_keyword(text: &str) -> bool {
    KEYWORDS.contains(text)
}
