//! File association for the language.

use std::ffi::OsStr;
use std::path::Path;

pub const LANGUAGE_NAME: &str = "D2";
pub const DESCRIPTION: &str = "D2 diagram file";
pub const EXTENSION: &str = "d2";

/// Whether `path` carries the diagram file extension.
pub fn is_diagram_file(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| ext.eq_ignore_ascii_case(EXTENSION))
}
