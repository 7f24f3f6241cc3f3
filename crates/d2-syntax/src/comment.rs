//! Commenting conventions consumed by host editor comment/uncomment
//! actions: `# ` for line comments, `"""` on both ends of block comments.

/// Prefix inserted when commenting a line out.
pub const LINE_PREFIX: &str = "# ";

/// Block comments open and close with the same delimiter.
pub const BLOCK_DELIMITER: &str = "\"\"\"";

/// Comment a line out, preserving its indentation.
pub fn comment_line(line: &str) -> String {
    let indent_len = line.len() - line.trim_start().len();
    let (indent, rest) = line.split_at(indent_len);
    format!("{indent}{LINE_PREFIX}{rest}")
}

/// Remove a line-comment prefix (with or without the trailing space),
/// preserving indentation. `None` when the line is not commented.
pub fn uncomment_line(line: &str) -> Option<String> {
    let indent_len = line.len() - line.trim_start().len();
    let (indent, rest) = line.split_at(indent_len);
    let body = rest.strip_prefix(LINE_PREFIX).or_else(|| rest.strip_prefix('#'))?;
    Some(format!("{indent}{body}"))
}
