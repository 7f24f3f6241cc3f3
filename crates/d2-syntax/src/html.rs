//! HTML renderer.
//!
//! Emits a `<pre>` block with one `<span class="d2-<category>">` per
//! categorized token. Token text is escaped; whitespace and bad characters
//! are emitted as escaped bare text so the markup tiles the input exactly.

use crate::highlight::category_for;
use d2_lexer::Scanner;

/// Render `source` as highlighted HTML.
pub fn render(source: &str) -> String {
    let mut out = String::with_capacity(source.len() * 3);
    out.push_str("<pre class=\"d2\">");
    for token in Scanner::new(source) {
        let text = escape(token.text(source));
        match category_for(token.kind) {
            Some(category) => {
                out.push_str(&format!("<span class=\"d2-{}\">{text}</span>", category.name()));
            }
            None => out.push_str(&text),
        }
    }
    out.push_str("</pre>\n");
    out
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spans_carry_category_classes() {
        let out = render("shape: circle");
        assert!(out.contains("<span class=\"d2-keyword\">shape</span>"));
        assert!(out.contains("<span class=\"d2-colon\">:</span>"));
        assert!(out.contains("<span class=\"d2-keyword\">circle</span>"));
    }

    #[test]
    fn test_arrows_escape_angle_brackets() {
        let out = render("x <-> y");
        assert!(out.contains("<span class=\"d2-operator\">&lt;-&gt;</span>"));
    }

    #[test]
    fn test_string_quotes_escaped() {
        let out = render("\"hi\"");
        assert!(out.contains("<span class=\"d2-string\">&quot;hi&quot;</span>"));
    }

    #[test]
    fn test_bad_characters_render_unstyled() {
        let out = render("@");
        assert!(out.contains("@"));
        assert!(!out.contains("<span"));
    }

    #[test]
    fn test_wrapped_in_pre_block() {
        let out = render("x");
        assert!(out.starts_with("<pre class=\"d2\">"));
        assert!(out.ends_with("</pre>\n"));
    }
}
