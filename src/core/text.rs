//! Plain-text rendering of prompt content.
//!
//! Prompt content is stored as an HTML fragment (the editor surface is a
//! contenteditable pane). Validation, list snippets and clipboard copy all
//! operate on the plain-text rendering produced here.

use regex::Regex;

/// Maximum snippet length in characters, before the ellipsis.
pub const SNIPPET_LEN: usize = 50;

/// Strips markup from an HTML fragment and decodes the handful of entities
/// a contenteditable editor actually emits.
pub fn plain_text(html: &str) -> String {
    let re = Regex::new(r"<[^>]*>").unwrap();
    let stripped = re.replace_all(html, "");
    stripped
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

/// First [`SNIPPET_LEN`] characters of the plain-text rendering, with an
/// ellipsis when truncated. Character-based so multi-byte text never splits.
pub fn snippet(html: &str) -> String {
    let text = plain_text(html);
    let mut out: String = text.chars().take(SNIPPET_LEN).collect();
    if text.chars().count() > SNIPPET_LEN {
        out.push_str("...");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_tags() {
        assert_eq!(plain_text("<b>hello</b> <i>world</i>"), "hello world");
    }

    #[test]
    fn br_renders_as_nothing() {
        // Matches DOM textContent: a bare <br> contributes no text.
        assert_eq!(plain_text("line one<br>line two"), "line oneline two");
        assert_eq!(plain_text("<br>"), "");
    }

    #[test]
    fn decodes_entities() {
        assert_eq!(plain_text("a &amp; b &lt;c&gt;&nbsp;&quot;d&quot;"), "a & b <c> \"d\"");
    }

    #[test]
    fn snippet_short_content_untouched() {
        assert_eq!(snippet("<p>short</p>"), "short");
    }

    #[test]
    fn snippet_truncates_at_fifty_chars() {
        let long = "x".repeat(80);
        let s = snippet(&long);
        assert_eq!(s.chars().count(), SNIPPET_LEN + 3);
        assert!(s.ends_with("..."));
    }

    #[test]
    fn snippet_is_char_boundary_safe() {
        let long = "é".repeat(60);
        let s = snippet(&long);
        assert_eq!(s.chars().count(), SNIPPET_LEN + 3);
    }
}
