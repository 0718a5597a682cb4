//! Inline formatting to plain text.
//!
//! Uses `pulldown-cmark` to resolve inline syntax: emphasis, strong, and
//! strikethrough markers are dropped while keeping their text, links and
//! images become their visible label, and code spans keep their content.
//! Raw inline HTML is dropped. Kept text is copied from the source as
//! written, so backslash escapes and character references stay literal.
//!
//! # Example
//!
//! ```rust
//! use notabene_content::markdown::inline::strip_inline;
//!
//! assert_eq!(
//!     strip_inline("A **title** with [formatting](http://stripped)"),
//!     "A title with formatting"
//! );
//! assert_eq!(strip_inline("A title with formatting"), "A title with formatting");
//! assert_eq!(strip_inline(r"\*not emphasis\*"), r"\*not emphasis\*");
//! ```

use pulldown_cmark::{Event, Options, Parser};

/// Heading marker the span is parsed behind.
const PREFIX: &str = "# ";

/// Render a span of inline markdown as plain text.
///
/// The span is parsed as the content of an ATX heading, so block syntax at
/// its start (list markers, quote markers, numbered items) stays literal.
/// Leading and trailing whitespace is not significant in heading content and
/// is dropped; internal whitespace is kept as written.
///
/// Stripping is repeated until the text no longer changes, so the result is
/// a fixed point: `strip_inline(&strip_inline(s)) == strip_inline(s)`. Every
/// pass only removes characters, which bounds the number of passes.
pub fn strip_inline(span: &str) -> String {
    let mut plain = strip_once(&span.replace(['\r', '\n'], " "));
    loop {
        let next = strip_once(&plain);
        if next == plain {
            return plain;
        }
        plain = next;
    }
}

/// One pass: keep the source text of `Text` and `Code` events.
fn strip_once(span: &str) -> String {
    let source = format!("{PREFIX}{span}");
    let bytes = source.as_bytes();
    let parser = Parser::new_ext(&source, Options::ENABLE_STRIKETHROUGH);

    let mut plain = String::with_capacity(span.len());
    let mut copied_to = 0;
    for (event, range) in parser.into_offset_iter() {
        match event {
            Event::Text(_) => {
                if is_escaped(bytes, range.start, copied_to) {
                    plain.push('\\');
                }
                if let Some(text) = source.get(range.clone()) {
                    plain.push_str(text);
                }
                copied_to = range.end;
            }
            Event::Code(code) => {
                plain.push_str(&code);
                copied_to = range.end;
            }
            _ => {}
        }
    }
    plain
}

/// Whether the text starting at `start` is an escaped punctuation character
/// whose backslash has not been copied yet.
fn is_escaped(bytes: &[u8], start: usize, copied_to: usize) -> bool {
    start > copied_to
        && bytes.get(start - 1) == Some(&b'\\')
        && bytes.get(start).is_some_and(u8::is_ascii_punctuation)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_emphasis() {
        assert_eq!(strip_inline("*em* and _em_"), "em and em");
        assert_eq!(strip_inline("**strong** and __strong__"), "strong and strong");
        assert_eq!(strip_inline("***both***"), "both");
    }

    #[test]
    fn test_strip_strikethrough() {
        assert_eq!(strip_inline("~~gone~~ kept"), "gone kept");
    }

    #[test]
    fn test_strip_links_and_images() {
        assert_eq!(strip_inline("[label](http://target)"), "label");
        assert_eq!(strip_inline("see [**bold** label](x)"), "see bold label");
        assert_eq!(strip_inline("![alt text](img.png)"), "alt text");
    }

    #[test]
    fn test_strip_code_span() {
        assert_eq!(strip_inline("Using `Result` in Rust"), "Using Result in Rust");
    }

    #[test]
    fn test_preserves_internal_whitespace() {
        assert_eq!(strip_inline("A  title"), "A  title");
    }

    #[test]
    fn test_block_syntax_stays_literal() {
        assert_eq!(strip_inline("- not a list"), "- not a list");
        assert_eq!(strip_inline("1. not numbered"), "1. not numbered");
        assert_eq!(strip_inline("> not quoted"), "> not quoted");
    }

    #[test]
    fn test_unmatched_markers_kept() {
        assert_eq!(strip_inline("5 * 3"), "5 * 3");
        assert_eq!(strip_inline("C# notes"), "C# notes");
    }

    #[test]
    fn test_drops_inline_html() {
        assert_eq!(strip_inline("a <span>b</span>"), "a b");
    }

    #[test]
    fn test_empty_label_is_empty() {
        assert_eq!(strip_inline("[](http://x)"), "");
    }

    #[test]
    fn test_idempotent_on_stripped_text() {
        let once = strip_inline("A **title** with [formatting](http://stripped)");
        assert_eq!(strip_inline(&once), once);
    }

    // ------------------------------------------------------------------------
    // Escapes and references
    // ------------------------------------------------------------------------

    #[test]
    fn test_escapes_stay_literal() {
        assert_eq!(strip_inline(r"\*not em\*"), r"\*not em\*");
        assert_eq!(strip_inline(r"a \[x\](y)"), r"a \[x\](y)");
        assert_eq!(strip_inline(r"**bold** \_kept\_"), r"bold \_kept\_");
    }

    #[test]
    fn test_character_references_stay_literal() {
        assert_eq!(strip_inline("AT&amp;amp;T"), "AT&amp;amp;T");
        assert_eq!(strip_inline("AT&amp;T"), "AT&amp;T");
    }

    #[test]
    fn test_markup_revealed_by_stripping_is_resolved() {
        for span in ["`*x*`", "[[a](b)](c)", "`[l](u)` tail", r"\\*x*"] {
            let once = strip_inline(span);
            assert_eq!(strip_inline(&once), once, "span {span:?}");
        }
        assert_eq!(strip_inline("`*x*`"), "x");
    }
}
