//! Title selection and body/lead extraction.
//!
//! Extraction is a single pass over a note:
//!
//! 1. [`scan_headings`] lists the valid headings
//! 2. [`select_title`] picks the most significant one (lowest level, then
//!    earliest) and strips its inline formatting
//! 3. [`extract_body`] slices everything after the title line
//! 4. [`extract_lead`] keeps the first run of non-blank body lines
//!
//! Body and lead are slices of the source text, never re-rendered, so the
//! note's own formatting survives byte for byte.
//!
//! # Example
//!
//! ```rust
//! use notabene_content::markdown::parser::MarkdownParser;
//!
//! let content = MarkdownParser::new().parse("## Small Heading\n# Bigger Heading\n\nBody");
//! assert_eq!(content.title.as_deref(), Some("Bigger Heading"));
//! assert_eq!(content.body.as_deref(), Some("Body"));
//! ```

use notabene_core::{Error, Result};

use super::headings::{lines, scan_headings, Heading};
use super::inline::strip_inline;
use crate::content::{non_empty, Content};

/// The heading chosen as a document's title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleSelection {
    /// Plain, trimmed title text; absent if the heading strips to nothing.
    pub title: Option<String>,
    /// Line index of the selected heading.
    pub line: usize,
}

/// Select the title among the headings of a document.
///
/// The heading with the smallest level wins; among equal levels the earliest
/// line wins. Only leading and trailing whitespace is trimmed from the
/// stripped text.
///
/// Returns `None` if there are no headings.
pub fn select_title(headings: &[Heading<'_>]) -> Option<TitleSelection> {
    let mut best: Option<&Heading<'_>> = None;
    for candidate in headings {
        best = match best {
            Some(current) if (current.level, current.line) <= (candidate.level, candidate.line) => {
                Some(current)
            }
            _ => Some(candidate),
        };
    }

    let heading = best?;
    let plain = strip_inline(heading.text);
    Some(TitleSelection {
        title: non_empty(plain.trim()),
        line: heading.line,
    })
}

/// Extract the body: the content strictly after the title line.
///
/// Leading blank lines and trailing whitespace are removed; everything in
/// between, other headings included, is kept verbatim. Returns `None` when
/// there is no title line or nothing remains.
pub fn extract_body(source: &str, title_line: Option<usize>) -> Option<String> {
    let title_line = title_line?;
    let first = lines(source)
        .skip(title_line + 1)
        .find(|line| !line.is_blank())?;

    non_empty(source[first.start..].trim_end())
}

/// Extract the lead: the first contiguous run of non-blank body lines.
///
/// Lines are joined with `\n`. Returns `None` exactly when there is no body.
pub fn extract_lead(body: Option<&str>) -> Option<String> {
    let lead: Vec<&str> = lines(body?)
        .skip_while(|line| line.is_blank())
        .take_while(|line| !line.is_blank())
        .map(|line| line.text)
        .collect();

    non_empty(&lead.join("\n"))
}

/// Extracts [`Content`] from markdown notes.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownParser;

impl MarkdownParser {
    /// Create a new parser.
    pub fn new() -> Self {
        Self
    }

    /// Extract title, lead, and body from a note.
    ///
    /// Extraction is total: any input yields a value, possibly with every
    /// field absent.
    pub fn parse(&self, source: &str) -> Content {
        let headings = scan_headings(source);
        let Some(selection) = select_title(&headings) else {
            log::debug!("No title heading found");
            return Content::default();
        };

        let body = extract_body(source, Some(selection.line));
        let lead = extract_lead(body.as_deref());
        log::debug!(
            "Selected title at line {} (body: {} bytes)",
            selection.line,
            body.as_ref().map_or(0, String::len)
        );

        Content {
            title: selection.title,
            lead,
            body,
        }
    }

    /// Decode a raw note and extract its content.
    ///
    /// A leading byte-order mark is ignored. Bytes that are not valid UTF-8
    /// fail with [`Error::Parse`].
    pub fn parse_bytes(&self, bytes: &[u8]) -> Result<Content> {
        let source = std::str::from_utf8(bytes)
            .map_err(|e| Error::parse(format!("note is not valid UTF-8: {e}")))?;
        let source = source.strip_prefix('\u{feff}').unwrap_or(source);
        Ok(self.parse(source))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn heading(level: usize, text: &str, line: usize) -> Heading<'_> {
        Heading { level, text, line }
    }

    // ------------------------------------------------------------------------
    // select_title tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_select_title_none() {
        assert_eq!(select_title(&[]), None);
    }

    #[test]
    fn test_select_title_lowest_level() {
        let headings = [heading(2, "Small", 0), heading(1, "Big", 1)];
        let selection = select_title(&headings).unwrap();
        assert_eq!(selection.title.as_deref(), Some("Big"));
        assert_eq!(selection.line, 1);
    }

    #[test]
    fn test_select_title_earliest_on_tie() {
        let headings = [
            heading(1, "First", 0),
            heading(2, "Sub", 1),
            heading(1, "Second", 2),
        ];
        let selection = select_title(&headings).unwrap();
        assert_eq!(selection.title.as_deref(), Some("First"));
        assert_eq!(selection.line, 0);
    }

    #[test]
    fn test_select_title_ignores_slice_order() {
        let headings = [heading(1, "Later", 5), heading(1, "Earlier", 2)];
        assert_eq!(select_title(&headings).unwrap().line, 2);
    }

    #[test]
    fn test_select_title_trims_only_edges() {
        let headings = [heading(1, "  A  title   ", 0)];
        let selection = select_title(&headings).unwrap();
        assert_eq!(selection.title.as_deref(), Some("A  title"));
    }

    #[test]
    fn test_select_title_strips_to_nothing() {
        let headings = [heading(1, "[](http://x)", 3)];
        let selection = select_title(&headings).unwrap();
        assert_eq!(selection.title, None);
        assert_eq!(selection.line, 3);
    }

    // ------------------------------------------------------------------------
    // extract_body tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_body_without_title() {
        assert_eq!(extract_body("text", None), None);
    }

    #[test]
    fn test_body_title_is_last_line() {
        assert_eq!(extract_body("Paragraph \n\n# A title", Some(2)), None);
    }

    #[test]
    fn test_body_only_blank_lines() {
        assert_eq!(extract_body("# A title\n    \n", Some(0)), None);
    }

    #[test]
    fn test_body_skips_leading_blank_lines() {
        assert_eq!(
            extract_body("# T\n \n\t\nBody\n\nMore  \n\n", Some(0)).as_deref(),
            Some("Body\n\nMore")
        );
    }

    #[test]
    fn test_body_keeps_indentation_of_first_line() {
        assert_eq!(
            extract_body("# T\n\n    code\n", Some(0)).as_deref(),
            Some("    code")
        );
    }

    #[test]
    fn test_body_crlf() {
        assert_eq!(
            extract_body("# T\r\n\r\nOne\r\nTwo\r\n", Some(0)).as_deref(),
            Some("One\r\nTwo")
        );
    }

    // ------------------------------------------------------------------------
    // extract_lead tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_lead_absent_without_body() {
        assert_eq!(extract_lead(None), None);
    }

    #[test]
    fn test_lead_first_block() {
        assert_eq!(
            extract_lead(Some("Lead\nmultiline\n\nother")).as_deref(),
            Some("Lead\nmultiline")
        );
    }

    #[test]
    fn test_lead_skips_leading_blank_lines() {
        assert_eq!(extract_lead(Some("\n  \nLead")).as_deref(), Some("Lead"));
    }

    #[test]
    fn test_lead_whitespace_line_ends_block() {
        assert_eq!(extract_lead(Some("a\nb\n   \nc")).as_deref(), Some("a\nb"));
    }

    #[test]
    fn test_lead_crlf_joined_with_newline() {
        assert_eq!(extract_lead(Some("a\r\nb\r\n\r\nc")).as_deref(), Some("a\nb"));
    }

    // ------------------------------------------------------------------------
    // MarkdownParser tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_parse_empty() {
        assert!(MarkdownParser::new().parse("").is_empty());
    }

    #[test]
    fn test_parse_no_heading() {
        assert!(MarkdownParser::new().parse("Just text\n\nMore text").is_empty());
    }

    #[test]
    fn test_parse_bytes_invalid_utf8() {
        let err = MarkdownParser::new().parse_bytes(&[b'#', b' ', 0xff, 0xfe]).unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
    }

    #[test]
    fn test_parse_bytes_strips_bom() {
        let content = MarkdownParser::new()
            .parse_bytes("\u{feff}# Title\nBody".as_bytes())
            .unwrap();
        assert_eq!(content.title.as_deref(), Some("Title"));
        assert_eq!(content.body.as_deref(), Some("Body"));
    }
}
