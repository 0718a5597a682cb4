//! ATX heading detection.
//!
//! A line is a heading candidate when, after its indentation, it starts with
//! one or more `#` characters immediately followed by whitespace. The number
//! of `#` characters is the level; everything after that whitespace is the
//! heading text. Candidates whose text is blank are not headings.
//!
//! Only the start of a line is considered, and indentation never
//! disqualifies a heading:
//!
//! ```rust
//! use notabene_content::markdown::headings::scan_headings;
//!
//! let headings = scan_headings("   # Title\n#NotAHeading\n## Section #2\n#  \n");
//! assert_eq!(headings.len(), 2);
//! assert_eq!((headings[0].level, headings[0].line), (1, 0));
//! assert_eq!((headings[1].level, headings[1].text), (2, "Section #2"));
//! ```

/// A heading found in a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Heading<'a> {
    /// Number of leading `#` characters; smaller is more significant.
    pub level: usize,
    /// Raw text after the opening sequence, not yet trimmed or stripped.
    pub text: &'a str,
    /// Zero-based index of the heading's line.
    pub line: usize,
}

/// One line of a document, located by byte offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Line<'a> {
    pub index: usize,
    /// Byte offset of the first character of the line.
    pub start: usize,
    /// Byte offset just past the line terminator.
    pub end: usize,
    /// Line content without its terminator.
    pub text: &'a str,
}

impl Line<'_> {
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Iterate the lines of `source`; `\n` and `\r\n` both terminate a line.
pub(crate) fn lines(source: &str) -> impl Iterator<Item = Line<'_>> {
    let mut start = 0;
    source
        .split_inclusive('\n')
        .enumerate()
        .map(move |(index, raw)| {
            let text = raw.strip_suffix('\n').unwrap_or(raw);
            let text = text.strip_suffix('\r').unwrap_or(text);
            let line = Line {
                index,
                start,
                end: start + raw.len(),
                text,
            };
            start += raw.len();
            line
        })
}

/// Scan a document for valid headings, in order of appearance.
pub fn scan_headings(source: &str) -> Vec<Heading<'_>> {
    let headings: Vec<Heading<'_>> = lines(source)
        .filter_map(|line| {
            let (level, text) = heading_candidate(line.text)?;
            (!text.trim().is_empty()).then_some(Heading {
                level,
                text,
                line: line.index,
            })
        })
        .collect();

    log::debug!("Found {} heading(s)", headings.len());
    headings
}

/// Split a line into its heading level and raw text, if it opens a heading.
fn heading_candidate(line: &str) -> Option<(usize, &str)> {
    let trimmed = line.trim_start();
    let level = trimmed.bytes().take_while(|&b| b == b'#').count();
    if level == 0 {
        return None;
    }

    let mut rest = trimmed[level..].chars();
    match rest.next() {
        Some(c) if c.is_whitespace() => Some((level, rest.as_str())),
        _ => None,
    }
}

// ============================================================================
// Tests
// ============================================================================
