//! Markdown heading scanning and content extraction.
//!
//! - [`headings`]: ATX heading detection
//! - [`inline`]: Inline formatting to plain text
//! - [`parser`]: Title selection, body and lead slicing
//!
//! Headings follow the ATX style only (`# Title`). Setext underlines are not
//! recognized.

pub mod headings;
pub mod inline;
pub mod parser;

// Re-export key types and functions
pub use headings::{scan_headings, Heading};
pub use inline::strip_inline;
pub use parser::{extract_body, extract_lead, select_title, MarkdownParser, TitleSelection};
