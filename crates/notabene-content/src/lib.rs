//! Title, lead, and body extraction from markdown notes.
//!
//! This crate turns the raw text of a note into a [`Content`] record so that
//! notes can be indexed, listed, and rendered without authors maintaining
//! separate metadata fields.
//!
//! # Modules
//!
//! - [`content`]: The extracted [`Content`] record
//! - [`markdown`]: Heading scanning, inline stripping, and extraction
//!   - [`markdown::headings`]: ATX heading detection
//!   - [`markdown::inline`]: Inline formatting to plain text
//!   - [`markdown::parser`]: Title selection, body and lead slicing
//!
//! # Example
//!
//! ```rust
//! use notabene_content::MarkdownParser;
//!
//! let content = MarkdownParser::new().parse("# A **title**\nLead line\n\nMore");
//! assert_eq!(content.title.as_deref(), Some("A title"));
//! assert_eq!(content.lead.as_deref(), Some("Lead line"));
//! assert_eq!(content.body.as_deref(), Some("Lead line\n\nMore"));
//! ```

pub mod content;
pub mod markdown;

pub use content::{non_empty, Content};
pub use markdown::{
    extract_body, extract_lead, scan_headings, select_title, strip_inline, Heading,
    MarkdownParser, TitleSelection,
};
