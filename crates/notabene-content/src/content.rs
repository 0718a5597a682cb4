//! The metadata extracted from a single note.

use serde::{Deserialize, Serialize};

/// Title, lead, and body of a note.
///
/// Each field is either absent or a non-empty string: text that reduces to
/// nothing after trimming is stored as `None`, never as `Some("")`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    /// Plain text of the most significant heading.
    pub title: Option<String>,
    /// First contiguous block of non-blank lines of the body.
    pub lead: Option<String>,
    /// Everything after the title heading, verbatim.
    pub body: Option<String>,
}

impl Content {
    /// Returns `true` if no field was extracted.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.lead.is_none() && self.body.is_none()
    }
}

/// Wrap `text` as an optional value, treating whitespace-only text as absent.
///
/// The text itself is kept untouched when present.
///
/// ```
/// use notabene_content::non_empty;
///
/// assert_eq!(non_empty("  "), None);
/// assert_eq!(non_empty(" a "), Some(" a ".to_string()));
/// ```
pub fn non_empty(text: &str) -> Option<String> {
    if text.trim().is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}
