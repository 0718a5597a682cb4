//! The note record.

use chrono::{DateTime, Utc};
use notabene_content::Content;
use serde::Serialize;

/// A note of the notebook together with its extracted content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Note {
    /// Path relative to the notebook root, `/`-separated.
    pub path: String,
    /// Title, lead, and body extracted from the file.
    pub content: Content,
    /// Creation time (falls back to modification time).
    pub created: DateTime<Utc>,
    /// Last modification time.
    pub modified: DateTime<Utc>,
}

impl Note {
    /// File name component of the note path.
    pub fn filename(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }
}
