//! Note filters.
//!
//! A [`Filter`] is an independent predicate over a [`Note`]. A query is a
//! list of filters combined with AND, plus an optional result limit; any
//! [`NoteFinder`] evaluates it.
//!
//! # Example
//!
//! ```rust
//! use notabene_notes::filter::{Filter, FinderOpts};
//!
//! let opts = FinderOpts {
//!     filters: vec![
//!         Filter::Path(vec!["journal".to_string()]),
//!         Filter::Match("rust async".to_string()),
//!     ],
//!     limit: 10,
//! };
//! assert_eq!(opts.filters.len(), 2);
//! ```

use chrono::{DateTime, Utc};

use crate::note::Note;

/// Which timestamp of a note a date filter looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateField {
    /// Creation time
    Created,
    /// Last modification time
    Modified,
}

/// How a note's timestamp is compared with the filter date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateDirection {
    /// Same UTC calendar day
    On,
    /// Strictly earlier
    Before,
    /// Strictly later
    After,
}

/// A predicate over notes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    /// Note path equals one of the given paths or lies below one of them.
    Path(Vec<String>),
    /// Every whitespace-separated term occurs in the title, body, or path
    /// (case-insensitive).
    Match(String),
    /// Compare a timestamp of the note with a date.
    Date {
        /// Timestamp to compare
        field: DateField,
        /// Comparison to apply
        direction: DateDirection,
        /// Reference point
        date: DateTime<Utc>,
    },
}

impl Filter {
    /// Returns `true` if the note satisfies this filter.
    pub fn matches(&self, note: &Note) -> bool {
        match self {
            Filter::Path(paths) => paths.iter().any(|prefix| path_matches(&note.path, prefix)),
            Filter::Match(terms) => terms_match(note, terms),
            Filter::Date {
                field,
                direction,
                date,
            } => {
                let value = match field {
                    DateField::Created => note.created,
                    DateField::Modified => note.modified,
                };
                match direction {
                    DateDirection::On => value.date_naive() == date.date_naive(),
                    DateDirection::Before => value < *date,
                    DateDirection::After => value > *date,
                }
            }
        }
    }
}

fn path_matches(path: &str, prefix: &str) -> bool {
    let prefix = prefix.trim_end_matches('/');
    if prefix.is_empty() {
        return true;
    }
    path == prefix
        || path
            .strip_prefix(prefix)
            .is_some_and(|rest| rest.starts_with('/'))
}

fn terms_match(note: &Note, terms: &str) -> bool {
    let haystacks: Vec<String> = [
        note.content.title.as_deref(),
        note.content.body.as_deref(),
        Some(note.path.as_str()),
    ]
    .into_iter()
    .flatten()
    .map(str::to_lowercase)
    .collect();

    terms
        .split_whitespace()
        .map(str::to_lowercase)
        .all(|term| haystacks.iter().any(|h| h.contains(&term)))
}

/// A query over the notes of a notebook.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FinderOpts {
    /// Filters that must all match.
    pub filters: Vec<Filter>,
    /// Maximum number of results; 0 means unlimited.
    pub limit: usize,
}

impl FinderOpts {
    /// Returns `true` if the note satisfies every filter.
    pub fn matches(&self, note: &Note) -> bool {
        self.filters.iter().all(|filter| filter.matches(note))
    }
}

/// Source of notes that can answer a [`FinderOpts`] query.
pub trait NoteFinder {
    /// Notes matching every filter, in a stable order, truncated to the limit.
    fn find(&self, opts: &FinderOpts) -> Vec<&Note>;
}

// ============================================================================
// Tests
// ============================================================================
