//! Note discovery and the in-memory note index.
//!
//! [`NoteIndex::build`] walks a notebook for note files, reads them
//! concurrently, and extracts their content. Each file is independent: a note
//! that cannot be read or decoded is logged and skipped while the rest of the
//! notebook is still indexed.
//!
//! # Usage
//!
//! ```rust,ignore
//! use notabene_notes::{FinderOpts, IndexOptions, NoteFinder, NoteIndex};
//!
//! let index = NoteIndex::build(&root, &IndexOptions::default()).await?;
//! for note in index.find(&FinderOpts::default()) {
//!     println!("{}", note.path);
//! }
//! ```

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use chrono::{DateTime, Utc};
use futures::stream::{self, StreamExt};
use glob::Pattern;
use log::{debug, warn};
use notabene_content::MarkdownParser;
use notabene_core::{is_hidden, relative_note_path, Error, Result};

use crate::filter::{FinderOpts, NoteFinder};
use crate::note::Note;

/// Default number of notes read at once.
pub const DEFAULT_CONCURRENCY: usize = 16;

/// Options controlling note discovery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexOptions {
    /// File extension of notes, without the dot.
    pub extension: String,
    /// Glob patterns (relative to the root) of paths to leave out.
    pub ignore: Vec<String>,
    /// Maximum number of files read concurrently.
    pub concurrency: usize,
}

impl Default for IndexOptions {
    fn default() -> Self {
        Self {
            extension: "md".to_string(),
            ignore: Vec::new(),
            concurrency: DEFAULT_CONCURRENCY,
        }
    }
}

/// All notes of a notebook, sorted by path.
#[derive(Debug, Clone, Default)]
pub struct NoteIndex {
    notes: Vec<Note>,
}

impl NoteIndex {
    /// Build an index from already loaded notes.
    pub fn from_notes(mut notes: Vec<Note>) -> Self {
        notes.sort_by(|a, b| a.path.cmp(&b.path));
        Self { notes }
    }

    /// Discover and load every note below `root`.
    ///
    /// Fails only for notebook-wide problems (bad ignore pattern, unreadable
    /// root); per-note failures are skipped with a warning.
    pub async fn build(root: &Path, options: &IndexOptions) -> Result<Self> {
        let files = discover(root, options)?;
        debug!("Discovered {} note file(s) in {}", files.len(), root.display());

        let parser = MarkdownParser::new();
        let results: Vec<Result<Note>> = stream::iter(files)
            .map(|(path, relative)| load_note(parser, path, relative))
            .buffer_unordered(options.concurrency.max(1))
            .collect()
            .await;

        let mut notes = Vec::with_capacity(results.len());
        for result in results {
            match result {
                Ok(note) => notes.push(note),
                Err(e) if e.is_document_local() => warn!("Skipping note: {e}"),
                Err(e) => return Err(e),
            }
        }

        debug!("Indexed {} note(s)", notes.len());
        Ok(Self::from_notes(notes))
    }

    /// All notes, sorted by path.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Number of indexed notes.
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Returns `true` if no note was indexed.
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Look up a note by its relative path.
    pub fn get(&self, path: &str) -> Option<&Note> {
        self.notes
            .binary_search_by(|note| note.path.as_str().cmp(path))
            .ok()
            .map(|i| &self.notes[i])
    }
}

impl NoteFinder for NoteIndex {
    fn find(&self, opts: &FinderOpts) -> Vec<&Note> {
        let matching = self.notes.iter().filter(|note| opts.matches(note));
        if opts.limit == 0 {
            matching.collect()
        } else {
            matching.take(opts.limit).collect()
        }
    }
}

/// List `(absolute path, relative path)` of every note file below `root`.
fn discover(root: &Path, options: &IndexOptions) -> Result<Vec<(PathBuf, String)>> {
    let ignore = options
        .ignore
        .iter()
        .map(|p| {
            Pattern::new(p).map_err(|e| Error::config(format!("invalid ignore pattern '{p}': {e}")))
        })
        .collect::<Result<Vec<_>>>()?;

    let root_str = root
        .to_str()
        .ok_or_else(|| Error::config(format!("notebook path is not UTF-8: {}", root.display())))?;
    let pattern = format!(
        "{}/**/*.{}",
        Pattern::escape(root_str.trim_end_matches('/')),
        Pattern::escape(&options.extension)
    );
    let entries = glob::glob(&pattern).map_err(|e| Error::config(e.to_string()))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = match entry {
            Ok(path) => path,
            Err(e) => {
                warn!("Skipping unreadable entry: {e}");
                continue;
            }
        };
        let Some(relative) = relative_note_path(root, &path, root) else {
            continue;
        };
        if is_hidden(&relative) || !path.is_file() {
            continue;
        }
        if ignore.iter().any(|p| p.matches(&relative)) {
            debug!("Ignoring {relative}");
            continue;
        }
        files.push((path, relative));
    }
    Ok(files)
}

async fn load_note(parser: MarkdownParser, path: PathBuf, relative: String) -> Result<Note> {
    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|e| Error::io_with_path(e, &path))?;
    let metadata = tokio::fs::metadata(&path)
        .await
        .map_err(|e| Error::io_with_path(e, &path))?;

    let modified = metadata
        .modified()
        .map_err(|e| Error::io_with_path(e, &path))?;
    let created = metadata.created().unwrap_or(modified);
    let content = parser.parse_bytes(&bytes).map_err(|e| e.with_path(&relative))?;

    Ok(Note {
        path: relative,
        content,
        created: to_utc(created),
        modified: to_utc(modified),
    })
}

fn to_utc(time: SystemTime) -> DateTime<Utc> {
    DateTime::<Utc>::from(time)
}

// ============================================================================
// Tests
// ============================================================================
