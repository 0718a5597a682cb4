//! notabene core: shared errors and path utilities.
//!
//! This crate provides the foundational types used across all notabene
//! crates. It has no internal notabene dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`util`]: Notebook root resolution and relative path helpers

pub mod error;
pub mod util;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};

pub use util::paths::{is_hidden, relative_note_path};
pub use util::resolver::NotebookResolver;
