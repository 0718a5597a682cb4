//! Note discovery, filtering, and list rendering.
//!
//! This crate holds everything around content extraction that turns a
//! directory of markdown files into a filtered, rendered listing:
//!
//! - [`note`]: The [`Note`] record (path, content, timestamps)
//! - [`index`]: Concurrent discovery and the in-memory [`NoteIndex`]
//! - [`filter`]: Composable predicates and the [`NoteFinder`] trait
//! - [`date`]: Human-readable date phrases to timestamps
//! - [`template`]: `{{placeholder}}` format strings
//! - [`list`]: The list operation tying the above together
//!
//! Nothing is persisted: the index is rebuilt from the files on every run.

pub mod date;
pub mod filter;
pub mod index;
pub mod list;
pub mod note;
pub mod template;

pub use date::parse_date;
pub use filter::{DateDirection, DateField, Filter, FinderOpts, NoteFinder};
pub use index::{IndexOptions, NoteIndex};
pub use list::{list, ListOpts, DEFAULT_FORMAT};
pub use note::Note;
pub use template::Template;
