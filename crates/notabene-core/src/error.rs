//! Error types for notabene.
//!
//! All variants are shared by the content, notes, and CLI crates so that a
//! failure anywhere in a request surfaces as a single error type.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias for notabene operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in notabene.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// I/O error, with the path that was being accessed when known.
    #[error("I/O error{}: {source}", display_path(.path))]
    Io {
        /// Path being read or written
        path: Option<PathBuf>,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// A single document could not be turned into content.
    #[error("Parse error{}: {message}", display_path(.path))]
    Parse {
        /// Document the failure belongs to
        path: Option<PathBuf>,
        /// What went wrong
        message: String,
    },

    /// A date phrase could not be understood.
    #[error("Unable to parse date: '{phrase}'")]
    DateParse {
        /// The offending phrase, as given by the user
        phrase: String,
    },

    /// Configuration error.
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// A list format template is invalid.
    #[error("Template error: {message}")]
    Template {
        /// What is wrong with the template
        message: String,
    },

    /// Something required could not be located.
    #[error("Not found: {what}")]
    NotFound {
        /// Description of the missing thing
        what: String,
    },
}

fn display_path(path: &Option<PathBuf>) -> String {
    match path {
        Some(path) => format!(" in {}", path.display()),
        None => String::new(),
    }
}

impl Error {
    /// Creates an I/O error tied to the given path.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::Io {
            path: Some(path.as_ref().to_path_buf()),
            source,
        }
    }

    /// Creates a parse error without a known document path.
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Error::Parse {
            path: None,
            message: message.into(),
        }
    }

    /// Attaches a document path to a parse or I/O error that lacks one.
    pub fn with_path(self, path: impl AsRef<Path>) -> Self {
        match self {
            Error::Parse {
                path: None,
                message,
            } => Error::Parse {
                path: Some(path.as_ref().to_path_buf()),
                message,
            },
            Error::Io { path: None, source } => Error::io_with_path(source, path),
            other => other,
        }
    }

    /// Creates a date parse error naming the phrase.
    pub fn date_parse<S: Into<String>>(phrase: S) -> Self {
        Error::DateParse {
            phrase: phrase.into(),
        }
    }

    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Creates a new template error.
    pub fn template<S: Into<String>>(message: S) -> Self {
        Error::Template {
            message: message.into(),
        }
    }

    /// Creates a new not-found error.
    pub fn not_found<S: Into<String>>(what: S) -> Self {
        Error::NotFound { what: what.into() }
    }

    /// Returns whether the error only concerns a single document.
    ///
    /// Batch operations skip such documents and keep going. I/O errors count
    /// only when they carry the path of the document being read.
    pub fn is_document_local(&self) -> bool {
        matches!(self, Error::Parse { .. } | Error::Io { path: Some(_), .. })
    }
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io { path: None, source }
    }
}
