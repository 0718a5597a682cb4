//! Utility modules for path handling.
//!
//! # Modules
//!
//! - [`paths`]: Notebook-relative path helpers
//! - [`resolver`]: Notebook root resolution

pub mod paths;
pub mod resolver;
