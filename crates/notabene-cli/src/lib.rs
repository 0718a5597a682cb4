//! # notabene-cli
//!
//! The `nb` command-line tool:
//! - `nb list`: filter notes and render them through a format template
//! - `nb show`: print the title, lead, and body extracted from one note
//! - `nb init`: turn a directory into a notebook

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod commands;
pub mod config;

pub use cli::{Cli, Command};
pub use commands::run;
pub use config::NotebookConfig;
