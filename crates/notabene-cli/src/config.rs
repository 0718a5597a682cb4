//! Notebook configuration.
//!
//! Read from `<notebook>/.notabene/config.toml` (or the file given with
//! `--config`). Every key is optional:
//!
//! ```toml
//! [note]
//! extension = "md"
//! ignore = ["drafts/**"]
//!
//! [list]
//! format = "{{path}} {{title}}"
//! limit = 0
//! ```

use std::path::Path;

use log::debug;
use notabene_core::{Error, Result};
use notabene_notes::{IndexOptions, DEFAULT_FORMAT};
use serde::{Deserialize, Serialize};

/// Name of the configuration file inside the marker directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Top-level notebook configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NotebookConfig {
    /// Which files are notes.
    pub note: NoteConfig,
    /// Defaults of `nb list`.
    pub list: ListConfig,
}

/// `[note]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NoteConfig {
    /// File extension of notes, without the dot.
    pub extension: String,
    /// Glob patterns of paths to leave out, relative to the root.
    pub ignore: Vec<String>,
}

impl Default for NoteConfig {
    fn default() -> Self {
        Self {
            extension: "md".to_string(),
            ignore: Vec::new(),
        }
    }
}

/// `[list]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ListConfig {
    /// Default line template.
    pub format: String,
    /// Default result limit; 0 means unlimited.
    pub limit: usize,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            format: DEFAULT_FORMAT.to_string(),
            limit: 0,
        }
    }
}

impl NotebookConfig {
    /// Load the configuration file, falling back to defaults if it is missing.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        Self::from_toml_str(&content)
            .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| Error::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the configuration as TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// Discovery options derived from the `[note]` section.
    pub fn index_options(&self) -> IndexOptions {
        IndexOptions {
            extension: self.note.extension.clone(),
            ignore: self.note.ignore.clone(),
            ..IndexOptions::default()
        }
    }

    fn validate(&self) -> Result<()> {
        let extension = &self.note.extension;
        if extension.is_empty() || extension.contains(['/', '.', '*']) {
            return Err(Error::config(format!(
                "note.extension must be a bare extension such as \"md\", got \"{extension}\""
            )));
        }
        Ok(())
    }
}
