//! Notebook root resolution.
//!
//! `NotebookResolver` locates the notebook a command operates on, using an
//! explicit path, an environment variable, or a marker directory found by
//! walking up from the current directory.
//!
//! # Example
//!
//! ```no_run
//! use notabene_core::util::resolver::NotebookResolver;
//!
//! let resolver = NotebookResolver::new("notabene");
//! assert_eq!(resolver.env_var("DIR"), "NOTABENE_DIR");
//!
//! let cwd = std::env::current_dir().unwrap();
//! if let Some(root) = resolver.notebook_root(None, &cwd) {
//!     println!("Notebook: {}", root.display());
//! }
//! ```

use std::env;
use std::path::{Path, PathBuf};

use log::debug;

/// Resolver for a notebook root directory.
#[derive(Debug, Clone)]
pub struct NotebookResolver {
    /// Environment variable prefix (e.g., "NOTABENE")
    env_prefix: String,
    /// Directory that marks a notebook root (e.g., ".notabene")
    marker: String,
}

impl NotebookResolver {
    /// Create a new resolver for the given project name.
    ///
    /// The marker directory is `.<project_name>` and the environment
    /// prefix is the upper-cased name:
    /// - "notabene" → "NOTABENE", marker ".notabene"
    /// - "my-notes" → "MY_NOTES", marker ".my-notes"
    pub fn new(project_name: &str) -> Self {
        let env_prefix = project_name.to_uppercase().replace(['-', ' '], "_");

        Self {
            env_prefix,
            marker: format!(".{project_name}"),
        }
    }

    /// Get the environment variable name for a given suffix.
    ///
    /// ```
    /// use notabene_core::util::resolver::NotebookResolver;
    ///
    /// let resolver = NotebookResolver::new("notabene");
    /// assert_eq!(resolver.env_var("DIR"), "NOTABENE_DIR");
    /// ```
    pub fn env_var(&self, suffix: &str) -> String {
        format!("{}_{}", self.env_prefix, suffix)
    }

    /// Resolve the notebook root.
    ///
    /// Checks in order:
    /// 1. The explicit path, if given
    /// 2. `{PROJECT}_DIR` environment variable
    /// 3. Walk up from `start` looking for the marker directory
    pub fn notebook_root(&self, explicit: Option<&Path>, start: &Path) -> Option<PathBuf> {
        let from_env = env::var(self.env_var("DIR")).ok();
        self.resolve_from(explicit, from_env.as_deref(), start)
    }

    /// Resolution with the environment lookup already performed.
    pub fn resolve_from(
        &self,
        explicit: Option<&Path>,
        env_value: Option<&str>,
        start: &Path,
    ) -> Option<PathBuf> {
        if let Some(path) = explicit {
            debug!("Using explicit notebook path {}", path.display());
            return path.is_dir().then(|| path.to_path_buf());
        }

        if let Some(value) = env_value.filter(|v| !v.is_empty()) {
            let path = PathBuf::from(value);
            if path.is_dir() {
                debug!("Using notebook from {}", self.env_var("DIR"));
                return Some(path);
            }
        }

        self.find_marker(start)
    }

    /// Walk up from `start` to the first ancestor containing the marker.
    pub fn find_marker(&self, start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .find(|dir| dir.join(&self.marker).is_dir())
            .map(Path::to_path_buf)
    }

    /// Path of the marker directory inside a notebook root.
    pub fn marker_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.marker)
    }

    /// Get the marker directory name.
    pub fn marker(&self) -> &str {
        &self.marker
    }
}
