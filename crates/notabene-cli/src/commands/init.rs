//! `nb init`

use std::io::Write;
use std::path::{Path, PathBuf};

use log::info;
use notabene_core::{Error, Result};

use super::resolver;
use crate::config::{NotebookConfig, CONFIG_FILE};

/// Create the marker directory and a default configuration file in `dir`.
///
/// Refuses to replace an existing configuration unless `force` is set.
/// Returns the path of the written configuration file.
pub fn cmd_init<W: Write>(dir: &Path, force: bool, out: &mut W) -> Result<PathBuf> {
    let marker = resolver().marker_dir(dir);
    let path = marker.join(CONFIG_FILE);

    if path.exists() && !force {
        return Err(Error::config(format!(
            "Notebook already initialized at {}. Use --force to overwrite.",
            dir.display()
        )));
    }

    std::fs::create_dir_all(&marker).map_err(|e| Error::io_with_path(e, &marker))?;
    let toml_str = NotebookConfig::default().to_toml_string()?;
    std::fs::write(&path, toml_str).map_err(|e| Error::io_with_path(e, &path))?;
    info!("Wrote {}", path.display());

    writeln!(out, "Initialized notebook in {}", dir.display())?;
    Ok(path)
}
