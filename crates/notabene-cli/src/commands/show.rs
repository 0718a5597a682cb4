//! `nb show`

use std::io::Write;
use std::path::Path;

use notabene_content::{Content, MarkdownParser};
use notabene_core::{Error, Result};

/// Extract the content of a single note file.
pub fn load_content(path: &Path) -> Result<Content> {
    let bytes = std::fs::read(path).map_err(|e| Error::io_with_path(e, path))?;
    MarkdownParser::new()
        .parse_bytes(&bytes)
        .map_err(|e| e.with_path(path))
}

/// Print the title, lead, and body of a note as pretty JSON.
pub fn cmd_show<W: Write>(path: &Path, out: &mut W) -> Result<()> {
    let content = load_content(path)?;
    serde_json::to_writer_pretty(&mut *out, &content)
        .map_err(|e| Error::from(std::io::Error::from(e)))?;
    writeln!(out)?;
    Ok(())
}
