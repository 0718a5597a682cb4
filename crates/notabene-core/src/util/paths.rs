//! Notebook-relative path helpers.
//!
//! Notes are identified by their path relative to the notebook root, always
//! written with `/` separators so that identities are stable across
//! platforms.

use std::path::{Component, Path, PathBuf};

/// Compute the `/`-separated path of `path` relative to the notebook `root`.
///
/// Relative inputs are taken as relative to `base` (usually the current
/// directory). Returns `None` when the path lies outside the notebook.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use notabene_core::util::paths::relative_note_path;
///
/// let root = Path::new("/home/me/notes");
/// assert_eq!(
///     relative_note_path(root, Path::new("/home/me/notes/work/todo.md"), root),
///     Some("work/todo.md".to_string())
/// );
/// assert_eq!(
///     relative_note_path(root, Path::new("journal"), Path::new("/home/me/notes")),
///     Some("journal".to_string())
/// );
/// assert_eq!(relative_note_path(root, Path::new("/etc/hosts"), root), None);
/// ```
pub fn relative_note_path(root: &Path, path: &Path, base: &Path) -> Option<String> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    };
    let absolute = normalize(&absolute);
    let root = normalize(root);

    let relative = absolute.strip_prefix(&root).ok()?;
    let parts: Vec<&str> = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => part.to_str(),
            _ => None,
        })
        .collect();
    Some(parts.join("/"))
}

/// Returns `true` if any component of a relative path starts with a dot.
///
/// ```
/// use notabene_core::util::paths::is_hidden;
///
/// assert!(is_hidden(".notabene/config.toml"));
/// assert!(is_hidden("journal/.draft.md"));
/// assert!(!is_hidden("journal/2024-01-01.md"));
/// ```
pub fn is_hidden(relative: &str) -> bool {
    relative
        .split('/')
        .any(|part| part.starts_with('.') && part != "." && part != "..")
}

/// Lexically resolve `.` and `..` components without touching the filesystem.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
