//! The list operation: find notes and render one line per match.

use log::debug;
use notabene_core::Result;

use crate::filter::{FinderOpts, NoteFinder};
use crate::template::Template;

/// Format used when none is given.
pub const DEFAULT_FORMAT: &str = "{{path}} {{title}}";

/// Options of a list request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListOpts {
    /// Template for each line; [`DEFAULT_FORMAT`] when absent.
    pub format: Option<String>,
    /// Which notes to list.
    pub finder: FinderOpts,
}

/// Render every note matching `opts` and hand each line to `print`.
///
/// The template is compiled before any note is looked up, so an invalid
/// format fails without output. Returns the number of listed notes.
pub fn list<F, P>(opts: &ListOpts, finder: &F, mut print: P) -> Result<usize>
where
    F: NoteFinder + ?Sized,
    P: FnMut(&str) -> Result<()>,
{
    let template = Template::parse(opts.format.as_deref().unwrap_or(DEFAULT_FORMAT))?;

    let notes = finder.find(&opts.finder);
    debug!("Listing {} note(s)", notes.len());
    for note in &notes {
        print(&template.render(note))?;
    }
    Ok(notes.len())
}

// ============================================================================
// Tests
// ============================================================================
