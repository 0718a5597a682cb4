//! `nb list`

use std::io::Write;
use std::path::Path;

use chrono::{DateTime, Utc};
use log::{info, warn};
use notabene_core::{relative_note_path, Error, Result};
use notabene_notes::{
    list, parse_date, DateDirection, DateField, Filter, FinderOpts, ListOpts, NoteIndex,
};

use super::Notebook;
use crate::cli::ListArgs;
use crate::config::NotebookConfig;

/// Turn command-line arguments into list options.
///
/// Paths are resolved against `cwd` and made relative to `root`; paths
/// outside the notebook are dropped with a warning, and no path filter is
/// applied when none remain. Date phrases are resolved against `now`, and the
/// first one that cannot be parsed fails the whole request.
pub fn build_list_opts(
    args: &ListArgs,
    config: &NotebookConfig,
    root: &Path,
    cwd: &Path,
    now: DateTime<Utc>,
) -> Result<ListOpts> {
    let mut filters = Vec::new();

    if !args.paths.is_empty() {
        let mut paths = Vec::with_capacity(args.paths.len());
        for path in &args.paths {
            match relative_note_path(root, path, cwd) {
                Some(relative) => paths.push(relative),
                None => warn!("Ignoring {}: outside of the notebook", path.display()),
            }
        }
        if !paths.is_empty() {
            filters.push(Filter::Path(paths));
        }
    }

    if let Some(terms) = args.terms.as_deref().filter(|t| !t.trim().is_empty()) {
        filters.push(Filter::Match(terms.to_string()));
    }

    let dates = [
        (&args.created, DateField::Created, DateDirection::On),
        (&args.created_before, DateField::Created, DateDirection::Before),
        (&args.created_after, DateField::Created, DateDirection::After),
        (&args.modified_before, DateField::Modified, DateDirection::Before),
        (&args.modified_after, DateField::Modified, DateDirection::After),
    ];
    for (phrase, field, direction) in dates {
        if let Some(phrase) = phrase {
            filters.push(Filter::Date {
                field,
                direction,
                date: parse_date(phrase, now)?,
            });
        }
    }

    Ok(ListOpts {
        format: Some(
            args.format
                .clone()
                .unwrap_or_else(|| config.list.format.clone()),
        ),
        finder: FinderOpts {
            filters,
            limit: args.limit.unwrap_or(config.list.limit),
        },
    })
}

/// Index the notebook and print one line per matching note, followed by a
/// summary line.
pub async fn cmd_list<W: Write>(
    notebook: &Notebook,
    args: &ListArgs,
    cwd: &Path,
    now: DateTime<Utc>,
    out: &mut W,
) -> Result<usize> {
    let opts = build_list_opts(args, &notebook.config, &notebook.root, cwd, now)?;
    let index = NoteIndex::build(&notebook.root, &notebook.config.index_options()).await?;
    info!("Indexed {} note(s) in {}", index.len(), notebook.root.display());

    let count = list(&opts, &index, |line| writeln!(out, "{line}").map_err(Error::from))?;
    writeln!(out, "\nFound {count} result(s)")?;
    Ok(count)
}
