//! List format templates.
//!
//! A template is a format string with `{{name}}` placeholders, compiled once
//! and rendered for each listed note.
//!
//! | Placeholder    | Value                                   |
//! |----------------|-----------------------------------------|
//! | `{{title}}`    | Extracted title                         |
//! | `{{lead}}`     | First paragraph of the body             |
//! | `{{body}}`     | Everything after the title heading      |
//! | `{{path}}`     | Path relative to the notebook root      |
//! | `{{filename}}` | File name of the note                   |
//! | `{{created}}`  | Creation time, `YYYY-MM-DD HH:MM` (UTC) |
//! | `{{modified}}` | Modification time, same format          |
//!
//! Absent fields render as the empty string.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use notabene_core::{Error, Result};
use regex::Regex;

use crate::note::Note;

const PLACEHOLDER: &str = r"\{\{\s*([A-Za-z_]+)\s*\}\}";
const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Title,
    Lead,
    Body,
    Path,
    Filename,
    Created,
    Modified,
}

impl FromStr for Field {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        match name {
            "title" => Ok(Field::Title),
            "lead" => Ok(Field::Lead),
            "body" => Ok(Field::Body),
            "path" => Ok(Field::Path),
            "filename" => Ok(Field::Filename),
            "created" => Ok(Field::Created),
            "modified" => Ok(Field::Modified),
            other => Err(Error::template(format!("unknown placeholder '{{{{{other}}}}}'"))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Field(Field),
}

/// A compiled list format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    /// Compile a format string.
    ///
    /// Fails on unknown placeholder names and on `{{` that does not open a
    /// well-formed placeholder.
    pub fn parse(format: &str) -> Result<Self> {
        let re = Regex::new(PLACEHOLDER).map_err(|e| Error::template(e.to_string()))?;

        let mut segments = Vec::new();
        let mut last = 0;
        for caps in re.captures_iter(format) {
            let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            push_literal(&mut segments, &format[last..whole.start()])?;
            segments.push(Segment::Field(name.as_str().parse()?));
            last = whole.end();
        }
        push_literal(&mut segments, &format[last..])?;

        Ok(Self { segments })
    }

    /// Render the template for a note.
    pub fn render(&self, note: &Note) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Field(field) => match field {
                    Field::Title => out.push_str(note.content.title.as_deref().unwrap_or("")),
                    Field::Lead => out.push_str(note.content.lead.as_deref().unwrap_or("")),
                    Field::Body => out.push_str(note.content.body.as_deref().unwrap_or("")),
                    Field::Path => out.push_str(&note.path),
                    Field::Filename => out.push_str(note.filename()),
                    Field::Created => out.push_str(&format_date(note.created)),
                    Field::Modified => out.push_str(&format_date(note.modified)),
                },
            }
        }
        out
    }
}

fn push_literal(segments: &mut Vec<Segment>, text: &str) -> Result<()> {
    if text.contains("{{") {
        return Err(Error::template(format!("malformed placeholder in '{text}'")));
    }
    if !text.is_empty() {
        segments.push(Segment::Literal(text.to_string()));
    }
    Ok(())
}

fn format_date(date: DateTime<Utc>) -> String {
    date.format(DATE_FORMAT).to_string()
}

// ============================================================================
// Tests
// ============================================================================
