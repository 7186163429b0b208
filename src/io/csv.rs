//! Delimited-table reader for DCEL records.
//!
//! # Supported format
//! - Comma-delimited text with exactly one header row per table (skipped,
//!   never interpreted).
//! - A field may be wrapped in double quotes, in which case it may contain
//!   the delimiter; the vertex coordinate column `"(x,y)"` and a face's
//!   quoted inner-component list rely on this.
//! - The none sentinel for optional reference columns is the token `None`
//!   (case-insensitive) or an empty field.
//!
//! # Limitations
//! - Escaped (doubled) quotes inside a quoted field are not supported.
//! - Rows are records, one per line; embedded newlines in fields are not
//!   supported.
//!
//! # Errors
//! Every malformed row is reported as [`DcelError::Parse`] carrying the table
//! name and the 1-based data row index, so diagnostics point at the input
//! line that needs fixing.

use std::io::Read;

use crate::io::{RawFace, RawHalfEdge, RawVertex, Table};
use crate::mesh_error::DcelError;

/// Splits one row into fields on the delimiter, honoring double quotes.
/// Surrounding quotes are stripped from quoted fields.
fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }
    fields.push(current);
    fields
}

/// Interprets an optional reference column: the none sentinel becomes `None`.
fn parse_optional(field: &str) -> Option<String> {
    let trimmed = field.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("none") {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn parse_error(table: Table, row: usize, message: impl Into<String>) -> DcelError {
    DcelError::Parse {
        table,
        row,
        message: message.into(),
    }
}

fn expect_arity(table: Table, row: usize, fields: &[String], want: usize) -> Result<(), DcelError> {
    if fields.len() != want {
        return Err(parse_error(
            table,
            row,
            format!("expected {want} fields, found {}", fields.len()),
        ));
    }
    Ok(())
}

/// Parses the `(x,y)` coordinate field into an integer pair.
fn parse_coordinates(table: Table, row: usize, field: &str) -> Result<(i64, i64), DcelError> {
    let trimmed = field.trim();
    let inner = trimmed
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(|| parse_error(table, row, format!("malformed coordinate pair `{trimmed}`")))?;
    let (x, y) = inner
        .split_once(',')
        .ok_or_else(|| parse_error(table, row, format!("malformed coordinate pair `{trimmed}`")))?;
    let parse_int = |raw: &str| {
        raw.trim()
            .parse::<i64>()
            .map_err(|_| parse_error(table, row, format!("invalid coordinate `{}`", raw.trim())))
    };
    Ok((parse_int(x)?, parse_int(y)?))
}

/// Iterates data rows of one table: header skipped, blank lines ignored,
/// yielding `(row_index, fields)` with 1-based indices.
fn data_rows(contents: &str) -> impl Iterator<Item = (usize, Vec<String>)> + '_ {
    contents
        .lines()
        .skip(1)
        .filter(|line| !line.trim().is_empty())
        .enumerate()
        .map(|(i, line)| (i + 1, split_fields(line)))
}

/// Reads the vertex table: `id, "(x,y)", incident-edge id`.
pub fn read_vertices<R: Read>(mut reader: R) -> Result<Vec<RawVertex>, DcelError> {
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;

    let mut vertices = Vec::new();
    for (row, fields) in data_rows(&contents) {
        expect_arity(Table::Vertices, row, &fields, 3)?;
        let id = fields[0].trim();
        if id.is_empty() {
            return Err(parse_error(Table::Vertices, row, "empty vertex id"));
        }
        vertices.push(RawVertex {
            id: id.to_string(),
            coordinates: parse_coordinates(Table::Vertices, row, &fields[1])?,
            incident_edge: fields[2].trim().to_string(),
        });
    }
    Ok(vertices)
}

/// Reads the face table: `id, inner-component id list | None, outer-component id | None`.
pub fn read_faces<R: Read>(mut reader: R) -> Result<Vec<RawFace>, DcelError> {
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;

    let mut faces = Vec::new();
    for (row, fields) in data_rows(&contents) {
        expect_arity(Table::Faces, row, &fields, 3)?;
        let id = fields[0].trim();
        if id.is_empty() {
            return Err(parse_error(Table::Faces, row, "empty face id"));
        }
        let inner_components = match parse_optional(&fields[1]) {
            None => Vec::new(),
            Some(list) => list
                .split(',')
                .map(|part| part.trim().to_string())
                .filter(|part| !part.is_empty())
                .collect(),
        };
        faces.push(RawFace {
            id: id.to_string(),
            inner_components,
            outer_component: parse_optional(&fields[2]),
        });
    }
    Ok(faces)
}

/// Reads the half-edge table: `id, origin, twin, incident-face, next, previous`.
pub fn read_half_edges<R: Read>(mut reader: R) -> Result<Vec<RawHalfEdge>, DcelError> {
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;

    let mut half_edges = Vec::new();
    for (row, fields) in data_rows(&contents) {
        expect_arity(Table::HalfEdges, row, &fields, 6)?;
        let id = fields[0].trim();
        if id.is_empty() {
            return Err(parse_error(Table::HalfEdges, row, "empty half-edge id"));
        }
        half_edges.push(RawHalfEdge {
            id: id.to_string(),
            origin: fields[1].trim().to_string(),
            twin: fields[2].trim().to_string(),
            incident_face: fields[3].trim().to_string(),
            next: fields[4].trim().to_string(),
            previous: fields[5].trim().to_string(),
        });
    }
    Ok(half_edges)
}
