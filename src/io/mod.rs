//! Tabular input for DCEL records.
//!
//! This module is the boundary between raw delimited text and the typed world
//! of the resolver: it yields per-table vectors of *raw* records whose
//! reference fields are still identifier strings. Turning those identifiers
//! into handles is the resolver's job
//! ([`topology::resolve`](crate::topology::resolve)).

pub mod csv;

use std::fmt;
use std::fs::File;
use std::path::Path;

use crate::mesh_error::DcelError;

/// Names one of the three input tables, for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    /// The vertex record table.
    Vertices,
    /// The face record table.
    Faces,
    /// The half-edge record table.
    HalfEdges,
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Table::Vertices => "vertex",
            Table::Faces => "face",
            Table::HalfEdges => "half-edge",
        };
        f.write_str(name)
    }
}

/// One vertex row, references unresolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawVertex {
    /// Record identifier.
    pub id: String,
    /// Coordinates parsed from the quoted `"(x,y)"` column.
    pub coordinates: (i64, i64),
    /// Identifier of a half-edge originating at this vertex.
    pub incident_edge: String,
}

/// One face row, references unresolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFace {
    /// Record identifier.
    pub id: String,
    /// Identifiers of one half-edge per hole boundary cycle. The none
    /// sentinel in the input becomes an empty list here.
    pub inner_components: Vec<String>,
    /// Identifier of a half-edge on the outer boundary, or `None` for the
    /// unbounded face. The sentinel is resolved at parse time; no magic
    /// string survives past this module.
    pub outer_component: Option<String>,
}

/// One half-edge row, references unresolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawHalfEdge {
    /// Record identifier.
    pub id: String,
    /// Identifier of the origin vertex.
    pub origin: String,
    /// Identifier of the oppositely-oriented partner half-edge.
    pub twin: String,
    /// Identifier of the face this half-edge bounds.
    pub incident_face: String,
    /// Identifier of the successor in the face-boundary cycle.
    pub next: String,
    /// Identifier of the predecessor in the face-boundary cycle.
    pub previous: String,
}

/// The three raw tables, ready for resolution.
#[derive(Debug, Clone, Default)]
pub struct DcelTables {
    /// Raw vertex rows, in input order.
    pub vertices: Vec<RawVertex>,
    /// Raw face rows, in input order.
    pub faces: Vec<RawFace>,
    /// Raw half-edge rows, in input order.
    pub half_edges: Vec<RawHalfEdge>,
}

impl DcelTables {
    /// Reads the three tables from files.
    ///
    /// # Errors
    /// * [`DcelError::Io`] if a file cannot be opened, with the offending path.
    /// * Any parse error from the underlying readers.
    pub fn from_paths(
        vertices: impl AsRef<Path>,
        faces: impl AsRef<Path>,
        half_edges: impl AsRef<Path>,
    ) -> Result<Self, DcelError> {
        let open = |path: &Path| {
            File::open(path).map_err(|source| DcelError::Io {
                path: path.to_path_buf(),
                source,
            })
        };
        Ok(Self {
            vertices: csv::read_vertices(open(vertices.as_ref())?)?,
            faces: csv::read_faces(open(faces.as_ref())?)?,
            half_edges: csv::read_half_edges(open(half_edges.as_ref())?)?,
        })
    }
}
