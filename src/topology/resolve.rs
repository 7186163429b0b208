//! Reference resolution: raw tables → fully-linked [`Dcel`].
//!
//! Every reference field in the input is an identifier string naming a record
//! in one of the three tables. Resolution builds one id → slot index map per
//! table *before* resolving any field, so each lookup is O(1) and the total
//! cost stays linear in rows and fields. Re-scanning a table per reference
//! would make large meshes quadratic; the index-first discipline is the load
//! path's one performance-critical choice.
//!
//! # Errors
//! * [`DcelError::DuplicateId`]: two records in one table share an id; every
//!   reference into that table would be ambiguous, so indexing fails before
//!   any field is resolved.
//! * [`DcelError::DanglingReference`]: a field names an id with no record in
//!   the expected table. The error reports the field, the id, and the table
//!   searched; no placeholder record is ever substituted.

use hashbrown::HashMap;

use crate::io::{DcelTables, Table};
use crate::mesh_error::DcelError;
use crate::topology::dcel::{Dcel, Face, HalfEdge, Vertex};
use crate::topology::handle::{FaceId, HalfEdgeId, VertexId};
use crate::topology::validation::{DcelValidationOptions, validate_dcel};

/// Options for [`resolve_with_options`].
#[derive(Debug, Clone, Copy)]
pub struct ResolveOptions {
    /// Run the full structural validation of
    /// [`validate_dcel`] on the linked mesh before returning it.
    pub validate_topology: bool,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            validate_topology: false,
        }
    }
}

/// Identifier → slot index for one table.
struct IdIndex<'a> {
    table: Table,
    slots: HashMap<&'a str, u32>,
}

impl<'a> IdIndex<'a> {
    /// Builds the index in one pass, rejecting duplicate ids.
    fn build(
        table: Table,
        ids: impl ExactSizeIterator<Item = &'a str>,
    ) -> Result<Self, DcelError> {
        let mut slots = HashMap::with_capacity(ids.len());
        for (slot, id) in ids.enumerate() {
            if slots.insert(id, slot as u32).is_some() {
                return Err(DcelError::DuplicateId {
                    table,
                    id: id.to_string(),
                });
            }
        }
        Ok(Self { table, slots })
    }

    /// Resolves one identifier field to its slot.
    fn lookup(&self, field: &'static str, id: &str) -> Result<u32, DcelError> {
        self.slots
            .get(id)
            .copied()
            .ok_or_else(|| DcelError::DanglingReference {
                table: self.table,
                field,
                id: id.to_string(),
            })
    }
}

/// Resolves the raw tables into a linked [`Dcel`], without validation.
pub fn resolve(tables: &DcelTables) -> Result<Dcel, DcelError> {
    resolve_with_options(tables, ResolveOptions::default())
}

/// Resolves the raw tables into a linked [`Dcel`].
///
/// The three record vectors are allocated together here and share the
/// `Dcel`'s lifetime; cross-references are handles, not ownership edges.
/// With `validate_topology` set, the structural invariants of the mesh are
/// checked before the `Dcel` is handed out.
pub fn resolve_with_options(
    tables: &DcelTables,
    options: ResolveOptions,
) -> Result<Dcel, DcelError> {
    let vertex_index = IdIndex::build(
        Table::Vertices,
        tables.vertices.iter().map(|r| r.id.as_str()),
    )?;
    let face_index = IdIndex::build(Table::Faces, tables.faces.iter().map(|r| r.id.as_str()))?;
    let edge_index = IdIndex::build(
        Table::HalfEdges,
        tables.half_edges.iter().map(|r| r.id.as_str()),
    )?;

    let vertices = tables
        .vertices
        .iter()
        .map(|raw| {
            Ok(Vertex {
                id: raw.id.clone(),
                coordinates: raw.coordinates,
                incident_edge: HalfEdgeId::new(
                    edge_index.lookup("incident_edge", &raw.incident_edge)?,
                ),
            })
        })
        .collect::<Result<Vec<_>, DcelError>>()?;

    let faces = tables
        .faces
        .iter()
        .map(|raw| {
            let outer_component = raw
                .outer_component
                .as_deref()
                .map(|id| -> Result<HalfEdgeId, DcelError> {
                    Ok(HalfEdgeId::new(edge_index.lookup("outer_component", id)?))
                })
                .transpose()?;
            let inner_components = raw
                .inner_components
                .iter()
                .map(|id| -> Result<HalfEdgeId, DcelError> {
                    Ok(HalfEdgeId::new(edge_index.lookup("inner_components", id)?))
                })
                .collect::<Result<Vec<_>, DcelError>>()?;
            Ok(Face {
                id: raw.id.clone(),
                outer_component,
                inner_components,
            })
        })
        .collect::<Result<Vec<_>, DcelError>>()?;

    let half_edges = tables
        .half_edges
        .iter()
        .map(|raw| {
            Ok(HalfEdge {
                id: raw.id.clone(),
                origin: VertexId::new(vertex_index.lookup("origin", &raw.origin)?),
                twin: HalfEdgeId::new(edge_index.lookup("twin", &raw.twin)?),
                incident_face: FaceId::new(face_index.lookup("incident_face", &raw.incident_face)?),
                next: HalfEdgeId::new(edge_index.lookup("next", &raw.next)?),
                previous: HalfEdgeId::new(edge_index.lookup("previous", &raw.previous)?),
            })
        })
        .collect::<Result<Vec<_>, DcelError>>()?;

    log::debug!(
        "resolved {} vertices, {} faces, {} half-edges",
        vertices.len(),
        faces.len(),
        half_edges.len()
    );

    let dcel = Dcel::new(vertices, faces, half_edges);
    if options.validate_topology {
        validate_dcel(&dcel, DcelValidationOptions::all())?;
    }
    Ok(dcel)
}
