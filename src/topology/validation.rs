//! Structural invariant checks for resolved meshes.
//!
//! A well-formed DCEL satisfies a handful of local link equations; each check
//! here is linear in the number of half-edges and reports the first violation
//! with the offending record's input id. Validation is optional on the load
//! path (see [`ResolveOptions`](crate::topology::resolve::ResolveOptions))
//! because the query algorithms carry their own termination bounds.

use crate::mesh_error::DcelError;
use crate::topology::dcel::Dcel;

/// Optional validation toggles for DCEL structural checks.
#[derive(Debug, Clone, Copy)]
pub struct DcelValidationOptions {
    /// Ensure `twin(twin(e)) == e` for every half-edge.
    pub check_twins: bool,
    /// Ensure `previous(next(e)) == e` and `next(previous(e)) == e`.
    pub check_cycle_links: bool,
    /// Ensure a `next` step never changes the incident face.
    pub check_cycle_faces: bool,
    /// Ensure `origin(twin(e)) == origin(next(e))`.
    pub check_destinations: bool,
    /// Ensure exactly one face lacks an outer component.
    pub check_unbounded_face: bool,
}

impl DcelValidationOptions {
    /// Enable every structural check.
    pub fn all() -> Self {
        Self {
            check_twins: true,
            check_cycle_links: true,
            check_cycle_faces: true,
            check_destinations: true,
            check_unbounded_face: true,
        }
    }
}

impl Default for DcelValidationOptions {
    fn default() -> Self {
        Self::all()
    }
}

/// Validate the mesh's link equations against the selected checks.
///
/// Each violated invariant maps to its own [`DcelError`] variant; the first
/// violation found is returned.
pub fn validate_dcel(dcel: &Dcel, options: DcelValidationOptions) -> Result<(), DcelError> {
    for e in dcel.half_edge_ids() {
        let he = dcel.half_edge(e);

        if options.check_twins && dcel.twin(he.twin) != e {
            return Err(DcelError::BrokenTwin {
                edge: he.id.clone(),
            });
        }

        if options.check_cycle_links
            && (dcel.half_edge(he.next).previous != e || dcel.half_edge(he.previous).next != e)
        {
            return Err(DcelError::BrokenLink {
                edge: he.id.clone(),
            });
        }

        if options.check_cycle_faces {
            let next = dcel.half_edge(he.next);
            if next.incident_face != he.incident_face {
                return Err(DcelError::MixedCycleFace {
                    edge: next.id.clone(),
                    expected: dcel.face(he.incident_face).id.clone(),
                    found: dcel.face(next.incident_face).id.clone(),
                });
            }
        }

        if options.check_destinations
            && dcel.half_edge(he.twin).origin != dcel.half_edge(he.next).origin
        {
            return Err(DcelError::BrokenDestination {
                edge: he.id.clone(),
            });
        }
    }

    if options.check_unbounded_face {
        let mut unbounded = dcel.face_ids().filter(|&f| dcel.face(f).is_unbounded());
        match (unbounded.next(), unbounded.next()) {
            (None, _) => return Err(DcelError::MissingOuterFace),
            (Some(first), Some(second)) => {
                return Err(DcelError::MultipleOuterFaces {
                    first: dcel.face(first).id.clone(),
                    second: dcel.face(second).id.clone(),
                });
            }
            (Some(_), None) => {}
        }
    }

    Ok(())
}
