//! Boundary face queries against the unbounded face.
//!
//! The unbounded face has no outer component; each of its inner components
//! starts a boundary cycle around one connected component of the bounded
//! region. Walking those cycles and collecting each edge's twin face yields
//! the set of faces that touch the exterior boundary.
//!
//! # Errors
//! * [`DcelError::MissingOuterFace`] / [`DcelError::MultipleOuterFaces`]:
//!   zero, or more than one, face lacks an outer component. Taking whichever
//!   candidate happens to come first would silently pick an arbitrary answer,
//!   so both cardinalities are rejected outright.
//! * [`DcelError::MalformedCycle`]: a walk exceeds the total half-edge count
//!   without returning to its start. The walk never trusts the input's cycle
//!   links enough to loop unboundedly.

use std::collections::HashSet;

use itertools::Itertools;

use crate::mesh_error::DcelError;
use crate::topology::dcel::Dcel;
use crate::topology::handle::FaceId;

/// Locates the unique unbounded face.
pub fn unbounded_face(dcel: &Dcel) -> Result<FaceId, DcelError> {
    let mut found = None;
    for f in dcel.face_ids() {
        if !dcel.face(f).is_unbounded() {
            continue;
        }
        match found {
            None => found = Some(f),
            Some(first) => {
                return Err(DcelError::MultipleOuterFaces {
                    first: dcel.face(first).id.clone(),
                    second: dcel.face(f).id.clone(),
                });
            }
        }
    }
    found.ok_or(DcelError::MissingOuterFace)
}

/// Returns the faces adjacent to the unbounded face's boundary.
///
/// The result is deduplicated (a face bordering the exterior along several
/// edges appears once) and sorted by handle, so repeated runs over the same
/// mesh yield identical output. An unbounded face with no inner components
/// yields an empty set.
pub fn adjacent_faces(dcel: &Dcel) -> Result<Vec<FaceId>, DcelError> {
    let outer = unbounded_face(dcel)?;

    let mut seen: HashSet<FaceId> = HashSet::new();
    // Any closed cycle has at most this many edges; one step more means the
    // links never come back around.
    let bound = dcel.num_half_edges();

    for &start in &dcel.face(outer).inner_components {
        // The walk conceptually includes the start edge, so a length-1 cycle
        // (an edge that is its own successor) still contributes its twin face.
        seen.insert(dcel.twin_face(start));

        let mut current = dcel.next(start);
        let mut steps = 1usize;
        while current != start {
            if steps > bound {
                return Err(DcelError::MalformedCycle {
                    start: dcel.half_edge(start).id.clone(),
                    steps,
                });
            }
            seen.insert(dcel.twin_face(current));
            current = dcel.next(current);
            steps += 1;
        }
    }

    Ok(seen.into_iter().sorted_unstable().collect())
}
