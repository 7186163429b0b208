//! # planar-dcel
//!
//! planar-dcel reconstructs a planar subdivision stored as a
//! doubly-connected edge list (DCEL) from three relational tables — vertices,
//! faces, half-edges — whose cross-references are opaque identifier strings,
//! and answers topological queries against the result. The one query shipped
//! today: which faces touch the boundary of the unbounded (outer) face.
//!
//! ## Pipeline
//! 1. [`io`] reads the three delimited tables into raw records, with the
//!    none sentinel for optional references resolved at parse time.
//! 2. [`topology::resolve`] replaces every identifier field with a typed
//!    handle, via one id-indexed map per table (linear total cost).
//! 3. [`algs::boundary`] locates the unbounded face and walks its inner
//!    boundary cycles, collecting adjacent faces.
//!
//! The resolved [`Dcel`](topology::dcel::Dcel) is built once and immutable
//! afterwards; the whole pipeline is single-threaded, synchronous batch work.
//! Coordinates are carried as opaque data — no geometric computation happens
//! anywhere in the crate.
//!
//! ## Errors
//! Every public API returns `Result<_, DcelError>`; all failures are fatal
//! and carry table/row/record context. See [`mesh_error::DcelError`].
//!
//! ## Usage
//! ```no_run
//! use planar_dcel::prelude::*;
//!
//! let tables = DcelTables::from_paths("vertices.csv", "faces.csv", "half_edges.csv")?;
//! let dcel = resolve(&tables)?;
//! for face in adjacent_faces(&dcel)? {
//!     println!("{}", dcel.face(face).id);
//! }
//! # Ok::<(), planar_dcel::mesh_error::DcelError>(())
//! ```

pub mod algs;
pub mod io;
pub mod mesh_error;
pub mod topology;

/// A convenient prelude to import the most-used types and functions.
pub mod prelude {
    pub use crate::algs::boundary::{adjacent_faces, unbounded_face};
    pub use crate::io::{DcelTables, RawFace, RawHalfEdge, RawVertex, Table};
    pub use crate::mesh_error::DcelError;
    pub use crate::topology::dcel::{Dcel, Face, HalfEdge, Vertex};
    pub use crate::topology::handle::{FaceId, HalfEdgeId, VertexId};
    pub use crate::topology::resolve::{ResolveOptions, resolve, resolve_with_options};
    pub use crate::topology::validation::{DcelValidationOptions, validate_dcel};
}
