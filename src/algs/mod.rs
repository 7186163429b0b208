//! Query algorithms over a resolved [`Dcel`](crate::topology::dcel::Dcel).

pub mod boundary;

pub use boundary::{adjacent_faces, unbounded_face};
