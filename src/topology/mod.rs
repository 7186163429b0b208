//! Core types for the resolved planar subdivision.
//!
//! This module provides:
//! - Strong index handles for the three record types ([`handle`])
//! - The resolved record types and owning [`Dcel`] container ([`dcel`])
//! - Identifier resolution from raw tables ([`resolve`])
//! - Structural invariant checks ([`validation`])
//!
//! Most users will call [`resolve::resolve`] on loaded tables and then hand
//! the [`dcel::Dcel`] to the query algorithms in [`crate::algs`].

pub mod dcel;
pub mod handle;
pub mod resolve;
pub mod validation;

pub use dcel::{Dcel, Face, HalfEdge, Vertex};
pub use handle::{FaceId, HalfEdgeId, VertexId};
