//! Resolved DCEL records and their owning container.
//!
//! A [`Dcel`] is produced once by [`resolve`](crate::topology::resolve::resolve)
//! and only queried afterwards. It owns three flat vectors, one per record
//! type, allocated together at resolution time; every cross-reference is a
//! [`handle`](crate::topology::handle) into one of them. Records carry their
//! original string ids so diagnostics and query results can speak the input's
//! language.

use crate::topology::handle::{FaceId, HalfEdgeId, VertexId};

/// A vertex of the subdivision.
///
/// Coordinates are carried as opaque data for the caller's benefit; no part
/// of the crate performs arithmetic on them.
#[derive(Debug, Clone)]
pub struct Vertex {
    /// Identifier from the input table.
    pub id: String,
    /// The `(x, y)` pair from the input, unused by any query.
    pub coordinates: (i64, i64),
    /// One half-edge whose origin is this vertex.
    pub incident_edge: HalfEdgeId,
}

/// A face of the subdivision.
#[derive(Debug, Clone)]
pub struct Face {
    /// Identifier from the input table.
    pub id: String,
    /// A half-edge on the face's outer boundary cycle. `None` marks the
    /// unique unbounded face.
    pub outer_component: Option<HalfEdgeId>,
    /// One half-edge per hole boundary cycle; empty if the face has no holes.
    pub inner_components: Vec<HalfEdgeId>,
}

impl Face {
    /// Whether this face is the unbounded (outer) face.
    #[inline]
    pub fn is_unbounded(&self) -> bool {
        self.outer_component.is_none()
    }
}

/// One directed side of an edge, bounding the face on its left.
#[derive(Debug, Clone)]
pub struct HalfEdge {
    /// Identifier from the input table.
    pub id: String,
    /// The vertex this half-edge originates from.
    pub origin: VertexId,
    /// The oppositely-oriented half-edge sharing the same underlying edge.
    pub twin: HalfEdgeId,
    /// The face this half-edge bounds.
    pub incident_face: FaceId,
    /// The next half-edge in the same face-boundary cycle.
    pub next: HalfEdgeId,
    /// The previous half-edge in the same face-boundary cycle.
    pub previous: HalfEdgeId,
}

/// A fully-linked doubly-connected edge list.
///
/// Built once, immutable afterwards. Handles returned by one accessor are
/// valid arguments to every other accessor for the lifetime of the `Dcel`.
#[derive(Debug, Clone, Default)]
pub struct Dcel {
    vertices: Vec<Vertex>,
    faces: Vec<Face>,
    half_edges: Vec<HalfEdge>,
}

impl Dcel {
    pub(crate) fn new(vertices: Vec<Vertex>, faces: Vec<Face>, half_edges: Vec<HalfEdge>) -> Self {
        Self {
            vertices,
            faces,
            half_edges,
        }
    }

    /// The vertex addressed by `v`.
    #[inline]
    pub fn vertex(&self, v: VertexId) -> &Vertex {
        &self.vertices[v.index()]
    }

    /// The face addressed by `f`.
    #[inline]
    pub fn face(&self, f: FaceId) -> &Face {
        &self.faces[f.index()]
    }

    /// The half-edge addressed by `e`.
    #[inline]
    pub fn half_edge(&self, e: HalfEdgeId) -> &HalfEdge {
        &self.half_edges[e.index()]
    }

    /// Number of vertices.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Number of faces.
    #[inline]
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    /// Number of half-edges.
    #[inline]
    pub fn num_half_edges(&self) -> usize {
        self.half_edges.len()
    }

    /// Handles of all vertices, in input order.
    pub fn vertex_ids(&self) -> impl ExactSizeIterator<Item = VertexId> + '_ {
        (0..self.vertices.len() as u32).map(VertexId::new)
    }

    /// Handles of all faces, in input order.
    pub fn face_ids(&self) -> impl ExactSizeIterator<Item = FaceId> + '_ {
        (0..self.faces.len() as u32).map(FaceId::new)
    }

    /// Handles of all half-edges, in input order.
    pub fn half_edge_ids(&self) -> impl ExactSizeIterator<Item = HalfEdgeId> + '_ {
        (0..self.half_edges.len() as u32).map(HalfEdgeId::new)
    }

    /// Looks up a face by its input identifier. Linear scan; meant for tests
    /// and presentation, not for bulk resolution.
    pub fn find_face(&self, id: &str) -> Option<FaceId> {
        self.face_ids().find(|&f| self.face(f).id == id)
    }

    /// Looks up a half-edge by its input identifier. Linear scan.
    pub fn find_half_edge(&self, id: &str) -> Option<HalfEdgeId> {
        self.half_edge_ids().find(|&e| self.half_edge(e).id == id)
    }

    /// Looks up a vertex by its input identifier. Linear scan.
    pub fn find_vertex(&self, id: &str) -> Option<VertexId> {
        self.vertex_ids().find(|&v| self.vertex(v).id == id)
    }

    /// Successor of `e` in its face-boundary cycle.
    #[inline]
    pub fn next(&self, e: HalfEdgeId) -> HalfEdgeId {
        self.half_edges[e.index()].next
    }

    /// The oppositely-oriented partner of `e`.
    #[inline]
    pub fn twin(&self, e: HalfEdgeId) -> HalfEdgeId {
        self.half_edges[e.index()].twin
    }

    /// The face on the other side of `e`'s underlying edge.
    #[inline]
    pub fn twin_face(&self, e: HalfEdgeId) -> FaceId {
        let twin = self.half_edges[e.index()].twin;
        self.half_edges[twin.index()].incident_face
    }
}
