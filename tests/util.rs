#![allow(dead_code)]
use planar_dcel::prelude::*;

/// Id of the unbounded face in meshes built by these helpers.
pub const OUTER: &str = "f_outer";

pub fn raw_vertex(id: &str, x: i64, y: i64, incident_edge: &str) -> RawVertex {
    RawVertex {
        id: id.to_string(),
        coordinates: (x, y),
        incident_edge: incident_edge.to_string(),
    }
}

pub fn raw_half_edge(
    id: &str,
    origin: &str,
    twin: &str,
    incident_face: &str,
    next: &str,
    previous: &str,
) -> RawHalfEdge {
    RawHalfEdge {
        id: id.to_string(),
        origin: origin.to_string(),
        twin: twin.to_string(),
        incident_face: incident_face.to_string(),
        next: next.to_string(),
        previous: previous.to_string(),
    }
}

/// Append one closed `n`-gon to the tables: a bounded face `face_id` whose
/// cycle runs through edges `{tag}_e{i}`, plus the reverse twin cycle
/// `{tag}_t{i}` bounding [`OUTER`]. Returns the id of the twin edge that
/// starts the component's boundary cycle on the unbounded side.
///
/// `n == 1` builds the degenerate single-edge component: each half-edge is
/// its own successor and predecessor.
pub fn add_polygon(tables: &mut DcelTables, face_id: &str, tag: &str, n: usize) -> String {
    assert!(n >= 1, "polygon needs at least one edge");
    let v = |i: usize| format!("{tag}_v{}", i % n);
    let e = |i: usize| format!("{tag}_e{}", i % n);
    let t = |i: usize| format!("{tag}_t{}", i % n);

    for i in 0..n {
        tables.vertices.push(raw_vertex(&v(i), i as i64, 0, &e(i)));
        // Interior cycle: origin v_i, destination v_{i+1}.
        tables.half_edges.push(raw_half_edge(
            &e(i),
            &v(i),
            &t(i),
            face_id,
            &e(i + 1),
            &e(i + n - 1),
        ));
        // Twin cycle runs the other way around, bounding the exterior.
        tables.half_edges.push(raw_half_edge(
            &t(i),
            &v(i + 1),
            &e(i),
            OUTER,
            &t(i + n - 1),
            &t(i + 1),
        ));
    }
    tables.faces.push(RawFace {
        id: face_id.to_string(),
        inner_components: Vec::new(),
        outer_component: Some(e(0)),
    });
    t(0)
}

/// Append the unbounded face row, with one boundary-cycle start edge per
/// bounded component.
pub fn add_outer(tables: &mut DcelTables, inner_starts: &[String]) {
    tables.faces.push(RawFace {
        id: OUTER.to_string(),
        inner_components: inner_starts.to_vec(),
        outer_component: None,
    });
}

/// Raw tables for a mesh of disjoint polygon components, one bounded face
/// per `(face_id, n)` entry, all listed as holes of the unbounded face.
pub fn polygon_mesh(components: &[(&str, usize)]) -> DcelTables {
    let mut tables = DcelTables::default();
    let mut starts = Vec::new();
    for (i, &(face_id, n)) in components.iter().enumerate() {
        let tag = format!("c{i}");
        starts.push(add_polygon(&mut tables, face_id, &tag, n));
    }
    add_outer(&mut tables, &starts);
    tables
}

/// Input ids of the given faces.
pub fn face_names(dcel: &Dcel, faces: &[FaceId]) -> Vec<String> {
    faces.iter().map(|&f| dcel.face(f).id.clone()).collect()
}

/// Assert vec is a permutation of another vec (order-agnostic).
pub fn assert_permutation<T: Ord + Clone + std::fmt::Debug>(got: &[T], want: &[T]) {
    let mut a = got.to_vec();
    a.sort();
    let mut b = want.to_vec();
    b.sort();
    assert_eq!(a, b, "not a permutation\n got={:?}\nwant={:?}", got, want);
}
