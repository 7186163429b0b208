use planar_dcel::io::csv::{read_faces, read_half_edges, read_vertices};
use planar_dcel::prelude::*;

const VERTEX_TABLE: &str = "\
id,coordinates,incident_edge
v1,\"(0,0)\",e1
v2,\"(1,0)\",e2
v3,\"(1,1)\",e3
v4,\"(0,1)\",e4
";

const FACE_TABLE: &str = "\
id,inner_components,outer_component
f0,\"e1t,e5t\",None
f1,None,e1
f2,,e5
";

const HALF_EDGE_TABLE: &str = "\
id,origin,twin,incident_face,next,previous
e1,v1,e1t,f1,e2,e4
e1t,v2,e1,f0,e4t,e2t
";

#[test]
fn vertex_table_parses_quoted_coordinates() {
    let vertices = read_vertices(VERTEX_TABLE.as_bytes()).unwrap();
    assert_eq!(vertices.len(), 4);
    assert_eq!(vertices[0].id, "v1");
    assert_eq!(vertices[0].coordinates, (0, 0));
    assert_eq!(vertices[0].incident_edge, "e1");
    assert_eq!(vertices[2].coordinates, (1, 1));
}

#[test]
fn face_table_resolves_sentinels_at_parse_time() {
    let faces = read_faces(FACE_TABLE.as_bytes()).unwrap();
    assert_eq!(faces.len(), 3);

    // Unbounded face: quoted hole list, sentinel outer component.
    assert_eq!(faces[0].inner_components, vec!["e1t", "e5t"]);
    assert_eq!(faces[0].outer_component, None);

    // Bounded faces: `None` token and empty field both mean "no holes".
    assert!(faces[1].inner_components.is_empty());
    assert_eq!(faces[1].outer_component, Some("e1".to_string()));
    assert!(faces[2].inner_components.is_empty());
    assert_eq!(faces[2].outer_component, Some("e5".to_string()));
}

#[test]
fn half_edge_table_parses_all_reference_columns() {
    let half_edges = read_half_edges(HALF_EDGE_TABLE.as_bytes()).unwrap();
    assert_eq!(half_edges.len(), 2);
    let e1 = &half_edges[0];
    assert_eq!(
        (
            e1.id.as_str(),
            e1.origin.as_str(),
            e1.twin.as_str(),
            e1.incident_face.as_str(),
            e1.next.as_str(),
            e1.previous.as_str(),
        ),
        ("e1", "v1", "e1t", "f1", "e2", "e4")
    );
}

#[test]
fn header_row_is_skipped_not_parsed() {
    // The header's coordinate column is not a valid pair; parsing it would
    // fail, so success here proves it was skipped.
    let vertices = read_vertices(VERTEX_TABLE.as_bytes()).unwrap();
    assert!(vertices.iter().all(|v| v.id != "id"));
}

#[test]
fn blank_lines_are_ignored() {
    let table = "id,coordinates,incident_edge\n\nv1,\"(2,3)\",e1\n\n";
    let vertices = read_vertices(table.as_bytes()).unwrap();
    assert_eq!(vertices.len(), 1);
    assert_eq!(vertices[0].coordinates, (2, 3));
}

#[test]
fn wrong_field_count_reports_table_and_row() {
    let table = "id,coordinates,incident_edge\nv1,\"(0,0)\",e1\nv2,\"(1,0)\"\n";
    let err = read_vertices(table.as_bytes()).expect_err("expected arity error");
    assert!(
        matches!(
            err,
            DcelError::Parse {
                table: Table::Vertices,
                row: 2,
                ..
            }
        ),
        "unexpected error: {err:?}"
    );
}

#[test]
fn bad_coordinate_reports_row() {
    let table = "id,coordinates,incident_edge\nv1,\"(zero,0)\",e1\n";
    let err = read_vertices(table.as_bytes()).expect_err("expected coordinate error");
    assert!(matches!(
        err,
        DcelError::Parse {
            table: Table::Vertices,
            row: 1,
            ..
        }
    ));
}

#[test]
fn negative_coordinates_are_integers_too() {
    let table = "id,coordinates,incident_edge\nv1,\"(-3,-14)\",e1\n";
    let vertices = read_vertices(table.as_bytes()).unwrap();
    assert_eq!(vertices[0].coordinates, (-3, -14));
}

#[test]
fn half_edge_arity_is_six() {
    let table = "id,origin,twin,incident_face,next,previous\ne1,v1,e1t,f1,e2\n";
    let err = read_half_edges(table.as_bytes()).expect_err("expected arity error");
    assert!(matches!(
        err,
        DcelError::Parse {
            table: Table::HalfEdges,
            row: 1,
            ..
        }
    ));
}

#[test]
fn missing_file_reports_path() {
    let err = DcelTables::from_paths(
        "/no/such/vertices.csv",
        "/no/such/faces.csv",
        "/no/such/half_edges.csv",
    )
    .expect_err("expected I/O error");
    assert!(
        matches!(
            &err,
            DcelError::Io { path, .. } if path.ends_with("vertices.csv")
        ),
        "unexpected error: {err:?}"
    );
}

#[test]
fn tables_load_end_to_end_from_files() {
    let dir = std::env::temp_dir().join(format!("planar-dcel-io-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let vpath = dir.join("vertices.csv");
    let fpath = dir.join("faces.csv");
    let hpath = dir.join("half_edges.csv");
    std::fs::write(&vpath, VERTEX_TABLE).unwrap();
    std::fs::write(
        &fpath,
        "id,inner_components,outer_component\nf0,\"e1t\",None\nf1,None,e1\n",
    )
    .unwrap();
    std::fs::write(
        &hpath,
        "id,origin,twin,incident_face,next,previous\n\
         e1,v1,e1t,f1,e2,e4\ne2,v2,e2t,f1,e3,e1\ne3,v3,e3t,f1,e4,e2\ne4,v4,e4t,f1,e1,e3\n\
         e1t,v2,e1,f0,e4t,e2t\ne2t,v3,e2,f0,e1t,e3t\ne3t,v4,e3,f0,e2t,e4t\ne4t,v1,e4,f0,e3t,e1t\n",
    )
    .unwrap();

    let tables = DcelTables::from_paths(&vpath, &fpath, &hpath).unwrap();
    let dcel = resolve_with_options(
        &tables,
        ResolveOptions {
            validate_topology: true,
        },
    )
    .unwrap();
    let adjacent = adjacent_faces(&dcel).unwrap();
    assert_eq!(adjacent.len(), 1);
    assert_eq!(dcel.face(adjacent[0]).id, "f1");

    std::fs::remove_dir_all(&dir).ok();
}
