//! Command-line surface: report the faces adjacent to the unbounded face.
//!
//! Takes the three table paths as positional arguments, prints one adjacent
//! face identifier per line, and exits non-zero with a diagnostic on any
//! error.

use std::process::ExitCode;

use planar_dcel::prelude::*;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() != 3 {
        eprintln!("usage: dcel-boundary <vertex-table> <face-table> <half-edge-table>");
        return ExitCode::FAILURE;
    }
    match run(&args[0], &args[1], &args[2]) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("dcel-boundary: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(vertices: &str, faces: &str, half_edges: &str) -> Result<(), DcelError> {
    let tables = DcelTables::from_paths(vertices, faces, half_edges)?;
    let dcel = resolve(&tables)?;
    for face in adjacent_faces(&dcel)? {
        println!("{}", dcel.face(face).id);
    }
    Ok(())
}
