//! `DcelError`: unified error type for planar-dcel public APIs.
//!
//! Every failure mode in the load → resolve → query pipeline has a dedicated
//! variant carrying enough context (table, row, record id, field) to diagnose
//! the malformed input. All errors are fatal: the pipeline is a one-shot batch
//! computation over a fixed input, so nothing is retried or silently skipped.

use std::path::PathBuf;
use thiserror::Error;

use crate::io::Table;

/// Unified error type for planar-dcel operations.
#[derive(Debug, Error)]
pub enum DcelError {
    /// A named input file could not be opened or read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// The offending file path.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// An input stream could not be read to completion.
    #[error("I/O error: {0}")]
    ReadFailed(#[from] std::io::Error),
    /// A row has the wrong number of fields or an unparseable value.
    #[error("parse error in {table} table, row {row}: {message}")]
    Parse {
        /// The table being read.
        table: Table,
        /// 1-based data row index (the header row is not counted).
        row: usize,
        /// What went wrong.
        message: String,
    },
    /// Two records in the same table share an id; references into the table
    /// would be ambiguous.
    #[error("duplicate id `{id}` in {table} table")]
    DuplicateId {
        /// The table containing the duplicate.
        table: Table,
        /// The repeated identifier.
        id: String,
    },
    /// A reference field names an id with no matching record.
    #[error("dangling reference: field `{field}` names `{id}`, but no such record exists in the {table} table")]
    DanglingReference {
        /// The table the id was expected in.
        table: Table,
        /// The referencing column.
        field: &'static str,
        /// The unresolved identifier.
        id: String,
    },
    /// No face lacks an outer component, so there is no unbounded face.
    #[error("no unbounded face: every face has an outer component")]
    MissingOuterFace,
    /// More than one face lacks an outer component.
    #[error("multiple unbounded faces: `{first}` and `{second}` both lack an outer component")]
    MultipleOuterFaces {
        /// First offending face id.
        first: String,
        /// Second offending face id.
        second: String,
    },
    /// A boundary walk failed to return to its starting half-edge within the
    /// total half-edge count; the cycle links are broken.
    #[error("malformed cycle: walk from half-edge `{start}` did not close after {steps} steps")]
    MalformedCycle {
        /// Id of the half-edge the walk started from.
        start: String,
        /// Number of steps taken before giving up.
        steps: usize,
    },
    /// `twin(twin(e)) != e` for some half-edge.
    #[error("half-edge `{edge}` is not its own twin's twin")]
    BrokenTwin {
        /// The offending half-edge id.
        edge: String,
    },
    /// `previous(next(e)) != e` or `next(previous(e)) != e` for some half-edge.
    #[error("half-edge `{edge}` has inconsistent next/previous links")]
    BrokenLink {
        /// The offending half-edge id.
        edge: String,
    },
    /// A `next`-cycle visits half-edges bounding different faces.
    #[error("half-edge `{edge}` bounds face `{found}` but its cycle belongs to face `{expected}`")]
    MixedCycleFace {
        /// The offending half-edge id.
        edge: String,
        /// The face the rest of the cycle bounds.
        expected: String,
        /// The face this half-edge claims to bound.
        found: String,
    },
    /// `origin(twin(e)) != origin(next(e))` for some half-edge.
    #[error("half-edge `{edge}`: twin origin and next origin disagree on the destination vertex")]
    BrokenDestination {
        /// The offending half-edge id.
        edge: String,
    },
}
