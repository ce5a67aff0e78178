//! Error types for GraphBench.
//!
//! One crate-wide error enum plus a `Result` alias. Precondition
//! violations (empty graph, out-of-range source) are contract errors and
//! never recovered from; a traversal mismatch aborts the validation pass
//! that produced it. Timing failures are intentionally *not* represented
//! here — the timing harness converts them to a sentinel locally.

use crate::types::Algorithm;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, GraphBenchError>;

/// All errors GraphBench can surface to a caller.
#[derive(Debug, thiserror::Error)]
pub enum GraphBenchError {
    /// A graph must have at least one vertex.
    #[error("graph has no vertices")]
    EmptyGraph,

    /// Vertex count outside the supported range.
    #[error("invalid vertex count {n}: must be between 1 and {max} (exclusive)")]
    InvalidVertexCount { n: usize, max: usize },

    /// A traversal was asked to start from a vertex the graph does not have.
    #[error("invalid source vertex {source_vertex}: graph has {vertex_count} vertices")]
    InvalidSource {
        source_vertex: usize,
        vertex_count: usize,
    },

    /// An edge references a vertex the graph does not have.
    #[error("invalid edge ({a}, {b}): graph has {vertex_count} vertices")]
    InvalidEdge {
        a: usize,
        b: usize,
        vertex_count: usize,
    },

    /// Degree ratio for the sparse generator must lie strictly in (0, 1).
    #[error("invalid degree ratio {ratio}: must be strictly between 0 and 1")]
    InvalidDegreeRatio { ratio: f64 },

    /// Two traversal algorithms disagreed on the reachability set.
    #[error("{first} and {second} produced different visited sets from source vertex {source_vertex}")]
    TraversalMismatch {
        first: Algorithm,
        second: Algorithm,
        source_vertex: usize,
    },

    /// A graph file could not be parsed.
    #[error("malformed graph file at line {line}: {reason}")]
    MalformedGraphFile { line: usize, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}
