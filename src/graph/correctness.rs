//! Cross-algorithm correctness validation.
//!
//! Every traversal from the same (graph, source) pair must produce the
//! same visited-set. [`outputs_match`] compares an arbitrary slice of
//! results; [`validate_source`] and [`validate_all_sources`] run the
//! three algorithms and abort at the first divergence, naming the pair
//! of algorithms and the source vertex that disagreed.

use tracing::debug;

use crate::error::{GraphBenchError, Result};
use crate::types::{Algorithm, Graph};

/// Pairs checked per source, in order. First mismatch wins.
const CHECKED_PAIRS: [(Algorithm, Algorithm); 3] = [
    (Algorithm::RecursiveDfs, Algorithm::IterativeDfs),
    (Algorithm::IterativeDfs, Algorithm::Bfs),
    (Algorithm::Bfs, Algorithm::RecursiveDfs),
];

/// Check that every result in `results` equals every other.
///
/// Adjacent comparison is sufficient: equality is transitive, so a chain
/// of matches covers all pairs.
pub fn outputs_match(results: &[Vec<bool>]) -> bool {
    results.windows(2).all(|pair| pair[0] == pair[1])
}

/// Run every algorithm from `source` and return the results along with
/// whether they all matched, in [`Algorithm::ALL`] order.
pub fn compare_from_source(graph: &Graph, source: usize) -> Result<(bool, Vec<Vec<bool>>)> {
    let mut results = Vec::with_capacity(Algorithm::ALL.len());
    for alg in Algorithm::ALL {
        results.push(alg.run(graph, source)?);
    }
    Ok((outputs_match(&results), results))
}

/// Validate that the three algorithms agree from one source vertex.
///
/// Returns [`GraphBenchError::TraversalMismatch`] identifying the first
/// pair that diverged.
pub fn validate_source(graph: &Graph, source: usize) -> Result<()> {
    let recursive = Algorithm::RecursiveDfs.run(graph, source)?;
    let iterative = Algorithm::IterativeDfs.run(graph, source)?;
    let breadth = Algorithm::Bfs.run(graph, source)?;

    let result_of = |alg: Algorithm| match alg {
        Algorithm::RecursiveDfs => &recursive,
        Algorithm::IterativeDfs => &iterative,
        Algorithm::Bfs => &breadth,
    };

    for (first, second) in CHECKED_PAIRS {
        if result_of(first) != result_of(second) {
            return Err(GraphBenchError::TraversalMismatch {
                first,
                second,
                source_vertex: source,
            });
        }
    }
    Ok(())
}

/// Validate the whole graph: all pairwise comparisons from every source
/// vertex `0..n`.
///
/// Aborts at the first mismatch — later sources are not checked, since a
/// single divergence already invalidates the graph for benchmarking.
pub fn validate_all_sources(graph: &Graph) -> Result<()> {
    for source in 0..graph.vertex_count() {
        validate_source(graph, source)?;
    }
    debug!(
        vertices = graph.vertex_count(),
        "all traversal outputs matched"
    );
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
