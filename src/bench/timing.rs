//! Timing harness for traversal benchmarks.
//!
//! [`time_traversal`] measures one traversal call and never propagates a
//! failure: a panic or error inside the timed call becomes
//! [`TimedRun::Failed`], which maps to the `-1.0` sentinel at the
//! reporting boundary. [`benchmark_all_vertices`] aggregates single runs
//! into a mean per-vertex duration, and [`benchmark_report`] packages the
//! means for every algorithm into a serializable report.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::graph::traversal::TraversalFn;
use crate::types::{Algorithm, Graph};

/// Sentinel returned in place of a duration when a timed call failed.
/// Negative, so it is distinguishable from any real elapsed time.
pub const FAILURE_SENTINEL: f64 = -1.0;

// ---------------------------------------------------------------------------
// TimedRun
// ---------------------------------------------------------------------------

/// Outcome of timing a single traversal call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimedRun {
    /// The call returned normally after the given elapsed time.
    Completed(Duration),
    /// The call panicked or returned an error; no duration is available.
    Failed,
}

impl TimedRun {
    /// Elapsed seconds, or [`FAILURE_SENTINEL`] for a failed run.
    pub fn as_secs_f64(&self) -> f64 {
        match self {
            Self::Completed(elapsed) => elapsed.as_secs_f64(),
            Self::Failed => FAILURE_SENTINEL,
        }
    }

    /// Whether the timed call failed.
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed)
    }
}

// ---------------------------------------------------------------------------
// Single-call timing
// ---------------------------------------------------------------------------

/// Time one traversal call from `source`.
///
/// The call is wrapped in `catch_unwind`: a panic inside the traversal
/// (or an error return) is swallowed here and reported as
/// [`TimedRun::Failed`] instead of propagating to the caller.
pub fn time_traversal(traverse: TraversalFn, graph: &Graph, source: usize) -> TimedRun {
    let start = Instant::now();
    let outcome = catch_unwind(AssertUnwindSafe(|| traverse(graph, source)));
    let elapsed = start.elapsed();

    match outcome {
        Ok(Ok(_)) => TimedRun::Completed(elapsed),
        Ok(Err(_)) | Err(_) => TimedRun::Failed,
    }
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

/// Mean per-vertex traversal time in seconds for one algorithm.
///
/// Runs the traversal once from every source vertex `0..n` and averages
/// the elapsed times. Failed runs contribute the `-1.0` sentinel to the
/// sum, which skews the mean downward — a known limitation inherited
/// from the measurement design, not corrected here.
pub fn benchmark_all_vertices(graph: &Graph, traverse: TraversalFn) -> f64 {
    let n = graph.vertex_count();
    let mut total = 0.0;
    for source in 0..n {
        total += time_traversal(traverse, graph, source).as_secs_f64();
    }
    total / n as f64
}

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

/// Mean timing for a single algorithm.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlgorithmTiming {
    pub algorithm: Algorithm,
    /// Mean seconds per traversal over all source vertices.
    pub mean_seconds: f64,
}

/// Aggregated benchmark results for one graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkReport {
    /// Number of vertices in the benchmarked graph.
    pub vertices: usize,
    /// Number of stored directed adjacency entries.
    pub edges: usize,
    /// One entry per benchmarked algorithm.
    pub timings: Vec<AlgorithmTiming>,
}

impl BenchmarkReport {
    /// Mean seconds for `algorithm`, if it was benchmarked.
    pub fn mean_for(&self, algorithm: Algorithm) -> Option<f64> {
        self.timings
            .iter()
            .find(|t| t.algorithm == algorithm)
            .map(|t| t.mean_seconds)
    }
}

/// Benchmark each algorithm in `algorithms` over every source vertex.
pub fn benchmark_report(graph: &Graph, algorithms: &[Algorithm]) -> BenchmarkReport {
    let timings = algorithms
        .iter()
        .map(|&algorithm| {
            let mean_seconds = benchmark_all_vertices(graph, algorithm.traversal_fn());
            debug!(%algorithm, mean_seconds, "benchmarked");
            AlgorithmTiming {
                algorithm,
                mean_seconds,
            }
        })
        .collect();

    BenchmarkReport {
        vertices: graph.vertex_count(),
        edges: graph.edge_count(),
        timings,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{GraphBenchError, Result};
    use crate::graph::traversal::bfs;

    fn always_panics(_graph: &Graph, _source: usize) -> Result<Vec<bool>> {
        panic!("traversal blew up");
    }

    fn always_errs(_graph: &Graph, _source: usize) -> Result<Vec<bool>> {
        Err(GraphBenchError::EmptyGraph)
    }

    fn path4() -> Graph {
        Graph::from_edges(4, &[(0, 1), (1, 2), (2, 3)], false).unwrap()
    }

    // -- time_traversal -----------------------------------------------------

    #[test]
    fn normal_call_yields_nonnegative_duration() {
        let g = path4();
        let run = time_traversal(bfs, &g, 0);
        assert!(!run.is_failed());
        assert!(run.as_secs_f64() >= 0.0);
    }

    #[test]
    fn panicking_call_yields_exact_sentinel() {
        let g = path4();
        let run = time_traversal(always_panics, &g, 0);
        assert!(run.is_failed());
        assert_eq!(run.as_secs_f64(), -1.0);
    }

    #[test]
    fn erroring_call_yields_exact_sentinel() {
        let g = path4();
        let run = time_traversal(always_errs, &g, 0);
        assert_eq!(run.as_secs_f64(), FAILURE_SENTINEL);
    }

    // -- benchmark_all_vertices ---------------------------------------------

    #[test]
    fn mean_over_path_graph_is_nonnegative() {
        let g = path4();
        let mean = benchmark_all_vertices(&g, bfs);
        assert!(mean >= 0.0);
    }

    #[test]
    fn mean_of_all_failures_is_the_sentinel() {
        // Every run contributes -1.0, so the mean is exactly -1.0.
        let g = Graph::with_vertices(3).unwrap();
        let mean = benchmark_all_vertices(&g, always_panics);
        assert_eq!(mean, -1.0);
    }

    // -- benchmark_report ---------------------------------------------------

    #[test]
    fn report_covers_requested_algorithms() {
        let g = path4();
        let report = benchmark_report(&g, &Algorithm::ALL);
        assert_eq!(report.vertices, 4);
        assert_eq!(report.edges, 6);
        assert_eq!(report.timings.len(), 3);
        for alg in Algorithm::ALL {
            assert!(report.mean_for(alg).unwrap() >= 0.0);
        }
    }

    #[test]
    fn report_serializes_to_json() {
        let g = path4();
        let report = benchmark_report(&g, &[Algorithm::Bfs]);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["vertices"], 4);
        assert_eq!(json["timings"][0]["algorithm"], "bfs");
    }

    #[test]
    fn mean_for_missing_algorithm_is_none() {
        let g = path4();
        let report = benchmark_report(&g, &[Algorithm::Bfs]);
        assert!(report.mean_for(Algorithm::RecursiveDfs).is_none());
    }
}
