//! Synthetic graph generators.
//!
//! Two families used to feed the benchmark harness:
//! - [`complete_graph`] — every ordered pair `(i, j)`, `i != j`
//! - [`sparse_graph`] — per-vertex degree bounded by `n * degree_ratio`,
//!   neighbors sampled without replacement
//!
//! Randomness is an explicit `StdRng` parameter rather than process-wide
//! state; [`rng_from_seed`] builds one from an optional seed so runs are
//! reproducible when the caller wants them to be.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::error::{GraphBenchError, Result};
use crate::types::{Graph, MAX_VERTICES};

/// Build an RNG from an optional seed (`None` = seeded from entropy).
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn check_vertex_count(n: usize) -> Result<()> {
    if n == 0 {
        return Err(GraphBenchError::EmptyGraph);
    }
    if n >= MAX_VERTICES {
        return Err(GraphBenchError::InvalidVertexCount {
            n,
            max: MAX_VERTICES,
        });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Complete graph
// ---------------------------------------------------------------------------

/// Generate the complete directed graph on `n` vertices.
///
/// Every ordered pair `(i, j)` with `i != j` becomes an adjacency entry,
/// so the edge count is `n * (n - 1)`.
pub fn complete_graph(n: usize) -> Result<Graph> {
    check_vertex_count(n)?;

    let mut graph = Graph::with_vertices(n)?;
    for i in 0..n {
        for j in 0..n {
            if i != j {
                graph.add_edge(i, j)?;
            }
        }
    }

    info!(vertices = n, edges = graph.edge_count(), "generated complete graph");
    Ok(graph)
}

// ---------------------------------------------------------------------------
// Sparse graph
// ---------------------------------------------------------------------------

/// Generate a directed graph where `deg(v) <= n * degree_ratio` for every
/// vertex `v`. Small ratios produce very sparse graphs.
///
/// Each vertex draws its degree uniformly from `0..=k` with
/// `k = min(n * degree_ratio, n - 1)`, then samples that many distinct
/// neighbors from the other vertices. `degree_ratio` must lie strictly
/// between 0 and 1.
pub fn sparse_graph(n: usize, degree_ratio: f64, rng: &mut StdRng) -> Result<Graph> {
    check_vertex_count(n)?;
    if !(degree_ratio > 0.0 && degree_ratio < 1.0) {
        return Err(GraphBenchError::InvalidDegreeRatio {
            ratio: degree_ratio,
        });
    }

    let k = ((n as f64 * degree_ratio) as usize).min(n - 1);

    let mut graph = Graph::with_vertices(n)?;
    for i in 0..n {
        let degree = rng.gen_range(0..=k);
        // Sample from 0..n-1, then shift values >= i up by one so the
        // range covers every vertex except i itself.
        for value in sample_distinct(n - 1, degree, rng) {
            let neighbor = if value >= i { value + 1 } else { value };
            graph.add_edge(i, neighbor)?;
        }
    }

    info!(
        vertices = n,
        edges = graph.edge_count(),
        degree_ratio,
        "generated sparse graph"
    );
    Ok(graph)
}

/// Sample `k` distinct values from `0..n` using Floyd's algorithm.
///
/// O(k) insertions regardless of `n`; requires `k <= n`.
fn sample_distinct(n: usize, k: usize, rng: &mut StdRng) -> HashSet<usize> {
    debug_assert!(k <= n);
    let mut chosen = HashSet::with_capacity(k);
    for i in (n - k)..n {
        let candidate = rng.gen_range(0..=i);
        if !chosen.insert(candidate) {
            // candidate was already picked in an earlier round; i itself
            // cannot have been, so it keeps the sample size exact.
            chosen.insert(i);
        }
    }
    chosen
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
