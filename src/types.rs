//! Core domain types for GraphBench.
//!
//! The adjacency-list [`Graph`] consumed by every traversal, and the
//! [`Algorithm`] enum naming the three traversal implementations.

use serde::{Deserialize, Serialize};

use crate::error::{GraphBenchError, Result};

/// Upper bound (exclusive) on the number of vertices a graph may have.
///
/// Matches the limit enforced by the graph file format and the
/// generators: `1 <= n < 1_000_000`.
pub const MAX_VERTICES: usize = 1_000_000;

// ---------------------------------------------------------------------------
// Graph
// ---------------------------------------------------------------------------

/// An adjacency-list graph over integer vertex ids `0..n-1`.
///
/// The graph is immutable during traversal: every algorithm borrows it
/// read-only and allocates its own visited-set. Undirected graphs are
/// represented by storing both `(a, b)` and `(b, a)`; the traversals are
/// agnostic to this and simply follow whatever adjacency entries exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    adjacency: Vec<Vec<usize>>,
}

impl Graph {
    /// Create a graph with `n` isolated vertices.
    pub fn with_vertices(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(GraphBenchError::EmptyGraph);
        }
        if n >= MAX_VERTICES {
            return Err(GraphBenchError::InvalidVertexCount {
                n,
                max: MAX_VERTICES,
            });
        }
        Ok(Self {
            adjacency: vec![Vec::new(); n],
        })
    }

    /// Build a graph of `n` vertices from `(a, b)` edge pairs.
    ///
    /// When `directed` is false, the reverse edge `(b, a)` is inserted as
    /// well. Endpoints are validated against `n`.
    pub fn from_edges(n: usize, edges: &[(usize, usize)], directed: bool) -> Result<Self> {
        let mut graph = Self::with_vertices(n)?;
        for &(a, b) in edges {
            graph.add_edge(a, b)?;
            if !directed {
                graph.add_edge(b, a)?;
            }
        }
        Ok(graph)
    }

    /// Insert a single directed adjacency entry `a -> b`.
    pub fn add_edge(&mut self, a: usize, b: usize) -> Result<()> {
        let n = self.vertex_count();
        if a >= n || b >= n {
            return Err(GraphBenchError::InvalidEdge {
                a,
                b,
                vertex_count: n,
            });
        }
        self.adjacency[a].push(b);
        Ok(())
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of stored adjacency entries (directed edge count).
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// Neighbors of vertex `u`.
    ///
    /// Callers validate `u` through [`Graph::check_source`] first; an
    /// out-of-range index panics like any slice access.
    pub fn neighbors(&self, u: usize) -> &[usize] {
        &self.adjacency[u]
    }

    /// Iterate over every stored `(a, b)` adjacency entry.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(a, nbrs)| nbrs.iter().map(move |&b| (a, b)))
    }

    /// Validate that `source` names a vertex of this graph.
    pub fn check_source(&self, source: usize) -> Result<()> {
        if source >= self.vertex_count() {
            return Err(GraphBenchError::InvalidSource {
                source_vertex: source,
                vertex_count: self.vertex_count(),
            });
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Algorithm
// ---------------------------------------------------------------------------

/// The three traversal implementations GraphBench compares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    /// Queue-based breadth-first search.
    Bfs,
    /// Depth-first search using the call stack.
    RecursiveDfs,
    /// Depth-first search using an explicit stack.
    IterativeDfs,
}

impl Algorithm {
    /// Every algorithm, in the order the validation pass compares them.
    pub const ALL: [Algorithm; 3] = [
        Algorithm::RecursiveDfs,
        Algorithm::IterativeDfs,
        Algorithm::Bfs,
    ];

    /// Canonical string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bfs => "bfs",
            Self::RecursiveDfs => "recursive-dfs",
            Self::IterativeDfs => "iterative-dfs",
        }
    }

    /// Parse from a loose string (case-insensitive, underscores accepted).
    pub fn from_str_loose(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "bfs" => Some(Self::Bfs),
            "recursive-dfs" | "recursivedfs" | "rec-dfs" => Some(Self::RecursiveDfs),
            "iterative-dfs" | "iterativedfs" | "iter-dfs" | "stack-dfs" => {
                Some(Self::IterativeDfs)
            }
            _ => None,
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::from_str_loose(s).ok_or_else(|| {
            format!("unknown algorithm '{s}' (expected bfs, recursive-dfs, or iterative-dfs)")
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
