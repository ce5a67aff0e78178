//! Graph traversal algorithms.
//!
//! Three reachability traversals over an adjacency-list graph:
//! - [`bfs`] — queue-based breadth-first search
//! - [`recursive_dfs`] — depth-first search on the call stack
//! - [`iterative_dfs`] — depth-first search on an explicit stack
//!
//! All three share the signature `fn(&Graph, usize) -> Result<Vec<bool>>`
//! and must produce identical visited-sets for the same (graph, source)
//! pair — that equality is what [`crate::graph::correctness`] checks.

use std::collections::VecDeque;

use crate::error::Result;
use crate::types::{Algorithm, Graph};

/// Function-pointer type shared by all traversals, so the timing harness
/// and the validation pass can treat them uniformly.
pub type TraversalFn = fn(&Graph, usize) -> Result<Vec<bool>>;

impl Algorithm {
    /// The traversal function implementing this algorithm.
    pub fn traversal_fn(&self) -> TraversalFn {
        match self {
            Self::Bfs => bfs,
            Self::RecursiveDfs => recursive_dfs,
            Self::IterativeDfs => iterative_dfs,
        }
    }

    /// Run this algorithm from `source`.
    pub fn run(&self, graph: &Graph, source: usize) -> Result<Vec<bool>> {
        (self.traversal_fn())(graph, source)
    }
}

// ---------------------------------------------------------------------------
// BFS
// ---------------------------------------------------------------------------

/// Breadth-first search from `source`.
///
/// Maintains a FIFO frontier seeded with `source`, which is marked
/// visited immediately. Each vertex is enqueued at most once, so the
/// whole traversal is O(V + E).
pub fn bfs(graph: &Graph, source: usize) -> Result<Vec<bool>> {
    graph.check_source(source)?;

    let mut visited = vec![false; graph.vertex_count()];
    visited[source] = true;

    let mut queue = VecDeque::new();
    queue.push_back(source);
    while let Some(u) = queue.pop_front() {
        for &v in graph.neighbors(u) {
            if !visited[v] {
                visited[v] = true;
                queue.push_back(v);
            }
        }
    }
    Ok(visited)
}

// ---------------------------------------------------------------------------
// Recursive DFS
// ---------------------------------------------------------------------------

/// Depth-first search from `source`, using the call stack.
///
/// Recursion depth equals the depth of the DFS tree, bounded by the
/// vertex count — a chain graph of length ~n can overflow the thread
/// stack. [`iterative_dfs`] is the variant to reach for on such inputs;
/// this one is kept as the reference implementation for cross-checking.
pub fn recursive_dfs(graph: &Graph, source: usize) -> Result<Vec<bool>> {
    graph.check_source(source)?;

    let mut visited = vec![false; graph.vertex_count()];
    visited[source] = true;
    visit_neighbors(graph, source, &mut visited);
    Ok(visited)
}

fn visit_neighbors(graph: &Graph, u: usize, visited: &mut [bool]) {
    for &v in graph.neighbors(u) {
        if !visited[v] {
            visited[v] = true;
            visit_neighbors(graph, v, visited);
        }
    }
}

// ---------------------------------------------------------------------------
// Iterative DFS
// ---------------------------------------------------------------------------

/// Depth-first search from `source`, using an explicit LIFO stack.
///
/// `source` starts unvisited so the single check-then-mark at the top of
/// the loop handles it like any other vertex. Unvisited neighbors are
/// pushed eagerly, which means a vertex can sit on the stack more than
/// once before its first pop; the not-visited guard skips the later
/// copies. Total pushes are bounded by the edge count.
pub fn iterative_dfs(graph: &Graph, source: usize) -> Result<Vec<bool>> {
    graph.check_source(source)?;

    let mut visited = vec![false; graph.vertex_count()];

    let mut stack = vec![source];
    while let Some(u) = stack.pop() {
        if !visited[u] {
            visited[u] = true;
            for &v in graph.neighbors(u) {
                if !visited[v] {
                    stack.push(v);
                }
            }
        }
    }
    Ok(visited)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GraphBenchError;
    use test_case::test_case;

    /// Path graph 0 - 1 - 2 - 3, undirected.
    fn path4() -> Graph {
        Graph::from_edges(4, &[(0, 1), (1, 2), (2, 3)], false).unwrap()
    }

    /// Two components: {0, 1} joined by an edge, {2} isolated, {3, 4} joined.
    fn disconnected() -> Graph {
        Graph::from_edges(5, &[(0, 1), (3, 4)], false).unwrap()
    }

    fn visited_ids(visited: &[bool]) -> Vec<usize> {
        visited
            .iter()
            .enumerate()
            .filter_map(|(i, &v)| v.then_some(i))
            .collect()
    }

    // -- shared contract ----------------------------------------------------

    #[test_case(super::bfs; "bfs")]
    #[test_case(super::recursive_dfs; "recursive dfs")]
    #[test_case(super::iterative_dfs; "iterative dfs")]
    fn rejects_out_of_range_source(traverse: TraversalFn) {
        let g = path4();
        let err = traverse(&g, 4).unwrap_err();
        assert!(matches!(err, GraphBenchError::InvalidSource { source_vertex: 4, .. }));
    }

    #[test_case(super::bfs; "bfs")]
    #[test_case(super::recursive_dfs; "recursive dfs")]
    #[test_case(super::iterative_dfs; "iterative dfs")]
    fn visits_whole_path_from_end(traverse: TraversalFn) {
        let g = path4();
        let visited = traverse(&g, 0).unwrap();
        assert_eq!(visited, vec![true, true, true, true]);
    }

    #[test_case(super::bfs; "bfs")]
    #[test_case(super::recursive_dfs; "recursive dfs")]
    #[test_case(super::iterative_dfs; "iterative dfs")]
    fn singleton_graph_visits_only_itself(traverse: TraversalFn) {
        let g = Graph::with_vertices(1).unwrap();
        let visited = traverse(&g, 0).unwrap();
        assert_eq!(visited, vec![true]);
    }

    #[test_case(super::bfs; "bfs")]
    #[test_case(super::recursive_dfs; "recursive dfs")]
    #[test_case(super::iterative_dfs; "iterative dfs")]
    fn stays_inside_its_component(traverse: TraversalFn) {
        let g = disconnected();
        assert_eq!(visited_ids(&traverse(&g, 0).unwrap()), vec![0, 1]);
        assert_eq!(visited_ids(&traverse(&g, 2).unwrap()), vec![2]);
        assert_eq!(visited_ids(&traverse(&g, 3).unwrap()), vec![3, 4]);
    }

    #[test_case(super::bfs; "bfs")]
    #[test_case(super::recursive_dfs; "recursive dfs")]
    #[test_case(super::iterative_dfs; "iterative dfs")]
    fn is_idempotent(traverse: TraversalFn) {
        let g = path4();
        let first = traverse(&g, 1).unwrap();
        let second = traverse(&g, 1).unwrap();
        assert_eq!(first, second);
    }

    #[test_case(super::bfs; "bfs")]
    #[test_case(super::recursive_dfs; "recursive dfs")]
    #[test_case(super::iterative_dfs; "iterative dfs")]
    fn directed_edges_are_one_way(traverse: TraversalFn) {
        let g = Graph::from_edges(3, &[(0, 1), (1, 2)], true).unwrap();
        assert_eq!(visited_ids(&traverse(&g, 0).unwrap()), vec![0, 1, 2]);
        assert_eq!(visited_ids(&traverse(&g, 2).unwrap()), vec![2]);
    }

    // -- algorithm-specific -------------------------------------------------

    #[test]
    fn iterative_dfs_marks_source_despite_starting_unvisited() {
        // Source enters the stack unvisited; the first pop must mark it.
        let g = Graph::with_vertices(3).unwrap();
        let visited = iterative_dfs(&g, 1).unwrap();
        assert_eq!(visited, vec![false, true, false]);
    }

    #[test]
    fn iterative_dfs_handles_duplicate_stack_entries() {
        // Complete graph on 4 vertices: every vertex is pushed from every
        // other, so the stack transiently holds duplicates.
        let edges: Vec<(usize, usize)> = (0..4)
            .flat_map(|i| (0..4).filter(move |&j| j != i).map(move |j| (i, j)))
            .collect();
        let g = Graph::from_edges(4, &edges, true).unwrap();
        let visited = iterative_dfs(&g, 0).unwrap();
        assert_eq!(visited, vec![true; 4]);
    }

    #[test]
    fn self_loop_terminates() {
        let g = Graph::from_edges(2, &[(0, 0), (0, 1)], true).unwrap();
        for alg in Algorithm::ALL {
            let visited = alg.run(&g, 0).unwrap();
            assert_eq!(visited, vec![true, true], "{alg} mishandled self-loop");
        }
    }

    #[test]
    fn cycle_terminates_and_visits_all() {
        let g = Graph::from_edges(3, &[(0, 1), (1, 2), (2, 0)], true).unwrap();
        for alg in Algorithm::ALL {
            let visited = alg.run(&g, 0).unwrap();
            assert_eq!(visited, vec![true; 3], "{alg} mishandled cycle");
        }
    }

    #[test]
    fn algorithm_run_dispatches_to_matching_fn() {
        let g = path4();
        assert_eq!(
            Algorithm::Bfs.run(&g, 0).unwrap(),
            bfs(&g, 0).unwrap()
        );
        assert_eq!(
            Algorithm::IterativeDfs.run(&g, 0).unwrap(),
            iterative_dfs(&g, 0).unwrap()
        );
    }
}
