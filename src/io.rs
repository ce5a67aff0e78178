//! Graph file I/O.
//!
//! Plain-text edge-list format, one graph per file:
//!
//! ```text
//! n m
//! a_1 b_1
//! ...
//! a_m b_m
//! ```
//!
//! `n` is the vertex count, `m` the number of edge lines that follow.
//! Limits: `1 <= n < 1_000_000`, `m >= 0`, `0 <= a_i, b_i < n`. When a
//! file is read as undirected, each pair also inserts the reverse edge;
//! [`write_graph`] always emits the stored (directed) adjacency entries,
//! so an undirected graph writes both directions explicitly.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::error::{GraphBenchError, Result};
use crate::types::{Graph, MAX_VERTICES};

fn malformed(line: usize, reason: impl Into<String>) -> GraphBenchError {
    GraphBenchError::MalformedGraphFile {
        line,
        reason: reason.into(),
    }
}

/// Parse one whitespace-separated pair of integers.
fn parse_pair(text: &str, line: usize) -> Result<(usize, usize)> {
    let mut fields = text.split_whitespace();
    let mut next = |name: &str| -> Result<usize> {
        fields
            .next()
            .ok_or_else(|| malformed(line, format!("missing {name}")))?
            .parse::<usize>()
            .map_err(|_| malformed(line, format!("{name} is not a non-negative integer")))
    };
    let a = next("first value")?;
    let b = next("second value")?;
    if fields.next().is_some() {
        return Err(malformed(line, "trailing data after the two values"));
    }
    Ok((a, b))
}

/// Read a graph from `path`.
///
/// When `directed` is false, every `(a, b)` pair also inserts `(b, a)`.
pub fn read_graph(path: &Path, directed: bool) -> Result<Graph> {
    let file = File::open(path)?;
    let mut lines = BufReader::new(file).lines().enumerate();

    let (_, header) = lines
        .next()
        .ok_or_else(|| malformed(1, "empty file, expected 'n m' header"))?;
    let (n, m) = parse_pair(&header?, 1)?;
    if n == 0 || n >= MAX_VERTICES {
        return Err(malformed(
            1,
            format!("vertex count {n} outside 1..{MAX_VERTICES}"),
        ));
    }

    let mut graph = Graph::with_vertices(n)?;
    let mut edges_read = 0usize;
    for (index, line) in lines {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let line_number = index + 1;
        if edges_read == m {
            return Err(malformed(
                line_number,
                format!("more edge lines than the declared {m}"),
            ));
        }
        let (a, b) = parse_pair(&line, line_number)?;
        if a >= n || b >= n {
            return Err(malformed(
                line_number,
                format!("edge ({a}, {b}) references a vertex >= {n}"),
            ));
        }
        graph.add_edge(a, b)?;
        if !directed {
            graph.add_edge(b, a)?;
        }
        edges_read += 1;
    }

    if edges_read != m {
        return Err(malformed(
            edges_read + 1,
            format!("declared {m} edges but found {edges_read}"),
        ));
    }

    info!(
        path = %path.display(),
        vertices = n,
        edges = m,
        directed,
        "read graph"
    );
    Ok(graph)
}

/// Write `graph` to `path` in the edge-list format.
///
/// Every stored adjacency entry is emitted once, so reading the file back
/// as directed reproduces the same adjacency structure.
pub fn write_graph(path: &Path, graph: &Graph) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "{} {}", graph.vertex_count(), graph.edge_count())?;
    for (a, b) in graph.edges() {
        writeln!(writer, "{a} {b}")?;
    }
    writer.flush()?;

    info!(
        path = %path.display(),
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "wrote graph"
    );
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
