//! Command-line interface.
//!
//! Three subcommands:
//! - `generate` — write a synthetic graph file (complete or sparse)
//! - `validate` — check that all three traversals agree from every source
//! - `bench` — validate, then report mean per-vertex traversal times
//!
//! Flag defaults come from an optional `graphbench.yaml`
//! ([`crate::config::BenchConfig`]); explicit flags win over the file.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use crate::bench::timing::benchmark_report;
use crate::config::BenchConfig;
use crate::error::Result;
use crate::generate::{complete_graph, rng_from_seed, sparse_graph};
use crate::graph::correctness::validate_source;
use crate::io::{read_graph, write_graph};
use crate::types::{Algorithm, Graph};

// ---------------------------------------------------------------------------
// Argument types
// ---------------------------------------------------------------------------

/// Benchmarking harness for graph traversal algorithms.
#[derive(Debug, Parser)]
#[command(name = "graphbench", version, about)]
pub struct Cli {
    /// Path to a YAML config file (defaults to ./graphbench.yaml if present).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a synthetic graph file.
    Generate {
        #[command(subcommand)]
        family: GenerateCommand,
    },

    /// Check that all traversal algorithms agree on a graph.
    Validate {
        /// Graph file in `n m` / edge-list format.
        input: PathBuf,

        /// Treat the file as directed (skip reverse-edge insertion).
        #[arg(long)]
        directed: bool,
    },

    /// Validate, then benchmark traversal algorithms on a graph.
    Bench {
        /// Graph file in `n m` / edge-list format.
        input: PathBuf,

        /// Treat the file as directed (skip reverse-edge insertion).
        #[arg(long)]
        directed: bool,

        /// Benchmark a single algorithm instead of all three.
        #[arg(long)]
        algorithm: Option<Algorithm>,

        /// Print the report as JSON.
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum GenerateCommand {
    /// Complete graph: every ordered pair of distinct vertices.
    Complete {
        /// Output graph file.
        output: PathBuf,

        /// Number of vertices (1 to 999,999).
        #[arg(long)]
        vertices: usize,
    },

    /// Sparse graph with per-vertex degree bounded by `vertices * ratio`.
    Sparse {
        /// Output graph file.
        output: PathBuf,

        /// Number of vertices (1 to 999,999).
        #[arg(long)]
        vertices: usize,

        /// Degree bound as a fraction of the vertex count, in (0, 1).
        #[arg(long)]
        degree_ratio: f64,

        /// RNG seed for reproducible output.
        #[arg(long)]
        seed: Option<u64>,
    },
}

// ---------------------------------------------------------------------------
// Execution
// ---------------------------------------------------------------------------

/// Execute a parsed command line.
pub fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => BenchConfig::load(path)?,
        None => BenchConfig::load_or_default(&std::env::current_dir()?)?,
    };

    match cli.command {
        Command::Generate { family } => run_generate(family, &config),
        Command::Validate { input, directed } => {
            let graph = read_graph(&input, directed || config.directed)?;
            print_graph_size(&graph);
            run_validation_pass(&graph)?;
            println!("all traversal outputs matched");
            Ok(())
        }
        Command::Bench {
            input,
            directed,
            algorithm,
            json,
        } => {
            let graph = read_graph(&input, directed || config.directed)?;
            print_graph_size(&graph);
            run_validation_pass(&graph)?;

            let algorithms: Vec<Algorithm> = match algorithm {
                Some(single) => vec![single],
                None => Algorithm::ALL.to_vec(),
            };
            let report = benchmark_report(&graph, &algorithms);

            if json || config.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                for timing in &report.timings {
                    println!(
                        "{}: {:.10} ms mean per vertex",
                        timing.algorithm,
                        timing.mean_seconds * 1000.0
                    );
                }
            }
            Ok(())
        }
    }
}

fn run_generate(family: GenerateCommand, config: &BenchConfig) -> Result<()> {
    match family {
        GenerateCommand::Complete { output, vertices } => {
            let graph = complete_graph(vertices)?;
            write_graph(&output, &graph)?;
            println!(
                "wrote complete graph: {} vertices, {} edges -> {}",
                graph.vertex_count(),
                graph.edge_count(),
                output.display()
            );
        }
        GenerateCommand::Sparse {
            output,
            vertices,
            degree_ratio,
            seed,
        } => {
            let mut rng = rng_from_seed(seed.or(config.seed));
            let graph = sparse_graph(vertices, degree_ratio, &mut rng)?;
            write_graph(&output, &graph)?;
            println!(
                "wrote sparse graph: {} vertices, {} edges -> {}",
                graph.vertex_count(),
                graph.edge_count(),
                output.display()
            );
        }
    }
    Ok(())
}

/// Run the per-source equivalence check over the whole graph, with a
/// progress bar for large inputs. Aborts at the first mismatch.
fn run_validation_pass(graph: &Graph) -> Result<()> {
    let n = graph.vertex_count();
    let progress = if n > 1000 {
        let bar = ProgressBar::new(n as u64);
        bar.set_style(
            ProgressStyle::with_template("validating {bar:40} {pos}/{len} sources")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        Some(bar)
    } else {
        None
    };

    for source in 0..n {
        validate_source(graph, source)?;
        if let Some(bar) = &progress {
            bar.inc(1);
        }
    }
    if let Some(bar) = progress {
        bar.finish_and_clear();
    }

    info!(vertices = n, "validation pass complete");
    Ok(())
}

fn print_graph_size(graph: &Graph) {
    println!(
        "graph size: {} vertices, {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
