//! Benchmark layer — single-call timing and per-vertex aggregation.

pub mod timing;
