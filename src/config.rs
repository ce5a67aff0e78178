//! Run configuration for GraphBench.
//!
//! A small YAML config file (`graphbench.yaml`) supplies defaults for
//! flags the CLI would otherwise need on every invocation. Loaded with
//! serde; CLI flags always take precedence over file values.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GraphBenchError, Result};

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "graphbench.yaml";

/// Defaults applied to every run unless overridden on the command line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchConfig {
    /// Config format version (currently "1.0").
    #[serde(default = "default_version")]
    pub version: String,

    /// Treat graph files as directed (no reverse-edge insertion).
    #[serde(default)]
    pub directed: bool,

    /// Seed for the sparse generator (`None` = seeded from entropy).
    #[serde(default)]
    pub seed: Option<u64>,

    /// Emit benchmark reports as JSON instead of human-readable text.
    #[serde(default)]
    pub json: bool,
}

fn default_version() -> String {
    "1.0".to_string()
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            directed: false,
            seed: None,
            json: false,
        }
    }
}

impl BenchConfig {
    /// Load a config from an explicit path. The file must exist.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        serde_yaml::from_str(&contents)
            .map_err(|e| GraphBenchError::Other(format!("failed to parse config: {e}")))
    }

    /// Load `graphbench.yaml` from `dir`, or fall back to defaults when
    /// the file does not exist.
    pub fn load_or_default(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE);
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;
    use tempfile::TempDir;

    #[test]
    fn defaults_are_undirected_unseeded_text() {
        let config = BenchConfig::default();
        assert_eq!(config.version, "1.0");
        assert!(!config.directed);
        assert!(config.seed.is_none());
        assert!(!config.json);
    }

    #[test]
    fn load_parses_full_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "version: \"1.0\"\ndirected: true\nseed: 42\njson: true").unwrap();

        let config = BenchConfig::load(&path).unwrap();
        assert!(config.directed);
        assert_eq!(config.seed, Some(42));
        assert!(config.json);
    }

    #[test]
    fn load_applies_serde_defaults_for_missing_fields() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "directed: true\n").unwrap();

        let config = BenchConfig::load(&path).unwrap();
        assert!(config.directed);
        assert_eq!(config.version, "1.0");
        assert!(config.seed.is_none());
    }

    #[test]
    fn load_rejects_invalid_yaml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "directed: [not a bool\n").unwrap();

        assert!(BenchConfig::load(&path).is_err());
    }

    #[test]
    fn load_or_default_without_file_returns_defaults() {
        let dir = TempDir::new().unwrap();
        let config = BenchConfig::load_or_default(dir.path()).unwrap();
        assert!(!config.directed);
    }

    #[test]
    fn load_or_default_with_file_reads_it() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "seed: 7\n").unwrap();

        let config = BenchConfig::load_or_default(dir.path()).unwrap();
        assert_eq!(config.seed, Some(7));
    }
}
