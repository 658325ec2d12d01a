use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

/// Number of `A <- R * Q` rounds when nothing else is configured.
pub const DEFAULT_ITERATIONS: usize = 2000;

/// Absolute threshold below which a sub-diagonal entry counts as zero.
pub const DEFAULT_EPSILON: f64 = 1e-10;

/// How undecoupled 2x2 blocks are turned into eigenvalues.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExtractionMode {
    /// Every block is reported as a conjugate pair `m ± sqrt(|m² - p|) i`,
    /// and the last diagonal entry is only reported after a single step.
    #[default]
    Legacy,
    /// Blocks with a non-negative discriminant yield two real roots, and
    /// the last diagonal entry is reported whenever no block covered it.
    Corrected,
}

impl FromStr for ExtractionMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "legacy" => Ok(ExtractionMode::Legacy),
            "corrected" => Ok(ExtractionMode::Corrected),
            _ => Err(format!(
                "Unknown extraction mode: {}. Expected 'legacy' or 'corrected'",
                s
            )),
        }
    }
}

/// Central configuration for one solver run.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SolverConfig {
    pub iterations: usize,
    pub epsilon: f64,
    pub mode: ExtractionMode,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            epsilon: DEFAULT_EPSILON,
            mode: ExtractionMode::Legacy,
        }
    }
}

impl SolverConfig {
    pub fn new(iterations: usize, epsilon: f64, mode: ExtractionMode) -> Self {
        Self {
            iterations,
            epsilon,
            mode,
        }
    }

    /// Load a configuration from a JSON file. Missing fields keep their
    /// defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
        let config: SolverConfig = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
        Ok(config)
    }
}
