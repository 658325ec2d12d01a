use anyhow::anyhow;
use clap::ArgMatches;
use std::path::PathBuf;
use std::str::FromStr;

use eigenqr::config::{ExtractionMode, SolverConfig};

use crate::error::CliError;

/// Everything one `eigenqr` invocation needs.
#[derive(Debug, Clone)]
pub struct SolveArguments {
    pub input: PathBuf,
    pub output: PathBuf,
    pub config: SolverConfig,
}

impl SolveArguments {
    /// Resolve the solver configuration: defaults, then the JSON file given
    /// with `--config`, then the individual command line overrides.
    pub fn from_arguments(matches: &ArgMatches) -> Result<Self, CliError> {
        let input = required_path(matches, "input")?;
        let output = required_path(matches, "output")?;

        let mut config = match matches.get_one::<PathBuf>("config") {
            Some(config_path) => {
                log::info!("[eigenqr] Using config: {:?}", config_path);
                SolverConfig::from_json_file(config_path).map_err(CliError::Config)?
            }
            None => SolverConfig::default(),
        };

        if let Some(&iterations) = matches.get_one::<usize>("iterations") {
            config.iterations = iterations;
        }

        if let Some(&epsilon) = matches.get_one::<f64>("epsilon") {
            config.epsilon = epsilon;
        }

        if let Some(mode) = matches.get_one::<String>("mode") {
            config.mode = ExtractionMode::from_str(mode)
                .map_err(|e| CliError::Config(anyhow::Error::msg(e)))?;
        }

        if config.epsilon.is_nan() || config.epsilon < 0.0 {
            return Err(CliError::Config(anyhow!(
                "epsilon must be a non-negative number, got {}",
                config.epsilon
            )));
        }

        Ok(Self {
            input,
            output,
            config,
        })
    }
}

fn required_path(matches: &ArgMatches, name: &str) -> Result<PathBuf, CliError> {
    matches
        .get_one::<PathBuf>(name)
        .cloned()
        .ok_or_else(|| CliError::Config(anyhow!("missing required argument '{}'", name)))
}
