use std::path::PathBuf;

use eigenqr::EigenError;
use thiserror::Error;

/// Process exit statuses, one per failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    Success = 0,
    CannotOpenFile = 1,
    OutOfMemory = 2,
    InvalidInputData = 3,
    InvalidArguments = 4,
}

impl ExitStatus {
    pub fn code(self) -> i32 {
        self as i32
    }
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    InvalidArguments(#[from] clap::Error),

    #[error("Invalid configuration: {0:#}")]
    Config(anyhow::Error),

    #[error("Cannot open file {}: {source}", path.display())]
    CannotOpenFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Cannot write file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Solver(#[from] EigenError),
}

impl CliError {
    pub fn exit_status(&self) -> ExitStatus {
        match self {
            CliError::InvalidArguments(_) | CliError::Config(_) => ExitStatus::InvalidArguments,
            CliError::CannotOpenFile { .. } | CliError::Write { .. } => ExitStatus::CannotOpenFile,
            CliError::Solver(EigenError::OutOfMemory { .. }) => ExitStatus::OutOfMemory,
            CliError::Solver(EigenError::Io(_)) => ExitStatus::CannotOpenFile,
            CliError::Solver(EigenError::InvalidData(_) | EigenError::Shape(_)) => {
                ExitStatus::InvalidInputData
            }
        }
    }
}
