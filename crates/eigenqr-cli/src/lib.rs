//! eigenqr-cli: command line wrapper around the eigenqr solver.
pub mod command;
pub mod error;
pub mod solve;
