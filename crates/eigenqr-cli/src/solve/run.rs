use std::fs::File;
use std::io::{BufReader, BufWriter, Write};

use eigenqr::io::{read_matrix, write_eigenvalues};
use eigenqr::solve;

use crate::error::CliError;
use crate::solve::input::SolveArguments;

/// Read the input matrix, compute its eigenvalues and write them out.
///
/// The output file is only created once the input parsed, so malformed
/// input never leaves an output file behind. Returns the number of lines
/// written.
pub fn run_solver(args: &SolveArguments) -> Result<usize, CliError> {
    log::info!("[eigenqr] Reading matrix from {:?}", args.input);
    let input = File::open(&args.input).map_err(|source| CliError::CannotOpenFile {
        path: args.input.clone(),
        source,
    })?;
    let matrix = read_matrix(BufReader::new(input))?;
    log::info!("[eigenqr] Loaded {}x{} matrix", matrix.nrows(), matrix.ncols());

    let output = File::create(&args.output).map_err(|source| CliError::CannotOpenFile {
        path: args.output.clone(),
        source,
    })?;

    let eigenvalues = solve(matrix, &args.config)?;

    let mut writer = BufWriter::new(output);
    write_eigenvalues(&mut writer, &eigenvalues)
        .and_then(|_| writer.flush())
        .map_err(|source| CliError::Write {
            path: args.output.clone(),
            source,
        })?;

    let lines: usize = eigenvalues.iter().map(|v| v.multiplicity()).sum();
    log::info!("[eigenqr] Wrote {} eigenvalue lines to {:?}", lines, args.output);
    Ok(lines)
}
