use clap::error::ErrorKind;
use log::LevelFilter;

use eigenqr_cli::command::build_command;
use eigenqr_cli::error::{CliError, ExitStatus};
use eigenqr_cli::solve::input::SolveArguments;
use eigenqr_cli::solve::run::run_solver;

fn main() {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("EIGENQR_LOG", "error"))
        .init();

    let status = match run() {
        Ok(()) => ExitStatus::Success,
        Err(CliError::InvalidArguments(e)) => {
            // Nothing left to report to if stderr itself is gone.
            e.print().ok();
            ExitStatus::InvalidArguments
        }
        Err(e) => {
            log::debug!("Failure: {:?}", e);
            eprintln!("Error: {}", e);
            e.exit_status()
        }
    };
    std::process::exit(status.code());
}

fn run() -> Result<(), CliError> {
    let matches = match build_command().try_get_matches() {
        Ok(matches) => matches,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => return Err(e.into()),
    };

    let args = SolveArguments::from_arguments(&matches)?;
    run_solver(&args)?;
    Ok(())
}
