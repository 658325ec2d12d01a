use clap::{Arg, Command, ValueHint};
use std::path::PathBuf;

/// Build the `eigenqr` argument parser.
pub fn build_command() -> Command {
    Command::new("eigenqr")
        .version(clap::crate_version!())
        .about("Eigenvalues of a real square matrix by unshifted QR iteration")
        .arg(
            Arg::new("input")
                .help("Path to the input file: the dimension n followed by n*n values")
                .required(true)
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("output")
                .help("Path to the output file, one eigenvalue per line")
                .required(true)
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("Path to a JSON solver configuration file")
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("iterations")
                .short('n')
                .long("iterations")
                .help(
                    "Number of QR rounds. \
                     Overrides the value in the configuration file.",
                )
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            Arg::new("epsilon")
                .long("epsilon")
                .help(
                    "Absolute threshold for treating a sub-diagonal entry as zero. \
                     Overrides the value in the configuration file.",
                )
                .value_parser(clap::value_parser!(f64)),
        )
        .arg(
            Arg::new("mode")
                .short('m')
                .long("mode")
                .help("How 2x2 blocks are turned into eigenvalues.")
                .value_parser(["legacy", "corrected"]),
        )
        .help_template(
            "{usage-heading} {usage}\n\n\
             {about-with-newline}\n\
             Version {version}\n\n\
             {all-args}{after-help}",
        )
}
