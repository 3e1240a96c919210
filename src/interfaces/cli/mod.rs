//! Command-line interface.

use std::path::PathBuf;

use clap::Parser;

use crate::io::format::sgirreps_output;

const VERSION: Option<&str> = option_env!("CARGO_PKG_VERSION");

/// Logs a nicely formatted heading to the `sgirreps-output` logger.
pub fn log_heading() {
    let version = if let Some(ver) = VERSION {
        format!("v{ver}")
    } else {
        "v unknown".to_string()
    };
    sgirreps_output!("╭─────────────────────────────────────────────────────────────────────────────────────────────────╮");
    sgirreps_output!("│   ____        ___                                                                               │");
    sgirreps_output!("│  / ___| __ _ |_ _|_ __ _ __ ___ _ __  ___                                                       │");
    sgirreps_output!("│  \\___ \\/ _` | | || '__| '__/ _ \\ '_ \\/ __|                                                      │");
    sgirreps_output!("│   ___) | (_| | | || |  | | |  __/ |_) \\__ \\                                                     │");
    sgirreps_output!("│  |____/ \\__, ||___|_|  |_|  \\___| .__/|___/                                                     │");
    sgirreps_output!("│         |___/                   |_|                                                             │");
    sgirreps_output!("│                                                                                                 │");
    sgirreps_output!("│  Irreducible small representations of crystallographic space groups             {version:>15} │");
    sgirreps_output!("╰─────────────────────────────────────────────────────────────────────────────────────────────────╯");
    sgirreps_output!("");
}

/// The command-line arguments.
#[derive(Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// The YAML configuration file.
    #[arg(short, long)]
    pub config: PathBuf,

    /// The output file. If not given, the output is written to the standard output.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Increases the verbosity of the diagnostic log. May be given up to twice.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
