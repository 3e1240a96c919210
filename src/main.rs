use anyhow;
use clap::Parser;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::append::file::FileAppender;
use log4rs::append::Append;
use log4rs::config::{Appender, Config, Logger, Root};
use log4rs::encode::pattern::PatternEncoder;

use sgirreps::interfaces::cli::{log_heading, Cli};
use sgirreps::interfaces::input::Input;
use sgirreps::interfaces::InputHandle;
use sgirreps::io::read_sgirreps_yaml;

/// Sets up the main output logger and the diagnostic logger.
///
/// Main output goes to the `sgirreps-output` target, which is written to `cli.output` if given
/// and to the standard output otherwise. Diagnostics go to the standard error.
fn init_logging(cli: &Cli) -> Result<(), anyhow::Error> {
    let output_appender: Box<dyn Append> = if let Some(path) = cli.output.as_ref() {
        Box::new(
            FileAppender::builder()
                .encoder(Box::new(PatternEncoder::new("{m}{n}")))
                .append(false)
                .build(path)?,
        )
    } else {
        Box::new(
            ConsoleAppender::builder()
                .encoder(Box::new(PatternEncoder::new("{m}{n}")))
                .build(),
        )
    };
    let diagnostic_appender = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} {h({l:<5})} {t} - {m}{n}",
        )))
        .build();
    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    let config = Config::builder()
        .appender(Appender::builder().build("output", output_appender))
        .appender(Appender::builder().build("diagnostic", Box::new(diagnostic_appender)))
        .logger(
            Logger::builder()
                .appender("output")
                .additive(false)
                .build("sgirreps-output", LevelFilter::Info),
        )
        .build(Root::builder().appender("diagnostic").build(level))?;
    log4rs::init_config(config)?;
    Ok(())
}

fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();
    init_logging(&cli)?;
    log_heading();
    let input = read_sgirreps_yaml::<Input, _>(&cli.config)?;
    input.handle()
}
