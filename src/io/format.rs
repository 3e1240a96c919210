//! Output formatting for space-group irrep calculations.

use std::fmt;

use log;

const SGIRREPS_BANNER_LENGTH: usize = 99;

/// Logs a main output line to the `sgirreps-output` logger.
macro_rules! sgirreps_output {
    ($fmt:expr $(, $($arg:tt)*)?) => { log::info!(target: "sgirreps-output", $fmt, $($($arg)*)?); }
}

/// Logs an error to the `sgirreps-output` logger as well as the main logger.
macro_rules! sgirreps_error {
    ($fmt:expr $(, $($arg:tt)*)?) => {
        log::error!($fmt, $($($arg)*)?);
        log::error!(target: "sgirreps-output", $fmt, $($($arg)*)?);
    }
}

pub(crate) use {sgirreps_error, sgirreps_output};

/// Logs a nicely formatted section title to the `sgirreps-output` logger.
pub(crate) fn log_title(title: &str) {
    let length = title.chars().count().max(SGIRREPS_BANNER_LENGTH - 6);
    let bar = "─".repeat(length);
    sgirreps_output!("┌──{bar}──┐");
    sgirreps_output!("│§ {title:^length$} §│");
    sgirreps_output!("└──{bar}──┘");
}

/// Writes a nicely formatted subtitle.
pub(crate) fn write_subtitle(f: &mut fmt::Formatter<'_>, subtitle: &str) -> fmt::Result {
    let bar = "═".repeat(subtitle.chars().count());
    writeln!(f, "{subtitle}")?;
    writeln!(f, "{bar}")?;
    Ok(())
}

/// Logs a nicely formatted subtitle to the `sgirreps-output` logger.
pub(crate) fn log_subtitle(subtitle: &str) {
    let bar = "═".repeat(subtitle.chars().count());
    sgirreps_output!("{}", subtitle);
    sgirreps_output!("{}", bar);
}

/// Turns a boolean into a string of `yes` or `no`.
pub(crate) fn nice_bool(b: bool) -> String {
    if b {
        "yes".to_string()
    } else {
        "no".to_string()
    }
}

/// A trait for logging outputs line by line to the `sgirreps-output` logger.
pub(crate) trait SgIrrepsOutput: fmt::Display {
    /// Logs display output nicely.
    fn log_output_display(&self) {
        self.to_string().lines().for_each(|line| {
            sgirreps_output!("{line}");
        })
    }
}

// Blanket implementation
impl<T> SgIrrepsOutput for T where T: fmt::Display {}
