//! Command-line surface

use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

/// Printed, alone, for any argument problem
pub const USAGE: &str = "usage: check_coverage.py <cobertura_xml> <min_percent>";

#[derive(Debug, Parser)]
#[command(name = "check-coverage")]
#[command(about = "Fail the build when Cobertura line coverage is below a minimum")]
#[command(disable_help_flag = true, disable_version_flag = true)]
#[command(allow_negative_numbers = true)]
pub struct Cli {
    /// Path to the Cobertura XML report
    pub report_path: PathBuf,

    /// Minimum line coverage, in percent
    #[arg(value_parser = parse_percent)]
    pub min_percent: f64,
}

/// Parse the full argument list, program name included.
///
/// Exactly two arguments must follow the program name, counted before clap
/// sees them, so a `--` separator counts as one. `None` means the caller
/// should print [`USAGE`].
pub fn parse_args<I, T>(args: I) -> Option<Cli>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    if args.len() != 3 {
        return None;
    }
    Cli::try_parse_from(args).ok()
}

fn parse_percent(value: &str) -> Result<f64, String> {
    match value.trim().parse::<f64>() {
        Ok(percent) if percent.is_finite() => Ok(percent),
        _ => Err(format!("'{}' is not a valid percentage", value)),
    }
}
