//! check-coverage - CI coverage gate
//!
//! Reads a Cobertura XML report and decides whether its aggregate line
//! coverage reaches a minimum percentage:
//! - Root `line-rate` extraction with full well-formedness checking
//! - Inclusive threshold comparison
//! - Exit status `0` (met), `1` (not met) or `2` (usage or report error)

pub mod cli;
pub mod coverage;
pub mod gate;

pub use cli::{parse_args, Cli, USAGE};
pub use coverage::{parse_cobertura, parse_cobertura_string, CoverageSummary, ReportError};
pub use gate::{evaluate, Outcome, Verdict};
