//! The coverage gate: report in, verdict and stdout lines out.
//!
//! Nothing here touches the process. `main` prints the lines and turns the
//! verdict into an exit status.

use colored::Colorize;
use std::io::Write;
use std::path::Path;

use crate::cli::USAGE;
use crate::coverage::{parse_cobertura, validate_threshold, ReportError, ThresholdResult};

/// Final decision of one gate run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Coverage is at or above the threshold
    Pass,
    /// Report was fine but coverage is below the threshold
    BelowThreshold,
    /// Bad arguments or an unusable report
    Error,
}

impl Verdict {
    pub fn exit_code(self) -> i32 {
        match self {
            Verdict::Pass => 0,
            Verdict::BelowThreshold => 1,
            Verdict::Error => 2,
        }
    }
}

/// Verdict plus the exact lines to write to stdout
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub verdict: Verdict,
    pub lines: Vec<String>,
}

impl Outcome {
    pub fn usage() -> Self {
        Self {
            verdict: Verdict::Error,
            lines: vec![USAGE.to_string()],
        }
    }

    pub fn report_error(err: &ReportError) -> Self {
        Self {
            verdict: Verdict::Error,
            lines: vec![err.to_string()],
        }
    }

    pub fn from_threshold(result: &ThresholdResult) -> Self {
        Self {
            verdict: if result.passed {
                Verdict::Pass
            } else {
                Verdict::BelowThreshold
            },
            lines: vec![
                result.coverage_line(),
                result.verdict_line().to_string(),
            ],
        }
    }

    pub fn exit_code(&self) -> i32 {
        self.verdict.exit_code()
    }

    /// Write the lines, coloring the last one by verdict. `colored` drops
    /// the escapes when the output is not a terminal.
    pub fn write_to(&self, out: &mut impl Write) -> std::io::Result<()> {
        let Some((last, rest)) = self.lines.split_last() else {
            return Ok(());
        };

        for line in rest {
            writeln!(out, "{}", line)?;
        }

        let last = match self.verdict {
            Verdict::Pass => last.green(),
            Verdict::BelowThreshold => last.red().bold(),
            Verdict::Error => last.yellow(),
        };
        writeln!(out, "{}", last)
    }
}

/// Evaluate the report at `report_path` against `min_percent`
pub fn evaluate(report_path: &Path, min_percent: f64) -> Outcome {
    match parse_cobertura(report_path) {
        Ok(summary) => Outcome::from_threshold(&validate_threshold(&summary, min_percent)),
        Err(err) => Outcome::report_error(&err),
    }
}
