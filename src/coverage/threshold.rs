//! Coverage threshold validation

use super::CoverageSummary;

/// Result of threshold validation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdResult {
    pub passed: bool,
    pub line_coverage: f64,
    pub line_threshold: f64,
    pub line_delta: f64,
}

impl ThresholdResult {
    /// `line coverage: 85.00% (required: 80.00%)`
    pub fn coverage_line(&self) -> String {
        format!(
            "line coverage: {:.2}% (required: {:.2}%)",
            self.line_coverage, self.line_threshold
        )
    }

    pub fn verdict_line(&self) -> &'static str {
        if self.passed {
            "coverage threshold met"
        } else {
            "coverage threshold not met"
        }
    }
}

/// Validate coverage against a minimum percentage. Reaching the threshold
/// exactly counts as a pass.
pub fn validate_threshold(summary: &CoverageSummary, line_threshold: f64) -> ThresholdResult {
    let line_coverage = summary.line_percent();

    ThresholdResult {
        passed: line_coverage >= line_threshold,
        line_coverage,
        line_threshold,
        line_delta: line_coverage - line_threshold,
    }
}
