//! Coverage module
//!
//! Provides:
//! - Cobertura XML parsing (root `line-rate` only)
//! - Threshold validation

mod cobertura;
mod threshold;

pub use cobertura::*;
pub use threshold::*;

use std::path::PathBuf;
use thiserror::Error;

/// Aggregate coverage read from a report
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoverageSummary {
    /// Fraction of executable lines hit, normally in [0.0, 1.0]
    pub line_rate: f64,
}

impl CoverageSummary {
    pub fn line_percent(&self) -> f64 {
        self.line_rate * 100.0
    }
}

/// Reasons a report cannot be evaluated. All of them map to exit status 2.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to read coverage xml {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse coverage xml: {0}")]
    Malformed(String),

    #[error("coverage xml missing line-rate attribute")]
    MissingLineRate,

    #[error("coverage xml has invalid line-rate attribute: {0:?}")]
    InvalidLineRate(String),
}
