use thiserror::Error;

use crate::domain::Interval;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SeriesError {
    #[error("iteration count must be at least 1 (got {iterations})")]
    InvalidIterationCount { iterations: i64 },
    #[error("x = {x} is outside the domain {domain} of {function}")]
    OutOfDomain {
        function: &'static str,
        x: f64,
        domain: Interval,
    },
}

impl SeriesError {
    /// Stable machine-readable tag, used by JSON output.
    pub fn kind(&self) -> &'static str {
        match self {
            SeriesError::InvalidIterationCount { .. } => "invalid_iteration_count",
            SeriesError::OutOfDomain { .. } => "out_of_domain",
        }
    }
}
