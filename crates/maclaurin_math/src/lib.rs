//! Truncated Maclaurin series for a handful of elementary functions.
//!
//! Six pure evaluators (`sin`, `cos`, `ln(1-x)`, `ln(1+x)` and the two
//! binomial power series) plus the exact-index helpers they share. Every
//! evaluator checks its precondition, then returns the sum of the requested
//! number of terms. Nothing here performs I/O or keeps state between calls.

pub mod combinatorics;
pub mod domain;
pub mod error;
pub mod kind;
pub mod series;


pub use combinatorics::{factorial, generalized_binomial};
pub use domain::Interval;
pub use error::SeriesError;
pub use kind::{SeriesKind, UnknownSeries};
pub use series::{
    maclaurin_cos, maclaurin_ln1_minus_x, maclaurin_ln1_plus_x, maclaurin_power_series,
    maclaurin_power_series_plus, maclaurin_sin, DEFAULT_ITERATIONS,
};
