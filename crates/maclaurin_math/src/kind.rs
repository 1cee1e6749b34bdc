//! Catalog of the available series.
//!
//! `SeriesKind` lets callers (the menu, the `eval` command) dispatch by name or
//! menu number without matching on six function pointers themselves.

use std::fmt;
use std::str::FromStr;

use crate::domain::Interval;
use crate::error::SeriesError;
use crate::series;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeriesKind {
    Sin,
    Cos,
    Ln1MinusX,
    Ln1PlusX,
    PowerMinus,
    PowerPlus,
}

impl SeriesKind {
    /// Menu order.
    pub const ALL: [SeriesKind; 6] = [
        SeriesKind::Sin,
        SeriesKind::Cos,
        SeriesKind::Ln1MinusX,
        SeriesKind::Ln1PlusX,
        SeriesKind::PowerMinus,
        SeriesKind::PowerPlus,
    ];

    /// 1-based position in the interactive menu.
    pub fn menu_number(self) -> u32 {
        match self {
            SeriesKind::Sin => 1,
            SeriesKind::Cos => 2,
            SeriesKind::Ln1MinusX => 3,
            SeriesKind::Ln1PlusX => 4,
            SeriesKind::PowerMinus => 5,
            SeriesKind::PowerPlus => 6,
        }
    }

    pub fn from_menu_number(number: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.menu_number() == number)
    }

    /// Short identifier accepted on the command line.
    pub fn name(self) -> &'static str {
        match self {
            SeriesKind::Sin => "sin",
            SeriesKind::Cos => "cos",
            SeriesKind::Ln1MinusX => "ln1m",
            SeriesKind::Ln1PlusX => "ln1p",
            SeriesKind::PowerMinus => "pow1m",
            SeriesKind::PowerPlus => "pow1p",
        }
    }

    /// Human-readable form of the approximated function.
    pub fn label(self) -> &'static str {
        match self {
            SeriesKind::Sin => "sin(x)",
            SeriesKind::Cos => "cos(x)",
            SeriesKind::Ln1MinusX => "ln(1-x)",
            SeriesKind::Ln1PlusX => "ln(1+x)",
            SeriesKind::PowerMinus => "(1-x)^m",
            SeriesKind::PowerPlus => "(1+x)^m",
        }
    }

    pub fn needs_exponent(self) -> bool {
        matches!(self, SeriesKind::PowerMinus | SeriesKind::PowerPlus)
    }

    /// Interval enforced on `x`, or `None` when any `x` is accepted.
    pub fn domain(self) -> Option<Interval> {
        match self {
            SeriesKind::Sin | SeriesKind::Cos => None,
            SeriesKind::Ln1MinusX | SeriesKind::Ln1PlusX => Some(Interval::LOG),
            SeriesKind::PowerMinus | SeriesKind::PowerPlus => Some(Interval::BINOMIAL),
        }
    }

    /// Evaluate the series. `m` is ignored unless [`needs_exponent`](Self::needs_exponent).
    pub fn evaluate(self, x: f64, m: f64, iterations: i64) -> Result<f64, SeriesError> {
        match self {
            SeriesKind::Sin => series::maclaurin_sin(x, iterations),
            SeriesKind::Cos => series::maclaurin_cos(x, iterations),
            SeriesKind::Ln1MinusX => series::maclaurin_ln1_minus_x(x, iterations),
            SeriesKind::Ln1PlusX => series::maclaurin_ln1_plus_x(x, iterations),
            SeriesKind::PowerMinus => series::maclaurin_power_series(x, m, iterations),
            SeriesKind::PowerPlus => series::maclaurin_power_series_plus(x, m, iterations),
        }
    }

    /// Individual summands, in the order [`evaluate`](Self::evaluate) adds them.
    pub fn terms(self, x: f64, m: f64, iterations: i64) -> Result<Vec<f64>, SeriesError> {
        match self {
            SeriesKind::Sin => series::sin_terms(x, iterations),
            SeriesKind::Cos => series::cos_terms(x, iterations),
            SeriesKind::Ln1MinusX => series::ln1_minus_x_terms(x, iterations),
            SeriesKind::Ln1PlusX => series::ln1_plus_x_terms(x, iterations),
            SeriesKind::PowerMinus => series::power_series_terms(x, m, iterations),
            SeriesKind::PowerPlus => series::power_series_plus_terms(x, m, iterations),
        }
    }
}

impl fmt::Display for SeriesKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Unknown series name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSeries(pub String);

impl fmt::Display for UnknownSeries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown series '{}' (expected one of: sin, cos, ln1m, ln1p, pow1m, pow1p)",
            self.0
        )
    }
}

impl std::error::Error for UnknownSeries {}

impl FromStr for SeriesKind {
    type Err = UnknownSeries;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        SeriesKind::ALL
            .into_iter()
            .find(|k| k.name() == wanted)
            .ok_or_else(|| UnknownSeries(s.to_string()))
    }
}
