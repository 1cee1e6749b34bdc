//! Intervals of validity for the series.

use std::fmt;

/// An interval `(lower, upper)` or `(lower, upper]`. The lower bound is always open.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub lower: f64,
    pub upper: f64,
    pub upper_closed: bool,
}

impl Interval {
    /// `(-1, 1]`, where the logarithmic series converges.
    pub const LOG: Interval = Interval {
        lower: -1.0,
        upper: 1.0,
        upper_closed: true,
    };

    /// `(-1, 1)`, where the binomial series is evaluated.
    pub const BINOMIAL: Interval = Interval {
        lower: -1.0,
        upper: 1.0,
        upper_closed: false,
    };

    /// NaN is never contained.
    pub fn contains(&self, x: f64) -> bool {
        let below_upper = if self.upper_closed {
            x <= self.upper
        } else {
            x < self.upper
        };
        self.lower < x && below_upper
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let close = if self.upper_closed { ']' } else { ')' };
        write!(f, "({}, {}{}", self.lower, self.upper, close)
    }
}
