//! Truncated Maclaurin series.
//!
//! Every evaluator validates its precondition first and then folds its terms
//! left to right starting from `0.0`. The `*_terms` functions expose the same
//! summands, so a caller can display the partial sums that make up a result.
//!
//! No convergence or error-bound check is made: the caller picks the
//! iteration count. The sin/cos terms are built from their predecessor, so
//! they stay finite until they underflow to zero; for large `|x|` the
//! alternating sum still loses digits to cancellation. The power series use
//! `f64` factorials, which overflow past `170!` (see [`factorial`]); a term
//! whose numerator also overflows becomes NaN and so does the sum.

use crate::combinatorics::{factorial, generalized_binomial};
use crate::domain::Interval;
use crate::error::SeriesError;

/// Iteration count used by the interactive menu unless configured otherwise.
pub const DEFAULT_ITERATIONS: i64 = 10;

/// `(-1)^n`
#[inline]
fn alternating(n: u64) -> f64 {
    if n % 2 == 0 {
        1.0
    } else {
        -1.0
    }
}

#[inline]
fn pow(x: f64, k: u64) -> f64 {
    x.powi(i32::try_from(k).unwrap_or(i32::MAX))
}

/// Negative counts sum zero terms.
#[inline]
fn term_count(iterations: i64) -> u64 {
    u64::try_from(iterations).unwrap_or(0)
}

fn require_iterations(iterations: i64) -> Result<u64, SeriesError> {
    if iterations < 1 {
        return Err(SeriesError::InvalidIterationCount { iterations });
    }
    Ok(term_count(iterations))
}

fn require_domain(function: &'static str, x: f64, domain: Interval) -> Result<(), SeriesError> {
    if domain.contains(x) {
        Ok(())
    } else {
        Err(SeriesError::OutOfDomain {
            function,
            x,
            domain,
        })
    }
}

fn accumulate(terms: impl Iterator<Item = f64>) -> f64 {
    terms.fold(0.0, |acc, term| acc + term)
}

/// `t_{n+1} = -t_n * x^2 / ((2n+2)(2n+3))`, starting at `x`.
fn sin_series(x: f64, count: u64) -> impl Iterator<Item = f64> {
    let x2 = x * x;
    (0..count).scan(x, move |term, n| {
        let current = *term;
        let k = (2 * n + 2) as f64;
        *term = -current * x2 / (k * (k + 1.0));
        Some(current)
    })
}

/// `t_{n+1} = -t_n * x^2 / ((2n+1)(2n+2))`, starting at `1`.
fn cos_series(x: f64, count: u64) -> impl Iterator<Item = f64> {
    let x2 = x * x;
    (0..count).scan(1.0, move |term: &mut f64, n| {
        let current = *term;
        let k = (2 * n + 1) as f64;
        *term = -current * x2 / (k * (k + 1.0));
        Some(current)
    })
}

/// `ln(1+x)` series, indexed from 1.
fn log_series(x: f64, count: u64) -> impl Iterator<Item = f64> {
    (1..=count).map(move |n| alternating(n + 1) * pow(x, n) / n as f64)
}

fn power_minus_series(x: f64, m: f64, count: u64) -> impl Iterator<Item = f64> {
    (0..count).map(move |n| alternating(n) * (generalized_binomial(m, n) * pow(x, n)) / factorial(n))
}

fn power_plus_series(x: f64, m: f64, count: u64) -> impl Iterator<Item = f64> {
    (0..count).map(move |n| generalized_binomial(m, n) * pow(x, n))
}

/// Approximate `sin(x)` (radians) with `iterations` terms.
///
/// # Errors
/// [`SeriesError::InvalidIterationCount`] if `iterations < 1`.
///
/// ```
/// let s = maclaurin_math::maclaurin_sin(1.0, 10).unwrap();
/// assert!((s - 1.0_f64.sin()).abs() < 1e-9);
/// ```
pub fn maclaurin_sin(x: f64, iterations: i64) -> Result<f64, SeriesError> {
    let count = require_iterations(iterations)?;
    Ok(accumulate(sin_series(x, count)))
}

/// Approximate `cos(x)` (radians) with `iterations` terms.
///
/// # Errors
/// [`SeriesError::InvalidIterationCount`] if `iterations < 1`.
pub fn maclaurin_cos(x: f64, iterations: i64) -> Result<f64, SeriesError> {
    let count = require_iterations(iterations)?;
    Ok(accumulate(cos_series(x, count)))
}

/// Approximate `ln(1-x)` for `x` in `(-1, 1]`.
///
/// This is the `ln(1+x)` series evaluated at `-x`, so
/// `maclaurin_ln1_minus_x(-x, n) == maclaurin_ln1_plus_x(x, n)`.
///
/// # Errors
/// [`SeriesError::OutOfDomain`] if `x` is outside `(-1, 1]`.
pub fn maclaurin_ln1_minus_x(x: f64, iterations: i64) -> Result<f64, SeriesError> {
    require_domain("ln(1-x)", x, Interval::LOG)?;
    Ok(accumulate(log_series(-x, term_count(iterations))))
}

/// Approximate `ln(1+x)` for `x` in `(-1, 1]`.
///
/// # Errors
/// [`SeriesError::OutOfDomain`] if `x` is outside `(-1, 1]`.
///
/// ```
/// let l = maclaurin_math::maclaurin_ln1_plus_x(0.5, 30).unwrap();
/// assert!((l - 1.5_f64.ln()).abs() < 1e-9);
/// ```
pub fn maclaurin_ln1_plus_x(x: f64, iterations: i64) -> Result<f64, SeriesError> {
    require_domain("ln(1+x)", x, Interval::LOG)?;
    Ok(accumulate(log_series(x, term_count(iterations))))
}

/// Sum of `(-1)^n * C(m, n) * x^n / n!` for `x` in `(-1, 1)`.
///
/// Each term carries an extra `1/n!` on top of the binomial coefficient, so
/// only the first two terms agree with the binomial expansion of `(1-x)^m`.
///
/// # Errors
/// [`SeriesError::OutOfDomain`] if `x` is outside `(-1, 1)`.
pub fn maclaurin_power_series(x: f64, m: f64, iterations: i64) -> Result<f64, SeriesError> {
    require_domain("(1-x)^m", x, Interval::BINOMIAL)?;
    Ok(accumulate(power_minus_series(x, m, term_count(iterations))))
}

/// Approximate `(1+x)^m` for `x` in `(-1, 1)` and any real `m`.
///
/// # Errors
/// [`SeriesError::OutOfDomain`] if `x` is outside `(-1, 1)`.
///
/// ```
/// let p = maclaurin_math::maclaurin_power_series_plus(0.5, 2.0, 10).unwrap();
/// assert_eq!(p, 2.25);
/// ```
pub fn maclaurin_power_series_plus(x: f64, m: f64, iterations: i64) -> Result<f64, SeriesError> {
    require_domain("(1+x)^m", x, Interval::BINOMIAL)?;
    Ok(accumulate(power_plus_series(x, m, term_count(iterations))))
}

/// Summands of [`maclaurin_sin`], in summation order.
pub fn sin_terms(x: f64, iterations: i64) -> Result<Vec<f64>, SeriesError> {
    let count = require_iterations(iterations)?;
    Ok(sin_series(x, count).collect())
}

/// Summands of [`maclaurin_cos`], in summation order.
pub fn cos_terms(x: f64, iterations: i64) -> Result<Vec<f64>, SeriesError> {
    let count = require_iterations(iterations)?;
    Ok(cos_series(x, count).collect())
}

/// Summands of [`maclaurin_ln1_minus_x`], in summation order.
pub fn ln1_minus_x_terms(x: f64, iterations: i64) -> Result<Vec<f64>, SeriesError> {
    require_domain("ln(1-x)", x, Interval::LOG)?;
    Ok(log_series(-x, term_count(iterations)).collect())
}

/// Summands of [`maclaurin_ln1_plus_x`], in summation order.
pub fn ln1_plus_x_terms(x: f64, iterations: i64) -> Result<Vec<f64>, SeriesError> {
    require_domain("ln(1+x)", x, Interval::LOG)?;
    Ok(log_series(x, term_count(iterations)).collect())
}

/// Summands of [`maclaurin_power_series`], in summation order.
pub fn power_series_terms(x: f64, m: f64, iterations: i64) -> Result<Vec<f64>, SeriesError> {
    require_domain("(1-x)^m", x, Interval::BINOMIAL)?;
    Ok(power_minus_series(x, m, term_count(iterations)).collect())
}

/// Summands of [`maclaurin_power_series_plus`], in summation order.
pub fn power_series_plus_terms(x: f64, m: f64, iterations: i64) -> Result<Vec<f64>, SeriesError> {
    require_domain("(1+x)^m", x, Interval::BINOMIAL)?;
    Ok(power_plus_series(x, m, term_count(iterations)).collect())
}
