//! Exact-index helpers shared by the series evaluators.

/// `k!` as a float.
///
/// Exact for `k <= 22`, finite up to `170!`, `+inf` beyond that.
pub fn factorial(k: u64) -> f64 {
    let mut res = 1.0;
    for i in 2..=k {
        res *= i as f64;
        if res.is_infinite() {
            break;
        }
    }
    res
}

/// Generalized binomial coefficient `C(m, n) = m(m-1)...(m-n+1) / n!`.
///
/// Defined for any real `m`; reduces to the usual "choose" when `m` is a
/// non-negative integer. `C(m, 0)` is always `1`.
pub fn generalized_binomial(m: f64, n: u64) -> f64 {
    if n == 0 {
        return 1.0;
    }
    let mut numerator = 1.0;
    for i in 0..n {
        numerator *= m - i as f64;
    }
    numerator / factorial(n)
}

#[cfg(test)]
mod tests {
    use super::{factorial, generalized_binomial};

    #[test]
    fn factorial_edges() {
        assert_eq!(factorial(0), 1.0);
        assert_eq!(factorial(1), 1.0);
        assert_eq!(factorial(5), 120.0);
        assert_eq!(factorial(20), 2_432_902_008_176_640_000.0);
    }

    #[test]
    fn factorial_overflows_to_infinity() {
        assert!(factorial(170).is_finite());
        assert!(factorial(171).is_infinite());
    }

    #[test]
    fn binomial_edges() {
        assert_eq!(generalized_binomial(5.0, 0), 1.0);
        assert_eq!(generalized_binomial(-2.5, 0), 1.0);
        assert_eq!(generalized_binomial(5.0, 5), 1.0);
        assert_eq!(generalized_binomial(5.0, 6), 0.0);
    }

    #[test]
    fn binomial_values() {
        assert_eq!(generalized_binomial(5.0, 2), 10.0);
        assert_eq!(generalized_binomial(8.0, 3), 56.0);
    }

    #[test]
    fn binomial_non_integer_exponent() {
        // C(1/2, 2) = (1/2)(-1/2) / 2 = -1/8
        assert_eq!(generalized_binomial(0.5, 2), -0.125);
        // C(-1, n) = (-1)^n
        assert_eq!(generalized_binomial(-1.0, 3), -1.0);
        assert_eq!(generalized_binomial(-1.0, 4), 1.0);
    }
}
