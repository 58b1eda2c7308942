//! Binomial distribution helpers.
//!
//! `X ~ Binomial(n, p)` counts successes in `n` independent trials that each
//! succeed with probability `p`. Combinations are accumulated multiplicatively
//! rather than through factorials, which keeps intermediate values bounded for
//! the trial counts a calculator deals with.

/// Binomial coefficient `C(n, k)` as `f64`.
///
/// Uses `result *= (n - k + i) / i` for `i = 1..=k` on the smaller of `k` and
/// `n - k`. Returns `0.0` when `k > n`.
#[must_use]
pub fn combinations(n: u64, k: u64) -> f64 {
    if k > n {
        return 0.0;
    }
    let k = k.min(n - k);
    let mut result = 1.0;
    for i in 1..=k {
        result *= (n - k + i) as f64 / i as f64;
    }
    result
}

/// Natural log of `C(n, k)`, for when [`combinations`] overflows.
#[must_use]
pub fn ln_combinations(n: u64, k: u64) -> f64 {
    if k > n {
        return f64::NEG_INFINITY;
    }
    let k = k.min(n - k);
    (1..=k)
        .map(|i| ((n - k + i) as f64).ln() - (i as f64).ln())
        .sum()
}

/// Probability mass `P(X = k)` for `X ~ Binomial(n, p)`.
///
/// Degenerate `p` (0 or 1) is answered exactly. Otherwise the multiplicative
/// form is tried first and log space is used if it is not finite.
#[must_use]
pub fn pmf(n: u64, k: u64, p: f64) -> f64 {
    if k > n {
        return 0.0;
    }
    if p <= 0.0 {
        return if k == 0 { 1.0 } else { 0.0 };
    }
    if p >= 1.0 {
        return if k == n { 1.0 } else { 0.0 };
    }

    let direct = combinations(n, k) * p.powi(k as i32) * (1.0 - p).powi((n - k) as i32);
    if direct.is_finite() {
        return direct;
    }

    let ln_mass = ln_combinations(n, k) + k as f64 * p.ln() + (n - k) as f64 * (1.0 - p).ln();
    ln_mass.exp()
}

/// Largest `n` whose tail is summed term by term with [`pmf`].
pub const DIRECT_SUM_LIMIT: u64 = 1000;

/// Upper tail `P(X >= k)` for `X ~ Binomial(n, p)`.
///
/// Sums the PMF from `k` to `n`, clamped to at most 1. Above
/// [`DIRECT_SUM_LIMIT`] consecutive terms are generated by the ratio
/// `P(j+1) / P(j) = (n-j)/(j+1) * p/(1-p)` in log space, stopping once the
/// terms past the mean no longer change the sum.
#[must_use]
pub fn upper_tail(n: u64, k: u64, p: f64) -> f64 {
    if k == 0 {
        return 1.0;
    }
    if k > n {
        return 0.0;
    }
    let tail = if n <= DIRECT_SUM_LIMIT {
        (k..=n).map(|j| pmf(n, j, p)).sum()
    } else {
        recurrence_tail(n, k, p)
    };
    tail.min(1.0)
}

fn recurrence_tail(n: u64, k: u64, p: f64) -> f64 {
    if p <= 0.0 {
        return 0.0;
    }
    if p >= 1.0 {
        return 1.0;
    }

    let ln_odds = p.ln() - (1.0 - p).ln();
    let mean = n as f64 * p;
    let mut ln_term = ln_combinations(n, k) + k as f64 * p.ln() + (n - k) as f64 * (1.0 - p).ln();
    let mut tail = 0.0;

    for j in k..=n {
        let term = ln_term.exp();
        tail += term;
        if j as f64 > mean && term <= tail * f64::EPSILON * 0.5 {
            break;
        }
        ln_term += ((n - j) as f64).ln() - ((j + 1) as f64).ln() + ln_odds;
    }
    tail
}
