//! Unbiased pass@k estimation
//!
//! pass@k is the probability that at least one of k samples drawn without
//! replacement from n attempts (c of which passed) is a passing sample:
//! `1 - C(n-c, k) / C(n, k)`, computed as a running product to avoid
//! overflowing binomial coefficients.

use serde::{Deserialize, Serialize};

use super::TaskStats;

/// Estimate pass@k for a single task with `n` attempts and `c` successes
///
/// When `c = 0` the product range is empty and the estimate is exactly 0.
pub fn estimate(n: u64, c: u64, k: u64) -> f64 {
    debug_assert!(c <= n, "successes cannot exceed attempts");
    if n - c < k {
        return 1.0;
    }

    let mut product = 1.0f64;
    for i in (n - c + 1)..=n {
        product *= 1.0 - k as f64 / i as f64;
    }
    1.0 - product
}

/// Arithmetic mean of per-task estimates
///
/// Tasks absent from `stats` are excluded, not counted as zero. Returns 0
/// for an empty iterator; callers reporting statistics guard emptiness
/// upstream.
pub fn estimate_all<'a>(stats: impl IntoIterator<Item = &'a TaskStats>, k: u64) -> f64 {
    let mut sum = 0.0;
    let mut count = 0u64;
    for s in stats {
        sum += estimate(s.n, s.c, k);
        count += 1;
    }
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

/// A reported pass@k value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PassAtK {
    /// k value
    pub k: u64,
    /// Mean unbiased estimate across tasks
    pub estimate: f64,
}

impl PassAtK {
    /// Compute the mean estimate over the given task stats
    pub fn compute<'a>(stats: impl IntoIterator<Item = &'a TaskStats>, k: u64) -> Self {
        Self {
            k,
            estimate: estimate_all(stats, k),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    #[test]
    fn test_zero_successes_estimates_zero() {
        for n in 1..=50 {
            for k in 1..=n {
                assert_eq!(estimate(n, 0, k), 0.0, "n={} k={}", n, k);
            }
        }
    }

    #[test]
    fn test_all_successes_estimate_one() {
        for n in 1..=50 {
            for k in 1..=n {
                assert_eq!(estimate(n, n, k), 1.0, "n={} k={}", n, k);
            }
        }
    }

    #[test]
    fn test_monotone_in_k() {
        let (n, c) = (20, 7);
        let mut previous = 0.0;
        for k in 1..=n {
            let current = estimate(n, c, k);
            assert!(current >= previous - TOLERANCE, "k={}", k);
            assert!((0.0..=1.0).contains(&current));
            previous = current;
        }
    }

    #[test]
    fn test_scenario_five_attempts_three_passing_k1() {
        // 1 - C(2,1)/C(5,1) = 1 - 2/5
        assert!((estimate(5, 3, 1) - 0.6).abs() < TOLERANCE);
    }

    #[test]
    fn test_scenario_k_exceeds_failures() {
        // n - c = 2 < k = 3, so a passing draw is guaranteed
        assert_eq!(estimate(5, 3, 3), 1.0);
    }

    #[test]
    fn test_matches_binomial_form() {
        // 1 - C(n-c, k) / C(n, k) checked against the running product
        fn binomial(n: u64, k: u64) -> f64 {
            if k > n {
                return 0.0;
            }
            (1..=k).map(|i| (n - k + i) as f64 / i as f64).product()
        }

        for (n, c, k) in [(10, 4, 2), (25, 5, 5), (100, 37, 10)] {
            let direct = 1.0 - binomial(n - c, k) / binomial(n, k);
            assert!(
                (estimate(n, c, k) - direct).abs() < TOLERANCE,
                "n={} c={} k={}",
                n,
                c,
                k
            );
        }
    }

    #[test]
    fn test_estimate_all_mean() {
        let stats = vec![TaskStats { n: 4, c: 2 }, TaskStats { n: 4, c: 4 }];
        // per-task: 0.5 and 1.0
        assert!((estimate_all(&stats, 1) - 0.75).abs() < TOLERANCE);
    }

    #[test]
    fn test_estimate_all_empty_is_zero() {
        let empty: Vec<TaskStats> = Vec::new();
        assert_eq!(estimate_all(&empty, 1), 0.0);
    }

    #[test]
    fn test_pass_at_k_compute() {
        let stats = vec![TaskStats { n: 2, c: 1 }];
        let pass_at_1 = PassAtK::compute(&stats, 1);
        assert_eq!(pass_at_1.k, 1);
        assert!((pass_at_1.estimate - 0.5).abs() < TOLERANCE);
    }
}
