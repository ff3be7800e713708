//! Effective branching factor of a finished search.
//!
//! `b*` is the branching factor a uniform tree of depth `d` would need to
//! contain `N` nodes, root included:
//!
//! ```text
//! 1 + b* + b*^2 + ... + b*^d = N
//! ```
//!
//! The root is found by bisection on `[1, N]`.

/// Bisection stops once the bracket is narrower than this, or once it can no
/// longer shrink because its ends are adjacent floats.
pub const TOLERANCE: f64 = 1e-6;

/// Solves for the effective branching factor given `nodes` created by a
/// search that found a solution of length `depth`.
///
/// - `depth == 0` yields `0.0` (an immediate solution has no branching).
/// - If `nodes <= depth + 1`, even a branching factor of 1 already produces
///   at least `nodes` nodes, so the result is clamped to `1.0`. This covers
///   the degenerate `nodes == 1` case.
///
/// The result is rounded to 6 decimal digits. Geometric sums that overflow
/// `f64` are treated as too large and only shrink the bracket.
///
/// # Examples
/// ```
/// use eight_puzzle::branching::effective_branching_factor;
/// assert_eq!(effective_branching_factor(7, 2), 2.0);
/// assert_eq!(effective_branching_factor(500, 0), 0.0);
/// assert_eq!(effective_branching_factor(1, 4), 1.0);
/// ```
pub fn effective_branching_factor(nodes: u64, depth: usize) -> f64 {
    if depth == 0 {
        return 0.0;
    }
    let target = nodes as f64;
    if target <= depth as f64 + 1.0 {
        return 1.0;
    }

    let mut low = 1.0_f64;
    let mut high = target;
    while high - low > TOLERANCE {
        let mid = (low + high) / 2.0;
        if mid <= low || mid >= high {
            break;
        }
        match geometric_series(mid, depth) {
            Some(sum) if sum < target => low = mid,
            _ => high = mid,
        }
    }
    round6((low + high) / 2.0)
}

/// `1 + b + b^2 + ... + b^depth`, or `None` once the sum is no longer finite.
fn geometric_series(base: f64, depth: usize) -> Option<f64> {
    let mut term = 1.0_f64;
    let mut sum = 1.0_f64;
    for _ in 0..depth {
        term *= base;
        sum += term;
        if !sum.is_finite() {
            return None;
        }
    }
    Some(sum)
}

fn round6(value: f64) -> f64 {
    (value * 1e6).round() / 1e6
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_zero_is_zero() {
        for n in [0, 1, 2, 1000, u64::MAX] {
            assert_eq!(effective_branching_factor(n, 0), 0.0);
        }
    }

    #[test]
    fn test_degenerate_counts_clamp_to_one() {
        assert_eq!(effective_branching_factor(1, 1), 1.0);
        assert_eq!(effective_branching_factor(1, 20), 1.0);
        assert_eq!(effective_branching_factor(0, 3), 1.0);
        // A single path of length d creates exactly d + 1 nodes.
        assert_eq!(effective_branching_factor(6, 5), 1.0);
    }

    #[test]
    fn test_exact_integer_roots() {
        assert_eq!(effective_branching_factor(3, 1), 2.0);
        assert_eq!(effective_branching_factor(7, 2), 2.0);
        assert_eq!(effective_branching_factor(13, 2), 3.0);
        assert_eq!(effective_branching_factor(1 + 3 + 9 + 27, 3), 3.0);
        assert_eq!(effective_branching_factor(1 + 10 + 100, 2), 10.0);
    }

    #[test]
    fn test_root_satisfies_equation() {
        for (n, d) in [(52, 5), (1000, 7), (227, 12), (31, 3)] {
            let b = effective_branching_factor(n, d);
            let sum = geometric_series(b, d).unwrap();
            assert!(
                (sum - n as f64).abs() / (n as f64) < 1e-4,
                "N={} d={} b*={} sum={}",
                n,
                d,
                b,
                sum
            );
        }
    }

    #[test]
    fn test_result_within_bracket() {
        let b = effective_branching_factor(1_000_000, 2);
        assert!(b > 1.0 && b < 1_000_000.0);
        assert!((b - 999.5).abs() < 0.01, "b*={}", b);
    }

    #[test]
    fn test_overflow_narrows_bracket() {
        assert!(geometric_series(1e300, 3).is_none());
        let b = effective_branching_factor(u64::MAX, 2000);
        assert!(b.is_finite());
        assert!(b > 1.0 && b < 1.1, "b*={}", b);
    }

    #[test]
    fn test_large_roots_terminate() {
        let b = effective_branching_factor(10_000_000_000, 1);
        assert!((b - 9_999_999_999.0).abs() < 1e-2, "b*={}", b);
        let b = effective_branching_factor(u64::MAX, 1);
        assert!(b.is_finite() && b > 1e19, "b*={}", b);
    }

    #[test]
    fn test_rounded_to_six_digits() {
        let b = effective_branching_factor(100, 3);
        assert_eq!(b, round6(b));
        assert_eq!(round6(1.23456789), 1.234568);
    }
}
