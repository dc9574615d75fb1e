//! Arithmetic series summation via the Gauss closed form.

/// Compute `1 + 2 + ... + n` as `n(n+1)/2`, or 0 for `n < 1`.
///
/// Exactly one of `n` and `n + 1` is even, so the even factor is halved
/// before multiplying; the intermediate never exceeds the final result.
///
/// # Example
///
/// ```
/// use math::series::series_sum;
///
/// assert_eq!(series_sum(5), 15);
/// assert_eq!(series_sum(100), 5050);
/// assert_eq!(series_sum(0), 0);
/// ```
pub fn series_sum(n: i64) -> i64 {
    if n < 1 {
        0
    } else if n % 2 == 0 {
        n / 2 * (n + 1)
    } else {
        (n + 1) / 2 * n
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_sum() {
        assert_eq!(series_sum(1), 1);
        assert_eq!(series_sum(5), 15);
        assert_eq!(series_sum(100), 5050);
        assert_eq!(series_sum(999_999), 499999500000);
    }

    #[test]
    fn test_series_sum_below_one() {
        assert_eq!(series_sum(0), 0);
        assert_eq!(series_sum(-1), 0);
        assert_eq!(series_sum(-100), 0);
    }

    #[test]
    fn test_series_sum_large_n_no_overflow() {
        // n(n+1) would overflow i64 here; the halved factor keeps it in range
        let n = 3_037_000_500i64;
        assert_eq!(series_sum(n), 4611686020018625250);
    }
}
