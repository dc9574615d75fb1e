//! Sums of multiples of two divisors below an exclusive limit.
//!
//! Two entry points compute the same quantity: [`find_sum_hard_way`] walks
//! every integer below the limit, [`find_sum_optimized_way`] composes the
//! Gauss series formula with inclusion-exclusion and runs in constant time.

use crate::divisor::lcm;
use crate::series::series_sum;

/// Count the positive multiples of `|divisor|` strictly below `limit`.
///
/// Returns 0 when `limit < 1` or `divisor == 0`.
///
/// # Example
///
/// ```
/// use math::multiples::count_multiples_below;
///
/// assert_eq!(count_multiples_below(10, 3), 3); // 3, 6, 9
/// assert_eq!(count_multiples_below(15, 5), 2); // 5, 10 (15 itself excluded)
/// assert_eq!(count_multiples_below(10, 0), 0);
/// ```
pub fn count_multiples_below(limit: i64, divisor: i64) -> i64 {
    if limit < 1 || divisor == 0 {
        return 0;
    }
    // limit >= 1, so the subtraction and cast are in range; unsigned_abs
    // keeps i64::MIN divisors well-defined
    ((limit as u64 - 1) / divisor.unsigned_abs()) as i64
}

/// Sum the positive multiples of `|divisor|` strictly below `limit`.
///
/// `d + 2d + ... + kd = d * (1 + 2 + ... + k)`, so this is
/// `|divisor| * series_sum(count)`. Returns 0 when `limit < 1` or
/// `divisor == 0`; negative divisors sum the same multiples as their
/// magnitude.
///
/// # Example
///
/// ```
/// use math::multiples::sum_multiples_below;
///
/// assert_eq!(sum_multiples_below(10, 3), 18); // 3 + 6 + 9
/// assert_eq!(sum_multiples_below(20, 5), 30); // 5 + 10 + 15
/// assert_eq!(sum_multiples_below(10, -3), 18);
/// ```
pub fn sum_multiples_below(limit: i64, divisor: i64) -> i64 {
    let count = count_multiples_below(limit, divisor);
    if count == 0 {
        return 0;
    }
    // count > 0 implies |divisor| < limit, so the magnitude fits in i64
    divisor.unsigned_abs() as i64 * series_sum(count)
}

/// Sum the integers in `1..limit` divisible by either divisor, by checking
/// every one of them.
///
/// A zero divisor matches nothing. The else-if keeps a number divisible by
/// both divisors from being added twice. O(limit); intended as a reference
/// oracle for [`find_sum_optimized_way`] at small limits.
///
/// # Example
///
/// ```
/// use math::multiples::find_sum_hard_way;
///
/// assert_eq!(find_sum_hard_way(10, 3, 5), 23); // 3 + 5 + 6 + 9
/// ```
pub fn find_sum_hard_way(limit: i64, divisor1: i64, divisor2: i64) -> i64 {
    if limit < 1 {
        return 0;
    }
    let mut sum = 0;
    for i in 1..limit {
        if divisor1 != 0 && i % divisor1 == 0 {
            sum += i;
        } else if divisor2 != 0 && i % divisor2 == 0 {
            sum += i;
        }
    }
    sum
}

/// Sum the integers in `1..limit` divisible by either divisor, in constant
/// time via inclusion-exclusion.
///
/// Adding the sums of multiples of each divisor counts values divisible by
/// both twice; the multiples of `lcm(divisor1, divisor2)` are exactly that
/// overlap, subtracted once. Agrees with [`find_sum_hard_way`] on every
/// input.
///
/// # Example
///
/// ```
/// use math::multiples::find_sum_optimized_way;
///
/// assert_eq!(find_sum_optimized_way(10, 3, 5), 23);
/// assert_eq!(find_sum_optimized_way(20, 3, 5), 78); // 63 + 30 - 15
/// ```
pub fn find_sum_optimized_way(limit: i64, divisor1: i64, divisor2: i64) -> i64 {
    if limit < 1 || (divisor1 == 0 && divisor2 == 0) {
        return 0;
    }
    sum_multiples_below(limit, divisor1) + sum_multiples_below(limit, divisor2)
        - sum_multiples_below(limit, lcm(divisor1, divisor2))
}
