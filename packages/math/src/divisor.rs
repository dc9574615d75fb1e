//! Divisor arithmetic: greatest common divisor and least common multiple.

/// Compute the greatest common divisor of a and b via the Euclidean algorithm.
///
/// The result may carry the sign of the inputs (e.g. `gcd(-4, 0) == -4`);
/// callers that need a magnitude take the absolute value, which is what
/// [`lcm`] does.
///
/// # Example
///
/// ```
/// use math::divisor::gcd;
///
/// assert_eq!(gcd(48, 18), 6);
/// assert_eq!(gcd(12, 8), 4);
/// assert_eq!(gcd(7, 0), 7);
/// ```
pub fn gcd(a: i64, b: i64) -> i64 {
    // i64::MIN % -1 overflows in i64, so the recurrence runs in i128;
    // the result divides both inputs and always fits back in i64
    fn euclid(a: i128, b: i128) -> i128 {
        if b == 0 { a } else { euclid(b, a % b) }
    }
    euclid(a as i128, b as i128) as i64
}

/// Compute the least common multiple of a and b as `|a / gcd(a, b) * b|`.
///
/// Returns 0 if either input is 0 (a zero divisor has no multiples), and is
/// never negative. The product is taken in i128 and saturated to `i64::MAX`:
/// an lcm past `i64::MAX` has no multiples below any i64 limit, so the
/// saturated value yields the same sums downstream.
///
/// # Example
///
/// ```
/// use math::divisor::lcm;
///
/// assert_eq!(lcm(4, 6), 12);
/// assert_eq!(lcm(3, 5), 15);
/// assert_eq!(lcm(-4, 6), 12);
/// assert_eq!(lcm(0, 5), 0);
/// ```
pub fn lcm(a: i64, b: i64) -> i64 {
    if a == 0 || b == 0 {
        return 0;
    }
    let g = gcd(a, b) as i128;
    let l = (a as i128 / g * b as i128).abs();
    i64::try_from(l).unwrap_or(i64::MAX)
}
