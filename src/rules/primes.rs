//! Primality helpers for the Hogtimus Prime rule.

/// Is `n` prime? Trial division by every candidate below `n`.
///
/// ```
/// use rust_hog::rules::is_prime;
///
/// assert!(!is_prime(16));
/// assert!(!is_prime(0));
/// assert!(is_prime(3));
/// ```
#[must_use]
pub fn is_prime(n: u32) -> bool {
    n >= 2 && (2..n).all(|d| n % d != 0)
}

/// Smallest prime strictly greater than `n`.
///
/// ```
/// use rust_hog::rules::next_prime;
///
/// assert_eq!(next_prime(5), 7);
/// assert_eq!(next_prime(30), 31);
/// ```
#[must_use]
pub fn next_prime(n: u32) -> u32 {
    (n + 1..)
        .find(|&candidate| is_prime(candidate))
        .unwrap_or(u32::MAX)
}

/// Replace a prime total with the next prime; leave anything else alone.
#[must_use]
pub fn prime_jump(total: u32) -> u32 {
    if is_prime(total) {
        next_prime(total)
    } else {
        total
    }
}
