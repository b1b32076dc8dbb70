//! Swine Swap: scores whose last two digits mirror each other trade places.
//!
//! Digits are split as `score / 10` and `score % 10`. Only scores strictly
//! above 100 have 100 removed first, so a score of exactly 100 splits into
//! tens 10 and ones 0 and can never match another score.

/// (tens, ones) digits used by the swap comparison.
#[must_use]
pub fn swap_digits(score: u32) -> (u32, u32) {
    let base = if score > 100 { score - 100 } else { score };
    (base / 10, score % 10)
}

/// Are the last two digits of `score` and `opponent_score` reversals of each
/// other, such as 19 and 91?
///
/// ```
/// use rust_hog::rules::is_swap;
///
/// assert!(is_swap(19, 91));
/// assert!(!is_swap(20, 3));
/// ```
#[must_use]
pub fn is_swap(score: u32, opponent_score: u32) -> bool {
    let (tens, ones) = swap_digits(score);
    let (opp_tens, opp_ones) = swap_digits(opponent_score);
    tens == opp_ones && opp_tens == ones
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reversed_pairs() {
        assert!(is_swap(19, 91));
        assert!(is_swap(91, 19));
        assert!(is_swap(12, 21));
        assert!(is_swap(3, 30));
    }

    #[test]
    fn test_non_reversed_pairs() {
        assert!(!is_swap(20, 3));
        assert!(!is_swap(19, 92));
        assert!(!is_swap(45, 45));
    }

    #[test]
    fn test_equal_digits_mirror_themselves() {
        assert!(is_swap(22, 22));
        assert!(is_swap(0, 0));
        // Only when both digits match: 23 reversed is 32, not 23.
        assert!(!is_swap(23, 23));
    }

    #[test]
    fn test_scores_above_one_hundred() {
        // 102 -> (0, 2), 20 -> (2, 0)
        assert_eq!(swap_digits(102), (0, 2));
        assert!(is_swap(102, 20));
        // 101 -> (0, 1), 10 -> (1, 0)
        assert!(is_swap(101, 10));
        assert!(is_swap(119, 91));
    }

    #[test]
    fn test_exactly_one_hundred_is_not_rebased() {
        // The rebase applies to scores strictly above 100 only.
        assert_eq!(swap_digits(100), (10, 0));
        assert!(!is_swap(100, 0));
        assert!(!is_swap(100, 1));
        assert!(!is_swap(100, 100));
        // Rebasing at 100 would have produced (0, 0) and a swap with 0.
        assert_eq!(swap_digits(0), (0, 0));
    }
}
