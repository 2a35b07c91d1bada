//! Support fraction ↔ count conversion.

use basket_core::errors::MiningError;

/// Reject a minimum support outside (0, 1].
pub fn validate_min_support(min_support: f64) -> Result<(), MiningError> {
    if min_support > 0.0 && min_support <= 1.0 {
        Ok(())
    } else {
        Err(MiningError::invalid_input(format!(
            "min_support must be in (0, 1], got {}",
            min_support
        )))
    }
}

/// Smallest count `c` such that `c / transaction_count >= min_support`.
///
/// The comparison is done on the same `f64` division used for reported
/// supports, so an itemset whose support equals `min_support` is kept even
/// when `min_support * transaction_count` rounds above an integer.
pub fn min_count_for(min_support: f64, transaction_count: u64) -> u64 {
    let n = transaction_count as f64;
    let mut count = ((min_support * n).ceil() as u64).max(1);
    while count > 1 && (count - 1) as f64 / n >= min_support {
        count -= 1;
    }
    while (count as f64 / n) < min_support && count < transaction_count {
        count += 1;
    }
    count
}

/// Support fraction of `count` over `transaction_count`.
pub fn support_fraction(count: u64, transaction_count: u64) -> f64 {
    count as f64 / transaction_count as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_boundary_kept() {
        assert_eq!(min_count_for(0.5, 4), 2);
        assert_eq!(min_count_for(1.0, 7), 7);
        assert_eq!(min_count_for(0.25, 4), 1);
    }

    #[test]
    fn test_float_rounding_does_not_overshoot() {
        // 0.1 * 30 evaluates to 3.0000000000000004.
        let count = min_count_for(0.1, 30);
        assert_eq!(count, 3);
        assert!(support_fraction(count, 30) >= 0.1);
        assert!(support_fraction(count - 1, 30) < 0.1);
    }

    #[test]
    fn test_fractional_threshold_rounds_up() {
        assert_eq!(min_count_for(0.3, 4), 2);
        assert_eq!(min_count_for(0.01, 10), 1);
    }

    #[test]
    fn test_validate_min_support() {
        assert!(validate_min_support(0.5).is_ok());
        assert!(validate_min_support(1.0).is_ok());
        assert!(validate_min_support(0.0).is_err());
        assert!(validate_min_support(1.5).is_err());
        assert!(validate_min_support(f64::NAN).is_err());
    }
}
