//! Order pricing.

/// Markup applied on top of the cart subtotal when an order is placed.
pub const MARKUP_PERCENT: u64 = 10;

/// Total charged for an order with the given subtotal.
///
/// The markup is rounded half up to the nearest minor unit. Returns `None` on overflow.
#[must_use]
pub fn order_total(subtotal: u64) -> Option<u64> {
    let markup = subtotal.checked_mul(MARKUP_PERCENT)?.checked_add(50)? / 100;

    subtotal.checked_add(markup)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adds_ten_percent() {
        assert_eq!(order_total(2500), Some(2750));
        assert_eq!(order_total(1000), Some(1100));
    }

    #[test]
    fn rounds_markup_half_up() {
        // 10% of 15 is 1.5
        assert_eq!(order_total(15), Some(17));
        // 10% of 14 is 1.4
        assert_eq!(order_total(14), Some(15));
        // 10% of 4 is 0.4
        assert_eq!(order_total(4), Some(4));
        // 10% of 5 is 0.5
        assert_eq!(order_total(5), Some(6));
    }

    #[test]
    fn zero_subtotal_has_zero_total() {
        assert_eq!(order_total(0), Some(0));
    }

    #[test]
    fn overflow_is_reported() {
        assert_eq!(order_total(u64::MAX), None);
    }
}
