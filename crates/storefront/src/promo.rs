//! Promotional code rules.
//!
//! There is exactly one valid code, [`PROMO_CODE`], and it can be redeemed
//! once per shopper: the first accepted application flips
//! [`PromoState::used`] permanently. Clearing the cart or the code forfeits
//! the discount in progress but never returns the token.
//!
//! Rejection is a plain `false`. Callers that want to tell "wrong code"
//! apart from "already redeemed" inspect [`PromoState::used`] themselves.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The single accepted promotional code, in normalized form.
pub const PROMO_CODE: &str = "РЫБКА";

/// Discount rate applied to eligible cart lines (10%).
pub const PROMO_DISCOUNT_RATE: Decimal = Decimal::from_parts(10, 0, 0, false, 2);

/// Normalize user input for comparison: trim surrounding whitespace, uppercase.
#[must_use]
pub fn normalize(code: &str) -> String {
    code.trim().to_uppercase()
}

/// Decide whether `code` is accepted given the one-time-use flag.
///
/// Returns the normalized code on acceptance.
#[must_use]
pub fn evaluate(code: &str, already_used: bool) -> Option<String> {
    if already_used {
        return None;
    }
    let normalized = normalize(code);
    (normalized == PROMO_CODE).then_some(normalized)
}

/// Promo discount for one cart line.
///
/// Lines that already carry a sale price get nothing; discounts do not stack.
#[must_use]
pub fn line_discount(unit_price: Decimal, quantity: u32, on_sale: bool) -> Decimal {
    if on_sale {
        return Decimal::ZERO;
    }
    unit_price * Decimal::from(quantity) * PROMO_DISCOUNT_RATE
}

/// Redemption state of the promotional code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromoState {
    /// Code currently applied to the cart, if any.
    pub applied_code: Option<String>,
    /// Set once a code has been accepted; never cleared except by a full reset.
    pub used: bool,
}

impl PromoState {
    /// Try to redeem `code`. Returns true if it was accepted.
    pub fn apply(&mut self, code: &str) -> bool {
        match evaluate(code, self.used) {
            Some(normalized) => {
                self.applied_code = Some(normalized);
                self.used = true;
                true
            }
            None => false,
        }
    }

    /// Drop the applied code. The one-time-use flag stays set.
    ///
    /// Returns true if a code was applied.
    pub fn clear(&mut self) -> bool {
        self.applied_code.take().is_some()
    }

    /// Returns true if a code is currently applied.
    #[must_use]
    pub const fn is_applied(&self) -> bool {
        self.applied_code.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // Decision Function
    // =========================================================================

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  рыбка\t"), "РЫБКА");
        assert_eq!(normalize("Рыбка"), "РЫБКА");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_evaluate_accepts_any_case_and_padding() {
        for input in ["рыбка", " РЫБКА ", "Рыбка", "рЫбКа"] {
            assert_eq!(evaluate(input, false).as_deref(), Some(PROMO_CODE), "{input}");
        }
    }

    #[test]
    fn test_evaluate_rejects_wrong_codes() {
        for input in ["WRONGCODE", "", "   ", "РЫБК", "РЫБКАА", "RYBKA", "Р Ы Б К А"] {
            assert_eq!(evaluate(input, false), None, "{input}");
        }
    }

    #[test]
    fn test_evaluate_rejects_when_used() {
        assert_eq!(evaluate("РЫБКА", true), None);
    }

    // =========================================================================
    // Promo State
    // =========================================================================

    #[test]
    fn test_apply_once() {
        let mut promo = PromoState::default();
        assert!(promo.apply(" рыбка "));
        assert_eq!(promo.applied_code.as_deref(), Some(PROMO_CODE));
        assert!(promo.used);

        assert!(!promo.apply("РЫБКА"));
        assert!(!promo.apply("Рыбка"));
    }

    #[test]
    fn test_wrong_code_does_not_burn_token() {
        let mut promo = PromoState::default();
        assert!(!promo.apply("WRONGCODE"));
        assert!(!promo.used);
        assert!(promo.applied_code.is_none());
        assert!(promo.apply("рыбка"));
    }

    #[test]
    fn test_clear_keeps_used_flag() {
        let mut promo = PromoState::default();
        assert!(promo.apply("РЫБКА"));
        assert!(promo.clear());
        assert!(!promo.is_applied());
        assert!(promo.used);
        assert!(!promo.apply("РЫБКА"));
        assert!(!promo.clear());
    }

    // =========================================================================
    // Line Discount
    // =========================================================================

    #[test]
    fn test_line_discount_regular_item() {
        assert_eq!(line_discount(Decimal::from(100), 2, false), Decimal::from(20));
    }

    #[test]
    fn test_line_discount_sale_item() {
        assert_eq!(line_discount(Decimal::from(90), 1, true), Decimal::ZERO);
    }

    #[test]
    fn test_discount_rate_is_ten_percent() {
        assert_eq!(PROMO_DISCOUNT_RATE, Decimal::new(10, 2));
    }
}
