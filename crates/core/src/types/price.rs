//! Type-safe price representation using decimal arithmetic.

use core::fmt;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., rubles, not kopecks).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// Create a price in the default currency from whole units.
    #[must_use]
    pub fn from_units(units: i64) -> Self {
        Self::new(Decimal::from(units), CurrencyCode::default())
    }

    /// Price of `quantity` units at this price.
    #[must_use]
    pub fn times(&self, quantity: u32) -> Self {
        Self::new(self.amount * Decimal::from(quantity), self.currency_code)
    }

    /// Returns true if the amount is exactly zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Format for display with digit grouping (e.g., "12 345 ₽", "$19.99").
    ///
    /// Whole amounts are printed without a fractional part; anything else is
    /// rounded half-up to two places.
    #[must_use]
    pub fn display(&self) -> String {
        let rounded = self
            .amount
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let negative = rounded.is_sign_negative() && !rounded.is_zero();
        let abs = rounded.abs();
        let whole = abs.trunc();
        let fraction = abs - whole;

        let mut grouped = group_digits(&whole.to_string());
        if !fraction.is_zero() {
            let cents = (fraction * Decimal::ONE_HUNDRED).trunc();
            grouped.push_str(&format!(".{:0>2}", cents.to_string()));
        }
        if negative {
            grouped.insert(0, '-');
        }

        match self.currency_code {
            CurrencyCode::RUB => format!("{grouped} {}", self.currency_code.symbol()),
            _ => format!("{}{grouped}", self.currency_code.symbol()),
        }
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

fn group_digits(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(ch);
    }
    out
}

/// ISO 4217 currency codes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub enum CurrencyCode {
    #[default]
    RUB,
    USD,
    EUR,
}

impl CurrencyCode {
    /// Display symbol for this currency.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::RUB => "₽",
            Self::USD => "$",
            Self::EUR => "€",
        }
    }

    /// ISO 4217 code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::RUB => "RUB",
            Self::USD => "USD",
            Self::EUR => "EUR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_groups_thousands() {
        assert_eq!(Price::from_units(9_450).display(), "9 450 ₽");
        assert_eq!(Price::from_units(500).display(), "500 ₽");
        assert_eq!(Price::from_units(1_234_567).display(), "1 234 567 ₽");
    }

    #[test]
    fn test_display_fractional_amount() {
        let price = Price::new(Decimal::new(180_50, 2), CurrencyCode::RUB);
        assert_eq!(price.display(), "180.50 ₽");

        let price = Price::new(Decimal::new(1999, 2), CurrencyCode::USD);
        assert_eq!(price.display(), "$19.99");
    }

    #[test]
    fn test_display_negative() {
        assert_eq!(Price::from_units(-20).display(), "-20 ₽");
    }

    #[test]
    fn test_times() {
        assert_eq!(Price::from_units(100).times(3), Price::from_units(300));
        assert!(Price::from_units(100).times(0).is_zero());
    }

    #[test]
    fn test_currency_default_is_rub() {
        assert_eq!(CurrencyCode::default(), CurrencyCode::RUB);
        assert_eq!(CurrencyCode::RUB.code(), "RUB");
    }
}
