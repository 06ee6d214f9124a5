//! Exact monetary amounts.

use core::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// Number of decimal places shown on documents.
pub const DISPLAY_SCALE: u32 = 2;

/// A non-negative monetary amount in a single, implicit currency.
///
/// Arithmetic is exact (decimal, not binary floating point); rounding only
/// happens when the amount is displayed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(Decimal);

impl ValueObject for Money {}

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    /// Wrap a decimal amount. Negative amounts are rejected.
    pub fn new(amount: Decimal) -> DomainResult<Self> {
        if amount < Decimal::ZERO {
            return Err(DomainError::validation("amount must not be negative"));
        }
        Ok(Self(amount))
    }

    /// Parse user input such as `"9.99"` or `" 12 "`.
    pub fn parse(text: &str) -> DomainResult<Self> {
        let trimmed = text.trim();
        let amount = Decimal::from_str(trimmed)
            .map_err(|_| DomainError::validation(format!("'{trimmed}' is not a valid amount")))?;
        Self::new(amount)
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// `self × quantity`, or `None` on overflow.
    pub fn checked_times(self, quantity: u32) -> Option<Money> {
        self.0.checked_mul(Decimal::from(quantity)).map(Money)
    }

    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    /// Amount rounded half away from zero to [`DISPLAY_SCALE`] places.
    pub fn rounded(&self) -> Decimal {
        self.0
            .round_dp_with_strategy(DISPLAY_SCALE, RoundingStrategy::MidpointAwayFromZero)
    }

    /// Render as `<symbol><amount>` with exactly two decimals, e.g. `$29.97`.
    pub fn format_with(&self, symbol: &str) -> String {
        format!("{symbol}{self}")
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:.prec$}", self.rounded(), prec = DISPLAY_SCALE as usize)
    }
}

impl FromStr for Money {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn money(text: &str) -> Money {
        Money::parse(text).unwrap()
    }

    #[test]
    fn parses_trimmed_decimal_input() {
        assert_eq!(money(" 9.99 ").amount(), Decimal::new(999, 2));
        assert_eq!(money("0").amount(), Decimal::ZERO);
    }

    #[test]
    fn rejects_non_numeric_and_negative_input() {
        for bad in ["", "abc", "9,99", "$5", "-1", "-0.01"] {
            match Money::parse(bad) {
                Err(DomainError::Validation(_)) => {}
                other => panic!("expected validation error for {bad:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn displays_two_decimals() {
        assert_eq!(money("9.99").to_string(), "9.99");
        assert_eq!(money("5").to_string(), "5.00");
        assert_eq!(money("9.9").to_string(), "9.90");
        assert_eq!(money("2.005").to_string(), "2.01");
        assert_eq!(money("2.004").to_string(), "2.00");
        assert_eq!(money("29.97").format_with("$"), "$29.97");
    }

    #[test]
    fn multiplication_is_exact() {
        let line = money("9.99").checked_times(3).unwrap();
        assert_eq!(line.amount(), Decimal::new(2997, 2));
        assert_eq!(line.format_with("$"), "$29.97");
    }

    #[test]
    fn overflow_is_reported_as_none() {
        let huge = Money::new(Decimal::MAX).unwrap();
        assert!(huge.checked_times(2).is_none());
        assert!(huge.checked_add(money("1")).is_none());
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: cent amounts display exactly as whole.cents.
        #[test]
        fn cent_amounts_display_without_drift(cents in 0i64..10_000_000_000i64) {
            let m = Money::new(Decimal::new(cents, 2)).unwrap();
            prop_assert_eq!(m.to_string(), format!("{}.{:02}", cents / 100, cents % 100));
        }
    }
}
