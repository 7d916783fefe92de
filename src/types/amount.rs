//! Monetary amounts
//!
//! Receipt totals and item prices arrive as text. This module parses them into
//! exact decimal values so that checks such as "is this a multiple of 0.25"
//! are never subject to binary floating-point rounding.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Maximum number of fractional digits accepted in an amount
pub const MAX_FRACTION_DIGITS: usize = 2;

/// Error returned when text is not a valid monetary amount
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{0}' is not a non-negative amount with at most two decimal places")]
pub struct ParseAmountError(pub String);

/// A non-negative monetary amount with at most two fractional digits
///
/// Accepted text is `DIGITS` or `DIGITS.D` or `DIGITS.DD` with no sign,
/// exponent, separators or surrounding whitespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(Decimal);

impl Amount {
    /// The underlying decimal value
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// True if the amount has no cents
    pub fn is_whole(&self) -> bool {
        self.0.fract().is_zero()
    }

    /// True if the amount is an exact multiple of `step`
    ///
    /// A zero step is never a divisor.
    pub fn is_multiple_of(&self, step: Decimal) -> bool {
        if step.is_zero() {
            return false;
        }
        self.0.checked_rem(step).is_some_and(|rest| rest.is_zero())
    }

    /// Multiply by `factor` and round up to the next whole number
    ///
    /// Returns `None` if the product overflows or does not fit in a `u64`.
    pub fn scaled_ceil(&self, factor: Decimal) -> Option<u64> {
        self.0.checked_mul(factor)?.ceil().to_u64()
    }
}

impl FromStr for Amount {
    type Err = ParseAmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !is_amount_literal(s) {
            return Err(ParseAmountError(s.to_string()));
        }
        // Still fails for literals beyond Decimal's 28 significant digits
        Decimal::from_str(s)
            .map(Amount)
            .map_err(|_| ParseAmountError(s.to_string()))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn is_amount_literal(s: &str) -> bool {
    let (whole, fraction) = match s.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (s, None),
    };

    let whole_ok = !whole.is_empty() && whole.bytes().all(|b| b.is_ascii_digit());
    let fraction_ok = fraction.is_none_or(|f| {
        (1..=MAX_FRACTION_DIGITS).contains(&f.len()) && f.bytes().all(|b| b.is_ascii_digit())
    });

    whole_ok && fraction_ok
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::whole("35", Decimal::new(35, 0))]
    #[case::cents("35.35", Decimal::new(3535, 2))]
    #[case::one_digit_fraction("2.5", Decimal::new(25, 1))]
    #[case::zero("0.00", Decimal::ZERO)]
    #[case::leading_zeros("007.10", Decimal::new(710, 2))]
    fn test_parse_valid(#[case] input: &str, #[case] expected: Decimal) {
        let amount: Amount = input.parse().unwrap();
        assert_eq!(amount.as_decimal(), expected);
    }

    #[rstest]
    #[case::empty("")]
    #[case::text("abc")]
    #[case::negative("-1.00")]
    #[case::plus_sign("+1.00")]
    #[case::three_decimals("1.234")]
    #[case::trailing_dot("1.")]
    #[case::leading_dot(".50")]
    #[case::whitespace(" 1.00")]
    #[case::exponent("1e2")]
    #[case::thousands_separator("1,000.00")]
    #[case::overflow("999999999999999999999999999999999")]
    fn test_parse_invalid(#[case] input: &str) {
        let result = input.parse::<Amount>();
        assert_eq!(result, Err(ParseAmountError(input.to_string())));
    }

    #[rstest]
    #[case::round("35.00", true)]
    #[case::no_fraction("9", true)]
    #[case::cents("35.35", false)]
    #[case::one_cent("0.01", false)]
    fn test_is_whole(#[case] input: &str, #[case] expected: bool) {
        let amount: Amount = input.parse().unwrap();
        assert_eq!(amount.is_whole(), expected);
    }

    #[rstest]
    #[case::quarter("0.25", true)]
    #[case::three_quarters("10.75", true)]
    #[case::whole("9.00", true)]
    #[case::zero("0.00", true)]
    #[case::thirty_cents("0.30", false)]
    #[case::one_cent_over("1.26", false)]
    fn test_is_multiple_of_quarter(#[case] input: &str, #[case] expected: bool) {
        let amount: Amount = input.parse().unwrap();
        assert_eq!(amount.is_multiple_of(Decimal::new(25, 2)), expected);
    }

    #[test]
    fn test_is_multiple_of_zero_step() {
        let amount: Amount = "1.00".parse().unwrap();
        assert!(!amount.is_multiple_of(Decimal::ZERO));
    }

    #[rstest]
    #[case::rounds_up("12.25", Some(3))]
    #[case::whole_price_fractional_product("12.00", Some(3))]
    #[case::whole_product("10.00", Some(2))]
    #[case::small("1.40", Some(1))]
    #[case::zero("0.00", Some(0))]
    fn test_scaled_ceil(#[case] input: &str, #[case] expected: Option<u64>) {
        let amount: Amount = input.parse().unwrap();
        assert_eq!(amount.scaled_ceil(Decimal::new(2, 1)), expected);
    }
}
