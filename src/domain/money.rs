use std::fmt;

use bigdecimal::{BigDecimal, Zero};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An exact decimal monetary value.
///
/// Amounts are backed by an arbitrary-precision decimal, never by binary
/// floating point, so `"300.44"` is exactly 300.44 and sums never drift.
/// Numerals of any length parse and compute exactly (e.g.
/// `"123456789012345678901234567890123.44"`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(BigDecimal);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("not a valid decimal numeral: '{0}'")]
pub struct AmountParseError(pub String);

impl Amount {
    pub fn zero() -> Amount {
        Amount(BigDecimal::zero())
    }

    /// Parse a plain decimal numeral like `"200"`, `"300.44"` or `"-0.44"`,
    /// with integer and fraction parts of any length.
    pub fn parse(text: &str) -> Result<Amount, AmountParseError> {
        // The backing parser accepts exponent forms; a monetary numeral is
        // plain digits and an optional point.
        if text.contains(['e', 'E']) {
            return Err(AmountParseError(text.to_string()));
        }
        text.parse::<BigDecimal>()
            .map(Amount)
            .map_err(|_| AmountParseError(text.to_string()))
    }

    /// True iff the value is strictly greater than zero.
    pub fn is_positive(&self) -> bool {
        self.0 > BigDecimal::zero()
    }

    /// True iff the value resolves to whole cents.
    ///
    /// Checked on the decimal representation itself (trailing zeros ignored,
    /// so `"1.230"` passes), never by converting to a float.
    pub fn has_at_most_two_decimal_places(&self) -> bool {
        self.0.normalized().fractional_digit_count() <= 2
    }

    /// Exact addition.
    pub fn add(&self, other: &Amount) -> Amount {
        Amount(&self.0 + &other.0)
    }

    /// Exact subtraction.
    pub fn subtract(&self, other: &Amount) -> Amount {
        Amount(&self.0 - &other.0)
    }
}

impl Default for Amount {
    fn default() -> Self {
        Amount::zero()
    }
}

impl fmt::Display for Amount {
    /// Renders exactly two digits after the decimal point, no thousands
    /// separators. Validated amounts are already exact to two places, so this
    /// is padding, not rounding.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
