use bigdecimal::{BigDecimal, ParseBigDecimalError};
use num_traits::{ToPrimitive, Zero};
use std::fmt;
use std::ops::Sub;

/// Minor units per major unit (two decimal places).
const SCALE: i64 = 100;

/// Integer digits above which an amount cannot fit in `i64` minor units.
const MAX_INTEGER_DIGITS: i64 = 17;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// A currency amount counted in minor units (cents).
///
/// Balances and transaction amounts are kept as integers so that repeated
/// deposits and withdrawals never drift the way binary floats do. Parsing
/// goes through `BigDecimal` and rounds to two decimal places.
///
/// # Examples
/// ```
/// use account_ledger::common::money::Money;
///
/// let amount: Money = "12.5".parse().unwrap();
/// assert_eq!(amount.as_minor(), 1250);
/// assert_eq!(amount.to_string(), "12.50");
/// ```
pub struct Money(i64);

impl Money {
    pub fn from_minor(value: i64) -> Self {
        Self(value)
    }

    pub fn zero() -> Self {
        Money(0)
    }

    pub fn as_minor(&self) -> i64 {
        self.0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    pub fn checked_add(self, rhs: Money) -> Option<Money> {
        self.0.checked_add(rhs.0).map(Money)
    }

    pub fn to_string_2dp(&self) -> String {
        let bd = (BigDecimal::from(self.0) / BigDecimal::from(SCALE)).with_scale(2);
        bd.to_string()
    }
}

impl std::str::FromStr for Money {
    type Err = ParseBigDecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t.is_empty() {
            return Err(ParseBigDecimalError::Other("empty amount".into()));
        }

        let bd: BigDecimal = t.parse()?;

        // Bound the magnitude from the digit count and exponent before any
        // rescaling; `1e100000000` must not expand into a huge integer.
        let (digits, exponent) = bd.as_bigint_and_exponent();
        if digits.is_zero() {
            return Ok(Money(0));
        }
        let digit_count = digits.to_string().trim_start_matches('-').len() as i64;
        let integer_digits = digit_count.saturating_sub(exponent);
        if integer_digits > MAX_INTEGER_DIGITS {
            return Err(ParseBigDecimalError::Other("amount overflow".into()));
        }
        // |value| < 0.001 rounds to zero cents.
        if integer_digits <= -3 {
            return Ok(Money(0));
        }

        let scaled = (bd * BigDecimal::from(SCALE)).round(0);
        let value: i64 = scaled
            .to_i64()
            .ok_or_else(|| ParseBigDecimalError::Other("amount overflow".into()))?;

        Ok(Money(value))
    }
}

impl Sub for Money {
    type Output = Money;
    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_2dp())
    }
}
