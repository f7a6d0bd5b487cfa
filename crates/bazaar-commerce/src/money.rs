//! Money type for representing monetary values.
//!
//! Uses minor-unit integer representation (cents, kuruş) so cart totals
//! stay exact; rounding only happens when a value is formatted.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul};

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    /// US dollar, used by the product search catalogue.
    #[default]
    USD,
    /// Euro.
    EUR,
    /// Turkish lira, used by the admin and customer portals.
    TRY,
}

impl Currency {
    /// Get the currency code (e.g., "USD").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::TRY => "TRY",
        }
    }

    /// Get the currency symbol (e.g., "$").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::TRY => "\u{20ba}",
        }
    }

    /// Number of decimal places in the minor unit.
    pub fn decimal_places(&self) -> u32 {
        2
    }

    /// Thousands and decimal separators used when formatting.
    fn separators(&self) -> (char, char) {
        match self {
            Currency::USD => (',', '.'),
            Currency::EUR | Currency::TRY => ('.', ','),
        }
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            "TRY" => Some(Currency::TRY),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
///
/// Amounts are stored in the smallest unit of the currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in smallest currency unit.
    pub amount_minor: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from minor units.
    pub fn new(amount_minor: i64, currency: Currency) -> Self {
        Self {
            amount_minor,
            currency,
        }
    }

    /// Create a Money value from whole major units.
    ///
    /// ```
    /// use bazaar_commerce::money::{Currency, Money};
    /// let price = Money::from_major(2499, Currency::TRY);
    /// assert_eq!(price.amount_minor, 249_900);
    /// ```
    ///
    /// Saturates at the `i64` bounds; use [`Money::try_from_major`] for
    /// amounts that come from user input.
    pub fn from_major(units: i64, currency: Currency) -> Self {
        Self::new(units.saturating_mul(Self::scale(currency)), currency)
    }

    /// Like [`Money::from_major`], but `None` when the amount does not fit.
    pub fn try_from_major(units: i64, currency: Currency) -> Option<Self> {
        units
            .checked_mul(Self::scale(currency))
            .map(|amount| Self::new(amount, currency))
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    fn scale(currency: Currency) -> i64 {
        10_i64.pow(currency.decimal_places())
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_minor == 0
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.amount_minor < 0
    }

    /// Convert to a decimal value. Display only.
    pub fn to_decimal(&self) -> f64 {
        self.amount_minor as f64 / Self::scale(self.currency) as f64
    }

    /// Format as a display string (e.g., "$1,049.99" or "₺2.499,00").
    pub fn display(&self) -> String {
        format!("{}{}", self.currency.symbol(), self.display_amount())
    }

    /// Format as a display string without symbol.
    pub fn display_amount(&self) -> String {
        let (thousands, decimal) = self.currency.separators();
        let scale = Self::scale(self.currency);
        let abs = self.amount_minor.unsigned_abs();
        let major = abs / scale as u64;
        let minor = abs % scale as u64;

        let digits = major.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(thousands);
            }
            grouped.push(ch);
        }

        let sign = if self.amount_minor < 0 { "-" } else { "" };
        let places = self.currency.decimal_places() as usize;
        format!("{sign}{grouped}{decimal}{minor:0places$}")
    }

    /// Try to add another Money value, returning None on currency mismatch or overflow.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        self.amount_minor
            .checked_add(other.amount_minor)
            .map(|amount| Money::new(amount, self.currency))
    }

    /// Try to subtract another Money value.
    pub fn try_subtract(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        self.amount_minor
            .checked_sub(other.amount_minor)
            .map(|amount| Money::new(amount, self.currency))
    }

    /// Multiply by a scalar, returning None on overflow.
    pub fn try_multiply(&self, factor: i64) -> Option<Money> {
        self.amount_minor
            .checked_mul(factor)
            .map(|amount| Money::new(amount, self.currency))
    }

    /// Apply a percentage discount, rounding half away from zero.
    pub fn discounted(&self, percent: u8) -> Money {
        let keep = 100 - i64::from(percent.min(100));
        let scaled = self.amount_minor.saturating_mul(keep);
        let rounded = if scaled >= 0 {
            (scaled + 50) / 100
        } else {
            (scaled - 50) / 100
        };
        Money::new(rounded, self.currency)
    }

    /// Sum an iterator of Money values, returning None on mismatch or overflow.
    pub fn try_sum<'a>(mut iter: impl Iterator<Item = &'a Money>, currency: Currency) -> Option<Money> {
        iter.try_fold(Money::zero(currency), |acc, m| acc.try_add(m))
    }
}

impl Add for Money {
    type Output = Option<Money>;

    fn add(self, other: Money) -> Option<Money> {
        self.try_add(&other)
    }
}

impl Mul<i64> for Money {
    type Output = Option<Money>;

    fn mul(self, factor: i64) -> Option<Money> {
        self.try_multiply(factor)
    }
}

impl PartialOrd for Money {
    /// Only amounts of the same currency are comparable.
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        if self.currency != other.currency {
            return None;
        }
        Some(self.amount_minor.cmp(&other.amount_minor))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}
