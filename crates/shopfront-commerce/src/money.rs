//! Money type for representing monetary values.
//!
//! Amounts are exact decimals (`rust_decimal::Decimal`) so totals never pick
//! up binary floating-point error. On the wire and in persisted carts an
//! amount is a decimal string such as `"120"` or `"99.50"`.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CommerceError;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    TWD,
    USD,
    EUR,
    GBP,
    JPY,
}

impl Currency {
    /// Get the currency code (e.g., "TWD").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::TWD => "TWD",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
        }
    }

    /// Get the currency symbol (e.g., "NT$").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::TWD => "NT$",
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
            Currency::JPY => "\u{00a5}",
        }
    }

    /// Number of decimal places shown for this currency.
    ///
    /// The shop prices TWD in whole dollars.
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::TWD | Currency::JPY => 0,
            _ => 2,
        }
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_uppercase().as_str() {
            "TWD" => Some(Currency::TWD),
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            "GBP" => Some(Currency::GBP),
            "JPY" => Some(Currency::JPY),
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
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Exact amount in major units (e.g. dollars).
    pub amount: Decimal,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value.
    pub fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Parse a decimal string such as `"120"` or `"99.50"`.
    ///
    /// ```
    /// use shopfront_commerce::money::{Currency, Money};
    /// let price = Money::parse("49.99", Currency::USD).unwrap();
    /// assert_eq!(price.display(), "$49.99");
    /// ```
    pub fn parse(amount: &str, currency: Currency) -> Result<Self, CommerceError> {
        let amount = amount
            .trim()
            .parse::<Decimal>()
            .map_err(|_| CommerceError::InvalidAmount(amount.to_string()))?;
        Ok(Self::new(amount, currency))
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(Decimal::ZERO, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    /// Add another Money value, failing if currencies differ.
    pub fn try_add(&self, other: &Money) -> Result<Money, CommerceError> {
        if self.currency != other.currency {
            return Err(CommerceError::CurrencyMismatch {
                expected: self.currency.code().to_string(),
                got: other.currency.code().to_string(),
            });
        }
        let amount = self
            .amount
            .checked_add(other.amount)
            .ok_or(CommerceError::Overflow)?;
        Ok(Money::new(amount, self.currency))
    }

    /// Multiply by a quantity.
    pub fn try_multiply(&self, quantity: u32) -> Result<Money, CommerceError> {
        let amount = self
            .amount
            .checked_mul(Decimal::from(quantity))
            .ok_or(CommerceError::Overflow)?;
        Ok(Money::new(amount, self.currency))
    }

    /// Sum an iterator of Money values.
    pub fn try_sum<'a>(
        iter: impl IntoIterator<Item = &'a Money>,
        currency: Currency,
    ) -> Result<Money, CommerceError> {
        iter.into_iter()
            .try_fold(Money::zero(currency), |acc, m| acc.try_add(m))
    }

    /// Round to the currency's display precision (half away from zero).
    pub fn rounded(&self) -> Decimal {
        self.amount.round_dp_with_strategy(
            self.currency.decimal_places(),
            RoundingStrategy::MidpointAwayFromZero,
        )
    }

    /// Format as a display string (e.g., "NT$1,280").
    pub fn display(&self) -> String {
        let amount = self.display_amount();
        match amount.strip_prefix('-') {
            Some(rest) => format!("-{}{}", self.currency.symbol(), rest),
            None => format!("{}{}", self.currency.symbol(), amount),
        }
    }

    /// Format the amount with thousands separators and no symbol (e.g., "1,280").
    pub fn display_amount(&self) -> String {
        let places = self.currency.decimal_places() as usize;
        let fixed = format!("{:.places$}", self.rounded().abs());
        let (whole, fraction) = match fixed.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (fixed.as_str(), None),
        };

        let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
        for (i, ch) in whole.chars().enumerate() {
            if i > 0 && (whole.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        if let Some(fraction) = fraction {
            grouped.push('.');
            grouped.push_str(fraction);
        }

        if self.is_negative() && !self.rounded().is_zero() {
            format!("-{}", grouped)
        } else {
            grouped
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}
