//! Cents-based monetary values.
//!
//! Prices cross the wire as decimals and live here as integer cents;
//! the conversion happens exactly once, at the API boundary. All cart
//! arithmetic saturates rather than wrapping, so a pathological quantity
//! cannot flip a total negative.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Cents per major unit. Every supported currency uses two decimals.
const CENTS_PER_UNIT: i64 = 100;

/// Supported price currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    /// Brazilian real, the storefront default.
    #[default]
    BRL,
    USD,
    EUR,
}

impl Currency {
    /// ISO code, e.g. "BRL".
    pub fn code(&self) -> &'static str {
        match self {
            Currency::BRL => "BRL",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
        }
    }

    /// Display symbol prefixed to amounts, e.g. "R$".
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::BRL => "R$",
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
        }
    }

    /// Parse an ISO code, case-insensitively.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_ascii_uppercase().as_str() {
            "BRL" => Some(Currency::BRL),
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A monetary amount in integer cents, tagged with its currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    pub amount_cents: i64,
    pub currency: Currency,
}

impl Money {
    /// An amount given directly in cents.
    pub fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Convert a decimal amount (the backend's wire format) to cents,
    /// rounding to the nearest cent.
    ///
    /// ```
    /// use vitrine_commerce::money::{Currency, Money};
    /// assert_eq!(Money::from_decimal(49.99, Currency::BRL).amount_cents, 4999);
    /// ```
    pub fn from_decimal(amount: f64, currency: Currency) -> Self {
        Self::new((amount * CENTS_PER_UNIT as f64).round() as i64, currency)
    }

    /// Scale by a quantity, saturating at the representable bounds.
    pub fn multiply(&self, factor: i64) -> Money {
        Money::new(self.amount_cents.saturating_mul(factor), self.currency)
    }

    /// Sum amounts in `currency`, saturating on overflow.
    ///
    /// Lines in one cart all share the catalog's currency; the tag on
    /// each summand is not re-checked here.
    pub fn sum<'a>(amounts: impl Iterator<Item = &'a Money>, currency: Currency) -> Money {
        let cents = amounts.fold(0i64, |acc, m| acc.saturating_add(m.amount_cents));
        Money::new(cents, currency)
    }

    /// Symbol-prefixed display string, e.g. "R$49.99".
    pub fn display(&self) -> String {
        let sign = if self.amount_cents < 0 { "-" } else { "" };
        let cents = self.amount_cents.unsigned_abs();
        format!(
            "{}{}{}.{:02}",
            sign,
            self.currency.symbol(),
            cents / CENTS_PER_UNIT as u64,
            cents % CENTS_PER_UNIT as u64
        )
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}
