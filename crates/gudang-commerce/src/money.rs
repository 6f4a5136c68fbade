//! Money type for representing catalog prices.
//!
//! Amounts are integers in the smallest unit of the currency. Rupiah has no
//! minor unit in practice, so an IDR amount of `80000` is eighty thousand rupiah.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    IDR,
    USD,
    EUR,
    SGD,
    MYR,
}

impl Currency {
    /// Get the currency code (e.g., "IDR").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::IDR => "IDR",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::SGD => "SGD",
            Currency::MYR => "MYR",
        }
    }

    /// Get the currency symbol (e.g., "Rp").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::IDR => "Rp",
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::SGD => "S$",
            Currency::MYR => "RM",
        }
    }

    /// Get the number of decimal places shown for this currency.
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::IDR => 0,
            _ => 2,
        }
    }

    /// Thousands and decimal separators used when formatting.
    fn separators(&self) -> (char, char) {
        match self {
            Currency::IDR | Currency::EUR => ('.', ','),
            _ => (',', '.'),
        }
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "IDR" => Some(Currency::IDR),
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            "SGD" => Some(Currency::SGD),
            "MYR" => Some(Currency::MYR),
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
    /// Amount in the smallest currency unit.
    pub amount: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from the smallest unit.
    pub fn new(amount: i64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Create a Money value from a decimal amount.
    ///
    /// ```
    /// use gudang_commerce::money::{Money, Currency};
    /// let price = Money::from_decimal(49.99, Currency::USD);
    /// assert_eq!(price.amount, 4999);
    /// ```
    pub fn from_decimal(amount: f64, currency: Currency) -> Self {
        let multiplier = 10_i64.pow(currency.decimal_places());
        Self::new((amount * multiplier as f64).round() as i64, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount == 0
    }

    /// Format as a display string (e.g., "Rp80.000", "$1,234.50").
    pub fn display(&self) -> String {
        format!("{}{}", self.currency.symbol(), self.display_amount())
    }

    /// Format the grouped amount without symbol (e.g., "80.000").
    pub fn display_amount(&self) -> String {
        let (thousands, decimal) = self.currency.separators();
        let places = self.currency.decimal_places();
        let divisor = 10_i64.pow(places);

        let abs = self.amount.unsigned_abs();
        let whole = abs / divisor as u64;
        let fraction = abs % divisor as u64;

        let digits = whole.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(thousands);
            }
            grouped.push(c);
        }

        let sign = if self.amount < 0 { "-" } else { "" };
        if places == 0 {
            format!("{}{}", sign, grouped)
        } else {
            format!(
                "{}{}{}{:0width$}",
                sign,
                grouped,
                decimal,
                fraction,
                width = places as usize
            )
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rupiah_display_groups_thousands_with_dots() {
        assert_eq!(Money::new(80000, Currency::IDR).display(), "Rp80.000");
        assert_eq!(Money::new(100000, Currency::IDR).display(), "Rp100.000");
        assert_eq!(Money::new(1250000, Currency::IDR).display(), "Rp1.250.000");
        assert_eq!(Money::new(950, Currency::IDR).display(), "Rp950");
    }

    #[test]
    fn test_dollar_display_uses_cents() {
        assert_eq!(Money::new(4999, Currency::USD).display(), "$49.99");
        assert_eq!(Money::new(123405, Currency::USD).display(), "$1,234.05");
    }

    #[test]
    fn test_negative_amount_display() {
        assert_eq!(Money::new(-5000, Currency::IDR).display(), "Rp-5.000");
    }

    #[test]
    fn test_money_from_decimal() {
        assert_eq!(Money::from_decimal(49.99, Currency::USD).amount, 4999);
        assert_eq!(Money::from_decimal(79999.6, Currency::IDR).amount, 80000);
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("idr"), Some(Currency::IDR));
        assert_eq!(Currency::from_code("USD"), Some(Currency::USD));
        assert_eq!(Currency::from_code("XYZ"), None);
    }
}
