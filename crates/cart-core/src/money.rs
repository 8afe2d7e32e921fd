//! Currencies and price formatting.
//!
//! Prices arrive as floating-point currency units. Formatting rounds them to
//! the currency's minor unit once, at display time, and renders them with the
//! currency's symbol and separators.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    BRL,
    USD,
    EUR,
    GBP,
    JPY,
}

impl Currency {
    /// Get the currency code (e.g., "BRL").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::BRL => "BRL",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
        }
    }

    /// Get the currency symbol (e.g., "R$").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::BRL => "R$",
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
            Currency::JPY => "\u{00a5}",
        }
    }

    /// Get the number of decimal places for this currency.
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::JPY => 0,
            _ => 2,
        }
    }

    /// Separator between the symbol and the digits.
    fn symbol_spacing(&self) -> &'static str {
        match self {
            Currency::BRL | Currency::EUR => "\u{a0}",
            _ => "",
        }
    }

    /// Thousands and decimal separators, in that order.
    fn separators(&self) -> (char, char) {
        match self {
            Currency::BRL | Currency::EUR => ('.', ','),
            _ => (',', '.'),
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Turns numeric prices into display strings for one currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PriceFormatter {
    currency: Currency,
}

impl PriceFormatter {
    /// Create a formatter for the given currency.
    pub fn new(currency: Currency) -> Self {
        Self { currency }
    }

    /// The currency this formatter renders.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Format a price given in currency units (e.g., `25.0` -> `"R$ 25,00"`).
    ///
    /// Rounding works on the shortest decimal form of the value (what
    /// `f64`'s `Display` prints), half away from zero, so `1.005` shows as
    /// `1,01`. Negative values keep their sign even when they round to zero.
    /// Non-finite values format as zero.
    pub fn format(&self, value: f64) -> String {
        let value = if value.is_finite() { value } else { 0.0 };
        let places = self.currency.decimal_places() as usize;
        let (whole, fraction) = round_decimal(&value.abs().to_string(), places);
        let (thousands, decimal) = self.currency.separators();

        let mut out = String::new();
        if value.is_sign_negative() {
            out.push('-');
        }
        out.push_str(self.currency.symbol());
        out.push_str(self.currency.symbol_spacing());
        out.push_str(&group_thousands(&whole, thousands));
        if places > 0 {
            out.push(decimal);
            out.push_str(&fraction);
        }
        out
    }
}

/// Round a plain non-negative decimal string (`"1.005"`) to `places`
/// fraction digits, half away from zero. Returns the whole and fraction digits.
fn round_decimal(repr: &str, places: usize) -> (String, String) {
    let (whole, fraction) = repr.split_once('.').unwrap_or((repr, ""));
    let mut digits: Vec<u8> = whole
        .bytes()
        .chain(fraction.bytes().chain(std::iter::repeat(b'0')).take(places))
        .map(|b| b - b'0')
        .collect();

    if fraction.as_bytes().get(places).is_some_and(|&d| d >= b'5') {
        let mut i = digits.len();
        loop {
            if i == 0 {
                digits.insert(0, 1);
                break;
            }
            i -= 1;
            if digits[i] == 9 {
                digits[i] = 0;
            } else {
                digits[i] += 1;
                break;
            }
        }
    }

    let split = digits.len() - places;
    let text = |ds: &[u8]| ds.iter().map(|d| char::from(b'0' + d)).collect::<String>();
    (text(&digits[..split]), text(&digits[split..]))
}

fn group_thousands(digits: &str, separator: char) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}

/// Format a price in the storefront's default currency (BRL).
///
/// ```
/// use cart_core::money::format_price;
/// assert_eq!(format_price(1234.5), "R$\u{a0}1.234,50");
/// ```
pub fn format_price(value: f64) -> String {
    PriceFormatter::default().format(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price_brl() {
        assert_eq!(format_price(25.0), "R$\u{a0}25,00");
        assert_eq!(format_price(0.0), "R$\u{a0}0,00");
        assert_eq!(format_price(179.9), "R$\u{a0}179,90");
    }

    #[test]
    fn test_format_price_groups_thousands() {
        assert_eq!(format_price(1234.5), "R$\u{a0}1.234,50");
        assert_eq!(format_price(1_000_000.0), "R$\u{a0}1.000.000,00");
        assert_eq!(format_price(999.999), "R$\u{a0}1.000,00");
    }

    #[test]
    fn test_format_price_rounds_half_cents_up() {
        assert_eq!(format_price(1.005), "R$\u{a0}1,01");
        assert_eq!(format_price(1.255), "R$\u{a0}1,26");
        assert_eq!(format_price(0.015), "R$\u{a0}0,02");
        assert_eq!(format_price(2.675), "R$\u{a0}2,68");
        assert_eq!(format_price(8.345), "R$\u{a0}8,35");
        assert_eq!(format_price(1.004), "R$\u{a0}1,00");
        assert_eq!(format_price(0.1 + 0.2), "R$\u{a0}0,30");
    }

    #[test]
    fn test_format_price_negative() {
        assert_eq!(format_price(-5.0), "-R$\u{a0}5,00");
        assert_eq!(format_price(-1.005), "-R$\u{a0}1,01");
        assert_eq!(format_price(-0.001), "-R$\u{a0}0,00");
    }

    #[test]
    fn test_format_price_non_finite() {
        assert_eq!(format_price(f64::NAN), "R$\u{a0}0,00");
        assert_eq!(format_price(f64::INFINITY), "R$\u{a0}0,00");
    }

    #[test]
    fn test_formatter_other_currencies() {
        assert_eq!(PriceFormatter::new(Currency::USD).format(1234.5), "$1,234.50");
        assert_eq!(PriceFormatter::new(Currency::JPY).format(1500.4), "\u{00a5}1,500");
        assert_eq!(PriceFormatter::new(Currency::JPY).format(999.5), "\u{00a5}1,000");
        assert_eq!(PriceFormatter::new(Currency::EUR).format(9.99), "\u{20ac}\u{a0}9,99");
    }

    #[test]
    fn test_round_decimal() {
        assert_eq!(round_decimal("9.995", 2), ("10".to_string(), "00".to_string()));
        assert_eq!(round_decimal("12", 2), ("12".to_string(), "00".to_string()));
        assert_eq!(round_decimal("0.5", 0), ("1".to_string(), String::new()));
    }

    #[test]
    fn test_currency_deserializes_from_code() {
        let currency: Currency = serde_json::from_str("\"USD\"").unwrap();
        assert_eq!(currency, Currency::USD);
        assert!(serde_json::from_str::<Currency>("\"XYZ\"").is_err());
    }
}
