//! Display formatting for minor-unit amounts in the single configured currency.

use serde::{Deserialize, Serialize};

use crate::errors::{ForecastError, Result};

/// ISO 4217-style currency code.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(from = "String")]
pub struct CurrencyCode(pub String);

impl From<String> for CurrencyCode {
    fn from(code: String) -> Self {
        Self::new(code)
    }
}

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn format(&self) -> Result<&'static CurrencyFormat> {
        format_for(self.as_str()).ok_or_else(|| ForecastError::UnknownCurrency(self.0.clone()))
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::new("EUR")
    }
}

/// How amounts in a currency are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyFormat {
    pub code: &'static str,
    pub symbol: &'static str,
    pub decimal_places: u8,
    pub decimal_separator: char,
    pub thousands_separator: char,
}

pub const CURRENCY_FORMATS: &[CurrencyFormat] = &[
    CurrencyFormat {
        code: "EUR",
        symbol: "€",
        decimal_places: 2,
        decimal_separator: '.',
        thousands_separator: ',',
    },
    CurrencyFormat {
        code: "USD",
        symbol: "$",
        decimal_places: 2,
        decimal_separator: '.',
        thousands_separator: ',',
    },
    CurrencyFormat {
        code: "GBP",
        symbol: "£",
        decimal_places: 2,
        decimal_separator: '.',
        thousands_separator: ',',
    },
    CurrencyFormat {
        code: "JPY",
        symbol: "¥",
        decimal_places: 0,
        decimal_separator: '.',
        thousands_separator: ',',
    },
    CurrencyFormat {
        code: "CAD",
        symbol: "C$",
        decimal_places: 2,
        decimal_separator: '.',
        thousands_separator: ',',
    },
    CurrencyFormat {
        code: "AUD",
        symbol: "A$",
        decimal_places: 2,
        decimal_separator: '.',
        thousands_separator: ',',
    },
    CurrencyFormat {
        code: "BRL",
        symbol: "R$",
        decimal_places: 2,
        decimal_separator: ',',
        thousands_separator: '.',
    },
    CurrencyFormat {
        code: "TL",
        symbol: "₺",
        decimal_places: 2,
        decimal_separator: ',',
        thousands_separator: '.',
    },
];

pub fn format_for(code: &str) -> Option<&'static CurrencyFormat> {
    CURRENCY_FORMATS
        .iter()
        .find(|format| format.code.eq_ignore_ascii_case(code))
}

/// Renders `amount` minor units, e.g. `12345` in EUR as `€123.45`.
/// Negative values keep the symbol first: `€-100.50`.
pub fn format_minor_units(amount: i64, format: &CurrencyFormat) -> String {
    let magnitude = amount.unsigned_abs();
    let scale = 10u64.pow(format.decimal_places as u32);
    let whole = group_digits(&(magnitude / scale).to_string(), format.thousands_separator);

    let mut body = String::from(format.symbol);
    if amount < 0 {
        body.push('-');
    }
    body.push_str(&whole);
    if format.decimal_places > 0 {
        body.push(format.decimal_separator);
        body.push_str(&format!(
            "{:0width$}",
            magnitude % scale,
            width = format.decimal_places as usize
        ));
    }
    body
}

/// Parses user input such as `1,234.5` or `€12` into minor units.
pub fn parse_minor_units(text: &str, format: &CurrencyFormat) -> Result<i64> {
    let invalid = || ForecastError::InvalidAmount(text.to_string());

    let mut raw = text.trim();
    raw = raw.strip_prefix(format.symbol).unwrap_or(raw).trim_start();
    let negative = raw.starts_with('-');
    if negative {
        raw = &raw[1..];
    }
    let (grouped, fraction) = match raw.split_once(format.decimal_separator) {
        Some((whole, fraction)) => (whole, fraction),
        None => (raw, ""),
    };
    let whole = ungroup(grouped, format.thousands_separator).ok_or_else(invalid)?;
    let whole = whole.as_str();
    let places = format.decimal_places as usize;
    if whole.is_empty() && fraction.is_empty() {
        return Err(invalid());
    }
    if fraction.len() > places || !all_digits(whole) || !all_digits(fraction) {
        return Err(invalid());
    }

    let whole_value: i64 = if whole.is_empty() {
        0
    } else {
        whole.parse().map_err(|_| invalid())?
    };
    let fraction_value: i64 = if fraction.is_empty() {
        0
    } else {
        format!("{fraction:0<places$}").parse().map_err(|_| invalid())?
    };
    let scale = 10i64.pow(places as u32);
    let minor = whole_value
        .checked_mul(scale)
        .and_then(|value| value.checked_add(fraction_value))
        .ok_or_else(invalid)?;
    Ok(if negative { -minor } else { minor })
}

fn all_digits(part: &str) -> bool {
    part.chars().all(|ch| ch.is_ascii_digit())
}

/// Strips thousands separators, requiring full groups of three after the first.
fn ungroup(whole: &str, separator: char) -> Option<String> {
    if !whole.contains(separator) {
        return Some(whole.to_string());
    }
    let mut groups = whole.split(separator);
    let lead = groups.next()?;
    if lead.is_empty() || lead.len() > 3 {
        return None;
    }
    let mut digits = lead.to_string();
    for group in groups {
        if group.len() != 3 {
            return None;
        }
        digits.push_str(group);
    }
    Some(digits)
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::new();
    for (count, ch) in digits.chars().rev().enumerate() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, separator);
        }
        grouped.insert(0, ch);
    }
    grouped
}
