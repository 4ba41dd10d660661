//! @acp:module "Numeric Parsing"
//! @acp:summary "Amount parsing with thousands separators and magnitude words"
//! @acp:domain generator
//! @acp:layer logic

use super::params::ParamValue;

/// Magnitude word attached to an amount ("2 million", "500k")
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Magnitude {
    Thousand,
    Million,
}

impl Magnitude {
    /// Parse a unit word, case-insensitively
    pub fn from_unit(unit: &str) -> Option<Self> {
        match unit.to_lowercase().as_str() {
            "thousand" | "k" => Some(Magnitude::Thousand),
            "million" | "m" => Some(Magnitude::Million),
            _ => None,
        }
    }

    pub fn factor(&self) -> u64 {
        match self {
            Magnitude::Thousand => 1_000,
            Magnitude::Million => 1_000_000,
        }
    }
}

/// Parse an amount like `1,500,000` or `2.5` and multiply it by `factor`.
///
/// Returns `None` when the text is not a number or the result does not fit,
/// so callers fall back to their default.
pub fn parse_scaled(text: &str, factor: u64) -> Option<ParamValue> {
    let digits: String = text.chars().filter(|c| *c != ',').collect();

    match digits.split_once('.') {
        Some((whole, fraction)) => shift_decimal(whole, fraction, decimal_places(factor)?),
        None => digits
            .parse::<u64>()
            .ok()?
            .checked_mul(factor)
            .map(ParamValue::Integer),
    }
}

/// Multiply `whole.fraction` by `10^places` by moving the decimal point in the
/// text, so scaled amounts never pick up binary rounding noise.
fn shift_decimal(whole: &str, fraction: &str, places: usize) -> Option<ParamValue> {
    if whole.is_empty() || !whole.chars().chain(fraction.chars()).all(|c| c.is_ascii_digit()) {
        return None;
    }

    let split = places.min(fraction.len());
    let (moved, remainder) = fraction.split_at(split);
    let padding = "0".repeat(places - split);
    let integral: u64 = format!("{}{}{}", whole, moved, padding).parse().ok()?;

    let remainder = remainder.trim_end_matches('0');
    if remainder.is_empty() {
        Some(ParamValue::Integer(integral))
    } else {
        let value: f64 = format!("{}.{}", integral, remainder).parse().ok()?;
        value.is_finite().then_some(ParamValue::Decimal(value))
    }
}

/// Number of decimal places a power-of-ten factor shifts by
fn decimal_places(factor: u64) -> Option<usize> {
    let mut remaining = factor;
    let mut places = 0;
    while remaining > 1 {
        if remaining % 10 != 0 {
            return None;
        }
        remaining /= 10;
        places += 1;
    }
    (remaining == 1).then_some(places)
}

/// Parse a whole number, tolerating thousands separators
pub fn parse_integer(text: &str) -> Option<u64> {
    let digits: String = text.chars().filter(|c| *c != ',').collect();
    digits.parse().ok()
}

/// Parse a decimal amount such as a mint price
pub fn parse_decimal(text: &str) -> Option<ParamValue> {
    parse_scaled(text, 1)
}
