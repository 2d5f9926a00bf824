//! Display formatting for amounts and rates.
//!
//! The engine hands out raw decimals; this is the boundary that turns them
//! into grouped, rounded, locale-flavoured strings.

use rust_decimal::{Decimal, RoundingStrategy};

/// Separators used when rendering numbers for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormat {
    /// Thousands separator, `None` disables grouping
    pub grouping_separator: Option<char>,
    pub decimal_separator: char,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            grouping_separator: Some(','),
            decimal_separator: '.',
        }
    }
}

impl NumberFormat {
    pub fn new(grouping_separator: Option<char>, decimal_separator: char) -> Self {
        Self {
            grouping_separator,
            decimal_separator,
        }
    }

    /// Picks separators for a BCP-47 style locale tag (`"de-DE"`, `"fr_FR"`, `"en"`).
    ///
    /// Only the language subtag is considered. Unknown languages use `1,234.5`.
    pub fn for_locale(tag: &str) -> Self {
        let language = tag
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        match language.as_str() {
            "de" | "es" | "it" | "nl" | "pt" | "id" | "tr" | "da" => Self::new(Some('.'), ','),
            "fr" | "sv" | "nb" | "no" | "cs" | "pl" | "ru" | "fi" | "hu" => {
                Self::new(Some('\u{a0}'), ',')
            }
            _ => Self::default(),
        }
    }
}

/// Formats `value` with at most `max_fraction_digits` fraction digits.
///
/// Rounds half away from zero, drops trailing fraction zeros and groups the
/// integer part by thousands.
pub fn format_decimal(value: Decimal, max_fraction_digits: u32, format: &NumberFormat) -> String {
    let rounded = value
        .round_dp_with_strategy(max_fraction_digits, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    let negative = rounded.is_sign_negative() && !rounded.is_zero();

    let digits = rounded.abs().to_string();
    let (integer, fraction) = match digits.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (digits.as_str(), None),
    };

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 2);
    if negative {
        out.push('-');
    }
    for (i, c) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            if let Some(separator) = format.grouping_separator {
                out.push(separator);
            }
        }
        out.push(c);
    }
    if let Some(fraction) = fraction {
        out.push(format.decimal_separator);
        out.push_str(fraction);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_grouping_and_rounding() {
        let format = NumberFormat::default();
        assert_eq!(format_decimal(dec!(1234567.891), 2, &format), "1,234,567.89");
        assert_eq!(format_decimal(dec!(84.4444444), 2, &format), "84.44");
        assert_eq!(format_decimal(dec!(0.125), 2, &format), "0.13");
        assert_eq!(format_decimal(dec!(999.999), 2, &format), "1,000");
    }

    #[test]
    fn test_trailing_zeros_are_dropped() {
        let format = NumberFormat::default();
        assert_eq!(format_decimal(dec!(100.00), 2, &format), "100");
        assert_eq!(format_decimal(dec!(2.50), 5, &format), "2.5");
        assert_eq!(format_decimal(Decimal::ZERO, 2, &format), "0");
    }

    #[test]
    fn test_negative_values() {
        let format = NumberFormat::default();
        assert_eq!(format_decimal(dec!(-1234.5), 2, &format), "-1,234.5");
        assert_eq!(format_decimal(dec!(-0.001), 2, &format), "0");
    }

    #[test]
    fn test_locales() {
        assert_eq!(
            format_decimal(dec!(1234.5), 2, &NumberFormat::for_locale("de-DE")),
            "1.234,5"
        );
        assert_eq!(
            format_decimal(dec!(1234.5), 2, &NumberFormat::for_locale("fr_FR")),
            "1\u{a0}234,5"
        );
        assert_eq!(
            format_decimal(dec!(1234.5), 2, &NumberFormat::for_locale("ja-JP")),
            "1,234.5"
        );
    }

    #[test]
    fn test_grouping_disabled() {
        let format = NumberFormat::new(None, '.');
        assert_eq!(format_decimal(dec!(1234567), 0, &format), "1234567");
    }
}
