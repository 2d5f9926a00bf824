use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::fx_errors::FxError;

/// Checks that `code` is 3-5 ASCII alphanumerics and returns it upper-cased.
///
/// Covers ISO-4217 codes (`EUR`) as well as crypto tickers (`USDT`).
pub fn validate_currency_code(code: &str) -> Result<String, FxError> {
    let trimmed = code.trim();
    let valid = (3..=5).contains(&trimmed.len())
        && trimmed.chars().all(|c| c.is_ascii_alphanumeric());
    if !valid {
        return Err(FxError::InvalidCurrencyCode(code.to_string()));
    }
    Ok(trimmed.to_ascii_uppercase())
}

/// A currency the user can convert from or to.
///
/// `rate_to_pivot` reads as `1 pivot = rate units of this currency` and stays
/// `None` until the first successful refresh. Only the refresh service
/// writes it; everything else here is presentation data.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Currency {
    pub code: String,
    pub name: String,
    pub symbol: String,
    pub flag_emoji: String,
    pub color_hex: String,
    pub is_favorite: bool,
    pub rate_to_pivot: Option<Decimal>,
    pub last_updated: Option<DateTime<Utc>>,
    pub order_index: i32,
}

impl Currency {
    pub fn new(code: &str, name: &str, symbol: &str) -> Result<Self, FxError> {
        Ok(Self {
            code: validate_currency_code(code)?,
            name: name.to_string(),
            symbol: symbol.to_string(),
            flag_emoji: String::new(),
            color_hex: String::new(),
            is_favorite: false,
            rate_to_pivot: None,
            last_updated: None,
            order_index: 0,
        })
    }

    pub fn with_appearance(mut self, flag_emoji: &str, color_hex: &str) -> Self {
        self.flag_emoji = flag_emoji.to_string();
        self.color_hex = color_hex.to_string();
        self
    }

    pub fn with_rate(mut self, rate: Decimal, timestamp: DateTime<Utc>) -> Self {
        self.rate_to_pivot = Some(rate);
        self.last_updated = Some(timestamp);
        self
    }

    /// Key for the user-arranged list order: `order_index`, then code.
    pub fn display_order(&self) -> (i32, &str) {
        (self.order_index, self.code.as_str())
    }

    /// True when the currency can be converted from: a rate exists and is positive.
    pub fn has_usable_rate(&self) -> bool {
        self.rate_to_pivot.is_some_and(|rate| rate > Decimal::ZERO)
    }

    /// Parses `color_hex` (`#RRGGBB` or `#RRGGBBAA`) into RGBA channels in `0.0..=1.0`.
    pub fn color_rgba(&self) -> Option<[f32; 4]> {
        let hex = self.color_hex.trim().trim_start_matches('#');
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let value = u32::from_str_radix(hex, 16).ok()?;
        let channel = |shift: u32| ((value >> shift) & 0xFF) as f32 / 255.0;

        match hex.len() {
            6 => Some([channel(16), channel(8), channel(0), 1.0]),
            8 => Some([channel(24), channel(16), channel(8), channel(0)]),
            _ => None,
        }
    }
}
