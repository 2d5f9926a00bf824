//! Engine configuration.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::constants::{
    DEFAULT_SOURCE_CURRENCY, DEFAULT_TARGET_CURRENCY, DISPLAY_DECIMAL_PRECISION, PIVOT_CURRENCY,
    RATE_DISPLAY_DECIMAL_PRECISION,
};
use crate::errors::{Error, Result};
use crate::fx::validate_currency_code;

pub const ENV_PIVOT_CURRENCY: &str = "BETTERCONVERT_PIVOT_CURRENCY";
pub const ENV_SOURCE_CURRENCY: &str = "BETTERCONVERT_SOURCE_CURRENCY";
pub const ENV_TARGET_CURRENCY: &str = "BETTERCONVERT_TARGET_CURRENCY";
pub const ENV_AMOUNT_FRACTION_DIGITS: &str = "BETTERCONVERT_AMOUNT_FRACTION_DIGITS";
pub const ENV_RATE_FRACTION_DIGITS: &str = "BETTERCONVERT_RATE_FRACTION_DIGITS";

/// Largest fraction digit count a `Decimal` can carry.
const MAX_FRACTION_DIGITS: u32 = 28;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineSettings {
    /// Currency every stored rate is relative to
    pub pivot_currency: String,
    /// Source currency selected when a session starts
    pub default_source_currency: String,
    /// Target currency selected when a session starts
    pub default_target_currency: String,
    /// Max fraction digits when displaying converted amounts
    pub amount_fraction_digits: u32,
    /// Max fraction digits when displaying the unit rate
    pub rate_fraction_digits: u32,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            pivot_currency: PIVOT_CURRENCY.to_string(),
            default_source_currency: DEFAULT_SOURCE_CURRENCY.to_string(),
            default_target_currency: DEFAULT_TARGET_CURRENCY.to_string(),
            amount_fraction_digits: DISPLAY_DECIMAL_PRECISION,
            rate_fraction_digits: RATE_DISPLAY_DECIMAL_PRECISION,
        }
    }
}

impl EngineSettings {
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()
    }

    /// Reads settings from `BETTERCONVERT_*` environment variables.
    ///
    /// Unset variables keep their default; unparsable ones are logged and ignored.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();

        if let Some(value) = lookup(ENV_PIVOT_CURRENCY) {
            settings.pivot_currency = value;
        }
        if let Some(value) = lookup(ENV_SOURCE_CURRENCY) {
            settings.default_source_currency = value;
        }
        if let Some(value) = lookup(ENV_TARGET_CURRENCY) {
            settings.default_target_currency = value;
        }
        if let Some(digits) = parse_or_warn(&lookup, ENV_AMOUNT_FRACTION_DIGITS) {
            settings.amount_fraction_digits = digits;
        }
        if let Some(digits) = parse_or_warn(&lookup, ENV_RATE_FRACTION_DIGITS) {
            settings.rate_fraction_digits = digits;
        }

        settings.validate()
    }

    /// Checks currency codes and fraction digit bounds, upper-casing codes in place.
    pub fn validate(mut self) -> Result<Self> {
        self.pivot_currency = validate_currency_code(&self.pivot_currency)?;
        self.default_source_currency = validate_currency_code(&self.default_source_currency)?;
        self.default_target_currency = validate_currency_code(&self.default_target_currency)?;

        for (key, digits) in [
            ("amountFractionDigits", self.amount_fraction_digits),
            ("rateFractionDigits", self.rate_fraction_digits),
        ] {
            if digits > MAX_FRACTION_DIGITS {
                return Err(Error::InvalidConfigValue(format!(
                    "{} must be at most {}, got {}",
                    key, MAX_FRACTION_DIGITS, digits
                )));
            }
        }
        Ok(self)
    }
}

fn parse_or_warn<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    let value = lookup(key)?;
    match value.trim().parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            log::warn!("Ignoring unparsable value '{}' for {}", value, key);
            None
        }
    }
}
