use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Mapping from currency code to its rate relative to a pivot currency.
///
/// `1 pivot = rate units of currency`. Codes are stored upper-cased and rates
/// are never negative; a zero rate is kept because it is meaningful to the
/// converter (it disables conversion for that currency).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RateTable {
    rates: HashMap<String, Decimal>,
}

fn normalize_code(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}

impl RateTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from `(code, rate)` pairs, dropping negative rates.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, Decimal)>,
        S: AsRef<str>,
    {
        let mut table = Self::new();
        for (code, rate) in pairs {
            table.insert(code.as_ref(), rate);
        }
        table
    }

    /// Inserts or replaces the rate for `code`.
    ///
    /// Returns `false` (and leaves the table untouched) when the rate is negative.
    pub fn insert(&mut self, code: &str, rate: Decimal) -> bool {
        if rate.is_sign_negative() && !rate.is_zero() {
            log::warn!("Rejecting negative rate {} for {}", rate, code);
            return false;
        }
        self.rates.insert(normalize_code(code), rate);
        true
    }

    pub fn get(&self, code: &str) -> Option<Decimal> {
        self.rates.get(&normalize_code(code)).copied()
    }

    pub fn contains(&self, code: &str) -> bool {
        self.rates.contains_key(&normalize_code(code))
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Decimal)> {
        self.rates.iter().map(|(code, rate)| (code.as_str(), *rate))
    }

    /// All codes in the table, sorted.
    pub fn codes(&self) -> Vec<String> {
        let mut codes: Vec<String> = self.rates.keys().cloned().collect();
        codes.sort();
        codes
    }

    /// Re-expresses every rate relative to `new_base`.
    ///
    /// Returns `None` when `new_base` has no usable (positive) rate in this table.
    /// The new base always ends up with a rate of exactly one.
    pub fn rebase(&self, new_base: &str) -> Option<RateTable> {
        let base_rate = self.get(new_base).filter(|rate| *rate > Decimal::ZERO)?;
        let mut rebased = RateTable::new();
        for (code, rate) in self.iter() {
            let value = rate.checked_div(base_rate)?;
            rebased.insert(code, value);
        }
        rebased.insert(new_base, Decimal::ONE);
        Some(rebased)
    }
}
