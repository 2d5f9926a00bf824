//! In-memory currency store.
//!
//! Implements [`CurrencyRepositoryTrait`] over a `BTreeMap` keyed by code, which
//! keeps the one-currency-per-code invariant structural. Used by tests and by
//! hosts that keep their own persistence outside the engine.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::sync::RwLock;

use super::currency::{validate_currency_code, Currency};
use super::fx_errors::FxError;
use super::fx_traits::CurrencyRepositoryTrait;
use crate::errors::Result;

#[derive(Default)]
pub struct InMemoryCurrencyRepository {
    currencies: RwLock<BTreeMap<String, Currency>>,
}

impl InMemoryCurrencyRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from `currencies`, rejecting duplicate codes.
    pub fn with_currencies(currencies: Vec<Currency>) -> Result<Self> {
        let repository = Self::new();
        for currency in currencies {
            repository.insert(currency)?;
        }
        Ok(repository)
    }

    pub fn insert(&self, currency: Currency) -> Result<()> {
        let mut currencies = self
            .currencies
            .write()
            .map_err(|e| FxError::CacheError(e.to_string()))?;
        if currencies.contains_key(&currency.code) {
            return Err(FxError::DuplicateCurrency(currency.code).into());
        }
        currencies.insert(currency.code.clone(), currency);
        Ok(())
    }

    /// Flags or unflags a currency as favorite.
    pub fn set_favorite(&self, code: &str, is_favorite: bool) -> Result<()> {
        let code = validate_currency_code(code)?;
        let mut currencies = self
            .currencies
            .write()
            .map_err(|e| FxError::CacheError(e.to_string()))?;
        let currency = currencies
            .get_mut(&code)
            .ok_or(FxError::CurrencyNotFound(code))?;
        currency.is_favorite = is_favorite;
        Ok(())
    }
}

#[async_trait]
impl CurrencyRepositoryTrait for InMemoryCurrencyRepository {
    fn load_all_currencies(&self) -> Result<Vec<Currency>> {
        let currencies = self
            .currencies
            .read()
            .map_err(|e| FxError::CacheError(e.to_string()))?;
        Ok(currencies.values().cloned().collect())
    }

    fn get_currency(&self, code: &str) -> Result<Option<Currency>> {
        let code = validate_currency_code(code)?;
        let currencies = self
            .currencies
            .read()
            .map_err(|e| FxError::CacheError(e.to_string()))?;
        Ok(currencies.get(&code).cloned())
    }

    async fn save_currency_rate(
        &self,
        code: &str,
        rate: Decimal,
        timestamp: DateTime<Utc>,
    ) -> Result<()> {
        if rate.is_sign_negative() && !rate.is_zero() {
            return Err(FxError::InvalidRate {
                code: code.to_string(),
                rate: rate.to_string(),
            }
            .into());
        }

        let code = validate_currency_code(code)?;
        let mut currencies = self
            .currencies
            .write()
            .map_err(|e| FxError::CacheError(e.to_string()))?;
        let currency = currencies
            .get_mut(&code)
            .ok_or_else(|| FxError::SaveError(format!("unknown currency {}", code)))?;
        currency.rate_to_pivot = Some(rate);
        currency.last_updated = Some(timestamp);
        Ok(())
    }
}
