use super::currency::Currency;
use super::fx_model::RefreshOutcome;
use crate::errors::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Trait defining the contract for currency persistence.
///
/// The engine only reads the current table and writes rates back after a
/// refresh. Seeding and schema management belong to the implementation.
#[async_trait]
pub trait CurrencyRepositoryTrait: Send + Sync {
    fn load_all_currencies(&self) -> Result<Vec<Currency>>;
    fn get_currency(&self, code: &str) -> Result<Option<Currency>>;
    async fn save_currency_rate(
        &self,
        code: &str,
        rate: Decimal,
        timestamp: DateTime<Utc>,
    ) -> Result<()>;
}

/// Trait defining the contract for FX service operations.
#[async_trait]
pub trait FxServiceTrait: Send + Sync {
    fn pivot_currency(&self) -> &str;
    fn is_refresh_in_flight(&self) -> bool;
    fn get_currencies(&self) -> Result<Vec<Currency>>;
    fn convert_currency(&self, amount: Decimal, from_code: &str, to_code: &str) -> Result<Decimal>;
    async fn update_rates(&self) -> Result<RefreshOutcome>;
}
