use async_trait::async_trait;
use std::sync::RwLock;

use crate::errors::NetworkError;
use crate::models::RateTable;
use crate::provider::RateProvider;

const PROVIDER_ID: &str = "STATIC";

/// Rate provider backed by an in-memory table.
///
/// The table is stored relative to `base` and rebased on demand when a
/// different base is requested. A failure can be armed with [`fail_with`]
/// to simulate an unreachable source.
///
/// [`fail_with`]: StaticRateProvider::fail_with
pub struct StaticRateProvider {
    base: String,
    table: RwLock<RateTable>,
    failure: RwLock<Option<NetworkError>>,
}

impl StaticRateProvider {
    pub fn new(base: &str, table: RateTable) -> Self {
        Self {
            base: base.trim().to_ascii_uppercase(),
            table: RwLock::new(table),
            failure: RwLock::new(None),
        }
    }

    /// Replaces the served table.
    pub fn set_table(&self, table: RateTable) {
        if let Ok(mut guard) = self.table.write() {
            *guard = table;
        }
    }

    /// Makes every subsequent fetch fail with `error` (or succeed again with `None`).
    pub fn fail_with(&self, error: Option<NetworkError>) {
        if let Ok(mut guard) = self.failure.write() {
            *guard = error;
        }
    }
}

#[async_trait]
impl RateProvider for StaticRateProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn fetch_rates(&self, base_currency: &str) -> Result<RateTable, NetworkError> {
        if let Some(error) = self
            .failure
            .read()
            .map_err(|e| NetworkError::InvalidResponse(e.to_string()))?
            .clone()
        {
            return Err(error);
        }

        let table = self
            .table
            .read()
            .map_err(|e| NetworkError::InvalidResponse(e.to_string()))?
            .clone();

        if base_currency.eq_ignore_ascii_case(&self.base) {
            return Ok(table);
        }

        table.rebase(base_currency).ok_or_else(|| {
            NetworkError::InvalidResponse(format!("no rate available for base {}", base_currency))
        })
    }
}
