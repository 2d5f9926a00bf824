use super::currency::Currency;
use super::currency_converter;
use super::fx_errors::FxError;
use super::fx_model::RefreshOutcome;
use super::fx_traits::{CurrencyRepositoryTrait, FxServiceTrait};
use crate::constants::PIVOT_CURRENCY;
use crate::errors::{Error, Result};
use crate::events::{DomainEvent, DomainEventSink, NoOpDomainEventSink};
use crate::settings::EngineSettings;
use async_trait::async_trait;
use betterconvert_market_data::RateProvider;
use chrono::Utc;
use rust_decimal::Decimal;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Applies fetched rate tables to the stored currencies.
///
/// Refreshes are single-flight: while one is running, further triggers are
/// dropped and report [`RefreshOutcome::AlreadyInFlight`]. Conversion keeps
/// working on the stored rates the whole time.
#[derive(Clone)]
pub struct FxService {
    repository: Arc<dyn CurrencyRepositoryTrait>,
    provider: Arc<dyn RateProvider>,
    pivot_currency: String,
    refresh_guard: Arc<Mutex<()>>,
    event_sink: Arc<dyn DomainEventSink>,
}

impl FxService {
    pub fn new(
        repository: Arc<dyn CurrencyRepositoryTrait>,
        provider: Arc<dyn RateProvider>,
    ) -> Self {
        Self {
            repository,
            provider,
            pivot_currency: PIVOT_CURRENCY.to_string(),
            refresh_guard: Arc::new(Mutex::new(())),
            event_sink: Arc::new(NoOpDomainEventSink),
        }
    }

    /// Builds a service using the configured pivot currency.
    pub fn from_settings(
        repository: Arc<dyn CurrencyRepositoryTrait>,
        provider: Arc<dyn RateProvider>,
        settings: &EngineSettings,
    ) -> Self {
        Self::new(repository, provider).with_pivot_currency(&settings.pivot_currency)
    }

    /// Sets the pivot currency rates are fetched against.
    pub fn with_pivot_currency(mut self, pivot_currency: &str) -> Self {
        self.pivot_currency = pivot_currency.trim().to_ascii_uppercase();
        self
    }

    /// Sets the domain event sink for this service.
    pub fn with_event_sink(mut self, event_sink: Arc<dyn DomainEventSink>) -> Self {
        self.event_sink = event_sink;
        self
    }

    /// Fetches a table and writes it back currency by currency.
    ///
    /// A failed fetch touches nothing. A failed write stops the loop: the
    /// currencies saved before it keep their new rate, a `RatesUpdated` event
    /// names them, and the write error is returned.
    async fn apply_refresh(&self) -> Result<RefreshOutcome> {
        let table = match self.provider.fetch_rates(&self.pivot_currency).await {
            Ok(table) => table,
            Err(e) => {
                let err: Error = FxError::Fetch(e).into();
                if err.is_retryable() {
                    log::warn!(
                        "Rate fetch from {} failed, keeping existing rates until the next refresh: {}",
                        self.provider.id(),
                        err
                    );
                } else {
                    log::error!(
                        "Rate fetch from {} failed and will not succeed on retry: {}",
                        self.provider.id(),
                        err
                    );
                }
                return Err(err);
            }
        };

        let currencies = self.repository.load_all_currencies()?;
        let refreshed_at = Utc::now();
        let mut updated = Vec::new();
        let mut stale = Vec::new();

        for currency in currencies {
            let rate = if currency.code == self.pivot_currency {
                Decimal::ONE
            } else {
                match table.get(&currency.code) {
                    Some(rate) => rate,
                    None => {
                        stale.push(currency.code);
                        continue;
                    }
                }
            };

            if let Err(e) = self
                .repository
                .save_currency_rate(&currency.code, rate, refreshed_at)
                .await
            {
                log::error!(
                    "Failed to save rate for {} after {} updates: {}",
                    currency.code,
                    updated.len(),
                    e
                );
                // Rates already written stay written; observers still hear about them.
                if !updated.is_empty() {
                    self.event_sink.emit(DomainEvent::rates_updated(
                        self.pivot_currency.clone(),
                        updated,
                    ));
                }
                return Err(e);
            }
            updated.push(currency.code);
        }

        log::info!(
            "Applied {} rates from {} ({} stale)",
            updated.len(),
            self.provider.id(),
            stale.len()
        );
        if !stale.is_empty() {
            log::debug!("Stale currencies kept their previous rates: {:?}", stale);
        }

        self.event_sink.emit(DomainEvent::rates_updated(
            self.pivot_currency.clone(),
            updated.clone(),
        ));

        Ok(RefreshOutcome::Applied {
            updated,
            stale,
            refreshed_at,
        })
    }
}

#[async_trait]
impl FxServiceTrait for FxService {
    fn pivot_currency(&self) -> &str {
        &self.pivot_currency
    }

    fn is_refresh_in_flight(&self) -> bool {
        self.refresh_guard.try_lock().is_err()
    }

    fn get_currencies(&self) -> Result<Vec<Currency>> {
        self.repository.load_all_currencies()
    }

    fn convert_currency(&self, amount: Decimal, from_code: &str, to_code: &str) -> Result<Decimal> {
        let source = self
            .repository
            .get_currency(from_code)?
            .ok_or_else(|| FxError::CurrencyNotFound(from_code.to_string()))?;
        let target = self
            .repository
            .get_currency(to_code)?
            .ok_or_else(|| FxError::CurrencyNotFound(to_code.to_string()))?;

        Ok(currency_converter::convert(amount, &source, &target))
    }

    async fn update_rates(&self) -> Result<RefreshOutcome> {
        let _guard = match self.refresh_guard.try_lock() {
            Ok(guard) => guard,
            Err(_) => {
                log::debug!("Rate refresh already in flight, skipping trigger");
                return Ok(RefreshOutcome::AlreadyInFlight);
            }
        };

        self.apply_refresh().await
    }
}
