//! FX (Foreign Exchange) module - currencies, conversion and rate refresh.
//!
//! ```text
//! RateProvider (market-data) → FxService::update_rates → CurrencyRepositoryTrait
//!                                                              ↓
//!                      InputController → currency_converter::convert(Currency, Currency)
//! ```
//!
//! Rates are stored relative to a single pivot currency. Every conversion
//! between two non-pivot currencies transits the pivot.

pub mod currency;
pub mod currency_catalog;
pub mod currency_converter;
mod fx_errors;
mod fx_model;
mod fx_service;
mod fx_traits;
pub mod memory_repository;


pub use currency::{validate_currency_code, Currency};
pub use currency_catalog::CurrencyCatalog;
pub use currency_converter::{convert, unit_rate};
pub use fx_errors::FxError;
pub use fx_model::RefreshOutcome;
pub use fx_service::FxService;
pub use fx_traits::{CurrencyRepositoryTrait, FxServiceTrait};
pub use memory_repository::InMemoryCurrencyRepository;
