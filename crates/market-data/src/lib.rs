//! BetterConvert Market Data Crate
//!
//! The rate-fetch boundary of the conversion engine. Everything that talks to
//! (or pretends to talk to) an exchange-rate source lives here, so the engine
//! itself only ever sees a [`RateTable`] or a [`NetworkError`].
//!
//! # Overview
//!
//! - [`RateTable`] - currency code to rate-to-pivot mapping, exact decimals
//! - [`ExchangeRateResponse`] - wire model of the latest-rates endpoint
//! - [`RateProvider`] - async trait implemented by every rate source
//! - [`StaticRateProvider`] - in-memory provider for tests and offline use
//! - [`NetworkError`] - the only failures that cross this boundary
//!
//! ```text
//! +------------------+     +------------------+     +------------------+
//! |   RateProvider   | --> |    RateTable     | --> |  core::FxService |
//! +------------------+     +------------------+     +------------------+
//! ```

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::{NetworkError, RetryClass};
pub use models::{decode_rates, ExchangeRateResponse, RateTable};
pub use provider::{RateProvider, StaticRateProvider};
