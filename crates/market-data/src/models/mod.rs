//! Rate data models
//!
//! - `rate_table` - currency code to rate-to-pivot mapping (RateTable)
//! - `exchange_rate_response` - latest-rates endpoint payload (ExchangeRateResponse)

mod exchange_rate_response;
mod rate_table;

pub use exchange_rate_response::{decode_rates, ExchangeRateResponse};
pub use rate_table::RateTable;
