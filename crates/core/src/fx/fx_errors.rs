use betterconvert_market_data::NetworkError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FxError {
    #[error("Invalid currency code: {0}")]
    InvalidCurrencyCode(String),

    #[error("Currency not found: {0}")]
    CurrencyNotFound(String),

    #[error("Duplicate currency: {0}")]
    DuplicateCurrency(String),

    #[error("Invalid exchange rate for {code}: {rate}")]
    InvalidRate { code: String, rate: String },

    #[error("Rate fetch failed: {0}")]
    Fetch(#[from] NetworkError),

    #[error("Save error: {0}")]
    SaveError(String),

    #[error("Cache error: {0}")]
    CacheError(String),
}
