//! Rate provider trait definition.

use async_trait::async_trait;

use crate::errors::NetworkError;
use crate::models::RateTable;

/// Trait for exchange-rate sources.
///
/// Implement this trait to plug a new rate source into the refresh service.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use betterconvert_market_data::{NetworkError, RateProvider, RateTable};
///
/// struct MyProvider {
///     api_key: String,
/// }
///
/// #[async_trait]
/// impl RateProvider for MyProvider {
///     fn id(&self) -> &'static str {
///         "MY_PROVIDER"
///     }
///
///     async fn fetch_rates(&self, base_currency: &str) -> Result<RateTable, NetworkError> {
///         // ... call the remote API and decode with `decode_rates`
///     }
/// }
/// ```
#[async_trait]
pub trait RateProvider: Send + Sync {
    /// Unique identifier for this provider, used in logs.
    fn id(&self) -> &'static str;

    /// Fetch the latest rate table relative to `base_currency`.
    ///
    /// `1 base_currency = rate units` of every currency in the result.
    async fn fetch_rates(&self, base_currency: &str) -> Result<RateTable, NetworkError>;
}
