use num_traits::FromPrimitive;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;
use std::str::FromStr;

use super::RateTable;
use crate::errors::NetworkError;

/// API response from the latest-rates endpoint.
///
/// `GET {base_url}/{api_key}/latest/{base_code}` answers with:
///
/// ```json
/// { "result": "success", "base_code": "USD", "conversion_rates": { "EUR": 0.9 } }
/// ```
#[derive(Debug, Deserialize)]
pub struct ExchangeRateResponse {
    /// `"success"` or `"error"`
    pub result: String,
    /// Base currency the rates are expressed against
    #[serde(default)]
    pub base_code: String,
    /// Error category when `result` is `"error"`
    #[serde(rename = "error-type", default)]
    pub error_type: Option<String>,
    /// 1 base_code = rate units of each currency
    #[serde(default)]
    pub conversion_rates: HashMap<String, f64>,
}

impl ExchangeRateResponse {
    /// Converts the payload into a [`RateTable`] relative to `expected_base`.
    ///
    /// Floats are converted through their shortest decimal rendering so that a
    /// wire value of `0.9` becomes exactly `0.9`, not its binary approximation.
    pub fn into_rate_table(self, expected_base: &str) -> Result<RateTable, NetworkError> {
        if self.result != "success" {
            return Err(NetworkError::InvalidResponse(
                self.error_type
                    .unwrap_or_else(|| format!("result was '{}'", self.result)),
            ));
        }

        if !self.base_code.eq_ignore_ascii_case(expected_base) {
            return Err(NetworkError::InvalidResponse(format!(
                "expected base {} but received {}",
                expected_base, self.base_code
            )));
        }

        let mut table = RateTable::new();
        for (code, value) in self.conversion_rates {
            let rate = decimal_from_f64(value).ok_or_else(|| {
                NetworkError::DecodingError(format!("rate for {} is not a decimal: {}", code, value))
            })?;
            table.insert(&code, rate);
        }
        Ok(table)
    }
}

fn decimal_from_f64(value: f64) -> Option<Decimal> {
    if !value.is_finite() {
        return None;
    }
    Decimal::from_str(&value.to_string())
        .ok()
        .or_else(|| Decimal::from_f64(value))
}

/// Decodes a raw latest-rates payload into a [`RateTable`].
pub fn decode_rates(body: &[u8], expected_base: &str) -> Result<RateTable, NetworkError> {
    let response: ExchangeRateResponse =
        serde_json::from_slice(body).map_err(|e| NetworkError::DecodingError(e.to_string()))?;
    response.into_rate_table(expected_base)
}
