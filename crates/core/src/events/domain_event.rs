//! Domain event types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Domain events emitted by the engine after state changes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DomainEvent {
    /// The edit buffer or the selected currencies changed and the derived
    /// values were recomputed.
    ConversionUpdated {
        buffer: String,
        /// `None` while the buffer does not evaluate
        calculated_value: Option<Decimal>,
        converted_amount: Decimal,
        source_code: Option<String>,
        target_code: Option<String>,
    },

    /// A rate refresh was applied to the stored currencies.
    RatesUpdated {
        pivot_currency: String,
        currency_codes: Vec<String>,
    },
}

impl DomainEvent {
    /// Creates a ConversionUpdated event.
    pub fn conversion_updated(
        buffer: String,
        calculated_value: Option<Decimal>,
        converted_amount: Decimal,
        source_code: Option<String>,
        target_code: Option<String>,
    ) -> Self {
        Self::ConversionUpdated {
            buffer,
            calculated_value,
            converted_amount,
            source_code,
            target_code,
        }
    }

    /// Creates a RatesUpdated event.
    pub fn rates_updated(pivot_currency: String, currency_codes: Vec<String>) -> Self {
        Self::RatesUpdated {
            pivot_currency,
            currency_codes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_events_serialize_with_type_tag() {
        let event = DomainEvent::rates_updated("USD".to_string(), vec!["EUR".to_string()]);
        let json = serde_json::to_value(&event).unwrap();

        assert_eq!(json["type"], "rates_updated");
        assert_eq!(json["pivot_currency"], "USD");
        assert_eq!(json["currency_codes"][0], "EUR");
    }

    #[test]
    fn test_conversion_updated_round_trips() {
        let event = DomainEvent::conversion_updated(
            "5+5".to_string(),
            Some(dec!(10)),
            dec!(0.5),
            Some("JPY".to_string()),
            Some("USD".to_string()),
        );
        let json = serde_json::to_string(&event).unwrap();
        let decoded: DomainEvent = serde_json::from_str(&json).unwrap();

        assert_eq!(decoded, event);
    }
}
