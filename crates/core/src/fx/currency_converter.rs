use rust_decimal::Decimal;

use super::currency::Currency;

/// Converts `amount` from `source` to `target` through the pivot currency.
///
/// `amount / source.rate * target.rate`. The same code on both sides returns
/// `amount` untouched without looking at rates. A missing rate on either side,
/// a non-positive source rate or an arithmetic overflow yields zero: the
/// caller shows "nothing to show yet" rather than an error.
pub fn convert(amount: Decimal, source: &Currency, target: &Currency) -> Decimal {
    if source.code == target.code {
        return amount;
    }

    let (Some(source_rate), Some(target_rate)) = (source.rate_to_pivot, target.rate_to_pivot)
    else {
        return Decimal::ZERO;
    };
    if source_rate <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    amount
        .checked_div(source_rate)
        .and_then(|in_pivot| in_pivot.checked_mul(target_rate))
        .unwrap_or(Decimal::ZERO)
}

/// Value of one unit of `source` expressed in `target`.
pub fn unit_rate(source: &Currency, target: &Currency) -> Decimal {
    convert(Decimal::ONE, source, target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rust_decimal_macros::dec;

    fn currency(code: &str, rate: Option<Decimal>) -> Currency {
        let currency = Currency::new(code, code, code).unwrap();
        match rate {
            Some(rate) => currency.with_rate(rate, Utc::now()),
            None => currency,
        }
    }

    #[test]
    fn test_same_currency_is_identity() {
        let eur = currency("EUR", None);
        assert_eq!(convert(dec!(100), &eur, &eur), dec!(100));

        let zero_rate = currency("EUR", Some(Decimal::ZERO));
        assert_eq!(convert(dec!(100), &zero_rate, &zero_rate), dec!(100));
    }

    #[test]
    fn test_conversion_transits_the_pivot() {
        let eur = currency("EUR", Some(dec!(0.9)));
        let gbp = currency("GBP", Some(dec!(0.76)));

        let result = convert(dec!(100), &eur, &gbp);
        let expected = dec!(100) / dec!(0.9) * dec!(0.76);
        assert_eq!(result, expected);
        assert_eq!(result.round_dp(6), dec!(84.444444));
    }

    #[test]
    fn test_conversion_to_and_from_pivot() {
        let usd = currency("USD", Some(Decimal::ONE));
        let jpy = currency("JPY", Some(dec!(150)));

        assert_eq!(convert(dec!(2), &usd, &jpy), dec!(300));
        assert_eq!(convert(dec!(300), &jpy, &usd), dec!(2));
    }

    #[test]
    fn test_missing_rates_yield_zero() {
        let eur = currency("EUR", Some(dec!(0.9)));
        let unknown = currency("XYZ", None);

        assert_eq!(convert(dec!(100), &unknown, &eur), Decimal::ZERO);
        assert_eq!(convert(dec!(100), &eur, &unknown), Decimal::ZERO);
    }

    #[test]
    fn test_zero_source_rate_yields_zero() {
        let broken = currency("EUR", Some(Decimal::ZERO));
        let gbp = currency("GBP", Some(dec!(0.76)));

        assert_eq!(convert(dec!(100), &broken, &gbp), Decimal::ZERO);
        // A zero target rate is a legitimate zero result.
        assert_eq!(convert(dec!(100), &gbp, &broken), Decimal::ZERO);
    }

    #[test]
    fn test_unit_rate() {
        let usd = currency("USD", Some(Decimal::ONE));
        let eur = currency("EUR", Some(dec!(0.8)));

        assert_eq!(unit_rate(&eur, &usd), dec!(1.25));
        assert_eq!(unit_rate(&usd, &usd), Decimal::ONE);
    }
}
