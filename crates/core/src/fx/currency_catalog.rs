use std::sync::Arc;

use super::currency::Currency;
use super::fx_traits::CurrencyRepositoryTrait;
use crate::errors::Result;

/// Read-side queries over the stored currencies, as used by currency pickers.
#[derive(Clone)]
pub struct CurrencyCatalog {
    repository: Arc<dyn CurrencyRepositoryTrait>,
}

impl CurrencyCatalog {
    pub fn new(repository: Arc<dyn CurrencyRepositoryTrait>) -> Self {
        Self { repository }
    }

    /// All currencies ordered by display name, then code.
    pub fn all_sorted_by_name(&self) -> Result<Vec<Currency>> {
        let mut currencies = self.repository.load_all_currencies()?;
        currencies.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.code.cmp(&b.code)));
        Ok(currencies)
    }

    /// All currencies in the user-arranged order: `order_index`, then code.
    pub fn all_sorted_by_order(&self) -> Result<Vec<Currency>> {
        let mut currencies = self.repository.load_all_currencies()?;
        currencies.sort_by(|a, b| a.display_order().cmp(&b.display_order()));
        Ok(currencies)
    }

    /// Case-insensitive substring match on name or code. A blank query matches everything.
    pub fn search(&self, query: &str) -> Result<Vec<Currency>> {
        let query = query.trim().to_lowercase();
        let currencies = self.all_sorted_by_name()?;
        if query.is_empty() {
            return Ok(currencies);
        }

        Ok(currencies
            .into_iter()
            .filter(|c| {
                c.name.to_lowercase().contains(&query) || c.code.to_lowercase().contains(&query)
            })
            .collect())
    }

    pub fn find(&self, code: &str) -> Result<Option<Currency>> {
        self.repository.get_currency(code)
    }

    pub fn favorites(&self) -> Result<Vec<Currency>> {
        Ok(self
            .all_sorted_by_name()?
            .into_iter()
            .filter(|c| c.is_favorite)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fx::InMemoryCurrencyRepository;

    fn catalog() -> (CurrencyCatalog, Arc<InMemoryCurrencyRepository>) {
        let repository = Arc::new(
            InMemoryCurrencyRepository::with_currencies(vec![
                Currency::new("USD", "United States Dollar", "$").unwrap(),
                Currency::new("EUR", "Euro", "€").unwrap(),
                Currency::new("JPY", "Japanese Yen", "¥").unwrap(),
                Currency::new("USDT", "Tether", "₮").unwrap(),
            ])
            .unwrap(),
        );
        (CurrencyCatalog::new(repository.clone()), repository)
    }

    fn codes(currencies: &[Currency]) -> Vec<&str> {
        currencies.iter().map(|c| c.code.as_str()).collect()
    }

    #[test]
    fn test_sorted_by_name() {
        let (catalog, _) = catalog();
        let all = catalog.all_sorted_by_name().unwrap();
        assert_eq!(codes(&all), vec!["EUR", "JPY", "USDT", "USD"]);
    }

    #[test]
    fn test_sorted_by_order() {
        let repository = InMemoryCurrencyRepository::new();
        for (code, order_index) in [("AUD", 2), ("BRL", 0), ("ZAR", 1), ("CAD", 1)] {
            let mut currency = Currency::new(code, code, "$").unwrap();
            currency.order_index = order_index;
            repository.insert(currency).unwrap();
        }
        let catalog = CurrencyCatalog::new(Arc::new(repository));

        let ordered = catalog.all_sorted_by_order().unwrap();
        assert_eq!(codes(&ordered), vec!["BRL", "CAD", "ZAR", "AUD"]);
    }

    #[test]
    fn test_search_matches_name_or_code() {
        let (catalog, _) = catalog();

        assert_eq!(codes(&catalog.search("usd").unwrap()), vec!["USDT", "USD"]);
        assert_eq!(codes(&catalog.search("yen").unwrap()), vec!["JPY"]);
        assert_eq!(catalog.search("  ").unwrap().len(), 4);
        assert!(catalog.search("peso").unwrap().is_empty());
    }

    #[test]
    fn test_favorites() {
        let (catalog, repository) = catalog();
        assert!(catalog.favorites().unwrap().is_empty());

        repository.set_favorite("JPY", true).unwrap();
        assert_eq!(codes(&catalog.favorites().unwrap()), vec!["JPY"]);
        assert!(catalog.find("jpy").unwrap().unwrap().is_favorite);
    }
}
