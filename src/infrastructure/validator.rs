use crate::domain::catalog::Catalog;
use crate::domain::coin::Coin;
use crate::domain::ports::CoinValidator;
use std::sync::Arc;

/// Checks inserted coins against the catalog's coin table.
#[derive(Debug, Clone)]
pub struct CatalogCoinValidator {
    catalog: Arc<Catalog>,
}

impl CatalogCoinValidator {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }
}

impl CoinValidator for CatalogCoinValidator {
    fn validate(&self, coin_name: &str) -> Coin {
        let name = coin_name.trim().to_lowercase();
        match self.catalog.denomination(&name) {
            Some(denomination) => Coin::from(denomination),
            None => Coin::unknown(name),
        }
    }
}
