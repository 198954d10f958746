use super::coin::Denomination;
use super::money::Money;
use super::product::Product;
use crate::error::{Result, VendingError};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// On-disk shape of a catalog file.
///
/// ```json
/// {
///   "products": [{ "name": "cola", "price": "1.00" }],
///   "coins": [{ "name": "quarter", "value": "0.25", "accepted": true }]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub products: Vec<Product>,
    pub coins: Vec<Denomination>,
}

/// Products for sale and the coins the slot knows about.
///
/// Built once at startup and only read afterwards. Lookups ignore case and
/// surrounding whitespace; listings keep the order the entries were given in.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    product_index: HashMap<String, usize>,
    coins: Vec<Denomination>,
    coin_index: HashMap<String, usize>,
}

fn lookup_key(name: &str) -> String {
    name.trim().to_lowercase()
}

impl Catalog {
    /// cola, chips and candy; nickel, dime and quarter credited, penny refused.
    pub fn standard() -> Self {
        let config = CatalogConfig {
            products: vec![
                Product::new("cola", Money::new(dec!(1.00))),
                Product::new("chips", Money::new(dec!(0.50))),
                Product::new("candy", Money::new(dec!(0.65))),
            ],
            coins: vec![
                Denomination::new("nickel", Money::new(dec!(0.05)), true),
                Denomination::new("dime", Money::new(dec!(0.10)), true),
                Denomination::new("quarter", Money::new(dec!(0.25)), true),
                Denomination::new("penny", Money::new(dec!(0.01)), false),
            ],
        };
        Self::index(config)
    }

    pub fn from_config(config: CatalogConfig) -> Result<Self> {
        validate(&config)?;
        Ok(Self::index(config))
    }

    /// Reads and validates a JSON catalog file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        let config: CatalogConfig = serde_json::from_reader(reader)?;
        Self::from_config(config)
    }

    fn index(config: CatalogConfig) -> Self {
        let product_index = config
            .products
            .iter()
            .enumerate()
            .map(|(i, p)| (lookup_key(&p.name), i))
            .collect();
        let coin_index = config
            .coins
            .iter()
            .enumerate()
            .map(|(i, c)| (lookup_key(&c.name), i))
            .collect();
        Self {
            products: config.products,
            product_index,
            coins: config.coins,
            coin_index,
        }
    }

    pub fn product(&self, name: &str) -> Option<&Product> {
        self.product_index
            .get(&lookup_key(name))
            .map(|&i| &self.products[i])
    }

    pub fn price_of(&self, name: &str) -> Option<Money> {
        self.product(name).map(|p| p.price)
    }

    /// Owned copies, so callers cannot reach into the catalog through them.
    pub fn all_products(&self) -> Vec<Product> {
        self.products.clone()
    }

    pub fn denomination(&self, name: &str) -> Option<&Denomination> {
        self.coin_index
            .get(&lookup_key(name))
            .map(|&i| &self.coins[i])
    }

    pub fn accepted_coins(&self) -> impl Iterator<Item = &Denomination> + '_ {
        self.coins.iter().filter(|c| c.accepted)
    }

    pub fn rejected_coins(&self) -> impl Iterator<Item = &Denomination> + '_ {
        self.coins.iter().filter(|c| !c.accepted)
    }
}

fn validate(config: &CatalogConfig) -> Result<()> {
    let invalid = |reason: String| Err(VendingError::InvalidCatalog(reason));

    if config.products.is_empty() {
        return invalid("at least one product is required".to_string());
    }
    if !config.coins.iter().any(|c| c.accepted) {
        return invalid("at least one accepted coin is required".to_string());
    }

    let mut seen = HashSet::new();
    for product in &config.products {
        let key = lookup_key(&product.name);
        if key.is_empty() {
            return invalid("product name must not be empty".to_string());
        }
        if !product.price.is_positive() {
            return invalid(format!("product '{}' must have a positive price", product.name));
        }
        if !product.price.is_whole_cents() {
            return invalid(format!(
                "product '{}' has a price finer than one cent",
                product.name
            ));
        }
        if !seen.insert(key) {
            return invalid(format!("product '{}' is listed twice", product.name));
        }
    }

    seen.clear();
    for coin in &config.coins {
        let key = lookup_key(&coin.name);
        if key.is_empty() {
            return invalid("coin name must not be empty".to_string());
        }
        if !coin.value.is_positive() {
            return invalid(format!("coin '{}' must have a positive value", coin.name));
        }
        if !coin.value.is_whole_cents() {
            return invalid(format!("coin '{}' has a value finer than one cent", coin.name));
        }
        if !seen.insert(key) {
            return invalid(format!("coin '{}' is listed twice", coin.name));
        }
    }

    Ok(())
}
