//! Result ordering.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Sort options for query results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Highest rated first.
    #[default]
    Popularity,
    /// Sort by price, low to high.
    PriceAsc,
    /// Sort by price, high to low.
    PriceDesc,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::Popularity, SortKey::PriceAsc, SortKey::PriceDesc];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Popularity => "popularity",
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "popularity" => Some(SortKey::Popularity),
            "price-asc" | "price_asc" => Some(SortKey::PriceAsc),
            "price-desc" | "price_desc" => Some(SortKey::PriceDesc),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortKey::Popularity => "Popularity",
            SortKey::PriceAsc => "Price: Low to High",
            SortKey::PriceDesc => "Price: High to Low",
        }
    }

    fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortKey::Popularity => compare_keys(a.rating, b.rating, true),
            SortKey::PriceAsc => compare_keys(a.price, b.price, false),
            SortKey::PriceDesc => compare_keys(a.price, b.price, true),
        }
    }
}

/// Order two numeric keys, placing NaN after every number in either direction.
fn compare_keys(a: f64, b: f64, descending: bool) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => {
            let ord = a.partial_cmp(&b).unwrap_or(Ordering::Equal);
            if descending {
                ord.reverse()
            } else {
                ord
            }
        }
    }
}

/// Sort products in place by `key`.
///
/// The sort is stable: products with equal keys keep their relative input
/// order. There is no secondary key.
pub fn sort_products(products: &mut [&Product], key: SortKey) {
    products.sort_by(|a, b| key.compare(a, b));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, price: f64, rating: f64) -> Product {
        Product::new(id, id, "Дом", price, rating)
    }

    fn ids(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.id.to_string()).collect()
    }

    #[test]
    fn test_popularity_is_rating_descending() {
        let catalog = vec![product("a", 33.0, 4.7), product("b", 340.0, 4.8), product("c", 30.0, 4.6)];
        let mut refs: Vec<&Product> = catalog.iter().collect();
        sort_products(&mut refs, SortKey::Popularity);
        assert_eq!(ids(&refs), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_price_directions() {
        let catalog = vec![product("a", 33.0, 4.7), product("b", 340.0, 4.8), product("c", 30.0, 4.6)];

        let mut refs: Vec<&Product> = catalog.iter().collect();
        sort_products(&mut refs, SortKey::PriceAsc);
        assert_eq!(ids(&refs), vec!["c", "a", "b"]);

        sort_products(&mut refs, SortKey::PriceDesc);
        assert_eq!(ids(&refs), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let catalog = vec![
            product("first", 10.0, 4.0),
            product("second", 20.0, 5.0),
            product("third", 10.0, 4.0),
            product("fourth", 10.0, 4.0),
        ];

        let mut refs: Vec<&Product> = catalog.iter().collect();
        sort_products(&mut refs, SortKey::PriceDesc);
        assert_eq!(ids(&refs), vec!["second", "first", "third", "fourth"]);

        let mut refs: Vec<&Product> = catalog.iter().collect();
        sort_products(&mut refs, SortKey::Popularity);
        assert_eq!(ids(&refs), vec!["second", "first", "third", "fourth"]);
    }

    #[test]
    fn test_nan_sorts_last() {
        let catalog = vec![product("nan", 10.0, f64::NAN), product("low", 10.0, 1.0), product("high", 10.0, 5.0)];
        let mut refs: Vec<&Product> = catalog.iter().collect();
        sort_products(&mut refs, SortKey::Popularity);
        assert_eq!(ids(&refs), vec!["high", "low", "nan"]);
    }

    #[test]
    fn test_sort_key_names() {
        for key in SortKey::ALL {
            assert_eq!(SortKey::from_str(key.as_str()), Some(key));
        }
        assert_eq!(SortKey::from_str("PRICE_ASC"), Some(SortKey::PriceAsc));
        assert_eq!(SortKey::from_str("newest"), None);
        assert_eq!(
            serde_json::to_string(&SortKey::PriceDesc).unwrap(),
            "\"price-desc\""
        );
    }
}
