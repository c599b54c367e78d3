//! Facet bounds derived from the full catalog.

use crate::catalog::Product;
use crate::error::CatalogError;
use serde::{Deserialize, Serialize};

/// Inclusive price range spanned by a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBounds {
    pub min: f64,
    pub max: f64,
}

impl PriceBounds {
    /// Create bounds from explicit values.
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Check if a price lies within the bounds (inclusive).
    pub fn contains(&self, price: f64) -> bool {
        self.min <= price && price <= self.max
    }

    /// Clamp a price into the bounds.
    ///
    /// NaN clamps to `min`.
    pub fn clamp(&self, price: f64) -> f64 {
        price.max(self.min).min(self.max)
    }

    /// Width of the range.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

/// Compute the min and max price over the full, unfiltered catalog.
///
/// NaN prices are skipped. Zero products is [`CatalogError::EmptyCatalog`];
/// products that all carry NaN prices is [`CatalogError::NoComparablePrices`].
pub fn price_bounds(products: &[Product]) -> Result<PriceBounds, CatalogError> {
    if products.is_empty() {
        tracing::warn!("price bounds requested over an empty catalog");
        return Err(CatalogError::EmptyCatalog);
    }

    let bounds = products
        .iter()
        .map(|p| p.price)
        .filter(|price| !price.is_nan())
        .fold(None, |acc: Option<PriceBounds>, price| {
            Some(match acc {
                None => PriceBounds::new(price, price),
                Some(b) => PriceBounds::new(b.min.min(price), b.max.max(price)),
            })
        });

    bounds.ok_or(CatalogError::NoComparablePrices(products.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, price: f64) -> Product {
        Product::new(id, id, "Дом", price, 4.0)
    }

    #[test]
    fn test_bounds_over_catalog() {
        let products = vec![product("a", 33.0), product("b", 340.0), product("c", 30.0)];
        let bounds = price_bounds(&products).unwrap();
        assert_eq!(bounds, PriceBounds::new(30.0, 340.0));
        assert_eq!(bounds.span(), 310.0);
    }

    #[test]
    fn test_single_product_bounds() {
        let bounds = price_bounds(&[product("a", 12.5)]).unwrap();
        assert_eq!(bounds.min, 12.5);
        assert_eq!(bounds.max, 12.5);
    }

    #[test]
    fn test_empty_catalog_is_an_error() {
        assert_eq!(price_bounds(&[]), Err(CatalogError::EmptyCatalog));
    }

    #[test]
    fn test_nan_prices_are_skipped() {
        let products = vec![product("a", f64::NAN), product("b", 10.0), product("c", 20.0)];
        assert_eq!(price_bounds(&products).unwrap(), PriceBounds::new(10.0, 20.0));

        let all_nan = vec![product("a", f64::NAN)];
        assert_eq!(
            price_bounds(&all_nan),
            Err(CatalogError::NoComparablePrices(1))
        );
    }

    #[test]
    fn test_clamp_and_contains() {
        let bounds = PriceBounds::new(30.0, 340.0);
        assert_eq!(bounds.clamp(10.0), 30.0);
        assert_eq!(bounds.clamp(500.0), 340.0);
        assert_eq!(bounds.clamp(33.0), 33.0);
        assert_eq!(bounds.clamp(f64::NAN), 30.0);
        assert!(bounds.contains(30.0));
        assert!(bounds.contains(340.0));
        assert!(!bounds.contains(340.5));
    }
}
