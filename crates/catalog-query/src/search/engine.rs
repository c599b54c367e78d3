//! Query orchestration.

use crate::catalog::{PriceBounds, Product};
use crate::search::{sort_products, ConstraintSet, Filter};
use serde::Serialize;

/// Filter and sort `products` under `constraints`.
///
/// Stages run in a fixed order: category (path, else flat), text, price,
/// rating, then a stable sort. Each stage narrows the working list left by the
/// previous one. Pass-through stages leave it untouched, and an empty catalog
/// yields an empty result.
pub fn query<'a>(products: &'a [Product], constraints: &ConstraintSet) -> Vec<&'a Product> {
    let mut working: Vec<&Product> = products.iter().collect();

    for stage in Filter::pipeline(constraints) {
        let before = working.len();
        working.retain(|product| stage.matches(product));
        tracing::trace!(
            stage = stage.name(),
            before,
            after = working.len(),
            "applied filter stage"
        );
    }

    sort_products(&mut working, constraints.sort_key);

    tracing::debug!(
        catalog = products.len(),
        matched = working.len(),
        sort = constraints.sort_key.as_str(),
        "catalog query"
    );
    working
}

/// Ordered query output together with the catalog's facet bounds.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResults<'a> {
    /// Matching products in result order.
    pub products: Vec<&'a Product>,
    /// Price bounds of the full catalog; `None` when it has no comparable price.
    pub price_bounds: Option<PriceBounds>,
    /// Number of products in the unfiltered catalog.
    pub catalog_size: usize,
}

impl<'a> SearchResults<'a> {
    pub fn new(products: Vec<&'a Product>, price_bounds: Option<PriceBounds>, catalog_size: usize) -> Self {
        Self {
            products,
            price_bounds,
            catalog_size,
        }
    }

    /// Check for the "no results" state.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Number of matching products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Product> + '_ {
        self.products.iter().copied()
    }

    /// Keep at most `limit` products.
    pub fn truncate(&mut self, limit: usize) {
        self.products.truncate(limit);
    }
}
