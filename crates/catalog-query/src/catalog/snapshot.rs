//! Session catalog snapshots.

use std::sync::{Arc, OnceLock};

use parking_lot::RwLock;

use crate::catalog::{price_bounds, CategoryTree, PriceBounds, Product};
use crate::error::CatalogError;
use crate::search::{query, ConstraintSet, SearchResults};

/// An immutable catalog for one session.
///
/// Product order is the "original order" that sort ties fall back to.
/// Price bounds are derived on first use and memoized.
#[derive(Debug)]
pub struct Catalog {
    products: Vec<Product>,
    categories: CategoryTree,
    bounds: OnceLock<Result<PriceBounds, CatalogError>>,
}

impl Catalog {
    /// Create a catalog from products and a category tree.
    pub fn new(products: Vec<Product>, categories: CategoryTree) -> Self {
        Self {
            products,
            categories,
            bounds: OnceLock::new(),
        }
    }

    /// Parse a catalog from a JSON product array and an optional JSON category tree.
    pub fn from_json(products: &str, categories: Option<&str>) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(products)?;
        let categories = match categories {
            Some(json) => serde_json::from_str(json)?,
            None => CategoryTree::default(),
        };
        Ok(Self::new(products, categories))
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn categories(&self) -> &CategoryTree {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Price bounds over the full catalog, computed once.
    pub fn price_bounds(&self) -> Result<PriceBounds, CatalogError> {
        self.bounds
            .get_or_init(|| price_bounds(&self.products))
            .clone()
    }

    /// Default constraints for this catalog.
    pub fn default_constraints(&self) -> Result<ConstraintSet, CatalogError> {
        Ok(ConstraintSet::new(self.price_bounds()?))
    }

    /// Run a query and attach the catalog's price bounds.
    pub fn search(&self, constraints: &ConstraintSet) -> SearchResults<'_> {
        SearchResults::new(
            query(&self.products, constraints),
            self.price_bounds().ok(),
            self.products.len(),
        )
    }
}

/// A catalog that can be replaced while readers hold older snapshots.
///
/// Readers clone the current `Arc<Catalog>` and query it without holding the
/// lock. [`SharedCatalog::replace`] swaps in a whole new snapshot, so a reader
/// sees either the old catalog or the new one, never a mix.
#[derive(Debug)]
pub struct SharedCatalog {
    current: RwLock<Arc<Catalog>>,
}

impl SharedCatalog {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            current: RwLock::new(Arc::new(catalog)),
        }
    }

    /// The current snapshot.
    pub fn snapshot(&self) -> Arc<Catalog> {
        Arc::clone(&self.current.read())
    }

    /// Install a new snapshot, returning the previous one.
    pub fn replace(&self, catalog: Catalog) -> Arc<Catalog> {
        let next = Arc::new(catalog);
        let previous = std::mem::replace(&mut *self.current.write(), next);
        tracing::debug!(
            previous = previous.len(),
            current = self.current.read().len(),
            "replaced catalog snapshot"
        );
        previous
    }
}
