//! Catalog filtering, sorting and facet bounds for storefront browsing.
//!
//! This crate turns a product catalog plus a shopper's constraints into an
//! ordered result list:
//!
//! - **Catalog**: Products, the category tree, price bounds, session snapshots
//! - **Search**: Constraint set, filter stages, stable sort, the `query` entry point
//!
//! # Example
//!
//! ```rust
//! use catalog_query::prelude::*;
//!
//! let catalog = Catalog::new(
//!     vec![
//!         Product::new("p-1", "Наушники", "Электроника", 33.0, 4.7),
//!         Product::new("p-2", "Пальто", "Одежда", 340.0, 4.8),
//!         Product::new("p-3", "Лампа", "Дом", 30.0, 4.6),
//!     ],
//!     CategoryTree::default(),
//! );
//!
//! let constraints = catalog
//!     .default_constraints()?
//!     .with_sort_key(SortKey::PriceAsc);
//!
//! let results = catalog.search(&constraints);
//! let prices: Vec<f64> = results.iter().map(|p| p.price).collect();
//! assert_eq!(prices, vec![30.0, 33.0, 340.0]);
//! # Ok::<(), CatalogError>(())
//! ```

pub mod error;
pub mod ids;

pub mod catalog;
pub mod search;

pub use error::CatalogError;
pub use ids::ProductId;
pub use search::query;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CatalogError;
    pub use crate::ids::ProductId;

    // Catalog
    pub use crate::catalog::{
        price_bounds, Catalog, CategoryNode, CategoryTree, PriceBounds, Product, SharedCatalog,
    };

    // Search
    pub use crate::search::{
        query, CategoryPath, CategorySelection, ConstraintSet, Filter, SearchResults, SortKey,
    };
}
