//! Product catalog module.
//!
//! Contains product records, the category tree, facet bounds and the
//! session snapshot that ties them together.

mod bounds;
mod category;
mod product;
mod snapshot;

pub use bounds::{price_bounds, PriceBounds};
pub use category::{CategoryNode, CategoryTree};
pub use product::Product;
pub use snapshot::{Catalog, SharedCatalog};
