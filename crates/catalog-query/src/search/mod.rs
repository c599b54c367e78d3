//! Search module.
//!
//! Constraint model, filter stages, sort and the query entry point.

mod constraints;
mod engine;
mod filter;
mod path;
mod sort;

pub use constraints::{CategorySelection, ConstraintSet, ALL_CATEGORIES, MAX_RATING};
pub use engine::{query, SearchResults};
pub use filter::Filter;
pub use path::{CategoryPath, MAX_PATH_DEPTH};
pub use sort::{sort_products, SortKey};
