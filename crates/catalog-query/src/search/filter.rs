//! Filter stages applied by the query pipeline.

use crate::catalog::Product;
use crate::search::{CategoryPath, CategorySelection, ConstraintSet};
use serde::Serialize;

/// A single filter stage.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub enum Filter {
    /// Stage that contributes no constraint.
    Pass,
    /// Hierarchical category path.
    CategoryPath(CategoryPath),
    /// Flat top-level category.
    Category(String),
    /// Case-insensitive substring over title and descriptions.
    /// Holds the already lower-cased needle.
    Text(String),
    /// Inclusive price range.
    PriceRange { from: f64, to: f64 },
    /// Inclusive minimum rating.
    Rating { min: f64 },
}

impl Filter {
    /// Category stage: the path when set, otherwise the flat selection.
    pub fn category(constraints: &ConstraintSet) -> Self {
        if !constraints.category_path.is_empty() {
            return Filter::CategoryPath(constraints.category_path.clone());
        }
        match &constraints.category_flat {
            CategorySelection::All => Filter::Pass,
            CategorySelection::Only(category) => Filter::Category(category.clone()),
        }
    }

    /// Text stage. Blank-after-trim text is no constraint; otherwise the
    /// untrimmed text is lower-cased and matched as a substring.
    pub fn text(search_text: &str) -> Self {
        if search_text.trim().is_empty() {
            Filter::Pass
        } else {
            Filter::Text(search_text.to_lowercase())
        }
    }

    /// Price stage. Always applied; crossed bounds match nothing.
    pub fn price_range(from: f64, to: f64) -> Self {
        Filter::PriceRange { from, to }
    }

    /// Rating stage. Non-positive minimums are no constraint; a NaN minimum
    /// stays active and matches nothing.
    pub fn rating(min: f64) -> Self {
        if min <= 0.0 {
            Filter::Pass
        } else {
            Filter::Rating { min }
        }
    }

    /// The filter stages for `constraints`, in application order:
    /// category, text, price, rating.
    pub fn pipeline(constraints: &ConstraintSet) -> [Filter; 4] {
        [
            Filter::category(constraints),
            Filter::text(&constraints.search_text),
            Filter::price_range(constraints.price_from, constraints.price_to),
            Filter::rating(constraints.rating_min),
        ]
    }

    /// Check whether a product passes this stage.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Filter::Pass => true,
            Filter::CategoryPath(path) => path.matches(product),
            Filter::Category(category) => product.category == *category,
            Filter::Text(needle) => product
                .searchable_text()
                .iter()
                .any(|field| field.to_lowercase().contains(needle.as_str())),
            Filter::PriceRange { from, to } => *from <= product.price && product.price <= *to,
            Filter::Rating { min } => product.rating >= *min,
        }
    }

    /// Short stage name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Filter::Pass => "pass",
            Filter::CategoryPath(_) => "category_path",
            Filter::Category(_) => "category",
            Filter::Text(_) => "text",
            Filter::PriceRange { .. } => "price",
            Filter::Rating { .. } => "rating",
        }
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, Filter::Pass)
    }
}
