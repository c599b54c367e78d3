//! Product records as supplied by the catalog provider.

use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// Records are owned by the catalog provider and never mutated by a query.
/// Field names follow the provider's camelCase spelling on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product title.
    pub title: String,
    /// Short description for listings.
    #[serde(default)]
    pub short_description: String,
    /// Full description for the product page.
    #[serde(default)]
    pub full_description: String,
    /// Top-level category.
    pub category: String,
    /// Second-level category, if the product has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_category: Option<String>,
    /// Third-level category, if the product has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leaf_category: Option<String>,
    /// Non-negative price in the storefront currency.
    pub price: f64,
    /// Average rating in [0, 5].
    pub rating: f64,
}

impl Product {
    /// Create a product with empty descriptions and no sub/leaf category.
    pub fn new(
        id: impl Into<ProductId>,
        title: impl Into<String>,
        category: impl Into<String>,
        price: f64,
        rating: f64,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            short_description: String::new(),
            full_description: String::new(),
            category: category.into(),
            sub_category: None,
            leaf_category: None,
            price,
            rating,
        }
    }

    /// Set the short description.
    pub fn with_short_description(mut self, text: impl Into<String>) -> Self {
        self.short_description = text.into();
        self
    }

    /// Set the full description.
    pub fn with_full_description(mut self, text: impl Into<String>) -> Self {
        self.full_description = text.into();
        self
    }

    /// Set the second-level category.
    pub fn with_sub_category(mut self, sub: impl Into<String>) -> Self {
        self.sub_category = Some(sub.into());
        self
    }

    /// Set the third-level category.
    pub fn with_leaf_category(mut self, leaf: impl Into<String>) -> Self {
        self.leaf_category = Some(leaf.into());
        self
    }

    /// The product's own classification, from top level down.
    pub fn category_levels(&self) -> Vec<&str> {
        let mut levels = vec![self.category.as_str()];
        if let Some(sub) = &self.sub_category {
            levels.push(sub);
            if let Some(leaf) = &self.leaf_category {
                levels.push(leaf);
            }
        }
        levels
    }

    /// The three searchable text fields, in search order.
    pub fn searchable_text(&self) -> [&str; 3] {
        [
            self.title.as_str(),
            self.short_description.as_str(),
            self.full_description.as_str(),
        ]
    }
}
