//! Catalog error types.

use thiserror::Error;

/// Errors that can occur while deriving catalog facets or validating constraints.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// Price bounds were requested over a catalog with no products.
    #[error("Empty catalog: price bounds are undefined over zero products")]
    EmptyCatalog,

    /// Every product in the catalog has a NaN price.
    #[error("No comparable prices in a catalog of {0} products")]
    NoComparablePrices(usize),

    /// A constraint value is outside its contract.
    #[error("Invalid constraint: {0}")]
    InvalidConstraint(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::Serialization(e.to_string())
    }
}
