//! Hierarchical category path and its product predicate.

use crate::catalog::Product;
use crate::error::CatalogError;
use serde::{Deserialize, Serialize};

/// Maximum number of levels a product is classified by (category / sub / leaf).
pub const MAX_PATH_DEPTH: usize = 3;

/// An ordered walk down the category tree: category, then sub, then leaf.
///
/// Segments are compared to product fields by plain string equality. They are
/// not checked against the category tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct CategoryPath(Vec<String>);

impl CategoryPath {
    /// Create a path, rejecting more than three segments.
    pub fn new<I, S>(segments: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments: Vec<String> = segments.into_iter().map(Into::into).collect();
        if segments.len() > MAX_PATH_DEPTH {
            return Err(CatalogError::InvalidConstraint(format!(
                "category path has {} segments, at most {} allowed",
                segments.len(),
                MAX_PATH_DEPTH
            )));
        }
        Ok(Self(segments))
    }

    /// The empty path.
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn depth(&self) -> usize {
        self.0.len()
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub fn root(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    pub fn sub(&self) -> Option<&str> {
        self.0.get(1).map(String::as_str)
    }

    pub fn leaf(&self) -> Option<&str> {
        self.0.get(2).map(String::as_str)
    }

    /// Drill one level down.
    pub fn push(&mut self, segment: impl Into<String>) -> Result<(), CatalogError> {
        if self.0.len() == MAX_PATH_DEPTH {
            return Err(CatalogError::InvalidConstraint(format!(
                "category path is already {} levels deep",
                MAX_PATH_DEPTH
            )));
        }
        self.0.push(segment.into());
        Ok(())
    }

    /// Drill one level up, returning the removed segment.
    pub fn pop(&mut self) -> Option<String> {
        self.0.pop()
    }

    /// Check a product against every segment the path sets.
    ///
    /// An empty path matches everything; callers that need "no constraint"
    /// semantics check [`CategoryPath::is_empty`] first.
    pub fn matches(&self, product: &Product) -> bool {
        let root_ok = self.root().map_or(true, |root| product.category == root);
        let sub_ok = self
            .sub()
            .map_or(true, |sub| product.sub_category.as_deref() == Some(sub));
        let leaf_ok = self
            .leaf()
            .map_or(true, |leaf| product.leaf_category.as_deref() == Some(leaf));
        root_ok && sub_ok && leaf_ok
    }
}

impl TryFrom<Vec<String>> for CategoryPath {
    type Error = CatalogError;

    fn try_from(segments: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(segments)
    }
}

impl From<CategoryPath> for Vec<String> {
    fn from(path: CategoryPath) -> Self {
        path.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headphones() -> Product {
        Product::new("p-1", "Наушники", "Электроника", 33.0, 4.7)
            .with_sub_category("Аудио")
            .with_leaf_category("Наушники")
    }

    #[test]
    fn test_single_segment_ignores_lower_levels() {
        let path = CategoryPath::new(["Электроника"]).unwrap();
        assert!(path.matches(&headphones()));
        assert!(path.matches(&Product::new("p-2", "Кабель", "Электроника", 5.0, 4.0)));
        assert!(!path.matches(&Product::new("p-3", "Пальто", "Одежда", 340.0, 4.8)));
    }

    #[test]
    fn test_full_path_requires_every_level() {
        let path = CategoryPath::new(["Электроника", "Аудио", "Наушники"]).unwrap();
        assert!(path.matches(&headphones()));

        let speakers = headphones().with_leaf_category("Колонки");
        assert!(!path.matches(&speakers));

        let unclassified = Product::new("p-4", "Радио", "Электроника", 20.0, 4.0).with_sub_category("Аудио");
        assert!(!path.matches(&unclassified));
    }

    #[test]
    fn test_comparison_is_literal() {
        let path = CategoryPath::new(["электроника"]).unwrap();
        assert!(!path.matches(&headphones()));

        let padded = CategoryPath::new(["Электроника "]).unwrap();
        assert!(!padded.matches(&headphones()));
    }

    #[test]
    fn test_depth_limit() {
        assert!(CategoryPath::new(["a", "b", "c", "d"]).is_err());

        let mut path = CategoryPath::new(["a", "b"]).unwrap();
        path.push("c").unwrap();
        assert_eq!(path.leaf(), Some("c"));
        assert!(path.push("d").is_err());
        assert_eq!(path.pop(), Some("c".to_string()));
        assert_eq!(path.depth(), 2);
    }

    #[test]
    fn test_deserialize_rejects_deep_paths() {
        let ok: CategoryPath = serde_json::from_str(r#"["Дом", "Кухня"]"#).unwrap();
        assert_eq!(ok.sub(), Some("Кухня"));

        let deep: Result<CategoryPath, _> = serde_json::from_str(r#"["a", "b", "c", "d"]"#);
        assert!(deep.is_err());
    }
}
