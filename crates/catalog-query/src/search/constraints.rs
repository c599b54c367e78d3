//! The constraint set a shopper builds up while browsing.

use crate::catalog::PriceBounds;
use crate::error::CatalogError;
use crate::search::{CategoryPath, SortKey, MAX_PATH_DEPTH};
use serde::{Deserialize, Serialize};
use url::form_urlencoded;

/// Highest rating a product can carry.
pub const MAX_RATING: f64 = 5.0;

/// Wire value of [`CategorySelection::All`].
pub const ALL_CATEGORIES: &str = "all";

/// Flat single-category choice, used only while no category path is set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategorySelection {
    /// No category constraint.
    #[default]
    All,
    /// Products whose top-level category equals this value.
    Only(String),
}

impl CategorySelection {
    pub fn as_str(&self) -> &str {
        match self {
            CategorySelection::All => ALL_CATEGORIES,
            CategorySelection::Only(category) => category,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, CategorySelection::All)
    }
}

impl From<&str> for CategorySelection {
    fn from(s: &str) -> Self {
        if s == ALL_CATEGORIES {
            CategorySelection::All
        } else {
            CategorySelection::Only(s.to_string())
        }
    }
}

impl From<String> for CategorySelection {
    fn from(s: String) -> Self {
        if s == ALL_CATEGORIES {
            CategorySelection::All
        } else {
            CategorySelection::Only(s)
        }
    }
}

impl From<CategorySelection> for String {
    fn from(selection: CategorySelection) -> Self {
        match selection {
            CategorySelection::All => ALL_CATEGORIES.to_string(),
            CategorySelection::Only(category) => category,
        }
    }
}

/// User-selected filter and sort parameters.
///
/// The engine reads a constraint set as given. Keeping
/// `bounds.min <= price_from <= price_to <= bounds.max` is the owner's job;
/// [`ConstraintSet::clamp_to`] restores it after an edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstraintSet {
    /// Free text; blank after trimming means no text filter.
    pub search_text: String,
    /// Flat category, ignored while `category_path` is non-empty.
    pub category_flat: CategorySelection,
    /// Hierarchical category walk.
    pub category_path: CategoryPath,
    /// Inclusive lower price bound.
    pub price_from: f64,
    /// Inclusive upper price bound.
    pub price_to: f64,
    /// Inclusive minimum rating; zero means no rating filter.
    pub rating_min: f64,
    /// Result ordering.
    pub sort_key: SortKey,
}

impl ConstraintSet {
    /// Default constraints for a catalog spanning `bounds`.
    pub fn new(bounds: PriceBounds) -> Self {
        Self {
            search_text: String::new(),
            category_flat: CategorySelection::All,
            category_path: CategoryPath::empty(),
            price_from: bounds.min,
            price_to: bounds.max,
            rating_min: 0.0,
            sort_key: SortKey::Popularity,
        }
    }

    /// Restore every field to its default in one step.
    pub fn reset(&mut self, bounds: PriceBounds) {
        *self = Self::new(bounds);
    }

    /// Check whether every field holds its default.
    pub fn is_default(&self, bounds: PriceBounds) -> bool {
        *self == Self::new(bounds)
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.search_text = text.into();
        self
    }

    pub fn set_category_flat(&mut self, selection: impl Into<CategorySelection>) -> &mut Self {
        self.category_flat = selection.into();
        self
    }

    pub fn set_category_path(&mut self, path: CategoryPath) -> &mut Self {
        self.category_path = path;
        self
    }

    pub fn set_price_range(&mut self, from: f64, to: f64) -> &mut Self {
        self.price_from = from;
        self.price_to = to;
        self
    }

    pub fn set_rating_min(&mut self, rating: f64) -> &mut Self {
        self.rating_min = rating;
        self
    }

    pub fn set_sort_key(&mut self, key: SortKey) -> &mut Self {
        self.sort_key = key;
        self
    }

    /// Set the search text.
    pub fn with_search_text(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    /// Set the flat category.
    pub fn with_category_flat(mut self, selection: impl Into<CategorySelection>) -> Self {
        self.category_flat = selection.into();
        self
    }

    /// Set the category path.
    pub fn with_category_path(mut self, path: CategoryPath) -> Self {
        self.category_path = path;
        self
    }

    /// Set the price range.
    pub fn with_price_range(mut self, from: f64, to: f64) -> Self {
        self.price_from = from;
        self.price_to = to;
        self
    }

    /// Set the minimum rating.
    pub fn with_rating_min(mut self, rating: f64) -> Self {
        self.rating_min = rating;
        self
    }

    /// Set the sort key.
    pub fn with_sort_key(mut self, key: SortKey) -> Self {
        self.sort_key = key;
        self
    }

    /// Pull the price range back inside `bounds`.
    ///
    /// Each end is clamped on its own; if that leaves them crossed they are
    /// swapped.
    pub fn clamp_to(&mut self, bounds: PriceBounds) -> &mut Self {
        let from = bounds.clamp(self.price_from);
        let to = bounds.clamp(self.price_to);
        if from > to {
            self.price_from = to;
            self.price_to = from;
        } else {
            self.price_from = from;
            self.price_to = to;
        }
        self
    }

    /// Reject values outside the constraint contract.
    ///
    /// The engine never calls this. Out-of-contract values give well-defined,
    /// possibly empty results rather than errors.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if !self.price_from.is_finite() || !self.price_to.is_finite() {
            return Err(CatalogError::InvalidConstraint(format!(
                "price range must be finite, got {}..={}",
                self.price_from, self.price_to
            )));
        }
        if self.price_from > self.price_to {
            return Err(CatalogError::InvalidConstraint(format!(
                "price_from {} exceeds price_to {}",
                self.price_from, self.price_to
            )));
        }
        if !(0.0..=MAX_RATING).contains(&self.rating_min) {
            return Err(CatalogError::InvalidConstraint(format!(
                "rating_min must be within 0..={}, got {}",
                MAX_RATING, self.rating_min
            )));
        }
        Ok(())
    }

    /// [`ConstraintSet::validate`], plus the price range must lie within `bounds`.
    pub fn validate_within(&self, bounds: PriceBounds) -> Result<(), CatalogError> {
        self.validate()?;
        if !bounds.contains(self.price_from) || !bounds.contains(self.price_to) {
            return Err(CatalogError::InvalidConstraint(format!(
                "price range {}..={} outside catalog bounds {}..={}",
                self.price_from, self.price_to, bounds.min, bounds.max
            )));
        }
        Ok(())
    }

    /// Parse constraints from a URL query string.
    ///
    /// Keys: `q`, `category`, `path` (repeated, top level first),
    /// `price_from`, `price_to`, `rating`, `sort`. Missing or unparseable
    /// values keep their defaults; unknown keys are ignored.
    pub fn from_query_string(qs: &str, bounds: PriceBounds) -> Self {
        let qs = qs.strip_prefix('?').unwrap_or(qs);
        let mut constraints = Self::new(bounds);
        let mut path = Vec::new();

        for (key, value) in form_urlencoded::parse(qs.as_bytes()) {
            match key.as_ref() {
                "q" => constraints.search_text = value.into_owned(),
                "category" => constraints.category_flat = CategorySelection::from(value.into_owned()),
                "path" => path.push(value.into_owned()),
                "price_from" => {
                    if let Ok(v) = value.parse() {
                        constraints.price_from = v;
                    }
                }
                "price_to" => {
                    if let Ok(v) = value.parse() {
                        constraints.price_to = v;
                    }
                }
                "rating" => {
                    if let Ok(v) = value.parse() {
                        constraints.rating_min = v;
                    }
                }
                "sort" => {
                    if let Some(key) = SortKey::from_str(&value) {
                        constraints.sort_key = key;
                    }
                }
                _ => {}
            }
        }

        if path.len() > MAX_PATH_DEPTH {
            tracing::debug!(segments = path.len(), "truncating category path from query string");
            path.truncate(MAX_PATH_DEPTH);
        }
        constraints.category_path = CategoryPath::new(path).unwrap_or_default();
        constraints
    }

    /// Encode the fields that differ from their defaults as a query string.
    pub fn to_query_string(&self, bounds: PriceBounds) -> String {
        let defaults = Self::new(bounds);
        let mut out = form_urlencoded::Serializer::new(String::new());

        if self.search_text != defaults.search_text {
            out.append_pair("q", &self.search_text);
        }
        if !self.category_flat.is_all() {
            out.append_pair("category", self.category_flat.as_str());
        }
        for segment in self.category_path.segments() {
            out.append_pair("path", segment);
        }
        if self.price_from != defaults.price_from {
            out.append_pair("price_from", &self.price_from.to_string());
        }
        if self.price_to != defaults.price_to {
            out.append_pair("price_to", &self.price_to.to_string());
        }
        if self.rating_min != defaults.rating_min {
            out.append_pair("rating", &self.rating_min.to_string());
        }
        if self.sort_key != defaults.sort_key {
            out.append_pair("sort", self.sort_key.as_str());
        }

        out.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> PriceBounds {
        PriceBounds::new(30.0, 340.0)
    }

    #[test]
    fn test_defaults() {
        let c = ConstraintSet::new(bounds());
        assert_eq!(c.search_text, "");
        assert!(c.category_flat.is_all());
        assert!(c.category_path.is_empty());
        assert_eq!(c.price_from, 30.0);
        assert_eq!(c.price_to, 340.0);
        assert_eq!(c.rating_min, 0.0);
        assert_eq!(c.sort_key, SortKey::Popularity);
        assert!(c.is_default(bounds()));
    }

    #[test]
    fn test_reset_restores_every_field() {
        let mut c = ConstraintSet::new(bounds());
        c.set_search_text("пальто")
            .set_category_flat("Одежда")
            .set_category_path(CategoryPath::new(["Одежда"]).unwrap())
            .set_price_range(100.0, 200.0)
            .set_rating_min(4.5)
            .set_sort_key(SortKey::PriceDesc);
        assert!(!c.is_default(bounds()));

        c.reset(bounds());
        assert_eq!(c, ConstraintSet::new(bounds()));
    }

    #[test]
    fn test_category_selection_sentinel() {
        assert_eq!(CategorySelection::from("all"), CategorySelection::All);
        assert_eq!(
            CategorySelection::from("All"),
            CategorySelection::Only("All".to_string())
        );
        assert_eq!(String::from(CategorySelection::All), "all");

        let json = serde_json::to_string(&CategorySelection::Only("Дом".into())).unwrap();
        assert_eq!(json, "\"Дом\"");
    }

    #[test]
    fn test_clamp_to_bounds() {
        let mut c = ConstraintSet::new(bounds()).with_price_range(10.0, 500.0);
        c.clamp_to(bounds());
        assert_eq!((c.price_from, c.price_to), (30.0, 340.0));

        let mut crossed = ConstraintSet::new(bounds()).with_price_range(200.0, 100.0);
        crossed.clamp_to(bounds());
        assert_eq!((crossed.price_from, crossed.price_to), (100.0, 200.0));

        let mut above = ConstraintSet::new(bounds()).with_price_range(400.0, 350.0);
        above.clamp_to(bounds());
        assert_eq!((above.price_from, above.price_to), (340.0, 340.0));
    }

    #[test]
    fn test_validate() {
        assert!(ConstraintSet::new(bounds()).validate().is_ok());

        let crossed = ConstraintSet::new(bounds()).with_price_range(50.0, 40.0);
        assert!(matches!(crossed.validate(), Err(CatalogError::InvalidConstraint(_))));

        let nan = ConstraintSet::new(bounds()).with_price_range(f64::NAN, 40.0);
        assert!(nan.validate().is_err());

        let infinite = ConstraintSet::new(bounds()).with_price_range(0.0, f64::INFINITY);
        assert!(infinite.validate().is_err());

        let high_rating = ConstraintSet::new(bounds()).with_rating_min(5.5);
        assert!(high_rating.validate().is_err());

        let nan_rating = ConstraintSet::new(bounds()).with_rating_min(f64::NAN);
        assert!(nan_rating.validate().is_err());
    }

    #[test]
    fn test_validate_within_bounds() {
        let inside = ConstraintSet::new(bounds()).with_price_range(31.0, 35.0);
        assert!(inside.validate_within(bounds()).is_ok());

        let outside = ConstraintSet::new(bounds()).with_price_range(0.0, 35.0);
        assert!(outside.validate().is_ok());
        assert!(outside.validate_within(bounds()).is_err());
    }

    #[test]
    fn test_from_query_string() {
        let qs = "?q=%D0%BF%D0%B0%D0%BB%D1%8C%D1%82%D0%BE&category=all&path=Одежда&path=Верхняя+одежда\
                  &price_from=31&price_to=abc&rating=4.5&sort=price-asc&page=2";
        let c = ConstraintSet::from_query_string(qs, bounds());

        assert_eq!(c.search_text, "пальто");
        assert!(c.category_flat.is_all());
        assert_eq!(c.category_path.segments(), ["Одежда", "Верхняя одежда"]);
        assert_eq!(c.price_from, 31.0);
        assert_eq!(c.price_to, 340.0);
        assert_eq!(c.rating_min, 4.5);
        assert_eq!(c.sort_key, SortKey::PriceAsc);
    }

    #[test]
    fn test_query_string_truncates_deep_paths() {
        let c = ConstraintSet::from_query_string("path=a&path=b&path=c&path=d", bounds());
        assert_eq!(c.category_path.segments(), ["a", "b", "c"]);
    }

    #[test]
    fn test_query_string_encodes_only_changes() {
        assert_eq!(ConstraintSet::new(bounds()).to_query_string(bounds()), "");

        let c = ConstraintSet::new(bounds())
            .with_category_flat("Дом")
            .with_price_range(30.0, 35.5)
            .with_sort_key(SortKey::PriceDesc);
        let qs = c.to_query_string(bounds());
        assert_eq!(
            qs,
            "category=%D0%94%D0%BE%D0%BC&price_to=35.5&sort=price-desc"
        );
        assert_eq!(ConstraintSet::from_query_string(&qs, bounds()), c);
    }
}
