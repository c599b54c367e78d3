//! CLI command implementations.

pub mod bounds;
pub mod categories;
pub mod config;
pub mod query;

use catalog_query::search::SortKey;
use clap::{Args, Subcommand};

/// Catalog source flags shared by every catalog command.
#[derive(Args)]
pub struct SourceArgs {
    /// Product array JSON file (overrides catalog.products).
    #[arg(short, long)]
    pub products: Option<String>,

    /// Category tree JSON file (overrides catalog.categories).
    #[arg(long)]
    pub categories: Option<String>,
}

/// Arguments for the query command.
#[derive(Args)]
pub struct QueryArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Start from a storefront query string instead of the defaults.
    #[arg(long)]
    pub qs: Option<String>,

    /// Free-text search over title and descriptions.
    #[arg(short = 'q', long)]
    pub search: Option<String>,

    /// Flat category ("all" for none).
    #[arg(long)]
    pub category: Option<String>,

    /// Category path segment, top level first (repeat up to 3 times).
    #[arg(long = "path")]
    pub path: Vec<String>,

    /// Inclusive lower price bound.
    #[arg(long)]
    pub price_from: Option<f64>,

    /// Inclusive upper price bound.
    #[arg(long)]
    pub price_to: Option<f64>,

    /// Inclusive minimum rating.
    #[arg(long)]
    pub rating: Option<f64>,

    /// Sort key: popularity, price-asc or price-desc.
    #[arg(short, long, value_parser = parse_sort_key)]
    pub sort: Option<SortKey>,

    /// Show at most N products.
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Pull the price range back inside the catalog bounds.
    #[arg(long)]
    pub clamp: bool,

    /// Reject out-of-contract constraints instead of returning empty results.
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the bounds command.
#[derive(Args)]
pub struct BoundsArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

/// Arguments for the categories command.
#[derive(Args)]
pub struct CategoriesArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Path to list options under (empty for top level).
    pub path: Vec<String>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}

fn parse_sort_key(s: &str) -> Result<SortKey, String> {
    SortKey::from_str(s).ok_or_else(|| {
        let known: Vec<_> = SortKey::ALL.iter().map(SortKey::as_str).collect();
        format!("unknown sort key '{}', expected one of: {}", s, known.join(", "))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sort_key() {
        assert_eq!(parse_sort_key("price-asc"), Ok(SortKey::PriceAsc));
        let err = parse_sort_key("newest").unwrap_err();
        assert!(err.contains("popularity, price-asc, price-desc"));
    }
}
