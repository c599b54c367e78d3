//! CLI configuration.

use std::path::Path;

use anyhow::{Context, Result};
use catalog_query::search::SortKey;
use serde::{Deserialize, Serialize};

/// File names searched for, nearest directory first.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["catalog.toml", ".catalog.toml", "catalog.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CliConfig {
    /// Catalog source files.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Query defaults.
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }
}

/// Where the catalog comes from.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CatalogConfig {
    /// Product array JSON file, relative to the config file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub products: Option<String>,

    /// Category tree JSON file, relative to the config file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<String>,
}

/// Defaults applied when a flag is not given.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DefaultsConfig {
    /// Sort key when neither `--sort` nor `--qs` sets one.
    #[serde(default)]
    pub sort: SortKey,

    /// Maximum products printed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,

    /// Output format.
    #[serde(default)]
    pub format: OutputFormat,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            sort: SortKey::Popularity,
            limit: None,
            format: OutputFormat::Human,
        }
    }
}

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
}

/// Generate a default catalog.toml config file.
pub fn generate_default_config() -> String {
    r#"# Catalog query configuration

[catalog]
products = "products.json"
# categories = "categories.json"

[defaults]
# popularity | price-asc | price-desc
sort = "popularity"
# limit = 20
# human | json
format = "human"
"#
    .to_string()
}
