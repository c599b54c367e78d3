//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context as _, Result};
use catalog_query::catalog::Catalog;

use crate::config::{CliConfig, CONFIG_FILE_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Config file the configuration came from, if any.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from an explicit config file or the nearest one found.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;
        Self::load_from(cwd, config_path, output)
    }

    fn load_from(cwd: PathBuf, config_path: Option<&str>, output: Output) -> Result<Self> {
        let config_path = match config_path {
            Some(path) => Some(resolve_against(&cwd, path)),
            None => find_config(&cwd),
        };

        let config = match &config_path {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };

        if let Some(path) = &config_path {
            tracing::debug!(path = %path.display(), "loaded config");
        }

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Directory relative config paths are resolved against.
    fn config_dir(&self) -> &Path {
        self.config_path
            .as_deref()
            .and_then(Path::parent)
            .unwrap_or(self.cwd.as_path())
    }

    /// Resolve a path given on the command line.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        resolve_against(&self.cwd, path)
    }

    /// Load the catalog, preferring command-line paths over config paths.
    pub fn load_catalog(&self, products: Option<&str>, categories: Option<&str>) -> Result<Catalog> {
        let products_path = match (products, &self.config.catalog.products) {
            (Some(path), _) => self.resolve_path(path),
            (None, Some(path)) => resolve_against(self.config_dir(), path),
            (None, None) => bail!(
                "No product file given. Pass --products or set catalog.products in {}",
                CONFIG_FILE_NAMES[0]
            ),
        };
        let categories_path = match (categories, &self.config.catalog.categories) {
            (Some(path), _) => Some(self.resolve_path(path)),
            (None, Some(path)) => Some(resolve_against(self.config_dir(), path)),
            (None, None) => None,
        };

        let products_json = std::fs::read_to_string(&products_path)
            .with_context(|| format!("Failed to read products: {}", products_path.display()))?;
        let categories_json = match &categories_path {
            Some(path) => Some(
                std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read categories: {}", path.display()))?,
            ),
            None => None,
        };

        let catalog = Catalog::from_json(&products_json, categories_json.as_deref())
            .with_context(|| format!("Failed to parse catalog: {}", products_path.display()))?;

        tracing::info!(
            products = catalog.len(),
            path = %products_path.display(),
            "loaded catalog"
        );
        Ok(catalog)
    }
}

fn resolve_against(base: &Path, path: &str) -> PathBuf {
    let path = PathBuf::from(path);
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}

/// Find config file in directory tree.
fn find_config(start: &Path) -> Option<PathBuf> {
    start.ancestors().find_map(|dir| {
        CONFIG_FILE_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|candidate| candidate.is_file())
    })
}
