//! Category navigation command.

use anyhow::{Context as _, Result};
use catalog_query::search::CategoryPath;
use serde_json::json;

use super::CategoriesArgs;
use crate::context::Context;

/// Run the categories command.
pub fn run(args: CategoriesArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.load_catalog(
        args.source.products.as_deref(),
        args.source.categories.as_deref(),
    )?;
    let tree = catalog.categories();

    if tree.is_empty() {
        ctx.output.warn("No category tree loaded. Pass --categories or set catalog.categories.");
    } else if !tree.contains_path(args.path.as_slice()) {
        // Unknown paths are still valid filters; they just match nothing.
        ctx.output.warn(&format!(
            "'{}' is not in the category tree",
            args.path.join(" / ")
        ));
    }

    let options = tree.options_at(args.path.as_slice());
    let path = CategoryPath::new(args.path.iter().cloned()).context("Invalid category path")?;
    let products = catalog.products().iter().filter(|p| path.matches(p)).count();

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "path": args.path,
            "options": options,
            "products": products,
        }));
        return Ok(());
    }

    let title = if args.path.is_empty() {
        "Top-level categories".to_string()
    } else {
        args.path.join(" / ")
    };
    ctx.output.header(&title);
    for option in &options {
        ctx.output.list_item(option);
    }
    ctx.output.kv("products under path", &products.to_string());
    Ok(())
}
