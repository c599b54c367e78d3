//! Price bounds command.

use anyhow::{Context as _, Result};

use super::BoundsArgs;
use crate::context::Context;
use crate::output::format_price;

/// Run the bounds command.
pub fn run(args: BoundsArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.load_catalog(
        args.source.products.as_deref(),
        args.source.categories.as_deref(),
    )?;
    let bounds = catalog
        .price_bounds()
        .context("Cannot derive price bounds")?;

    if ctx.output.is_json() {
        ctx.output.json(&bounds);
        return Ok(());
    }

    ctx.output.header(&format!("Price bounds over {} products", catalog.len()));
    ctx.output.kv("min", &format_price(bounds.min));
    ctx.output.kv("max", &format_price(bounds.max));
    Ok(())
}
