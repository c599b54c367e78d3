//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CONFIG_FILE_NAMES};
use crate::context::Context;

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(none, using defaults)"),
    }

    ctx.output.info("[catalog]");
    ctx.output.kv(
        "products",
        ctx.config.catalog.products.as_deref().unwrap_or("-"),
    );
    ctx.output.kv(
        "categories",
        ctx.config.catalog.categories.as_deref().unwrap_or("-"),
    );

    ctx.output.info("[defaults]");
    ctx.output.kv("sort", ctx.config.defaults.sort.as_str());
    ctx.output.kv(
        "limit",
        &ctx.config
            .defaults
            .limit
            .map(|l| l.to_string())
            .unwrap_or_else(|| "-".to_string()),
    );
    ctx.output.kv("format", &format!("{:?}", ctx.config.defaults.format).to_lowercase());

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_FILE_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())?;
    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}
