//! Catalog CLI - query a storefront catalog from the command line.
//!
//! Commands:
//! - `catalog query` - Filter and sort products
//! - `catalog bounds` - Show the catalog's price bounds
//! - `catalog categories` - Browse the category tree
//! - `catalog config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{BoundsArgs, CategoriesArgs, ConfigArgs, QueryArgs};
use config::OutputFormat;

/// Catalog CLI - Filter, sort and inspect storefront catalogs
#[derive(Parser)]
#[command(name = "catalog")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter and sort the catalog
    Query(QueryArgs),

    /// Show the catalog's price bounds
    Bounds(BoundsArgs),

    /// List category options under a path
    Categories(CategoriesArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // Load config, then settle the output format: --json wins over the file.
    let ctx = context::Context::load(cli.config.as_deref(), output::Output::new(cli.verbose, cli.json))?;
    let json = cli.json || ctx.config.defaults.format == OutputFormat::Json;
    let ctx = context::Context {
        output: output::Output::new(cli.verbose, json),
        ..ctx
    };

    let result = match cli.command {
        Commands::Query(args) => commands::query::run(args, &ctx),
        Commands::Bounds(args) => commands::bounds::run(args, &ctx),
        Commands::Categories(args) => commands::categories::run(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

/// Log to stderr. `RUST_LOG` wins; otherwise warnings, or debug with `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
