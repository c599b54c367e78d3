//! Catalog query command.

use anyhow::{Context as _, Result};
use catalog_query::catalog::PriceBounds;
use catalog_query::search::{CategoryPath, ConstraintSet, SearchResults, SortKey};
use serde::Serialize;

use super::QueryArgs;
use crate::context::Context;
use crate::output::{format_price, format_row, rating_badge};

/// Run the query command.
pub fn run(args: QueryArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.load_catalog(
        args.source.products.as_deref(),
        args.source.categories.as_deref(),
    )?;

    // An empty catalog has no bounds. Queries over it are still well-defined,
    // so the price range collapses to zero and the result is empty.
    let bounds = match catalog.price_bounds() {
        Ok(bounds) => bounds,
        Err(e) => {
            ctx.output.warn(&format!("{}; using a zero price range", e));
            PriceBounds::new(0.0, 0.0)
        }
    };

    let constraints = build_constraints(&args, bounds, ctx.config.defaults.sort)?;
    tracing::debug!(?constraints, "built constraints");

    let mut results = catalog.search(&constraints);
    let matched = results.len();
    if let Some(limit) = args.limit.or(ctx.config.defaults.limit) {
        results.truncate(limit);
    }

    if ctx.output.is_json() {
        ctx.output.json(&QueryReport {
            query_string: constraints.to_query_string(bounds),
            matched,
            results: &results,
        });
        return Ok(());
    }

    render(&results, matched, &constraints, bounds, ctx);
    Ok(())
}

#[derive(Serialize)]
struct QueryReport<'a> {
    query_string: String,
    matched: usize,
    results: &'a SearchResults<'a>,
}

/// Layer constraints: query string (or defaults with the configured sort),
/// then explicit flags, then optional clamping and validation.
fn build_constraints(args: &QueryArgs, bounds: PriceBounds, default_sort: SortKey) -> Result<ConstraintSet> {
    let mut constraints = match &args.qs {
        Some(qs) => ConstraintSet::from_query_string(qs, bounds),
        None => ConstraintSet::new(bounds).with_sort_key(default_sort),
    };

    if let Some(text) = &args.search {
        constraints.set_search_text(text.as_str());
    }
    if let Some(category) = &args.category {
        constraints.set_category_flat(category.as_str());
    }
    if !args.path.is_empty() {
        let path = CategoryPath::new(args.path.iter().cloned()).context("Invalid --path")?;
        constraints.set_category_path(path);
    }
    if args.price_from.is_some() || args.price_to.is_some() {
        let from = args.price_from.unwrap_or(constraints.price_from);
        let to = args.price_to.unwrap_or(constraints.price_to);
        constraints.set_price_range(from, to);
    }
    if let Some(rating) = args.rating {
        constraints.set_rating_min(rating);
    }
    if let Some(sort) = args.sort {
        constraints.set_sort_key(sort);
    }

    if args.clamp {
        constraints.clamp_to(bounds);
    }
    if args.strict {
        constraints
            .validate_within(bounds)
            .context("Constraints rejected by --strict")?;
    }

    Ok(constraints)
}

fn render(
    results: &SearchResults<'_>,
    matched: usize,
    constraints: &ConstraintSet,
    bounds: PriceBounds,
    ctx: &Context,
) {
    ctx.output.header(&format!(
        "{} of {} products · {}",
        matched,
        results.catalog_size,
        constraints.sort_key.display_name()
    ));

    if ctx.output.is_verbose() {
        let qs = constraints.to_query_string(bounds);
        ctx.output.kv("query", if qs.is_empty() { "(defaults)" } else { qs.as_str() });
    }

    if results.is_empty() {
        ctx.output.info("No products match the current filters.");
    } else {
        let widths = column_widths(results);
        ctx.output.table_row(&["ID", "TITLE", "CATEGORY", "PRICE"], &widths);
        for product in results.iter() {
            let category = product.category_levels().join(" / ");
            let price = format_price(product.price);
            println!(
                "  {}  {}",
                format_row(
                    &[product.id.as_str(), product.title.as_str(), category.as_str(), price.as_str()],
                    &widths
                ),
                rating_badge(product.rating)
            );
        }
        if results.len() < matched {
            ctx.output.info(&format!("… {} more", matched - results.len()));
        }
    }

    if let Some(bounds) = results.price_bounds {
        ctx.output.kv(
            "price range",
            &format!("{} – {}", format_price(bounds.min), format_price(bounds.max)),
        );
    }
}

fn column_widths(results: &SearchResults<'_>) -> Vec<usize> {
    // Header widths: ID, TITLE, CATEGORY, PRICE.
    let mut widths = vec![2, 5, 8, 5];
    for product in results.iter() {
        let cols = [
            product.id.as_str().chars().count(),
            product.title.chars().count(),
            product.category_levels().join(" / ").chars().count(),
            format_price(product.price).len(),
        ];
        for (width, col) in widths.iter_mut().zip(cols) {
            *width = (*width).max(col);
        }
    }
    widths
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::SourceArgs;

    fn args() -> QueryArgs {
        QueryArgs {
            source: SourceArgs {
                products: None,
                categories: None,
            },
            qs: None,
            search: None,
            category: None,
            path: Vec::new(),
            price_from: None,
            price_to: None,
            rating: None,
            sort: None,
            limit: None,
            clamp: false,
            strict: false,
        }
    }

    fn bounds() -> PriceBounds {
        PriceBounds::new(30.0, 340.0)
    }

    #[test]
    fn test_config_sort_applies_without_flags() {
        let c = build_constraints(&args(), bounds(), SortKey::PriceDesc).unwrap();
        assert_eq!(c.sort_key, SortKey::PriceDesc);
        assert_eq!((c.price_from, c.price_to), (30.0, 340.0));
    }

    #[test]
    fn test_flags_override_query_string() {
        let mut a = args();
        a.qs = Some("q=coat&sort=price-asc&rating=4".to_string());
        a.sort = Some(SortKey::PriceDesc);
        a.path = vec!["Одежда".to_string()];

        let c = build_constraints(&a, bounds(), SortKey::Popularity).unwrap();
        assert_eq!(c.search_text, "coat");
        assert_eq!(c.rating_min, 4.0);
        assert_eq!(c.sort_key, SortKey::PriceDesc);
        assert_eq!(c.category_path.root(), Some("Одежда"));
    }

    #[test]
    fn test_clamp_and_strict() {
        let mut a = args();
        a.price_from = Some(10.0);
        a.price_to = Some(1000.0);
        a.strict = true;
        assert!(build_constraints(&a, bounds(), SortKey::Popularity).is_err());

        a.clamp = true;
        let c = build_constraints(&a, bounds(), SortKey::Popularity).unwrap();
        assert_eq!((c.price_from, c.price_to), (30.0, 340.0));
    }

    #[test]
    fn test_single_price_flag_keeps_other_end() {
        let mut a = args();
        a.qs = Some("price_to=200".to_string());
        a.price_from = Some(50.0);
        let c = build_constraints(&a, bounds(), SortKey::Popularity).unwrap();
        assert_eq!((c.price_from, c.price_to), (50.0, 200.0));
    }

    #[test]
    fn test_too_deep_path_is_rejected() {
        let mut a = args();
        a.path = vec!["a".into(), "b".into(), "c".into(), "d".into()];
        assert!(build_constraints(&a, bounds(), SortKey::Popularity).is_err());
    }
}
