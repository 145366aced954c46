//! Catalog commands: listing and drag-style reordering.

use anyhow::{bail, Result};
use dialoguer::Confirm;
use vitrine_commerce::catalog::CategoryGroup;
use vitrine_commerce::ids::CategoryId;
use vitrine_store::CatalogStore;

use super::{CatalogArgs, CatalogCommand};
use crate::context::Context;

/// Run the catalog command.
pub async fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    match args.command {
        Some(CatalogCommand::List) | None => list(ctx).await,
        Some(CatalogCommand::MoveCategory { from, to }) => move_category(from, to, ctx).await,
        Some(CatalogCommand::MoveProduct {
            category_id,
            from,
            to,
        }) => move_product(&category_id, from, to, ctx).await,
    }
}

/// Fetch the catalog, offering an interactive retry on transient failure.
async fn fetch_catalog(ctx: &Context) -> Result<CatalogStore<vitrine_api::HttpApi>> {
    let api = ctx.http_api()?;
    let mut store = CatalogStore::new(api).with_currency(ctx.currency());

    loop {
        let spinner = ctx.output.spinner("Fetching catalog...");
        let result = store.refresh().await;
        spinner.finish_and_clear();

        match result {
            Ok(()) => return Ok(store),
            Err(e) if e.is_retryable() && !ctx.output.is_json() => {
                ctx.output.warn(&format!("Catalog fetch failed: {}", e));
                let retry = Confirm::new()
                    .with_prompt("Retry?")
                    .default(true)
                    .interact()?;
                if !retry {
                    bail!("catalog fetch failed: {}", e);
                }
            }
            Err(e) => bail!("catalog fetch failed: {}", e),
        }
    }
}

async fn list(ctx: &Context) -> Result<()> {
    let store = fetch_catalog(ctx).await?;

    if ctx.output.is_json() {
        ctx.output.json(&store.groups().to_vec());
        return Ok(());
    }

    print_groups(store.groups(), ctx);
    Ok(())
}

async fn move_category(from: usize, to: usize, ctx: &Context) -> Result<()> {
    let mut store = fetch_catalog(ctx).await?;

    store.move_category(from, to).await?;
    ctx.output
        .success(&format!("Moved category from position {} to {}", from, to));

    print_groups(store.groups(), ctx);
    Ok(())
}

async fn move_product(category_id: &str, from: usize, to: usize, ctx: &Context) -> Result<()> {
    let mut store = fetch_catalog(ctx).await?;

    store
        .move_product(&CategoryId::new(category_id), from, to)
        .await?;
    ctx.output.success(&format!(
        "Moved product from position {} to {} in category '{}'",
        from, to, category_id
    ));

    print_groups(store.groups(), ctx);
    Ok(())
}

fn print_groups(groups: &[CategoryGroup], ctx: &Context) {
    if groups.is_empty() {
        ctx.output.info("The catalog is empty.");
        return;
    }

    for group in groups {
        ctx.output.header(&group.category.name);
        if group.products.is_empty() {
            ctx.output.info("  (no products)");
            continue;
        }
        for product in &group.products {
            let availability = if product.available { "" } else { " [unavailable]" };
            ctx.output.list_item(&format!(
                "{} — {}{}  ({})",
                product.name,
                product.price.display(),
                availability,
                product.id
            ));
        }
    }
}
