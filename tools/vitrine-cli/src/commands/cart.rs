//! Cart commands: local cart state and the +/- stepper.

use anyhow::Result;
use dialoguer::Confirm;
use vitrine_commerce::cart::LineCandidate;
use vitrine_commerce::ids::ProductId;
use vitrine_commerce::money::Money;
use vitrine_store::{CartStore, StepAction};
use vitrine_storage::FileStore;

use super::{CartArgs, CartCommand};
use crate::context::Context;

/// Run the cart command.
pub async fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.cart_store()?;

    match args.command {
        CartCommand::Add {
            id,
            name,
            price,
            image_url,
        } => {
            let candidate = LineCandidate {
                id: ProductId::new(id),
                name,
                unit_price: Money::from_decimal(price, ctx.currency()),
                image_url,
            };
            store.add_item(candidate);
            ctx.output.success("Added to cart");
            show(&store, ctx);
        }
        CartCommand::Inc { id, name, price } => {
            let candidate = LineCandidate {
                id: ProductId::new(id),
                name,
                unit_price: Money::from_decimal(price, ctx.currency()),
                image_url: None,
            };
            store.step(candidate, StepAction::Increment);
            show(&store, ctx);
        }
        CartCommand::Dec { id } => {
            let id = ProductId::new(id);
            // "-" needs an existing line; pressing it on an absent item is
            // a no-op, same as the storefront stepper.
            let Some(line) = store.lines().iter().find(|l| l.id == id).cloned() else {
                ctx.output.info("Item is not in the cart; nothing to do.");
                return Ok(());
            };
            let candidate = LineCandidate {
                id: line.id,
                name: line.name,
                unit_price: line.unit_price,
                image_url: line.image_url,
            };
            store.step(candidate, StepAction::Decrement);
            show(&store, ctx);
        }
        CartCommand::Set { id, quantity } => {
            store.update_quantity(&ProductId::new(id), quantity);
            show(&store, ctx);
        }
        CartCommand::Remove { id } => {
            store.remove_item(&ProductId::new(id));
            ctx.output.success("Removed from cart");
            show(&store, ctx);
        }
        CartCommand::Show => {
            show(&store, ctx);
        }
        CartCommand::Clear { yes } => {
            if !yes && !ctx.output.is_json() {
                let confirmed = Confirm::new()
                    .with_prompt("Empty the cart?")
                    .default(false)
                    .interact()?;
                if !confirmed {
                    ctx.output.info("Cancelled.");
                    return Ok(());
                }
            }
            store.clear();
            ctx.output.success("Cart cleared");
        }
    }

    Ok(())
}

/// Print the cart contents and derived totals.
fn show(store: &CartStore<FileStore>, ctx: &Context) {
    if ctx.output.is_json() {
        ctx.output.json(&store.lines().to_vec());
        return;
    }

    if store.is_empty() {
        ctx.output.info("The cart is empty.");
        return;
    }

    ctx.output.header("Cart");
    ctx.output.table_row(&["Qty", "Item", "Unit", "Subtotal"], &[4, 28, 10, 10]);
    for line in store.lines() {
        ctx.output.table_row(
            &[
                &line.quantity.to_string(),
                &line.name,
                &line.unit_price.display(),
                &line.subtotal().display(),
            ],
            &[4, 28, 10, 10],
        );
    }
    ctx.output.kv("Items", &store.item_count().to_string());
    ctx.output.kv("Total", &store.total().display());
}
