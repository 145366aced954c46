//! Checkout command: hand the cart off as a WhatsApp order.

use anyhow::{bail, Context as _, Result};
use dialoguer::Input;
use vitrine_store::{CheckoutError, CheckoutFlow};

use super::orders::OrderReceipt;
use super::CheckoutArgs;
use crate::context::Context;

/// Run the checkout command.
pub async fn run(args: CheckoutArgs, ctx: &Context) -> Result<()> {
    let mut cart = ctx.cart_store()?;

    if cart.is_empty() {
        bail!("the cart is empty; add items before checking out");
    }

    let name = match args.name {
        Some(name) => name,
        None if ctx.output.is_json() => bail!("--name is required with --json"),
        None => Input::<String>::new()
            .with_prompt("Your name")
            .interact_text()?,
    };

    // Snapshot the lines for the receipt; submission clears the cart.
    let items: Vec<String> = cart
        .lines()
        .iter()
        .map(|line| format!("{}x {}", line.quantity, line.name))
        .collect();
    let total = cart.total().display();

    let flow = CheckoutFlow::new(ctx.http_api()?)
        .with_fallback_number(ctx.config.checkout.fallback_whatsapp.clone());

    let spinner = ctx.output.spinner("Submitting order...");
    let result = flow.submit(&mut cart, &name).await;
    spinner.finish_and_clear();

    let outcome = result.map_err(|e: CheckoutError| anyhow::anyhow!(e))?;

    let receipt = OrderReceipt {
        order_id: outcome.order_id.as_ref().map(|id| id.to_string()),
        customer_name: name,
        items,
        total,
        deep_link: outcome.deep_link.clone(),
        confirmed: outcome.confirmed,
        created_at: chrono::Utc::now(),
    };
    let path = save_receipt(&receipt, ctx)?;

    if ctx.output.is_json() {
        ctx.output.json(&receipt);
        return Ok(());
    }

    if outcome.confirmed {
        match &outcome.order_id {
            Some(id) => ctx.output.success(&format!("Order {} confirmed", id)),
            None => ctx.output.success("Order confirmed"),
        }
    } else {
        ctx.output
            .warn("Backend unavailable; order goes out over the fallback WhatsApp number");
    }

    ctx.output.header("Open this link to send your order");
    println!("{}", outcome.deep_link);
    ctx.output.kv("Receipt", &path);

    Ok(())
}

/// Write the receipt under the orders directory, named by timestamp.
fn save_receipt(receipt: &OrderReceipt, ctx: &Context) -> Result<String> {
    let dir = ctx.orders_dir()?;
    let stem = receipt.created_at.format("order-%Y%m%d-%H%M%S").to_string();
    let path = dir.join(format!("{}.json", stem));
    let content = serde_json::to_string_pretty(receipt)?;
    std::fs::write(&path, content)
        .with_context(|| format!("Failed to write receipt: {}", path.display()))?;
    Ok(path.display().to_string())
}
