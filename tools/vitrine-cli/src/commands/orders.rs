//! Orders command: inspect locally saved order receipts.
//!
//! Receipts are the CLI's record of past checkout handoffs. The backend
//! owns the real orders; these are what this client sent and when.

use anyhow::{bail, Context as _, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{OrdersArgs, OrdersCommand};
use crate::context::Context;
use crate::output::status_badge;

/// A locally saved record of one checkout handoff.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderReceipt {
    /// Backend order id, absent on the fallback path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    /// Name the order was placed under.
    pub customer_name: String,
    /// Human-readable line summaries ("2x Brigadeiro").
    pub items: Vec<String>,
    /// Formatted cart total at submission time.
    pub total: String,
    /// The WhatsApp deep link that was produced.
    pub deep_link: String,
    /// Whether the backend confirmed the order.
    pub confirmed: bool,
    /// When the handoff happened.
    pub created_at: DateTime<Utc>,
}

impl OrderReceipt {
    fn status(&self) -> &'static str {
        if self.confirmed {
            "confirmed"
        } else {
            "fallback"
        }
    }
}

/// Run the orders command.
pub async fn run(args: OrdersArgs, ctx: &Context) -> Result<()> {
    match args.command {
        Some(OrdersCommand::List) | None => list(args.limit, ctx),
        Some(OrdersCommand::Show { receipt }) => show(&receipt, ctx),
    }
}

fn list(limit: Option<usize>, ctx: &Context) -> Result<()> {
    let mut receipts = load_receipts(ctx)?;
    receipts.sort_by(|a, b| b.1.created_at.cmp(&a.1.created_at));
    if let Some(limit) = limit {
        receipts.truncate(limit);
    }

    if ctx.output.is_json() {
        let entries: Vec<&OrderReceipt> = receipts.iter().map(|(_, r)| r).collect();
        ctx.output.json(&entries);
        return Ok(());
    }

    if receipts.is_empty() {
        ctx.output.info("No order receipts yet.");
        return Ok(());
    }

    ctx.output.header("Order receipts");
    ctx.output.table_row(
        &["Receipt", "When", "Total", "Status"],
        &[24, 20, 10, 10],
    );
    for (stem, receipt) in &receipts {
        ctx.output.table_row(
            &[
                stem,
                &receipt.created_at.format("%Y-%m-%d %H:%M").to_string(),
                &receipt.total,
                &status_badge(receipt.status()),
            ],
            &[24, 20, 10, 10],
        );
    }
    Ok(())
}

fn show(stem: &str, ctx: &Context) -> Result<()> {
    let path = ctx.orders_dir()?.join(format!("{}.json", stem));
    if !path.exists() {
        bail!("no receipt named '{}'", stem);
    }
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read receipt: {}", path.display()))?;
    let receipt: OrderReceipt = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse receipt: {}", path.display()))?;

    if ctx.output.is_json() {
        ctx.output.json(&receipt);
        return Ok(());
    }

    ctx.output.header(stem);
    if let Some(id) = &receipt.order_id {
        ctx.output.kv("Order id", id);
    }
    ctx.output.kv("Customer", &receipt.customer_name);
    ctx.output.kv("Status", &status_badge(receipt.status()));
    ctx.output
        .kv("Placed", &receipt.created_at.to_rfc3339());
    ctx.output.kv("Total", &receipt.total);
    for item in &receipt.items {
        ctx.output.list_item(item);
    }
    ctx.output.kv("Link", &receipt.deep_link);
    Ok(())
}

/// Load every parsable receipt in the orders directory.
fn load_receipts(ctx: &Context) -> Result<Vec<(String, OrderReceipt)>> {
    let dir = ctx.orders_dir()?;
    let mut receipts = Vec::new();
    for entry in std::fs::read_dir(&dir)? {
        let path = entry?.path();
        if path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        let content = std::fs::read_to_string(&path)?;
        match serde_json::from_str::<OrderReceipt>(&content) {
            Ok(receipt) => receipts.push((stem.to_string(), receipt)),
            Err(e) => ctx
                .output
                .debug(&format!("skipping unreadable receipt {}: {}", stem, e)),
        }
    }
    Ok(receipts)
}
