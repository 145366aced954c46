//! Config command: show and initialize CLI configuration.

use anyhow::{bail, Context as _, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::generate_default_config;
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show(ctx),
        ConfigCommand::Init { force } => init(force, ctx),
    }
}

fn show(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("API");
    ctx.output.kv("base_url", &ctx.config.api.base_url);
    ctx.output
        .kv("timeout_secs", &ctx.config.api.timeout_secs.to_string());
    ctx.output
        .kv("retries", &ctx.config.api.retries.to_string());

    ctx.output.header("Cart");
    ctx.output.kv("data_dir", &ctx.config.cart.data_dir);
    ctx.output.kv("storage_key", &ctx.config.cart.storage_key);

    ctx.output.header("Checkout");
    ctx.output
        .kv("fallback_whatsapp", &ctx.config.checkout.fallback_whatsapp);
    ctx.output.kv("currency", &ctx.config.checkout.currency);
    Ok(())
}

fn init(force: bool, ctx: &Context) -> Result<()> {
    let path = ctx.cwd.join("vitrine.toml");
    if path.exists() && !force {
        bail!(
            "{} already exists; pass --force to overwrite",
            path.display()
        );
    }

    std::fs::write(&path, generate_default_config())
        .with_context(|| format!("Failed to write {}", path.display()))?;
    ctx.output
        .success(&format!("Wrote {}", path.display()));
    Ok(())
}
