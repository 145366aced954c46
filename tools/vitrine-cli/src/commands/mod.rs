//! CLI command implementations.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod orders;

use clap::{Args, Subcommand};

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    #[command(subcommand)]
    pub command: Option<CatalogCommand>,
}

#[derive(Subcommand)]
pub enum CatalogCommand {
    /// Fetch and display the catalog.
    List,
    /// Move a category to a new position in the category list.
    MoveCategory {
        /// Current 0-based position.
        from: usize,
        /// Destination 0-based position.
        to: usize,
    },
    /// Move a product to a new position within its category.
    MoveProduct {
        /// Category the product belongs to.
        category_id: String,
        /// Current 0-based position within the category.
        from: usize,
        /// Destination 0-based position within the category.
        to: usize,
    },
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    #[command(subcommand)]
    pub command: CartCommand,
}

#[derive(Subcommand)]
pub enum CartCommand {
    /// Add one of an item (insert or increment).
    Add {
        /// Product id.
        id: String,

        /// Product name, snapshotted onto the line.
        #[arg(short, long)]
        name: String,

        /// Unit price as a decimal (e.g., 3.50).
        #[arg(short, long)]
        price: f64,

        /// Product image URL.
        #[arg(long)]
        image_url: Option<String>,
    },
    /// Press "+" on an item (same as add).
    Inc {
        /// Product id.
        id: String,

        /// Product name, used if the line does not exist yet.
        #[arg(short, long)]
        name: String,

        /// Unit price as a decimal, used if the line does not exist yet.
        #[arg(short, long)]
        price: f64,
    },
    /// Press "-" on an item (decrement; removes at quantity 1).
    Dec {
        /// Product id.
        id: String,
    },
    /// Set an item's absolute quantity (0 removes it).
    Set {
        /// Product id.
        id: String,
        /// New quantity.
        quantity: u32,
    },
    /// Remove an item.
    Remove {
        /// Product id.
        id: String,
    },
    /// Show the cart.
    Show,
    /// Empty the cart.
    Clear {
        /// Skip confirmation.
        #[arg(short, long)]
        yes: bool,
    },
}

/// Arguments for the checkout command.
#[derive(Args)]
pub struct CheckoutArgs {
    /// Customer name (prompted for if absent).
    #[arg(short, long)]
    pub name: Option<String>,
}

/// Arguments for the orders command.
#[derive(Args)]
pub struct OrdersArgs {
    #[command(subcommand)]
    pub command: Option<OrdersCommand>,

    /// Show only the last N receipts.
    #[arg(short, long)]
    pub limit: Option<usize>,
}

#[derive(Subcommand)]
pub enum OrdersCommand {
    /// List local order receipts.
    List,
    /// Show details for a specific receipt.
    Show {
        /// Receipt name (file stem).
        receipt: String,
    },
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show the current configuration.
    Show,
    /// Generate a default vitrine.toml.
    Init {
        /// Overwrite an existing file.
        #[arg(short, long)]
        force: bool,
    },
}
