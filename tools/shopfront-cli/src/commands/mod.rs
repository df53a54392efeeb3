//! CLI command implementations.

pub mod cart;
pub mod checkout;

use clap::{Args, Subcommand};
use shopfront_commerce::{ProductId, VariantId};

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    #[command(subcommand)]
    pub command: CartCommand,
}

/// Cart subcommands.
#[derive(Subcommand)]
pub enum CartCommand {
    /// Show cart lines and totals
    Show,

    /// Add a catalog product to the cart
    Add(AddArgs),

    /// Replace the quantity of a cart line
    SetQty(SetQtyArgs),

    /// Remove a cart line
    Remove(RemoveArgs),

    /// Remove every line
    Clear,
}

/// Arguments for `cart add`.
#[derive(Args)]
pub struct AddArgs {
    /// Product ID.
    pub product_id: ProductId,

    /// Quantity to add. Anything below 1 counts as 1.
    #[arg(short, long, default_value = "1", allow_hyphen_values = true)]
    pub qty: String,

    /// Variant ID. Defaults to the product's first active variant.
    #[arg(long)]
    pub variant: Option<VariantId>,
}

/// Arguments for `cart set-qty`.
#[derive(Args)]
pub struct SetQtyArgs {
    /// Product ID.
    pub product_id: ProductId,

    /// New quantity. Anything below 1 counts as 1.
    #[arg(allow_hyphen_values = true)]
    pub qty: String,

    /// Variant ID of the line.
    #[arg(long)]
    pub variant: Option<VariantId>,
}

/// Arguments for `cart remove`.
#[derive(Args)]
pub struct RemoveArgs {
    /// Product ID.
    pub product_id: ProductId,

    /// Variant ID of the line.
    #[arg(long)]
    pub variant: Option<VariantId>,
}

/// Arguments for the checkout command.
#[derive(Args)]
pub struct CheckoutArgs {
    /// Customer name.
    #[arg(long)]
    pub name: String,

    /// Contact phone number.
    #[arg(long)]
    pub phone: String,

    /// Convenience-store pickup address.
    #[arg(long)]
    pub address: String,
}
