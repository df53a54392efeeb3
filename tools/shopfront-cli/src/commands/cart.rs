//! Inspect and edit the cart.

use anyhow::{anyhow, bail, Result};
use shopfront_cache::KeyValueStore;
use shopfront_commerce::cart::{CartStore, LineKey, Quantity};
use shopfront_commerce::catalog::Product;
use shopfront_commerce::VariantId;

use super::{AddArgs, CartArgs, CartCommand, RemoveArgs, SetQtyArgs};
use crate::context::Context;

/// Run the cart command.
pub fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    let mut cart = ctx.open_cart()?;

    match args.command {
        CartCommand::Show => {}
        CartCommand::Add(args) => add(&mut cart, args, ctx)?,
        CartCommand::SetQty(args) => set_qty(&mut cart, args, ctx),
        CartCommand::Remove(args) => remove(&mut cart, args, ctx),
        CartCommand::Clear => {
            cart.clear();
            ctx.output.success("Cart cleared");
        }
    }

    show(&cart, ctx)
}

fn add<S: KeyValueStore>(cart: &mut CartStore<S>, args: AddArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.load_catalog()?;
    let product = catalog
        .iter()
        .find(|p| p.id == args.product_id)
        .ok_or_else(|| anyhow!("Product {} not found in catalog", args.product_id))?;
    if !product.is_available() {
        bail!("Product '{}' is not available", product.name);
    }

    let variant_id = select_variant(product, args.variant, ctx)?;
    let quantity = Quantity::parse(&args.qty);
    let key = cart.add(product, quantity, variant_id);

    ctx.output.success(&format!(
        "Added {} x {}",
        quantity,
        product.display_name(variant_id)
    ));
    ctx.output.debug(&format!("Line {}", key));
    Ok(())
}

/// Pick the variant to buy: the requested one if it is selectable, else the
/// product's default for products that have variants.
fn select_variant(
    product: &Product,
    requested: Option<VariantId>,
    ctx: &Context,
) -> Result<Option<VariantId>> {
    if let Some(id) = requested {
        let variant = product
            .variant(id)
            .ok_or_else(|| anyhow!("Product '{}' has no variant {}", product.name, id))?;
        if !variant.is_active {
            bail!("Variant '{}' of '{}' is not available", variant.name, product.name);
        }
        return Ok(Some(id));
    }

    if !product.has_variants() {
        return Ok(None);
    }

    match product.default_variant() {
        Some(variant) if variant.is_active => {
            ctx.output.info(&format!("Selected variant '{}'", variant.name));
            Ok(Some(variant.id))
        }
        _ => bail!("Product '{}' has no available variants", product.name),
    }
}

fn set_qty<S: KeyValueStore>(cart: &mut CartStore<S>, args: SetQtyArgs, ctx: &Context) {
    let key = LineKey::new(args.product_id, args.variant);
    let quantity = Quantity::parse(&args.qty);
    if cart.set_qty(args.product_id, quantity, args.variant) {
        ctx.output.success(&format!("Set {} to {}", key, quantity));
    } else {
        ctx.output.warn(&format!("No cart line {}", key));
    }
}

fn remove<S: KeyValueStore>(cart: &mut CartStore<S>, args: RemoveArgs, ctx: &Context) {
    let key = LineKey::new(args.product_id, args.variant);
    if cart.remove(args.product_id, args.variant) {
        ctx.output.success(&format!("Removed {}", key));
    } else {
        ctx.output.warn(&format!("No cart line {}", key));
    }
}

fn show<S: KeyValueStore>(cart: &CartStore<S>, ctx: &Context) -> Result<()> {
    let pricing = cart.pricing()?;

    if ctx.output.is_json() {
        ctx.output.json(&pricing);
        return Ok(());
    }

    if cart.is_empty() {
        ctx.output.info("Cart is empty");
        return Ok(());
    }

    ctx.output.header("Cart");
    let rows: Vec<Vec<String>> = pricing
        .line_items
        .iter()
        .map(|line| {
            vec![
                line.key.to_string(),
                line.name.clone(),
                line.quantity.to_string(),
                line.unit_price.display(),
                line.subtotal.display(),
            ]
        })
        .collect();
    ctx.output.table(&["LINE", "ITEM", "QTY", "PRICE", "SUBTOTAL"], &rows);

    println!();
    ctx.output.kv("Items", &pricing.total_quantity().to_string());
    ctx.output.amount("Total", &pricing.grand_total);
    Ok(())
}
