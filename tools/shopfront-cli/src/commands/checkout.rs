//! Validate the cart and print the order request.

use anyhow::{Context as _, Result};
use shopfront_commerce::checkout::{CustomerInfo, OrderRequest};

use super::CheckoutArgs;
use crate::context::Context;

/// Run the checkout command.
///
/// Nothing is sent: the request is printed for the caller to submit, and
/// the cart is left as it is.
pub fn run(args: CheckoutArgs, ctx: &Context) -> Result<()> {
    let cart = ctx.open_cart()?;
    let customer = CustomerInfo::new(args.name, args.phone, args.address);
    let request =
        OrderRequest::from_cart(&cart, &customer).context("Cart cannot be checked out")?;

    if ctx.output.is_json() {
        ctx.output.json(&request);
        return Ok(());
    }

    ctx.output.header("Order request");
    ctx.output.kv("Customer", &request.customer_name);
    ctx.output.kv("Phone", &request.customer_phone);
    ctx.output.kv("Pickup", &request.pickup_store_address);
    ctx.output.kv("Items", &request.total_quantity().to_string());
    ctx.output.amount("Total", &cart.total_money());
    println!();
    ctx.output.json(&request);
    ctx.output.success("Order request is valid");
    Ok(())
}
