//! Shopping cart module.
//!
//! Contains the cart store, line items keyed by product and variant, price
//! resolution and best-effort persistence.

mod key;
mod line_item;
mod persistence;
mod pricing;
mod quantity;
mod store;

pub use key::LineKey;
pub use line_item::LineItem;
pub use persistence::{CartStorage, DEFAULT_CART_KEY};
pub use pricing::{resolve_price, CartPricing, LinePricing};
pub use quantity::Quantity;
pub use store::CartStore;
