//! Product catalog snapshots.
//!
//! These mirror what the catalog API returns. The cart copies a [`Product`]
//! at add-time, so nothing here is a live reference into the catalog.

mod product;
mod tag;

pub use product::{Product, ProductVariant};
pub use tag::Tag;
