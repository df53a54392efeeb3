//! Cart and checkout core for the Shopfront storefront.
//!
//! - **Catalog**: product and variant snapshots as served by the catalog API
//! - **Cart**: line items keyed by product and variant, price resolution,
//!   best-effort persistence
//! - **Checkout**: order requests, submission and the returned orders
//!
//! # Example
//!
//! ```rust
//! use rust_decimal::Decimal;
//! use shopfront_cache::MemoryStore;
//! use shopfront_commerce::prelude::*;
//!
//! let tee = Product::new(ProductId::new(1), "T-Shirt", Decimal::from(300))
//!     .with_variant(ProductVariant::new(VariantId::new(10), "Red", Decimal::from(350)));
//!
//! let store = MemoryStore::new();
//! let mut cart = CartStore::open(store.clone());
//! cart.add(&tee, 1, Some(VariantId::new(10)));
//! cart.add(&tee, 2, None);
//!
//! assert_eq!(cart.total_money().display(), "NT$950");
//!
//! // Another session on the same store sees the same cart.
//! let reopened = CartStore::open(store);
//! assert_eq!(reopened.items(), cart.items());
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Product, ProductVariant, Tag};

    // Cart
    pub use crate::cart::{
        resolve_price, CartPricing, CartStorage, CartStore, LineItem, LineKey, LinePricing,
        Quantity, DEFAULT_CART_KEY,
    };

    // Checkout
    pub use crate::checkout::{
        submit_order, CustomerInfo, LineContact, Order, OrderClient, OrderItem, OrderRequest,
        OrderRequestItem, OrderStatus, TransferInfo,
    };
}
