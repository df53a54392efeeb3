//! Client-local key-value storage for Shopfront.
//!
//! Provides a small [`KeyValueStore`] trait with an in-memory and a
//! file-backed implementation, plus a typed [`Cache`] wrapper that handles
//! JSON serialization.
//!
//! # Example
//!
//! ```rust
//! use shopfront_cache::{Cache, MemoryStore};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Cart {
//!     items: Vec<String>,
//! }
//!
//! let cache = Cache::new(MemoryStore::new());
//!
//! // Store a value
//! cache.set("cart:local", &Cart { items: vec!["tea".into()] }).unwrap();
//!
//! // Retrieve a value
//! let cart: Option<Cart> = cache.get("cart:local").unwrap();
//! assert_eq!(cart.map(|c| c.items.len()), Some(1));
//!
//! // Delete a value
//! cache.delete("cart:local").unwrap();
//! ```

mod error;
mod file;
mod kv;
mod store;

pub use error::CacheError;
pub use file::FileStore;
pub use kv::Cache;
pub use store::{KeyValueStore, MemoryStore};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cache, CacheError, FileStore, KeyValueStore, MemoryStore};
}
