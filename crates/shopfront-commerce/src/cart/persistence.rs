//! Best-effort cart persistence.

use crate::cart::line_item::merge_into;
use crate::cart::LineItem;
use shopfront_cache::{Cache, KeyValueStore};
use tracing::warn;

/// Key the cart is stored under unless configured otherwise.
pub const DEFAULT_CART_KEY: &str = "shopfront:cart";

/// Saves and restores the line-item list under a single key.
///
/// Neither direction ever fails: a write that the store rejects is dropped,
/// and anything unreadable loads as an empty cart. Both cases log at `warn`.
#[derive(Debug, Clone)]
pub struct CartStorage<S> {
    cache: Cache<S>,
    key: String,
}

impl<S: KeyValueStore> CartStorage<S> {
    /// Persist under [`DEFAULT_CART_KEY`].
    pub fn new(store: S) -> Self {
        Self::with_key(store, DEFAULT_CART_KEY)
    }

    /// Persist under a custom key.
    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            cache: Cache::new(store),
            key: key.into(),
        }
    }

    /// The storage key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Borrow the underlying store.
    pub fn store(&self) -> &S {
        self.cache.store()
    }

    /// Write `items` as a JSON list.
    pub fn save(&self, items: &[LineItem]) {
        if let Err(e) = self.cache.set(&self.key, items) {
            warn!(key = %self.key, error = %e, "failed to persist cart");
        }
    }

    /// Read the persisted list.
    ///
    /// Anything other than a list of well-formed records loads as an empty
    /// cart. Records sharing a line key are merged into the first one, and
    /// quantities below 1 are raised to 1 while decoding.
    pub fn load(&self) -> Vec<LineItem> {
        let records = match self.cache.get::<Vec<LineItem>>(&self.key) {
            Ok(Some(records)) => records,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!(key = %self.key, error = %e, "discarding unreadable persisted cart");
                return Vec::new();
            }
        };

        let mut items = Vec::with_capacity(records.len());
        for item in records {
            merge_into(&mut items, item);
        }
        items
    }
}
