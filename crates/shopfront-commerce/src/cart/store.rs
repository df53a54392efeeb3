//! The cart store.

use crate::cart::line_item::merge_into;
use crate::cart::{CartPricing, CartStorage, LineItem, LineKey, Quantity};
use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::{ProductId, VariantId};
use crate::money::{Currency, Money};
use rust_decimal::Decimal;
use shopfront_cache::KeyValueStore;
use tracing::debug;

/// Owner of the cart's line items.
///
/// Lines are kept in the order they were first added and there is at most
/// one line per [`LineKey`]. Every mutation writes the full list back to
/// storage before returning.
///
/// # Example
///
/// ```rust
/// use rust_decimal::Decimal;
/// use shopfront_cache::MemoryStore;
/// use shopfront_commerce::prelude::*;
///
/// let mut cart = CartStore::open(MemoryStore::new());
/// let tee = Product::new(ProductId::new(1), "T-Shirt", Decimal::from(300));
///
/// cart.add(&tee, 2, None);
/// assert_eq!(cart.total_quantity(), 2);
/// assert_eq!(cart.total_amount(), Decimal::from(600));
/// ```
#[derive(Debug)]
pub struct CartStore<S: KeyValueStore> {
    items: Vec<LineItem>,
    storage: CartStorage<S>,
    currency: Currency,
}

impl<S: KeyValueStore> CartStore<S> {
    /// Open a cart persisted under the default key of `store`.
    pub fn open(store: S) -> Self {
        Self::with_storage(CartStorage::new(store))
    }

    /// Open a cart, restoring whatever `storage` holds.
    pub fn with_storage(storage: CartStorage<S>) -> Self {
        let items = storage.load();
        debug!(key = storage.key(), lines = items.len(), "restored cart");
        Self {
            items,
            storage,
            currency: Currency::default(),
        }
    }

    /// Set the currency used for [`Money`] totals.
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// The currency used for [`Money`] totals.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// The persistence layer.
    pub fn storage(&self) -> &CartStorage<S> {
        &self.storage
    }

    /// Add `quantity` of `product` with an optional variant selection.
    ///
    /// An existing line with the same key grows by the normalized quantity.
    /// Otherwise a new line is appended with a snapshot of `product`. Variant
    /// ids are not checked against the product.
    pub fn add(
        &mut self,
        product: &Product,
        quantity: impl Into<Quantity>,
        variant_id: Option<VariantId>,
    ) -> LineKey {
        let quantity = quantity.into();
        let item = LineItem::new(product.clone(), quantity, variant_id);
        let key = merge_into(&mut self.items, item);
        debug!(line = %key, quantity = quantity.get(), "added to cart");
        self.persist();
        key
    }

    /// Replace the quantity of an existing line.
    ///
    /// Quantities below 1 become 1; use [`CartStore::remove`] to drop a
    /// line. Returns `false` (and creates nothing) when no line matches.
    pub fn set_qty(
        &mut self,
        product_id: ProductId,
        quantity: impl Into<Quantity>,
        variant_id: Option<VariantId>,
    ) -> bool {
        let key = LineKey::new(product_id, variant_id);
        let quantity = quantity.into();
        let found = match self.items.iter_mut().find(|i| i.key() == key) {
            Some(item) => {
                item.quantity = quantity;
                true
            }
            None => false,
        };
        debug!(line = %key, quantity = quantity.get(), found, "set cart quantity");
        self.persist();
        found
    }

    /// Remove a line. Returns `false` when no line matches.
    pub fn remove(&mut self, product_id: ProductId, variant_id: Option<VariantId>) -> bool {
        let key = LineKey::new(product_id, variant_id);
        let len_before = self.items.len();
        self.items.retain(|i| i.key() != key);
        let removed = self.items.len() < len_before;
        debug!(line = %key, removed, "removed from cart");
        self.persist();
        removed
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.items.clear();
        debug!("cleared cart");
        self.persist();
    }

    /// Lines in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Look up a line by key.
    pub fn get(&self, key: &LineKey) -> Option<&LineItem> {
        self.items.iter().find(|i| &i.key() == key)
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all line quantities.
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity.get())).sum()
    }

    /// Sum of resolved unit price times quantity over all lines.
    ///
    /// Saturates at `Decimal::MAX`. [`CartStore::pricing`] reports the same
    /// overflow as [`CommerceError::Overflow`].
    pub fn total_amount(&self) -> Decimal {
        self.items
            .iter()
            .fold(Decimal::ZERO, |acc, i| acc.saturating_add(i.subtotal()))
    }

    /// [`CartStore::total_amount`] in the cart currency.
    pub fn total_money(&self) -> Money {
        Money::new(self.total_amount(), self.currency)
    }

    /// Full pricing breakdown in the cart currency.
    pub fn pricing(&self) -> Result<CartPricing, CommerceError> {
        CartPricing::calculate(&self.items, self.currency)
    }

    fn persist(&self) {
        self.storage.save(&self.items);
    }
}
