//! Cart line items.

use crate::cart::{resolve_price, LineKey, Quantity};
use crate::catalog::{Product, ProductVariant};
use crate::ids::VariantId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A line in the cart.
///
/// Holds a snapshot of the product taken when the line was first added, so
/// later catalog edits do not change what is already in the cart. Persists as
/// `{"product": {..}, "quantity": 2, "variantId": 5}`, with `variantId`
/// omitted when no variant is selected.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Product snapshot.
    pub product: Product,
    /// Quantity, at least 1.
    pub quantity: Quantity,
    /// Selected variant.
    #[serde(rename = "variantId", default, skip_serializing_if = "Option::is_none")]
    pub variant_id: Option<VariantId>,
}

impl LineItem {
    /// Create a line item.
    pub fn new(product: Product, quantity: Quantity, variant_id: Option<VariantId>) -> Self {
        Self {
            product,
            quantity,
            variant_id,
        }
    }

    /// Composite identity of this line.
    pub fn key(&self) -> LineKey {
        LineKey::new(self.product.id, self.variant_id)
    }

    /// Resolved unit price.
    pub fn unit_price(&self) -> Decimal {
        resolve_price(self)
    }

    /// Unit price times quantity, saturating at `Decimal::MAX`.
    pub fn subtotal(&self) -> Decimal {
        self.unit_price()
            .saturating_mul(Decimal::from(self.quantity.get()))
    }

    /// The selected variant, if it exists in the snapshot.
    pub fn selected_variant(&self) -> Option<&ProductVariant> {
        self.variant_id.and_then(|id| self.product.variant(id))
    }

    /// Name to show for this line.
    pub fn display_name(&self) -> String {
        self.product.display_name(self.variant_id)
    }
}

/// Fold `item` into `items`: an existing line with the same key absorbs the
/// quantity (keeping its snapshot), otherwise the item is appended.
pub(crate) fn merge_into(items: &mut Vec<LineItem>, item: LineItem) -> LineKey {
    let key = item.key();
    match items.iter_mut().find(|existing| existing.key() == key) {
        Some(existing) => existing.quantity = existing.quantity.saturating_add(item.quantity),
        None => items.push(item),
    }
    key
}
