//! Price resolution and cart pricing breakdowns.

use crate::cart::{LineItem, LineKey};
use crate::error::CommerceError;
use crate::money::{Currency, Money};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Unit price for a line.
///
/// The selected variant's price applies whenever that variant exists in the
/// line's product snapshot, including a price of zero. Otherwise the base
/// price applies. Only the snapshot is consulted.
pub fn resolve_price(item: &LineItem) -> Decimal {
    item.product.price_for(item.variant_id)
}

/// Complete pricing breakdown for a cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartPricing {
    /// Sum of line subtotals.
    pub subtotal: Money,
    /// Shipping cost. Always zero: shipping is quoted separately.
    pub shipping_total: Money,
    /// Final total (subtotal + shipping).
    pub grand_total: Money,
    /// Per-line breakdown, in cart order.
    pub line_items: Vec<LinePricing>,
}

impl CartPricing {
    /// Price `items` in `currency`.
    ///
    /// Returns an error if arithmetic overflow occurs.
    pub fn calculate(items: &[LineItem], currency: Currency) -> Result<Self, CommerceError> {
        let line_items = items
            .iter()
            .map(|item| LinePricing::calculate(item, currency))
            .collect::<Result<Vec<_>, _>>()?;

        let subtotal = Money::try_sum(line_items.iter().map(|l| &l.subtotal), currency)?;
        let shipping_total = Money::zero(currency);
        let grand_total = subtotal.try_add(&shipping_total)?;

        Ok(Self {
            subtotal,
            shipping_total,
            grand_total,
            line_items,
        })
    }

    /// Sum of line quantities.
    pub fn total_quantity(&self) -> u64 {
        self.line_items.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Check if shipping adds anything to the total.
    pub fn has_shipping(&self) -> bool {
        !self.shipping_total.is_zero()
    }
}

/// Pricing breakdown for a single line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LinePricing {
    /// Line identity.
    pub key: LineKey,
    /// Display name.
    pub name: String,
    /// Resolved unit price.
    pub unit_price: Money,
    /// Quantity.
    pub quantity: u32,
    /// Subtotal (unit_price * quantity).
    pub subtotal: Money,
}

impl LinePricing {
    fn calculate(item: &LineItem, currency: Currency) -> Result<Self, CommerceError> {
        let unit_price = Money::new(item.unit_price(), currency);
        let quantity = item.quantity.get();
        Ok(Self {
            key: item.key(),
            name: item.display_name(),
            unit_price,
            quantity,
            subtotal: unit_price.try_multiply(quantity)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::Quantity;
    use crate::catalog::{Product, ProductVariant};
    use crate::ids::{ProductId, VariantId};

    fn line(price: u32, variant_price: Option<u32>, quantity: u32) -> LineItem {
        let mut product = Product::new(ProductId::new(1), "Tee", Decimal::from(price));
        let mut variant_id = None;
        if let Some(vp) = variant_price {
            product = product.with_variant(ProductVariant::new(
                VariantId::new(9),
                "Red",
                Decimal::from(vp),
            ));
            variant_id = Some(VariantId::new(9));
        }
        LineItem::new(product, Quantity::from(quantity), variant_id)
    }

    #[test]
    fn test_resolve_price_prefers_variant() {
        assert_eq!(resolve_price(&line(100, Some(120), 1)), Decimal::from(120));
        assert_eq!(resolve_price(&line(100, None, 1)), Decimal::from(100));
    }

    #[test]
    fn test_resolve_price_zero_variant() {
        assert_eq!(resolve_price(&line(100, Some(0), 1)), Decimal::ZERO);
    }

    #[test]
    fn test_resolve_price_unknown_variant() {
        let mut item = line(100, None, 1);
        item.variant_id = Some(VariantId::new(404));
        assert_eq!(resolve_price(&item), Decimal::from(100));
    }

    #[test]
    fn test_cart_pricing() {
        let items = vec![line(100, None, 2), line(50, Some(75), 3)];
        let pricing = CartPricing::calculate(&items, Currency::TWD).unwrap();

        assert_eq!(pricing.subtotal.amount, Decimal::from(425));
        assert_eq!(pricing.grand_total, pricing.subtotal);
        assert!(!pricing.has_shipping());
        assert_eq!(pricing.total_quantity(), 5);
        assert_eq!(pricing.line_items[1].name, "Tee - Red");
        assert_eq!(pricing.line_items[1].subtotal.display(), "NT$225");
    }

    #[test]
    fn test_empty_cart_pricing() {
        let pricing = CartPricing::calculate(&[], Currency::TWD).unwrap();
        assert!(pricing.grand_total.is_zero());
        assert!(pricing.line_items.is_empty());
    }
}
