//! Order-creation requests.

use crate::cart::{CartStore, LineItem};
use crate::error::CommerceError;
use crate::ids::{ProductId, VariantId};
use serde::{Deserialize, Serialize};
use shopfront_cache::KeyValueStore;

/// Largest quantity the order service accepts for one line.
pub const MAX_LINE_QUANTITY: u32 = 999;

/// Longest accepted customer name, in characters.
pub const MAX_CUSTOMER_NAME_CHARS: usize = 100;

/// Longest accepted customer phone number, in characters.
pub const MAX_CUSTOMER_PHONE_CHARS: usize = 30;

/// Who is ordering and where the parcel is picked up.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CustomerInfo {
    /// Customer name.
    pub name: String,
    /// Contact phone number.
    pub phone: String,
    /// Convenience-store pickup address.
    pub pickup_store_address: String,
}

impl CustomerInfo {
    /// Create customer info.
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        pickup_store_address: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            pickup_store_address: pickup_store_address.into(),
        }
    }
}

/// Body of the order-creation call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderRequest {
    pub customer_name: String,
    pub customer_phone: String,
    pub pickup_store_address: String,
    pub items: Vec<OrderRequestItem>,
}

/// One requested line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderRequestItem {
    pub product_id: ProductId,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant_id: Option<VariantId>,
}

impl OrderRequest {
    /// Build a request from the current contents of `cart`.
    pub fn from_cart<S: KeyValueStore>(
        cart: &CartStore<S>,
        customer: &CustomerInfo,
    ) -> Result<Self, CommerceError> {
        Self::from_items(cart.items(), customer)
    }

    /// Build a request from line items.
    ///
    /// Customer fields are trimmed. Fails on an empty item list, on a
    /// customer field the order service would reject, or on a line above
    /// [`MAX_LINE_QUANTITY`].
    pub fn from_items(items: &[LineItem], customer: &CustomerInfo) -> Result<Self, CommerceError> {
        if items.is_empty() {
            return Err(CommerceError::EmptyCart);
        }

        let customer_name = bounded_field("customer_name", &customer.name, Some(MAX_CUSTOMER_NAME_CHARS))?;
        let customer_phone =
            bounded_field("customer_phone", &customer.phone, Some(MAX_CUSTOMER_PHONE_CHARS))?;
        let pickup_store_address =
            bounded_field("pickup_store_address", &customer.pickup_store_address, None)?;

        let items = items
            .iter()
            .map(|item| {
                let quantity = item.quantity.get();
                if quantity > MAX_LINE_QUANTITY {
                    return Err(CommerceError::QuantityExceedsLimit {
                        line: item.display_name(),
                        quantity,
                        limit: MAX_LINE_QUANTITY,
                    });
                }
                Ok(OrderRequestItem {
                    product_id: item.product.id,
                    quantity,
                    variant_id: item.variant_id,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            customer_name,
            customer_phone,
            pickup_store_address,
            items,
        })
    }

    /// Sum of requested quantities.
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }
}

fn bounded_field(
    field: &'static str,
    value: &str,
    max_chars: Option<usize>,
) -> Result<String, CommerceError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(CommerceError::InvalidCustomerField {
            field,
            reason: "must not be blank".to_string(),
        });
    }
    if let Some(max) = max_chars {
        if value.chars().count() > max {
            return Err(CommerceError::InvalidCustomerField {
                field,
                reason: format!("must be at most {} characters", max),
            });
        }
    }
    Ok(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::Quantity;
    use crate::catalog::Product;
    use rust_decimal::Decimal;

    fn items() -> Vec<LineItem> {
        let card = Product::new(ProductId::new(5), "Card", Decimal::from(60));
        vec![
            LineItem::new(card.clone(), Quantity::from(2), None),
            LineItem::new(card, Quantity::from(1), Some(VariantId::new(7))),
        ]
    }

    fn customer() -> CustomerInfo {
        CustomerInfo::new(" Lin ", "0912345678", "7-11 Songshan Store")
    }

    #[test]
    fn test_request_shape() {
        let request = OrderRequest::from_items(&items(), &customer()).unwrap();
        assert_eq!(request.customer_name, "Lin");
        assert_eq!(request.total_quantity(), 3);

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "customer_name": "Lin",
                "customer_phone": "0912345678",
                "pickup_store_address": "7-11 Songshan Store",
                "items": [
                    {"product_id": 5, "quantity": 2},
                    {"product_id": 5, "quantity": 1, "variant_id": 7}
                ]
            })
        );
    }

    #[test]
    fn test_empty_cart_rejected() {
        let err = OrderRequest::from_items(&[], &customer()).unwrap_err();
        assert!(matches!(err, CommerceError::EmptyCart));
    }

    #[test]
    fn test_blank_fields_rejected() {
        let mut who = customer();
        who.name = "   ".to_string();
        let err = OrderRequest::from_items(&items(), &who).unwrap_err();
        assert!(matches!(
            err,
            CommerceError::InvalidCustomerField { field: "customer_name", .. }
        ));

        let mut who = customer();
        who.pickup_store_address = String::new();
        let err = OrderRequest::from_items(&items(), &who).unwrap_err();
        assert!(matches!(
            err,
            CommerceError::InvalidCustomerField { field: "pickup_store_address", .. }
        ));
    }

    #[test]
    fn test_field_length_limits() {
        let mut who = customer();
        who.name = "名".repeat(MAX_CUSTOMER_NAME_CHARS);
        assert!(OrderRequest::from_items(&items(), &who).is_ok());

        who.name.push('字');
        assert!(OrderRequest::from_items(&items(), &who).is_err());

        let mut who = customer();
        who.phone = "0".repeat(MAX_CUSTOMER_PHONE_CHARS + 1);
        let err = OrderRequest::from_items(&items(), &who).unwrap_err();
        assert!(matches!(
            err,
            CommerceError::InvalidCustomerField { field: "customer_phone", .. }
        ));
    }

    #[test]
    fn test_quantity_limit() {
        let mut lines = items();
        lines[0].quantity = Quantity::from(MAX_LINE_QUANTITY);
        assert!(OrderRequest::from_items(&lines, &customer()).is_ok());

        lines[0].quantity = Quantity::from(MAX_LINE_QUANTITY + 1);
        let err = OrderRequest::from_items(&lines, &customer()).unwrap_err();
        assert!(matches!(
            err,
            CommerceError::QuantityExceedsLimit { quantity: 1000, limit: 999, .. }
        ));
    }
}
