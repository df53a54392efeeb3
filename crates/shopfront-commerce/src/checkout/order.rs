//! Order types returned by the order service.

use crate::ids::{OrderId, OrderItemId, ProductId};
use crate::money::{Currency, Money};
use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Order status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// Placed, awaiting payment confirmation.
    #[default]
    New,
    /// Payment confirmed.
    Confirmed,
    /// Cancelled by the shop.
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::New => "NEW",
            OrderStatus::Confirmed => "CONFIRMED",
            OrderStatus::Cancelled => "CANCELLED",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::New => "New",
            OrderStatus::Confirmed => "Confirmed",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    /// Check if the order can still change status.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Cancelled)
    }
}

/// A placed order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    /// Order identifier.
    pub id: OrderId,
    /// Human-facing order number (e.g. `MKT-20240105-101500-AB12`).
    pub order_no: String,
    pub customer_name: String,
    pub customer_phone: String,
    pub pickup_store_address: String,
    /// Total charged, computed by the order service.
    pub total_amount: Decimal,
    #[serde(default)]
    pub status: OrderStatus,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    /// Bank transfer instructions, returned when the order is created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transfer: Option<TransferInfo>,
    /// Shop chat contact, returned when the order is created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<LineContact>,
}

impl Order {
    /// Total as [`Money`].
    pub fn total(&self, currency: Currency) -> Money {
        Money::new(self.total_amount, currency)
    }

    /// Sum of item quantities.
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Check that the item totals add up to the order total.
    pub fn is_consistent(&self) -> bool {
        let sum = self
            .items
            .iter()
            .try_fold(Decimal::ZERO, |acc, i| acc.checked_add(i.line_total));
        sum == Some(self.total_amount)
    }
}

/// A line of a placed order, with name and price frozen at order time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderItem {
    pub id: OrderItemId,
    /// Product, unless it has since been deleted.
    #[serde(default)]
    pub product: Option<ProductId>,
    pub product_name_snapshot: String,
    pub unit_price_snapshot: Decimal,
    pub quantity: u32,
    pub line_total: Decimal,
}

/// Where to send the bank transfer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransferInfo {
    /// Bank name and code (e.g. "Cathay 013").
    pub bank_name_code: String,
    pub bank_account: String,
    pub amount: Decimal,
}

/// The shop's LINE official account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LineContact {
    pub oa_id: String,
    pub chat_url: String,
    pub add_friend_url: String,
}
