//! Checkout module.
//!
//! Turns a cart into an order-creation request, hands it to the order
//! service and describes the order it returns.

mod order;
mod request;
mod submit;

pub use order::{LineContact, Order, OrderItem, OrderStatus, TransferInfo};
pub use request::{
    CustomerInfo, OrderRequest, OrderRequestItem, MAX_CUSTOMER_NAME_CHARS, MAX_CUSTOMER_PHONE_CHARS,
    MAX_LINE_QUANTITY,
};
pub use submit::{submit_order, OrderClient};
