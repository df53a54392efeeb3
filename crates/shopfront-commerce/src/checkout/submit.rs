//! Order submission.

use crate::cart::CartStore;
use crate::checkout::{CustomerInfo, Order, OrderRequest};
use crate::error::CommerceError;
use shopfront_cache::KeyValueStore;
use tracing::{debug, warn};

/// The remote order service.
pub trait OrderClient {
    /// Create an order.
    fn create_order(&self, request: &OrderRequest) -> Result<Order, CommerceError>;
}

impl<C: OrderClient + ?Sized> OrderClient for &C {
    fn create_order(&self, request: &OrderRequest) -> Result<Order, CommerceError> {
        (**self).create_order(request)
    }
}

/// Place an order for everything in `cart`.
///
/// The cart is cleared only after the order service accepts the order. On
/// any error, validation included, the cart is left as it was.
pub fn submit_order<S, C>(
    cart: &mut CartStore<S>,
    customer: &CustomerInfo,
    client: &C,
) -> Result<Order, CommerceError>
where
    S: KeyValueStore,
    C: OrderClient + ?Sized,
{
    let request = OrderRequest::from_cart(cart, customer)?;
    debug!(lines = request.items.len(), "submitting order");

    match client.create_order(&request) {
        Ok(order) => {
            debug!(order_no = %order.order_no, "order created");
            cart.clear();
            Ok(order)
        }
        Err(e) => {
            warn!(error = %e, "order submission failed, keeping cart");
            Err(e)
        }
    }
}
