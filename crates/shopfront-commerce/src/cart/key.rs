//! Composite line identity.

use crate::ids::{ProductId, VariantId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a cart line: the product plus the optional variant selection.
///
/// A missing variant is its own key, distinct from every present variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LineKey {
    /// Product being purchased.
    pub product_id: ProductId,
    /// Selected variant, if any.
    pub variant_id: Option<VariantId>,
}

impl LineKey {
    /// Create a key.
    pub fn new(product_id: ProductId, variant_id: Option<VariantId>) -> Self {
        Self {
            product_id,
            variant_id,
        }
    }
}

/// Renders as `"<product>_<variant>"`, with `none` for a missing variant.
impl fmt::Display for LineKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.variant_id {
            Some(variant_id) => write!(f, "{}_{}", self.product_id, variant_id),
            None => write!(f, "{}_none", self.product_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_key_display() {
        let plain = LineKey::new(ProductId::new(12), None);
        let red = LineKey::new(ProductId::new(12), Some(VariantId::new(3)));
        assert_eq!(plain.to_string(), "12_none");
        assert_eq!(red.to_string(), "12_3");
    }

    #[test]
    fn test_absent_variant_is_distinct() {
        let plain = LineKey::new(ProductId::new(1), None);
        let variant = LineKey::new(ProductId::new(1), Some(VariantId::new(0)));
        assert_ne!(plain, variant);
    }
}
