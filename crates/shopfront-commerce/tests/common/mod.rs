//! Shared fixtures for integration tests.

#![allow(dead_code)]

use rust_decimal::Decimal;
use shopfront_cache::{CacheError, KeyValueStore};
use shopfront_commerce::prelude::*;

pub fn price(amount: &str) -> Decimal {
    amount.parse().unwrap()
}

/// Product 1 at base 100 with variants v1 (150) and v2 (0).
pub fn product_a() -> Product {
    Product::new(ProductId::new(1), "Product A", price("100"))
        .with_variant(ProductVariant::new(VariantId::new(1), "v1", price("150")))
        .with_variant(ProductVariant::new(VariantId::new(2), "v2", price("0")).with_order(1))
}

/// Product 2 at base 49.50, no variants.
pub fn product_b() -> Product {
    Product::new(ProductId::new(2), "Product B", price("49.50"))
}

/// A store whose every operation fails.
#[derive(Debug, Default)]
pub struct BrokenStore;

impl KeyValueStore for BrokenStore {
    fn get(&self, _key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        Err(CacheError::StoreError("storage unavailable".to_string()))
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), CacheError> {
        Err(CacheError::QuotaExceeded {
            key: key.to_string(),
            size: value.len(),
            limit: 0,
        })
    }

    fn delete(&self, _key: &str) -> Result<(), CacheError> {
        Err(CacheError::StoreError("storage unavailable".to_string()))
    }

    fn keys(&self) -> Result<Vec<String>, CacheError> {
        Err(CacheError::StoreError("storage unavailable".to_string()))
    }
}
