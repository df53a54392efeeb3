//! Product and variant types.

use crate::catalog::Tag;
use crate::ids::{ProductId, VariantId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

/// A product as delivered by the catalog API.
///
/// Prices are exact decimals and travel as strings (`"120"`). The API also
/// sends a derived `has_variants` flag; it is ignored on input and recomputed
/// by [`Product::has_variants`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Base price, used when no variant is selected.
    pub price: Decimal,
    /// Whether the product is listed in the storefront.
    #[serde(default = "default_true")]
    pub is_active: bool,
    /// Image URL (may be empty).
    #[serde(default)]
    pub image_url: String,
    /// Free-form description (may be empty).
    #[serde(default)]
    pub description: String,
    /// Tags for filtering.
    #[serde(default)]
    pub tags: Vec<Tag>,
    /// Purchasable variants. Empty for products sold at the base price.
    #[serde(default)]
    pub variants: Vec<ProductVariant>,
}

impl Product {
    /// Create an active product with no variants.
    pub fn new(id: ProductId, name: impl Into<String>, price: Decimal) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            is_active: true,
            image_url: String::new(),
            description: String::new(),
            tags: Vec::new(),
            variants: Vec::new(),
        }
    }

    /// Add a variant.
    pub fn with_variant(mut self, variant: ProductVariant) -> Self {
        self.variants.push(variant);
        self
    }

    /// Add a tag, ignoring duplicates by id.
    pub fn with_tag(mut self, tag: Tag) -> Self {
        if !self.tags.iter().any(|t| t.id == tag.id) {
            self.tags.push(tag);
        }
        self
    }

    /// Check if the product is available for purchase.
    pub fn is_available(&self) -> bool {
        self.is_active
    }

    /// Whether a variant must be chosen to buy this product.
    pub fn has_variants(&self) -> bool {
        !self.variants.is_empty()
    }

    /// Look up a variant by id.
    pub fn variant(&self, id: VariantId) -> Option<&ProductVariant> {
        self.variants.iter().find(|v| v.id == id)
    }

    /// Variants sorted for display: by `order`, then by id.
    pub fn variants_in_display_order(&self) -> Vec<&ProductVariant> {
        let mut variants: Vec<&ProductVariant> = self.variants.iter().collect();
        variants.sort_by_key(|v| (v.order, v.id));
        variants
    }

    /// Active variants in display order.
    pub fn active_variants(&self) -> Vec<&ProductVariant> {
        self.variants_in_display_order()
            .into_iter()
            .filter(|v| v.is_active)
            .collect()
    }

    /// The variant preselected for a shopper: the first active one in display
    /// order, falling back to the first variant of any state.
    pub fn default_variant(&self) -> Option<&ProductVariant> {
        let ordered = self.variants_in_display_order();
        ordered
            .iter()
            .find(|v| v.is_active)
            .or_else(|| ordered.first())
            .copied()
    }

    /// Unit price for an optional variant selection.
    ///
    /// A selected variant that exists in this snapshot wins, whatever its
    /// price (including zero). An unknown or absent selection falls back to
    /// the base price.
    pub fn price_for(&self, variant_id: Option<VariantId>) -> Decimal {
        match variant_id.and_then(|id| self.variant(id)) {
            Some(variant) => variant.price,
            None => self.price,
        }
    }

    /// Name shown for a line: `"Product - Variant"` when the variant is known.
    pub fn display_name(&self, variant_id: Option<VariantId>) -> String {
        match variant_id.and_then(|id| self.variant(id)) {
            Some(variant) => format!("{} - {}", self.name, variant.name),
            None => self.name.clone(),
        }
    }
}

/// A purchasable variant of a product (e.g. a colour).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductVariant {
    /// Variant identifier, unique within its product.
    pub id: VariantId,
    /// Variant name (e.g. "Red"). Unique within its product.
    pub name: String,
    /// Price of this variant; overrides the product base price.
    pub price: Decimal,
    /// Image URL (may be empty).
    #[serde(default)]
    pub image_url: String,
    /// Whether shoppers can select this variant.
    #[serde(default = "default_true")]
    pub is_active: bool,
    /// Display position.
    #[serde(default)]
    pub order: u32,
}

impl ProductVariant {
    /// Create an active variant at position 0.
    pub fn new(id: VariantId, name: impl Into<String>, price: Decimal) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            image_url: String::new(),
            is_active: true,
            order: 0,
        }
    }

    /// Set the display position.
    pub fn with_order(mut self, order: u32) -> Self {
        self.order = order;
        self
    }

    /// Mark the variant inactive.
    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::TagId;

    fn tee() -> Product {
        Product::new(ProductId::new(1), "T-Shirt", Decimal::from(300))
            .with_variant(ProductVariant::new(VariantId::new(11), "Blue", Decimal::from(320)).with_order(2))
            .with_variant(ProductVariant::new(VariantId::new(10), "Red", Decimal::from(350)).with_order(1))
            .with_variant(
                ProductVariant::new(VariantId::new(12), "Green", Decimal::from(330))
                    .with_order(0)
                    .inactive(),
            )
    }

    #[test]
    fn test_product_creation() {
        let product = Product::new(ProductId::new(7), "Mug", Decimal::from(150));
        assert_eq!(product.name, "Mug");
        assert!(product.is_available());
        assert!(!product.has_variants());
    }

    #[test]
    fn test_variant_display_order() {
        let product = tee();
        let names: Vec<&str> = product
            .variants_in_display_order()
            .iter()
            .map(|v| v.name.as_str())
            .collect();
        assert_eq!(names, vec!["Green", "Red", "Blue"]);
    }

    #[test]
    fn test_default_variant_skips_inactive() {
        let product = tee();
        assert_eq!(product.default_variant().map(|v| v.id), Some(VariantId::new(10)));
    }

    #[test]
    fn test_default_variant_falls_back_to_first() {
        let product = Product::new(ProductId::new(2), "Poster", Decimal::from(90))
            .with_variant(ProductVariant::new(VariantId::new(5), "A2", Decimal::from(90)).inactive());
        assert_eq!(product.default_variant().map(|v| v.id), Some(VariantId::new(5)));
        assert!(Product::new(ProductId::new(3), "Pin", Decimal::from(20)).default_variant().is_none());
    }

    #[test]
    fn test_price_for() {
        let product = tee();
        assert_eq!(product.price_for(None), Decimal::from(300));
        assert_eq!(product.price_for(Some(VariantId::new(10))), Decimal::from(350));
        // Unknown variant falls back to base price.
        assert_eq!(product.price_for(Some(VariantId::new(99))), Decimal::from(300));
    }

    #[test]
    fn test_zero_priced_variant_is_honoured() {
        let product = Product::new(ProductId::new(4), "Sticker", Decimal::from(30))
            .with_variant(ProductVariant::new(VariantId::new(40), "Freebie", Decimal::ZERO));
        assert_eq!(product.price_for(Some(VariantId::new(40))), Decimal::ZERO);
    }

    #[test]
    fn test_display_name() {
        let product = tee();
        assert_eq!(product.display_name(Some(VariantId::new(10))), "T-Shirt - Red");
        assert_eq!(product.display_name(None), "T-Shirt");
        assert_eq!(product.display_name(Some(VariantId::new(99))), "T-Shirt");
    }

    #[test]
    fn test_deserialize_api_payload() {
        let json = r#"{
            "id": 3,
            "name": "Tote Bag",
            "price": "450",
            "is_active": true,
            "has_variants": true,
            "image_url": "https://example.com/tote.jpg",
            "description": "",
            "tags": [{"id": 1, "name": "bags"}],
            "variants": [
                {"id": 8, "name": "Canvas", "price": "450", "image_url": "", "is_active": true, "order": 0},
                {"id": 9, "name": "Leather", "price": "1200.50", "image_url": "", "is_active": false, "order": 1}
            ]
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, ProductId::new(3));
        assert_eq!(product.price, Decimal::from(450));
        assert!(product.has_variants());
        assert_eq!(product.tags, vec![Tag::new(TagId::new(1), "bags")]);
        assert_eq!(
            product.price_for(Some(VariantId::new(9))),
            "1200.50".parse::<Decimal>().unwrap()
        );
    }

    #[test]
    fn test_deserialize_without_variants() {
        let json = r#"{"id": 5, "name": "Card", "price": "60"}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert!(product.variants.is_empty());
        assert!(product.is_active);
    }

    #[test]
    fn test_price_serializes_as_string() {
        let product = Product::new(ProductId::new(6), "Badge", "12.50".parse().unwrap());
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["price"], "12.50");
    }
}
