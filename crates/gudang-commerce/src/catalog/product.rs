//! Product and variant types.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::CommerceError;
use crate::ids::ProductId;

/// Variant group type whose values are summarised on product cards.
pub const SIZE_VARIANT_TYPE: &str = "Ukuran";

/// A product in the catalog.
///
/// Records are read-only snapshots. Missing text fields decode as empty
/// strings so a half-filled record still renders.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Document id.
    pub id: ProductId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Image URLs; the first one is the default image.
    #[serde(default)]
    pub images: Vec<String>,
    /// Retail price in the smallest currency unit.
    #[serde(default, deserialize_with = "amount")]
    pub retail_price: i64,
    /// Optional discounted price in the smallest currency unit.
    #[serde(default, deserialize_with = "optional_amount")]
    pub discount_price: Option<i64>,
    #[serde(default)]
    pub variants: Vec<VariantGroup>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    /// Publication status; only used by queries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Creation timestamp (RFC 3339); only used by queries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// A named set of purchasable options (e.g. "Ukuran").
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VariantGroup {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub values: Vec<VariantValue>,
}

/// A single option inside a variant group.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VariantValue {
    #[serde(default)]
    pub sku: String,
    #[serde(default)]
    pub value: String,
    #[serde(default, deserialize_with = "stock")]
    pub stock: u32,
}

impl VariantValue {
    /// Whether this option can be selected.
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

impl Product {
    /// Build a product from a decoded document body.
    pub fn from_document(id: &str, mut fields: serde_json::Value) -> Result<Self, CommerceError> {
        if let Some(map) = fields.as_object_mut() {
            map.insert("id".to_string(), serde_json::Value::String(id.to_string()));
        }
        serde_json::from_value(fields).map_err(|e| CommerceError::InvalidRecord {
            id: id.to_string(),
            message: e.to_string(),
        })
    }

    /// Price used for sorting: the discount when present and non-zero,
    /// otherwise the retail price.
    pub fn listed_price(&self) -> i64 {
        match self.discount_price {
            Some(discount) if discount != 0 => discount,
            _ => self.retail_price,
        }
    }

    /// The discount price, only when set, non-zero and strictly lower than
    /// retail. A stored zero means no discount, as in `listed_price`.
    pub fn active_discount(&self) -> Option<i64> {
        self.discount_price
            .filter(|discount| *discount > 0 && *discount < self.retail_price)
    }

    /// Default image shown on cards and as the initial detail image.
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(|s| s.as_str())
    }

    /// The first variant group, which drives detail-page selection.
    pub fn primary_variant_group(&self) -> Option<&VariantGroup> {
        self.variants.first()
    }

    /// Find a variant group by its type name.
    pub fn variant_group(&self, kind: &str) -> Option<&VariantGroup> {
        self.variants.iter().find(|g| g.kind == kind)
    }

    /// Sizes joined for product cards, e.g. "S - M - L".
    pub fn size_summary(&self) -> Option<String> {
        let group = self.variant_group(SIZE_VARIANT_TYPE)?;
        if group.values.is_empty() {
            return None;
        }
        Some(
            group
                .values
                .iter()
                .map(|v| v.value.as_str())
                .collect::<Vec<_>>()
                .join(" - "),
        )
    }
}

/// Accept integers or floats for stored prices; floats are rounded.
fn amount<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    Ok(optional_amount(deserializer)?.unwrap_or(0))
}

fn optional_amount<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(number_to_i64))
}

fn stock<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(number_to_i64)
        .map(|n| n.clamp(0, u32::MAX as i64) as u32)
        .unwrap_or(0))
}

fn number_to_i64(value: &serde_json::Value) -> Option<i64> {
    match value {
        serde_json::Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.round() as i64)),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok().map(|f| f.round() as i64),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn boxer_pro() -> Product {
        Product::from_document(
            "p1",
            json!({
                "name": "Boxer Pro",
                "retailPrice": 100000,
                "discountPrice": 80000,
                "variants": [{
                    "type": "Ukuran",
                    "values": [
                        {"sku": "BP-M", "value": "M", "stock": 3},
                        {"sku": "BP-L", "value": "L", "stock": 0}
                    ]
                }]
            }),
        )
        .unwrap()
    }

    #[test]
    fn test_from_document_fills_defaults() {
        let product = Product::from_document("p9", json!({"retailPrice": 5000})).unwrap();
        assert_eq!(product.id.as_str(), "p9");
        assert_eq!(product.name, "");
        assert!(product.images.is_empty());
        assert!(product.variants.is_empty());
        assert_eq!(product.discount_price, None);
    }

    #[test]
    fn test_float_prices_are_rounded() {
        let product =
            Product::from_document("p2", json!({"retailPrice": 79999.6, "discountPrice": null}))
                .unwrap();
        assert_eq!(product.retail_price, 80000);
        assert_eq!(product.discount_price, None);
    }

    #[test]
    fn test_listed_price_prefers_nonzero_discount() {
        let mut product = boxer_pro();
        assert_eq!(product.listed_price(), 80000);

        product.discount_price = Some(0);
        assert_eq!(product.listed_price(), 100000);

        product.discount_price = None;
        assert_eq!(product.listed_price(), 100000);
    }

    #[test]
    fn test_active_discount_requires_lower_price() {
        let mut product = boxer_pro();
        assert_eq!(product.active_discount(), Some(80000));

        product.discount_price = Some(100000);
        assert_eq!(product.active_discount(), None);

        product.discount_price = Some(120000);
        assert_eq!(product.active_discount(), None);
    }

    #[test]
    fn test_size_summary() {
        assert_eq!(boxer_pro().size_summary().as_deref(), Some("M - L"));

        let plain = Product::from_document("p3", json!({"name": "Kaos"})).unwrap();
        assert_eq!(plain.size_summary(), None);
    }

    #[test]
    fn test_stock_flags() {
        let product = boxer_pro();
        let group = product.primary_variant_group().unwrap();
        assert!(group.values[0].in_stock());
        assert!(!group.values[1].in_stock());
    }
}
