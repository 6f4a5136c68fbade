//! Display pricing for cards and the detail page.

use crate::catalog::Product;
use crate::money::{Currency, Money};

/// What a price block shows for one product.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceDisplay {
    /// Price the customer pays.
    pub current: Money,
    /// Retail price, struck through, only when a discount is active.
    pub original: Option<Money>,
    /// Rounded discount percentage for the "-N%" badge.
    pub discount_percent: Option<u32>,
}

impl PriceDisplay {
    /// Derive the price block for a product.
    pub fn for_product(product: &Product, currency: Currency) -> Self {
        let retail = Money::new(product.retail_price, currency);

        match product.active_discount() {
            Some(discount) => Self {
                current: Money::new(discount, currency),
                original: Some(retail),
                discount_percent: discount_percent(product.retail_price, discount),
            },
            None => Self {
                current: retail,
                original: None,
                discount_percent: None,
            },
        }
    }

    /// Whether the retail price should be struck through.
    pub fn is_on_sale(&self) -> bool {
        self.original.is_some()
    }
}

/// `round((retail - discount) / retail * 100)`; undefined for non-positive retail.
fn discount_percent(retail: i64, discount: i64) -> Option<u32> {
    if retail <= 0 {
        return None;
    }
    let percent = ((retail - discount) as f64 / retail as f64 * 100.0).round();
    Some(percent.clamp(0.0, 100.0) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ProductId;

    fn product(retail: i64, discount: Option<i64>) -> Product {
        Product {
            id: ProductId::new("p1"),
            name: "Boxer Pro".to_string(),
            description: String::new(),
            images: Vec::new(),
            retail_price: retail,
            discount_price: discount,
            variants: Vec::new(),
            brand: None,
            category: None,
            status: None,
            created_at: None,
        }
    }

    #[test]
    fn test_discounted_card_prices() {
        let price = PriceDisplay::for_product(&product(100000, Some(80000)), Currency::IDR);
        assert_eq!(price.current.display(), "Rp80.000");
        assert_eq!(price.original.map(|m| m.display()).as_deref(), Some("Rp100.000"));
        assert_eq!(price.discount_percent, Some(20));
        assert!(price.is_on_sale());
    }

    #[test]
    fn test_equal_discount_shows_retail_only() {
        let price = PriceDisplay::for_product(&product(100000, Some(100000)), Currency::IDR);
        assert_eq!(price.current.display(), "Rp100.000");
        assert_eq!(price.original, None);
        assert_eq!(price.discount_percent, None);
    }

    #[test]
    fn test_zero_discount_is_unset() {
        let product = product(100000, Some(0));
        let price = PriceDisplay::for_product(&product, Currency::IDR);
        assert_eq!(price.current.display(), "Rp100.000");
        assert_eq!(price.original, None);
        assert_eq!(price.discount_percent, None);
        assert_eq!(price.current.amount, product.listed_price());
    }

    #[test]
    fn test_no_discount() {
        let price = PriceDisplay::for_product(&product(59000, None), Currency::IDR);
        assert_eq!(price.current.amount, 59000);
        assert!(!price.is_on_sale());
    }

    #[test]
    fn test_percent_rounds_half_up() {
        // 12.5% off
        let price = PriceDisplay::for_product(&product(80000, Some(70000)), Currency::IDR);
        assert_eq!(price.discount_percent, Some(13));
    }
}
