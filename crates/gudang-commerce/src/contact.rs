//! WhatsApp contact-to-order links.

use serde::{Deserialize, Serialize};

/// The store's WhatsApp channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactChannel {
    /// Store name used in the greeting.
    pub store_name: String,
    /// Phone number in international format without "+".
    pub phone: String,
}

impl ContactChannel {
    pub fn new(store_name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            store_name: store_name.into(),
            phone: phone.into(),
        }
    }

    /// Pre-filled message asking about one product.
    ///
    /// `variant` is the `(group type, value)` pair the customer picked. The
    /// line is keyed by the lower-cased group type, so the usual `Ukuran`
    /// group reads `ukuran: *L*`.
    pub fn product_message(&self, product_name: &str, variant: Option<(&str, &str)>) -> String {
        let mut message = format!(
            "Halo {}, saya tertarik dengan produk {}",
            self.store_name, product_name
        );
        if let Some((kind, value)) = variant {
            message.push_str(&format!("\n{}: *{}*", kind.to_lowercase(), value));
        }
        message.push_str("\n\nApakah masih tersedia?");
        message
    }

    /// Greeting used by the general "Hubungi Kami" buttons.
    pub fn general_message(&self) -> String {
        format!("Halo {}, saya mau tanya soal produknya", self.store_name)
    }

    /// `https://wa.me/<phone>?text=<encoded message>`.
    pub fn link(&self, message: &str) -> String {
        format!(
            "https://wa.me/{}?text={}",
            self.phone,
            urlencoding::encode(message)
        )
    }

    /// Link for a product inquiry.
    pub fn product_link(&self, product_name: &str, variant: Option<(&str, &str)>) -> String {
        self.link(&self.product_message(product_name, variant))
    }

    /// Link for a general inquiry.
    pub fn general_link(&self) -> String {
        self.link(&self.general_message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn channel() -> ContactChannel {
        ContactChannel::new("Gudang Pakaian Dalam", "6281210132385")
    }

    #[test]
    fn test_product_message_with_variant() {
        let message = channel().product_message("Boxer Pro", Some(("Ukuran", "L")));
        assert_eq!(
            message,
            "Halo Gudang Pakaian Dalam, saya tertarik dengan produk Boxer Pro\nukuran: *L*\n\nApakah masih tersedia?"
        );
    }

    #[test]
    fn test_variant_line_names_the_group() {
        let message = channel().product_message("Bra Comfort", Some(("Warna", "Hitam")));
        assert!(message.contains("\nwarna: *Hitam*\n"));
        assert!(!message.contains("ukuran"));
    }

    #[test]
    fn test_product_message_without_variant() {
        let message = channel().product_message("Boxer Pro", None);
        assert!(!message.contains("ukuran"));
        assert!(message.ends_with("\n\nApakah masih tersedia?"));
    }

    #[test]
    fn test_link_is_percent_encoded() {
        let link = channel().product_link("Boxer Pro", Some(("Ukuran", "L")));
        assert!(link.starts_with("https://wa.me/6281210132385?text="));
        assert!(link.contains("Halo%20Gudang%20Pakaian%20Dalam%2C"));
        assert!(link.contains("%0Aukuran%3A%20%2AL%2A"));
        assert!(!link.contains(' '));
    }

    #[test]
    fn test_general_link() {
        let link = channel().general_link();
        assert!(link.ends_with("saya%20mau%20tanya%20soal%20produknya"));
    }
}
