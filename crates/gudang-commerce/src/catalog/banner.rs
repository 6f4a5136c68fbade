//! Promotional banners and brand logos shown on the home page.

use serde::{Deserialize, Serialize};

use crate::ids::{BannerId, BrandId};

/// A promotional banner.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Banner {
    pub id: BannerId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub photo_url: String,
    /// Target opened in a new tab; banners without one are not clickable.
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub is_active: bool,
}

impl Banner {
    /// Link target, ignoring blank values.
    pub fn target(&self) -> Option<&str> {
        self.link.as_deref().map(str::trim).filter(|l| !l.is_empty())
    }
}

/// A brand carried by the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    pub id: BrandId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub logo_url: String,
    #[serde(default)]
    pub is_active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_banner_target_ignores_blank_links() {
        let mut banner: Banner = serde_json::from_value(json!({
            "id": "b1",
            "name": "Promo",
            "photoUrl": "https://img/b1.jpg",
            "link": "  ",
            "isActive": true
        }))
        .unwrap();
        assert_eq!(banner.target(), None);

        banner.link = Some("https://shopee.co.id/gudangunderwear4".to_string());
        assert_eq!(banner.target(), Some("https://shopee.co.id/gudangunderwear4"));
    }

    #[test]
    fn test_brand_defaults_to_inactive() {
        let brand: Brand = serde_json::from_value(json!({"id": "x", "name": "Rider"})).unwrap();
        assert!(!brand.is_active);
        assert_eq!(brand.logo_url, "");
    }
}
