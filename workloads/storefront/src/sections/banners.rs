//! Promotional banner slider.

use gudang_commerce::prelude::Banner;
use gudang_sdk::gudang_streaming::escape_html;

/// Render the banner slider. No banners renders nothing.
pub fn render_banners(banners: &[Banner]) -> String {
    if banners.is_empty() {
        return String::new();
    }

    let slides: String = banners
        .iter()
        .map(|banner| {
            let image = format!(
                r#"<img src="{}" alt="{}">"#,
                escape_html(&banner.photo_url),
                escape_html(&banner.name)
            );
            match banner.target() {
                Some(link) => format!(
                    r#"<a class="banner" href="{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
                    escape_html(link),
                    image
                ),
                None => format!(r#"<div class="banner">{}</div>"#, image),
            }
        })
        .collect();

    format!(
        r#"<section class="container" data-section="banners">
    <div class="banners">{}</div>
</section>"#,
        slides
    )
}

/// Skeleton shown while banners load.
pub fn render_banners_skeleton() -> String {
    r#"<section class="container"><div class="banners"><div class="banner skeleton-block"></div></div></section>"#
        .to_string()
}

/// Render banner failure.
pub fn render_banners_fallback() -> String {
    r#"<section class="container" data-section="banners">
    <p class="error">Gagal memuat banner. Silakan coba lagi nanti.</p>
</section>"#
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use gudang_commerce::prelude::BannerId;

    fn banner(id: &str, link: Option<&str>) -> Banner {
        Banner {
            id: BannerId::new(id),
            name: format!("Promo {}", id),
            photo_url: format!("https://img/{}.jpg", id),
            link: link.map(str::to_string),
            is_active: true,
        }
    }

    #[test]
    fn test_empty_renders_nothing() {
        assert_eq!(render_banners(&[]), "");
    }

    #[test]
    fn test_linked_banner_opens_new_tab() {
        let html = render_banners(&[banner("b1", Some("https://promo"))]);
        assert!(html.contains(r#"<a class="banner" href="https://promo" target="_blank""#));
    }

    #[test]
    fn test_unlinked_banner_is_not_clickable() {
        let html = render_banners(&[banner("b2", None), banner("b3", Some("  "))]);
        assert!(!html.contains("<a "));
        assert_eq!(html.matches(r#"<div class="banner">"#).count(), 2);
    }
}
