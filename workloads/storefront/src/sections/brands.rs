//! Brand logo marquee.

use gudang_commerce::prelude::Brand;
use gudang_sdk::gudang_streaming::escape_html;

const SKELETON_LOGOS: usize = 14;

fn wrap(inner: &str) -> String {
    format!(
        r#"<section id="brands" class="section" data-section="brands">
    <div class="container">
        <h2 class="section-title">Tersedia Berbagai Macam Merek</h2>
        <p class="section-lead">Kami hanya menyediakan produk original dari merek terpercaya.</p>
    </div>
    <div class="marquee">{}</div>
</section>"#,
        inner
    )
}

/// Render the brands marquee. The list is emitted twice so the scroll loops.
pub fn render_brands(brands: &[Brand]) -> String {
    let logos: String = brands
        .iter()
        .chain(brands.iter())
        .map(|brand| {
            format!(
                r#"<div class="brand"><img src="{}" alt="{}"></div>"#,
                escape_html(&brand.logo_url),
                escape_html(&brand.name)
            )
        })
        .collect();

    wrap(&format!(r#"<div class="marquee-track">{}</div>"#, logos))
}

/// Skeleton shown while brands load.
pub fn render_brands_skeleton() -> String {
    wrap(&r#"<div class="skeleton-logo"></div>"#.repeat(SKELETON_LOGOS))
}

/// Render brand failure.
pub fn render_brands_fallback() -> String {
    wrap(r#"<p class="error">Gagal memuat daftar merek.</p>"#)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gudang_commerce::prelude::BrandId;

    #[test]
    fn test_brands_are_duplicated() {
        let brands = vec![
            Brand {
                id: BrandId::new("g1"),
                name: "GT Man".to_string(),
                logo_url: "https://img/gt.png".to_string(),
                is_active: true,
            },
            Brand {
                id: BrandId::new("r1"),
                name: "Rider".to_string(),
                logo_url: "https://img/rider.png".to_string(),
                is_active: true,
            },
        ];
        let html = render_brands(&brands);
        assert_eq!(html.matches(r#"class="brand""#).count(), 4);
        assert_eq!(html.matches(r#"alt="Rider""#).count(), 2);
    }

    #[test]
    fn test_skeleton_and_fallback() {
        assert_eq!(
            render_brands_skeleton().matches("skeleton-logo").count(),
            SKELETON_LOGOS
        );
        assert!(render_brands_fallback().contains("Gagal memuat daftar merek."));
    }
}
