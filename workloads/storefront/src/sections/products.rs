//! Product cards: the home preview and the catalog results grid.

use gudang_commerce::prelude::{CatalogQuery, Currency, PriceDisplay, Product};
use gudang_sdk::gudang_streaming::escape_html;

/// Skeleton cards in the catalog page grid.
pub const CATALOG_SKELETON_CARDS: usize = 15;

/// URL of a product's detail page.
pub fn product_href(product: &Product) -> String {
    format!("/produk/{}", urlencoding::encode(product.id.as_str()))
}

/// Render one product card.
pub fn render_product_card(product: &Product, currency: Currency) -> String {
    let price = PriceDisplay::for_product(product, currency);

    let image = match product.primary_image() {
        Some(src) => format!(
            r#"<img src="{}" alt="{}" loading="lazy">"#,
            escape_html(src),
            escape_html(&product.name)
        ),
        None => String::new(),
    };
    let badge = price
        .discount_percent
        .map(|pct| format!(r#"<span class="badge">-{}%</span>"#, pct))
        .unwrap_or_default();
    let sizes = product
        .size_summary()
        .map(|s| format!(r#"<p class="card-sizes">{}</p>"#, escape_html(&s)))
        .unwrap_or_default();
    let original = price
        .original
        .map(|m| format!(r#"<p class="price-original">{}</p>"#, m.display()))
        .unwrap_or_default();
    let current_class = if price.is_on_sale() {
        "price-current price-current--sale"
    } else {
        "price-current"
    };

    format!(
        r#"<a class="card" href="{href}">
    <div class="card-image">{image}{badge}</div>
    <h3>{name}</h3>
    {sizes}
    <p class="card-description">{description}</p>
    {original}
    <p class="{current_class}">{current}</p>
</a>"#,
        href = escape_html(&product_href(product)),
        image = image,
        badge = badge,
        name = escape_html(&product.name),
        sizes = sizes,
        description = escape_html(&product.description),
        original = original,
        current_class = current_class,
        current = price.current.display()
    )
}

/// A grey placeholder card.
pub fn render_card_skeleton() -> String {
    r#"<div class="skeleton-card"><div class="skeleton-block skeleton-block--image"></div><div class="skeleton-block"></div><div class="skeleton-block"></div></div>"#
        .to_string()
}

fn render_grid(products: &[&Product], currency: Currency) -> String {
    let cards: String = products
        .iter()
        .map(|p| render_product_card(p, currency))
        .collect();
    format!(r#"<div class="product-grid">{}</div>"#, cards)
}

fn wrap_preview(inner: &str) -> String {
    format!(
        r#"<section id="catalog" class="section" data-section="catalog-preview">
    <div class="container">
        <h2 class="section-title">Katalog Produk</h2>
        <p class="section-lead">Temukan koleksi terbaru dan terlaris kami.</p>
        {}
    </div>
</section>"#,
        inner
    )
}

/// Render the home page catalog preview. "Selengkapnya" appears only when
/// there is something to see more of.
pub fn render_catalog_preview(products: &[Product], currency: Currency) -> String {
    let refs: Vec<&Product> = products.iter().collect();
    let more = if products.is_empty() {
        ""
    } else {
        r#"<div class="more"><a class="btn" href="/katalog">Selengkapnya</a></div>"#
    };
    wrap_preview(&format!("{}{}", render_grid(&refs, currency), more))
}

/// Skeleton shown while the preview loads.
pub fn render_catalog_preview_skeleton(cards: usize) -> String {
    wrap_preview(&format!(
        r#"<div class="product-grid">{}</div>"#,
        render_card_skeleton().repeat(cards)
    ))
}

/// Render preview failure.
pub fn render_catalog_preview_fallback() -> String {
    wrap_preview(r#"<p class="error">Gagal memuat produk.</p>"#)
}

/// Render the catalog page results for a query.
pub fn render_catalog_results(
    results: &[&Product],
    query: &CatalogQuery,
    currency: Currency,
) -> String {
    let body = if results.is_empty() {
        r#"<div class="empty">Tidak ada produk yang cocok dengan pencarian Anda.</div>"#.to_string()
    } else {
        render_grid(results, currency)
    };
    format!(
        r#"<section class="container" data-section="catalog-results" data-count="{count}" data-sort="{sort}">{body}</section>"#,
        count = results.len(),
        sort = query.sort.map(|s| s.as_str()).unwrap_or("none"),
        body = body
    )
}

/// Skeleton grid for the catalog page.
pub fn render_catalog_results_skeleton() -> String {
    format!(
        r#"<section class="container"><div class="product-grid">{}</div></section>"#,
        render_card_skeleton().repeat(CATALOG_SKELETON_CARDS)
    )
}

/// Render catalog failure.
pub fn render_catalog_results_fallback() -> String {
    r#"<section class="container" data-section="catalog-results"><p class="error">Gagal memuat produk. Silakan coba lagi nanti.</p></section>"#
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use gudang_commerce::prelude::SortOption;
    use serde_json::json;

    fn product(value: serde_json::Value) -> Product {
        serde_json::from_value(value).unwrap()
    }

    fn boxer() -> Product {
        product(json!({
            "id": "p1",
            "name": "Boxer Pro",
            "description": "Katun",
            "images": ["https://img/boxer.jpg"],
            "retailPrice": 100000,
            "discountPrice": 80000,
            "variants": [{ "type": "Ukuran", "values": [
                { "sku": "S", "value": "S", "stock": 1 },
                { "sku": "M", "value": "M", "stock": 0 }
            ] }]
        }))
    }

    #[test]
    fn test_discounted_card() {
        let html = render_product_card(&boxer(), Currency::IDR);
        assert!(html.contains(r#"<p class="price-current price-current--sale">Rp80.000</p>"#));
        assert!(html.contains(r#"<p class="price-original">Rp100.000</p>"#));
        assert!(html.contains(r#"<span class="badge">-20%</span>"#));
        assert!(html.contains(r#"<p class="card-sizes">S - M</p>"#));
        assert!(html.contains(r#"href="/produk/p1""#));
    }

    #[test]
    fn test_discount_not_lower_is_ignored() {
        let p = product(json!({ "id": "p2", "name": "Bra", "retailPrice": 50000, "discountPrice": 60000 }));
        let html = render_product_card(&p, Currency::IDR);
        assert!(html.contains(r#"<p class="price-current">Rp50.000</p>"#));
        assert!(!html.contains("price-original"));
        assert!(!html.contains("badge"));
    }

    #[test]
    fn test_href_escapes_reserved_characters() {
        let p = product(json!({ "id": "a b/c", "name": "X", "retailPrice": 1 }));
        assert_eq!(product_href(&p), "/produk/a%20b%2Fc");
    }

    #[test]
    fn test_preview_more_link_only_when_loaded() {
        assert!(render_catalog_preview(&[boxer()], Currency::IDR).contains("Selengkapnya"));
        assert!(!render_catalog_preview(&[], Currency::IDR).contains("Selengkapnya"));
        assert!(!render_catalog_preview_fallback().contains("Selengkapnya"));
    }

    #[test]
    fn test_catalog_results_states() {
        let query = CatalogQuery::new().with_sort(SortOption::PriceAsc);
        let empty = render_catalog_results(&[], &query, Currency::IDR);
        assert!(empty.contains("Tidak ada produk yang cocok dengan pencarian Anda."));

        let p = boxer();
        let html = render_catalog_results(&[&p], &query, Currency::IDR);
        assert!(html.contains(r#"data-count="1""#));
        assert!(html.contains(r#"data-sort="price-asc""#));

        assert_eq!(
            render_catalog_results_skeleton().matches("skeleton-card").count(),
            CATALOG_SKELETON_CARDS
        );
    }
}
