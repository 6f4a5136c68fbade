//! Product detail view and its terminal states.
//!
//! Every interactive control is a plain link that re-requests the page with
//! the new selection in the query string (`img`, `varian`, `desc`).
//! Unavailable variants and the disabled contact button carry no link.

use gudang_commerce::prelude::{
    variant_label, ContactAction, Currency, DetailSelection, PriceDisplay, Product,
};
use gudang_sdk::gudang_streaming::escape_html;

use crate::sections::products::product_href;
use crate::site::Site;

/// Link back to the same product with a given selection.
///
/// Defaults (first image, no variant, description open) are left out of
/// the query string.
pub fn detail_href(
    product: &Product,
    image_index: usize,
    variant: Option<&str>,
    description_open: bool,
) -> String {
    let mut params = Vec::new();
    if image_index > 0 {
        params.push(format!("img={}", image_index));
    }
    if let Some(value) = variant {
        params.push(format!("varian={}", urlencoding::encode(value)));
    }
    if !description_open {
        params.push("desc=0".to_string());
    }

    let base = product_href(product);
    if params.is_empty() {
        base
    } else {
        format!("{}?{}", base, params.join("&"))
    }
}

fn selected_image_index(product: &Product, selection: &DetailSelection) -> usize {
    selection
        .selected_image
        .as_deref()
        .and_then(|img| product.images.iter().position(|i| i == img))
        .unwrap_or(0)
}

fn render_gallery(product: &Product, selection: &DetailSelection) -> String {
    let main = match &selection.selected_image {
        Some(src) => format!(
            r#"<img src="{}" alt="{}">"#,
            escape_html(src),
            escape_html(&product.name)
        ),
        None => String::new(),
    };

    let current = selected_image_index(product, selection);
    let thumbnails: String = product
        .images
        .iter()
        .enumerate()
        .map(|(index, src)| {
            let class = if index == current {
                "thumbnail thumbnail--selected"
            } else {
                "thumbnail"
            };
            format!(
                r#"<a class="{class}" href="{href}"><img src="{src}" alt="Thumbnail {n}"></a>"#,
                class = class,
                href = escape_html(&detail_href(
                    product,
                    index,
                    selection.selected_variant.as_deref(),
                    selection.description_open
                )),
                src = escape_html(src),
                n = index + 1
            )
        })
        .collect();

    let thumbnails = if product.images.len() > 1 {
        format!(r#"<div class="thumbnails">{}</div>"#, thumbnails)
    } else {
        String::new()
    };

    format!(
        r#"<div class="gallery"><div class="gallery-main">{}</div>{}</div>"#,
        main, thumbnails
    )
}

fn render_price(product: &Product, currency: Currency) -> String {
    let price = PriceDisplay::for_product(product, currency);
    let original = price
        .original
        .map(|m| format!(r#"<p class="price-original">{}</p>"#, m.display()))
        .unwrap_or_default();
    format!(
        r#"<div class="detail-price"><p class="price-current">{}</p>{}</div>"#,
        price.current.display(),
        original
    )
}

fn render_variants(product: &Product, selection: &DetailSelection) -> String {
    let choices = selection.variant_choices(product);
    if choices.is_empty() {
        return String::new();
    }

    let image_index = selected_image_index(product, selection);
    let controls: String = choices
        .iter()
        .map(|choice| {
            let value = escape_html(&choice.value);
            if !choice.available {
                format!(
                    r#"<button class="variant" type="button" disabled aria-disabled="true">{}</button>"#,
                    value
                )
            } else {
                let class = if choice.selected {
                    "variant variant--selected"
                } else {
                    "variant"
                };
                format!(
                    r#"<a class="{}" href="{}" aria-pressed="{}">{}</a>"#,
                    class,
                    escape_html(&detail_href(
                        product,
                        image_index,
                        Some(&choice.value),
                        selection.description_open
                    )),
                    choice.selected,
                    value
                )
            }
        })
        .collect();

    format!(
        r#"<div class="variant-group"><h3>{}</h3><div class="variants">{}</div></div>"#,
        escape_html(variant_label(product)),
        controls
    )
}

fn render_description(product: &Product, selection: &DetailSelection) -> String {
    let toggle_href = detail_href(
        product,
        selected_image_index(product, selection),
        selection.selected_variant.as_deref(),
        !selection.description_open,
    );
    let (icon, body) = if selection.description_open {
        ("&minus;", format!("<p>{}</p>", escape_html(&product.description)))
    } else {
        ("+", String::new())
    };

    format!(
        r#"<div class="description"><a class="description-toggle" href="{href}" aria-expanded="{open}"><span>Deskripsi</span><span>{icon}</span></a>{body}</div>"#,
        href = escape_html(&toggle_href),
        open = selection.description_open,
        icon = icon,
        body = body
    )
}

fn render_contact_action(product: &Product, selection: &DetailSelection, site: &Site) -> String {
    match selection.contact_action(product, &site.contact) {
        ContactAction::Enabled { href } => format!(
            r#"<a class="btn cta" href="{}" target="_blank" rel="noopener noreferrer">Hubungi via WhatsApp</a>"#,
            escape_html(&href)
        ),
        ContactAction::Disabled { label } => format!(
            r#"<button class="btn cta btn--disabled" type="button" disabled aria-disabled="true">{}</button>"#,
            escape_html(&label)
        ),
    }
}

/// Render the full detail view for a loaded product.
pub fn render_product_detail(product: &Product, selection: &DetailSelection, site: &Site) -> String {
    format!(
        r#"<section class="container detail" data-section="product-detail" data-product="{id}">
    {gallery}
    <div>
        <h1>{name}</h1>
        {price}
        {variants}
        {description}
        {cta}
    </div>
</section>
"#,
        id = escape_html(product.id.as_str()),
        gallery = render_gallery(product, selection),
        name = escape_html(&product.name),
        price = render_price(product, site.currency),
        variants = render_variants(product, selection),
        description = render_description(product, selection),
        cta = render_contact_action(product, selection, site)
    )
}

/// The lookup found no record.
pub fn render_product_not_found() -> String {
    r#"<section class="container notice" data-section="product-detail">
    <h2>Produk tidak ditemukan.</h2>
    <a href="/katalog">Kembali ke Katalog</a>
</section>
"#
    .to_string()
}

/// The lookup itself failed.
pub fn render_product_detail_fallback() -> String {
    r#"<section class="container notice" data-section="product-detail">
    <p class="error">Gagal memuat produk. Silakan coba lagi nanti.</p>
    <a href="/katalog">Kembali ke Katalog</a>
</section>
"#
    .to_string()
}
