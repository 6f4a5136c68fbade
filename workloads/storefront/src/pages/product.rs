//! `/produk/:productId`: product detail.
//!
//! The lookup resolves before any byte is written so the status line can
//! tell a missing product (404) from a failed lookup (500). The detail view
//! is therefore streamed once, never as a skeleton.

use std::fmt::Display;

use futures::Sink;
use gudang_commerce::prelude::{DetailSelection, Product};
use gudang_sdk::gudang_core::{QueryParams, WorkloadError};
use gudang_sdk::gudang_observability::{MetricsCollector, StructuredLogger};
use gudang_sdk::gudang_streaming::StreamingSink;

use super::{page_shell, record_fetches, send_closing, send_static, PageEnv};
use crate::sections::*;

/// Terminal result of a product lookup.
#[derive(Debug)]
pub enum ProductOutcome {
    Found(Box<Product>),
    NotFound,
    Failed,
}

impl ProductOutcome {
    pub fn status(&self) -> u16 {
        match self {
            Self::Found(_) => 200,
            Self::NotFound => 404,
            Self::Failed => 500,
        }
    }
}

/// Look the product up and record the fetch.
pub async fn resolve_product(
    env: &PageEnv<'_>,
    metrics: &mut MetricsCollector,
    product_id: &str,
) -> ProductOutcome {
    let outcome = match env.store.get_product_by_id(product_id).await {
        Ok(Some(product)) => ProductOutcome::Found(Box::new(product)),
        Ok(None) => {
            env.logger
                .info_builder("Product not found")
                .field("product_id", product_id.to_string())
                .emit();
            ProductOutcome::NotFound
        }
        Err(e) => {
            env.logger
                .warn_builder("Product fetch failed")
                .field("product_id", product_id.to_string())
                .field_error(&e)
                .emit();
            ProductOutcome::Failed
        }
    };
    record_fetches(env, metrics);
    outcome
}

/// Rebuild the selection from the query string.
///
/// Starts from the initial state and applies `img`, `varian` and `desc`
/// through the selection operations, so stale or forged values are ignored.
pub fn selection_from_query(
    product: &Product,
    query: &QueryParams,
    logger: &StructuredLogger,
) -> DetailSelection {
    let mut selection = DetailSelection::initial(product);

    if let Some(image) = query
        .get("img")
        .and_then(|i| i.parse::<usize>().ok())
        .and_then(|i| product.images.get(i))
    {
        selection.select_image(product, image);
    }

    if let Some(value) = query.get("varian").filter(|v| !v.is_empty()) {
        if let Err(e) = selection.select_variant(product, value) {
            logger
                .debug_builder("Variant selection rejected")
                .field_error(&e)
                .emit();
        }
    }

    if query.get("desc").map(String::as_str) == Some("0") && selection.description_open {
        selection.toggle_description();
    }

    selection
}

/// Stream the detail page for a resolved lookup.
pub async fn render_product<S, E>(
    sink: &mut StreamingSink<S, E>,
    env: &PageEnv<'_>,
    metrics: &mut MetricsCollector,
    outcome: &ProductOutcome,
    query: &QueryParams,
) -> Result<(), WorkloadError>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    let site = env.site;
    let (title, html) = match outcome {
        ProductOutcome::Found(product) => {
            let selection = selection_from_query(product, query, env.logger);
            (
                product.name.clone(),
                render_product_detail(product, &selection, site),
            )
        }
        ProductOutcome::NotFound => (
            "Produk tidak ditemukan".to_string(),
            render_product_not_found(),
        ),
        ProductOutcome::Failed => ("Detail Produk".to_string(), render_product_detail_fallback()),
    };

    let shell = page_shell(
        site,
        &format!("{} | {}", title, site.store_name()),
        render_page_header("Detail Produk", "/katalog"),
    );
    sink.send_shell(&shell.render_opening()).await?;
    metrics.record_shell_sent();

    send_static(sink, metrics, "product-detail", &html).await?;
    send_closing(sink, &shell).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::testing::*;
    use futures::executor::block_on;
    use gudang_sdk::gudang_core::parse_query;
    use gudang_sdk::gudang_data::CatalogStore;

    fn page(product_id: &str, query: &str) -> (u16, String) {
        let site = site();
        let store = store();
        let logger = logger();
        let env = PageEnv { site: &site, store: &store, logger: &logger };
        let mut sink = vec_sink();
        let mut metrics = metrics();

        let outcome = block_on(resolve_product(&env, &mut metrics, product_id));
        block_on(render_product(&mut sink, &env, &mut metrics, &outcome, &parse_query(query)))
            .unwrap();
        (outcome.status(), body(sink.into_inner()))
    }

    #[test]
    fn test_unknown_id_is_not_found_without_skeleton() {
        let (status, html) = page("missing", "");
        assert_eq!(status, 404);
        assert!(html.contains("Produk tidak ditemukan."));
        assert!(html.contains(r#"<a href="/katalog">Kembali ke Katalog</a>"#));
        assert!(!html.contains(r#"class="skeleton"#));
        assert!(!html.contains(r#"id="slot-"#));
    }

    #[test]
    fn test_detail_starts_with_nothing_selected() {
        let (status, html) = page("p1", "");
        assert_eq!(status, 200);
        assert!(html.contains("<title>Boxer Pro | Gudang Pakaian Dalam</title>"));
        assert!(html.contains("Pilih Ukuran Dahulu"));
        assert!(html.contains(r#"href="/katalog" aria-label="Kembali""#));
    }

    #[test]
    fn test_query_transitions_apply() {
        let (_, html) = page("p1", "img=1&varian=L&desc=0");
        assert!(html.contains(r#"<div class="gallery-main"><img src="https://img/boxer-2.jpg""#));
        assert!(html.contains(r#"class="variant variant--selected""#));
        assert!(html.contains("Hubungi via WhatsApp"));
        assert!(!html.contains("<p>Katun</p>"));
    }

    #[test]
    fn test_out_of_stock_and_forged_values_are_ignored() {
        let logger = logger();
        let product = block_on(store().get_product_by_id("p1")).unwrap().unwrap();

        let selection = selection_from_query(&product, &parse_query("varian=S&img=9"), &logger);
        assert_eq!(selection.selected_variant, None);
        assert_eq!(selection.selected_image.as_deref(), Some("https://img/boxer.jpg"));

        let selection = selection_from_query(&product, &parse_query("varian=Z"), &logger);
        assert_eq!(selection.selected_variant, None);
        assert!(selection.description_open);
    }
}
