//! `/katalog`: searchable, sortable product grid.

use std::fmt::Display;

use futures::Sink;
use gudang_commerce::prelude::{filter_and_sort, CatalogQuery};
use gudang_sdk::gudang_core::WorkloadError;
use gudang_sdk::gudang_data::DependencyTag;
use gudang_sdk::gudang_observability::MetricsCollector;
use gudang_sdk::gudang_streaming::{Section, StreamingSink};

use super::{page_shell, record_fetches, send_closing, send_fill, send_placeholder, send_static, PageEnv};
use crate::sections::*;

/// Stream the catalog page for one query.
///
/// The full product list is fetched once per request; filtering and sorting
/// run over that snapshot.
pub async fn render_catalog<S, E>(
    sink: &mut StreamingSink<S, E>,
    env: &PageEnv<'_>,
    metrics: &mut MetricsCollector,
    query: &CatalogQuery,
) -> Result<(), WorkloadError>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    let site = env.site;
    let title = format!("Katalog Produk | {}", site.store_name());
    let shell = page_shell(site, &title, render_page_header("Katalog Produk", "/"));

    sink.send_shell(&shell.render_opening()).await?;
    metrics.record_shell_sent();

    send_static(sink, metrics, "search", &render_search_form(query)).await?;

    let results = Section::builder("catalog-results")
        .depends_on(DependencyTag::Products.name())
        .with_skeleton(render_catalog_results_skeleton())
        .build();
    send_placeholder(sink, metrics, &results).await?;

    let (html, used_fallback) = match env.store.list_all_products().await {
        Ok(products) => {
            let matched = filter_and_sort(&products, query);
            env.logger
                .debug_builder("Catalog filtered")
                .field("term", query.term.clone())
                .field_i64("total", products.len() as i64)
                .field_i64("matched", matched.len() as i64)
                .emit();
            (render_catalog_results(&matched, query, site.currency), false)
        }
        Err(e) => {
            env.logger
                .warn_builder("Products fetch failed")
                .field_error(&e)
                .emit();
            (render_catalog_results_fallback(), true)
        }
    };
    send_fill(sink, env, metrics, &results, &html, used_fallback).await;

    record_fetches(env, metrics);
    send_closing(sink, &shell).await
}
