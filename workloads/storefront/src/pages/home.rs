//! Landing page.

use std::fmt::Display;

use futures::future::LocalBoxFuture;
use futures::stream::FuturesUnordered;
use futures::{FutureExt, Sink, StreamExt};
use gudang_commerce::prelude::{Banner, Brand, Product};
use gudang_sdk::gudang_core::WorkloadError;
use gudang_sdk::gudang_data::{DependencyTag, StoreError};
use gudang_sdk::gudang_observability::MetricsCollector;
use gudang_sdk::gudang_streaming::{Section, StreamingSink};

use super::{
    page_shell, record_fetches, send_closing, send_fill, send_placeholder, send_static, PageEnv,
};
use crate::sections::*;

/// One resolved home page fetch.
enum HomeFetch {
    Banners(Result<Vec<Banner>, StoreError>),
    Brands(Result<Vec<Brand>, StoreError>),
    Products(Result<Vec<Product>, StoreError>),
}

/// Stream the home page.
///
/// Static sections and skeleton slots go out in page order right after the
/// shell. The three collections are then fetched concurrently and each slot
/// is filled as soon as its own fetch resolves.
pub async fn render_home<S, E>(
    sink: &mut StreamingSink<S, E>,
    env: &PageEnv<'_>,
    metrics: &mut MetricsCollector,
) -> Result<(), WorkloadError>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    let site = env.site;
    let preview_limit = site.config.home.preview_limit;

    let shell = page_shell(site, site.store_name(), render_site_header(site));
    sink.send_shell(&shell.render_opening()).await?;
    metrics.record_shell_sent();
    env.logger.debug("Shell sent");

    let banners = Section::builder("banners")
        .depends_on(DependencyTag::Banners.name())
        .with_skeleton(render_banners_skeleton())
        .build();
    let brands = Section::builder("brands")
        .depends_on(DependencyTag::Brands.name())
        .with_skeleton(render_brands_skeleton())
        .build();
    let catalog = Section::builder("catalog-preview")
        .depends_on(DependencyTag::Products.name())
        .with_skeleton(render_catalog_preview_skeleton(preview_limit))
        .build();

    send_static(sink, metrics, "hero", &render_hero(site)).await?;
    send_placeholder(sink, metrics, &banners).await?;
    send_static(sink, metrics, "about", &render_about(site)).await?;
    send_placeholder(sink, metrics, &brands).await?;
    send_placeholder(sink, metrics, &catalog).await?;
    send_static(sink, metrics, "testimonials", &render_testimonials(site)).await?;
    send_static(sink, metrics, "contact", &render_contact(site)).await?;

    let store = env.store;
    let mut pending: FuturesUnordered<LocalBoxFuture<'_, HomeFetch>> = FuturesUnordered::new();
    pending.push(async move { HomeFetch::Banners(store.list_active_banners().await) }.boxed_local());
    pending.push(async move { HomeFetch::Brands(store.list_active_brands().await) }.boxed_local());
    pending.push(
        async move {
            HomeFetch::Products(store.list_recent_active_products(preview_limit).await)
        }
        .boxed_local(),
    );

    while let Some(fetched) = pending.next().await {
        let (section, result) = match fetched {
            HomeFetch::Banners(result) => (&banners, result.map(|b| render_banners(&b))),
            HomeFetch::Brands(result) => (&brands, result.map(|b| render_brands(&b))),
            HomeFetch::Products(result) => (
                &catalog,
                result.map(|p| render_catalog_preview(&p, site.currency)),
            ),
        };

        let (html, used_fallback) = match result {
            Ok(html) => (html, false),
            Err(e) => {
                env.logger
                    .warn_builder("Section fetch failed")
                    .field("section", section.name.clone())
                    .field_error(&e)
                    .emit();
                (home_fallback(&section.name), true)
            }
        };
        send_fill(sink, env, metrics, section, &html, used_fallback).await;
    }

    record_fetches(env, metrics);
    send_closing(sink, &shell).await
}

fn home_fallback(section: &str) -> String {
    match section {
        "banners" => render_banners_fallback(),
        "brands" => render_brands_fallback(),
        _ => render_catalog_preview_fallback(),
    }
}
