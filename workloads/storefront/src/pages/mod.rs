//! Page orchestration: shell first, then sections in page order.
//!
//! Pages are generic over the byte sink so the component streams into
//! Spin's outgoing body while tests stream into a `Vec`.

mod catalog;
mod home;
mod not_found;
mod product;

pub use catalog::*;
pub use home::*;
pub use not_found::*;
pub use product::*;

use std::fmt::Display;

use futures::Sink;
use gudang_sdk::gudang_core::WorkloadError;
use gudang_sdk::gudang_data::CatalogStore;
use gudang_sdk::gudang_observability::{MetricsCollector, StructuredLogger};
use gudang_sdk::gudang_streaming::{HeadContent, Section, Shell, StreamingSink};

use crate::sections::render_footer;
use crate::site::Site;
use crate::styles::{FONT_STYLESHEET, STYLES};

const FONT_ORIGINS: [&str; 2] = ["https://fonts.googleapis.com", "https://fonts.gstatic.com"];

/// Everything a page reads while rendering.
pub struct PageEnv<'a> {
    pub site: &'a Site,
    pub store: &'a dyn CatalogStore,
    pub logger: &'a StructuredLogger,
}

/// Shell shared by every page. `body_start` is the page's own header.
pub fn page_shell(site: &Site, title: &str, body_start: String) -> Shell {
    let mut head = HeadContent::new(title)
        .with_meta("viewport", "width=device-width, initial-scale=1")
        .with_meta(
            "description",
            &format!(
                "{} - distributor pakaian dalam multi-brand original",
                site.store_name()
            ),
        );
    for origin in FONT_ORIGINS {
        head = head.with_preconnect(origin);
    }
    let head = head
        .with_stylesheet(FONT_STYLESHEET)
        .with_style(STYLES)
        .with_slot_runtime();

    Shell::new(head)
        .with_body_start(format!("<body>\n{}<main>\n", body_start))
        .with_body_end(format!("</main>\n{}</body>\n</html>", render_footer(site)))
}

/// Send a section that needs no data.
async fn send_static<S, E>(
    sink: &mut StreamingSink<S, E>,
    metrics: &mut MetricsCollector,
    name: &str,
    html: &str,
) -> Result<(), WorkloadError>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    metrics.record_section_start(name);
    sink.send_section(name, html).await?;
    metrics.record_section_sent(name, Some(html.len()), false);
    Ok(())
}

/// Send a data section's skeleton slot. Its timing runs until the fill.
async fn send_placeholder<S, E>(
    sink: &mut StreamingSink<S, E>,
    metrics: &mut MetricsCollector,
    section: &Section,
) -> Result<(), WorkloadError>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    metrics.record_section_start(&section.name);
    sink.send_raw(section.placeholder().into_bytes()).await
}

/// Stream the final HTML into a slot, unless the client is already gone.
///
/// Results arriving after a failed write are dropped, never rendered.
async fn send_fill<S, E>(
    sink: &mut StreamingSink<S, E>,
    env: &PageEnv<'_>,
    metrics: &mut MetricsCollector,
    section: &Section,
    html: &str,
    used_fallback: bool,
) where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    if !sink.is_live() {
        env.logger
            .debug_builder("Dropping stale section")
            .field("section", section.name.clone())
            .emit();
        metrics.record_section_dropped(&section.name);
        return;
    }

    let fill = section.fill(html);
    match sink.send_section(&section.name, &fill).await {
        Ok(()) => metrics.record_section_sent(&section.name, Some(fill.len()), used_fallback),
        Err(e) => {
            env.logger
                .warn_builder("Section write failed")
                .field("section", section.name.clone())
                .field_error(&e)
                .emit();
            metrics.record_section_dropped(&section.name);
        }
    }
}

/// Send the closing HTML if anyone is still listening.
async fn send_closing<S, E>(sink: &mut StreamingSink<S, E>, shell: &Shell) -> Result<(), WorkloadError>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    if sink.is_live() {
        sink.send_raw(shell.render_closing().into_bytes()).await?;
    }
    Ok(())
}

/// Move the store's fetch log into the request metrics.
fn record_fetches(env: &PageEnv<'_>, metrics: &mut MetricsCollector) {
    for record in env.store.drain_fetch_records() {
        metrics.record_dependency(
            record.tag.name(),
            &record.target,
            record.duration,
            record.error,
        );
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::pin::Pin;
    use std::task::{Context, Poll};

    use futures::Sink;
    use gudang_sdk::gudang_core::{RequestId, SiteConfig, TimingContext};
    use gudang_sdk::gudang_data::MemoryStore;
    use gudang_sdk::gudang_observability::{LogLevel, MetricsCollector, StructuredLogger};
    use gudang_sdk::gudang_streaming::StreamingSink;

    use crate::site::Site;

    pub fn site() -> Site {
        Site::from_config(SiteConfig::default()).unwrap().with_year(2025)
    }

    pub fn logger() -> StructuredLogger {
        StructuredLogger::new(RequestId::from_string("test")).with_min_level(LogLevel::Error)
    }

    pub fn metrics() -> MetricsCollector {
        MetricsCollector::new(RequestId::from_string("test"))
    }

    pub fn vec_sink() -> StreamingSink<Vec<Vec<u8>>, std::convert::Infallible> {
        StreamingSink::new(Vec::new(), TimingContext::new())
    }

    pub fn body(chunks: Vec<Vec<u8>>) -> String {
        String::from_utf8(chunks.concat()).unwrap()
    }

    pub fn store() -> MemoryStore {
        MemoryStore::from_json_str(
            r#"{
                "banners": [
                    { "id": "b1", "name": "Promo", "photoUrl": "https://img/b1.jpg", "isActive": true }
                ],
                "brands": [
                    { "id": "g1", "name": "GT Man", "logoUrl": "https://img/gt.png", "isActive": true }
                ],
                "products": [
                    {
                        "id": "p1", "name": "Boxer Pro", "description": "Katun",
                        "retailPrice": 100000, "discountPrice": 80000, "status": "active",
                        "images": ["https://img/boxer.jpg", "https://img/boxer-2.jpg"],
                        "createdAt": "2025-01-02T00:00:00Z",
                        "variants": [{ "type": "Ukuran", "values": [
                            { "sku": "BP-S", "value": "S", "stock": 0 },
                            { "sku": "BP-M", "value": "M", "stock": 3 },
                            { "sku": "BP-L", "value": "L", "stock": 5 }
                        ] }]
                    },
                    {
                        "id": "p2", "name": "Bra Comfort", "description": "Busa tipis",
                        "retailPrice": 150000, "status": "active",
                        "createdAt": "2025-01-01T00:00:00Z"
                    }
                ]
            }"#,
        )
        .unwrap()
    }

    /// Accepts a fixed number of writes, then behaves like a closed socket.
    pub struct ClosingSink {
        pub accepted: Vec<Vec<u8>>,
        pub capacity: usize,
    }

    impl ClosingSink {
        pub fn new(capacity: usize) -> Self {
            Self {
                accepted: Vec::new(),
                capacity,
            }
        }
    }

    impl Sink<Vec<u8>> for ClosingSink {
        type Error = String;

        fn poll_ready(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Result<(), String>> {
            Poll::Ready(Ok(()))
        }

        fn start_send(mut self: Pin<&mut Self>, item: Vec<u8>) -> Result<(), String> {
            if self.accepted.len() >= self.capacity {
                return Err("connection reset".to_string());
            }
            self.accepted.push(item);
            Ok(())
        }

        fn poll_flush(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Result<(), String>> {
            Poll::Ready(Ok(()))
        }

        fn poll_close(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Result<(), String>> {
            Poll::Ready(Ok(()))
        }
    }
}
