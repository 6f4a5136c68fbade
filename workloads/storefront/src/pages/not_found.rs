//! Pages for requests no route accepts.

use std::fmt::Display;

use futures::Sink;
use gudang_sdk::gudang_core::WorkloadError;
use gudang_sdk::gudang_observability::MetricsCollector;
use gudang_sdk::gudang_streaming::StreamingSink;

use super::{page_shell, send_closing, send_static, PageEnv};
use crate::sections::render_page_header;

/// Why no page could be served.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteFailure {
    NotFound,
    MethodNotAllowed,
}

impl RouteFailure {
    pub fn status(&self) -> u16 {
        match self {
            Self::NotFound => 404,
            Self::MethodNotAllowed => 405,
        }
    }

    fn message(&self) -> &'static str {
        match self {
            Self::NotFound => "Halaman tidak ditemukan.",
            Self::MethodNotAllowed => "Metode tidak diizinkan.",
        }
    }
}

/// Stream the error page for an unroutable request.
pub async fn render_route_failure<S, E>(
    sink: &mut StreamingSink<S, E>,
    env: &PageEnv<'_>,
    metrics: &mut MetricsCollector,
    failure: RouteFailure,
) -> Result<(), WorkloadError>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    let site = env.site;
    let shell = page_shell(
        site,
        &format!("{} | {}", failure.status(), site.store_name()),
        render_page_header(site.store_name(), "/"),
    );
    sink.send_shell(&shell.render_opening()).await?;
    metrics.record_shell_sent();

    let html = format!(
        r#"<section class="container notice" data-section="route-failure">
    <h2>{}</h2>
    <a href="/">Kembali ke Beranda</a>
</section>
"#,
        failure.message()
    );
    send_static(sink, metrics, "route-failure", &html).await?;
    send_closing(sink, &shell).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::testing::*;
    use futures::executor::block_on;

    #[test]
    fn test_not_found_page() {
        let site = site();
        let store = store();
        let logger = logger();
        let env = PageEnv { site: &site, store: &store, logger: &logger };
        let mut sink = vec_sink();
        let mut metrics = metrics();

        block_on(render_route_failure(&mut sink, &env, &mut metrics, RouteFailure::NotFound))
            .unwrap();
        let html = body(sink.into_inner());
        assert!(html.contains("Halaman tidak ditemukan."));
        assert!(html.contains("<title>404 | Gudang Pakaian Dalam</title>"));
        assert_eq!(RouteFailure::MethodNotAllowed.status(), 405);
    }
}
