//! Gudang Pakaian Dalam storefront.
//!
//! One Spin component serves the home page, the catalog and product detail
//! pages. Every page streams its shell first; data-bound sections follow as
//! skeleton slots that are filled once their Firestore fetch resolves.

mod pages;
mod sections;
mod site;
mod styles;

use futures::SinkExt;
use spin_sdk::http::{Fields, IncomingRequest, OutgoingResponse, ResponseOutparam};
use spin_sdk::{http_component, variables};

use gudang_commerce::prelude::CatalogQuery;
use gudang_sdk::gudang_core::{
    Headers, Method, RequestContext, RouteConfig, SiteConfig, StatusCode, WorkloadManifest,
};
use gudang_sdk::gudang_data::{FirestoreStore, SpinTransport};
use gudang_sdk::gudang_observability::{MetricsCollector, StructuredLogger};
use gudang_sdk::gudang_streaming::StreamingSink;

use pages::*;
use site::Site;

const WORKLOAD: &str = "gudang-storefront";

/// Routes served by this component. Everything is read-only.
fn manifest() -> WorkloadManifest {
    WorkloadManifest::new(WORKLOAD, env!("CARGO_PKG_VERSION"))
        .with_route(RouteConfig::new("/", "home").with_methods(vec!["GET"]))
        .with_route(RouteConfig::new("/katalog", "catalog").with_methods(vec!["GET"]))
        .with_route(RouteConfig::new("/produk/:productId", "product").with_methods(vec!["GET"]))
}

/// What the request resolved to before headers go out.
enum Page {
    Home,
    Catalog(CatalogQuery),
    Product(ProductOutcome),
    Failure(RouteFailure),
}

impl Page {
    fn status(&self) -> u16 {
        match self {
            Page::Home | Page::Catalog(_) => 200,
            Page::Product(outcome) => outcome.status(),
            Page::Failure(failure) => failure.status(),
        }
    }
}

/// Defaults overlaid with Spin application variables.
fn resolve_site() -> anyhow::Result<Site> {
    let mut config = SiteConfig::default();
    config.apply_overrides(|key| variables::get(key).ok())?;
    Ok(Site::from_config(config)?)
}

fn core_method(method: &spin_sdk::http::Method) -> Method {
    use spin_sdk::http::Method as Spin;
    match method {
        Spin::Get => Method::GET,
        Spin::Head => Method::HEAD,
        Spin::Post => Method::POST,
        Spin::Put => Method::PUT,
        Spin::Delete => Method::DELETE,
        Spin::Connect => Method::CONNECT,
        Spin::Options => Method::OPTIONS,
        Spin::Trace => Method::TRACE,
        Spin::Patch => Method::PATCH,
        // Unparseable extension methods are still not GET.
        Spin::Other(other) => Method::from_bytes(other.as_bytes()).unwrap_or(Method::POST),
    }
}

fn request_headers(req: &IncomingRequest) -> Headers {
    req.headers()
        .entries()
        .into_iter()
        .map(|(name, value)| (name, String::from_utf8_lossy(&value).into_owned()))
        .collect()
}

async fn respond_plain(response_out: ResponseOutparam, status: u16, message: &str) {
    let header_list: Vec<(String, Vec<u8>)> =
        vec![("content-type".to_owned(), "text/plain; charset=utf-8".into())];
    let Ok(headers) = Fields::from_list(&header_list) else {
        return;
    };
    let response = OutgoingResponse::new(headers);
    let _ = response.set_status_code(status);
    let mut body = response.take_body();
    response_out.set(response);
    let _ = body.send(message.as_bytes().to_vec()).await;
}

/// Storefront HTTP handler.
#[http_component]
async fn handle(req: IncomingRequest, response_out: ResponseOutparam) {
    let path = req.path_with_query().unwrap_or_else(|| "/".to_string());
    let mut ctx =
        RequestContext::new(core_method(&req.method()), &path).with_headers(request_headers(&req));
    let request_id = ctx.request_id.clone();

    let site = match resolve_site() {
        Ok(site) => site,
        Err(e) => {
            StructuredLogger::new(request_id)
                .with_workload(WORKLOAD)
                .error_builder("Invalid site configuration")
                .field_error(&e)
                .emit();
            respond_plain(response_out, 500, "Konfigurasi toko tidak valid.").await;
            return;
        }
    };

    let logger = StructuredLogger::new(request_id.clone())
        .with_config(&site.config.log)
        .with_workload(WORKLOAD)
        .with_route(&ctx.path);

    let mut metrics = MetricsCollector::new(request_id.clone());
    metrics.set_workload(WORKLOAD);
    metrics.set_route(&ctx.path);

    logger
        .info_builder("Request started")
        .field("method", ctx.method.to_string())
        .field("user_agent", ctx.header("user-agent").unwrap_or_default().to_string())
        .emit();

    let store = FirestoreStore::new(SpinTransport, &site.config);
    let env = PageEnv {
        site: &site,
        store: &store,
        logger: &logger,
    };

    let page = match manifest().route_request(&mut ctx) {
        Ok(handler) => match handler.as_str() {
            "home" => Page::Home,
            "catalog" => Page::Catalog(CatalogQuery::from_params(
                ctx.query_param("q"),
                ctx.query_param("sort"),
            )),
            "product" => {
                let product_id = ctx.param("productId").unwrap_or_default().to_string();
                Page::Product(resolve_product(&env, &mut metrics, &product_id).await)
            }
            _ => Page::Failure(RouteFailure::NotFound),
        },
        Err(e) => {
            logger
                .info_builder("Request not routed")
                .field_error(&e)
                .emit();
            if e.status() == StatusCode::METHOD_NOT_ALLOWED {
                Page::Failure(RouteFailure::MethodNotAllowed)
            } else {
                Page::Failure(RouteFailure::NotFound)
            }
        }
    };
    let status = page.status();

    let mut header_list: Vec<(String, Vec<u8>)> = vec![
        ("content-type".to_owned(), "text/html; charset=utf-8".into()),
        ("x-request-id".to_owned(), request_id.to_string().into()),
    ];
    if matches!(page, Page::Failure(RouteFailure::MethodNotAllowed)) {
        header_list.push(("allow".to_owned(), "GET".into()));
    }

    let headers = match Fields::from_list(&header_list) {
        Ok(headers) => headers,
        Err(e) => {
            logger
                .error_builder("Invalid response headers")
                .field("error", format!("{:?}", e))
                .emit();
            return;
        }
    };
    let response = OutgoingResponse::new(headers);
    if response.set_status_code(status).is_err() {
        logger
            .error_builder("Invalid status code")
            .field_i64("status", i64::from(status))
            .emit();
    }

    let body = response.take_body();
    response_out.set(response);
    let mut sink = StreamingSink::new(body, ctx.timing.clone()).with_liveness(ctx.liveness.clone());

    let result = match &page {
        Page::Home => render_home(&mut sink, &env, &mut metrics).await,
        Page::Catalog(query) => render_catalog(&mut sink, &env, &mut metrics, query).await,
        Page::Product(outcome) => {
            render_product(&mut sink, &env, &mut metrics, outcome, &ctx.query).await
        }
        Page::Failure(failure) => {
            render_route_failure(&mut sink, &env, &mut metrics, *failure).await
        }
    };

    match result {
        Ok(()) if sink.is_live() => {
            if let Err(e) = sink.complete().await {
                logger
                    .warn_builder("Failed to complete response")
                    .field_error(&e)
                    .emit();
            }
        }
        Ok(()) => logger.info("Client disconnected before the page finished"),
        Err(e) => logger
            .warn_builder("Response stream ended early")
            .field_error(&e)
            .emit(),
    }

    let final_metrics = metrics.finalize(Some(status));
    logger
        .info_builder("Request complete")
        .field_i64("status", i64::from(status))
        .field_i64("bytes", sink.bytes_sent() as i64)
        .emit();
    eprintln!("\n{}", final_metrics.to_summary());
}
