//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders the Leptos app through SSR, serves the compiled WASM/JS/CSS bundle
//! under `/pkg`, and exposes a liveness probe. Every request gets a tracing
//! span carrying its method and path, and is cut off after
//! [`REQUEST_TIMEOUT`].

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::PathBuf;
use std::time::Duration;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::services::ServeDir;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Upper bound on handling one request, body included.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Leptos SSR frontend plus static assets and `/healthz`.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[workspace.metadata.leptos]` section or `LEPTOS_*` variables).
pub fn app() -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(web::app::App);

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    let router = Router::new()
        .route("/healthz", get(healthz))
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || web::app::shell(opts.clone())
        })
        .with_state(leptos_options)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")));

    Ok(with_service_layers(router))
}

/// Request logging and timeout applied to every route.
fn with_service_layers(router: Router) -> Router {
    router.layer(TimeoutLayer::new(REQUEST_TIMEOUT)).layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
            .on_response(DefaultOnResponse::new().level(Level::INFO)),
    )
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
