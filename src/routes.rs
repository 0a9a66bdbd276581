//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the health probe, the Leptos SSR page, the hydration bundle under
//! `/pkg`, and the public assets (logo, portraits) under a single Axum
//! router. Anything unmatched falls through to the asset directory.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::{Path, PathBuf};

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// Health probe plus static assets; no Leptos configuration required.
fn base_routes<S>(assets_dir: &Path) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/healthz", get(healthz))
        .fallback_service(ServeDir::new(assets_dir))
}

/// Full application: SSR page at `/`, hydration bundle, assets, health.
pub fn app(leptos_options: LeptosOptions, config: &ServerConfig) -> Router {
    let routes = generate_route_list(client::app::App);
    let pkg_dir = PathBuf::from(&*leptos_options.site_root).join(&*leptos_options.site_pkg_dir);

    base_routes(&config.assets_dir)
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .nest_service("/pkg", ServeDir::new(pkg_dir))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(leptos_options)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
