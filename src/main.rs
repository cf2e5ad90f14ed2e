//! SSR host: renders the login page, serves the WASM bundle from `/pkg`.
//! The admin API and the `/admin` area are served elsewhere.

use std::path::PathBuf;

use admin_login::app::{App, shell};
use admin_login::config::ServerConfig;
use admin_login::error::ServerError;
use axum::Router;
use axum::http::StatusCode;
use axum::response::Redirect;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    if let Err(e) = run(ServerConfig::from_env()).await {
        tracing::error!(error = %e, "admin-login host failed");
        std::process::exit(1);
    }
}

async fn run(config: ServerConfig) -> Result<(), ServerError> {
    let app = router(&config)?;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;

    tracing::info!(port = config.port, "admin-login listening");
    axum::serve(listener, app).await?;
    Ok(())
}

/// Leptos SSR routes + `/pkg` assets + health check.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
fn router(config: &ServerConfig) -> Result<Router, ServerError> {
    let conf = get_configuration(None).map_err(|e| ServerError::Configuration(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(App);

    let site_root = config
        .site_root
        .clone()
        .map_or_else(|| PathBuf::from(leptos_options.site_root.as_ref()), PathBuf::from);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    Ok(Router::new()
        .route("/", get(redirect_root_to_login))
        .route("/healthz", get(healthz))
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .layer(TraceLayer::new_for_http()))
}

async fn redirect_root_to_login() -> Redirect {
    Redirect::temporary("/admin/login")
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
