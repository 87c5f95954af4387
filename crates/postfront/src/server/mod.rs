mod cli;
mod error;
mod handlers;
mod negotiate;

pub use cli::ServeOptions;

use crate::prelude::{eprintln, *};
use crate::service::PostOperations;
use crate::upstream::{UpstreamConfig, UpstreamPostsClient};
use axum::{
    middleware,
    routing::{get, put},
    Router,
};
use handlers::SharedOperations;
use log::info;
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};

pub async fn run(options: ServeOptions, global: crate::Global) -> Result<()> {
    let addr = format!("{}:{}", options.host, options.port);
    let config = UpstreamConfig::from(options.upstream);

    if global.verbose {
        eprintln!("Starting postfront on {addr}...");
        eprintln!("Upstream posts service: {}", config.base_url);
        eprintln!("Upstream timeout: {:?}", config.timeout);
    }

    let client = UpstreamPostsClient::new(&config)?;
    let operations = Arc::new(PostOperations::new(client));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| eyre!("Failed to bind to {}: {}", addr, e))?;

    info!("postfront listening on http://{addr}");
    if global.verbose {
        eprintln!("Unique user count: GET http://{addr}/api/posts/uniqueUserCount");
        eprintln!("Update post: PUT http://{addr}/api/posts/{{index}}");
    }

    axum::serve(listener, router(operations))
        .await
        .map_err(|e| eyre!("Server error: {e}"))?;

    Ok(())
}

/// The `/api/posts` routes wrapped in the error boundary
pub fn router(operations: SharedOperations) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/api/posts/uniqueUserCount",
            get(handlers::unique_user_count),
        )
        .route("/api/posts/{index}", put(handlers::update_post))
        .route_layer(middleware::from_fn(negotiate::require_json_accept))
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .fallback(handlers::not_found)
        .layer(CatchPanicLayer::custom(error::handle_panic))
        .layer(middleware::from_fn(error::error_envelope))
        .layer(cors)
        .with_state(operations)
}
