//! Test helpers: fixture posts and throwaway upstream servers on `127.0.0.1:0`.

use crate::service::PostOperations;
use crate::upstream::{UpstreamConfig, UpstreamPostsClient};
use axum::{http::StatusCode, routing::get, Json, Router};
use postfront_core::posts::Post;
use std::time::Duration;

pub fn fixture_posts() -> Vec<Post> {
    [(1, 1), (1, 2), (2, 3), (3, 4), (3, 5), (3, 6), (4, 7), (5, 8)]
        .into_iter()
        .map(|(submitter_id, id)| Post {
            submitter_id,
            id,
            title: format!("1800Flowers{id}"),
            body: format!("1800Flowers{id}"),
        })
        .collect()
}

/// Upstream that serves `posts` on `GET /posts`
pub fn posts_upstream(posts: Vec<Post>) -> Router {
    Router::new().route(
        "/posts",
        get(move || {
            let posts = posts.clone();
            async move { Json(posts) }
        }),
    )
}

/// Upstream that answers `GET /posts` with `status` and a plain-text body
pub fn status_upstream(status: StatusCode) -> Router {
    Router::new().route("/posts", get(move || async move { (status, "upstream says no") }))
}

/// Serve `router` on an ephemeral port and return its base URL
pub async fn spawn_upstream(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{addr}")
}

/// A base URL nothing is listening on
pub fn unreachable_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    format!("http://{addr}")
}

pub fn upstream_config(base_url: &str) -> UpstreamConfig {
    UpstreamConfig {
        base_url: base_url.to_string(),
        timeout: Duration::from_secs(5),
    }
}

pub fn operations_for(base_url: &str) -> PostOperations {
    let client = UpstreamPostsClient::new(&upstream_config(base_url)).unwrap();
    PostOperations::new(client)
}
