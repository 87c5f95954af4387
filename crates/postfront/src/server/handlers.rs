use super::error::ApiError;
use crate::service::PostOperations;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::{HeaderMap, Method, Uri},
    Json,
};
use postfront_core::posts::{Post, PostPatch};
use std::sync::Arc;

pub type SharedOperations = Arc<PostOperations>;

pub async fn unique_user_count(
    State(operations): State<SharedOperations>,
) -> Result<Json<usize>, ApiError> {
    let count = operations.count_distinct_submitters().await?;

    Ok(Json(count))
}

pub async fn update_post(
    State(operations): State<SharedOperations>,
    headers: HeaderMap,
    index: Result<Path<i64>, PathRejection>,
    payload: Result<Json<PostPatch>, JsonRejection>,
) -> Result<Json<Post>, ApiError> {
    let Path(position) = index.map_err(|rejection| ApiError::path_mismatch("index", rejection))?;
    let Json(patch) = payload.map_err(|rejection| ApiError::body_rejection(rejection, &headers))?;

    let patch = patch.validate()?;
    let post = operations.update_at_position(position, patch).await?;

    Ok(Json(post))
}

pub async fn method_not_allowed(method: Method) -> ApiError {
    ApiError::MethodNotAllowed(method)
}

pub async fn not_found(method: Method, uri: Uri) -> ApiError {
    ApiError::NotFound {
        method,
        path: uri.path().to_string(),
    }
}
