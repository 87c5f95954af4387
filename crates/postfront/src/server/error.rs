//! Boundary error mapping
//!
//! Every failure that reaches the HTTP boundary is an [`ApiError`]. Its
//! `IntoResponse` picks the status code and reason, and [`error_envelope`]
//! turns that into the uniform JSON error body, stamped with the time and the
//! requested URI.

use crate::error::Error;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Request,
    },
    http::{header::CONTENT_TYPE, HeaderMap, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use log::{error, warn};
use postfront_core::posts::PostsError;
use serde::Serialize;
use std::any::Any;

const INTERNAL_REASON: &str = "Internal server error!!";
const UPSTREAM_REASON: &str = "External Service Unavailable or Not Reachable!!";
const UNREADABLE_BODY_REASON: &str = "Request body having issue. Please check!!";
const METHOD_REASON: &str = "Requested method not supported. Please check!!";

#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Service(#[from] Error),

    #[error("{0}")]
    UnreadableBody(String),

    #[error("Failed to convert path parameter '{name}' to an integer: {detail}")]
    PathMismatch { name: &'static str, detail: String },

    #[error("Request method '{0}' not supported")]
    MethodNotAllowed(Method),

    #[error("{0} media type is not supported. Supported media types are application/json")]
    UnsupportedMediaType(String),

    #[error("Could not find acceptable representation")]
    NotAcceptable,

    #[error("No handler found for {method} {path}")]
    NotFound { method: Method, path: String },

    #[error("{0}")]
    Internal(String),
}

impl From<PostsError> for ApiError {
    fn from(err: PostsError) -> Self {
        ApiError::Service(Error::Posts(err))
    }
}

impl ApiError {
    /// Map a rejected JSON body; a non-JSON content type is reported as 415
    pub fn body_rejection(rejection: JsonRejection, headers: &HeaderMap) -> Self {
        match rejection {
            JsonRejection::MissingJsonContentType(_) => ApiError::UnsupportedMediaType(
                headers
                    .get(CONTENT_TYPE)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("none")
                    .to_string(),
            ),
            other => ApiError::UnreadableBody(other.body_text()),
        }
    }

    pub fn path_mismatch(name: &'static str, rejection: PathRejection) -> Self {
        ApiError::PathMismatch {
            name,
            detail: rejection.body_text(),
        }
    }

    /// Status code and reason phrase for the error body
    fn classify(&self) -> (StatusCode, String) {
        match self {
            ApiError::Service(Error::UpstreamUnavailable(_)) => {
                (StatusCode::SERVICE_UNAVAILABLE, UPSTREAM_REASON.to_string())
            }
            ApiError::Service(Error::UpstreamPayload(_)) | ApiError::Internal(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_REASON.to_string())
            }
            ApiError::Service(Error::Posts(err)) => (StatusCode::BAD_REQUEST, err.to_string()),
            ApiError::UnreadableBody(_) => {
                (StatusCode::BAD_REQUEST, UNREADABLE_BODY_REASON.to_string())
            }
            ApiError::PathMismatch { name, .. } => (
                StatusCode::BAD_REQUEST,
                format!("{name} should be of type integer"),
            ),
            ApiError::MethodNotAllowed(_) => {
                (StatusCode::METHOD_NOT_ALLOWED, METHOD_REASON.to_string())
            }
            ApiError::UnsupportedMediaType(content_type) => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                format!("Content type '{content_type}' not supported"),
            ),
            ApiError::NotAcceptable => (StatusCode::NOT_ACCEPTABLE, self.to_string()),
            ApiError::NotFound { .. } => (StatusCode::NOT_FOUND, self.to_string()),
        }
    }
}

/// Status, reason and message of a failed request, carried as a response
/// extension until [`error_envelope`] renders it.
#[derive(Debug, Clone)]
pub struct ErrorDetails {
    pub status: StatusCode,
    pub reason: String,
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, reason) = self.classify();
        let message = self.to_string();

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            error!("Unexpected failure: {message}");
        } else if status == StatusCode::SERVICE_UNAVAILABLE {
            warn!("Upstream failure: {message}");
        }

        let mut response = status.into_response();
        response.extensions_mut().insert(ErrorDetails {
            status,
            reason,
            error: message,
        });
        response
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub timestamp: String,
    pub status_code: u16,
    pub status: String,
    pub reason: String,
    pub error: String,
    pub requested_uri: String,
}

impl ErrorResponse {
    pub fn new(details: ErrorDetails, path: &str) -> Self {
        Self {
            timestamp: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            status_code: details.status.as_u16(),
            status: details
                .status
                .canonical_reason()
                .unwrap_or_default()
                .to_string(),
            reason: details.reason,
            error: details.error,
            requested_uri: format!("uri={path}"),
        }
    }
}

/// Render [`ErrorDetails`] left on a response as the JSON error body
pub async fn error_envelope(request: Request, next: Next) -> Response {
    let path = request.uri().path().to_string();
    let response = next.run(request).await;

    match response.extensions().get::<ErrorDetails>().cloned() {
        Some(details) => {
            let status = details.status;
            (status, Json(ErrorResponse::new(details, &path))).into_response()
        }
        None => response,
    }
}

/// Turn a panic inside a handler into a 500 error response
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        String::from("handler panicked")
    };

    ApiError::Internal(detail).into_response()
}
