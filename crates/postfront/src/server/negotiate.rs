use super::error::ApiError;
use axum::{
    extract::Request,
    http::{header::ACCEPT, HeaderMap},
    middleware::Next,
    response::{IntoResponse, Response},
};

/// Reject requests whose `Accept` header rules out a JSON response
pub async fn require_json_accept(request: Request, next: Next) -> Response {
    if accepts_json(request.headers()) {
        next.run(request).await
    } else {
        ApiError::NotAcceptable.into_response()
    }
}

/// A missing `Accept` header accepts anything
pub fn accepts_json(headers: &HeaderMap) -> bool {
    let mut values = headers.get_all(ACCEPT).iter().peekable();
    if values.peek().is_none() {
        return true;
    }

    values
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(','))
        .map(|range| range.split(';').next().unwrap_or_default().trim())
        .any(|range| {
            range.is_empty()
                || range.eq_ignore_ascii_case("application/json")
                || range.eq_ignore_ascii_case("application/*")
                || range == "*/*"
        })
}
