use postfront_core::posts::PostsError;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Upstream posts service unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("Upstream posts service returned an unreadable payload: {0}")]
    UpstreamPayload(String),

    #[error(transparent)]
    Posts(#[from] PostsError),
}
