use crate::prelude::*;
use crate::upstream::UpstreamPostsClient;
use log::{info, warn};
use postfront_core::posts::{self, Post, PostsError, ValidPatch};

/// The post operations exposed over HTTP and the CLI
///
/// Each operation fetches the collection once and works on that private copy.
/// Updates are never written back upstream.
#[derive(Debug, Clone)]
pub struct PostOperations {
    client: UpstreamPostsClient,
}

impl PostOperations {
    pub fn new(client: UpstreamPostsClient) -> Self {
        Self { client }
    }

    pub async fn list_posts(&self) -> Result<Vec<Post>, Error> {
        self.client.fetch_all().await
    }

    pub async fn count_distinct_submitters(&self) -> Result<usize, Error> {
        info!("Counting distinct submitters");

        let posts = self.client.fetch_all().await?;

        Ok(posts::count_distinct_submitters(&posts))
    }

    pub async fn update_at_position(&self, position: i64, patch: ValidPatch) -> Result<Post, Error> {
        info!("Fetching all posts and updating the contents of post {position}");

        let posts = self.client.fetch_all().await?;

        posts::update_at_position(posts, position, patch).map_err(|e| {
            if let PostsError::PositionOutOfRange { len, .. } = &e {
                warn!("Requested position {position} is out of range for {len} posts");
            }
            Error::from(e)
        })
    }
}
