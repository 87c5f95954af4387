use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Message reported when a patch has a missing or blank title
pub const BLANK_TITLE_MESSAGE: &str = "Property 'title' should not be null or blank !!";

/// Message reported when a patch has a missing or blank body
pub const BLANK_BODY_MESSAGE: &str = "Property 'body' should not be null or blank !!";

/// Message reported when a position falls outside the fetched collection
pub const OUT_OF_RANGE_MESSAGE: &str = "Requested array index is out of range!!";

/// A post record as served by the upstream posts service
///
/// The submitter is called `userId` on the wire.
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Post {
    #[serde(rename = "userId")]
    pub submitter_id: i64,
    pub id: i64,
    pub title: String,
    pub body: String,
}

/// Replacement title and body for a single post
///
/// Both fields are optional at the serde level so that a missing or `null`
/// field reaches [`PostPatch::validate`] instead of failing deserialization.
/// Extra fields such as `userId` and `id` are ignored.
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct PostPatch {
    pub title: Option<String>,
    pub body: Option<String>,
}

/// A patch whose fields have been checked to be non-blank
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidPatch {
    pub title: String,
    pub body: String,
}

/// Domain errors for post operations
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PostsError {
    #[error("Requested array index is out of range!!")]
    PositionOutOfRange { position: i64, len: usize },

    #[error("{message}")]
    Validation {
        field: &'static str,
        message: &'static str,
    },
}

impl PostPatch {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            body: Some(body.into()),
        }
    }

    /// Check that title and body are present and not blank
    ///
    /// The title is checked first; the first failing field is reported.
    pub fn validate(self) -> Result<ValidPatch, PostsError> {
        let title = non_blank(self.title).ok_or(PostsError::Validation {
            field: "title",
            message: BLANK_TITLE_MESSAGE,
        })?;
        let body = non_blank(self.body).ok_or(PostsError::Validation {
            field: "body",
            message: BLANK_BODY_MESSAGE,
        })?;

        Ok(ValidPatch { title, body })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Count the distinct submitter ids across all posts
pub fn count_distinct_submitters(posts: &[Post]) -> usize {
    posts
        .iter()
        .map(|post| post.submitter_id)
        .collect::<HashSet<_>>()
        .len()
}

/// Replace title and body of the post at the 1-based `position`
///
/// Returns the patched post; the submitter id and id of the original are kept.
/// Positions below 1 are rejected the same way as positions past the end.
pub fn update_at_position(
    posts: Vec<Post>,
    position: i64,
    patch: ValidPatch,
) -> Result<Post, PostsError> {
    let len = posts.len();
    let out_of_range = PostsError::PositionOutOfRange { position, len };

    if position < 1 {
        return Err(out_of_range);
    }
    let index = usize::try_from(position - 1).map_err(|_| out_of_range.clone())?;
    if index >= len {
        return Err(out_of_range);
    }

    let mut post = posts.into_iter().nth(index).ok_or(out_of_range)?;
    post.title = patch.title;
    post.body = patch.body;

    Ok(post)
}
