//! Core library for postfront
//!
//! This crate implements the **Functional Core** of the postfront service,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! - **`postfront_core`** (this crate): the posts domain as pure functions, with zero I/O
//! - **`postfront`**: upstream HTTP client, HTTP server and CLI (the Imperative Shell)
//!
//! The shell fetches the post collection from the upstream service and hands it
//! to the functions here; nothing in this crate knows where posts come from or
//! where results go.
//!
//! # Module Organization
//!
//! - [`posts`]: the `Post` record, patch validation, the distinct-submitter
//!   count and the positional update
//!
//! # Example Usage
//!
//! ```rust
//! use postfront_core::posts::{count_distinct_submitters, update_at_position, Post, PostPatch};
//!
//! let posts = vec![
//!     Post { submitter_id: 1, id: 1, title: "a".into(), body: "a".into() },
//!     Post { submitter_id: 1, id: 2, title: "b".into(), body: "b".into() },
//! ];
//!
//! assert_eq!(count_distinct_submitters(&posts), 1);
//!
//! let patch = PostPatch::new("new title", "new body").validate().unwrap();
//! let updated = update_at_position(posts, 2, patch).unwrap();
//! assert_eq!(updated.id, 2);
//! assert_eq!(updated.title, "new title");
//! ```

pub mod posts;
