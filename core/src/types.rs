//! Domain DTOs for the bookmarks plugin API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently.
//! Integration tests catch any schema drift between the two crates.
//!
//! The server plugin persists the post id under `postid` and omits empty
//! titles and label lists, so decoding accepts both spellings and defaults
//! the optional fields.

use serde::{Deserialize, Serialize};

/// A saved reference from a user to a post.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Bookmark {
    /// Id of the bookmarked post. Doubles as the bookmark id.
    #[serde(rename = "postID", alias = "postid")]
    pub post_id: String,
    #[serde(default)]
    pub title: String,
    /// Milliseconds since the Unix epoch.
    #[serde(default)]
    pub create_at: i64,
    /// Milliseconds since the Unix epoch.
    #[serde(default)]
    pub update_at: i64,
    /// Ordered ids of the labels attached to this bookmark.
    #[serde(default)]
    pub label_ids: Vec<String>,
}

/// A named, colored tag assignable to bookmarks. Not sent by `BookmarkClient`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Label {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub description: String,
}
