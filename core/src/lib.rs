//! API client core for the bookmarks plugin.
//!
//! # Overview
//! Fetches and saves bookmarks through the plugin's HTTP routes under
//! `/plugins/<plugin_id>`. Requests are built and responses parsed as plain
//! data (host-does-IO pattern); the async operations run a single round-trip
//! through a pluggable `Transport`.
//!
//! # Design
//! - `BookmarkClient` holds only immutable config and its base URL.
//! - Each operation is split into `build_*` (produces request) and `parse_*`
//!   (consumes response), with `do_get` / `do_post` / `fetch_bookmark` /
//!   `save_bookmark` tying them together over a `Transport`.
//! - No retry, caching or cancellation. Errors propagate unchanged.
//! - Outgoing POST bodies go to the `log` facade at debug level and are
//!   dropped unless the host installs a logger.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod config;
pub mod error;
pub mod headers;
pub mod http;
pub mod transport;
pub mod types;

pub use client::BookmarkClient;
pub use config::ClientConfig;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
#[cfg(feature = "reqwest")]
pub use transport::ReqwestTransport;
pub use transport::Transport;
pub use types::{Bookmark, Label};
