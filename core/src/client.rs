//! Request builder, response parser and async operations for the bookmarks
//! plugin API.
//!
//! # Design
//! `BookmarkClient` holds only its config and the base URL computed from it;
//! nothing changes between calls. Each operation is split into a `build_*`
//! method that produces an `HttpRequest` and a `parse_*` method that consumes
//! an `HttpResponse`. The async methods (`do_get`, `do_post`,
//! `fetch_bookmark`, `save_bookmark`) run exactly one round-trip through a
//! caller-supplied `Transport` between the two halves.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::headers::{
    self, ACCEPT, APPLICATION_JSON, CONTENT_TYPE, XML_HTTP_REQUEST, X_REQUESTED_WITH, X_TIMEZONE_OFFSET,
};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::transport::Transport;
use crate::types::Bookmark;

/// Stateless client for the bookmarks plugin API.
#[derive(Debug, Clone)]
pub struct BookmarkClient {
    config: ClientConfig,
    base_url: String,
}

impl BookmarkClient {
    pub fn new(config: ClientConfig) -> Self {
        let base_url = config.base_url();
        Self { config, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Headers sent on every request, read fresh so the local offset tracks
    /// DST changes.
    fn fixed_headers(&self) -> Vec<(&'static str, String)> {
        let offset = self
            .config
            .timezone_offset_minutes
            .unwrap_or_else(headers::timezone_offset_minutes);
        vec![
            (X_REQUESTED_WITH, XML_HTTP_REQUEST.to_string()),
            (X_TIMEZONE_OFFSET, offset.to_string()),
            (ACCEPT, APPLICATION_JSON.to_string()),
        ]
    }

    pub fn build_get(&self, url: &str, headers: &[(String, String)]) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: url.to_string(),
            headers: headers::merge(headers, &self.fixed_headers()),
            body: None,
        }
    }

    pub fn build_post<B>(&self, url: &str, body: &B, headers: &[(String, String)]) -> Result<HttpRequest, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_string(body).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        log::debug!("POST {url} body: {body}");

        let mut fixed = self.fixed_headers();
        fixed.push((CONTENT_TYPE, APPLICATION_JSON.to_string()));
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: url.to_string(),
            headers: headers::merge(headers, &fixed),
            body: Some(body),
        })
    }

    /// Check for a 2xx status, then decode the body as JSON.
    pub fn parse_json<T: DeserializeOwned>(&self, response: HttpResponse) -> Result<T, ApiError> {
        check_status(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    /// `GET <base>/get?postID=<post_id>`. The id is inserted as given.
    pub fn build_fetch_bookmark(&self, post_id: &str) -> HttpRequest {
        self.build_get(&format!("{}/get?postID={post_id}", self.base_url), &[])
    }

    pub fn build_save_bookmark(&self, bookmark: &Bookmark) -> Result<HttpRequest, ApiError> {
        self.build_post(&format!("{}/add", self.base_url), bookmark, &[])
    }

    pub fn parse_fetch_bookmark(&self, response: HttpResponse) -> Result<Bookmark, ApiError> {
        self.parse_json(response)
    }

    pub fn parse_save_bookmark(&self, response: HttpResponse) -> Result<Bookmark, ApiError> {
        self.parse_json(response)
    }

    pub async fn do_get<T, X>(&self, transport: &X, url: &str, headers: &[(String, String)]) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        X: Transport + ?Sized,
    {
        let response = transport.execute(self.build_get(url, headers)).await?;
        self.parse_json(response)
    }

    pub async fn do_post<T, B, X>(
        &self,
        transport: &X,
        url: &str,
        body: &B,
        headers: &[(String, String)],
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
        X: Transport + ?Sized,
    {
        let request = self.build_post(url, body, headers)?;
        let response = transport.execute(request).await?;
        self.parse_json(response)
    }

    pub async fn fetch_bookmark<X>(&self, transport: &X, post_id: &str) -> Result<Bookmark, ApiError>
    where
        X: Transport + ?Sized,
    {
        let response = transport.execute(self.build_fetch_bookmark(post_id)).await?;
        self.parse_fetch_bookmark(response)
    }

    /// Resolves with the server's representation of the stored bookmark.
    pub async fn save_bookmark<X>(&self, transport: &X, bookmark: &Bookmark) -> Result<Bookmark, ApiError>
    where
        X: Transport + ?Sized,
    {
        let response = transport.execute(self.build_save_bookmark(bookmark)?).await?;
        self.parse_save_bookmark(response)
    }
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}
