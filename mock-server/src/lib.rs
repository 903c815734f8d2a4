use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

pub const DEFAULT_PLUGIN_ID: &str = "bookmarks";

/// Stored bookmark. Serialized the way the server plugin stores it: the id
/// under `postid`, empty title and labels omitted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    #[serde(rename = "postid", alias = "postID")]
    pub post_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(default)]
    pub create_at: i64,
    #[serde(default)]
    pub update_at: i64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub label_ids: Vec<String>,
}

#[derive(Deserialize)]
pub struct GetParams {
    #[serde(rename = "postID")]
    pub post_id: String,
}

pub type Db = Arc<RwLock<HashMap<String, Bookmark>>>;

pub fn app(plugin_id: &str) -> Router {
    let db: Db = Arc::new(RwLock::new(HashMap::new()));
    let api = Router::new()
        .route("/get", get(get_bookmark))
        .route("/add", post(add_bookmark));
    Router::new()
        .nest(&format!("/plugins/{plugin_id}"), api.clone())
        .nest(&format!("/plugins/{plugin_id}/api/v1"), api)
        .with_state(db)
}

pub async fn run(listener: TcpListener, plugin_id: &str) -> Result<(), std::io::Error> {
    axum::serve(listener, app(plugin_id)).await
}

/// Cookie-authenticated requests must identify as XHR.
fn require_xhr(headers: &HeaderMap) -> Result<(), StatusCode> {
    match headers.get("x-requested-with").and_then(|v| v.to_str().ok()) {
        Some("XMLHttpRequest") => Ok(()),
        _ => Err(StatusCode::UNAUTHORIZED),
    }
}

/// Set `create_at` on first save and bump `update_at` on every save.
fn stamp_times(bookmark: &mut Bookmark, now: i64) {
    if bookmark.create_at == 0 {
        bookmark.create_at = now;
    }
    bookmark.update_at = now;
}

async fn get_bookmark(
    State(db): State<Db>,
    headers: HeaderMap,
    Query(params): Query<GetParams>,
) -> Result<Json<Bookmark>, StatusCode> {
    require_xhr(&headers)?;
    debug!("get bookmark {}", params.post_id);
    let bookmarks = db.read().await;
    bookmarks
        .get(&params.post_id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn add_bookmark(
    State(db): State<Db>,
    headers: HeaderMap,
    Json(mut bookmark): Json<Bookmark>,
) -> Result<Json<Bookmark>, StatusCode> {
    require_xhr(&headers)?;
    stamp_times(&mut bookmark, Utc::now().timestamp_millis());
    info!("stored bookmark {}", bookmark.post_id);
    db.write()
        .await
        .insert(bookmark.post_id.clone(), bookmark.clone());
    Ok(Json(bookmark))
}
