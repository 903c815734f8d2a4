//! Fetch/save round-trips against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then exercises the client twice:
//! once through the sans-IO `build_*`/`parse_*` path with ureq executing the
//! requests, and once through the async operations over `ReqwestTransport`.
//! The mock server stores bookmarks with the plugin's own spelling, so these
//! tests also catch schema drift between the two crates.

use bookmarks_core::{ApiError, Bookmark, BookmarkClient, ClientConfig, HttpMethod, HttpRequest, HttpResponse};

const PLUGIN_ID: &str = "bookmarks";

/// Execute an `HttpRequest` using ureq and return an `HttpResponse`.
///
/// Disables ureq's automatic status-code-as-error behavior so 4xx/5xx
/// responses are returned as data rather than `Err`, letting the core
/// client handle status interpretation.
fn execute(req: HttpRequest) -> HttpResponse {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let mut response = match (req.method, req.body) {
        (HttpMethod::Get, _) => req
            .headers
            .iter()
            .fold(agent.get(&req.path), |rb, (k, v)| rb.header(k.as_str(), v.as_str()))
            .call(),
        (HttpMethod::Post, body) => req
            .headers
            .iter()
            .fold(agent.post(&req.path), |rb, (k, v)| rb.header(k.as_str(), v.as_str()))
            .send(body.unwrap_or_default().as_bytes()),
    }
    .expect("HTTP transport error");

    let status = response.status().as_u16();
    let body = response.body_mut().read_to_string().unwrap_or_default();

    HttpResponse {
        status,
        headers: Vec::new(),
        body,
    }
}

fn sample() -> Bookmark {
    Bookmark {
        post_id: "p2".to_string(),
        title: "New".to_string(),
        create_at: 5,
        update_at: 5,
        label_ids: vec!["l2".to_string(), "l1".to_string()],
    }
}

#[test]
fn fetch_save_lifecycle_over_ureq() {
    // Step 1: start mock server on a random port.
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener, PLUGIN_ID).await
        })
        .unwrap();
    });

    let client = BookmarkClient::new(ClientConfig::new(&format!("http://{addr}"), PLUGIN_ID));

    // Step 2: fetch before save — NotFound.
    let req = client.build_fetch_bookmark("p2");
    let err = client.parse_fetch_bookmark(execute(req)).unwrap_err();
    assert!(matches!(err, ApiError::NotFound));

    // Step 3: save.
    let req = client.build_save_bookmark(&sample()).unwrap();
    let saved = client.parse_save_bookmark(execute(req)).unwrap();
    assert_eq!(saved.post_id, "p2");
    assert_eq!(saved.title, "New");
    assert_eq!(saved.create_at, 5);
    assert!(saved.update_at >= 5);
    assert_eq!(saved.label_ids, vec!["l2", "l1"]);

    // Step 4: fetch returns what the server stored.
    let req = client.build_fetch_bookmark("p2");
    let fetched = client.parse_fetch_bookmark(execute(req)).unwrap();
    assert_eq!(fetched, saved);

    // Step 5: save again without a title — server omits it, client defaults it.
    let untitled = Bookmark {
        title: String::new(),
        label_ids: Vec::new(),
        ..sample()
    };
    let req = client.build_save_bookmark(&untitled).unwrap();
    let saved = client.parse_save_bookmark(execute(req)).unwrap();
    assert_eq!(saved.title, "");
    assert!(saved.label_ids.is_empty());
}

#[cfg(feature = "reqwest")]
mod over_reqwest {
    use bookmarks_core::ReqwestTransport;

    use super::*;

    async fn start_server() -> std::net::SocketAddr {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { mock_server::run(listener, PLUGIN_ID).await });
        addr
    }

    #[tokio::test]
    async fn fetch_and_save_round_trip() {
        let addr = start_server().await;
        let client = BookmarkClient::new(ClientConfig::new(&format!("http://{addr}"), PLUGIN_ID));
        let transport = ReqwestTransport::new();

        let err = client.fetch_bookmark(&transport, "p2").await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound));

        let saved = client.save_bookmark(&transport, &sample()).await.unwrap();
        assert_eq!(saved.create_at, 5);
        assert_eq!(saved.label_ids, sample().label_ids);

        let fetched = client.fetch_bookmark(&transport, "p2").await.unwrap();
        assert_eq!(fetched, saved);
    }

    #[tokio::test]
    async fn do_get_decodes_into_untyped_json() {
        let addr = start_server().await;
        let client = BookmarkClient::new(ClientConfig::new(&format!("http://{addr}"), PLUGIN_ID));
        let transport = ReqwestTransport::new();
        client.save_bookmark(&transport, &sample()).await.unwrap();

        let url = format!("{}/get?postID=p2", client.base_url());
        let value: serde_json::Value = client.do_get(&transport, &url, &[]).await.unwrap();
        assert_eq!(value["postid"], "p2");
        assert_eq!(value["label_ids"], serde_json::json!(["l2", "l1"]));
    }

    #[tokio::test]
    async fn versioned_prefix_reaches_the_same_routes() {
        let addr = start_server().await;
        let client = BookmarkClient::new(
            ClientConfig::new(&format!("http://{addr}"), PLUGIN_ID).with_api_version_prefix("/api/v1"),
        );
        let transport = ReqwestTransport::new();

        client.save_bookmark(&transport, &sample()).await.unwrap();
        let fetched = client.fetch_bookmark(&transport, "p2").await.unwrap();
        assert_eq!(fetched.post_id, "p2");
    }

    #[tokio::test]
    async fn concurrent_saves_both_complete() {
        let addr = start_server().await;
        let client = BookmarkClient::new(ClientConfig::new(&format!("http://{addr}"), PLUGIN_ID));
        let transport = ReqwestTransport::new();

        let first = Bookmark {
            post_id: "a".to_string(),
            ..sample()
        };
        let second = Bookmark {
            post_id: "b".to_string(),
            ..sample()
        };
        let (a, b) = tokio::join!(
            client.save_bookmark(&transport, &first),
            client.save_bookmark(&transport, &second)
        );
        assert_eq!(a.unwrap().post_id, "a");
        assert_eq!(b.unwrap().post_id, "b");
    }

    #[tokio::test]
    async fn unknown_plugin_id_is_not_found() {
        let addr = start_server().await;
        let client = BookmarkClient::new(ClientConfig::new(&format!("http://{addr}"), "other"));
        let err = client
            .fetch_bookmark(&ReqwestTransport::new(), "p2")
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[tokio::test]
    async fn refused_connection_is_a_transport_error() {
        let addr = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap()
        };
        let client = BookmarkClient::new(ClientConfig::new(&format!("http://{addr}"), PLUGIN_ID));
        let err = client
            .fetch_bookmark(&ReqwestTransport::new(), "p2")
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }
}
