use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let plugin_id =
        std::env::var("PLUGIN_ID").unwrap_or_else(|_| mock_server::DEFAULT_PLUGIN_ID.to_string());
    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await?;
    log::info!("listening on {addr}, plugin routes under /plugins/{plugin_id}");
    mock_server::run(listener, &plugin_id).await
}
