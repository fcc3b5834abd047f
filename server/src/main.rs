use anyhow::Result;
use jotfile_core::FileStore;
use jotfile_server::{app, AppState};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "jotfile_server=debug,tower_http=debug".into()),
        )
        .init();

    let data_path =
        std::env::var("JOTFILE_DATA").unwrap_or_else(|_| "data/notes.json".to_string());
    let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);

    let state = AppState::new(FileStore::new(&data_path));
    let app = app(state);

    let listener = tokio::net::TcpListener::bind((host.as_str(), port)).await?;
    info!(%host, port, data = %data_path, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
