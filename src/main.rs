use clap::Parser;
use ephemeral_notes::config::NodeConfig;
use ephemeral_notes::notes::clock::SystemClock;
use ephemeral_notes::notes::handlers::notes_router;
use ephemeral_notes::notes::lifecycle::NoteManager;
use ephemeral_notes::storage::handlers::store_router;
use ephemeral_notes::storage::kv::KvStore;
use ephemeral_notes::storage::memory::MemoryKvStore;
use ephemeral_notes::storage::remote::RemoteKvStore;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = NodeConfig::parse();

    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    config.validate()?;

    tracing::info!("Starting note node on {}", config.bind);

    // 1. Storage backend:
    let store: Arc<dyn KvStore> = match &config.store_url {
        Some(url) => {
            tracing::info!("Using remote store node at {}", url);
            Arc::new(RemoteKvStore::new(
                url,
                config.store_timeout(),
                config.store_attempts,
            ))
        }
        None => {
            tracing::info!("Using in-memory store");
            Arc::new(MemoryKvStore::new())
        }
    };

    // 2. Note lifecycle:
    let manager = Arc::new(NoteManager::new(
        store.clone(),
        Arc::new(SystemClock),
        config.note_settings(),
    ));

    // 3. HTTP Router:
    let mut app = notes_router(manager);
    if config.serve_store {
        tracing::info!("Serving local store on /kv routes");
        app = app.merge(store_router(store));
    }

    // 4. Start HTTP server:
    tracing::info!("HTTP server listening on {}", config.bind);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
