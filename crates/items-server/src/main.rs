//! Items API server
//!
//! Small JSON API over a single items table. Backed by SQLite when
//! DATABASE_PATH is set; falls back to an in-memory store otherwise so the
//! API stays usable without a database.

mod error;
mod handlers;
mod middleware;
mod models;
mod storage;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{error, info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use storage::{Database, MemoryStore, Store};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Store>,
}

#[tokio::main]
async fn main() {
    // Log panics from any thread; the request-path boundary only sees panics
    // raised inside handlers.
    std::panic::set_hook(Box::new(|info| {
        let location = info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()));
        let message = middleware::panic_message(info.payload());
        eprintln!("[PANIC] at {:?}: {}", location, message);
        tracing::error!("PANIC at {:?}: {}", location, message);
    }));

    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("[FATAL] Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    info!("Starting items server v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run_server().await {
        error!("Server failed: {:#}", e);
        std::process::exit(1);
    }
}

async fn run_server() -> Result<()> {
    let config = load_config();

    // The store is selected once here; handlers never re-check.
    let store = match &config.database_path {
        Some(path) => {
            let db = Database::new(path)
                .await
                .context("Failed to initialize database")?;
            info!("SQLite store ready at: {}", path);
            Store::Database(db)
        }
        None => {
            warn!("DATABASE_PATH not set, using in-memory store; items will not survive a restart");
            Store::Memory(MemoryStore::new())
        }
    };

    let state = AppState {
        store: Arc::new(store),
    };
    let app = handlers::app(state);

    let addr: SocketAddr = config
        .bind_address
        .parse()
        .context("Failed to parse bind address")?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

#[derive(Debug, Clone)]
struct Config {
    bind_address: String,
    database_path: Option<String>,
}

fn load_config() -> Config {
    let bind_address =
        std::env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:8787".to_string());
    let database_path = std::env::var("DATABASE_PATH").ok();

    Config {
        bind_address,
        database_path,
    }
}
