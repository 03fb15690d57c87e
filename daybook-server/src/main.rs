mod app;
mod calendar;
mod cli;
mod page;

use std::{env, sync::Arc};

use anyhow::{Context, Result};
use daybook_events::{EventSource, EventStore};
use log::{info, warn};
use tokio::{net::TcpListener, signal};

use crate::app::AppState;

fn setup_logging() {
    if env::var("LOG").is_err() {
        env::set_var("LOG", "daybook_server=info");
    }

    pretty_env_logger::init_custom_env("LOG");
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::parse(env::args().skip(1).collect());

    setup_logging();

    let events: Arc<dyn EventSource + Send + Sync> = match &args.events {
        Some(path) => {
            let store = EventStore::from_path(path)
                .with_context(|| format!("Failed to load events from {}", path.display()))?;
            info!("Loaded {} days of events from {}", store.len(), path.display());
            Arc::new(store)
        }
        None => {
            info!("Serving the built-in sample events");
            Arc::new(EventStore::sample().clone())
        }
    };

    let router = app::router(AppState {
        events,
        utc_offset: args.utc_offset,
    });

    let listener = TcpListener::bind(args.address)
        .await
        .with_context(|| format!("Failed to bind {}", args.address))?;
    info!("Listening at http://{}", args.address);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl-C: {err}");
        std::future::pending::<()>().await;
    }

    info!("Shutting down");
}
