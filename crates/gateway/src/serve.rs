//! Shared serve entrypoint, used by the CLI and tests.

use crate::api::{self, Gateway};
use anyhow::Result;
use assistant::Assistant;
use gcore::Model;
use std::sync::Arc;
use tokio::sync::oneshot;

/// Handle returned by [`serve`]: holds the bound port and shutdown trigger.
pub struct ServeHandle {
    /// The port the server is listening on.
    pub port: u16,
    shutdown_tx: Option<oneshot::Sender<()>>,
    join: Option<tokio::task::JoinHandle<Result<(), std::io::Error>>>,
}

impl ServeHandle {
    /// Trigger graceful shutdown and wait for the server to stop.
    pub async fn shutdown(mut self) -> Result<()> {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        if let Some(join) = self.join.take() {
            join.await??;
        }
        Ok(())
    }
}

/// Bind the axum server on `bind` and start serving in a spawned task.
pub async fn serve<M: Model + 'static>(
    assistant: Arc<Assistant<M>>,
    bind: &str,
) -> Result<ServeHandle> {
    let app = api::router(Gateway { assistant });
    let listener = tokio::net::TcpListener::bind(bind).await?;
    let port = listener.local_addr()?.port();
    tracing::info!("api listening on {bind} (port {port})");

    let (shutdown_tx, shutdown_rx) = oneshot::channel();
    let join = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
                tracing::info!("received shutdown signal");
            })
            .await
    });

    Ok(ServeHandle {
        port,
        shutdown_tx: Some(shutdown_tx),
        join: Some(join),
    })
}
