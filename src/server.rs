//! Server runtime and wiring
//!
//! This module turns a [`ServerConfig`] and a [`StoreType`] into a running
//! HTTP service:
//! - [`create_store`] selects the receipt store implementation at runtime
//! - [`bind`] opens the listening socket
//! - [`serve`] runs the router until the shutdown future completes
//! - [`run`] builds the multi-threaded worker pool and drives all of the above

use crate::api;
use crate::cli::StoreType;
use crate::core::{LockedReceiptStore, ReceiptProcessor, ReceiptStore, ShardedReceiptStore};
use std::future::Future;
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;
use thiserror::Error;
use tokio::net::TcpListener;

/// Default listening port
pub const DEFAULT_PORT: u16 = 9091;

/// Configuration for the HTTP server
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Address and port to listen on
    pub addr: SocketAddr,
    /// Number of worker threads serving requests
    pub workers: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::new(Ipv4Addr::LOCALHOST.into(), DEFAULT_PORT),
            workers: num_cpus::get(),
        }
    }
}

impl ServerConfig {
    /// Create a new ServerConfig with custom values
    pub fn new(addr: SocketAddr, workers: usize) -> Self {
        let workers = if workers == 0 {
            let default = Self::default().workers;
            tracing::warn!(workers, default, "invalid worker count, using default");
            default
        } else {
            workers
        };

        Self { addr, workers }
    }
}

/// Errors that stop the server from starting or running
#[derive(Debug, Error)]
pub enum ServerError {
    /// The worker runtime could not be created
    #[error("Failed to create tokio runtime: {0}")]
    Runtime(#[source] std::io::Error),

    /// The listening socket could not be opened
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    /// The server failed while accepting connections
    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Create a receipt store of the requested type
pub fn create_store(store_type: StoreType) -> Arc<dyn ReceiptStore> {
    match store_type {
        StoreType::Locked => Arc::new(LockedReceiptStore::new()),
        StoreType::Sharded => Arc::new(ShardedReceiptStore::new()),
    }
}

/// Open the listening socket
pub async fn bind(addr: SocketAddr) -> Result<TcpListener, ServerError> {
    TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })
}

/// Serve the receipt API on `listener` until `shutdown` completes
pub async fn serve<F>(
    listener: TcpListener,
    processor: ReceiptProcessor,
    shutdown: F,
) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    tracing::info!(%addr, "listening");

    axum::serve(listener, api::router(processor))
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

/// Run the server until Ctrl-C
///
/// Builds a multi-threaded runtime with `config.workers` worker threads, so
/// requests are handled by a fixed pool sharing one receipt store.
pub fn run(config: ServerConfig, store_type: StoreType) -> Result<(), ServerError> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(config.workers)
        .enable_all()
        .build()
        .map_err(ServerError::Runtime)?;

    tracing::info!(workers = config.workers, store = ?store_type, "starting receipt processor");

    runtime.block_on(async {
        let listener = bind(config.addr).await?;
        let processor = ReceiptProcessor::new(create_store(store_type));
        serve(listener, processor, shutdown_signal()).await
    })
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
