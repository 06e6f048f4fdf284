use crate::core::handler::BalanceHandler;
use crate::core::{BalanceSource, ConfigProvider};
use crate::utils::error::{BalanceError, Result};
use axum::{routing, Router};
use std::{future::Future, net::SocketAddr, sync::Arc};
use tokio::signal;

mod routes;

use routes::*;

const APP_NAME: &str = env!("CARGO_PKG_NAME");
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP front for a [`BalanceHandler`].
pub struct BalanceServer<S: BalanceSource, C: ConfigProvider> {
    addr: String,
    handler: Arc<BalanceHandler<S, C>>,
}

impl<S, C> BalanceServer<S, C>
where
    S: BalanceSource + 'static,
    C: ConfigProvider + 'static,
{
    pub fn new(handler: BalanceHandler<S, C>) -> Self {
        Self {
            addr: crate::config::DEFAULT_BIND_ADDR.to_string(),
            handler: Arc::new(handler),
        }
    }

    pub fn with_addr(mut self, addr: String) -> Self {
        self.addr = addr;
        self
    }

    pub fn router(&self) -> Router {
        let state = AppState {
            handler: self.handler.clone(),
            app_name: APP_NAME.to_string(),
            app_version: APP_VERSION.to_string(),
        };
        Router::new()
            .route("/api/balance", routing::post(get_balance::<S, C>))
            .route("/health", routing::get(get_health::<S, C>))
            .with_state(state)
    }

    pub async fn serve(self, signal: impl Future<Output = ()> + Send + 'static) -> Result<()> {
        let addr: SocketAddr = self.addr.parse().map_err(|e| BalanceError::InvalidConfigValueError {
            field: "addr".to_string(),
            value: self.addr.clone(),
            reason: format!("Invalid socket address: {}", e),
        })?;
        let listener = tokio::net::TcpListener::bind(addr).await?;
        self.serve_on(listener, signal).await
    }

    /// Serves on an already bound listener until `signal` resolves.
    pub async fn serve_on(
        self,
        listener: tokio::net::TcpListener,
        signal: impl Future<Output = ()> + Send + 'static,
    ) -> Result<()> {
        let app = self.router();
        tracing::info!(
            "🚀 {}@{} listening on {:?}",
            APP_NAME,
            APP_VERSION,
            listener.local_addr()?
        );

        axum::serve(listener, app)
            .with_graceful_shutdown(signal)
            .await?;

        Ok(())
    }
}

pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::warn!("Received termination signal, starting graceful shutdown");
}
