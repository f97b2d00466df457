//! HTTP Server configuration and startup.

use std::sync::Arc;

use axum::{Router, middleware, routing::get};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use offline_methods_types::{AssetResolver, MethodsOffSettings, PaymentMethodCatalog};

use super::handlers::{self, AppState};
use super::rate_limit::{PRUNE_INTERVAL, RateLimiterState, rate_limit_middleware};
use crate::OfflineMethodsService;

/// HTTP Server for the checkout configuration API.
pub struct HttpServer<S, C, A>
where
    S: MethodsOffSettings,
    C: PaymentMethodCatalog,
    A: AssetResolver,
{
    state: Arc<AppState<S, C, A>>,
    rate_limiter: Arc<RateLimiterState>,
}

impl<S, C, A> HttpServer<S, C, A>
where
    S: MethodsOffSettings,
    C: PaymentMethodCatalog,
    A: AssetResolver,
{
    /// Creates a new HTTP server with the given service.
    pub fn new(service: OfflineMethodsService<S, C, A>) -> Self {
        Self {
            state: Arc::new(AppState { service }),
            rate_limiter: Arc::new(RateLimiterState::default()),
        }
    }

    /// Creates a new HTTP server with custom rate limiting.
    pub fn with_rate_limit(
        service: OfflineMethodsService<S, C, A>,
        requests_per_minute: u32,
    ) -> Self {
        use std::time::Duration;
        Self {
            state: Arc::new(AppState { service }),
            rate_limiter: Arc::new(RateLimiterState::new(
                requests_per_minute,
                Duration::from_secs(60),
            )),
        }
    }

    /// Builds the Axum router with all routes.
    pub fn router(&self) -> Router {
        // Build HTTP metrics layer (uses globally set MeterProvider)
        let metrics = axum_otel_metrics::HttpMetricsLayerBuilder::new().build();

        Router::new()
            .route("/health", get(handlers::health))
            .route("/api-docs/openapi.json", get(handlers::openapi_json))
            .route(
                "/api/stores/{store_id}/checkout-config",
                get(handlers::checkout_config::<S, C, A>),
            )
            .route(
                "/api/stores/{store_id}/payment-methods-off",
                get(handlers::payment_methods_off::<S, C, A>),
            )
            .fallback(handlers::not_found)
            .layer(metrics)
            .layer(middleware::from_fn_with_state(
                self.rate_limiter.clone(),
                rate_limit_middleware,
            ))
            .layer(CorsLayer::permissive())
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Runs the server on the given address with graceful shutdown.
    pub async fn run(self, addr: &str) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("Server listening on {}", listener.local_addr()?);

        let rate_limiter = self.rate_limiter.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(PRUNE_INTERVAL);
            loop {
                interval.tick().await;
                rate_limiter.prune();
                tracing::debug!(
                    clients = rate_limiter.tracked_clients(),
                    "Pruned idle rate limiter state"
                );
            }
        });

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
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

    tracing::info!("Shutdown signal received, starting graceful shutdown...");
}
