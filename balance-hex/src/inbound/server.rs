//! HTTP Server configuration and startup.

use std::sync::Arc;
use std::time::Duration;

use axum::{Router, middleware, routing::get};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use balance_types::{AccountStore, AlertSink, RateProvider};

use super::handlers::{self, AppState};
use super::rate_limit::{RateLimiterState, rate_limit_middleware};
use crate::BalanceService;
use crate::openapi::ApiDoc;

/// HTTP Server for the Balance API.
pub struct HttpServer<S, R, A>
where
    S: AccountStore,
    R: RateProvider,
    A: AlertSink,
{
    state: Arc<AppState<S, R, A>>,
    rate_limiter: Arc<RateLimiterState>,
    request_timeout: Duration,
}

impl<S, R, A> HttpServer<S, R, A>
where
    S: AccountStore,
    R: RateProvider,
    A: AlertSink,
{
    /// Creates a new HTTP server with default limits.
    pub fn new(service: BalanceService<S, R, A>) -> Self {
        Self::with_limits(service, 120, Duration::from_secs(10))
    }

    /// Creates a new HTTP server with custom rate limiting and request
    /// timeout.
    pub fn with_limits(
        service: BalanceService<S, R, A>,
        requests_per_minute: u32,
        request_timeout: Duration,
    ) -> Self {
        Self {
            state: Arc::new(AppState { service }),
            rate_limiter: Arc::new(RateLimiterState::new(
                requests_per_minute,
                Duration::from_secs(60),
            )),
            request_timeout,
        }
    }

    /// Builds the Axum router with all routes.
    pub fn router(&self) -> Router {
        Router::new()
            .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
            .route("/health", get(handlers::health))
            .route(
                "/api/balance/{identifier}/{currency}",
                get(handlers::balance::<S, R, A>),
            )
            .route(
                "/api/balance/{identifier}/{currency}/{email}",
                get(handlers::balance_with_contact::<S, R, A>),
            )
            .layer(middleware::from_fn_with_state(
                self.rate_limiter.clone(),
                rate_limit_middleware,
            ))
            .layer(TimeoutLayer::new(self.request_timeout))
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Runs the server on the given address with graceful shutdown.
    pub async fn run(self, addr: &str) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("Server listening on {}", listener.local_addr()?);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown...");
}
