//! # Balance Application
//!
//! Binary that wires together all the components:
//! - Load configuration from environment
//! - Select and initialize the store and alert adapters
//! - Create the balance service
//! - Start the HTTP server

mod config;

use std::time::Duration;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use balance_adapters::{FixedRateProvider, LogAlertSink, MemoryStore, WebhookAlertSink, seed};
use balance_hex::{BalanceService, inbound::HttpServer};
use balance_types::{AccountStore, AlertSink};

use config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,balance_app=debug,balance_hex=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;

    tracing::info!("Starting balance server on port {}", config.port);

    // The store choice changes the service's type parameters, so each
    // configuration branch monomorphises its own wiring.
    match config.database_url.clone() {
        Some(database_url) => serve_sqlite(config, &database_url).await,
        None => {
            tracing::info!("No DATABASE_URL set, using the seeded in-memory store");
            let store = MemoryStore::with_accounts(seed::demo_accounts());
            serve_with_alerts(config, store).await
        }
    }
}

#[cfg(feature = "sqlite")]
async fn serve_sqlite(config: Config, database_url: &str) -> anyhow::Result<()> {
    use balance_adapters::SqliteStore;

    tracing::info!("Using database: {}", database_url);
    let store = SqliteStore::new(database_url).await?;

    if config.seed_demo_accounts && store.count_accounts().await? == 0 {
        for account in seed::demo_accounts() {
            store.insert_account(&account).await?;
        }
        tracing::info!("Seeded demo accounts into the empty database");
    }

    serve_with_alerts(config, store).await
}

#[cfg(not(feature = "sqlite"))]
async fn serve_sqlite(_config: Config, _database_url: &str) -> anyhow::Result<()> {
    anyhow::bail!("DATABASE_URL is set but this binary was built without the `sqlite` feature")
}

async fn serve_with_alerts<S>(config: Config, store: S) -> anyhow::Result<()>
where
    S: AccountStore,
{
    match config.alert_webhook_url.clone() {
        Some(url) => {
            tracing::info!("Delivering alerts to webhook at {}", url);
            let mut alerts = WebhookAlertSink::new(url);
            if let Some(secret) = &config.alert_webhook_secret {
                alerts = alerts.with_secret(secret);
            }
            serve(config, store, alerts).await
        }
        None => serve(config, store, LogAlertSink::new()).await,
    }
}

async fn serve<S, A>(config: Config, store: S, alerts: A) -> anyhow::Result<()>
where
    S: AccountStore,
    A: AlertSink,
{
    let service = BalanceService::new(store, FixedRateProvider::new(), alerts);
    let server = HttpServer::with_limits(
        service,
        config.rate_limit_per_minute,
        Duration::from_secs(config.request_timeout_secs),
    );
    let addr = format!("0.0.0.0:{}", config.port);

    server.run(&addr).await
}
