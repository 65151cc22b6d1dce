//! Balance CLI
//!
//! Command-line interface for the Balance API.

use anyhow::Result;
use clap::{Parser, Subcommand};

use balance_client::BalanceClient;
use balance_types::Currency;

#[derive(Parser)]
#[command(name = "balance")]
#[command(author, version, about = "Balance API CLI client", long_about = None)]
struct Cli {
    /// Base URL of the Balance API
    #[arg(long, env = "BALANCE_API_URL", default_value = "http://localhost:3000")]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a balance snapshot
    Balance {
        /// Account identifier: a numeric id ("1001") or a business
        /// reference ("BA5-2")
        identifier: String,
        /// Currency to report the balance in (USD, GBP, EURO, SEK)
        currency: String,
        /// Contact email to record on the account before answering
        #[arg(long)]
        email: Option<String>,
    },
    /// Start a local listener that prints alert webhook deliveries
    Listen {
        /// Port to listen on
        #[arg(long, default_value = "4000")]
        port: u16,
    },
    /// Check API health
    Health,
}

fn parse_currency(s: &str) -> Result<Currency> {
    s.to_uppercase()
        .parse()
        .map_err(|_| anyhow::anyhow!("Unknown currency: {}. Supported: USD, GBP, EURO, SEK", s))
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let client = BalanceClient::new(&cli.api_url);

    match cli.command {
        Commands::Health => {
            let healthy = client.health().await?;
            if healthy {
                println!("✓ API is healthy");
            } else {
                println!("✗ API is not healthy");
                std::process::exit(1);
            }
        }

        Commands::Balance {
            identifier,
            currency,
            email,
        } => {
            let currency = parse_currency(&currency)?;
            let snapshot = client
                .balance(&identifier, currency, email.as_deref())
                .await?;
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
        }

        Commands::Listen { port } => {
            let app = axum::Router::new().route("/alerts", axum::routing::post(handle_alert));
            let addr = std::net::SocketAddr::from(([127, 0, 0, 1], port));
            println!("Listening for alert deliveries on {}", addr);
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            axum::serve(listener, app).await?;
        }
    }

    Ok(())
}

async fn handle_alert(
    headers: axum::http::HeaderMap,
    body: String,
) -> impl axum::response::IntoResponse {
    println!("POST /alerts HTTP/1.1");
    for (name, value) in &headers {
        println!("{}: {:?}", name, value);
    }
    println!();
    println!("{}", body);
    println!("----------------------------------------");
    axum::http::StatusCode::OK
}
