//! OpenAPI specification and documentation.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use balance_types::domain::{AccountId, Currency};
use balance_types::dto::BalanceSnapshot;
use utoipa::OpenApi;

// Dummy functions to generate path documentation
// These are not the actual handlers, just for OpenAPI path generation

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = inline(serde_json::Value), example = json!({"status": "healthy"}))
    )
)]
async fn health() {}

/// Balance snapshot in a target currency
#[utoipa::path(
    get,
    path = "/api/balance/{identifier}/{currency}",
    tag = "balance",
    params(
        ("identifier" = String, Path, description = "Direct account id (`1001`) or business identifier (`BA5-2`)"),
        ("currency" = String, Path, description = "Target currency: USD, EURO or SEK (GBP is not implemented)")
    ),
    responses(
        (status = 200, description = "Balance snapshot", body = BalanceSnapshot),
        (status = 400, description = "Malformed identifier or unknown currency"),
        (status = 404, description = "No account matches the identifier"),
        (status = 501, description = "Conversion to the requested currency is not implemented"),
        (status = 502, description = "Rate provider failure")
    )
)]
async fn balance() {}

/// Balance snapshot that also records a contact email
#[utoipa::path(
    get,
    path = "/api/balance/{identifier}/{currency}/{email}",
    tag = "balance",
    params(
        ("identifier" = String, Path, description = "Direct account id or business identifier"),
        ("currency" = String, Path, description = "Target currency: USD, EURO or SEK"),
        ("email" = String, Path, description = "New contact email, persisted before any conversion")
    ),
    responses(
        (status = 200, description = "Balance snapshot, contact email persisted", body = BalanceSnapshot),
        (status = 400, description = "Malformed identifier or unknown currency"),
        (status = 404, description = "No account matches the identifier"),
        (status = 500, description = "Contact update could not be persisted"),
        (status = 501, description = "Conversion to the requested currency is not implemented"),
        (status = 502, description = "Rate provider failure")
    )
)]
async fn balance_with_contact() {}

/// OpenAPI documentation for the Balance API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Account Balance Service API",
        version = "1.0.0",
        description = "Account balance lookups with currency conversion, contact updates, and threshold alerting. Balances are stored in SEK and converted on demand.",
        license(name = "MIT"),
    ),
    paths(health, balance, balance_with_contact),
    components(schemas(BalanceSnapshot, Currency, AccountId)),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "balance", description = "Account balance lookups"),
    )
)]
pub struct ApiDoc;
