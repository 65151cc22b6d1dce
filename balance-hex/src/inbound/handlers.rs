//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use balance_types::{AccountStore, AlertSink, AppError, RateProvider};

use crate::BalanceService;

/// Application state shared across handlers.
pub struct AppState<S, R, A>
where
    S: AccountStore,
    R: RateProvider,
    A: AlertSink,
{
    pub service: BalanceService<S, R, A>,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::UnsupportedCurrency(_) => StatusCode::NOT_IMPLEMENTED,
            AppError::ConversionError(_) => StatusCode::BAD_GATEWAY,
            AppError::PersistenceError(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = serde_json::json!({
            "error": self.0.to_string(),
            "code": status.as_u16()
        });

        (status, Json(body)).into_response()
    }
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// Balance lookup without a contact update.
#[tracing::instrument(skip(state))]
pub async fn balance<S: AccountStore, R: RateProvider, A: AlertSink>(
    State(state): State<Arc<AppState<S, R, A>>>,
    Path((identifier, currency)): Path<(String, String)>,
) -> Result<impl IntoResponse, ApiError> {
    let snapshot = state.service.balance(&identifier, &currency, None).await?;
    Ok(Json(snapshot))
}

/// Balance lookup that also records a new contact email.
#[tracing::instrument(skip(state))]
pub async fn balance_with_contact<S: AccountStore, R: RateProvider, A: AlertSink>(
    State(state): State<Arc<AppState<S, R, A>>>,
    Path((identifier, currency, email)): Path<(String, String, String)>,
) -> Result<impl IntoResponse, ApiError> {
    let snapshot = state
        .service
        .balance(&identifier, &currency, Some(email.as_str()))
        .await?;
    Ok(Json(snapshot))
}
