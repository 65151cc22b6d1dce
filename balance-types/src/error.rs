//! Error types for the balance service.

use crate::domain::{AccountRef, Currency};

/// Domain-level errors (identifier and currency rules, lookup outcomes).
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("malformed account identifier: {0:?}")]
    MalformedIdentifier(String),

    #[error("unknown currency: {0:?}")]
    UnknownCurrency(String),

    #[error("conversion to {0} is not implemented")]
    UnsupportedCurrency(Currency),

    #[error("account not found: {0}")]
    AccountNotFound(AccountRef),
}

/// Account store errors (data access failures).
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(String),

    #[error("entity not found")]
    NotFound,
}

/// Rate provider errors.
#[derive(Debug, thiserror::Error)]
pub enum RateError {
    #[error("no rate available for {0} -> {1}")]
    RateNotAvailable(Currency, Currency),

    #[error("rate service unavailable: {0}")]
    ServiceUnavailable(String),
}

/// Alert delivery errors.
///
/// Best-effort from the workflow's point of view: the caller logs these and
/// never fails the balance request over them.
#[derive(Debug, thiserror::Error)]
pub enum AlertError {
    #[error("alert delivery failed: {0}")]
    Delivery(String),
}

/// Application-level errors (for HTTP responses).
///
/// Maps cleanly to HTTP status codes.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("conversion to {0} is not implemented")]
    UnsupportedCurrency(Currency),

    #[error("currency conversion failed: {0}")]
    ConversionError(String),

    #[error("failed to persist contact information: {0}")]
    PersistenceError(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::MalformedIdentifier(_) | DomainError::UnknownCurrency(_) => {
                AppError::BadRequest(err.to_string())
            }
            DomainError::UnsupportedCurrency(currency) => AppError::UnsupportedCurrency(currency),
            DomainError::AccountNotFound(_) => AppError::NotFound(err.to_string()),
        }
    }
}

impl From<RateError> for AppError {
    fn from(err: RateError) -> Self {
        AppError::ConversionError(err.to_string())
    }
}
