//! # Balance Types
//!
//! Domain types and port traits for the account balance service.
//! This crate has ZERO external IO dependencies - only data structures,
//! business rules, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain types (Account, Currency, AccountRef, alert rules)
//! - `ports/` - Trait definitions that adapters must implement
//! - `dto/` - Data Transfer Objects for API boundaries
//! - `error/` - Domain and application error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    Account, AccountId, AccountNumber, AccountRef, AlertReason, AlertRule, AlertRules, Comparison,
    Currency, CustomerId,
};
pub use dto::*;
pub use error::{AlertError, AppError, DomainError, RateError, StoreError};
pub use ports::{AccountStore, AlertSink, RateProvider};
