//! # Balance Hex
//!
//! Application service layer and HTTP adapter for the account balance
//! service.
//!
//! ## Architecture
//!
//! - `service/` - Application service (orchestrates the balance workflow)
//! - `inbound/` - HTTP adapter (Axum server)
//!
//! The service is generic over its three ports (`AccountStore`,
//! `RateProvider`, `AlertSink`), allowing different adapter implementations
//! to be injected.

pub mod inbound;
mod openapi;
pub mod service;


pub use service::BalanceService;
