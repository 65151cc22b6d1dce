//! # Balance Adapters
//!
//! Concrete implementations of the outbound ports defined in
//! `balance-types`: account stores (in-memory and SQLite), a fixed-table
//! exchange rate provider, and alert sinks (log and signed webhook).
//!
//! The in-memory store is always available and backs local development
//! and tests. The SQLite store is opt-in via the `sqlite` feature so the
//! default build carries no database toolchain.

pub mod alerts;
pub mod memory;
pub mod rates;
pub mod security;
pub mod seed;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(feature = "sqlite")]
mod types;


pub use alerts::{LogAlertSink, WebhookAlertSink};
pub use memory::MemoryStore;
pub use rates::FixedRateProvider;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteStore;
