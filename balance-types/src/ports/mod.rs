//! Port traits for outbound dependencies of the balance workflow.

pub mod alerts;
pub mod rates;
pub mod store;

pub use alerts::AlertSink;
pub use rates::RateProvider;
pub use store::AccountStore;
