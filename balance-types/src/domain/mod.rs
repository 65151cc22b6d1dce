//! Domain model for the account balance service.

pub mod account;
pub mod alert;
pub mod currency;
pub mod identifier;

pub use account::{Account, AccountId, AccountNumber, CustomerId};
pub use alert::{AlertReason, AlertRule, AlertRules, Comparison};
pub use currency::Currency;
pub use identifier::AccountRef;
