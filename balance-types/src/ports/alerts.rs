//! Alert delivery port trait.

use crate::domain::{AccountId, AlertReason};
use crate::error::AlertError;

/// Port for delivering balance alerts to an external channel.
///
/// Delivery is fire-and-forget from the workflow's point of view: a failed
/// delivery must never fail the balance request itself.
#[async_trait::async_trait]
pub trait AlertSink: Send + Sync + 'static {
    /// Raises an alert for the given account.
    async fn trigger_alert(&self, account: AccountId, reason: AlertReason)
    -> Result<(), AlertError>;
}
