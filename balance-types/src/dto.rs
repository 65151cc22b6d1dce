//! Data Transfer Objects (DTOs) for requests and responses.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::AccountId;

/// Balance snapshot returned to the caller.
///
/// `accountId` is only populated for direct lookups; business-identifier
/// requests serialise an explicit `null` (a deliberate, documented
/// asymmetry of the balance operation).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BalanceSnapshot {
    /// Numeric account id, absent for business-identifier lookups
    #[schema(value_type = Option<i64>, example = 1001)]
    pub account_id: Option<AccountId>,
    /// Balance denominated in the requested currency
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64, example = 90000.0)]
    pub balance: Decimal,
    /// Name of the account holder
    #[schema(example = "Astrid Lundqvist")]
    pub account_holder: String,
    /// Calendar date of the last transaction, `YYYY-MM-DD`
    #[schema(example = "2026-03-14")]
    pub last_transaction: String,
}

impl BalanceSnapshot {
    /// Assembles a snapshot, formatting the last-transaction timestamp.
    pub fn build(
        account_id: Option<AccountId>,
        balance: Decimal,
        account_holder: String,
        last_transaction: DateTime<Utc>,
    ) -> Self {
        Self {
            account_id,
            balance,
            account_holder,
            last_transaction: format_transaction_date(last_transaction),
        }
    }
}

/// Formats a timestamp as an ISO calendar date (`YYYY-MM-DD`).
///
/// Plain function on purpose: nothing shared, nothing to synchronise.
pub fn format_transaction_date(ts: DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d").to_string()
}
