//! Database row types for the SQLite store.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;

use balance_types::{Account, AccountId, AccountNumber, CustomerId, StoreError};

/// Account row as stored in SQLite.
///
/// `balance_sek` and `last_transaction` live in TEXT columns and are parsed
/// on the way out, so a corrupt row surfaces as a `StoreError` instead of a
/// silently wrong balance.
#[derive(Debug, FromRow)]
pub struct DbAccount {
    pub id: i64,
    pub account_number: i64,
    pub business_customer_id: Option<i64>,
    pub account_holder: String,
    pub balance_sek: String,
    pub contact_information: Option<String>,
    pub last_transaction: String,
}

impl DbAccount {
    /// Converts the row into a domain `Account`.
    pub fn into_domain(self) -> Result<Account, StoreError> {
        let balance_sek = self
            .balance_sek
            .parse::<Decimal>()
            .map_err(|err| StoreError::Database(format!("bad balance column: {err}")))?;

        let last_transaction = DateTime::parse_from_rfc3339(&self.last_transaction)
            .map_err(|err| StoreError::Database(format!("bad timestamp column: {err}")))?
            .with_timezone(&Utc);

        let mut account = Account::new(
            AccountId::new(self.id),
            AccountNumber::new(self.account_number),
            self.account_holder,
            balance_sek,
            last_transaction,
        );
        account.business_customer_id = self.business_customer_id.map(CustomerId::new);
        account.contact_information = self.contact_information;

        Ok(account)
    }
}
