//! Account domain model.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Unique identifier for an Account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct AccountId(i64);

impl AccountId {
    /// Creates an AccountId from a raw numeric id.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the numeric value.
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a business customer owning one or more accounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct CustomerId(i64);

impl CustomerId {
    /// Creates a CustomerId from a raw numeric id.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the numeric value.
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Number distinguishing the accounts of one business customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct AccountNumber(i64);

impl AccountNumber {
    /// Creates an AccountNumber from a raw number.
    pub fn new(number: i64) -> Self {
        Self(number)
    }

    /// Returns the numeric value.
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A customer account as held by the account store.
///
/// Balances are persisted in the base currency (SEK). The balance workflow
/// reads accounts and mutates only `contact_information`; everything else is
/// owned by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier
    pub id: AccountId,
    /// Number of this account within its owning customer
    pub account_number: AccountNumber,
    /// Owning business customer, if this is a business sub-account
    pub business_customer_id: Option<CustomerId>,
    /// Name of the account holder
    pub account_holder: String,
    /// Current balance, denominated in SEK
    pub balance_sek: Decimal,
    /// Contact email, if one has been recorded
    pub contact_information: Option<String>,
    /// When the account last saw a transaction
    pub last_transaction: DateTime<Utc>,
}

impl Account {
    /// Creates a personal account with no business customer attached.
    pub fn new(
        id: AccountId,
        account_number: AccountNumber,
        account_holder: impl Into<String>,
        balance_sek: Decimal,
        last_transaction: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            account_number,
            business_customer_id: None,
            account_holder: account_holder.into(),
            balance_sek,
            contact_information: None,
            last_transaction,
        }
    }

    /// Attaches this account to a business customer.
    pub fn with_business_customer(mut self, customer: CustomerId) -> Self {
        self.business_customer_id = Some(customer);
        self
    }

    /// Records a new contact email. Persisting the change is the store's job.
    pub fn update_contact(&mut self, email: impl Into<String>) {
        self.contact_information = Some(email.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    fn some_account() -> Account {
        Account::new(
            AccountId::new(1001),
            AccountNumber::new(1),
            "Astrid Lundqvist",
            dec!(90000),
            Utc.with_ymd_and_hms(2026, 3, 14, 9, 30, 0).unwrap(),
        )
    }

    #[test]
    fn test_new_account_has_no_contact() {
        let account = some_account();
        assert_eq!(account.account_holder, "Astrid Lundqvist");
        assert_eq!(account.balance_sek, dec!(90000));
        assert!(account.contact_information.is_none());
        assert!(account.business_customer_id.is_none());
    }

    #[test]
    fn test_update_contact() {
        let mut account = some_account();
        account.update_contact("astrid@example.com");
        assert_eq!(
            account.contact_information.as_deref(),
            Some("astrid@example.com")
        );
    }

    #[test]
    fn test_with_business_customer() {
        let account = some_account().with_business_customer(CustomerId::new(5));
        assert_eq!(account.business_customer_id, Some(CustomerId::new(5)));
    }

    #[test]
    fn test_id_display() {
        assert_eq!(AccountId::new(42).to_string(), "42");
        assert_eq!(CustomerId::new(7).to_string(), "7");
        assert_eq!(AccountNumber::new(3).to_string(), "3");
    }
}
