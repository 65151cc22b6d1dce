//! Account store port trait.
//!
//! This is the primary port in our hexagonal architecture.
//! Adapters (SQLite, in-memory) will implement this trait.

use crate::domain::{Account, AccountId, CustomerId};
use crate::error::StoreError;

/// The account store the balance workflow reads from and writes back to.
///
/// The store owns account records and their consistency; the workflow issues
/// one read and at most one write per request.
#[async_trait::async_trait]
pub trait AccountStore: Send + Sync + 'static {
    /// Looks up an account by its direct id.
    async fn find_account_by_id(&self, id: AccountId) -> Result<Option<Account>, StoreError>;

    /// Lists the accounts belonging to a business customer.
    ///
    /// An unknown customer yields an empty list, not an error.
    async fn find_accounts_by_business_customer(
        &self,
        customer: CustomerId,
    ) -> Result<Vec<Account>, StoreError>;

    /// Persists a mutated account.
    ///
    /// Fails with [`StoreError::NotFound`] when the account does not exist.
    async fn save(&self, account: &Account) -> Result<(), StoreError>;
}
