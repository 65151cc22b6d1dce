//! In-memory account store.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;

use balance_types::{Account, AccountId, AccountStore, CustomerId, StoreError};

/// `AccountStore` backed by a concurrent in-process map.
///
/// Clones share the same underlying map, so a handle kept aside observes
/// saves made through the service. This is the default store for local
/// development and the one the HTTP integration tests run against.
#[derive(Clone, Default)]
pub struct MemoryStore {
    accounts: Arc<DashMap<AccountId, Account>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding the given accounts.
    pub fn with_accounts(accounts: Vec<Account>) -> Self {
        let store = Self::new();
        for account in accounts {
            store.insert(account);
        }
        store
    }

    /// Inserts or replaces an account.
    pub fn insert(&self, account: Account) {
        self.accounts.insert(account.id, account);
    }

    /// Number of stored accounts.
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// True when the store holds no accounts.
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

#[async_trait]
impl AccountStore for MemoryStore {
    async fn find_account_by_id(&self, id: AccountId) -> Result<Option<Account>, StoreError> {
        Ok(self.accounts.get(&id).map(|entry| entry.clone()))
    }

    async fn find_accounts_by_business_customer(
        &self,
        customer: CustomerId,
    ) -> Result<Vec<Account>, StoreError> {
        let mut accounts: Vec<Account> = self
            .accounts
            .iter()
            .filter(|entry| entry.business_customer_id == Some(customer))
            .map(|entry| entry.clone())
            .collect();
        // DashMap iteration order is arbitrary
        accounts.sort_by_key(|account| account.account_number.value());
        Ok(accounts)
    }

    async fn save(&self, account: &Account) -> Result<(), StoreError> {
        match self.accounts.get_mut(&account.id) {
            Some(mut entry) => {
                *entry = account.clone();
                Ok(())
            }
            None => Err(StoreError::NotFound),
        }
    }
}
