//! SQLite account store adapter.
#![allow(clippy::collapsible_if)]

use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::SqliteConnectOptions;
use std::str::FromStr;

use balance_types::{Account, AccountId, AccountStore, CustomerId, StoreError};

use crate::types::DbAccount;

// ─────────────────────────────────────────────────────────────────────────────
// SQLite Store
// ─────────────────────────────────────────────────────────────────────────────

/// SQLite store implementation.
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Creates a new SQLite store with automatic migration.
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        // Ensure on-disk SQLite target directory exists (no-op for in-memory).
        if let Some(path) = database_url.strip_prefix("sqlite://") {
            // Remove query parameters
            let path = path.split('?').next().unwrap_or(path);
            if path != ":memory:" {
                let p = std::path::Path::new(path);
                if let Some(parent) = p.parent() {
                    if !parent.as_os_str().is_empty() {
                        tokio::fs::create_dir_all(parent).await?;
                    }
                }
            }
        }

        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePool::connect_with(options).await?;

        // Run migration from migration file
        let ddl = include_str!("../migrations/0001_create_accounts.sql");
        sqlx::query(ddl).execute(&pool).await?;

        Ok(Self { pool })
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Inserts an account row. Used by seeding and tests; the balance
    /// workflow itself never creates accounts.
    pub async fn insert_account(&self, account: &Account) -> Result<(), StoreError> {
        sqlx::query(
            r#"INSERT INTO accounts
               (id, account_number, business_customer_id, account_holder, balance_sek, contact_information, last_transaction)
               VALUES (?, ?, ?, ?, ?, ?, ?)"#,
        )
        .bind(account.id.value())
        .bind(account.account_number.value())
        .bind(account.business_customer_id.map(|customer| customer.value()))
        .bind(&account.account_holder)
        .bind(account.balance_sek.to_string())
        .bind(&account.contact_information)
        .bind(account.last_transaction.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(())
    }

    /// Number of account rows.
    pub async fn count_accounts(&self) -> Result<i64, StoreError> {
        let (count,): (i64,) = sqlx::query_as(r#"SELECT COUNT(*) FROM accounts"#)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(count)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Store implementation
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl AccountStore for SqliteStore {
    async fn find_account_by_id(&self, id: AccountId) -> Result<Option<Account>, StoreError> {
        let row: Option<DbAccount> = sqlx::query_as(
            r#"SELECT id, account_number, business_customer_id, account_holder,
                      balance_sek, contact_information, last_transaction
               FROM accounts WHERE id = ?"#,
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StoreError::Database(e.to_string()))?;

        row.map(DbAccount::into_domain).transpose()
    }

    async fn find_accounts_by_business_customer(
        &self,
        customer: CustomerId,
    ) -> Result<Vec<Account>, StoreError> {
        let rows: Vec<DbAccount> = sqlx::query_as(
            r#"SELECT id, account_number, business_customer_id, account_holder,
                      balance_sek, contact_information, last_transaction
               FROM accounts WHERE business_customer_id = ?
               ORDER BY account_number ASC"#,
        )
        .bind(customer.value())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StoreError::Database(e.to_string()))?;

        rows.into_iter().map(DbAccount::into_domain).collect()
    }

    async fn save(&self, account: &Account) -> Result<(), StoreError> {
        // The workflow only ever changes contact information; everything
        // else stays owned by whatever loaded the account.
        let result = sqlx::query(r#"UPDATE accounts SET contact_information = ? WHERE id = ?"#)
            .bind(&account.contact_information)
            .bind(account.id.value())
            .execute(&self.pool)
            .await
            .map_err(|e| StoreError::Database(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }

        Ok(())
    }
}
