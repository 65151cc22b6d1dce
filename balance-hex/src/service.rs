//! Balance Application Service
//!
//! Orchestrates the balance workflow through the store, rate, and alert
//! ports. Contains NO infrastructure logic - pure business orchestration.

use rust_decimal::Decimal;

use balance_types::{
    Account, AccountRef, AccountStore, AlertRules, AlertSink, AppError, BalanceSnapshot, Currency,
    DomainError, RateProvider,
};

/// Application service for the balance workflow.
///
/// Generic over the three outbound ports - adapters are injected at compile
/// time. This enables:
/// - Swapping stores, rate providers, and alert sinks without code changes
/// - Testing with in-memory fakes
/// - Compile-time checks for port implementation
pub struct BalanceService<S, R, A>
where
    S: AccountStore,
    R: RateProvider,
    A: AlertSink,
{
    store: S,
    rates: R,
    alerts: A,
    rules: AlertRules,
}

impl<S, R, A> BalanceService<S, R, A>
where
    S: AccountStore,
    R: RateProvider,
    A: AlertSink,
{
    /// Creates a new balance service with the standard alert rules.
    pub fn new(store: S, rates: R, alerts: A) -> Self {
        Self {
            store,
            rates,
            alerts,
            rules: AlertRules::standard(),
        }
    }

    /// Replaces the alert rule set.
    pub fn with_rules(mut self, rules: AlertRules) -> Self {
        self.rules = rules;
        self
    }

    /// Runs the balance workflow for one request.
    ///
    /// Stages, strictly in order: parse the identifier, parse the currency,
    /// locate the account, persist a contact update if an email was supplied,
    /// convert the SEK balance into the target currency, evaluate alert
    /// rules, build the snapshot. A persistence failure aborts the request
    /// before any conversion; alert delivery failures are logged and
    /// swallowed.
    pub async fn balance(
        &self,
        identifier: &str,
        currency: &str,
        contact_email: Option<&str>,
    ) -> Result<BalanceSnapshot, AppError> {
        let account_ref = AccountRef::parse(identifier)?;
        let currency: Currency = currency.parse()?;

        let mut account = self.locate(account_ref).await?;

        if let Some(email) = contact_email.filter(|e| !e.is_empty()) {
            account.update_contact(email);
            self.store
                .save(&account)
                .await
                .map_err(|e| AppError::PersistenceError(e.to_string()))?;
        }

        let converted = self.convert(account.balance_sek, currency).await?;
        self.evaluate_alerts(&account, currency, converted).await;

        // Business lookups answer without an account id; the response keeps
        // that field nullable.
        let account_id = match account_ref {
            AccountRef::Direct(_) => Some(account.id),
            AccountRef::Business { .. } => None,
        };

        Ok(BalanceSnapshot::build(
            account_id,
            converted,
            account.account_holder,
            account.last_transaction,
        ))
    }

    /// Resolves an account reference through the store.
    ///
    /// Business references select the first of the customer's accounts whose
    /// account number matches.
    async fn locate(&self, account_ref: AccountRef) -> Result<Account, AppError> {
        let found = match account_ref {
            AccountRef::Direct(id) => self
                .store
                .find_account_by_id(id)
                .await
                .map_err(|e| AppError::Internal(e.to_string()))?,
            AccountRef::Business {
                customer,
                account_number,
            } => self
                .store
                .find_accounts_by_business_customer(customer)
                .await
                .map_err(|e| AppError::Internal(e.to_string()))?
                .into_iter()
                .find(|a| a.account_number == account_number),
        };

        found
            .ok_or(DomainError::AccountNotFound(account_ref))
            .map_err(Into::into)
    }

    /// Converts a SEK amount into the requested currency.
    ///
    /// SEK is the storage denomination, so no rate lookup happens for it.
    /// GBP is not implemented and fails without touching the provider.
    async fn convert(&self, amount_sek: Decimal, currency: Currency) -> Result<Decimal, AppError> {
        match currency {
            Currency::SEK => Ok(amount_sek),
            Currency::GBP => Err(DomainError::UnsupportedCurrency(Currency::GBP).into()),
            Currency::USD | Currency::EURO => self
                .rates
                .convert(amount_sek, Currency::SEK, currency)
                .await
                .map_err(Into::into),
        }
    }

    /// Fires an alert for every rule the converted amount breaches.
    ///
    /// Delivery is best-effort: a failed delivery is logged, never returned.
    async fn evaluate_alerts(&self, account: &Account, currency: Currency, amount: Decimal) {
        for rule in self.rules.breached(currency, amount) {
            if let Err(err) = self.alerts.trigger_alert(account.id, rule.reason).await {
                tracing::warn!(
                    account_id = %account.id,
                    reason = rule.reason.as_str(),
                    error = %err,
                    "alert delivery failed"
                );
            }
        }
    }
}
