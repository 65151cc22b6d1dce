//! Threshold alert rules.
//!
//! Alerting is data-driven: each rule pairs a currency with a threshold
//! predicate and a reason code, and can be toggled without touching the
//! evaluation logic.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::currency::Currency;

/// Reason code delivered to the alerting collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertReason {
    InvestmentOpportunity,
    LowBalance,
}

impl AlertReason {
    /// Wire representation of the reason code.
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertReason::InvestmentOpportunity => "investment_opportunity",
            AlertReason::LowBalance => "low_balance",
        }
    }
}

impl fmt::Display for AlertReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction of a threshold comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Comparison {
    /// Fires when the amount is strictly above the threshold.
    Above,
    /// Fires when the amount is strictly below the threshold.
    Below,
}

/// A single currency-specific threshold rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertRule {
    pub currency: Currency,
    pub comparison: Comparison,
    pub threshold: Decimal,
    pub reason: AlertReason,
    pub enabled: bool,
}

impl AlertRule {
    /// Whether `amount` in `currency` breaches this rule.
    ///
    /// Disabled rules and boundary values never breach; both comparisons
    /// are strict.
    pub fn breached_by(&self, currency: Currency, amount: Decimal) -> bool {
        if !self.enabled || self.currency != currency {
            return false;
        }
        match self.comparison {
            Comparison::Above => amount > self.threshold,
            Comparison::Below => amount < self.threshold,
        }
    }
}

/// Ordered set of alert rules evaluated after every successful conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertRules {
    rules: Vec<AlertRule>,
}

impl AlertRules {
    /// Builds a rule set from an explicit list, evaluated in order.
    pub fn new(rules: Vec<AlertRule>) -> Self {
        Self { rules }
    }

    /// The stock rule set: high-balance investment-opportunity rules plus
    /// low-balance rules for USD, EURO and SEK. GBP carries no rules; its
    /// conversion path fails before alerting is reached.
    pub fn standard() -> Self {
        Self::new(vec![
            rule(Currency::USD, Comparison::Above, dec!(10000), AlertReason::InvestmentOpportunity),
            rule(Currency::EURO, Comparison::Above, dec!(8400), AlertReason::InvestmentOpportunity),
            rule(Currency::SEK, Comparison::Above, dec!(86000), AlertReason::InvestmentOpportunity),
            rule(Currency::USD, Comparison::Below, dec!(10), AlertReason::LowBalance),
            rule(Currency::EURO, Comparison::Below, dec!(84), AlertReason::LowBalance),
            rule(Currency::SEK, Comparison::Below, dec!(86), AlertReason::LowBalance),
        ])
    }

    /// Rules breached by `amount` in `currency`, in declaration order.
    pub fn breached(
        &self,
        currency: Currency,
        amount: Decimal,
    ) -> impl Iterator<Item = &AlertRule> {
        self.rules
            .iter()
            .filter(move |rule| rule.breached_by(currency, amount))
    }
}

impl Default for AlertRules {
    fn default() -> Self {
        Self::standard()
    }
}

fn rule(
    currency: Currency,
    comparison: Comparison,
    threshold: Decimal,
    reason: AlertReason,
) -> AlertRule {
    AlertRule {
        currency,
        comparison,
        threshold,
        reason,
        enabled: true,
    }
}
