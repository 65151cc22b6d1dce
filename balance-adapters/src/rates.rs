//! Fixed-table exchange rate provider.

use std::collections::HashMap;

use async_trait::async_trait;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use balance_types::{Currency, RateError, RateProvider};

/// `RateProvider` backed by a static rate table.
///
/// Stands in for a live rate feed; the standard table carries SEK-based
/// multipliers so conversions stay deterministic across runs and tests.
#[derive(Clone)]
pub struct FixedRateProvider {
    rates: HashMap<(Currency, Currency), Decimal>,
}

impl FixedRateProvider {
    /// Creates a provider with the standard SEK-based table.
    pub fn new() -> Self {
        let mut rates = HashMap::new();
        rates.insert((Currency::SEK, Currency::USD), dec!(0.105));
        rates.insert((Currency::SEK, Currency::EURO), dec!(0.089));
        rates.insert((Currency::SEK, Currency::GBP), dec!(0.077));
        Self { rates }
    }

    /// Overrides or adds a single rate.
    pub fn with_rate(mut self, from: Currency, to: Currency, rate: Decimal) -> Self {
        self.rates.insert((from, to), rate);
        self
    }
}

impl Default for FixedRateProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RateProvider for FixedRateProvider {
    async fn rate(&self, from: Currency, to: Currency) -> Result<Decimal, RateError> {
        if from == to {
            return Ok(Decimal::ONE);
        }
        self.rates
            .get(&(from, to))
            .copied()
            .ok_or(RateError::RateNotAvailable(from, to))
    }
}
