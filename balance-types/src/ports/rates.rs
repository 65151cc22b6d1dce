//! Exchange rate port trait.

use rust_decimal::Decimal;

use crate::domain::Currency;
use crate::error::RateError;

/// Port for obtaining exchange rates between supported currencies.
///
/// Rates are multipliers: an amount in `from` times the rate yields the
/// amount in `to`.
#[async_trait::async_trait]
pub trait RateProvider: Send + Sync + 'static {
    /// Fetches the current rate from one currency to another.
    async fn rate(&self, from: Currency, to: Currency) -> Result<Decimal, RateError>;

    /// Converts an amount from one currency to another using [`rate`].
    ///
    /// [`rate`]: RateProvider::rate
    async fn convert(
        &self,
        amount: Decimal,
        from: Currency,
        to: Currency,
    ) -> Result<Decimal, RateError> {
        let rate = self.rate(from, to).await?;
        Ok(amount * rate)
    }
}
