//! Currency set supported by the balance service.

use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

use crate::error::DomainError;

/// Currencies a balance can be reported in.
///
/// Closed set: adding a member means extending the conversion dispatch and
/// the alert rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    USD,
    GBP,
    EURO,
    SEK,
}

impl Currency {
    /// The currency balances are persisted in.
    pub const BASE: Currency = Currency::SEK;

    /// Returns the wire name of the currency.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::GBP => "GBP",
            Currency::EURO => "EURO",
            Currency::SEK => "SEK",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Currency {
    type Err = DomainError;

    /// Matches the four currency names case-sensitively; anything else is
    /// `UnknownCurrency`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "USD" => Ok(Currency::USD),
            "GBP" => Ok(Currency::GBP),
            "EURO" => Ok(Currency::EURO),
            "SEK" => Ok(Currency::SEK),
            _ => Err(DomainError::UnknownCurrency(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_currencies() {
        assert_eq!("USD".parse::<Currency>().unwrap(), Currency::USD);
        assert_eq!("GBP".parse::<Currency>().unwrap(), Currency::GBP);
        assert_eq!("EURO".parse::<Currency>().unwrap(), Currency::EURO);
        assert_eq!("SEK".parse::<Currency>().unwrap(), Currency::SEK);
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!(matches!(
            "usd".parse::<Currency>(),
            Err(DomainError::UnknownCurrency(_))
        ));
        assert!(matches!(
            "Euro".parse::<Currency>(),
            Err(DomainError::UnknownCurrency(_))
        ));
    }

    #[test]
    fn test_parse_unknown_currency() {
        let err = "JPY".parse::<Currency>().unwrap_err();
        assert!(matches!(err, DomainError::UnknownCurrency(s) if s == "JPY"));
    }

    #[test]
    fn test_display_matches_wire_name() {
        assert_eq!(Currency::EURO.to_string(), "EURO");
        assert_eq!(Currency::SEK.to_string(), "SEK");
    }

    #[test]
    fn test_base_currency_is_sek() {
        assert_eq!(Currency::BASE, Currency::SEK);
    }
}
