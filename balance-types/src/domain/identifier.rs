//! Account identifier parsing.
//!
//! Identifiers are either a plain numeric account id (`"123"`) or a business
//! account reference of the form `BA<customer>-<number>` (`"BA42-7"`).

use std::fmt;
use std::str::FromStr;

use super::account::{AccountId, AccountNumber, CustomerId};
use crate::error::DomainError;

/// Marker prefix for business account identifiers.
const BUSINESS_PREFIX: &str = "BA";

/// A parsed account identifier.
///
/// Exactly one variant applies to any identifier; parsing never produces a
/// half-filled reference. References are request-scoped and never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountRef {
    /// Plain numeric account id.
    Direct(AccountId),
    /// Business customer id plus the sub-account number within that customer.
    Business {
        customer: CustomerId,
        account_number: AccountNumber,
    },
}

impl AccountRef {
    /// Parses an opaque identifier string.
    ///
    /// A `BA`-prefixed identifier splits on the first `-` into the customer
    /// id and the account number; both segments must be plain decimal digits.
    /// Anything else is parsed as a direct account id under the same rule.
    pub fn parse(identifier: &str) -> Result<Self, DomainError> {
        let malformed = || DomainError::MalformedIdentifier(identifier.to_string());

        if let Some(rest) = identifier.strip_prefix(BUSINESS_PREFIX) {
            let (customer, number) = rest.split_once('-').ok_or_else(malformed)?;
            Ok(AccountRef::Business {
                customer: CustomerId::new(parse_digits(customer).ok_or_else(malformed)?),
                account_number: AccountNumber::new(parse_digits(number).ok_or_else(malformed)?),
            })
        } else {
            Ok(AccountRef::Direct(AccountId::new(
                parse_digits(identifier).ok_or_else(malformed)?,
            )))
        }
    }
}

/// Parses a non-empty, all-digits decimal segment.
///
/// Signs, whitespace and overflow all reject.
fn parse_digits(segment: &str) -> Option<i64> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}

impl FromStr for AccountRef {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for AccountRef {
    /// Renders the canonical identifier form (`"123"`, `"BA42-7"`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountRef::Direct(id) => write!(f, "{}", id),
            AccountRef::Business {
                customer,
                account_number,
            } => write!(f, "{}{}-{}", BUSINESS_PREFIX, customer, account_number),
        }
    }
}
