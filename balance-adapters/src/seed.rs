//! Deterministic demo data.

use balance_types::{Account, AccountId, AccountNumber, CustomerId};
use chrono::{DateTime, Utc};
use rust_decimal_macros::dec;

/// The demo account set used by in-memory mode and opt-in SQLite seeding.
///
/// Covers the interesting corners: personal accounts above, inside and below
/// the alert thresholds, plus one business customer (id 5) with three
/// numbered accounts.
pub fn demo_accounts() -> Vec<Account> {
    vec![
        Account::new(
            AccountId::new(1001),
            AccountNumber::new(1001),
            "Astrid Lindqvist",
            dec!(90000),
            ts("2024-03-07T15:30:00Z"),
        ),
        Account::new(
            AccountId::new(1002),
            AccountNumber::new(1002),
            "Bo Nilsson",
            dec!(42.50),
            ts("2023-11-30T08:00:00Z"),
        ),
        Account::new(
            AccountId::new(1003),
            AccountNumber::new(1003),
            "Cecilia Öberg",
            dec!(12500),
            ts("2024-06-18T19:45:00Z"),
        ),
        Account::new(
            AccountId::new(2001),
            AccountNumber::new(1),
            "Nordic Imports AB",
            dec!(150000),
            ts("2024-01-15T10:00:00Z"),
        )
        .with_business_customer(CustomerId::new(5)),
        Account::new(
            AccountId::new(2002),
            AccountNumber::new(2),
            "Nordic Imports AB",
            dec!(64000),
            ts("2024-02-20T11:30:00Z"),
        )
        .with_business_customer(CustomerId::new(5)),
        Account::new(
            AccountId::new(2003),
            AccountNumber::new(3),
            "Nordic Imports AB",
            dec!(70),
            ts("2024-05-02T09:10:00Z"),
        )
        .with_business_customer(CustomerId::new(5)),
    ]
}

fn ts(raw: &str) -> DateTime<Utc> {
    raw.parse().expect("demo timestamps are valid RFC 3339")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_demo_ids_are_unique() {
        let accounts = demo_accounts();
        let ids: HashSet<_> = accounts.iter().map(|account| account.id).collect();

        assert_eq!(ids.len(), accounts.len());
    }

    #[test]
    fn test_demo_set_has_one_business_customer() {
        let accounts = demo_accounts();
        let business: Vec<_> = accounts
            .iter()
            .filter(|account| account.business_customer_id == Some(CustomerId::new(5)))
            .collect();

        assert_eq!(business.len(), 3);
        let numbers: HashSet<_> = business
            .iter()
            .map(|account| account.account_number)
            .collect();
        assert_eq!(numbers.len(), 3);
    }
}
