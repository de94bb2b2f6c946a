//! Mock transaction data.
//!
//! There is no transaction ledger. The home screen's "Recent Transactions"
//! panel is a fixed table keyed by card index, and the payment prompt carries
//! a fixed payload. Nothing here is persisted.

use facepay_core::Amount;
use serde::{Deserialize, Serialize};

/// How a transaction is categorized in the feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Purchase,
    Subscription,
}

/// One row of the recent-transactions feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: u32,
    pub name: String,
    pub amount: Amount,
    /// Relative or short date label, exactly as the feed displays it.
    pub date: String,
    /// Icon name from the mobile icon set.
    pub icon: String,
    pub kind: TransactionKind,
}

/// The fixed payload delivered by the mock payment notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MockPayment {
    pub merchant: String,
    pub amount: Amount,
    pub redirect_url: String,
}

impl MockPayment {
    /// The reference payload: Apple Store, $99.99.
    #[must_use]
    pub fn reference() -> Self {
        Self {
            merchant: "Apple Store".to_owned(),
            amount: Amount::from_cents(9999),
            redirect_url: "https://www.apple.com/store".to_owned(),
        }
    }

    /// Notification body line (`"Apple Store - $99.99"`).
    #[must_use]
    pub fn summary(&self) -> String {
        format!("{} - {}", self.merchant, self.amount.abs_display())
    }
}

fn row(id: u32, name: &str, cents: i64, date: &str, icon: &str, kind: TransactionKind) -> Transaction {
    Transaction {
        id,
        name: name.to_owned(),
        amount: Amount::from_cents(cents),
        date: date.to_owned(),
        icon: icon.to_owned(),
        kind,
    }
}

/// Static feed lookup by card index.
///
/// Only cards 0 and 1 have entries; every other index yields an empty list.
#[must_use]
pub fn transactions_for_card(card_index: usize) -> Vec<Transaction> {
    use TransactionKind::{Purchase, Subscription};

    match card_index {
        0 => vec![
            row(1, "Apple Store", -2999, "Today", "bag-outline", Purchase),
            row(2, "Starbucks Coffee", -575, "Yesterday", "cafe-outline", Purchase),
            row(3, "Online Shopping", -15620, "Dec 20", "card-outline", Purchase),
        ],
        1 => vec![
            row(4, "Netflix Subscription", -1599, "Dec 19", "tv-outline", Subscription),
            row(5, "Grocery Store", -8745, "Dec 18", "basket-outline", Purchase),
            row(6, "Gas Station", -4500, "Dec 17", "car-outline", Purchase),
        ],
        _ => Vec::new(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_only_first_two_cards() {
        assert_eq!(transactions_for_card(0).len(), 3);
        assert_eq!(transactions_for_card(1).len(), 3);
        assert!(transactions_for_card(2).is_empty());
        assert!(transactions_for_card(99).is_empty());
    }

    #[test]
    fn test_feed_amounts_are_debits() {
        for tx in transactions_for_card(0) {
            assert!(!tx.amount.is_credit());
        }
    }

    #[test]
    fn test_mock_payment_summary() {
        let payment = MockPayment::reference();
        assert_eq!(payment.summary(), "Apple Store - $99.99");
    }
}
