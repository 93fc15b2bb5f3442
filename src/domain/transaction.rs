//! Transaction Entity
//!
//! A single income or expense line in the finance tracker. Dates are plain
//! `YYYY/MM/DD` strings so month filtering is a prefix match, independent of
//! the calendar in use.

use serde::{Deserialize, Serialize};

use super::entity::Entity;

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    #[default]
    Income,
    Expense,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "expense" => TransactionKind::Expense,
            _ => TransactionKind::Income,
        }
    }
}

/// A finance tracker entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: String,
    pub title: String,
    /// Amount in the smallest display unit (always positive)
    pub amount: i64,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// Date string, YYYY/MM/DD
    pub date: String,
    pub category: String,
}

impl Entity for Transaction {
    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_round_trip() {
        assert_eq!(TransactionKind::from_str("expense"), TransactionKind::Expense);
        assert_eq!(TransactionKind::from_str("anything"), TransactionKind::Income);
        assert_eq!(TransactionKind::Expense.as_str(), "expense");
    }
}
