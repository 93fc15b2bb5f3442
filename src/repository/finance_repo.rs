//! Finance Repository
//!
//! Income/expense transactions with month-scoped summaries. Dates are plain
//! `YYYY/MM/DD` strings, so all period filtering is prefix matching.

use log::warn;
use serde::Serialize;

use crate::domain::{DomainError, DomainResult, Transaction, TransactionKind};

use super::ids::next_id;
use super::traits::SharedStore;

pub const KEY_TRANSACTIONS: &str = "finance_transactions";

/// Fallback categories applied when the form leaves the field blank
const DEFAULT_INCOME_CATEGORY: &str = "Project";
const DEFAULT_EXPENSE_CATEGORY: &str = "Other";

/// Totals for one month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthTotals {
    pub income: i64,
    pub expense: i64,
    pub balance: i64,
}

/// One slot of the yearly overview chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct MonthFlow {
    pub income: i64,
    pub expense: i64,
}

/// Store-backed transaction ledger
pub struct FinanceRepository {
    store: SharedStore,
    transactions: Vec<Transaction>,
}

impl FinanceRepository {
    pub fn load(store: SharedStore) -> Self {
        let transactions = match store.get(KEY_TRANSACTIONS) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                warn!("malformed value under '{}', starting empty: {}", KEY_TRANSACTIONS, e);
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("failed to read '{}', starting empty: {}", KEY_TRANSACTIONS, e);
                Vec::new()
            }
        };
        Self {
            store,
            transactions,
        }
    }

    pub fn add_transaction(
        &mut self,
        title: &str,
        amount: i64,
        kind: TransactionKind,
        date: &str,
        category: &str,
    ) -> DomainResult<Transaction> {
        let title = title.trim();
        if title.is_empty() || date.trim().is_empty() {
            return Err(DomainError::InvalidInput(
                "transaction title and date are required".into(),
            ));
        }
        if amount <= 0 {
            return Err(DomainError::InvalidInput(
                "transaction amount must be positive".into(),
            ));
        }
        let tx = Transaction {
            id: next_id(),
            title: title.to_string(),
            amount,
            kind,
            date: date.trim().to_string(),
            category: default_category(category, kind),
        };
        self.transactions.insert(0, tx.clone());
        self.persist();
        Ok(tx)
    }

    pub fn update_transaction(
        &mut self,
        id: &str,
        title: Option<String>,
        amount: Option<i64>,
        kind: Option<TransactionKind>,
        date: Option<String>,
        category: Option<String>,
    ) -> DomainResult<Transaction> {
        if title.as_deref().map(str::trim) == Some("") {
            return Err(DomainError::InvalidInput("transaction title is required".into()));
        }
        if matches!(amount, Some(a) if a <= 0) {
            return Err(DomainError::InvalidInput(
                "transaction amount must be positive".into(),
            ));
        }
        let tx = self
            .transactions
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| DomainError::NotFound(format!("transaction {} not found", id)))?;
        if let Some(title) = title {
            tx.title = title.trim().to_string();
        }
        if let Some(amount) = amount {
            tx.amount = amount;
        }
        if let Some(kind) = kind {
            tx.kind = kind;
        }
        if let Some(date) = date {
            tx.date = date;
        }
        if let Some(category) = category {
            tx.category = default_category(&category, tx.kind);
        }
        let updated = tx.clone();
        self.persist();
        Ok(updated)
    }

    pub fn delete_transaction(&mut self, id: &str) -> DomainResult<()> {
        if !super::remove_by_id(&mut self.transactions, id) {
            return Err(DomainError::NotFound(format!("transaction {} not found", id)));
        }
        self.persist();
        Ok(())
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Transactions dated inside `year`/`month` (e.g. "1403", "02")
    pub fn month(&self, year: &str, month: &str) -> Vec<Transaction> {
        let prefix = format!("{}/{}", year, month);
        self.transactions
            .iter()
            .filter(|t| t.date.starts_with(&prefix))
            .cloned()
            .collect()
    }

    pub fn month_totals(&self, year: &str, month: &str) -> MonthTotals {
        let mut totals = MonthTotals {
            income: 0,
            expense: 0,
            balance: 0,
        };
        for tx in self.month(year, month) {
            match tx.kind {
                TransactionKind::Income => totals.income += tx.amount,
                TransactionKind::Expense => totals.expense += tx.amount,
            }
        }
        totals.balance = totals.income - totals.expense;
        totals
    }

    /// Per-month flows for the chart; slot 0 is the year's first month.
    /// Transactions with an unparseable month land nowhere.
    pub fn yearly_overview(&self, year: &str) -> [MonthFlow; 12] {
        let mut slots = [MonthFlow::default(); 12];
        let prefix = format!("{}/", year);
        for tx in self.transactions.iter().filter(|t| t.date.starts_with(&prefix)) {
            let month_index = tx
                .date
                .split('/')
                .nth(1)
                .and_then(|m| m.parse::<usize>().ok())
                .and_then(|m| m.checked_sub(1));
            if let Some(index) = month_index.filter(|i| *i < 12) {
                match tx.kind {
                    TransactionKind::Income => slots[index].income += tx.amount,
                    TransactionKind::Expense => slots[index].expense += tx.amount,
                }
            }
        }
        slots
    }

    /// CSV dump of one month, BOM-prefixed so spreadsheet apps pick the
    /// right encoding.
    pub fn export_csv(&self, year: &str, month: &str) -> String {
        let mut lines = vec!["Title,Amount,Type,Date,Category".to_string()];
        for tx in self.month(year, month) {
            lines.push(format!(
                "{},{},{},{},{}",
                csv_field(&tx.title),
                tx.amount,
                tx.kind.as_str(),
                tx.date,
                csv_field(&tx.category)
            ));
        }
        format!("\u{feff}{}", lines.join("\n"))
    }

    fn persist(&self) {
        match serde_json::to_string(&self.transactions) {
            Ok(json) => {
                if let Err(e) = self.store.set(KEY_TRANSACTIONS, &json) {
                    warn!(
                        "failed to persist '{}', keeping in-memory state: {}",
                        KEY_TRANSACTIONS, e
                    );
                }
            }
            Err(e) => warn!("failed to serialize '{}': {}", KEY_TRANSACTIONS, e),
        }
    }
}

fn default_category(category: &str, kind: TransactionKind) -> String {
    let category = category.trim();
    if !category.is_empty() {
        return category.to_string();
    }
    match kind {
        TransactionKind::Income => DEFAULT_INCOME_CATEGORY.to_string(),
        TransactionKind::Expense => DEFAULT_EXPENSE_CATEGORY.to_string(),
    }
}

/// Quote a field if it would break the row
fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
