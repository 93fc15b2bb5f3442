//! Commands for the Finance Tracker

use crate::domain::{Transaction, TransactionKind};
use crate::repository::{MonthFlow, MonthTotals};
use crate::AppState;

pub async fn add_transaction(
    state: &AppState,
    title: String,
    amount: i64,
    kind: String,
    date: String,
    category: String,
) -> Result<Transaction, String> {
    let mut finance = state.finance.lock().await;
    finance
        .add_transaction(&title, amount, TransactionKind::from_str(&kind), &date, &category)
        .map_err(|e| e.to_string())
}

pub async fn update_transaction(
    state: &AppState,
    id: String,
    title: Option<String>,
    amount: Option<i64>,
    kind: Option<String>,
    date: Option<String>,
    category: Option<String>,
) -> Result<Transaction, String> {
    let mut finance = state.finance.lock().await;
    finance
        .update_transaction(
            &id,
            title,
            amount,
            kind.map(|k| TransactionKind::from_str(&k)),
            date,
            category,
        )
        .map_err(|e| e.to_string())
}

pub async fn delete_transaction(state: &AppState, id: String) -> Result<(), String> {
    let mut finance = state.finance.lock().await;
    finance.delete_transaction(&id).map_err(|e| e.to_string())
}

pub async fn list_transactions(state: &AppState) -> Result<Vec<Transaction>, String> {
    let finance = state.finance.lock().await;
    Ok(finance.transactions().to_vec())
}

/// Transactions dated in `year`/`month`
pub async fn month_transactions(
    state: &AppState,
    year: String,
    month: String,
) -> Result<Vec<Transaction>, String> {
    let finance = state.finance.lock().await;
    Ok(finance.month(&year, &month))
}

pub async fn month_totals(
    state: &AppState,
    year: String,
    month: String,
) -> Result<MonthTotals, String> {
    let finance = state.finance.lock().await;
    Ok(finance.month_totals(&year, &month))
}

/// Twelve per-month income/expense slots for the chart
pub async fn yearly_overview(state: &AppState, year: String) -> Result<Vec<MonthFlow>, String> {
    let finance = state.finance.lock().await;
    Ok(finance.yearly_overview(&year).to_vec())
}

/// CSV dump of one month, ready to save as a file
pub async fn export_month_csv(
    state: &AppState,
    year: String,
    month: String,
) -> Result<String, String> {
    let finance = state.finance.lock().await;
    Ok(finance.export_csv(&year, &month))
}
