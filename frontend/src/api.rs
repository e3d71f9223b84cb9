use gloo_net::http::{Request, Response};
use thiserror::Error;

use crate::model::{Debt, Expense, NewDebt, NewExpense};

const API_BASE_URL: &str = "http://localhost:8080";

/// Every remote failure collapses to one of these; callers log and move on.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(#[from] gloo_net::Error),
    #[error("server responded with status {0}")]
    Status(u16),
}

fn ensure_ok(resp: &Response) -> Result<(), ApiError> {
    if resp.ok() {
        Ok(())
    } else {
        Err(ApiError::Status(resp.status()))
    }
}

pub async fn fetch_expenses() -> Result<Vec<Expense>, ApiError> {
    let url = format!("{}/api/expenses", API_BASE_URL);
    let resp = Request::get(&url).send().await?;
    ensure_ok(&resp)?;
    Ok(resp.json().await?)
}

// The created record comes back in the response body, but the caller
// re-fetches the whole collection instead of patching local state.
pub async fn create_expense(expense: &NewExpense) -> Result<(), ApiError> {
    let url = format!("{}/api/expenses", API_BASE_URL);
    let resp = Request::post(&url).json(expense)?.send().await?;
    ensure_ok(&resp)
}

pub async fn delete_expense(id: i64) -> Result<(), ApiError> {
    let url = format!("{}/api/expenses/{}", API_BASE_URL, id);
    let resp = Request::delete(&url).send().await?;
    ensure_ok(&resp)
}

pub async fn fetch_debts() -> Result<Vec<Debt>, ApiError> {
    let url = format!("{}/api/debts", API_BASE_URL);
    let resp = Request::get(&url).send().await?;
    ensure_ok(&resp)?;
    Ok(resp.json().await?)
}

pub async fn create_debt(debt: &NewDebt) -> Result<(), ApiError> {
    let url = format!("{}/api/debts", API_BASE_URL);
    let resp = Request::post(&url).json(debt)?.send().await?;
    ensure_ok(&resp)
}

pub async fn delete_debt(id: i64) -> Result<(), ApiError> {
    let url = format!("{}/api/debts/{}", API_BASE_URL, id);
    let resp = Request::delete(&url).send().await?;
    ensure_ok(&resp)
}
