//! The JSON API for listing, creating and deleting transactions.

use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{Error, month::MonthQuery};

use super::{
    core::{NewTransaction, Transaction, parse_date},
    service::{create_transaction, delete_transaction, list_transactions},
    state::TransactionState,
};

/// The largest integer an `f64` holds exactly.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// The JSON body listing transactions.
#[derive(Debug, Serialize, Deserialize)]
pub struct TransactionsBody {
    pub transactions: Vec<Transaction>,
}

/// The JSON body holding a single transaction.
#[derive(Debug, Serialize, Deserialize)]
pub struct TransactionBody {
    pub transaction: Transaction,
}

/// The JSON body confirming a deletion.
#[derive(Debug, Serialize, Deserialize)]
pub struct SuccessBody {
    pub success: bool,
}

/// A route handler for listing transactions as JSON, newest first.
///
/// The `year` and `month` query parameters select a month, if either is
/// missing or invalid every transaction is listed.
pub async fn get_transactions_endpoint(
    State(state): State<TransactionState>,
    Query(query): Query<MonthQuery>,
) -> Response {
    const FAILURE_MESSAGE: &str = "Failed to get transactions";

    let today = match state.today() {
        Ok(today) => today,
        Err(error) => return error.into_json_response(FAILURE_MESSAGE),
    };

    match list_transactions(
        state.store.as_ref(),
        &state.database_id,
        query.year_month(),
        today,
    )
    .await
    {
        Ok(transactions) => Json(TransactionsBody { transactions }).into_response(),
        Err(error) => error.into_json_response(FAILURE_MESSAGE),
    }
}

/// A route handler for creating a transaction from a JSON body of the form
/// `{"name"?, "amount", "category", "date"?}`.
///
/// Responds with 201 and the created transaction, or 400 naming the first
/// invalid field.
pub async fn create_transaction_api_endpoint(
    State(state): State<TransactionState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Response {
    const FAILURE_MESSAGE: &str = "Failed to create transaction";

    let new_transaction = match body
        .map_err(|rejection| Error::InvalidRequestBody(rejection.body_text()))
        .and_then(|Json(body)| parse_new_transaction(&body))
    {
        Ok(new_transaction) => new_transaction,
        Err(error) => return error.into_json_response(FAILURE_MESSAGE),
    };

    let today = match state.today() {
        Ok(today) => today,
        Err(error) => return error.into_json_response(FAILURE_MESSAGE),
    };

    match create_transaction(
        state.store.as_ref(),
        &state.database_id,
        &new_transaction,
        today,
    )
    .await
    {
        Ok(transaction) => {
            (StatusCode::CREATED, Json(TransactionBody { transaction })).into_response()
        }
        Err(error) => error.into_json_response(FAILURE_MESSAGE),
    }
}

/// A route handler for archiving a transaction.
///
/// Upstream failures are reported with their message.
pub async fn delete_transaction_api_endpoint(
    State(state): State<TransactionState>,
    Path(transaction_id): Path<String>,
) -> Response {
    let transaction_id = transaction_id.trim();

    if transaction_id.is_empty() {
        return Error::MissingTransactionId.into_json_response("Transaction ID is required");
    }

    match delete_transaction(state.store.as_ref(), transaction_id).await {
        Ok(()) => Json(SuccessBody { success: true }).into_response(),
        Err(error) => {
            let message = error.to_string();
            error.into_json_response(&message)
        }
    }
}

/// Validate a JSON request body for a new transaction.
///
/// Fields are checked in the order amount, category, date.
fn parse_new_transaction(body: &Value) -> Result<NewTransaction, Error> {
    let amount = body
        .get("amount")
        .and_then(whole_number)
        .ok_or(Error::InvalidAmount)?;

    let category = body
        .get("category")
        .and_then(Value::as_str)
        .ok_or(Error::InvalidCategory)?;

    let date = match body.get("date") {
        None | Some(Value::Null) => None,
        Some(Value::String(date)) if date.is_empty() => None,
        Some(Value::String(date)) => Some(parse_date(date)?),
        Some(other) => return Err(Error::InvalidDate(other.to_string())),
    };

    let name = body.get("name").and_then(Value::as_str).map(str::to_owned);

    NewTransaction::new(name, amount, category.to_owned(), date)
}

/// The value as an integer if it is a JSON number without a fractional part.
fn whole_number(value: &Value) -> Option<i64> {
    value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|number| number.fract() == 0.0 && number.abs() < MAX_EXACT_INTEGER)
            .map(|number| number as i64)
    })
}
