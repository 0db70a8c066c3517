use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::Error;

use super::{service::delete_transaction, state::TransactionState};

/// A route handler for deleting a transaction from the list page.
///
/// Responds with an empty body so that htmx removes the row, or an alert on failure.
pub async fn delete_transaction_endpoint(
    State(state): State<TransactionState>,
    Path(transaction_id): Path<String>,
) -> Response {
    let transaction_id = transaction_id.trim();

    if transaction_id.is_empty() {
        return Error::MissingTransactionId.into_alert_response("削除に失敗しました");
    }

    match delete_transaction(state.store.as_ref(), transaction_id).await {
        // The status code has to be 200 OK or htmx will not delete the row.
        Ok(()) => StatusCode::OK.into_response(),
        Err(error) => error.into_alert_response("削除に失敗しました"),
    }
}
