//! Defines the endpoint for creating a new transaction from the input page.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
// Must use axum_extra's Form since that parses an empty string as None instead
// of crashing like axum::Form.
use axum_extra::extract::{CookieJar, Form};
use axum_htmx::HxRedirect;
use serde::Deserialize;

use crate::{
    Error,
    month::YearMonth,
    navigation::{Tab, month_url},
    recent_categories::RecentCategories,
};

use super::{
    core::{NewTransaction, parse_date},
    service::create_transaction,
    state::TransactionState,
};

const FAILURE_MESSAGE: &str = "登録に失敗しました";

/// The form data for creating a transaction.
#[derive(Debug, Deserialize)]
pub struct TransactionForm {
    /// The name of the selected category.
    pub category: Option<String>,
    /// An optional label for the transaction.
    pub name: Option<String>,
    /// The amount in whole yen, as typed by the user.
    pub amount: Option<String>,
    /// The purchase date as `YYYY-MM-DD`.
    pub date: Option<String>,
}

impl TransactionForm {
    fn validate(self) -> Result<NewTransaction, Error> {
        let amount = self
            .amount
            .as_deref()
            .and_then(|amount| amount.trim().parse::<i64>().ok())
            .ok_or(Error::InvalidAmount)?;

        let date = self
            .date
            .as_deref()
            .map(str::trim)
            .filter(|date| !date.is_empty())
            .map(parse_date)
            .transpose()?;

        NewTransaction::new(self.name, amount, self.category.unwrap_or_default(), date)
    }
}

/// A route handler for creating a new transaction.
///
/// On success the category is remembered as recently used and the client is
/// redirected to the input page for the month of the new transaction.
pub async fn create_transaction_endpoint(
    State(state): State<TransactionState>,
    jar: CookieJar,
    Form(form): Form<TransactionForm>,
) -> Response {
    let new_transaction = match form.validate() {
        Ok(new_transaction) => new_transaction,
        Err(error) => return error.into_alert_response(FAILURE_MESSAGE),
    };

    let today = match state.today() {
        Ok(today) => today,
        Err(error) => return error.into_alert_response(FAILURE_MESSAGE),
    };

    let transaction = match create_transaction(
        state.store.as_ref(),
        &state.database_id,
        &new_transaction,
        today,
    )
    .await
    {
        Ok(transaction) => transaction,
        Err(error) => return error.into_alert_response(FAILURE_MESSAGE),
    };

    let mut recent = RecentCategories::from_cookies(&jar);
    recent.record(&transaction.category);

    (
        recent.add_to(jar),
        HxRedirect(month_url(Tab::Input, YearMonth::from_date(transaction.date))),
        StatusCode::SEE_OTHER,
    )
        .into_response()
}
