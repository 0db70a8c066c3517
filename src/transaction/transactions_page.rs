//! Defines the route handler for the list page, which shows the transactions
//! and the total of a month.

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use unicode_segmentation::UnicodeSegmentation;

use crate::{
    Error,
    endpoints::{self, format_endpoint},
    html::{BUTTON_DELETE_STYLE, ERROR_TEXT_STYLE, ROW_STYLE, base, format_yen},
    month::{MonthQuery, YearMonth},
    navigation::{Tab, page_header},
};

use super::{
    core::{Transaction, monthly_total},
    service::list_transactions,
    state::TransactionState,
};

/// Names longer than this many characters are cut short in the list.
const MAX_NAME_LENGTH: usize = 12;

const TRASH_ICON_PATH: &str = "M9 2a1 1 0 00-.894.553L7.382 4H4a1 1 0 000 2v10a2 2 0 002 2h8a2 \
    2 0 002-2V6a1 1 0 100-2h-3.382l-.724-1.447A1 1 0 0011 2H9zM7 8a1 1 0 012 0v6a1 1 0 11-2 \
    0V8zm5-1a1 1 0 00-1 1v6a1 1 0 102 0V8a1 1 0 00-1-1z";

/// Shorten `name` to [MAX_NAME_LENGTH] user-perceived characters, adding an
/// ellipsis if anything was cut.
fn truncate_name(name: &str) -> String {
    let mut graphemes = name.graphemes(true);
    let truncated = graphemes.by_ref().take(MAX_NAME_LENGTH).collect::<String>();

    if graphemes.next().is_some() {
        format!("{truncated}…")
    } else {
        truncated
    }
}

fn transaction_row(transaction: &Transaction) -> Markup {
    let delete_url = format_endpoint(endpoints::DELETE_TRANSACTION, &transaction.id);

    html! {
        div class=(format!("transaction-row {ROW_STYLE}")) data-transaction-id=(transaction.id)
        {
            div class="flex items-center gap-4 min-w-0"
            {
                span class="text-gray-500 text-sm w-12"
                {
                    (transaction.date.month() as u8) "/" (transaction.date.day())
                }
                span class="text-gray-700 font-medium w-20" { (transaction.category) }
                @match &transaction.name {
                    Some(name) => span class="text-gray-600 truncate" title=(name) { (truncate_name(name)) },
                    None => span class="text-gray-600" { "-" },
                }
            }

            div class="flex items-center gap-3"
            {
                span class="font-semibold text-gray-800" { (format_yen(transaction.amount)) }
                button
                    type="button"
                    class=(BUTTON_DELETE_STYLE)
                    aria-label="削除"
                    hx-delete=(delete_url)
                    hx-confirm="この支出を削除しますか？"
                    hx-target="closest .transaction-row"
                    hx-target-error="#alert-container"
                    hx-swap="delete"
                {
                    svg
                        xmlns="http://www.w3.org/2000/svg"
                        class="h-5 w-5"
                        viewBox="0 0 20 20"
                        fill="currentColor"
                    {
                        path fill-rule="evenodd" d=(TRASH_ICON_PATH) clip-rule="evenodd" {}
                    }
                }
            }
        }
    }
}

fn transactions_view(year_month: YearMonth, transactions: Option<&[Transaction]>) -> Markup {
    let content = html! {
        (page_header(Tab::List, year_month))

        @match transactions {
            None => div class=(ERROR_TEXT_STYLE) { "データの取得に失敗しました" },
            Some(transactions) => {
                div id="monthly-total" class="bg-blue-50 rounded-lg p-4"
                {
                    div class="text-sm text-blue-600" { "今月の合計" }
                    div class="text-2xl font-bold text-blue-800"
                    {
                        (format_yen(monthly_total(transactions)))
                    }
                }

                @if transactions.is_empty() {
                    p class="text-gray-500 text-center py-8" { "この月の支出はありません" }
                } @else {
                    div id="transactions" class="space-y-2"
                    {
                        @for transaction in transactions {
                            (transaction_row(transaction))
                        }
                    }
                }
            }
        }
    };

    base("家計簿 | 一覧", &content)
}

/// Renders the list page.
///
/// The `year` and `month` query parameters select the month, the current
/// month is shown if they are missing or invalid. If the transactions cannot
/// be loaded the page still renders with an error message in place of the list.
pub async fn get_transactions_page(
    State(state): State<TransactionState>,
    Query(query): Query<MonthQuery>,
) -> Result<Response, Error> {
    let today = state.today().inspect_err(|error| {
        tracing::error!("Could not get today's date: {error}");
    })?;
    let year_month = query
        .year_month()
        .unwrap_or_else(|| YearMonth::from_date(today));

    let transactions = list_transactions(
        state.store.as_ref(),
        &state.database_id,
        Some(year_month),
        today,
    )
    .await
    .inspect_err(|error| {
        tracing::error!("Could not get transactions for {}: {error}", year_month.label());
    })
    .ok();

    Ok(transactions_view(year_month, transactions.as_deref()).into_response())
}
