//! Defines the route handler for the input page, the page for entering a new transaction.

use std::sync::Arc;

use axum::{
    extract::{FromRef, Query, State},
    response::{IntoResponse, Response},
};
use axum_extra::extract::CookieJar;
use maud::{Markup, html};
use time::Date;

use crate::{
    AppState, Error,
    category::list_categories,
    endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, CARD_STYLE, ERROR_TEXT_STYLE, FORM_LABEL_STYLE,
        FORM_RADIO_INPUT_STYLE, FORM_RADIO_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, base,
        loading_spinner,
    },
    month::{MonthQuery, YearMonth},
    navigation::{Tab, page_header},
    notion::DocumentStore,
    recent_categories::RecentCategories,
    timezone::local_today,
};

use super::core::format_date;

/// The state needed for the input page.
#[derive(Clone)]
pub struct NewTransactionPageState {
    /// The store holding the category database.
    pub store: Arc<dyn DocumentStore>,
    /// The ID of the category database.
    pub category_database_id: String,
    /// The local timezone as a canonical timezone name, e.g. "Asia/Tokyo".
    pub local_timezone: String,
}

impl FromRef<AppState> for NewTransactionPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
            category_database_id: state.category_database_id.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

fn category_choices(categories: &[&str]) -> Markup {
    html! {
        div class="flex flex-wrap gap-1.5"
        {
            @for (index, category) in categories.iter().enumerate() {
                @let id = format!("category-{index}");
                div
                {
                    input
                        type="radio"
                        name="category"
                        id=(id)
                        value=(category)
                        checked[index == 0]
                        required
                        class=(FORM_RADIO_INPUT_STYLE);
                    label for=(id) class=(FORM_RADIO_LABEL_STYLE) { (category) }
                }
            }
        }
    }
}

fn new_transaction_view(
    year_month: YearMonth,
    today: Date,
    categories: Option<&[&str]>,
) -> Markup {
    let spinner = loading_spinner();

    let content = html! {
        (page_header(Tab::Input, year_month))

        div class=(CARD_STYLE)
        {
            form
                hx-post=(endpoints::TRANSACTIONS)
                hx-target-error="#alert-container"
                hx-disabled-elt="#submit-button"
                class="space-y-4"
            {
                h2 class="text-lg font-semibold text-gray-800" { "新規登録" }

                fieldset
                {
                    legend class=(FORM_LABEL_STYLE) { "カテゴリ" }

                    @match categories {
                        Some([]) => {
                            p class="text-sm text-gray-500" { "カテゴリがありません" }
                        }
                        Some(categories) => (category_choices(categories)),
                        None => {
                            p class=(ERROR_TEXT_STYLE) { "カテゴリの取得に失敗しました" }
                        }
                    }
                }

                div
                {
                    label for="name" class=(FORM_LABEL_STYLE) { "名前（任意）" }

                    input
                        name="name"
                        id="name"
                        type="text"
                        placeholder="購入品名"
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                div
                {
                    label for="amount" class=(FORM_LABEL_STYLE) { "金額" }

                    input
                        name="amount"
                        id="amount"
                        type="text"
                        inputmode="numeric"
                        pattern="[0-9]*"
                        placeholder="0"
                        required
                        autofocus
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                div
                {
                    label for="date" class=(FORM_LABEL_STYLE) { "購入日" }

                    input
                        name="date"
                        id="date"
                        type="date"
                        value=(format_date(today))
                        required
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                button type="submit" id="submit-button" class=(BUTTON_PRIMARY_STYLE)
                {
                    span id="indicator" class="inline htmx-indicator" { (spinner) }
                    " 登録"
                }
            }
        }
    };

    base("家計簿", &content)
}

/// Renders the input page.
///
/// The `year` and `month` query parameters select the month shown in the
/// header, the current month is shown if they are missing or invalid.
/// Categories are listed with the recently used ones first.
pub async fn get_new_transaction_page(
    State(state): State<NewTransactionPageState>,
    Query(query): Query<MonthQuery>,
    jar: CookieJar,
) -> Result<Response, Error> {
    let today = local_today(&state.local_timezone).inspect_err(|error| {
        tracing::error!("Could not get today's date: {error}");
    })?;
    let year_month = query
        .year_month()
        .unwrap_or_else(|| YearMonth::from_date(today));

    let categories =
        match list_categories(state.store.as_ref(), &state.category_database_id).await {
            Ok(categories) => Some(
                categories
                    .into_iter()
                    .map(|category| category.name)
                    .collect::<Vec<_>>(),
            ),
            Err(error) => {
                tracing::error!("Could not get categories for the input page: {error}");
                None
            }
        };

    let recent = RecentCategories::from_cookies(&jar);
    let ordered = categories.as_deref().map(|all| recent.order(all));

    Ok(new_transaction_view(year_month, today, ordered.as_deref()).into_response())
}

#[cfg(test)]
mod view_tests {
    use std::sync::Arc;

    use axum::extract::{Query, State};
    use axum_extra::extract::CookieJar;

    use crate::{
        endpoints,
        month::MonthQuery,
        recent_categories::RecentCategories,
        test_utils::{
            FakeStore, assert_content_type, assert_form_input, assert_hx_endpoint,
            assert_status_ok, assert_valid_html, must_get_form, parse_html_document,
            select_texts,
        },
        timezone::{DEFAULT_TIMEZONE, local_today},
        transaction::format_date,
    };

    use super::{NewTransactionPageState, get_new_transaction_page};

    const CATEGORY_DATABASE_ID: &str = "categories";

    fn state(store: FakeStore) -> NewTransactionPageState {
        NewTransactionPageState {
            store: Arc::new(store),
            category_database_id: CATEGORY_DATABASE_ID.to_owned(),
            local_timezone: DEFAULT_TIMEZONE.to_owned(),
        }
    }

    fn month_query(year: &str, month: &str) -> MonthQuery {
        MonthQuery {
            year: Some(year.to_owned()),
            month: Some(month.to_owned()),
        }
    }

    #[tokio::test]
    async fn renders_form() {
        let store = FakeStore::new();
        store.insert_category(CATEGORY_DATABASE_ID, "a", "交通費");
        store.insert_category(CATEGORY_DATABASE_ID, "b", "食費");

        let response = get_new_transaction_page(
            State(state(store)),
            Query(month_query("2024", "2")),
            CookieJar::new(),
        )
        .await
        .unwrap();

        assert_status_ok(&response);
        assert_content_type(&response, "text/html; charset=utf-8");
        let document = parse_html_document(response).await;
        assert_valid_html(&document);
        let form = must_get_form(&document);
        assert_hx_endpoint(&form, endpoints::TRANSACTIONS, "hx-post");
        assert_form_input(&form, "category", "radio", true);
        assert_form_input(&form, "name", "text", false);
        assert_form_input(&form, "amount", "text", true);
        let today = local_today(DEFAULT_TIMEZONE).unwrap();
        assert_eq!(
            assert_form_input(&form, "date", "date", true),
            Some(format_date(today).as_str())
        );
        assert_eq!(
            select_texts(&document, "#month-selector span"),
            vec!["2024年2月".to_owned()]
        );
    }

    #[tokio::test]
    async fn lists_recent_categories_first() {
        let store = FakeStore::new();
        store.insert_category(CATEGORY_DATABASE_ID, "a", "交通費");
        store.insert_category(CATEGORY_DATABASE_ID, "b", "食費");
        store.insert_category(CATEGORY_DATABASE_ID, "c", "日用品");
        let mut recent = RecentCategories::default();
        recent.record("日用品");

        let response = get_new_transaction_page(
            State(state(store)),
            Query(MonthQuery::default()),
            recent.add_to(CookieJar::new()),
        )
        .await
        .unwrap();

        let document = parse_html_document(response).await;
        assert_eq!(
            select_texts(&document, "form label[for^='category-']"),
            vec!["日用品".to_owned(), "交通費".to_owned(), "食費".to_owned()]
        );
        let checked = select_texts(&document, "input[name=category][checked] + label");
        assert_eq!(checked, vec!["日用品".to_owned()]);
    }

    #[tokio::test]
    async fn invalid_month_shows_current_month() {
        let today = local_today(DEFAULT_TIMEZONE).unwrap();

        let response = get_new_transaction_page(
            State(state(FakeStore::new())),
            Query(month_query("2024", "13")),
            CookieJar::new(),
        )
        .await
        .unwrap();

        let document = parse_html_document(response).await;
        assert_eq!(
            select_texts(&document, "#month-selector span"),
            vec![format!("{}年{}月", today.year(), today.month() as u8)]
        );
    }

    #[tokio::test]
    async fn category_failure_is_shown_inline() {
        let response = get_new_transaction_page(
            State(state(FakeStore::failing(500))),
            Query(MonthQuery::default()),
            CookieJar::new(),
        )
        .await
        .unwrap();

        assert_status_ok(&response);
        let document = parse_html_document(response).await;
        assert_valid_html(&document);
        assert_eq!(
            select_texts(&document, "fieldset p"),
            vec!["カテゴリの取得に失敗しました".to_owned()]
        );
    }
}
