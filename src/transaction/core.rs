//! Defines the core data models for transactions and the mapping to and from Notion pages.

use serde::{Deserialize, Serialize};
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

use crate::{
    Error,
    notion::{CreatePageRequest, DateInput, Page, Parent, PropertyInput, SelectInput},
};

// ============================================================================
// PROPERTY NAMES
// ============================================================================

/// The title property holding the optional label of a transaction.
pub const NAME_PROPERTY: &str = "Name";
/// The number property holding the amount in yen.
pub const AMOUNT_PROPERTY: &str = "Amount";
/// The select property holding the category name.
pub const CATEGORY_PROPERTY: &str = "Category";
/// The date property holding the purchase date.
pub const DATE_PROPERTY: &str = "Date";

const DATE_FORMAT: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

// ============================================================================
// MODELS
// ============================================================================

/// An expense, i.e. an event where money was spent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// The ID Notion assigned to the page of the transaction.
    pub id: String,
    /// An optional label, e.g. what was bought.
    pub name: Option<String>,
    /// The amount of money spent in whole yen.
    pub amount: i64,
    /// The name of the category, empty if the page has none.
    pub category: String,
    /// When the money was spent.
    #[serde(with = "iso_date")]
    pub date: Date,
    /// When the page was created in Notion, copied verbatim.
    pub created_at: String,
}

/// The details of a transaction to create.
///
/// Use [NewTransaction::new] to create a validated instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTransaction {
    pub name: Option<String>,
    pub amount: i64,
    pub category: String,
    /// The purchase date, or `None` for today.
    pub date: Option<Date>,
}

impl NewTransaction {
    /// Validate the details of a new transaction.
    ///
    /// An empty or blank `name` is treated as no name.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::InvalidAmount] if `amount` is not greater than zero,
    /// - or [Error::InvalidCategory] if `category` is blank.
    pub fn new(
        name: Option<String>,
        amount: i64,
        category: String,
        date: Option<Date>,
    ) -> Result<Self, Error> {
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        if category.trim().is_empty() {
            return Err(Error::InvalidCategory);
        }

        Ok(Self {
            name: name.filter(|name| !name.trim().is_empty()),
            amount,
            category,
            date,
        })
    }
}

/// Parse a date in the format `YYYY-MM-DD`.
///
/// # Errors
/// Returns [Error::InvalidDate] if `text` is not four, two and two digits
/// separated by dashes, or is not a date on the calendar (e.g. `2024-02-30`).
pub fn parse_date(text: &str) -> Result<Date, Error> {
    let is_iso_shape = text.len() == 10
        && text.char_indices().all(|(index, char)| match index {
            4 | 7 => char == '-',
            _ => char.is_ascii_digit(),
        });

    if !is_iso_shape {
        return Err(Error::InvalidDate(text.to_owned()));
    }

    Date::parse(text, DATE_FORMAT).map_err(|_| Error::InvalidDate(text.to_owned()))
}

/// Format a date as `YYYY-MM-DD`.
pub fn format_date(date: Date) -> String {
    date.format(DATE_FORMAT)
        .unwrap_or_else(|_| date.to_string())
}

/// The sum of the amounts of `transactions`.
pub fn monthly_total(transactions: &[Transaction]) -> i64 {
    transactions
        .iter()
        .map(|transaction| transaction.amount)
        .sum()
}

// ============================================================================
// MAPPING
// ============================================================================

/// Read a transaction from a Notion page.
///
/// Never fails: a missing or malformed property gets a default value so that
/// one bad page does not hide the rest of the month.
/// - name: the concatenated title text, or `None` if the title has no text runs,
/// - amount: the number rounded to whole yen, or 0,
/// - category: the selected option, or an empty string,
/// - date: the calendar date of the start of the date property, or `today`.
pub fn map_to_transaction(page: &Page, today: Date) -> Transaction {
    let amount = page
        .number(AMOUNT_PROPERTY)
        .map(|amount| amount.round() as i64)
        .unwrap_or(0);

    let date = page
        .date_start(DATE_PROPERTY)
        .and_then(|start| {
            // Date-times such as "2024-02-01T09:30:00.000+09:00" keep only the date.
            let date = start.get(..10).unwrap_or(start);
            match parse_date(date) {
                Ok(date) => Some(date),
                Err(error) => {
                    tracing::warn!("Page {} has an invalid date {start:?}: {error}", page.id);
                    None
                }
            }
        })
        .unwrap_or(today);

    Transaction {
        id: page.id.clone(),
        name: page.title(NAME_PROPERTY),
        amount,
        category: page
            .select(CATEGORY_PROPERTY)
            .unwrap_or_default()
            .to_owned(),
        date,
        created_at: page.created_time.clone(),
    }
}

/// Build the request that creates `transaction` on `date` in the database `database_id`.
pub fn create_page_request(
    database_id: &str,
    transaction: &NewTransaction,
    date: Date,
) -> CreatePageRequest {
    CreatePageRequest {
        parent: Parent {
            database_id: database_id.to_owned(),
        },
        properties: [
            (
                NAME_PROPERTY.to_owned(),
                PropertyInput::title(transaction.name.as_deref()),
            ),
            (
                AMOUNT_PROPERTY.to_owned(),
                PropertyInput::Number(transaction.amount),
            ),
            (
                CATEGORY_PROPERTY.to_owned(),
                PropertyInput::Select(SelectInput {
                    name: transaction.category.clone(),
                }),
            ),
            (
                DATE_PROPERTY.to_owned(),
                PropertyInput::Date(DateInput {
                    start: format_date(date),
                }),
            ),
        ]
        .into_iter()
        .collect(),
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use serde_json::json;
    use time::macros::date;

    use crate::{
        Error,
        notion::{Page, PropertyInput},
    };

    use super::{
        NewTransaction, Transaction, create_page_request, map_to_transaction, monthly_total,
        parse_date,
    };

    fn page(properties: serde_json::Value) -> Page {
        serde_json::from_value(json!({
            "id": "page-1",
            "created_time": "2024-02-05T01:02:03.000Z",
            "properties": properties
        }))
        .unwrap()
    }

    #[test]
    fn maps_complete_page() {
        let page = page(json!({
            "Name": {"type": "title", "title": [{"plain_text": "牛乳"}]},
            "Amount": {"type": "number", "number": 250},
            "Category": {"type": "select", "select": {"name": "食費"}},
            "Date": {"type": "date", "date": {"start": "2024-02-03"}}
        }));

        let transaction = map_to_transaction(&page, date!(2024 - 03 - 01));

        assert_eq!(
            transaction,
            Transaction {
                id: "page-1".to_owned(),
                name: Some("牛乳".to_owned()),
                amount: 250,
                category: "食費".to_owned(),
                date: date!(2024 - 02 - 03),
                created_at: "2024-02-05T01:02:03.000Z".to_owned(),
            }
        );
    }

    #[test]
    fn defaults_missing_and_null_properties() {
        let today = date!(2024 - 03 - 01);
        let page = page(json!({
            "Name": {"type": "title", "title": []},
            "Amount": {"type": "number", "number": null},
            "Date": {"type": "date", "date": null}
        }));

        let transaction = map_to_transaction(&page, today);

        assert_eq!(transaction.name, None);
        assert_eq!(transaction.amount, 0);
        assert_eq!(transaction.category, "");
        assert_eq!(transaction.date, today);
    }

    #[test]
    fn date_time_keeps_calendar_date() {
        let page = page(json!({
            "Date": {"type": "date", "date": {"start": "2024-02-29T23:30:00.000+09:00"}}
        }));

        let transaction = map_to_transaction(&page, date!(2024 - 03 - 01));

        assert_eq!(transaction.date, date!(2024 - 02 - 29));
    }

    #[test]
    fn invalid_date_falls_back_to_today() {
        let today = date!(2024 - 03 - 01);
        let page = page(json!({
            "Date": {"type": "date", "date": {"start": "yesterday"}}
        }));

        let transaction = map_to_transaction(&page, today);

        assert_eq!(transaction.date, today);
    }

    #[test]
    fn fractional_amount_is_rounded() {
        let page = page(json!({
            "Amount": {"type": "number", "number": 99.6}
        }));

        let transaction = map_to_transaction(&page, date!(2024 - 03 - 01));

        assert_eq!(transaction.amount, 100);
    }

    #[test]
    fn serializes_with_camel_case_and_iso_date() {
        let transaction = Transaction {
            id: "page-1".to_owned(),
            name: None,
            amount: 500,
            category: "日用品".to_owned(),
            date: date!(2024 - 02 - 01),
            created_at: "2024-02-01T00:00:00.000Z".to_owned(),
        };

        assert_eq!(
            serde_json::to_value(&transaction).unwrap(),
            json!({
                "id": "page-1",
                "name": null,
                "amount": 500,
                "category": "日用品",
                "date": "2024-02-01",
                "createdAt": "2024-02-01T00:00:00.000Z"
            })
        );
    }

    #[test]
    fn create_request_has_all_properties() {
        let transaction =
            NewTransaction::new(None, 500, "日用品".to_owned(), None).unwrap();

        let request = create_page_request("db-1", &transaction, date!(2024 - 02 - 10));

        assert_eq!(request.parent.database_id, "db-1");
        assert_eq!(request.properties["Name"], PropertyInput::title(None));
        assert_eq!(request.properties["Amount"], PropertyInput::Number(500));
        assert_eq!(
            serde_json::to_value(&request.properties["Date"]).unwrap(),
            json!({"date": {"start": "2024-02-10"}})
        );
        assert_eq!(
            serde_json::to_value(&request.properties["Category"]).unwrap(),
            json!({"select": {"name": "日用品"}})
        );
    }

    #[test]
    fn new_transaction_validates_amount_and_category() {
        assert_eq!(
            NewTransaction::new(None, 0, "食費".to_owned(), None),
            Err(Error::InvalidAmount)
        );
        assert_eq!(
            NewTransaction::new(None, -100, "食費".to_owned(), None),
            Err(Error::InvalidAmount)
        );
        assert_eq!(
            NewTransaction::new(None, 100, "  ".to_owned(), None),
            Err(Error::InvalidCategory)
        );
    }

    #[test]
    fn new_transaction_drops_empty_name() {
        let transaction =
            NewTransaction::new(Some(String::new()), 100, "食費".to_owned(), None).unwrap();

        assert_eq!(transaction.name, None);
    }

    #[test]
    fn parses_iso_dates_only() {
        assert_eq!(parse_date("2024-02-29"), Ok(date!(2024 - 02 - 29)));

        for text in ["2024-2-1", "2024/02/01", "20240201", "2023-02-29", "2024-13-01", ""] {
            assert_eq!(
                parse_date(text),
                Err(Error::InvalidDate(text.to_owned())),
                "want {text:?} to be rejected"
            );
        }
    }

    #[test]
    fn total_sums_amounts() {
        let transaction = |amount| Transaction {
            id: "id".to_owned(),
            name: None,
            amount,
            category: String::new(),
            date: date!(2024 - 02 - 01),
            created_at: String::new(),
        };

        assert_eq!(monthly_total(&[]), 0);
        assert_eq!(
            monthly_total(&[transaction(100), transaction(250), transaction(0)]),
            350
        );
    }
}
