//! Builds the Notion database queries for listing transactions.

use crate::{
    month::{YearMonth, month_range},
    notion::{DatabaseQuery, DateCondition, Filter, Sort, SortDirection},
};

use super::core::{DATE_PROPERTY, format_date};

/// Build the query for the transactions in `year_month`, newest first.
///
/// With `None` every transaction is queried. A month is matched with the
/// half-open range from the first of the month up to, but not including, the
/// first of the next month.
pub fn transaction_query(year_month: Option<YearMonth>) -> DatabaseQuery {
    let filter = year_month.map(|year_month| {
        let range = month_range(year_month);

        Filter::And {
            and: vec![
                Filter::Date {
                    property: DATE_PROPERTY.to_owned(),
                    date: DateCondition::OnOrAfter(format_date(range.start)),
                },
                Filter::Date {
                    property: DATE_PROPERTY.to_owned(),
                    date: DateCondition::Before(format_date(range.end)),
                },
            ],
        }
    });

    DatabaseQuery {
        filter,
        sorts: vec![Sort {
            property: DATE_PROPERTY.to_owned(),
            direction: SortDirection::Descending,
        }],
        start_cursor: None,
    }
}
