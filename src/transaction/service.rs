//! Lists, creates and archives transactions in the Notion transaction database.

use time::Date;

use crate::{
    Error,
    month::YearMonth,
    notion::{DocumentStore, UpdatePageRequest},
};

use super::{
    core::{NewTransaction, Transaction, create_page_request, map_to_transaction},
    query::transaction_query,
};

/// Get the transactions in `year_month` (or all transactions for `None`),
/// newest first.
///
/// Follows the pagination cursor until Notion reports no more results.
/// Pages with missing or malformed properties are read with defaults, see
/// [map_to_transaction]; an absent date becomes `today`.
///
/// # Errors
/// Returns the first error from the store. No partial list is returned.
pub async fn list_transactions(
    store: &dyn DocumentStore,
    database_id: &str,
    year_month: Option<YearMonth>,
    today: Date,
) -> Result<Vec<Transaction>, Error> {
    let mut query = transaction_query(year_month);
    let mut transactions = Vec::new();

    loop {
        let results = store.query_database(database_id, &query).await?;
        let next_cursor = results.next_cursor.clone().filter(|_| results.has_more);

        transactions.extend(
            results
                .into_pages()
                .map(|page| map_to_transaction(&page, today)),
        );

        match next_cursor {
            Some(cursor) => query.start_cursor = Some(cursor),
            None => break,
        }
    }

    tracing::debug!(
        "Got {} transactions for {:?}",
        transactions.len(),
        year_month.map(YearMonth::label)
    );

    Ok(transactions)
}

/// Create `transaction` in the database `database_id` and return it as stored.
///
/// The transaction is dated `today` if it has no date.
///
/// # Errors
/// Returns [Error::Upstream] if Notion rejects the page.
pub async fn create_transaction(
    store: &dyn DocumentStore,
    database_id: &str,
    transaction: &NewTransaction,
    today: Date,
) -> Result<Transaction, Error> {
    let date = transaction.date.unwrap_or(today);
    let request = create_page_request(database_id, transaction, date);

    let page = store.create_page(&request).await?;
    tracing::info!("Created transaction {}", page.id);

    Ok(map_to_transaction(&page, today))
}

/// Archive (logically delete) the transaction `page_id`.
///
/// Archiving an archived transaction succeeds again. No existence check is
/// done beforehand: whatever Notion reports is returned.
///
/// # Errors
/// Returns [Error::Upstream] if Notion rejects the update, e.g. for an unknown ID.
pub async fn delete_transaction(store: &dyn DocumentStore, page_id: &str) -> Result<(), Error> {
    store
        .update_page(page_id, &UpdatePageRequest::archive())
        .await?;
    tracing::info!("Archived transaction {page_id}");

    Ok(())
}
