//! Transactions: the mapping from Notion pages, the month query, the service
//! operations and the pages and endpoints built on them.

mod api;
mod core;
mod create_endpoint;
mod delete_endpoint;
mod new_transaction_page;
mod query;
mod service;
mod state;
mod transactions_page;

pub use api::{
    create_transaction_api_endpoint, delete_transaction_api_endpoint, get_transactions_endpoint,
};
pub use create_endpoint::create_transaction_endpoint;
pub use delete_endpoint::delete_transaction_endpoint;
pub use new_transaction_page::get_new_transaction_page;
pub use transactions_page::get_transactions_page;

#[cfg(test)]
pub use api::{TransactionBody, TransactionsBody};
#[cfg(test)]
pub use core::format_date;
