//! The endpoint URIs.
//!
//! For endpoints that take a parameter, e.g., '/transactions/{transaction_id}', use [format_endpoint].

/// The page for entering a new transaction.
pub const ROOT: &str = "/";
/// The page listing the transactions of a month.
pub const LIST_VIEW: &str = "/list";
/// The route for static files.
pub const STATIC: &str = "/static";

/// The form route for creating a transaction from the input page.
pub const TRANSACTIONS: &str = "/transactions";
/// The htmx route for deleting a transaction from the list page.
pub const DELETE_TRANSACTION: &str = "/transactions/{transaction_id}";

/// The JSON route to list and create transactions.
pub const TRANSACTIONS_API: &str = "/api/transactions";
/// The JSON route to delete a single transaction.
pub const TRANSACTION_API: &str = "/api/transactions/{transaction_id}";
/// The JSON route to list category names.
pub const CATEGORIES_API: &str = "/api/categories";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/transactions/{transaction_id}', '{transaction_id}'
/// is the parameter.
///
/// This function assumes that an endpoint path only contains a single parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: &str) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_owned();
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map(|end| param_start + end + 1)
        .unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}

/// Append the query string `query` to `endpoint_path`, if there is one.
pub fn with_query(endpoint_path: &str, query: &str) -> String {
    if query.is_empty() {
        endpoint_path.to_owned()
    } else {
        format!("{endpoint_path}?{query}")
    }
}
