//! Application router configuration for the pages, the htmx form endpoints and the JSON API.

use axum::{
    Router,
    routing::{delete, get, post},
};
use tower_http::services::ServeDir;

use crate::{
    AppState,
    category::get_categories_endpoint,
    endpoints,
    not_found::get_404_not_found,
    transaction::{
        create_transaction_api_endpoint, create_transaction_endpoint,
        delete_transaction_api_endpoint, delete_transaction_endpoint, get_new_transaction_page,
        get_transactions_endpoint, get_transactions_page,
    },
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    let page_routes = Router::new()
        .route(endpoints::ROOT, get(get_new_transaction_page))
        .route(endpoints::LIST_VIEW, get(get_transactions_page))
        .route(endpoints::TRANSACTIONS, post(create_transaction_endpoint))
        .route(
            endpoints::DELETE_TRANSACTION,
            delete(delete_transaction_endpoint),
        );

    let api_routes = Router::new()
        .route(
            endpoints::TRANSACTIONS_API,
            get(get_transactions_endpoint).post(create_transaction_api_endpoint),
        )
        .route(
            endpoints::TRANSACTION_API,
            delete(delete_transaction_api_endpoint),
        )
        .route(endpoints::CATEGORIES_API, get(get_categories_endpoint));

    page_routes
        .merge(api_routes)
        .nest_service(endpoints::STATIC, ServeDir::new("static/"))
        .fallback(get_404_not_found)
        .with_state(state)
}
