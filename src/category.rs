//! Categories of spending, read from the Notion category database.

use std::sync::Arc;

use axum::{
    Json,
    extract::{FromRef, State},
    http::header::CACHE_CONTROL,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::{
    AppState, Error,
    notion::{DatabaseQuery, DocumentStore, Page, Sort, SortDirection},
};

/// The title property holding the name of a category.
const NAME_PROPERTY: &str = "Name";

/// How long clients may cache the category list, in seconds.
const CATEGORY_CACHE_MAX_AGE: u32 = 86_400;

/// A category that transactions can be filed under, e.g. "食費".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryItem {
    pub id: String,
    pub name: String,
}

/// Read a category from a Notion page.
///
/// Returns `None` for pages without a name, which callers skip.
pub fn map_to_category(page: &Page) -> Option<CategoryItem> {
    page.title(NAME_PROPERTY).map(|name| CategoryItem {
        id: page.id.clone(),
        name,
    })
}

/// Build the query for every category sorted by name.
pub fn category_query() -> DatabaseQuery {
    DatabaseQuery {
        filter: None,
        sorts: vec![Sort {
            property: NAME_PROPERTY.to_owned(),
            direction: SortDirection::Ascending,
        }],
        start_cursor: None,
    }
}

/// Get the categories in the database `category_database_id`, sorted by name.
///
/// # Errors
/// Returns the first error from the store.
pub async fn list_categories(
    store: &dyn DocumentStore,
    category_database_id: &str,
) -> Result<Vec<CategoryItem>, Error> {
    let mut query = category_query();
    let mut categories = Vec::new();

    loop {
        let results = store.query_database(category_database_id, &query).await?;
        let next_cursor = results.next_cursor.clone().filter(|_| results.has_more);

        categories.extend(
            results
                .into_pages()
                .filter_map(|page| map_to_category(&page)),
        );

        match next_cursor {
            Some(cursor) => query.start_cursor = Some(cursor),
            None => break,
        }
    }

    Ok(categories)
}

/// The state needed to list categories.
#[derive(Clone)]
pub struct CategoryState {
    pub store: Arc<dyn DocumentStore>,
    pub category_database_id: String,
}

impl FromRef<AppState> for CategoryState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
            category_database_id: state.category_database_id.clone(),
        }
    }
}

/// The JSON body listing category names.
#[derive(Debug, Serialize, Deserialize)]
pub struct CategoriesBody {
    pub categories: Vec<String>,
}

/// A route handler for getting the category names as JSON, sorted by name.
///
/// Clients may cache the response for a day.
pub async fn get_categories_endpoint(State(state): State<CategoryState>) -> Response {
    match list_categories(state.store.as_ref(), &state.category_database_id).await {
        Ok(categories) => (
            [(
                CACHE_CONTROL,
                format!("public, max-age={CATEGORY_CACHE_MAX_AGE}"),
            )],
            Json(CategoriesBody {
                categories: categories
                    .into_iter()
                    .map(|category| category.name)
                    .collect(),
            }),
        )
            .into_response(),
        Err(error) => error.into_json_response("カテゴリの取得に失敗しました"),
    }
}
