//! Request bodies sent to the Notion API.

use std::collections::BTreeMap;

use serde::Serialize;

/// The body of a database query: `POST /databases/{id}/query`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatabaseQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<Filter>,
    pub sorts: Vec<Sort>,
    /// The cursor from a previous response to continue paging from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_cursor: Option<String>,
}

/// Sorts query results by a property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sort {
    pub property: String,
    pub direction: SortDirection,
}

/// The order to sort query results in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Sort in order of increasing value.
    Ascending,
    /// Sort in order of decreasing value.
    Descending,
}

/// A filter tree for a database query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Filter {
    /// Matches pages that match every filter in `and`.
    And { and: Vec<Filter> },
    /// Matches pages whose date property satisfies a condition.
    Date {
        property: String,
        date: DateCondition,
    },
}

/// A condition on a date property.
///
/// Dates are formatted as `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DateCondition {
    OnOrAfter(String),
    Before(String),
}

/// The body for creating a page: `POST /pages`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreatePageRequest {
    pub parent: Parent,
    pub properties: BTreeMap<String, PropertyInput>,
}

/// The database a new page is created in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parent {
    pub database_id: String,
}

/// The value to write to a property, keyed by the property type.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyInput {
    Title(Vec<TextInput>),
    Number(i64),
    Select(SelectInput),
    Date(DateInput),
}

impl PropertyInput {
    /// A title made of a single text run, or an empty title if `text` is `None`.
    pub fn title(text: Option<&str>) -> Self {
        PropertyInput::Title(
            text.map(|content| TextInput {
                text: TextContent {
                    content: content.to_owned(),
                },
            })
            .into_iter()
            .collect(),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextInput {
    pub text: TextContent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextContent {
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectInput {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateInput {
    pub start: String,
}

/// The body for updating a page: `PATCH /pages/{id}`.
///
/// Only archiving is supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UpdatePageRequest {
    pub archived: bool,
}

impl UpdatePageRequest {
    /// Archive (logically delete) the page.
    pub fn archive() -> Self {
        Self { archived: true }
    }
}
