//! Page objects as returned by the Notion API.
//!
//! Notion databases are schema-flexible: each property of a page carries its
//! own declared type and may be missing, null or of a different type than
//! expected. [Property] models one property as a tagged union and its
//! [Deserialize] implementation never fails, so one malformed field never
//! discards the whole page.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// A run of text in a title or rich text property.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RichText {
    #[serde(default)]
    pub plain_text: String,
}

/// The selected option of a select property.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SelectOption {
    pub name: String,
}

/// The value of a date property.
///
/// `start` is either a date (`2024-02-01`) or a date-time
/// (`2024-02-01T09:30:00.000+09:00`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DateValue {
    pub start: Option<String>,
}

/// One property of a page, tagged by its declared type.
#[derive(Debug, Clone, PartialEq)]
pub enum Property {
    Title(Vec<RichText>),
    Number(Option<f64>),
    Select(Option<SelectOption>),
    Date(Option<DateValue>),
    /// A property of a type this app does not read, or one whose body does
    /// not match its declared type.
    Unsupported,
}

/// The wire format of the property types this app reads.
#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum TaggedProperty {
    Title {
        #[serde(default)]
        title: Vec<RichText>,
    },
    Number {
        number: Option<f64>,
    },
    Select {
        select: Option<SelectOption>,
    },
    Date {
        date: Option<DateValue>,
    },
}

impl Property {
    /// Convert a raw JSON property into a [Property].
    ///
    /// Never fails: anything that cannot be read becomes [Property::Unsupported].
    pub fn from_value(value: Value) -> Self {
        match serde_json::from_value::<TaggedProperty>(value) {
            Ok(TaggedProperty::Title { title }) => Property::Title(title),
            Ok(TaggedProperty::Number { number }) => Property::Number(number),
            Ok(TaggedProperty::Select { select }) => Property::Select(select),
            Ok(TaggedProperty::Date { date }) => Property::Date(date),
            Err(_) => Property::Unsupported,
        }
    }
}

impl<'de> Deserialize<'de> for Property {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;

        Ok(Property::from_value(value))
    }
}

/// A page (row) in a Notion database.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Page {
    /// The store-assigned identifier of the page.
    pub id: String,
    /// The store-assigned creation timestamp, e.g. `2024-02-01T09:30:00.000Z`.
    #[serde(default)]
    pub created_time: String,
    /// Whether the page has been archived (logically deleted).
    #[serde(default)]
    pub archived: bool,
    /// The properties of the page by property name.
    pub properties: HashMap<String, Property>,
}

impl Page {
    /// The concatenated plain text of the title property `name`.
    ///
    /// Returns `None` if the property is missing, is not a title, or has no text runs.
    pub fn title(&self, name: &str) -> Option<String> {
        match self.properties.get(name) {
            Some(Property::Title(runs)) if !runs.is_empty() => Some(
                runs.iter()
                    .map(|run| run.plain_text.as_str())
                    .collect::<String>(),
            ),
            _ => None,
        }
    }

    /// The value of the number property `name`, if it is set.
    pub fn number(&self, name: &str) -> Option<f64> {
        match self.properties.get(name) {
            Some(Property::Number(number)) => *number,
            _ => None,
        }
    }

    /// The name of the selected option of the select property `name`, if any.
    pub fn select(&self, name: &str) -> Option<&str> {
        match self.properties.get(name) {
            Some(Property::Select(Some(option))) => Some(option.name.as_str()),
            _ => None,
        }
    }

    /// The start of the date property `name`, if it is set.
    pub fn date_start(&self, name: &str) -> Option<&str> {
        match self.properties.get(name) {
            Some(Property::Date(Some(DateValue { start: Some(start) }))) => Some(start.as_str()),
            _ => None,
        }
    }
}

/// One entry of a database query response.
///
/// Notion may return partial page objects (without properties) to integrations
/// that lack access to a page, those are kept as raw JSON and skipped.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum QueryResult {
    Page(Page),
    Partial(Value),
}

/// The response to a database query.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct QueryResults {
    pub results: Vec<QueryResult>,
    /// Whether there are more results after this batch.
    #[serde(default)]
    pub has_more: bool,
    /// The cursor to pass as `start_cursor` to get the next batch.
    #[serde(default)]
    pub next_cursor: Option<String>,
}

impl QueryResults {
    /// A single batch of results with no further batches.
    pub fn from_pages(pages: Vec<Page>) -> Self {
        Self {
            results: pages.into_iter().map(QueryResult::Page).collect(),
            has_more: false,
            next_cursor: None,
        }
    }

    /// The full page objects in the results, in the order Notion returned them.
    pub fn into_pages(self) -> impl Iterator<Item = Page> {
        self.results.into_iter().filter_map(|result| match result {
            QueryResult::Page(page) => Some(page),
            QueryResult::Partial(value) => {
                tracing::debug!("skipping partial page object in query results: {value}");
                None
            }
        })
    }
}
