//! The settings needed to connect to Notion.

use crate::Error;

/// The environment variable holding the Notion integration token.
pub const NOTION_TOKEN_VAR: &str = "NOTION_TOKEN";
/// The environment variable holding the ID of the transaction database.
pub const DATABASE_ID_VAR: &str = "NOTION_DATABASE_ID";
/// The environment variable holding the ID of the category database.
pub const CATEGORY_DATABASE_ID_VAR: &str = "NOTION_CATEGORY_DATABASE_ID";

/// The Notion credentials and database IDs the app reads and writes.
#[derive(Clone, PartialEq, Eq)]
pub struct NotionConfig {
    /// The integration token sent as a bearer token.
    pub token: String,
    /// The database holding transactions.
    pub database_id: String,
    /// The database holding categories.
    pub category_database_id: String,
}

impl NotionConfig {
    /// Check that every setting was provided.
    ///
    /// # Errors
    /// Returns [Error::MissingConfig] naming the first setting that is missing or blank.
    pub fn new(
        token: Option<String>,
        database_id: Option<String>,
        category_database_id: Option<String>,
    ) -> Result<Self, Error> {
        Ok(Self {
            token: required(token, NOTION_TOKEN_VAR)?,
            database_id: required(database_id, DATABASE_ID_VAR)?,
            category_database_id: required(category_database_id, CATEGORY_DATABASE_ID_VAR)?,
        })
    }
}

fn required(value: Option<String>, name: &'static str) -> Result<String, Error> {
    value
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
        .ok_or(Error::MissingConfig(name))
}

impl std::fmt::Debug for NotionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotionConfig")
            .field("token", &"********")
            .field("database_id", &self.database_id)
            .field("category_database_id", &self.category_database_id)
            .finish()
    }
}
