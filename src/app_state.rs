//! Implements a struct that holds the state of the server.

use std::sync::Arc;

use crate::{Error, notion::DocumentStore, timezone::get_local_offset};

/// The state of the server.
#[derive(Clone)]
pub struct AppState {
    /// The store holding the transaction and category databases.
    pub store: Arc<dyn DocumentStore>,

    /// The ID of the Notion database holding transactions.
    pub database_id: String,

    /// The ID of the Notion database holding categories.
    pub category_database_id: String,

    /// The local timezone as a canonical timezone name, e.g. "Asia/Tokyo".
    pub local_timezone: String,
}

impl AppState {
    /// Create a new [AppState].
    ///
    /// `local_timezone` should be a valid, canonical timezone name, e.g. "Asia/Tokyo".
    ///
    /// # Errors
    /// Returns [Error::InvalidTimezoneError] if `local_timezone` is not a known timezone.
    pub fn new(
        store: Arc<dyn DocumentStore>,
        database_id: &str,
        category_database_id: &str,
        local_timezone: &str,
    ) -> Result<Self, Error> {
        if get_local_offset(local_timezone).is_none() {
            return Err(Error::InvalidTimezoneError(local_timezone.to_owned()));
        }

        Ok(Self {
            store,
            database_id: database_id.to_owned(),
            category_database_id: category_database_id.to_owned(),
            local_timezone: local_timezone.to_owned(),
        })
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("database_id", &self.database_id)
            .field("category_database_id", &self.category_database_id)
            .field("local_timezone", &self.local_timezone)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::{Error, test_utils::FakeStore};

    use super::AppState;

    #[test]
    fn rejects_unknown_timezone() {
        let result = AppState::new(Arc::new(FakeStore::new()), "db", "categories", "Nowhere");

        assert!(
            matches!(result, Err(Error::InvalidTimezoneError(ref tz)) if tz == "Nowhere"),
            "want invalid timezone error, got {result:?}"
        );
    }
}
