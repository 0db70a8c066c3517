//! The state shared by the transaction endpoints and pages.

use std::sync::Arc;

use axum::extract::FromRef;
use time::Date;

use crate::{AppState, Error, notion::DocumentStore, timezone::local_today};

/// The state needed to list, create or delete transactions.
#[derive(Clone)]
pub struct TransactionState {
    /// The store holding the transaction database.
    pub store: Arc<dyn DocumentStore>,
    /// The ID of the transaction database.
    pub database_id: String,
    /// The local timezone as a canonical timezone name, e.g. "Asia/Tokyo".
    pub local_timezone: String,
}

impl TransactionState {
    /// Today's date in the local timezone.
    ///
    /// # Errors
    /// Returns [Error::InvalidTimezoneError] if the local timezone is not known.
    pub fn today(&self) -> Result<Date, Error> {
        local_today(&self.local_timezone)
    }
}

impl FromRef<AppState> for TransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
            database_id: state.database_id.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}
