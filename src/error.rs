//! Defines the app level error type and conversions to rendered HTML pages, alerts and JSON.
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::{alert::Alert, internal_server_error::InternalServerError};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A required setting, such as the Notion API token, was not provided.
    ///
    /// The string is the name of the environment variable for the setting.
    #[error("{0} is not configured")]
    MissingConfig(&'static str),

    /// The Notion API responded with a non-success status code.
    ///
    /// `body` is the response body text as sent by Notion.
    #[error("Notion API error: {status} - {body}")]
    Upstream {
        /// The HTTP status code of the response.
        status: u16,
        /// The response body text.
        body: String,
    },

    /// The request to the Notion API could not be sent or the response could
    /// not be read.
    #[error("could not reach the Notion API: {0}")]
    UpstreamUnreachable(String),

    /// The Notion API sent a success response that is not valid JSON for the
    /// expected shape.
    #[error("could not parse the Notion API response: {0}")]
    InvalidUpstreamResponse(String),

    /// The amount for a new transaction was missing, not a whole number, or
    /// not greater than zero.
    #[error("Invalid amount")]
    InvalidAmount,

    /// The category for a new transaction was missing or empty.
    #[error("Invalid category")]
    InvalidCategory,

    /// The date for a new transaction was not in the format `YYYY-MM-DD` or
    /// is not a date on the calendar.
    #[error("Invalid date format")]
    InvalidDate(String),

    /// A transaction ID was required but the client sent an empty one.
    #[error("Transaction ID is required")]
    MissingTransactionId,

    /// The request body could not be parsed.
    #[error("Invalid request body")]
    InvalidRequestBody(String),

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezoneError(String),
}

impl Error {
    /// The HTTP status code that should be sent to the client for this error.
    ///
    /// Validation errors are the client's fault (400), everything else is ours
    /// or Notion's (500).
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::InvalidAmount
            | Error::InvalidCategory
            | Error::InvalidDate(_)
            | Error::MissingTransactionId
            | Error::InvalidRequestBody(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Whether the error was caused by invalid client input.
    pub fn is_validation_error(&self) -> bool {
        self.status_code() == StatusCode::BAD_REQUEST
    }

    /// Convert the error into an HTTP response with an HTML alert.
    ///
    /// Validation errors get a message telling the user what to fix, any other
    /// error is reported with `failure_message`, e.g. "登録に失敗しました".
    pub fn into_alert_response(self, failure_message: &str) -> Response {
        let status_code = self.status_code();
        let alert = match self {
            Error::InvalidAmount => Alert::ErrorSimple {
                message: "金額を正しく入力してください".to_owned(),
            },
            Error::InvalidCategory => Alert::ErrorSimple {
                message: "カテゴリを選択してください".to_owned(),
            },
            Error::InvalidDate(date) => Alert::Error {
                message: "日付を正しく入力してください".to_owned(),
                details: format!("\"{date}\" は YYYY-MM-DD 形式の日付ではありません"),
            },
            Error::MissingTransactionId => Alert::ErrorSimple {
                message: "取引IDが指定されていません".to_owned(),
            },
            Error::InvalidRequestBody(_) => Alert::ErrorSimple {
                message: "入力内容を確認してください".to_owned(),
            },
            Error::InvalidTimezoneError(timezone) => Alert::Error {
                message: failure_message.to_owned(),
                details: format!(
                    "タイムゾーン \"{timezone}\" を取得できません。サーバーの設定を確認してください"
                ),
            },
            error => {
                tracing::error!("{failure_message}: {error}");
                Alert::Error {
                    message: failure_message.to_owned(),
                    details: "時間をおいて再度お試しください".to_owned(),
                }
            }
        };

        (status_code, alert.into_html()).into_response()
    }

    /// Convert the error into a JSON response of the form `{"error": "..."}`.
    ///
    /// Validation errors report their own message, any other error is logged
    /// and reported with `failure_message`.
    pub fn into_json_response(self, failure_message: &str) -> Response {
        let status_code = self.status_code();

        let message = if self.is_validation_error() {
            self.to_string()
        } else {
            tracing::error!("{failure_message}: {self}");
            failure_message.to_owned()
        };

        (status_code, Json(ErrorBody { error: message })).into_response()
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::MissingConfig(name) => InternalServerError {
                description: "Missing Configuration",
                fix: &format!("{name} is not configured. Check your server settings."),
            }
            .into_response(),
            Error::InvalidTimezoneError(timezone) => InternalServerError {
                description: "Invalid Timezone Settings",
                fix: &format!(
                    "Could not get local timezone \"{timezone}\". Check your server settings and \
                    ensure the timezone has been set to valid, canonical timezone string"
                ),
            }
            .into_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                InternalServerError::default().into_response()
            }
        }
    }
}

/// The JSON body sent with API error responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// A short, human readable description of what went wrong.
    pub error: String,
}
