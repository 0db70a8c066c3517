//! The 404 page served for unknown routes.
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::html::error_view;

pub async fn get_404_not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Html(
            error_view(
                "Not Found",
                "404",
                "ページが見つかりません",
                "URLを確認してください",
            )
            .into_string(),
        ),
    )
        .into_response()
}
