//! The client for the Notion REST API.

use std::fmt::Debug;

use async_trait::async_trait;
use reqwest::Method;
use serde::{Serialize, de::DeserializeOwned};

use crate::Error;

use super::{
    property::{Page, QueryResults},
    request::{CreatePageRequest, DatabaseQuery, UpdatePageRequest},
};

/// The base URL of the Notion REST API.
pub const NOTION_API_BASE: &str = "https://api.notion.com/v1";
/// The API version sent with every request in the `Notion-Version` header.
pub const NOTION_VERSION: &str = "2022-06-28";

/// A remote document database that stores pages in databases.
///
/// Every call is a single network round trip: there is no caching and no
/// retrying. A failed call is reported once as an [Error].
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Query the pages in the database `database_id`.
    ///
    /// # Errors
    /// Returns [Error::Upstream] if the store responds with a non-success status.
    async fn query_database(
        &self,
        database_id: &str,
        query: &DatabaseQuery,
    ) -> Result<QueryResults, Error>;

    /// Create a page and return it as stored.
    ///
    /// # Errors
    /// Returns [Error::Upstream] if the store responds with a non-success status.
    async fn create_page(&self, request: &CreatePageRequest) -> Result<Page, Error>;

    /// Update the page `page_id` and return it as stored.
    ///
    /// # Errors
    /// Returns [Error::Upstream] if the store responds with a non-success status.
    async fn update_page(&self, page_id: &str, request: &UpdatePageRequest)
    -> Result<Page, Error>;
}

/// A [DocumentStore] backed by the Notion REST API.
#[derive(Clone)]
pub struct NotionClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl NotionClient {
    /// Create a client for the public Notion API authenticating with the
    /// integration token `token`.
    pub fn new(token: &str) -> Self {
        Self::with_base_url(token, NOTION_API_BASE)
    }

    /// Create a client for a Notion compatible API hosted at `base_url`,
    /// e.g. a proxy or a local fake for testing.
    pub fn with_base_url(token: &str, base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_owned(),
            token: token.to_owned(),
        }
    }

    async fn send<T>(&self, method: Method, endpoint: &str, body: &impl Serialize) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, endpoint);
        tracing::debug!("Sending {method} {url}");

        let response = self
            .http
            .request(method, &url)
            .bearer_auth(&self.token)
            .header("Notion-Version", NOTION_VERSION)
            .json(body)
            .send()
            .await
            .map_err(|error| {
                tracing::error!("Could not send request to {url}: {error}");
                Error::UpstreamUnreachable(error.to_string())
            })?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Notion API responded to {url} with {status}: {body}");

            return Err(Error::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        response.json::<T>().await.map_err(|error| {
            tracing::error!("Could not parse response from {url}: {error}");
            Error::InvalidUpstreamResponse(error.to_string())
        })
    }
}

impl Debug for NotionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotionClient")
            .field("base_url", &self.base_url)
            .field("token", &"********")
            .finish()
    }
}

#[async_trait]
impl DocumentStore for NotionClient {
    async fn query_database(
        &self,
        database_id: &str,
        query: &DatabaseQuery,
    ) -> Result<QueryResults, Error> {
        self.send(
            Method::POST,
            &format!("/databases/{database_id}/query"),
            query,
        )
        .await
    }

    async fn create_page(&self, request: &CreatePageRequest) -> Result<Page, Error> {
        self.send(Method::POST, "/pages", request).await
    }

    async fn update_page(
        &self,
        page_id: &str,
        request: &UpdatePageRequest,
    ) -> Result<Page, Error> {
        self.send(Method::PATCH, &format!("/pages/{page_id}"), request)
            .await
    }
}
