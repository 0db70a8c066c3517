use std::{
    collections::HashMap,
    sync::{Mutex, MutexGuard},
};

use async_trait::async_trait;
use serde_json::{Value, json};

use crate::{
    Error,
    notion::{
        CreatePageRequest, DatabaseQuery, DateCondition, DocumentStore, Filter, Page, Property,
        PropertyInput, QueryResults, SortDirection, UpdatePageRequest,
    },
};

/// The creation time given to every page created in a [FakeStore].
pub(crate) const FAKE_CREATED_TIME: &str = "2024-02-01T00:00:00.000Z";

/// A call made to a [FakeStore].
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum StoreCall {
    Query {
        database_id: String,
        query: DatabaseQuery,
    },
    Create(CreatePageRequest),
    Update {
        page_id: String,
        request: UpdatePageRequest,
    },
}

#[derive(Default)]
struct Inner {
    databases: HashMap<String, Vec<Page>>,
    calls: Vec<StoreCall>,
    next_id: usize,
}

/// An in-memory [DocumentStore] that evaluates date filters and sorts the way
/// Notion does and records every call.
#[derive(Default)]
pub(crate) struct FakeStore {
    inner: Mutex<Inner>,
    failure: Option<(u16, String)>,
    successful_calls: usize,
    page_size: Option<usize>,
}

impl FakeStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// A store where every call fails with `status`.
    pub(crate) fn failing(status: u16) -> Self {
        Self {
            failure: Some((
                status,
                json!({"object": "error", "status": status, "message": "fake failure"})
                    .to_string(),
            )),
            ..Default::default()
        }
    }

    /// A store where the first `successful_calls` calls succeed and every
    /// later call fails with `status`.
    pub(crate) fn fail_after(successful_calls: usize, status: u16) -> Self {
        Self {
            successful_calls,
            ..Self::failing(status)
        }
    }

    /// Return query results in batches of `page_size` pages.
    pub(crate) fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = Some(page_size);
        self
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().expect("Could not lock fake store")
    }

    /// Add a page built from raw JSON properties to the database `database_id`.
    pub(crate) fn insert_page(&self, database_id: &str, id: &str, properties: Value) {
        let page: Page = serde_json::from_value(json!({
            "id": id,
            "created_time": FAKE_CREATED_TIME,
            "properties": properties,
        }))
        .expect("Could not create fake page");

        self.lock()
            .databases
            .entry(database_id.to_owned())
            .or_default()
            .push(page);
    }

    /// Add a transaction page with the given properties.
    pub(crate) fn insert_transaction(
        &self,
        database_id: &str,
        id: &str,
        name: Option<&str>,
        amount: i64,
        category: &str,
        date: &str,
    ) {
        let title = name
            .map(|name| vec![json!({"type": "text", "plain_text": name})])
            .unwrap_or_default();

        self.insert_page(
            database_id,
            id,
            json!({
                "Name": {"type": "title", "title": title},
                "Amount": {"type": "number", "number": amount},
                "Category": {"type": "select", "select": {"name": category}},
                "Date": {"type": "date", "date": {"start": date}},
            }),
        );
    }

    /// Add a category page named `name`.
    pub(crate) fn insert_category(&self, database_id: &str, id: &str, name: &str) {
        self.insert_page(
            database_id,
            id,
            json!({"Name": {"type": "title", "title": [{"type": "text", "plain_text": name}]}}),
        );
    }

    pub(crate) fn calls(&self) -> Vec<StoreCall> {
        self.lock().calls.clone()
    }

    /// Whether the page `page_id` exists and has been archived.
    pub(crate) fn is_archived(&self, page_id: &str) -> bool {
        self.lock()
            .databases
            .values()
            .flatten()
            .any(|page| page.id == page_id && page.archived)
    }

    fn check_failure(&self, inner: &Inner) -> Result<(), Error> {
        match &self.failure {
            Some((status, body)) if inner.calls.len() > self.successful_calls => {
                Err(Error::Upstream {
                    status: *status,
                    body: body.clone(),
                })
            }
            _ => Ok(()),
        }
    }
}

fn to_property(input: &PropertyInput) -> Property {
    let value = match input {
        PropertyInput::Title(runs) => json!({
            "type": "title",
            "title": runs
                .iter()
                .map(|run| json!({"type": "text", "plain_text": run.text.content}))
                .collect::<Vec<_>>(),
        }),
        PropertyInput::Number(number) => json!({"type": "number", "number": number}),
        PropertyInput::Select(select) => {
            json!({"type": "select", "select": {"name": select.name}})
        }
        PropertyInput::Date(date) => json!({"type": "date", "date": {"start": date.start}}),
    };

    Property::from_value(value)
}

fn matches(page: &Page, filter: &Filter) -> bool {
    match filter {
        Filter::And { and } => and.iter().all(|filter| matches(page, filter)),
        Filter::Date { property, date } => {
            let Some(start) = page.date_start(property) else {
                return false;
            };
            let start = start.get(..10).unwrap_or(start);

            match date {
                DateCondition::OnOrAfter(bound) => start >= bound.as_str(),
                DateCondition::Before(bound) => start < bound.as_str(),
            }
        }
    }
}

fn sort_key(page: &Page, property: &str) -> String {
    page.date_start(property)
        .map(str::to_owned)
        .or_else(|| page.title(property))
        .unwrap_or_default()
}

#[async_trait]
impl DocumentStore for FakeStore {
    async fn query_database(
        &self,
        database_id: &str,
        query: &DatabaseQuery,
    ) -> Result<QueryResults, Error> {
        let mut inner = self.lock();
        inner.calls.push(StoreCall::Query {
            database_id: database_id.to_owned(),
            query: query.clone(),
        });
        self.check_failure(&inner)?;

        let mut pages = inner
            .databases
            .get(database_id)
            .map(|pages| {
                pages
                    .iter()
                    .filter(|page| !page.archived)
                    .filter(|page| query.filter.as_ref().is_none_or(|f| matches(page, f)))
                    .cloned()
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default();

        for sort in query.sorts.iter().rev() {
            pages.sort_by(|a, b| {
                let ordering = sort_key(a, &sort.property).cmp(&sort_key(b, &sort.property));
                match sort.direction {
                    SortDirection::Ascending => ordering,
                    SortDirection::Descending => ordering.reverse(),
                }
            });
        }

        let Some(page_size) = self.page_size else {
            return Ok(QueryResults::from_pages(pages));
        };

        let offset = query
            .start_cursor
            .as_deref()
            .map(|cursor| cursor.parse::<usize>().expect("invalid fake cursor"))
            .unwrap_or(0);
        let end = (offset + page_size).min(pages.len());
        let has_more = end < pages.len();

        let mut results = QueryResults::from_pages(pages[offset..end].to_vec());
        results.has_more = has_more;
        results.next_cursor = has_more.then(|| end.to_string());

        Ok(results)
    }

    async fn create_page(&self, request: &CreatePageRequest) -> Result<Page, Error> {
        let mut inner = self.lock();
        inner.calls.push(StoreCall::Create(request.clone()));
        self.check_failure(&inner)?;

        inner.next_id += 1;
        let page = Page {
            id: format!("created-{}", inner.next_id),
            created_time: FAKE_CREATED_TIME.to_owned(),
            archived: false,
            properties: request
                .properties
                .iter()
                .map(|(name, input)| (name.clone(), to_property(input)))
                .collect(),
        };

        inner
            .databases
            .entry(request.parent.database_id.clone())
            .or_default()
            .push(page.clone());

        Ok(page)
    }

    async fn update_page(
        &self,
        page_id: &str,
        request: &UpdatePageRequest,
    ) -> Result<Page, Error> {
        let mut inner = self.lock();
        inner.calls.push(StoreCall::Update {
            page_id: page_id.to_owned(),
            request: *request,
        });
        self.check_failure(&inner)?;

        let page = inner
            .databases
            .values_mut()
            .flatten()
            .find(|page| page.id == page_id)
            .ok_or_else(|| Error::Upstream {
                status: 404,
                body: json!({"object": "error", "status": 404, "code": "object_not_found"})
                    .to_string(),
            })?;

        page.archived = request.archived;

        Ok(page.clone())
    }
}
