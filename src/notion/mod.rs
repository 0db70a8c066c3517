//! Access to the Notion databases that hold transactions and categories.

mod client;
mod property;
mod request;

pub use client::{DocumentStore, NotionClient};
pub use property::Page;
pub use request::{
    CreatePageRequest, DatabaseQuery, DateCondition, DateInput, Filter, Parent, PropertyInput,
    SelectInput, Sort, SortDirection, UpdatePageRequest,
};

#[cfg(test)]
pub use property::{Property, QueryResults};
