#![allow(missing_docs)]

pub(crate) mod form;
pub(crate) mod html;
pub(crate) mod http;
pub(crate) mod store;

pub(crate) use form::{assert_form_input, assert_hx_endpoint, must_get_form};
pub(crate) use html::{
    assert_valid_html, parse_html_document, parse_html_fragment, select_texts,
};
pub(crate) use http::{
    assert_content_type, assert_hx_redirect, assert_status_ok, get_header, parse_json,
};
pub(crate) use store::{FAKE_CREATED_TIME, FakeStore, StoreCall};
