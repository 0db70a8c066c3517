//! The page header: the month selector and the tabs switching between the input and list pages.

use maud::{Markup, html};

use crate::{endpoints, month::YearMonth};

/// The tabs of the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    /// The page for entering a new transaction.
    Input,
    /// The page listing the month's transactions.
    List,
}

impl Tab {
    fn endpoint(self) -> &'static str {
        match self {
            Tab::Input => endpoints::ROOT,
            Tab::List => endpoints::LIST_VIEW,
        }
    }

    fn title(self) -> &'static str {
        match self {
            Tab::Input => "入力",
            Tab::List => "一覧",
        }
    }
}

/// Get the URL of the page for `tab` showing `year_month`.
pub fn month_url(tab: Tab, year_month: YearMonth) -> String {
    endpoints::with_query(tab.endpoint(), &year_month.query_string())
}

const ARROW_LEFT_PATH: &str = "M12.707 5.293a1 1 0 010 1.414L9.414 10l3.293 3.293a1 1 0 \
    01-1.414 1.414l-4-4a1 1 0 010-1.414l4-4a1 1 0 011.414 0z";
const ARROW_RIGHT_PATH: &str = "M7.293 14.707a1 1 0 010-1.414L10.586 10 7.293 6.707a1 1 0 \
    011.414-1.414l4 4a1 1 0 010 1.414l-4 4a1 1 0 01-1.414 0z";

fn arrow_link(url: &str, label: &str, path: &str) -> Markup {
    html! {
        a
            href=(url)
            class="p-1 text-gray-600 hover:text-gray-800 transition-colors"
            aria-label=(label)
        {
            svg
                xmlns="http://www.w3.org/2000/svg"
                class="h-5 w-5"
                viewBox="0 0 20 20"
                fill="currentColor"
            {
                path fill-rule="evenodd" d=(path) clip-rule="evenodd" {}
            }
        }
    }
}

/// The title, month selector and tabs shown at the top of every page.
///
/// The month selector links to the same tab for the previous and next month,
/// the tabs keep the selected month.
pub fn page_header(active_tab: Tab, year_month: YearMonth) -> Markup {
    let tab_style = |is_current: bool| {
        if is_current {
            "px-4 py-2 rounded-t-lg border-b-2 border-blue-600 text-blue-600 bg-white"
        } else {
            "px-4 py-2 rounded-t-lg border-b-2 border-transparent text-gray-600 \
            hover:text-gray-800"
        }
    };

    html! {
        header class="flex items-center justify-between"
        {
            h1 class="text-xl font-bold text-gray-800" { "家計簿" }

            div id="month-selector" class="flex items-center gap-2"
            {
                (arrow_link(&month_url(active_tab, year_month.previous()), "前月", ARROW_LEFT_PATH))
                span class="font-medium text-gray-800" { (year_month.label()) }
                (arrow_link(&month_url(active_tab, year_month.next()), "次月", ARROW_RIGHT_PATH))
            }
        }

        nav id="tabs"
        {
            div class="inline-flex bg-gray-100 rounded-lg p-1"
            {
                @for tab in [Tab::Input, Tab::List] {
                    @let is_current = tab == active_tab;
                    a
                        href=(month_url(tab, year_month))
                        class=(tab_style(is_current))
                        aria-current=[is_current.then_some("page")]
                    {
                        (tab.title())
                    }
                }
            }
        }
    }
}
