//! Alerts for telling users that a form submission or deletion failed.
//!
//! Alerts are HTML fragments that htmx swaps into the `#alert-container`
//! element defined in the base layout.

use maud::{Markup, html};

const ALERT_STYLE: &str = "flex items-start gap-3 p-4 rounded-lg shadow bg-red-50 text-red-700 \
    border border-red-200";

/// An error message shown at the bottom of the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Alert {
    /// An error message with extra details.
    Error { message: String, details: String },
    /// An error message without details.
    ErrorSimple { message: String },
}

impl Alert {
    /// Render the alert as an HTML fragment for the `#alert-container` element.
    pub fn into_html(self) -> Markup {
        let (message, details) = match self {
            Alert::Error { message, details } => (message, details),
            Alert::ErrorSimple { message } => (message, String::new()),
        };

        html! {
            div class=(ALERT_STYLE) role="alert"
            {
                div class="flex-1"
                {
                    p class="text-sm font-medium" { (message) }

                    @if !details.is_empty() {
                        p class="text-sm mt-1" { (details) }
                    }
                }

                button
                    type="button"
                    class="text-sm opacity-70 hover:opacity-100"
                    aria-label="閉じる"
                    onclick="this.closest('#alert-container').classList.add('hidden')"
                {
                    "×"
                }
            }
        }
    }
}
