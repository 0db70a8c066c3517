//! Shared page layout, styles and formatting helpers for the HTML views.

use std::sync::OnceLock;

use maud::{DOCTYPE, Markup, html};
use numfmt::{Formatter, Precision};

// Button styles
pub const BUTTON_PRIMARY_STYLE: &str = "w-full bg-blue-600 text-white py-2 px-4 \
    rounded-lg font-medium hover:bg-blue-700 transition-colors \
    disabled:opacity-50 disabled:cursor-not-allowed";

pub const BUTTON_DELETE_STYLE: &str = "text-gray-400 hover:text-red-500 \
    transition-colors p-1 disabled:opacity-50";

// Form styles
pub const FORM_LABEL_STYLE: &str = "block text-sm font-medium text-gray-700 mb-1";
pub const FORM_TEXT_INPUT_STYLE: &str = "w-full px-3 py-2 border border-gray-300 \
    rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500";
pub const FORM_RADIO_INPUT_STYLE: &str = "peer sr-only";
pub const FORM_RADIO_LABEL_STYLE: &str = "inline-block px-2.5 py-1 rounded-full \
    text-xs font-medium transition-colors whitespace-nowrap cursor-pointer \
    bg-white text-gray-700 border border-gray-300 active:bg-gray-100 \
    peer-checked:bg-blue-600 peer-checked:text-white peer-checked:border-blue-600";

// Card styles
pub const CARD_STYLE: &str = "bg-white rounded-lg shadow-sm p-4";
pub const ROW_STYLE: &str = "flex items-center justify-between py-3 px-4 \
    bg-white rounded-lg shadow-sm";

pub const ERROR_TEXT_STYLE: &str = "text-red-500 text-center py-4";

/// The page layout shared by every view, with `content` inside the main column.
pub fn base(title: &str, content: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="ja"
        {
            head
            {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }

                script src="https://cdn.tailwindcss.com" {}
                script src="https://unpkg.com/htmx.org@2.0.8" {}
                script src="https://unpkg.com/htmx-ext-response-targets@2.0.4" {}

                style
                {
                    r#"
                    #indicator.htmx-indicator {
                        display: none;
                    }

                    #indicator.htmx-request .htmx-indicator {
                        display: inline;
                    }

                    #indicator.htmx-request.htmx-indicator {
                        display: inline;
                    }

                    .htmx-request.transaction-row {
                        opacity: 0.5;
                    }
                    "#
                }

                script src="/static/app.js" defer {}
            }

            body
                hx-ext="response-targets"
                class="bg-gray-100 min-h-screen"
            {
                div id="app" class="max-w-lg mx-auto py-6 px-4"
                {
                    div class="space-y-6"
                    {
                        (content)
                    }
                }

                // Alert container for out-of-band swaps
                div
                    id="alert-container"
                    class="hidden w-full max-w-md px-4"
                    style="position: fixed; bottom: 1rem; left: 50%; transform: translateX(-50%); z-index: 9999;"
                {}
            }
        }
    }
}

pub fn error_view(title: &str, header: &str, description: &str, fix: &str) -> Markup {
    let content = html!(
        section class="py-8 px-4 text-center"
        {
            h1 class="mb-4 text-7xl tracking-tight font-extrabold text-blue-600"
            {
                (header)
            }

            p class="mb-4 text-3xl tracking-tight font-bold text-gray-900"
            {
                (description)
            }

            p class="mb-4 text-lg tracking-tight text-gray-900"
            {
                (fix)
            }

            a
                href="/"
                class="inline-flex text-white bg-blue-600 hover:bg-blue-800
                    font-medium rounded-lg text-sm px-5 py-2.5 text-center my-4"
            {
                "ホームに戻る"
            }
        }
    );

    base(title, &content)
}

pub fn loading_spinner() -> Markup {
    // Spinner SVG adapted from https://flowbite.com/docs/components/spinner/
    html! {
        svg
            aria-hidden="true"
            role="status"
            class="inline text-white w-4 h-4 me-2 mb-1 animate-spin"
            viewBox="0 0 24 24"
            fill="none"
            xmlns="http://www.w3.org/2000/svg"
        {
            circle
                class="opacity-25"
                cx="12"
                cy="12"
                r="10"
                stroke="currentColor"
                stroke-width="4" {}
            path
                class="opacity-75"
                fill="currentColor"
                d="M4 12a8 8 0 018-8V0C5.373 0 0 5.373 0 12h4zm2 5.291A7.962 7.962 0 014 12H0c0 3.042 1.135 5.824 3 7.938l3-2.647z" {}
        }
    }
}

/// Format a whole yen amount with a yen sign and thousands separators, e.g. "¥1,234".
pub fn format_yen(amount: i64) -> String {
    static POSITIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let positive_fmt = POSITIVE_FMT.get_or_init(|| {
        Formatter::currency("¥")
            .unwrap()
            .precision(Precision::Decimals(0))
    });

    static NEGATIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let negative_fmt = NEGATIVE_FMT.get_or_init(|| {
        Formatter::currency("-¥")
            .unwrap()
            .precision(Precision::Decimals(0))
    });

    if amount < 0 {
        negative_fmt.fmt_string(amount.unsigned_abs() as f64)
    } else if amount > 0 {
        positive_fmt.fmt_string(amount as f64)
    } else {
        // Zero is hardcoded as "0", so we must specify the formatted string for zero
        "¥0".to_owned()
    }
}
