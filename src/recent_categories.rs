//! Remembers the categories the user picked most recently in a cookie, so the
//! input page can show them first.

use axum_extra::extract::{
    CookieJar,
    cookie::{Cookie, SameSite},
};
use time::Duration;

/// The name of the cookie holding the recent categories.
pub(crate) const COOKIE_RECENT_CATEGORIES: &str = "recent_categories";
/// The most categories remembered.
pub const MAX_RECENT: usize = 8;
/// How long the browser keeps the cookie.
const COOKIE_MAX_AGE: Duration = Duration::days(365);
/// The key each category is stored under in the cookie value.
const VALUE_KEY: &str = "c";

/// The categories used most recently, most recent first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecentCategories(Vec<String>);

impl RecentCategories {
    /// Read the recent categories from the request cookies.
    ///
    /// A missing or malformed cookie gives an empty list.
    pub fn from_cookies(jar: &CookieJar) -> Self {
        let Some(cookie) = jar.get(COOKIE_RECENT_CATEGORIES) else {
            return Self::default();
        };

        match serde_urlencoded::from_str::<Vec<(String, String)>>(cookie.value()) {
            Ok(pairs) => {
                let mut recent = Self::default();
                // Replaying oldest first rebuilds the list and drops duplicates.
                for (_, category) in pairs
                    .into_iter()
                    .filter(|(key, _)| key == VALUE_KEY)
                    .rev()
                {
                    recent.record(&category);
                }
                recent
            }
            Err(error) => {
                tracing::debug!("Ignoring malformed recent categories cookie: {error}");
                Self::default()
            }
        }
    }

    /// Move `category` to the front, forgetting the oldest category if the
    /// list is full.
    pub fn record(&mut self, category: &str) {
        if category.trim().is_empty() {
            return;
        }

        self.0.retain(|recent| recent != category);
        self.0.insert(0, category.to_owned());
        self.0.truncate(MAX_RECENT);
    }

    /// The recent categories, most recent first.
    #[cfg(test)]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Order `all` with the recent categories that still exist first, most
    /// recent first, followed by the rest in their original order.
    pub fn order<'a>(&self, all: &'a [String]) -> Vec<&'a str> {
        let recent = self
            .0
            .iter()
            .filter_map(|recent| all.iter().find(|category| *category == recent));
        let rest = all.iter().filter(|category| !self.0.contains(category));

        recent.chain(rest).map(String::as_str).collect()
    }

    /// Store the recent categories in `jar`.
    pub fn add_to(&self, jar: CookieJar) -> CookieJar {
        let pairs = self
            .0
            .iter()
            .map(|category| (VALUE_KEY, category.as_str()))
            .collect::<Vec<_>>();
        let value = serde_urlencoded::to_string(pairs).unwrap_or_default();

        jar.add(
            Cookie::build((COOKIE_RECENT_CATEGORIES, value))
                .path("/")
                .max_age(COOKIE_MAX_AGE)
                .http_only(true)
                .same_site(SameSite::Lax),
        )
    }
}
