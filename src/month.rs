//! Calendar months: the unit transactions are listed and totalled by.

use serde::{Deserialize, Serialize};
use time::{Date, Month};

/// A calendar month of a specific year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearMonth {
    pub year: i32,
    pub month: Month,
}

/// The years a [YearMonth] may be in.
///
/// The end of the last month must be a valid [Date], so the upper bound stays
/// clear of the largest year `time` supports.
const YEAR_RANGE: std::ops::RangeInclusive<i32> = 1..=9998;

impl YearMonth {
    /// Create a month from a year and a one-based month number.
    ///
    /// Returns `None` if `month` is not in `1..=12` or the year is out of range.
    pub fn from_numbers(year: i32, month: u8) -> Option<Self> {
        if !YEAR_RANGE.contains(&year) {
            return None;
        }

        let month = Month::try_from(month).ok()?;

        Some(Self { year, month })
    }

    /// The month that contains `date`.
    pub fn from_date(date: Date) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The month before this one, rolling over to December of the previous year.
    pub fn previous(self) -> Self {
        match self.month {
            Month::January => Self {
                year: self.year - 1,
                month: Month::December,
            },
            month => Self {
                year: self.year,
                month: month.previous(),
            },
        }
    }

    /// The month after this one, rolling over to January of the next year.
    pub fn next(self) -> Self {
        match self.month {
            Month::December => Self {
                year: self.year + 1,
                month: Month::January,
            },
            month => Self {
                year: self.year,
                month: month.next(),
            },
        }
    }

    /// The month as displayed to users, e.g. "2024年2月".
    pub fn label(self) -> String {
        format!("{}年{}月", self.year, self.month as u8)
    }

    /// The query string that selects this month on a page, e.g. "year=2024&month=2".
    pub fn query_string(self) -> String {
        serde_urlencoded::to_string(MonthParams {
            year: self.year,
            month: self.month as u8,
        })
        .unwrap_or_default()
    }
}

#[derive(Serialize)]
struct MonthParams {
    year: i32,
    month: u8,
}

/// The `year` and `month` query parameters of a request.
///
/// The parameters are kept as strings so that a bad value can be ignored
/// rather than rejecting the whole request.
#[derive(Debug, Default, Deserialize)]
pub struct MonthQuery {
    pub year: Option<String>,
    pub month: Option<String>,
}

impl MonthQuery {
    /// The month selected by the query, or `None` if either parameter is
    /// missing or invalid.
    pub fn year_month(&self) -> Option<YearMonth> {
        let year = self.year.as_deref()?.trim().parse::<i32>().ok()?;
        let month = self.month.as_deref()?.trim().parse::<u8>().ok()?;

        YearMonth::from_numbers(year, month)
    }
}

/// The dates in a month as the half-open range `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthRange {
    /// The first day of the month.
    pub start: Date,
    /// The first day of the following month.
    pub end: Date,
}

/// Get the half-open date range covering `year_month`.
pub fn month_range(year_month: YearMonth) -> MonthRange {
    let next = year_month.next();

    MonthRange {
        start: Date::from_calendar_date(year_month.year, year_month.month, 1)
            .expect("invalid start date"),
        end: Date::from_calendar_date(next.year, next.month, 1).expect("invalid end date"),
    }
}
