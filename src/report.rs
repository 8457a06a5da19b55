//! Reservation report form: a date range over the selected resources.
//!
//! The report screen lists resources with the usual paginator and
//! select-all toggle, then asks the backend for a spreadsheet covering
//! the chosen days.

use crate::error::{Error, Result};
use crate::request::{Method, Request};
use chrono::{Months, NaiveDate};

/// Date format of the begin and end fields.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Page size asked from the reservation endpoint so one report holds everything.
pub const REPORT_PAGE_SIZE: usize = 50_000;

/// An inclusive range of days with `begin <= end`.
///
/// ```
/// use console_paginator::locale::Text;
/// use console_paginator::report::DateRange;
///
/// let range = DateRange::parse("2024-03-01", "2024-03-31").unwrap();
/// assert_eq!(range.begin().to_string(), "2024-03-01");
///
/// let err = DateRange::parse("2024-04-01", "2024-03-31").unwrap_err();
/// assert_eq!(err.text(), Some(Text::StartAfterEnd));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    begin: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Checks that `begin` is not after `end`. Equal days are a one-day range.
    pub fn new(begin: NaiveDate, end: NaiveDate) -> Result<Self> {
        if begin > end {
            return Err(Error::StartAfterEnd { begin, end });
        }
        Ok(Self { begin, end })
    }

    /// Parses the two form fields, then checks their order.
    pub fn parse(begin: &str, end: &str) -> Result<Self> {
        Self::new(parse_date(begin)?, parse_date(end)?)
    }

    /// The month leading up to `today`, which the form starts with.
    pub fn last_month(today: NaiveDate) -> Self {
        let begin = today.checked_sub_months(Months::new(1)).unwrap_or(today);
        Self { begin, end: today }
    }

    /// First day of the range.
    pub fn begin(&self) -> NaiveDate {
        self.begin
    }

    /// Last day of the range.
    pub fn end(&self) -> NaiveDate {
        self.end
    }
}

fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| Error::InvalidDate {
        value: value.to_string(),
    })
}

/// Builds the GET that downloads confirmed reservations as a spreadsheet.
///
/// `origin` is the scheme and host, e.g. `https://respa.example.org`.
pub fn report_request(origin: &str, resource_ids: &[String], range: &DateRange) -> Request {
    let url = format!(
        "{}/v1/reservation/?format=xlsx&resource={}&start={}&end={}&page_size={}&state=confirmed",
        origin.trim_end_matches('/'),
        resource_ids.join(","),
        range.begin.format(DATE_FORMAT),
        range.end.format(DATE_FORMAT),
        REPORT_PAGE_SIZE,
    );
    tracing::debug!(resources = resource_ids.len(), %url, "built report request");
    Request::new(Method::Get, url)
}
