//! Search query construction.

use std::fmt;

use jiff::ToSpan;
use jiff::civil::Date;

use crate::error::{Result, StargazeError};

use super::PAGE_SIZE;

/// Sort direction accepted by the search API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Asc => write!(f, "asc"),
            SortOrder::Desc => write!(f, "desc"),
        }
    }
}

/// Fixed search criterion: repositories created after a cutoff date, most
/// starred first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub created_after: Date,
    pub sort: &'static str,
    pub order: SortOrder,
    pub per_page: u32,
}

impl SearchQuery {
    pub fn created_after(created_after: Date) -> Self {
        Self {
            created_after,
            sort: "stars",
            order: SortOrder::Desc,
            per_page: PAGE_SIZE,
        }
    }

    /// The `q` predicate
    pub fn predicate(&self) -> String {
        format!("created:>{}", self.created_after)
    }

    /// Query-string parameters for one page
    pub fn params(&self, page: u32) -> Vec<(&'static str, String)> {
        vec![
            ("q", self.predicate()),
            ("sort", self.sort.to_string()),
            ("order", self.order.to_string()),
            ("page", page.to_string()),
            ("per_page", self.per_page.to_string()),
        ]
    }
}

/// Cutoff date `days` before `today`
pub fn cutoff_from_window(today: Date, days: u32) -> Result<Date> {
    today
        .checked_sub(i64::from(days).days())
        .map_err(|e| StargazeError::Config(format!("cannot compute search cutoff: {e}")))
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(s: &str) -> Result<Date> {
    s.trim()
        .parse::<Date>()
        .map_err(|_| StargazeError::InvalidDate(s.to_string()))
}
