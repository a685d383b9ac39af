//! Person records
//!
//! The remote entity returned by the API and the creation request sent to it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A saved record as returned by the API.
///
/// The record is created and owned by the backend; this application only
/// reads them. `id` is treated as opaque and may be absent in the payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    /// ISO calendar date (`YYYY-MM-DD`) as stored by the backend
    pub date: String,
}

/// Creation request body for `POST /api/person/`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewPerson {
    pub name: String,
    pub date: String,
}

impl NewPerson {
    pub fn new(name: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            date: date.into(),
        }
    }
}

/// Render an ISO date for display, e.g. "2024-02-01" -> "February 1, 2024".
///
/// Falls back to the raw string if the backend sends something unparseable.
pub fn format_date(iso: &str) -> String {
    match NaiveDate::parse_from_str(iso, "%Y-%m-%d") {
        Ok(date) => date.format("%B %-d, %Y").to_string(),
        Err(_) => iso.to_string(),
    }
}
