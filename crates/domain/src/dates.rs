// Copyright (C) 2026 LifeFlow Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use chrono::{NaiveDate, NaiveDateTime};

/// Parses an ISO calendar date (`YYYY-MM-DD`).
///
/// # Errors
///
/// Returns an error if the string does not parse as a calendar date.
pub fn parse_date(value: &str) -> Result<NaiveDate, DomainError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|e| DomainError::InvalidDate {
        value: value.to_string(),
        reason: e.to_string(),
    })
}

/// Parses an ISO datetime without offset (`YYYY-MM-DDTHH:MM:SS`).
///
/// # Errors
///
/// Returns an error if the string does not parse as a datetime.
pub fn parse_datetime(value: &str) -> Result<NaiveDateTime, DomainError> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S").map_err(|e| {
        DomainError::InvalidDate {
            value: value.to_string(),
            reason: e.to_string(),
        }
    })
}
