//! EDIFACT compact date/time formats.
//!
//! EDIFACT writes dates without delimiters and declares the layout through a
//! format code (data element 2379). Only the two layouts used by IFTSTA
//! status reports are supported here.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::fmt;

/// Date/time layout selected by an EDIFACT format code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateFormat {
    /// Code 203: `CCYYMMDDHHMM`.
    DateTime,
    /// Code 102: `CCYYMMDD`, interpreted as midnight.
    Date,
}

impl DateFormat {
    /// Selects the layout for a format code.
    ///
    /// `102` is date-only; anything else, including a missing code, falls
    /// back to the full date/time layout.
    pub fn from_code(code: Option<&str>) -> Self {
        match code.map(str::trim) {
            Some("102") => DateFormat::Date,
            _ => DateFormat::DateTime,
        }
    }

    /// Returns the EDIFACT format code.
    pub fn code(&self) -> &'static str {
        match self {
            DateFormat::DateTime => "203",
            DateFormat::Date => "102",
        }
    }

    /// Returns the layout as written in the EDIFACT directory.
    pub fn layout(&self) -> &'static str {
        match self {
            DateFormat::DateTime => "CCYYMMDDHHMM",
            DateFormat::Date => "CCYYMMDD",
        }
    }

    /// Parses `value` strictly: exact width, ASCII digits only, valid calendar values.
    pub fn parse(&self, value: &str) -> Option<NaiveDateTime> {
        if value.len() != self.layout().len() || !value.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        match self {
            DateFormat::DateTime => NaiveDateTime::parse_from_str(value, "%Y%m%d%H%M").ok(),
            DateFormat::Date => NaiveDate::parse_from_str(value, "%Y%m%d")
                .ok()
                .map(|date| date.and_time(NaiveTime::MIN)),
        }
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.layout(), self.code())
    }
}
