//! Interchange header (`UNB`) extraction.

use chrono::NaiveDateTime;
use iftsta_model::{Interchange, Qualifier, Segment};

use crate::datetime::DateFormat;

/// Reads interchange metadata from the first `UNB` segment of the header region.
///
/// Never fails. A missing `UNB` segment yields an empty [`Interchange`], and an
/// unrecognized date/time shape leaves `created_at` unset.
pub fn read_interchange(header: &[Segment]) -> Interchange {
    let Some(unb) = header.iter().find(|segment| segment.is(Qualifier::Unb)) else {
        tracing::debug!("No UNB segment in header region");
        return Interchange::default();
    };

    Interchange {
        created_at: preparation_time(unb.value(3, 0), unb.value(3, 1)),
        sender: unb.non_empty_value(1, 0).map(str::to_string),
        recipient: unb.non_empty_value(2, 0).map(str::to_string),
        control_reference: unb.non_empty_value(4, 0).map(str::to_string),
    }
}

/// Combines the `UNB` date and time components.
///
/// Accepts `YYMMDD` (year 2000 + YY) or `CCYYMMDD`, each followed by `HHMM`.
fn preparation_time(date: Option<&str>, time: Option<&str>) -> Option<NaiveDateTime> {
    let (date, time) = (date?, time?);
    if time.len() != 4 {
        return None;
    }
    let value = match date.len() {
        6 => format!("20{date}{time}"),
        8 => format!("{date}{time}"),
        _ => return None,
    };
    let parsed = DateFormat::DateTime.parse(&value);
    if parsed.is_none() {
        tracing::warn!(date, time, "Ignoring invalid interchange preparation date/time");
    }
    parsed
}
