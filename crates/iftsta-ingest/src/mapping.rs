//! Field mapping from a consignment group to a [`Consignment`].
//!
//! Each recognized qualifier has a handler that writes at most one field.
//! Handlers run in segment order, so a repeated qualifier overwrites the
//! value written by an earlier one, including with an empty string. Only an
//! absent element or component leaves a field untouched.

use iftsta_model::{Consignment, Qualifier, Segment};

use crate::datetime::DateFormat;
use crate::error::DecodeError;

/// `DTM` function code for "status change date/time".
const STATUS_CHANGE_DATE: &str = "334";

/// Joins the lines of a multi-line `FTX` text element.
const FREE_TEXT_SEPARATOR: &str = ", ";

/// Index of the free-text data element (C108) in an `FTX` segment.
const FREE_TEXT_ELEMENT: usize = 3;

/// Folds one consignment group into a [`Consignment`].
///
/// `group` is the zero-based position of the group in the message, used for
/// error reporting only.
///
/// # Errors
///
/// Returns [`DecodeError::InvalidStatusDate`] if a `DTM+334` value does not
/// match the layout selected by its format code.
pub fn map_consignment(group: usize, segments: &[Segment]) -> Result<Consignment, DecodeError> {
    segments
        .iter()
        .try_fold(Consignment::default(), |consignment, segment| {
            apply_segment(consignment, segment, group)
        })
}

fn apply_segment(
    consignment: Consignment,
    segment: &Segment,
    group: usize,
) -> Result<Consignment, DecodeError> {
    Ok(match segment.qualifier() {
        Qualifier::Cni => map_number(consignment, segment),
        Qualifier::Gin => map_global_identifier(consignment, segment),
        Qualifier::Dtm => map_status_date(consignment, segment, group)?,
        Qualifier::Sts => map_status(consignment, segment),
        Qualifier::Ftx => map_free_text(consignment, segment),
        Qualifier::Unb | Qualifier::Bgm | Qualifier::Other => consignment,
    })
}

fn map_number(mut consignment: Consignment, segment: &Segment) -> Consignment {
    consignment.number = segment.value(1, 0).unwrap_or_default().to_string();
    consignment
}

fn map_global_identifier(mut consignment: Consignment, segment: &Segment) -> Consignment {
    if let Some(identifier) = segment.value(1, 0) {
        consignment.global_identifier = Some(identifier.to_string());
    }
    consignment
}

fn map_status_date(
    mut consignment: Consignment,
    segment: &Segment,
    group: usize,
) -> Result<Consignment, DecodeError> {
    if segment.value(0, 0).map(str::trim) != Some(STATUS_CHANGE_DATE) {
        return Ok(consignment);
    }

    let format = DateFormat::from_code(segment.value(0, 2));
    let value = segment.value(0, 1).unwrap_or_default();
    match format.parse(value) {
        Some(timestamp) => {
            consignment.status_changed_at = Some(timestamp);
            Ok(consignment)
        }
        None => Err(DecodeError::InvalidStatusDate {
            group,
            consignment: Some(consignment.number).filter(|number| !number.is_empty()),
            value: value.to_string(),
            format,
        }),
    }
}

fn map_status(mut consignment: Consignment, segment: &Segment) -> Consignment {
    // Richer STS variants (reasons, references) carry more elements and are not mapped.
    if segment.elements().len() != 2 {
        return consignment;
    }
    if let Some(status) = segment.value(1, 0) {
        consignment.status = Some(status.to_string());
    }
    consignment
}

fn map_free_text(mut consignment: Consignment, segment: &Segment) -> Consignment {
    let Some(element) = segment.element(FREE_TEXT_ELEMENT) else {
        return consignment;
    };
    let lines: Vec<&str> = element
        .components()
        .iter()
        .map(String::as_str)
        .filter(|line| !line.is_empty())
        .collect();
    if !lines.is_empty() {
        consignment.additional_info = Some(lines.join(FREE_TEXT_SEPARATOR));
    }
    consignment
}
