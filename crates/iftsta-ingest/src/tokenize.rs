//! Segment tokenizer.
//!
//! Splits cleaned message text into [`Segment`]s. Tokenizing never fails:
//! fragments without an element separator (whitespace, stray terminators)
//! are skipped.

use iftsta_model::{DataElement, Segment};

/// Service string advice token. Everything up to and including it is stripped.
pub const SERVICE_STRING_ADVICE: &str = "UNA:+.?";

/// Terminates a segment.
pub const SEGMENT_TERMINATOR: char = '\'';

/// Separates the tag from the data and data elements from each other.
pub const ELEMENT_SEPARATOR: char = '+';

/// Separates components within a data element.
pub const COMPONENT_SEPARATOR: char = ':';

/// Removes line breaks and the leading service string advice.
pub fn clean_message(raw: &str) -> String {
    let joined: String = raw.chars().filter(|c| !matches!(c, '\r' | '\n')).collect();
    match joined.find(SERVICE_STRING_ADVICE) {
        Some(pos) => joined[pos + SERVICE_STRING_ADVICE.len()..].trim().to_string(),
        None => joined.trim().to_string(),
    }
}

/// Splits one data element into its component values.
pub fn split_components(field: &str) -> DataElement {
    field.split(COMPONENT_SEPARATOR).collect()
}

/// Splits cleaned message text into segments, preserving source order.
pub fn tokenize(text: &str) -> Vec<Segment> {
    text.split(SEGMENT_TERMINATOR).filter_map(parse_segment).collect()
}

fn parse_segment(fragment: &str) -> Option<Segment> {
    let Some((tag, data)) = fragment.split_once(ELEMENT_SEPARATOR) else {
        if !fragment.trim().is_empty() {
            tracing::trace!(fragment, "Skipping fragment without element separator");
        }
        return None;
    };
    let elements = data.split(ELEMENT_SEPARATOR).map(split_components).collect();
    Some(Segment::new(tag.trim(), elements))
}
