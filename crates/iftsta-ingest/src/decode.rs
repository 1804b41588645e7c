//! Decoding entry point and document assembly.

use iftsta_model::{Consignment, Document, Interchange};

use crate::error::DecodeError;
use crate::header::read_interchange;
use crate::mapping::map_consignment;
use crate::partition::{GROUP_START, MESSAGE_START, group_consignments, split_regions};
use crate::tokenize::{clean_message, tokenize};

/// Decodes the raw text of an IFTSTA message.
///
/// Groups are mapped in message order and the first failing group aborts
/// the decode, so a partially populated document is never returned.
///
/// # Errors
///
/// Returns [`DecodeError::InvalidStatusDate`] if any consignment carries a
/// status change date that does not match its declared format.
pub fn decode(raw: &str) -> Result<Document, DecodeError> {
    let cleaned = clean_message(raw);
    let segments = tokenize(&cleaned);
    let (header, data) = split_regions(&segments, MESSAGE_START);
    let groups = group_consignments(data, GROUP_START);

    tracing::debug!(
        segments = segments.len(),
        header_segments = header.len(),
        data_segments = data.len(),
        groups = groups.len(),
        "Tokenized message"
    );

    let interchange = read_interchange(header);
    let consignments = groups
        .iter()
        .enumerate()
        .map(|(index, group)| map_consignment(index, group))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(assemble_document(interchange, consignments))
}

/// Combines interchange metadata with consignments in group order.
pub fn assemble_document(interchange: Interchange, consignments: Vec<Consignment>) -> Document {
    Document {
        interchange,
        consignments,
    }
}
