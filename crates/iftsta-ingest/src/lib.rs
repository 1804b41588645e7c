//! IFTSTA message decoding.
//!
//! This crate turns the flat, apostrophe-terminated text of an EDIFACT IFTSTA
//! (international multimodal status report) message into a [`Document`] of
//! per-consignment status records.
//!
//! # Pipeline
//!
//! 1. **Clean**: drop line breaks and the `UNA` service string advice
//! 2. **Tokenize**: split into [`Segment`]s, data elements and components
//! 3. **Partition**: header region (before `BGM`) and data region
//! 4. **Group**: one segment group per `CNI` consignment
//! 5. **Map**: fold each group into a [`Consignment`]
//! 6. **Assemble**: attach `UNB` interchange metadata
//!
//! # Example
//!
//! ```ignore
//! use iftsta_ingest::decode;
//!
//! let document = decode("UNA:+.? 'UNB+UNOC:3+SENDER+RECIPIENT+240115:1230+1'BGM+23'CNI+1+4711'STS+1+21'")?;
//! assert_eq!(document.consignments[0].status.as_deref(), Some("21"));
//! ```
//!
//! [`Segment`]: iftsta_model::Segment
//! [`Consignment`]: iftsta_model::Consignment

mod datetime;
mod decode;
mod error;
mod header;
mod loader;
mod mapping;
mod partition;
mod tokenize;

// === Error Types ===
pub use error::{DecodeError, IngestError, Result};

// === Decoding ===
pub use decode::{assemble_document, decode};
pub use datetime::DateFormat;

// === Pipeline Stages ===
pub use header::read_interchange;
pub use mapping::map_consignment;
pub use partition::{GROUP_START, MESSAGE_START, group_consignments, split_regions};
pub use tokenize::{
    COMPONENT_SEPARATOR, ELEMENT_SEPARATOR, SEGMENT_TERMINATOR, SERVICE_STRING_ADVICE,
    clean_message, split_components, tokenize,
};

// === File Loading ===
pub use loader::load_message;

pub use iftsta_model::{Consignment, Document, Interchange};
