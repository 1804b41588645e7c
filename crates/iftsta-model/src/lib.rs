//! Data model types for decoded IFTSTA (transport status) messages.
//!
//! This crate holds the value types shared by the decoder and its callers:
//!
//! - [`segment`]: raw EDIFACT structure ([`Segment`], [`DataElement`])
//! - [`qualifier`]: the closed set of segment tags the decoder understands
//! - [`document`]: decoded output ([`Document`], [`Interchange`], [`Consignment`])
//!
//! All types are immutable once constructed by the decoder and serialize with
//! serde so the presentation layer can render them as JSON.

pub mod document;
pub mod qualifier;
pub mod segment;

pub use document::{Consignment, Document, Interchange};
pub use qualifier::Qualifier;
pub use segment::{DataElement, Segment};
