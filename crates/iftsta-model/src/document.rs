//! Decoded IFTSTA output.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Interchange envelope metadata taken from the `UNB` header segment.
///
/// Every field is optional: a missing or malformed header leaves it empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interchange {
    /// Preparation date/time of the interchange (naive, UTC assumed).
    pub created_at: Option<NaiveDateTime>,
    /// Interchange sender identification.
    pub sender: Option<String>,
    /// Interchange recipient identification.
    pub recipient: Option<String>,
    /// Interchange control reference.
    pub control_reference: Option<String>,
}

/// Status record for a single consignment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Consignment {
    /// Consignment number from the `CNI` segment.
    pub number: String,
    /// Global identifier from the `GIN` segment.
    pub global_identifier: Option<String>,
    /// Status code from the `STS` segment.
    pub status: Option<String>,
    /// Status change date/time from `DTM` qualifier 334.
    pub status_changed_at: Option<NaiveDateTime>,
    /// Free text from the `FTX` segment.
    pub additional_info: Option<String>,
}

/// A fully decoded IFTSTA message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Envelope metadata from the header region.
    pub interchange: Interchange,
    /// Consignments in the order their `CNI` segments appeared.
    pub consignments: Vec<Consignment>,
}

impl Document {
    /// Returns the interchange creation timestamp, if the header carried one.
    pub fn created_at(&self) -> Option<NaiveDateTime> {
        self.interchange.created_at
    }

    /// Returns the number of consignments.
    pub fn len(&self) -> usize {
        self.consignments.len()
    }

    /// Returns true if the message carried no consignments.
    pub fn is_empty(&self) -> bool {
        self.consignments.is_empty()
    }

    /// Finds a consignment by number.
    pub fn consignment(&self, number: &str) -> Option<&Consignment> {
        self.consignments.iter().find(|c| c.number == number)
    }
}
