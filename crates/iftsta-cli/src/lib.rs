//! CLI library components for the IFTSTA decoder.

pub mod logging;
pub mod report;
