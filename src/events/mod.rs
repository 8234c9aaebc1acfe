//! Message types exchanged across system boundaries.
//!
//! Submodules:
//! - [`chart`] – status payloads forwarded to the chart collaborator
//! - [`net`] – commands and messages for the background network thread

pub mod chart;
pub mod net;
