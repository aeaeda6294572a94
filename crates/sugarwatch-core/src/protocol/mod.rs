//! Wire-protocol decoding modules.
//!
//! The graph payload decoder follows a layered structure:
//! - `layout`: byte offsets and capacities (source of truth)
//! - `reader`: safe byte access, little-endian conventions
//! - `parser`: domain-level decoding (no direct byte indexing)
//! - `error`: explicit, actionable errors
//!
//! Scalar fields arrive pre-typed in the message dictionary, so `fields`
//! decodes straight from [`crate::message::Message`] without a byte layer.
//! Decoders are pure and contain no I/O; the display layer owns all state
//! mutation and the replay layer owns file access.

pub mod capability;
pub mod fields;
pub mod graph;
pub mod keys;
pub mod revision;

pub use capability::CapabilityAnnouncement;
pub use fields::{ApplyOutcome, apply_message};
pub use graph::{GraphError, parse_graph};
pub use revision::Revision;
