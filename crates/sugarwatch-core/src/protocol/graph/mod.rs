//! Graph history payload decoding.
//!
//! The parser validates the declared point count against the revision
//! capacity before any length arithmetic, then checks the measured length
//! against the clamped expectation. Either rejection leaves the caller's
//! previous series untouched; a clamp alone never rejects.
//!
//! Wire-format offsets live in `layout`, safe byte access in `reader`,
//! explicit errors in `error`.

pub mod error;
pub mod layout;
pub mod parser;
pub mod reader;

pub use error::GraphError;
pub use parser::parse_graph;
