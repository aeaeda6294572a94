//! sugarwatch core library: CGM display-client decoding and state.
//!
//! This crate implements the data half of a wrist display that receives
//! glucose telemetry from a paired phone app: the message dictionary, the
//! wire-protocol decoders (scalar fields and the packed graph payload), the
//! owned display state with its dirty-flag handshake, and an offline replay
//! pipeline used by the CLI. Rendering and the transport itself live
//! outside this crate.
//!
//! Invariants:
//! - Decoding never panics, blocks, or allocates past the fixed-capacity
//!   buffers, whatever bytes the peer sends.
//! - A rejected payload leaves the previous state completely untouched;
//!   failures degrade to stale data, never to a blank display.
//! - Declared point counts are clamped to the revision capacity before any
//!   length arithmetic, so no input can cause an out-of-bounds read.
//!
//! # Examples
//! ```
//! use sugarwatch_core::{DisplayState, Message, Revision, keys};
//!
//! let mut state = DisplayState::new(Revision::Extended);
//! let msg = Message::new()
//!     .with_uint(keys::KEY_BG_TIMESTAMP, 1_700_000_000)
//!     .with_str(keys::KEY_BG_STRING, "7.5");
//! let outcome = state.handle_message(&msg);
//! assert!(outcome.data_update);
//! assert_eq!(state.reading.bg(), "7.5");
//! ```

use serde::{Deserialize, Serialize};

pub mod display;
pub mod message;
pub mod protocol;
mod replay;

pub use display::{DirtyFlags, DisplayState, GraphModel, GraphPoint, GraphSeries, Reading, TrendArrow};
pub use message::{Message, Value};
pub use protocol::keys;
pub use protocol::{ApplyOutcome, CapabilityAnnouncement, GraphError, Revision, parse_graph};
pub use replay::{ReplayError, replay_log_file, replay_messages};

/// Current replay report schema version.
pub const REPORT_VERSION: u32 = 1;

/// Replay outcome: message counters plus the final display state.
///
/// # Examples
/// ```
/// use sugarwatch_core::{Revision, make_empty_report};
///
/// let report = make_empty_report(Revision::Extended);
/// assert_eq!(report.report_version, sugarwatch_core::REPORT_VERSION);
/// assert_eq!(report.revision, "extended");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplayReport {
    /// Report schema version (not the wire protocol version).
    pub report_version: u32,
    /// Tool identification metadata.
    pub tool: ToolInfo,
    /// Wire revision the log was replayed under.
    pub revision: String,
    /// Total messages fed through the state machine.
    pub messages_total: u64,
    /// Messages carrying the timestamp key.
    pub data_updates: u64,
    /// Graph payloads that decoded and replaced the series.
    pub graph_updates: u64,
    /// Graph payloads rejected as truncated or malformed.
    pub graph_rejects: u64,
    /// What the display shows after the last message.
    pub final_state: StateSnapshot,
}

/// Tool metadata embedded in reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInfo {
    /// Tool name (e.g., "sugarwatch").
    pub name: String,
    /// Tool version (semver).
    pub version: String,
}

/// Serializable copy of a [`DisplayState`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateSnapshot {
    pub reading: ReadingSnapshot,
    pub graph: GraphSnapshot,
}

/// Serializable copy of the scalar reading state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadingSnapshot {
    /// Reading time in epoch seconds; 0 means no data was ever received.
    pub timestamp: u32,
    pub bg: String,
    pub delta: String,
    /// Raw arrow index as received.
    pub arrow_index: u8,
    /// Arrow slot name when the raw index maps to one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_battery: Option<u8>,
}

/// Serializable copy of the graph model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub reference_timestamp: u32,
    pub count: usize,
    pub points: Vec<PointSnapshot>,
    /// High threshold line in mg/dL.
    pub high_line: u16,
    /// Low threshold line in mg/dL.
    pub low_line: u16,
}

/// One decoded history sample.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointSnapshot {
    pub offset_minutes: u16,
    pub mg_dl: u16,
}

/// Build a report with base fields filled and zeroed counters.
///
/// # Examples
/// ```
/// use sugarwatch_core::{Revision, make_empty_report};
///
/// let report = make_empty_report(Revision::Compact);
/// assert_eq!(report.messages_total, 0);
/// assert_eq!(report.final_state.reading.bg, "---");
/// ```
pub fn make_empty_report(revision: Revision) -> ReplayReport {
    ReplayReport {
        report_version: REPORT_VERSION,
        tool: ToolInfo {
            name: "sugarwatch".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        revision: revision.to_string(),
        messages_total: 0,
        data_updates: 0,
        graph_updates: 0,
        graph_rejects: 0,
        final_state: snapshot_state(&DisplayState::new(revision)),
    }
}

/// Copy a live display state into its serializable form.
pub fn snapshot_state(state: &DisplayState) -> StateSnapshot {
    StateSnapshot {
        reading: ReadingSnapshot {
            timestamp: state.reading.timestamp,
            bg: state.reading.bg().to_string(),
            delta: state.reading.delta().to_string(),
            arrow_index: state.reading.arrow_index,
            trend: state.reading.trend_arrow().map(|arrow| format!("{arrow:?}")),
            phone_battery: state.reading.phone_battery,
        },
        graph: GraphSnapshot {
            reference_timestamp: state.graph.series.reference_timestamp,
            count: state.graph.series.len(),
            points: state
                .graph
                .series
                .points()
                .iter()
                .map(|point| PointSnapshot {
                    offset_minutes: point.offset_minutes,
                    mg_dl: point.mg_dl,
                })
                .collect(),
            high_line: state.graph.high_line,
            low_line: state.graph.low_line,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_omits_optional_fields_when_none() {
        let state = DisplayState::new(Revision::Extended);
        let snapshot = snapshot_state(&state);

        let value = serde_json::to_value(&snapshot).expect("snapshot json");
        let reading = value.get("reading").expect("reading");
        assert!(reading.get("trend").is_none());
        assert!(reading.get("phone_battery").is_none());
        assert_eq!(reading["bg"], "---");
        assert_eq!(value["graph"]["count"], 0);
    }

    #[test]
    fn snapshot_names_known_trend_slots() {
        let mut state = DisplayState::new(Revision::Extended);
        state.reading.arrow_index = 4;
        let snapshot = snapshot_state(&state);
        assert_eq!(snapshot.reading.trend.as_deref(), Some("Flat"));
    }
}
