//! Scalar field decoding for inbound data messages.
//!
//! A message is a data update only when the timestamp key is present; the
//! sender uses timestamp-less messages as heartbeats and control traffic.
//! Every optional field merges incrementally: absence keeps the previous
//! value. The graph byte field is the one exception, handled wholesale by
//! `graph::parse_graph`.

use log::debug;

use super::graph::parse_graph;
use super::keys;
use crate::display::DisplayState;
use crate::message::Message;

/// What applying one message changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApplyOutcome {
    /// Timestamp key was present and the reading was updated.
    pub data_update: bool,
    /// A graph payload decoded and replaced the series.
    pub graph_update: bool,
    /// A graph payload was present but rejected; previous series kept.
    pub graph_rejected: bool,
}

/// Apply one inbound message to the display state.
///
/// Messages without the timestamp key are ignored entirely. Rejected graph
/// payloads are logged and swallowed; the previous series stays on screen.
pub fn apply_message(state: &mut DisplayState, message: &Message) -> ApplyOutcome {
    let mut outcome = ApplyOutcome::default();

    let Some(timestamp) = message.get_uint(keys::KEY_BG_TIMESTAMP) else {
        return outcome;
    };
    outcome.data_update = true;
    state.reading.timestamp = timestamp;

    if let Some(bg) = message.get_str(keys::KEY_BG_STRING) {
        state.reading.set_bg(bg);
    }
    if let Some(delta) = message.get_str(keys::KEY_DELTA_STRING) {
        state.reading.set_delta(delta);
    }
    if let Some(index) = message.get_uint(keys::KEY_ARROW_INDEX) {
        // Raw byte is stored as-is; range validation happens at render time.
        state.reading.arrow_index = u8::try_from(index).unwrap_or(u8::MAX);
    }
    if let Some(level) = message.get_uint(keys::KEY_PHONE_BATTERY) {
        state.reading.phone_battery = Some(level.min(100) as u8);
    }

    if let Some(payload) = message.get_bytes(keys::KEY_GRAPH_DATA) {
        match parse_graph(state.revision, payload) {
            Ok(series) => {
                state.graph.series = series;
                outcome.graph_update = true;
            }
            Err(err) => {
                debug!("graph payload rejected: {err}");
                outcome.graph_rejected = true;
            }
        }
    }

    // Threshold lines are independent of the graph field's success.
    if let Some(raw) = message.get_uint(keys::KEY_GRAPH_HIGH_LINE) {
        state.graph.high_line = state.revision.decode_threshold(raw);
    }
    if let Some(raw) = message.get_uint(keys::KEY_GRAPH_LOW_LINE) {
        state.graph.low_line = state.revision.decode_threshold(raw);
    }

    state.mark_reading_dirty();
    if outcome.graph_update {
        state.mark_graph_dirty();
    }

    outcome
}
