//! Owned display state and the decoder/renderer handshake.
//!
//! One `DisplayState` exists per process, constructed at startup with
//! sentinel values and mutated in place by the inbound-message callback.
//! The renderer runs on the same logical thread and never draws
//! re-entrantly; it polls [`DisplayState::take_dirty`] and redraws what
//! changed, so no synchronization primitive is involved anywhere.

pub mod graph;
pub mod reading;

pub use graph::{GraphModel, GraphPoint, GraphSeries, MAX_GRAPH_POINTS};
pub use reading::{Reading, TrendArrow};

use crate::message::Message;
use crate::protocol::fields::{self, ApplyOutcome};
use crate::protocol::revision::Revision;

/// Which parts of the display need a redraw.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirtyFlags {
    pub reading: bool,
    pub graph: bool,
}

impl DirtyFlags {
    pub fn any(self) -> bool {
        self.reading || self.graph
    }
}

/// The single owned context holding everything the renderer shows.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayState {
    /// Wire revision negotiated at startup via the capability announcement.
    pub revision: Revision,
    pub reading: Reading,
    pub graph: GraphModel,
    dirty: DirtyFlags,
}

impl DisplayState {
    /// Fresh state: sentinel reading, empty series, default thresholds.
    pub fn new(revision: Revision) -> Self {
        Self {
            revision,
            reading: Reading::new(),
            graph: GraphModel::new(),
            dirty: DirtyFlags::default(),
        }
    }

    /// Entry point for the inbound-message callback.
    pub fn handle_message(&mut self, message: &Message) -> ApplyOutcome {
        fields::apply_message(self, message)
    }

    /// Drain the dirty flags, clearing them for the next decode round.
    pub fn take_dirty(&mut self) -> DirtyFlags {
        std::mem::take(&mut self.dirty)
    }

    /// Peek at the dirty flags without clearing them.
    pub fn dirty(&self) -> DirtyFlags {
        self.dirty
    }

    pub(crate) fn mark_reading_dirty(&mut self) {
        self.dirty.reading = true;
    }

    pub(crate) fn mark_graph_dirty(&mut self) {
        self.dirty.graph = true;
    }
}

#[cfg(test)]
mod tests {
    use super::{DisplayState, GraphPoint, GraphSeries};
    use crate::message::Message;
    use crate::protocol::keys;
    use crate::protocol::revision::Revision;

    fn graph_message(timestamp: u32, payload: Vec<u8>) -> Message {
        Message::new()
            .with_uint(keys::KEY_BG_TIMESTAMP, timestamp)
            .with_bytes(keys::KEY_GRAPH_DATA, payload)
    }

    fn extended_payload(reference: u32, points: &[(u16, u8)]) -> Vec<u8> {
        let mut payload = Vec::new();
        payload.extend_from_slice(&reference.to_le_bytes());
        payload.extend_from_slice(&(points.len() as u16).to_le_bytes());
        for &(offset, _) in points {
            payload.extend_from_slice(&offset.to_le_bytes());
        }
        payload.extend(points.iter().map(|&(_, value)| value));
        payload
    }

    #[test]
    fn dirty_protocol_tracks_updates() {
        let mut state = DisplayState::new(Revision::Extended);
        assert!(!state.dirty().any());

        state.handle_message(&graph_message(1_000, extended_payload(900, &[(0, 50)])));
        let dirty = state.take_dirty();
        assert!(dirty.reading);
        assert!(dirty.graph);

        // Flags reset after being taken.
        assert!(!state.dirty().any());

        // A data message without graph bytes only dirties the reading.
        state.handle_message(&Message::new().with_uint(keys::KEY_BG_TIMESTAMP, 1_300));
        let dirty = state.take_dirty();
        assert!(dirty.reading);
        assert!(!dirty.graph);
    }

    #[test]
    fn graph_is_replaced_wholesale() {
        let mut state = DisplayState::new(Revision::Extended);
        state.handle_message(&graph_message(
            1_000,
            extended_payload(900, &[(0, 50), (5, 60), (10, 70)]),
        ));
        assert_eq!(state.graph.series.len(), 3);

        state.handle_message(&graph_message(1_300, extended_payload(1_200, &[(0, 55)])));
        assert_eq!(state.graph.series.len(), 1);
        assert_eq!(state.graph.series.reference_timestamp, 1_200);
        assert_eq!(state.graph.series.points()[0].mg_dl, 110);
    }

    #[test]
    fn rejected_graph_keeps_previous_series() {
        let mut state = DisplayState::new(Revision::Extended);
        state.handle_message(&graph_message(1_000, extended_payload(900, &[(0, 50), (5, 60)])));
        let before = state.graph.series.clone();

        // Truncated payload: shorter than its own declared body.
        let mut truncated = extended_payload(1_200, &[(0, 55), (5, 65)]);
        truncated.truncate(8);
        let outcome = state.handle_message(&graph_message(1_300, truncated));

        assert!(outcome.graph_rejected);
        assert_eq!(state.graph.series, before);
        // The reading half of the message still applied.
        assert_eq!(state.reading.timestamp, 1_300);
        assert!(!state.take_dirty().graph);
    }

    #[test]
    fn state_survives_restart_as_sentinel() {
        // A fresh process has no persisted state: reading at the sentinel,
        // series empty, until the next inbound message rebuilds both.
        let state = DisplayState::new(Revision::Compact);
        assert!(!state.reading.has_data());
        assert_eq!(state.graph.series, GraphSeries::empty());
        assert_eq!(state.graph.series.points(), &[] as &[GraphPoint]);
    }
}
