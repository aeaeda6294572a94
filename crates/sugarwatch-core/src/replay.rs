//! Offline replay of recorded message logs.
//!
//! A message log is a JSON array of messages as captured from the
//! transport. Replay feeds them through a fresh `DisplayState` exactly as
//! the inbound callback would and reports what the display ended up
//! showing. This is the only module in the crate that touches the
//! filesystem.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::display::DisplayState;
use crate::message::Message;
use crate::protocol::revision::Revision;
use crate::{ReplayReport, make_empty_report, snapshot_state};

#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed message log: {0}")]
    Json(#[from] serde_json::Error),
}

/// Replay a JSON message log from disk.
pub fn replay_log_file(revision: Revision, path: &Path) -> Result<ReplayReport, ReplayError> {
    let raw = fs::read_to_string(path)?;
    let messages: Vec<Message> = serde_json::from_str(&raw)?;
    Ok(replay_messages(revision, &messages))
}

/// Replay an in-memory message sequence.
pub fn replay_messages(revision: Revision, messages: &[Message]) -> ReplayReport {
    let mut state = DisplayState::new(revision);
    let mut report = make_empty_report(revision);

    for message in messages {
        let outcome = state.handle_message(message);
        report.messages_total += 1;
        if outcome.data_update {
            report.data_updates += 1;
        }
        if outcome.graph_update {
            report.graph_updates += 1;
        }
        if outcome.graph_rejected {
            report.graph_rejects += 1;
        }
    }

    report.final_state = snapshot_state(&state);
    report
}
