//! Outbound capability announcement.
//!
//! Sent on startup and on reconnect; it tells the phone which protocol
//! version to speak, which data categories to send, and how many hours of
//! history to pack into graph payloads. Sending is the transport's job,
//! this module only builds the fixed-format message.

use super::keys;
use super::revision::Revision;
use crate::message::Message;

/// History window requested when the caller does not pick one.
pub const DEFAULT_GRAPH_HOURS: u8 = 2;

/// Data categories requested by default.
pub const DEFAULT_CAPABILITIES: u32 = keys::CAP_BG | keys::CAP_TREND_ARROW | keys::CAP_DELTA;

/// The display's advertisement of what it wants to receive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapabilityAnnouncement {
    pub protocol_version: u8,
    pub capabilities: u32,
    pub graph_hours: u8,
}

impl CapabilityAnnouncement {
    /// Announcement for `revision` with the default categories and window.
    pub fn new(revision: Revision) -> Self {
        Self {
            protocol_version: revision.protocol_version(),
            capabilities: DEFAULT_CAPABILITIES,
            graph_hours: DEFAULT_GRAPH_HOURS,
        }
    }

    /// Request an additional data category.
    pub fn with_capability(mut self, bit: u32) -> Self {
        self.capabilities |= bit;
        self
    }

    /// Request a different history window.
    pub fn with_graph_hours(mut self, hours: u8) -> Self {
        self.graph_hours = hours;
        self
    }

    /// History window in minutes, the unit the renderer filters points with.
    pub fn graph_window_minutes(&self) -> u32 {
        u32::from(self.graph_hours) * 60
    }

    /// Encode into the fixed outbound message format.
    pub fn to_message(&self) -> Message {
        Message::new()
            .with_uint(keys::KEY_PROTOCOL_VERSION, u32::from(self.protocol_version))
            .with_uint(keys::KEY_CAPABILITIES, self.capabilities)
            .with_uint(keys::KEY_GRAPH_HOURS, u32::from(self.graph_hours))
    }
}
