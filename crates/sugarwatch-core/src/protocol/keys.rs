//! Message keys shared with the phone-side sender (source of truth).
//!
//! Keys 0-2 travel display -> phone in the capability announcement; keys
//! 10+ travel phone -> display in data messages. Unknown keys are ignored
//! by both ends so either side can ship new fields first.

/// Capability announcement: negotiated protocol version.
pub const KEY_PROTOCOL_VERSION: u32 = 0;
/// Capability announcement: bitmask of requested data categories.
pub const KEY_CAPABILITIES: u32 = 1;
/// Capability announcement: requested history window in hours.
pub const KEY_GRAPH_HOURS: u32 = 2;

/// Reading timestamp in UNIX epoch seconds. Presence marks a data message.
pub const KEY_BG_TIMESTAMP: u32 = 10;
/// Formatted glucose value, e.g. "7.5" or "135".
pub const KEY_BG_STRING: u32 = 11;
/// Formatted delta, e.g. "+0.3" or "-5".
pub const KEY_DELTA_STRING: u32 = 12;
/// Trend arrow slot index, 0..8 with 0 meaning unknown.
pub const KEY_ARROW_INDEX: u32 = 13;
/// Packed graph history payload, layout in `graph::layout`.
pub const KEY_GRAPH_DATA: u32 = 14;
/// High glucose threshold, resolution depends on the wire revision.
pub const KEY_GRAPH_HIGH_LINE: u32 = 15;
/// Low glucose threshold, resolution depends on the wire revision.
pub const KEY_GRAPH_LOW_LINE: u32 = 16;
/// Phone battery level 0-100.
pub const KEY_PHONE_BATTERY: u32 = 17;

/// Request glucose readings.
pub const CAP_BG: u32 = 1 << 0;
/// Request trend arrow indices.
pub const CAP_TREND_ARROW: u32 = 1 << 1;
/// Request formatted deltas.
pub const CAP_DELTA: u32 = 1 << 2;
/// Request phone battery levels.
pub const CAP_PHONE_BATTERY: u32 = 1 << 3;
