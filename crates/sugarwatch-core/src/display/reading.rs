//! Current scalar glucose state shown on the display.

use core::fmt::Write as _;

use heapless::String as FixedString;

/// Visible characters of the formatted glucose value (fits "10.0").
pub const BG_STRING_CAP: usize = 4;
/// Visible characters of the formatted delta (fits "+0.06").
pub const DELTA_STRING_CAP: usize = 5;
/// Visible characters of the time-ago label (fits "99h").
pub const TIME_AGO_CAP: usize = 3;

/// Placeholder shown until the first data message arrives.
pub const BG_PLACEHOLDER: &str = "---";

/// Number of trend arrow slots; raw indices at or above this render as none.
pub const TREND_ARROW_COUNT: u8 = 8;

/// Trend arrow slots, index order fixed by the wire protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendArrow {
    DoubleUp,
    SingleUp,
    FortyFiveUp,
    Flat,
    FortyFiveDown,
    SingleDown,
    DoubleDown,
}

impl TrendArrow {
    /// Map a raw wire index to an arrow.
    ///
    /// Index 0 means unknown; anything at or past [`TREND_ARROW_COUNT`] is a
    /// sender the display does not understand yet. Both render as no arrow.
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            1 => Some(TrendArrow::DoubleUp),
            2 => Some(TrendArrow::SingleUp),
            3 => Some(TrendArrow::FortyFiveUp),
            4 => Some(TrendArrow::Flat),
            5 => Some(TrendArrow::FortyFiveDown),
            6 => Some(TrendArrow::SingleDown),
            7 => Some(TrendArrow::DoubleDown),
            _ => None,
        }
    }
}

/// Scalar reading state, merged field-by-field from data messages.
///
/// `timestamp == 0` is the "never received" sentinel; accessors that depend
/// on a reading time return nothing while it holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reading {
    /// Reading time in UNIX epoch seconds; 0 until the first data message.
    pub timestamp: u32,
    bg: FixedString<BG_STRING_CAP>,
    delta: FixedString<DELTA_STRING_CAP>,
    /// Raw arrow index as received; range-checked only at render time.
    pub arrow_index: u8,
    /// Phone battery 0-100, when the sender provides it.
    pub phone_battery: Option<u8>,
}

impl Reading {
    pub fn new() -> Self {
        Self {
            timestamp: 0,
            bg: copy_truncated(BG_PLACEHOLDER),
            delta: FixedString::new(),
            arrow_index: 0,
            phone_battery: None,
        }
    }

    /// Whether a data message has ever been applied.
    pub fn has_data(&self) -> bool {
        self.timestamp != 0
    }

    /// Formatted glucose value.
    pub fn bg(&self) -> &str {
        self.bg.as_str()
    }

    /// Formatted delta; empty until provided.
    pub fn delta(&self) -> &str {
        self.delta.as_str()
    }

    /// Store a glucose string, truncating to capacity at a char boundary.
    pub fn set_bg(&mut self, value: &str) {
        self.bg = copy_truncated(value);
    }

    /// Store a delta string, truncating to capacity at a char boundary.
    pub fn set_delta(&mut self, value: &str) {
        self.delta = copy_truncated(value);
    }

    /// Arrow for the stored raw index, if it names a known slot.
    pub fn trend_arrow(&self) -> Option<TrendArrow> {
        TrendArrow::from_index(self.arrow_index)
    }

    /// Whole minutes since the reading, or `None` before the first reading.
    ///
    /// Clock skew that puts the reading in the future reports as 0 minutes.
    pub fn minutes_ago(&self, now: u32) -> Option<u32> {
        if !self.has_data() {
            return None;
        }
        Some(now.saturating_sub(self.timestamp) / 60)
    }

    /// Short age label: "7m" under an hour, "2h" beyond.
    ///
    /// Empty until the first reading. Ages that do not fit the fixed buffer
    /// are cut short, matching the on-screen field width.
    pub fn time_ago_label(&self, now: u32) -> FixedString<TIME_AGO_CAP> {
        let mut label = FixedString::new();
        let Some(minutes) = self.minutes_ago(now) else {
            return label;
        };
        if minutes < 60 {
            let _ = write!(label, "{minutes}m");
        } else {
            let _ = write!(label, "{}h", minutes / 60);
        }
        label
    }
}

impl Default for Reading {
    fn default() -> Self {
        Self::new()
    }
}

/// Copy `value` into a fixed-capacity string, stopping at the last char
/// that fits. Never fails and never splits a multi-byte char.
pub(crate) fn copy_truncated<const N: usize>(value: &str) -> FixedString<N> {
    let mut out = FixedString::new();
    for ch in value.chars() {
        if out.push(ch).is_err() {
            break;
        }
    }
    out
}
