//! Wire-format revisions of the graph payload.
//!
//! The revision is fixed at startup by the protocol version the display
//! announces; the phone then encodes every graph payload and threshold
//! scalar in that revision until the next reconnect.

use super::graph::layout;

/// Graph payload encoding variants, selected by negotiated protocol version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Revision {
    /// v0: u8 count, u8 offsets, 60-point capacity, full-resolution
    /// u16 threshold scalars.
    Compact,
    /// v1: u16 LE count, u16 LE offsets, 300-point capacity,
    /// half-resolution u8 threshold scalars.
    Extended,
}

impl Revision {
    /// Map a negotiated protocol version to its wire revision.
    pub fn from_protocol_version(version: u8) -> Option<Self> {
        match version {
            0 => Some(Revision::Compact),
            1 => Some(Revision::Extended),
            _ => None,
        }
    }

    /// Protocol version advertised in the capability announcement.
    pub fn protocol_version(self) -> u8 {
        match self {
            Revision::Compact => 0,
            Revision::Extended => 1,
        }
    }

    /// Fixed header length: reference timestamp plus the count field.
    pub fn header_len(self) -> usize {
        match self {
            Revision::Compact => layout::COMPACT_HEADER_LEN,
            Revision::Extended => layout::EXTENDED_HEADER_LEN,
        }
    }

    /// Width in bytes of one offset entry.
    pub fn offset_width(self) -> usize {
        match self {
            Revision::Compact => 1,
            Revision::Extended => 2,
        }
    }

    /// Maximum point count; declared counts above this are clamped.
    pub fn max_points(self) -> usize {
        match self {
            Revision::Compact => layout::COMPACT_MAX_POINTS,
            Revision::Extended => layout::EXTENDED_MAX_POINTS,
        }
    }

    /// Bytes one point contributes past the header (offset entry + value byte).
    pub fn point_stride(self) -> usize {
        self.offset_width() + layout::VALUE_LEN
    }

    /// Decode a threshold scalar into mg/dL.
    ///
    /// Compact carries thresholds at full resolution; Extended carries them
    /// in the same half-resolution units as the graph value bytes.
    pub fn decode_threshold(self, raw: u32) -> u16 {
        match self {
            Revision::Compact => raw.min(u16::MAX as u32) as u16,
            Revision::Extended => (raw.min(u8::MAX as u32) as u16) * 2,
        }
    }
}

impl std::fmt::Display for Revision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Revision::Compact => write!(f, "compact"),
            Revision::Extended => write!(f, "extended"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Revision;

    #[test]
    fn protocol_version_round_trip() {
        for revision in [Revision::Compact, Revision::Extended] {
            assert_eq!(
                Revision::from_protocol_version(revision.protocol_version()),
                Some(revision)
            );
        }
        assert_eq!(Revision::from_protocol_version(7), None);
    }

    #[test]
    fn stride_counts_offset_and_value() {
        assert_eq!(Revision::Compact.point_stride(), 2);
        assert_eq!(Revision::Extended.point_stride(), 3);
    }

    #[test]
    fn threshold_resolution_per_revision() {
        assert_eq!(Revision::Compact.decode_threshold(180), 180);
        assert_eq!(Revision::Extended.decode_threshold(90), 180);
        // Out-of-range scalars saturate instead of wrapping.
        assert_eq!(Revision::Compact.decode_threshold(70_000), u16::MAX);
        assert_eq!(Revision::Extended.decode_threshold(300), 510);
    }
}
