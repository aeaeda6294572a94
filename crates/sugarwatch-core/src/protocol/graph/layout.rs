pub const REF_TIMESTAMP_RANGE: std::ops::Range<usize> = 0..4;

pub const COMPACT_COUNT_OFFSET: usize = 4;
pub const EXTENDED_COUNT_RANGE: std::ops::Range<usize> = 4..6;

pub const COMPACT_HEADER_LEN: usize = 5;
pub const EXTENDED_HEADER_LEN: usize = 6;

pub const COMPACT_MAX_POINTS: usize = 60;
pub const EXTENDED_MAX_POINTS: usize = 300;

/// Graph value entries are one byte in every revision.
pub const VALUE_LEN: usize = 1;

/// Wire value bytes are half-resolution: one unit is 2 mg/dL.
pub const MG_DL_PER_UNIT: u16 = 2;
