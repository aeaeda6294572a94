use log::warn;

use super::error::GraphError;
use super::layout;
use super::reader::GraphReader;
use crate::display::graph::{GraphPoint, GraphSeries};
use crate::protocol::revision::Revision;

/// Decode one packed graph payload into a fresh series.
///
/// Layout: `[0..4)` reference timestamp u32 LE, then the declared point
/// count (width per revision), then N offset entries (width per revision),
/// then N value bytes. Offsets and values are two contiguous arrays.
///
/// A declared count above the revision capacity is clamped, not rejected;
/// the length check then sizes off the clamped count and the excess
/// declaration is ignored.
pub fn parse_graph(revision: Revision, payload: &[u8]) -> Result<GraphSeries, GraphError> {
    let reader = GraphReader::new(payload);
    reader.require_len(revision.header_len())?;

    let reference_timestamp = reader.read_u32_le(layout::REF_TIMESTAMP_RANGE.clone())?;
    let declared = match revision {
        Revision::Compact => reader.read_u8(layout::COMPACT_COUNT_OFFSET)? as usize,
        Revision::Extended => reader.read_u16_le(layout::EXTENDED_COUNT_RANGE.clone())? as usize,
    };

    let count = if declared > revision.max_points() {
        warn!(
            "graph count {declared} exceeds {} capacity {}, clamping",
            revision,
            revision.max_points()
        );
        revision.max_points()
    } else {
        declared
    };

    let needed = revision.header_len() + count * revision.point_stride();
    reader.require_len(needed)?;

    let offsets_start = revision.header_len();
    let values_start = offsets_start + count * revision.offset_width();

    let mut series = GraphSeries::new(reference_timestamp);
    for i in 0..count {
        let offset_minutes = match revision {
            Revision::Compact => u16::from(reader.read_u8(offsets_start + i)?),
            Revision::Extended => {
                let at = offsets_start + i * 2;
                reader.read_u16_le(at..at + 2)?
            }
        };
        let raw = reader.read_u8(values_start + i)?;
        let point = GraphPoint {
            offset_minutes,
            mg_dl: u16::from(raw) * layout::MG_DL_PER_UNIT,
        };
        if !series.push(point) {
            break;
        }
    }

    Ok(series)
}
