//! Decoded glucose history buffer and its threshold lines.

use heapless::Vec as FixedVec;

/// Upper bound across all wire revisions (24h at 5 min intervals is 288).
pub const MAX_GRAPH_POINTS: usize = 300;

/// Default high threshold line in mg/dL.
pub const DEFAULT_HIGH_LINE_MG_DL: u16 = 180;
/// Default low threshold line in mg/dL.
pub const DEFAULT_LOW_LINE_MG_DL: u16 = 72;

/// One history sample: minutes since the series reference, value in mg/dL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphPoint {
    pub offset_minutes: u16,
    pub mg_dl: u16,
}

/// Time-ordered history series, replaced wholesale on each graph payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphSeries {
    /// Reference time in UNIX epoch seconds; offsets count forward from it.
    pub reference_timestamp: u32,
    points: FixedVec<GraphPoint, MAX_GRAPH_POINTS>,
}

impl GraphSeries {
    pub fn new(reference_timestamp: u32) -> Self {
        Self {
            reference_timestamp,
            points: FixedVec::new(),
        }
    }

    /// Empty series with the sentinel reference, the state before any data.
    pub fn empty() -> Self {
        Self::new(0)
    }

    /// Append a point; returns false once the fixed buffer is full.
    pub(crate) fn push(&mut self, point: GraphPoint) -> bool {
        self.points.push(point).is_ok()
    }

    pub fn points(&self) -> &[GraphPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Absolute time of point `index` in epoch seconds.
    pub fn point_time(&self, index: usize) -> Option<u32> {
        self.points
            .get(index)
            .map(|point| self.absolute_time(point))
    }

    /// Points no older than `window_minutes` at time `now`, oldest first.
    ///
    /// This is the visibility rule the renderer applies with the history
    /// window the capability announcement advertised. Points with a future
    /// timestamp count as age zero.
    pub fn iter_recent(&self, now: u32, window_minutes: u32) -> impl Iterator<Item = &GraphPoint> {
        self.points.iter().filter(move |point| {
            let minutes_ago = now.saturating_sub(self.absolute_time(point)) / 60;
            minutes_ago <= window_minutes
        })
    }

    fn absolute_time(&self, point: &GraphPoint) -> u32 {
        self.reference_timestamp
            .saturating_add(u32::from(point.offset_minutes) * 60)
    }
}

impl Default for GraphSeries {
    fn default() -> Self {
        Self::empty()
    }
}

/// Renderer-facing graph state: the series plus its threshold lines.
///
/// The series member is swapped out whole by each successful graph decode;
/// the threshold lines arrive as separate scalar fields and survive both
/// graph replacement and graph rejection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphModel {
    pub series: GraphSeries,
    /// High threshold line in mg/dL.
    pub high_line: u16,
    /// Low threshold line in mg/dL.
    pub low_line: u16,
}

impl GraphModel {
    pub fn new() -> Self {
        Self {
            series: GraphSeries::empty(),
            high_line: DEFAULT_HIGH_LINE_MG_DL,
            low_line: DEFAULT_LOW_LINE_MG_DL,
        }
    }
}

impl Default for GraphModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{GraphModel, GraphPoint, GraphSeries, MAX_GRAPH_POINTS};

    fn series_with_offsets(reference: u32, offsets: &[u16]) -> GraphSeries {
        let mut series = GraphSeries::new(reference);
        for &offset_minutes in offsets {
            assert!(series.push(GraphPoint {
                offset_minutes,
                mg_dl: 120,
            }));
        }
        series
    }

    #[test]
    fn point_time_adds_offset_minutes() {
        let series = series_with_offsets(1_000, &[0, 5]);
        assert_eq!(series.point_time(0), Some(1_000));
        assert_eq!(series.point_time(1), Some(1_300));
        assert_eq!(series.point_time(2), None);
    }

    #[test]
    fn point_time_saturates_near_epoch_max() {
        let series = series_with_offsets(u32::MAX - 10, &[u16::MAX]);
        assert_eq!(series.point_time(0), Some(u32::MAX));
    }

    #[test]
    fn iter_recent_drops_points_outside_window() {
        // Reference 2h ago, samples every 30 min up to now.
        let now = 10_000_000;
        let reference = now - 2 * 60 * 60;
        let series = series_with_offsets(reference, &[0, 30, 60, 90, 120]);

        let visible: Vec<u16> = series
            .iter_recent(now, 60)
            .map(|point| point.offset_minutes)
            .collect();
        assert_eq!(visible, vec![60, 90, 120]);

        // A window covering the whole series keeps everything.
        assert_eq!(series.iter_recent(now, 120).count(), 5);
    }

    #[test]
    fn push_stops_at_capacity() {
        let mut series = GraphSeries::new(0);
        for offset in 0..MAX_GRAPH_POINTS {
            assert!(series.push(GraphPoint {
                offset_minutes: offset as u16,
                mg_dl: 100,
            }));
        }
        assert!(!series.push(GraphPoint {
            offset_minutes: 0,
            mg_dl: 100,
        }));
        assert_eq!(series.len(), MAX_GRAPH_POINTS);
    }

    #[test]
    fn model_defaults_match_display_thresholds() {
        let model = GraphModel::new();
        assert!(model.series.is_empty());
        assert_eq!(model.high_line, 180);
        assert_eq!(model.low_line, 72);
    }
}
