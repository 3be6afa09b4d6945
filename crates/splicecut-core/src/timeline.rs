// crates/splicecut-core/src/timeline.rs
//
// Composite-time math over an ordered segment list.
//
// The timeline is never stored. `compute_timeline` derives it from the
// segments every time it is needed; lists are short (a handful of splices
// per session) and one O(n) pass is cheaper than keeping a cache in sync.
//
// Boundary rule:
//   A composite time that falls exactly on the boundary between segment i and
//   segment i+1 belongs to segment i, at local time == i's full duration. The
//   splice engine relies on this: a cut on a boundary means "keep everything
//   up to here", never "start of the next clip".

use serde::Serialize;

use crate::helpers::time::{clamp_time, time_to_frame};
use crate::segment::Segment;

/// The composite-time window occupied by one segment.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct TimelineRange<'a> {
    pub start:    f64,
    pub end:      f64,
    pub duration: f64,
    pub segment:  &'a Segment,
}

/// Cumulative ranges plus total length for an ordered segment list.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Timeline<'a> {
    pub ranges: Vec<TimelineRange<'a>>,
    pub total:  f64,
}

impl Timeline<'_> {
    /// Number of whole frames in the timeline at `fps`.
    pub fn total_frames(&self, fps: f64) -> u64 {
        time_to_frame(self.total, fps)
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}

/// Result of resolving a composite time against a segment list.
///
/// For an empty list `index` and `segment` are `None` and every number is 0.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SegmentLookup<'a> {
    pub index:      Option<usize>,
    pub segment:    Option<&'a Segment>,
    /// Seconds into the located segment's playable range.
    pub local_time: f64,
    /// Composite time at which the located segment starts.
    pub offset:     f64,
    /// The requested time after clamping into `[0, total]`.
    pub time:       f64,
    pub total:      f64,
}

impl SegmentLookup<'_> {
    fn empty() -> Self {
        Self {
            index:      None,
            segment:    None,
            local_time: 0.0,
            offset:     0.0,
            time:       0.0,
            total:      0.0,
        }
    }
}

/// Build the cumulative ranges for `segments`.
///
/// ```
/// use splicecut_core::segment::Segment;
/// use splicecut_core::timeline::compute_timeline;
///
/// let segs = vec![
///     Segment::new("a", "blob:a", 4.0).unwrap(),
///     Segment::new("b", "blob:b", 3.0).unwrap(),
/// ];
/// let tl = compute_timeline(&segs);
/// assert_eq!(tl.total, 7.0);
/// assert_eq!(tl.ranges[1].start, 4.0);
/// assert_eq!(tl.ranges[1].end, 7.0);
/// ```
pub fn compute_timeline(segments: &[Segment]) -> Timeline<'_> {
    let mut ranges = Vec::with_capacity(segments.len());
    let mut cursor = 0.0_f64;

    for segment in segments {
        let duration = segment.effective_duration();
        let start    = cursor;
        let end      = start + duration;
        ranges.push(TimelineRange { start, end, duration, segment });
        cursor = end;
    }

    Timeline { ranges, total: cursor }
}

/// Resolve composite `time` to the segment playing at that moment.
///
/// `time` is clamped into `[0, total]` (non-finite → 0). The first range whose
/// end is at or after the clamped time wins; if none does, the last range is
/// taken, so `time == total` always lands on the final segment.
///
/// ```
/// use splicecut_core::segment::Segment;
/// use splicecut_core::timeline::find_segment_at_time;
///
/// let segs = vec![
///     Segment::new("a", "blob:a", 4.0).unwrap(),
///     Segment::new("b", "blob:b", 3.0).unwrap(),
/// ];
/// let hit = find_segment_at_time(&segs, 5.0);
/// assert_eq!(hit.index, Some(1));
/// assert_eq!(hit.segment.unwrap().id, "b");
/// assert_eq!(hit.local_time, 1.0);
/// assert_eq!(hit.offset, 4.0);
/// ```
pub fn find_segment_at_time(segments: &[Segment], time: f64) -> SegmentLookup<'_> {
    let timeline = compute_timeline(segments);
    let Some(last) = timeline.ranges.len().checked_sub(1) else {
        return SegmentLookup::empty();
    };

    let total   = timeline.total;
    let clamped = clamp_time(time).min(total);

    let index = timeline.ranges
        .iter()
        .position(|r| r.end >= clamped)
        .unwrap_or(last);
    let range = &timeline.ranges[index];

    SegmentLookup {
        index:      Some(index),
        segment:    Some(range.segment),
        local_time: clamped - range.start,
        offset:     range.start,
        time:       clamped,
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::SourceRef;

    fn seg(id: &str, duration: f64) -> Segment {
        Segment {
            id:        id.into(),
            source:    SourceRef::new(format!("blob:{id}")),
            duration,
            in_point:  0.0,
            out_point: None,
            label:     String::new(),
        }
    }

    #[test]
    fn empty_timeline() {
        let tl = compute_timeline(&[]);
        assert!(tl.is_empty());
        assert_eq!(tl.total, 0.0);
        assert_eq!(tl.total_frames(30.0), 0);
    }

    #[test]
    fn ranges_are_cumulative() {
        let segs = [seg("a", 2.0), seg("b", 0.0), seg("c", 5.5)];
        let tl = compute_timeline(&segs);
        let bounds: Vec<(f64, f64)> = tl.ranges.iter().map(|r| (r.start, r.end)).collect();
        assert_eq!(bounds, vec![(0.0, 2.0), (2.0, 2.0), (2.0, 7.5)]);
        assert_eq!(tl.total, 7.5);
        assert_eq!(tl.ranges[2].segment.id, "c");
    }

    #[test]
    fn trimmed_segments_use_effective_duration() {
        let mut a = seg("a", 10.0);
        a.in_point  = 2.0;
        a.out_point = Some(5.0);
        let segs = [a, seg("b", 1.0)];
        let tl = compute_timeline(&segs);
        assert_eq!(tl.total, 4.0);
        assert_eq!(tl.total_frames(30.0), 120);
    }

    #[test]
    fn empty_lookup_is_sentinel() {
        let hit = find_segment_at_time(&[], 3.0);
        assert_eq!(hit.index, None);
        assert!(hit.segment.is_none());
        assert_eq!((hit.local_time, hit.offset, hit.time, hit.total), (0.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn interior_boundary_belongs_to_earlier_segment() {
        let segs = [seg("a", 4.0), seg("b", 3.0)];
        let hit = find_segment_at_time(&segs, 4.0);
        assert_eq!(hit.index, Some(0));
        assert_eq!(hit.local_time, 4.0);
        assert_eq!(hit.offset, 0.0);
    }

    #[test]
    fn total_resolves_to_last_segment() {
        let segs = [seg("a", 4.0), seg("b", 3.0)];
        let hit = find_segment_at_time(&segs, 7.0);
        assert_eq!(hit.index, Some(1));
        assert_eq!(hit.local_time, 3.0);
    }

    #[test]
    fn out_of_range_times_clamp() {
        let segs = [seg("a", 4.0), seg("b", 3.0)];

        let past = find_segment_at_time(&segs, 100.0);
        assert_eq!(past.index, Some(1));
        assert_eq!(past.time, 7.0);

        let before = find_segment_at_time(&segs, -3.0);
        assert_eq!(before.index, Some(0));
        assert_eq!(before.time, 0.0);
        assert_eq!(before.local_time, 0.0);

        let nan = find_segment_at_time(&segs, f64::NAN);
        assert_eq!(nan.time, 0.0);
    }

    #[test]
    fn zero_time_with_leading_empty_segment() {
        let segs = [seg("empty", 0.0), seg("b", 3.0)];
        let hit = find_segment_at_time(&segs, 0.0);
        assert_eq!(hit.index, Some(0));
        assert_eq!(hit.total, 3.0);
    }
}
