// crates/splicecut-core/src/splice.rs
//
// Splice: replace everything after a cut point with a new segment.
//
// Three outcomes, chosen by `plan_splice` from where the cut lands:
//
//   ReplaceAll   cut ≤ 0                 → [new]
//   Append       cut == total            → segments ++ [new]
//   ReplaceTail  anywhere else           → segments[..i] ++ [trimmed i]? ++ [new]
//
// The located segment i is trimmed by moving its out point to
// `in_point + local_time`. When that out point does not move past the in point
// (local_time is 0, or too small to register at the in point's magnitude) the
// remnant would be an empty sliver and is dropped. Because of the boundary
// rule in `timeline`, a cut on an interior boundary locates the EARLIER
// segment at its full length, so the edit keeps that segment whole and drops
// everything after it.
//
// Inputs are borrowed and never modified; every call returns a fresh Vec.

use serde::Serialize;

use crate::helpers::time::clamp_time;
use crate::segment::Segment;
use crate::timeline::{compute_timeline, find_segment_at_time};

/// Which rebuild `splice_segments` will perform for a given cut.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SplicePlan {
    /// The whole prior timeline is discarded.
    ReplaceAll,
    /// The cut is at the very end; nothing is discarded.
    Append,
    /// Keep `segments[..index]`, trim `segments[index]` to `local_time`
    /// (dropped when `keep_remnant` is false) and discard the rest.
    ReplaceTail {
        index:        usize,
        local_time:   f64,
        keep_remnant: bool,
    },
}

/// Decide how a splice at `cut_time` rebuilds `segments`.
///
/// `cut_time` is clamped into `[0, total]`; non-finite values count as 0.
/// An empty list always plans `ReplaceAll`.
pub fn plan_splice(segments: &[Segment], cut_time: f64) -> SplicePlan {
    let total = compute_timeline(segments).total;
    let cut   = clamp_time(cut_time).min(total);

    if segments.is_empty() || cut <= 0.0 {
        return SplicePlan::ReplaceAll;
    }

    let hit = find_segment_at_time(segments, cut);
    let Some((index, segment)) = hit.index.zip(hit.segment) else {
        return SplicePlan::ReplaceAll;
    };

    let is_last = index + 1 == segments.len();
    if is_last && (cut >= total || hit.local_time >= segment.effective_duration()) {
        return SplicePlan::Append;
    }

    let keep_remnant = segment.in_point + hit.local_time > segment.in_point;

    SplicePlan::ReplaceTail { index, local_time: hit.local_time, keep_remnant }
}

/// Rebuild `segments` so that everything after `cut_time` is replaced by
/// `new_segment`.
///
/// With no `new_segment` the list is returned unchanged (as a copy).
///
/// ```
/// use splicecut_core::segment::Segment;
/// use splicecut_core::splice::splice_segments;
///
/// let base = Segment::new("base", "blob:base", 10.0).unwrap().trimmed(0.0, Some(10.0)).unwrap();
/// let new  = Segment::new("new", "blob:new", 6.0).unwrap().trimmed(0.0, Some(6.0)).unwrap();
///
/// let out = splice_segments(&[base], 4.0, Some(&new));
/// assert_eq!(out.len(), 2);
/// assert_eq!(out[0].id, "base");
/// assert_eq!(out[0].out_point, Some(4.0));
/// assert_eq!(out[1], new);
/// ```
pub fn splice_segments(
    segments:    &[Segment],
    cut_time:    f64,
    new_segment: Option<&Segment>,
) -> Vec<Segment> {
    let Some(new_segment) = new_segment else {
        return segments.to_vec();
    };

    let plan = plan_splice(segments, cut_time);
    tracing::debug!(
        cut_time,
        segments = segments.len(),
        new_segment = %new_segment.id,
        ?plan,
        "splice"
    );

    match plan {
        SplicePlan::ReplaceAll => vec![new_segment.clone()],

        SplicePlan::Append => {
            let mut out = Vec::with_capacity(segments.len() + 1);
            out.extend_from_slice(segments);
            out.push(new_segment.clone());
            out
        }

        SplicePlan::ReplaceTail { index, local_time, keep_remnant } => {
            let mut out = Vec::with_capacity(index + 2);
            out.extend_from_slice(&segments[..index]);
            if keep_remnant {
                let located = &segments[index];
                out.push(located.with_out_point(located.in_point + local_time));
            }
            out.push(new_segment.clone());
            out
        }
    }
}
