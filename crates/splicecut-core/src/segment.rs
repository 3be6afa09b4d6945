// crates/splicecut-core/src/segment.rs
//
// Segment: one trimmed reference to a source clip.
//
// A segment never owns media. `source` is an opaque handle the shell uses to
// find the decoded clip again; the core only reads the three numbers that
// drive the math (duration, in_point, out_point).
//
// Segments are values. Nothing in the crate mutates one in place; edits go
// through `with_out_point` (or a plain clone) and produce a new segment.

use serde::{Deserialize, Serialize};

use crate::error::SegmentError;

/// Opaque handle to the media behind a segment (blob URL, file path, player id…).
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceRef(pub String);

impl SourceRef {
    pub fn new(handle: impl Into<String>) -> Self {
        Self(handle.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SourceRef {
    fn from(s: &str) -> Self { Self(s.to_string()) }
}

impl From<String> for SourceRef {
    fn from(s: String) -> Self { Self(s) }
}

/// A trimmed view of a source clip placed on the composite timeline.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub id:        String,
    #[serde(default)]
    pub source:    SourceRef,
    /// Full length of the source clip in seconds.
    pub duration:  f64,
    /// Trim start, seconds from the beginning of the source.
    #[serde(default, rename = "in")]
    pub in_point:  f64,
    /// Trim end, seconds from the beginning of the source. `None` = play to the end.
    #[serde(default, rename = "out")]
    pub out_point: Option<f64>,
    /// Display name. Has no effect on any computation.
    #[serde(default)]
    pub label:     String,
}

impl Segment {
    /// Untrimmed segment covering the whole source clip.
    ///
    /// Rejects a duration that is negative or not finite.
    ///
    /// ```
    /// use splicecut_core::segment::Segment;
    /// let s = Segment::new("base", "blob:1", 10.0).unwrap();
    /// assert_eq!(s.effective_duration(), 10.0);
    /// assert!(Segment::new("bad", "blob:2", -1.0).is_err());
    /// ```
    pub fn new(
        id:       impl Into<String>,
        source:   impl Into<SourceRef>,
        duration: f64,
    ) -> Result<Self, SegmentError> {
        let seg = Self {
            id:        id.into(),
            source:    source.into(),
            duration,
            in_point:  0.0,
            out_point: None,
            label:     String::new(),
        };
        seg.validate()?;
        Ok(seg)
    }

    /// Copy of `self` with the given trim bounds, validated.
    pub fn trimmed(&self, in_point: f64, out_point: Option<f64>) -> Result<Self, SegmentError> {
        let seg = Self { in_point, out_point, ..self.clone() };
        seg.validate()?;
        Ok(seg)
    }

    /// Copy of `self` with a new display label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Copy of `self` whose out point is replaced. Unvalidated; used by the
    /// splice engine, whose out points are `in_point + local_time` and so
    /// always satisfy `in ≤ out`.
    pub fn with_out_point(&self, out_point: f64) -> Self {
        Self { out_point: Some(out_point), ..self.clone() }
    }

    /// Check the record invariants: finite numbers, `duration ≥ 0`,
    /// `in_point ≥ 0` and `in_point ≤ out_point` when an out point is set.
    ///
    /// Segments deserialized from a shell document are not validated
    /// automatically; call this when the source is untrusted.
    pub fn validate(&self) -> Result<(), SegmentError> {
        let non_finite = |field, value: f64| SegmentError::NonFinite {
            id: self.id.clone(),
            field,
            value,
        };

        if !self.duration.is_finite() {
            return Err(non_finite("duration", self.duration));
        }
        if !self.in_point.is_finite() {
            return Err(non_finite("in", self.in_point));
        }
        if self.duration < 0.0 {
            return Err(SegmentError::NegativeDuration { id: self.id.clone(), duration: self.duration });
        }
        if self.in_point < 0.0 {
            return Err(SegmentError::NegativeInPoint { id: self.id.clone(), in_point: self.in_point });
        }
        if let Some(out) = self.out_point {
            if !out.is_finite() {
                return Err(non_finite("out", out));
            }
            if out < self.in_point {
                return Err(SegmentError::OutBeforeIn {
                    id:        self.id.clone(),
                    in_point:  self.in_point,
                    out_point: out,
                });
            }
        }
        Ok(())
    }

    /// Playable length of the segment in seconds, always ≥ 0.
    ///
    /// `out - in` when an out point is set and lies after the in point;
    /// otherwise whatever remains of the source after the in point.
    ///
    /// ```
    /// use splicecut_core::segment::Segment;
    /// let s = Segment::new("a", "blob:a", 10.0).unwrap();
    /// assert_eq!(s.trimmed(2.0, Some(6.0)).unwrap().effective_duration(), 4.0);
    /// assert_eq!(s.trimmed(2.0, None).unwrap().effective_duration(), 8.0);
    /// assert_eq!(s.trimmed(12.0, None).unwrap().effective_duration(), 0.0);
    /// ```
    pub fn effective_duration(&self) -> f64 {
        match self.out_point {
            Some(out) if out > self.in_point => out - self.in_point,
            _ => (self.duration - self.in_point).max(0.0),
        }
    }
}

/// `Segment::effective_duration` for an optional segment; `None` → 0.
#[inline]
pub fn effective_duration(segment: Option<&Segment>) -> f64 {
    segment.map_or(0.0, Segment::effective_duration)
}
