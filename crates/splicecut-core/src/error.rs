// crates/splicecut-core/src/error.rs
//
// Error types for the few fallible surfaces of the core.
//
// The engine functions (timeline, splice, bookmark lookup) are total and never
// return these. Errors only come from validated constructors, session patches
// that reference something missing, and config loading.

use std::path::PathBuf;

/// Rejected `Segment` construction.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SegmentError {
    #[error("segment '{id}': {field} must be a finite number (got {value})")]
    NonFinite { id: String, field: &'static str, value: f64 },

    #[error("segment '{id}': duration must be >= 0 (got {duration})")]
    NegativeDuration { id: String, duration: f64 },

    #[error("segment '{id}': in point must be >= 0 (got {in_point})")]
    NegativeInPoint { id: String, in_point: f64 },

    #[error("segment '{id}': out point {out_point} is before in point {in_point}")]
    OutBeforeIn { id: String, in_point: f64, out_point: f64 },
}

/// A `SessionPatch` that could not be applied. The session is left unchanged.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SessionError {
    #[error("bookmark '{0}' not found or has no usable time")]
    BookmarkNotFound(String),

    #[error(transparent)]
    InvalidSegment(#[from] SegmentError),
}

/// Failure while reading a `SpliceConfig`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path:?}: {source}")]
    Io {
        path:   PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("default_fps must be a positive finite number (got {0})")]
    InvalidFps(f64),

    #[error("segment_prefix and bookmark_prefix are both {0:?}")]
    SharedIdPrefix(String),
}
