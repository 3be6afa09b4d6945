// crates/splicecut-core/src/lib.rs
//
// Timeline and splice engine. Pure data and pure functions: no media
// decoding, no rendering, no I/O beyond `SpliceConfig::load`.
//
// Module map (leaves first):
//   helpers::time  frame ↔ time conversion, timecode formatting
//   segment        Segment value type + effective duration
//   timeline       cumulative ranges, composite time → segment lookup
//   splice         rebuild a segment list around a cut
//   bookmark       saved cut points
//   ids            injectable id sources
//   export         recorder format selection, capture audio policy
//   session        caller-owned state + patches
//   config         session defaults from JSON

pub mod bookmark;
pub mod config;
pub mod error;
pub mod export;
pub mod helpers;
pub mod ids;
pub mod segment;
pub mod session;
pub mod splice;
pub mod timeline;

pub use bookmark::{create_bookmark, remove_bookmark, resolve_bookmark_time, Bookmark};
pub use config::SpliceConfig;
pub use error::{ConfigError, SegmentError, SessionError};
pub use export::{
    resolve_capture_audio_policy, resolve_export_format, CaptureAudioPolicy, ExportFormat,
    FormatSupport,
};
pub use helpers::time::{frame_to_time, time_to_frame, DEFAULT_FPS};
pub use ids::{CounterIds, IdSource, IdStrategy, UuidIds};
pub use segment::{effective_duration, Segment, SourceRef};
pub use session::{SessionPatch, SessionState};
pub use splice::{plan_splice, splice_segments, SplicePlan};
pub use timeline::{compute_timeline, find_segment_at_time, SegmentLookup, Timeline, TimelineRange};
