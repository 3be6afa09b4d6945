// crates/splicecut-core/src/session.rs
//
// Caller-owned session state and the patches that move it forward.
//
// The shell holds one `SessionState`. Every user action becomes a
// `SessionPatch`; `apply` returns the next state and leaves the current one
// untouched, so an error mid-edit can never leave a half-applied timeline.
// Adding a new edit = add a variant here + one match arm in `apply`.
//
// Bookmark lifetime:
//   Splices clear the bookmark list: the cut points they recorded refer to a
//   timeline that no longer exists. Loading a base clip does NOT clear them;
//   the shell decides (usually by sending ClearBookmarks alongside LoadBase).

use serde::{Deserialize, Deserializer, Serialize};

use crate::bookmark::{create_bookmark, remove_bookmark, resolve_bookmark_time, Bookmark};
use crate::error::SessionError;
use crate::helpers::time::{normalize_fps, DEFAULT_FPS};
use crate::ids::IdSource;
use crate::segment::Segment;
use crate::splice::splice_segments;
use crate::timeline::{compute_timeline, Timeline};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    #[serde(default)]
    pub segments:  Vec<Segment>,
    #[serde(default)]
    pub bookmarks: Vec<Bookmark>,
    /// Always usable: unusable values are normalized on the way in.
    #[serde(default = "default_fps", deserialize_with = "deserialize_fps")]
    pub fps:       f64,
}

fn default_fps() -> f64 { DEFAULT_FPS }

fn deserialize_fps<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    f64::deserialize(deserializer).map(normalize_fps)
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            segments:  Vec::new(),
            bookmarks: Vec::new(),
            fps:       DEFAULT_FPS,
        }
    }
}

/// One structural or bookkeeping edit to a `SessionState`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum SessionPatch {
    /// Replace the timeline with a single base clip.
    LoadBase { segment: Segment },
    SetFps { fps: f64 },
    AddBookmark { bookmark: Bookmark },
    DeleteBookmark { id: String },
    ClearBookmarks,
    /// Replace everything after `cut_time` with `segment`. Clears bookmarks.
    Splice { cut_time: f64, segment: Segment },
    /// `Splice` at the time stored in bookmark `bookmark_id`.
    SpliceAtBookmark { bookmark_id: String, segment: Segment },
}

impl SessionState {
    pub fn new(fps: f64) -> Self {
        Self { fps: normalize_fps(fps), ..Self::default() }
    }

    pub fn timeline(&self) -> Timeline<'_> {
        compute_timeline(&self.segments)
    }

    pub fn total_duration(&self) -> f64 {
        self.timeline().total
    }

    /// Every segment and bookmark id in the session.
    pub fn ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.segments
            .iter()
            .map(|s| s.id.as_str())
            .chain(self.bookmarks.iter().map(|b| b.id.as_str()))
    }

    /// Build a bookmark at `time` using this session's fps. The bookmark is not
    /// stored; send it back as `SessionPatch::AddBookmark`.
    pub fn capture_bookmark(
        &self,
        ids:   &mut impl IdSource,
        time:  f64,
        image: Option<String>,
    ) -> Bookmark {
        create_bookmark(ids, time, self.fps, image)
    }

    /// Apply `patch` and return the resulting state.
    ///
    /// Segments carried by a patch are validated first; on any error `self`
    /// is unchanged and no new state is produced.
    pub fn apply(&self, patch: SessionPatch) -> Result<SessionState, SessionError> {
        let next = match patch {
            SessionPatch::LoadBase { segment } => {
                segment.validate()?;
                Self { segments: vec![segment], ..self.clone() }
            }

            SessionPatch::SetFps { fps } => Self { fps: normalize_fps(fps), ..self.clone() },

            SessionPatch::AddBookmark { bookmark } => {
                let mut bookmarks = self.bookmarks.clone();
                bookmarks.push(bookmark);
                Self { bookmarks, ..self.clone() }
            }

            SessionPatch::DeleteBookmark { id } => Self {
                bookmarks: remove_bookmark(&self.bookmarks, &id),
                ..self.clone()
            },

            SessionPatch::ClearBookmarks => Self { bookmarks: Vec::new(), ..self.clone() },

            SessionPatch::Splice { cut_time, segment } => self.spliced(cut_time, &segment)?,

            SessionPatch::SpliceAtBookmark { bookmark_id, segment } => {
                let cut_time = resolve_bookmark_time(&self.bookmarks, Some(bookmark_id.as_str()))
                    .ok_or(SessionError::BookmarkNotFound(bookmark_id))?;
                self.spliced(cut_time, &segment)?
            }
        };
        Ok(next)
    }

    fn spliced(&self, cut_time: f64, segment: &Segment) -> Result<SessionState, SessionError> {
        segment.validate()?;
        let segments = splice_segments(&self.segments, cut_time, Some(segment));
        tracing::info!(
            cut_time,
            before = self.segments.len(),
            after = segments.len(),
            cleared_bookmarks = self.bookmarks.len(),
            "splice applied"
        );
        Ok(Self { segments, bookmarks: Vec::new(), fps: self.fps })
    }
}
