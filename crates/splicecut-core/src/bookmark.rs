// crates/splicecut-core/src/bookmark.rs
//
// Bookmarks: saved cut points that a later splice can target by id.
//
// A bookmark is created once and never edited. The frame number is computed
// at capture time from the fps in effect then, so changing the session fps
// later does not renumber existing bookmarks.

use serde::{Deserialize, Serialize};

use crate::helpers::time::{clamp_time, format_timecode, time_to_frame};
use crate::ids::IdSource;

/// A saved cut point on the composite timeline.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bookmark {
    pub id:    String,
    /// Composite time in seconds.
    pub time:  f64,
    pub frame: u64,
    /// Opaque preview reference (data URL, texture key…). Empty when none was captured.
    #[serde(default)]
    pub image: String,
}

impl Bookmark {
    /// `MM:SS:FF` label for the bookmark list.
    pub fn label(&self, fps: f64) -> String {
        format_timecode(self.time, fps)
    }
}

/// Capture a bookmark at `time` seconds.
///
/// ```
/// use splicecut_core::bookmark::create_bookmark;
/// use splicecut_core::ids::CounterIds;
///
/// let mut ids = CounterIds::new("bm");
/// let bm = create_bookmark(&mut ids, 2.5, 30.0, None);
/// assert_eq!(bm.id, "bm-1");
/// assert_eq!(bm.frame, 75);
/// assert_eq!(bm.image, "");
/// ```
pub fn create_bookmark(
    ids:   &mut impl IdSource,
    time:  f64,
    fps:   f64,
    image: Option<String>,
) -> Bookmark {
    let time = clamp_time(time);
    Bookmark {
        id:    ids.next_id(),
        time,
        frame: time_to_frame(time, fps),
        image: image.unwrap_or_default(),
    }
}

/// Cut time of the bookmark named `id`.
///
/// `None` when `id` is absent or empty, when nothing matches, or when the
/// matching bookmark's time is not finite.
pub fn resolve_bookmark_time(bookmarks: &[Bookmark], id: Option<&str>) -> Option<f64> {
    let id = id.filter(|id| !id.is_empty())?;
    bookmarks
        .iter()
        .find(|b| b.id == id)
        .map(|b| b.time)
        .filter(|t| t.is_finite())
}

/// Copy of `bookmarks` without the one named `id`. Order is preserved.
pub fn remove_bookmark(bookmarks: &[Bookmark], id: &str) -> Vec<Bookmark> {
    bookmarks.iter().filter(|b| b.id != id).cloned().collect()
}
