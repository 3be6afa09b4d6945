//! End-to-end splice scenarios: a base clip is loaded, cut points are
//! bookmarked, and replacement clips are spliced in.

use splicecut_core::{
    find_segment_at_time, frame_to_time, resolve_export_format, splice_segments, time_to_frame,
    CounterIds, Segment, SessionPatch, SessionState,
};
use splicecut_core::export::StaticFormatSupport;

fn clip(id: &str, duration: f64) -> Segment {
    Segment::new(id, format!("blob:{id}"), duration)
        .and_then(|s| s.trimmed(0.0, Some(duration)))
        .unwrap()
}

fn untrimmed(id: &str, duration: f64) -> Segment {
    Segment::new(id, format!("blob:{id}"), duration).unwrap()
}

#[test]
fn frame_time_scenario() {
    assert_eq!(frame_to_time(90.0, 30.0), 3.0);
    assert_eq!(time_to_frame(3.0, 30.0), 90);
}

#[test]
fn cut_inside_base_keeps_head() {
    let segments = vec![clip("base", 10.0)];
    let out = splice_segments(&segments, 4.0, Some(&clip("new", 6.0)));

    assert_eq!(out.len(), 2);
    assert_eq!(out[0].id, "base");
    assert_eq!(out[0].out_point, Some(4.0));
    assert_eq!(out[1].id, "new");
    assert_eq!(out[1].out_point, Some(6.0));
}

#[test]
fn cut_at_zero_replaces_base() {
    let segments = vec![clip("base", 10.0)];
    let new = clip("new", 6.0);
    assert_eq!(splice_segments(&segments, 0.0, Some(&new)), vec![new]);
}

#[test]
fn cut_at_end_appends() {
    let segments = vec![clip("base", 10.0)];
    let new = clip("new", 6.0);
    let out = splice_segments(&segments, 10.0, Some(&new));
    assert_eq!(out, vec![segments[0].clone(), new]);
    assert_eq!(out[0].out_point, Some(10.0));
}

#[test]
fn lookup_in_second_segment() {
    let segments = vec![untrimmed("a", 4.0), untrimmed("b", 3.0)];
    let hit = find_segment_at_time(&segments, 5.0);
    assert_eq!(hit.index, Some(1));
    assert_eq!(hit.segment.map(|s| s.id.as_str()), Some("b"));
    assert_eq!(hit.local_time, 1.0);
    assert_eq!(hit.offset, 4.0);
}

#[test]
fn export_format_with_and_without_support() {
    let vp9 = "video/webm;codecs=vp9";

    let host = StaticFormatSupport::new([vp9, "video/webm"]);
    let fmt = resolve_export_format(Some(vp9), &host);
    assert_eq!(fmt.mime_type, vp9);
    assert_eq!(fmt.base_type, "video/webm");
    assert_eq!(fmt.extension, "webm");

    let host = StaticFormatSupport::new(["video/webm"]);
    let fmt = resolve_export_format(Some(vp9), &host);
    assert_eq!(fmt.mime_type, "video/webm");
    assert_eq!(fmt.base_type, "video/webm");
    assert_eq!(fmt.extension, "webm");
}

#[test]
fn repeated_splices_through_session() {
    let mut ids = CounterIds::new("bm");
    let mut session = SessionState::new(30.0)
        .apply(SessionPatch::LoadBase { segment: untrimmed("base", 10.0) })
        .unwrap();

    // Bookmark 4 s, splice a 6 s take there.
    let bm = session.capture_bookmark(&mut ids, 4.0, Some("data:frame".into()));
    assert_eq!(bm.frame, 120);
    session = session.apply(SessionPatch::AddBookmark { bookmark: bm }).unwrap();
    session = session
        .apply(SessionPatch::SpliceAtBookmark { bookmark_id: "bm-1".into(), segment: clip("take1", 6.0) })
        .unwrap();
    assert!(session.bookmarks.is_empty());
    assert_eq!(session.total_duration(), 10.0);

    // Cut 1 s into the take: base (4 s) + 1 s of take1 + take2.
    session = session
        .apply(SessionPatch::Splice { cut_time: 5.0, segment: clip("take2", 2.0) })
        .unwrap();
    let ids_out: Vec<&str> = session.segments.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids_out, vec!["base", "take1", "take2"]);
    assert_eq!(session.segments[1].out_point, Some(1.0));
    assert_eq!(session.total_duration(), 7.0);

    // Cut on the base/take1 boundary: take1 and take2 go, base stays whole.
    session = session
        .apply(SessionPatch::Splice { cut_time: 4.0, segment: clip("take3", 3.0) })
        .unwrap();
    let ids_out: Vec<&str> = session.segments.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids_out, vec!["base", "take3"]);
    assert_eq!(session.segments[0].out_point, Some(4.0));
}
