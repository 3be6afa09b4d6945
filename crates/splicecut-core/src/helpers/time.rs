// crates/splicecut-core/src/helpers/time.rs
//
// Frame ↔ time conversion plus the human-readable formatters built on it.
//
// Every function here is total: bad fps values fall back to DEFAULT_FPS and
// negative or non-finite times/frames clamp to zero. Callers never need to
// pre-validate what comes off a slider or a media probe.

/// Frame rate assumed whenever the caller's fps is absent or unusable.
pub const DEFAULT_FPS: f64 = 30.0;

/// Return `fps` if it is a positive finite number, otherwise `DEFAULT_FPS`.
///
/// ```
/// use splicecut_core::helpers::time::{normalize_fps, DEFAULT_FPS};
/// assert_eq!(normalize_fps(24.0), 24.0);
/// assert_eq!(normalize_fps(0.0), DEFAULT_FPS);
/// assert_eq!(normalize_fps(-5.0), DEFAULT_FPS);
/// assert_eq!(normalize_fps(f64::NAN), DEFAULT_FPS);
/// ```
#[inline]
pub fn normalize_fps(fps: f64) -> f64 {
    if fps.is_finite() && fps > 0.0 {
        fps
    } else {
        tracing::trace!(fps, "fps unusable, falling back to {DEFAULT_FPS}");
        DEFAULT_FPS
    }
}

/// Clamp a time in seconds to a finite value ≥ 0. NaN and ±∞ become 0.
#[inline]
pub fn clamp_time(time: f64) -> f64 {
    if time.is_finite() { time.max(0.0) } else { 0.0 }
}

/// Seconds at which frame `frame` starts.
///
/// `frame` is floored and clamped to ≥ 0 first, so `-3.0` and `NaN` both mean
/// frame 0 and `89.9` means frame 89.
///
/// ```
/// use splicecut_core::helpers::time::frame_to_time;
/// assert_eq!(frame_to_time(90.0, 30.0), 3.0);
/// assert_eq!(frame_to_time(-4.0, 30.0), 0.0);
/// assert_eq!(frame_to_time(48.0, 0.0), 1.6); // fps falls back to 30
/// ```
pub fn frame_to_time(frame: f64, fps: f64) -> f64 {
    let frame = if frame.is_finite() { frame.floor().max(0.0) } else { 0.0 };
    frame / normalize_fps(fps)
}

/// Index of the frame that is showing at `time` seconds.
///
/// No rounding correction is applied: `floor(time * fps)` is taken as-is, so
/// inputs that are not exactly representable can land one frame early.
///
/// ```
/// use splicecut_core::helpers::time::time_to_frame;
/// assert_eq!(time_to_frame(3.0, 30.0), 90);
/// assert_eq!(time_to_frame(-1.0, 30.0), 0);
/// assert_eq!(time_to_frame(0.5, 24.0), 12);
/// ```
pub fn time_to_frame(time: f64, fps: f64) -> u64 {
    (clamp_time(time) * normalize_fps(fps)).floor() as u64
}

/// Format a duration in seconds as `MM:SS:FF` (minutes, seconds, frames at `fps`).
///
/// Used for bookmark labels where frame-level precision matters.
///
/// ```
/// use splicecut_core::helpers::time::format_timecode;
/// assert_eq!(format_timecode(0.0,    30.0), "00:00:00");
/// assert_eq!(format_timecode(61.5,   30.0), "01:01:15");
/// assert_eq!(format_timecode(3599.0, 30.0), "59:59:00");
/// assert_eq!(format_timecode(1.5,    24.0), "00:01:12");
/// ```
pub fn format_timecode(secs: f64, fps: f64) -> String {
    let s   = clamp_time(secs);
    let fps = normalize_fps(fps);
    let m   = (s / 60.0) as u64;
    let sc  = (s % 60.0) as u64;
    let fr  = time_to_frame(s % 1.0, fps);
    format!("{m:02}:{sc:02}:{fr:02}")
}

/// Format a duration in seconds as a compact human-readable string.
///
/// | Range         | Format       | Example   |
/// |---------------|--------------|-----------|
/// | ≥ 3600 s      | `H:MM:SS`    | `1:04:35` |
/// | ≥ 60 s        | `M:SS`       | `3:07`    |
/// | < 60 s        | `S.Xs`       | `4.2s`    |
///
/// ```
/// use splicecut_core::helpers::time::format_duration;
/// assert_eq!(format_duration(4.2),    "4.2s");
/// assert_eq!(format_duration(187.0),  "3:07");
/// assert_eq!(format_duration(3875.0), "1:04:35");
/// ```
pub fn format_duration(secs: f64) -> String {
    let secs = clamp_time(secs);
    if secs >= 3600.0 {
        format!(
            "{}:{:02}:{:02}",
            secs as u64 / 3600,
            (secs as u64 % 3600) / 60,
            secs as u64 % 60,
        )
    } else if secs >= 60.0 {
        format!("{}:{:02}", secs as u64 / 60, secs as u64 % 60)
    } else {
        format!("{secs:.1}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_to_time_basic() {
        assert_eq!(frame_to_time(90.0, 30.0), 3.0);
        assert_eq!(frame_to_time(0.0, 30.0), 0.0);
        assert_eq!(frame_to_time(48.0, 24.0), 2.0);
    }

    #[test]
    fn frame_to_time_floors_fractional_frames() {
        assert_eq!(frame_to_time(89.9, 30.0), frame_to_time(89.0, 30.0));
    }

    #[test]
    fn frame_to_time_clamps_bad_frames() {
        assert_eq!(frame_to_time(-10.0, 30.0), 0.0);
        assert_eq!(frame_to_time(f64::NAN, 30.0), 0.0);
        assert_eq!(frame_to_time(f64::INFINITY, 30.0), 0.0);
    }

    #[test]
    fn time_to_frame_basic() {
        assert_eq!(time_to_frame(3.0, 30.0), 90);
        assert_eq!(time_to_frame(1.0, 60.0), 60);
        assert_eq!(time_to_frame(0.99, 1.0), 0);
    }

    #[test]
    fn time_to_frame_clamps_bad_times() {
        assert_eq!(time_to_frame(-2.5, 30.0), 0);
        assert_eq!(time_to_frame(f64::NAN, 30.0), 0);
        assert_eq!(time_to_frame(f64::NEG_INFINITY, 30.0), 0);
    }

    #[test]
    fn bad_fps_uses_default() {
        assert_eq!(time_to_frame(2.0, 0.0), 60);
        assert_eq!(time_to_frame(2.0, -24.0), 60);
        assert_eq!(time_to_frame(2.0, f64::INFINITY), 60);
        assert_eq!(frame_to_time(30.0, f64::NAN), 1.0);
    }

    #[test]
    fn round_trip_on_whole_seconds() {
        for f in (0..3000).step_by(30) {
            assert_eq!(time_to_frame(frame_to_time(f as f64, 30.0), 30.0), f);
        }
    }

    #[test]
    fn timecode_negative_is_zero() {
        assert_eq!(format_timecode(-3.0, 30.0), "00:00:00");
    }

    #[test]
    fn duration_sub_minute() {
        assert_eq!(format_duration(0.0), "0.0s");
        assert_eq!(format_duration(59.94), "59.9s");
    }
}
