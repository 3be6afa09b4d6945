// crates/splicecut-core/src/export.rs
//
// Export container selection and the capture audio policy.
//
// The shell records the composite timeline through the host's capture/encode
// API. Which MIME types that API accepts is only known at runtime, so the
// check sits behind `FormatSupport`. Whatever the host decides, the output
// file always gets a `.webm` suffix; the codec part of the MIME type never
// changes the extension.

use serde::{Deserialize, Serialize};

/// Container used when the requested one is absent or unsupported.
pub const DEFAULT_EXPORT_MIME: &str = "video/webm";

/// File suffix for every export.
pub const EXPORT_EXTENSION: &str = "webm";

/// Host capability query: can the recorder produce `mime_type`?
pub trait FormatSupport {
    fn is_supported(&self, mime_type: &str) -> bool;
}

/// Host that accepts a fixed list of MIME types (exact match).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StaticFormatSupport(pub Vec<String>);

impl StaticFormatSupport {
    pub fn new<I, S>(types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(types.into_iter().map(Into::into).collect())
    }
}

impl FormatSupport for StaticFormatSupport {
    fn is_supported(&self, mime_type: &str) -> bool {
        self.0.iter().any(|t| t == mime_type)
    }
}

/// Host that accepts anything.
#[derive(Clone, Copy, Debug, Default)]
pub struct AllFormats;

impl FormatSupport for AllFormats {
    fn is_supported(&self, _mime_type: &str) -> bool { true }
}

impl<F: Fn(&str) -> bool> FormatSupport for F {
    fn is_supported(&self, mime_type: &str) -> bool { self(mime_type) }
}

/// Resolved recorder settings for an export.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportFormat {
    /// Full MIME type handed to the recorder, codecs parameter included.
    pub mime_type: String,
    /// MIME type without parameters, used for the output blob.
    pub base_type: String,
    pub extension: String,
}

impl ExportFormat {
    fn from_mime(mime_type: &str) -> Self {
        let base_type = mime_type
            .split(';')
            .next()
            .unwrap_or(mime_type)
            .trim()
            .to_string();
        Self {
            mime_type: mime_type.to_string(),
            base_type,
            extension: EXPORT_EXTENSION.to_string(),
        }
    }

    /// `"{stem}.{extension}"`.
    pub fn file_name(&self, stem: &str) -> String {
        format!("{stem}.{}", self.extension)
    }
}

/// Pick the recorder MIME type for an export.
///
/// A non-empty `hint` the host supports is used as-is; anything else falls
/// back to `DEFAULT_EXPORT_MIME`. The fallback is returned even if the host
/// rejects it too; reporting that is the shell's job.
///
/// ```
/// use splicecut_core::export::{resolve_export_format, StaticFormatSupport};
///
/// let host = StaticFormatSupport::new(["video/webm", "video/webm;codecs=vp9"]);
/// let fmt = resolve_export_format(Some("video/webm;codecs=vp9"), &host);
/// assert_eq!(fmt.mime_type, "video/webm;codecs=vp9");
/// assert_eq!(fmt.base_type, "video/webm");
/// assert_eq!(fmt.extension, "webm");
///
/// let fmt = resolve_export_format(Some("video/mp4;codecs=avc1"), &host);
/// assert_eq!(fmt.mime_type, "video/webm");
/// ```
pub fn resolve_export_format(hint: Option<&str>, host: &impl FormatSupport) -> ExportFormat {
    match hint.map(str::trim).filter(|h| !h.is_empty()) {
        Some(requested) if host.is_supported(requested) => ExportFormat::from_mime(requested),
        Some(requested) => {
            tracing::debug!(requested, fallback = DEFAULT_EXPORT_MIME, "export format not supported by host");
            ExportFormat::from_mime(DEFAULT_EXPORT_MIME)
        }
        None => ExportFormat::from_mime(DEFAULT_EXPORT_MIME),
    }
}

/// How the playback element is configured while it is being captured.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CaptureAudioPolicy {
    pub muted:  bool,
    pub volume: f64,
}

/// Keep the audio track flowing into the capture (`muted: false`) while
/// silencing the monitored output (`volume: 0`) so speakers don't feed back.
pub fn resolve_capture_audio_policy() -> CaptureAudioPolicy {
    CaptureAudioPolicy { muted: false, volume: 0.0 }
}
