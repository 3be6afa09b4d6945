// crates/splicecut-core/src/config.rs
//
// Session defaults, read from a JSON file the shell ships alongside itself.
// Every field is optional; an empty object `{}` is a valid config.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::export::{resolve_export_format, ExportFormat, StaticFormatSupport, DEFAULT_EXPORT_MIME};
use crate::helpers::time::DEFAULT_FPS;
use crate::ids::{IdSource, IdStrategy};
use crate::session::SessionState;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpliceConfig {
    /// Frame rate for new sessions.
    pub default_fps:       f64,
    /// Preferred recorder MIME type, codecs parameter included.
    pub export_format:     Option<String>,
    /// MIME types the recorder is known to accept. Used when the shell has no
    /// live capability query (the CLI, tests).
    pub supported_formats: StaticFormatSupport,
    pub id_strategy:       IdStrategy,
    /// Counter id prefixes. Kept distinct so a segment and a bookmark never
    /// share an id.
    pub segment_prefix:    String,
    pub bookmark_prefix:   String,
}

impl Default for SpliceConfig {
    fn default() -> Self {
        Self {
            default_fps:       DEFAULT_FPS,
            export_format:     None,
            supported_formats: StaticFormatSupport::new([DEFAULT_EXPORT_MIME]),
            id_strategy:       IdStrategy::Uuid,
            segment_prefix:    "seg".to_string(),
            bookmark_prefix:   "bm".to_string(),
        }
    }
}

impl SpliceConfig {
    /// Parse and validate a config document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate the config file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&json)?;
        tracing::info!(path = %path.display(), fps = config.default_fps, "loaded config");
        Ok(config)
    }

    /// `load(path)` when a path is given, defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// An fps in a config file must be usable as-is; no silent fallback. The
    /// two counter prefixes must differ.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.default_fps.is_finite() && self.default_fps > 0.0) {
            return Err(ConfigError::InvalidFps(self.default_fps));
        }
        if self.segment_prefix == self.bookmark_prefix {
            return Err(ConfigError::SharedIdPrefix(self.segment_prefix.clone()));
        }
        Ok(())
    }

    pub fn new_session(&self) -> SessionState {
        SessionState::new(self.default_fps)
    }

    /// Id source for new segments in `session`. Counters resume after the ids
    /// the session already holds.
    pub fn segment_ids(&self, session: &SessionState) -> Box<dyn IdSource + Send> {
        self.id_strategy.resume(&self.segment_prefix, session.ids())
    }

    /// Id source for new bookmarks in `session`.
    pub fn bookmark_ids(&self, session: &SessionState) -> Box<dyn IdSource + Send> {
        self.id_strategy.resume(&self.bookmark_prefix, session.ids())
    }

    /// Export format for this config's preference against its supported list.
    pub fn export_format(&self) -> ExportFormat {
        resolve_export_format(self.export_format.as_deref(), &self.supported_formats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_object_is_default() {
        assert_eq!(SpliceConfig::from_json_str("{}").unwrap(), SpliceConfig::default());
    }

    #[test]
    fn fields_override_defaults() {
        let cfg = SpliceConfig::from_json_str(
            r#"{
                "default_fps": 24,
                "export_format": "video/webm;codecs=vp9",
                "supported_formats": ["video/webm", "video/webm;codecs=vp9"],
                "id_strategy": "counter",
                "segment_prefix": "cut",
                "bookmark_prefix": "mark"
            }"#,
        )
        .unwrap();
        assert_eq!(cfg.default_fps, 24.0);
        assert_eq!(cfg.export_format().mime_type, "video/webm;codecs=vp9");
        let session = cfg.new_session();
        assert_eq!(session.fps, 24.0);
        assert_eq!(cfg.segment_ids(&session).next_id(), "cut-1");
        assert_eq!(cfg.bookmark_ids(&session).next_id(), "mark-1");
    }

    #[test]
    fn counter_ids_resume_from_session() {
        let cfg = SpliceConfig { id_strategy: IdStrategy::Counter, ..SpliceConfig::default() };
        let session: SessionState = serde_json::from_str(
            r#"{
                "segments": [
                    {"id": "base", "duration": 10},
                    {"id": "seg-4", "duration": 2}
                ],
                "bookmarks": [{"id": "bm-2", "time": 1, "frame": 30}]
            }"#,
        )
        .unwrap();
        assert_eq!(cfg.segment_ids(&session).next_id(), "seg-5");
        assert_eq!(cfg.bookmark_ids(&session).next_id(), "bm-3");
    }

    #[test]
    fn rejects_shared_prefix() {
        assert!(matches!(
            SpliceConfig::from_json_str(r#"{"segment_prefix":"id","bookmark_prefix":"id"}"#),
            Err(ConfigError::SharedIdPrefix(p)) if p == "id"
        ));
    }

    #[test]
    fn unsupported_preference_falls_back() {
        let cfg = SpliceConfig::from_json_str(r#"{"export_format":"video/mp4"}"#).unwrap();
        assert_eq!(cfg.export_format().mime_type, DEFAULT_EXPORT_MIME);
    }

    #[test]
    fn rejects_bad_fps() {
        assert!(matches!(
            SpliceConfig::from_json_str(r#"{"default_fps":0}"#),
            Err(ConfigError::InvalidFps(_))
        ));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(SpliceConfig::from_json_str("{"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"default_fps": 60}}"#).unwrap();
        let cfg = SpliceConfig::load(file.path()).unwrap();
        assert_eq!(cfg.default_fps, 60.0);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = SpliceConfig::load(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn no_path_means_defaults() {
        assert_eq!(SpliceConfig::load_or_default(None).unwrap(), SpliceConfig::default());
    }
}
