// crates/splicecut-cli/src/main.rs
//
// Thin shell over splicecut-core: read a session, apply one edit, print the
// result. Nothing is written back to disk; redirect stdout to keep it.
//
// Logs go to stderr so stdout stays valid JSON.

mod cli;

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use splicecut_core::{
    find_segment_at_time, plan_splice, resolve_bookmark_time, resolve_capture_audio_policy,
    resolve_export_format, IdSource, Segment, SessionPatch, SessionState, SpliceConfig,
};

use cli::{ClipArgs, Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = SpliceConfig::load_or_default(cli.config.as_deref())
        .context("Failed to load config")?;
    let output = run(cli.command, &config)?;
    print_json(&output)
}

/// Execute one subcommand and return what it prints.
///
/// Id sources are rebuilt from the session each time, so counter ids keep
/// counting across runs that pass the session along.
fn run(command: Command, config: &SpliceConfig) -> Result<serde_json::Value> {
    let value = match command {
        Command::Locate { session, time } => {
            let state = read_session(session.session.as_deref(), config)?;
            serde_json::to_value(find_segment_at_time(&state.segments, time))?
        }

        Command::Splice { session, at, clip } => {
            let state = read_session(session.session.as_deref(), config)?;
            if clip.dry_run {
                return Ok(serde_json::to_value(plan_splice(&state.segments, at))?);
            }
            let segment = build_segment(clip, &mut config.segment_ids(&state))?;
            let next = state
                .apply(SessionPatch::Splice { cut_time: at, segment })
                .context("Splice failed")?;
            serde_json::to_value(next)?
        }

        Command::SpliceAt { session, bookmark, clip } => {
            let state = read_session(session.session.as_deref(), config)?;
            if clip.dry_run {
                let at = resolve_bookmark_time(&state.bookmarks, Some(bookmark.as_str()))
                    .with_context(|| format!("Bookmark not found: {bookmark}"))?;
                return Ok(serde_json::to_value(plan_splice(&state.segments, at))?);
            }
            let segment = build_segment(clip, &mut config.segment_ids(&state))?;
            let next = state
                .apply(SessionPatch::SpliceAtBookmark { bookmark_id: bookmark, segment })
                .context("Splice at bookmark failed")?;
            serde_json::to_value(next)?
        }

        Command::Bookmark { session, time, image } => {
            let state = read_session(session.session.as_deref(), config)?;
            let bookmark = state.capture_bookmark(&mut config.bookmark_ids(&state), time, image);
            tracing::info!(id = %bookmark.id, frame = bookmark.frame, "captured bookmark");
            serde_json::to_value(state.apply(SessionPatch::AddBookmark { bookmark })?)?
        }

        Command::ExportFormat { hint } => {
            let hint = hint.or_else(|| config.export_format.clone());
            #[derive(Serialize)]
            struct ExportSettings {
                format:        splicecut_core::ExportFormat,
                capture_audio: splicecut_core::CaptureAudioPolicy,
            }
            serde_json::to_value(ExportSettings {
                format:        resolve_export_format(hint.as_deref(), &config.supported_formats),
                capture_audio: resolve_capture_audio_policy(),
            })?
        }
    };
    Ok(value)
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "splicecut=debug,splicecut_core=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("SPLICECUT_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Session from `path` ("-" = stdin), or a fresh one at the config's fps.
fn read_session(path: Option<&Path>, config: &SpliceConfig) -> Result<SessionState> {
    let Some(path) = path else {
        return Ok(config.new_session());
    };

    let json = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read session from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read session file: {:?}", path))?
    };

    let state: SessionState = serde_json::from_str(&json)
        .with_context(|| format!("Failed to parse session: {:?}", path))?;
    for segment in &state.segments {
        segment.validate().context("Session contains an invalid segment")?;
    }
    tracing::debug!(segments = state.segments.len(), bookmarks = state.bookmarks.len(), "session loaded");
    Ok(state)
}

fn build_segment(clip: ClipArgs, ids: &mut impl IdSource) -> Result<Segment> {
    let source = clip.source.context("--source is required")?;
    let duration = clip.duration.context("--duration is required")?;
    let id = clip.clip_id.unwrap_or_else(|| ids.next_id());
    let segment = Segment::new(id, source, duration)
        .and_then(|s| s.trimmed(clip.in_point, clip.out_point))
        .context("Invalid clip")?
        .with_label(clip.label);
    Ok(segment)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let out = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{out}");
    Ok(())
}
