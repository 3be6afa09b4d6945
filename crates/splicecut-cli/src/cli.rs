// crates/splicecut-cli/src/cli.rs
//
// Argument definitions. Every subcommand reads a session document (a JSON
// `SessionState`) and prints its result as JSON on stdout.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "splicecut")]
#[command(version, about = "Splice clips into a virtual timeline")]
pub struct Cli {
    /// Path to a JSON config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging (overridden by SPLICECUT_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show which segment plays at a composite time
    Locate {
        #[command(flatten)]
        session: SessionArg,

        /// Composite time in seconds
        #[arg(long, allow_hyphen_values = true)]
        time: f64,
    },

    /// Replace everything after a cut time with a new clip
    Splice {
        #[command(flatten)]
        session: SessionArg,

        /// Cut time in seconds
        #[arg(long, allow_hyphen_values = true)]
        at: f64,

        #[command(flatten)]
        clip: ClipArgs,
    },

    /// Splice at a saved bookmark
    SpliceAt {
        #[command(flatten)]
        session: SessionArg,

        /// Bookmark id
        #[arg(long)]
        bookmark: String,

        #[command(flatten)]
        clip: ClipArgs,
    },

    /// Capture a bookmark at a composite time and add it to the session
    Bookmark {
        #[command(flatten)]
        session: SessionArg,

        /// Composite time in seconds
        #[arg(long, allow_hyphen_values = true)]
        time: f64,

        /// Opaque preview reference stored with the bookmark
        #[arg(long)]
        image: Option<String>,
    },

    /// Resolve the recorder format against the configured supported list
    ExportFormat {
        /// Requested MIME type; defaults to the config's export_format
        #[arg(long)]
        hint: Option<String>,
    },
}

#[derive(Args, Debug)]
pub struct SessionArg {
    /// Session JSON file, or "-" for stdin. Omit to start an empty session.
    #[arg(short, long)]
    pub session: Option<PathBuf>,
}

/// The replacement clip for a splice. `--source` and `--duration` may be
/// left out only with `--dry-run`.
#[derive(Args, Debug)]
pub struct ClipArgs {
    /// Print the splice plan without applying it
    #[arg(long)]
    pub dry_run: bool,

    /// Id for the new segment; generated when omitted
    #[arg(long)]
    pub clip_id: Option<String>,

    /// Opaque media handle for the new segment
    #[arg(long, required_unless_present = "dry_run")]
    pub source: Option<String>,

    /// Full clip length in seconds
    #[arg(long, required_unless_present = "dry_run")]
    pub duration: Option<f64>,

    /// Trim start in seconds
    #[arg(long = "in", default_value_t = 0.0)]
    pub in_point: f64,

    /// Trim end in seconds
    #[arg(long = "out")]
    pub out_point: Option<f64>,

    #[arg(long, default_value = "")]
    pub label: String,
}
