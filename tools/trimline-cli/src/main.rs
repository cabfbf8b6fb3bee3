//! Trimline CLI: command-line interface for timeline documents.
//!
//! Usage:
//!   trimline init <FILE>       Create a timeline with one full-length clip
//!   trimline info <FILE>       Show layers and clips
//!   trimline validate <FILE>   Check every layer invariant
//!   trimline move <FILE>       Set a clip's position and fields directly
//!   trimline roll <FILE>       Resize a clip with a rolling edit
//!   trimline trim <FILE>       Drag one clip edge by a time delta
//!   trimline split <FILE>      Cut a clip in two
//!   trimline delete <FILE>     Ripple-delete a clip
//!   trimline snap <FILE>       List snap points
//!   trimline fit <FILE>        Compute the zoom that fits the timeline
//!   trimline config            Show or write the effective configuration

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use trimline_clip_engine::ClipEdge;
use trimline_clip_model::{ClipId, ClipKind, LayerId, LayerKind};
use trimline_common::config::AppConfig;

mod commands;

#[derive(Parser)]
#[command(
    name = "trimline",
    about = "Timeline clip editing for screen recordings",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Clip to edit, optionally on a specific layer (defaults to the first).
#[derive(clap::Args)]
struct Target {
    /// Timeline document (JSON)
    file: PathBuf,

    /// Layer id
    #[arg(long)]
    layer: Option<LayerId>,

    /// Clip id
    #[arg(long)]
    clip: ClipId,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a timeline holding one full-length clip
    Init {
        /// Timeline document to write
        file: PathBuf,

        /// Timeline and layer name
        #[arg(short, long, default_value = "recording")]
        name: String,

        /// Source media duration (seconds)
        #[arg(short, long)]
        duration: f64,

        /// Media kind of the source
        #[arg(long, value_enum, default_value = "video")]
        kind: KindArg,
    },

    /// Show layers and clips
    Info {
        /// Timeline document (JSON)
        file: PathBuf,

        /// Print the document as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check every layer invariant
    Validate {
        /// Timeline document (JSON)
        file: PathBuf,
    },

    /// Set a clip's position and fields directly, without rolling
    Move {
        #[command(flatten)]
        target: Target,

        /// New start (seconds)
        #[arg(long, allow_negative_numbers = true)]
        start: f64,

        /// New duration (seconds)
        #[arg(long)]
        duration: Option<f64>,

        /// New trim at the head (seconds)
        #[arg(long)]
        trim_start: Option<f64>,

        /// New trim at the tail (seconds)
        #[arg(long)]
        trim_end: Option<f64>,
    },

    /// Resize a clip, rolling the touched edge into its neighbor
    Roll {
        #[command(flatten)]
        target: Target,

        #[arg(long, allow_negative_numbers = true)]
        start: f64,

        #[arg(long)]
        duration: f64,

        #[arg(long)]
        trim_start: f64,

        #[arg(long)]
        trim_end: f64,
    },

    /// Drag one clip edge by a time delta as a rolling edit
    Trim {
        #[command(flatten)]
        target: Target,

        /// Edge to move
        #[arg(long, value_enum)]
        edge: EdgeArg,

        /// Seconds to move the edge (negative = earlier)
        #[arg(long, allow_negative_numbers = true)]
        delta: f64,
    },

    /// Cut a clip in two at a timeline position
    Split {
        #[command(flatten)]
        target: Target,

        /// Split position (seconds)
        #[arg(long)]
        at: f64,
    },

    /// Remove a clip and close the gap
    Delete {
        #[command(flatten)]
        target: Target,
    },

    /// List snap points of a layer
    Snap {
        /// Timeline document (JSON)
        file: PathBuf,

        /// Layer id (defaults to the first layer)
        #[arg(long)]
        layer: Option<LayerId>,

        /// Report the snap point a drag at this time would attach to
        #[arg(long)]
        near: Option<f64>,

        /// Zoom (px per second) for the snap threshold
        #[arg(long, default_value = "50")]
        zoom: f64,
    },

    /// Compute the zoom that fits the whole timeline into a viewport
    Fit {
        /// Timeline document (JSON)
        file: PathBuf,

        /// Viewport width (pixels)
        #[arg(short, long, default_value = "1280")]
        width: f64,
    },

    /// Show the effective configuration
    Config {
        /// Write it to the config file (defaults fill in missing fields)
        #[arg(long)]
        write: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum KindArg {
    Video,
    Audio,
    Image,
    Text,
    Effect,
}

impl KindArg {
    fn clip_kind(self) -> ClipKind {
        match self {
            KindArg::Video => ClipKind::Video,
            KindArg::Audio => ClipKind::Audio,
            KindArg::Image => ClipKind::Image,
            KindArg::Text => ClipKind::Text,
            KindArg::Effect => ClipKind::Effect,
        }
    }

    fn layer_kind(self) -> LayerKind {
        match self {
            KindArg::Video | KindArg::Image => LayerKind::Video,
            KindArg::Audio => LayerKind::Audio,
            KindArg::Text | KindArg::Effect => LayerKind::Overlay,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum EdgeArg {
    Start,
    End,
}

impl From<EdgeArg> for ClipEdge {
    fn from(edge: EdgeArg) -> Self {
        match edge {
            EdgeArg::Start => ClipEdge::Start,
            EdgeArg::End => ClipEdge::End,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load();
    let mut logging = config.logging.clone();
    if cli.verbose {
        logging.level = "debug".to_string();
    }
    trimline_common::logging::init_logging(&logging);

    match cli.command {
        Commands::Init {
            file,
            name,
            duration,
            kind,
        } => commands::init::run(file, name, duration, kind.clip_kind(), kind.layer_kind()),
        Commands::Info { file, json } => commands::info::run(file, json),
        Commands::Validate { file } => commands::validate::run(file, &config),
        Commands::Move {
            target,
            start,
            duration,
            trim_start,
            trim_end,
        } => commands::edit::move_clip(
            target.file,
            target.layer,
            target.clip,
            start,
            duration,
            trim_start,
            trim_end,
            &config,
        ),
        Commands::Roll {
            target,
            start,
            duration,
            trim_start,
            trim_end,
        } => commands::edit::roll(
            target.file,
            target.layer,
            target.clip,
            start,
            duration,
            trim_start,
            trim_end,
            &config,
        ),
        Commands::Trim {
            target,
            edge,
            delta,
        } => commands::edit::trim(
            target.file,
            target.layer,
            target.clip,
            edge.into(),
            delta,
            &config,
        ),
        Commands::Split { target, at } => {
            commands::edit::split(target.file, target.layer, target.clip, at, &config)
        }
        Commands::Delete { target } => {
            commands::edit::delete(target.file, target.layer, target.clip, &config)
        }
        Commands::Snap {
            file,
            layer,
            near,
            zoom,
        } => commands::snap::run(file, layer, near, zoom, &config),
        Commands::Fit { file, width } => commands::fit::run(file, width, &config),
        Commands::Config { write } => commands::config::run(&config, write),
    }
}
