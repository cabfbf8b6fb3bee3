//! Apply one edit to a timeline document and save it.

use std::path::PathBuf;

use trimline_clip_engine::{
    ClipEdge, ClipEngine, ClipPatch, EditCommand, EditSession, RollingResize,
};
use trimline_clip_model::{ClipId, LayerId};
use trimline_common::config::AppConfig;
use trimline_common::error::TrimlineError;

use super::resolve_layer;

#[allow(clippy::too_many_arguments)]
pub fn move_clip(
    file: PathBuf,
    layer: Option<LayerId>,
    clip: ClipId,
    start: f64,
    duration: Option<f64>,
    trim_start: Option<f64>,
    trim_end: Option<f64>,
    config: &AppConfig,
) -> anyhow::Result<()> {
    let patch = ClipPatch {
        start,
        duration,
        trim_start,
        trim_end,
    };
    apply(file, layer, EditCommand::Move { clip, patch }, config)
}

#[allow(clippy::too_many_arguments)]
pub fn roll(
    file: PathBuf,
    layer: Option<LayerId>,
    clip: ClipId,
    start: f64,
    duration: f64,
    trim_start: f64,
    trim_end: f64,
    config: &AppConfig,
) -> anyhow::Result<()> {
    let resize = RollingResize {
        start,
        duration,
        trim_start,
        trim_end,
    };
    apply(file, layer, EditCommand::ResizeRolling { clip, resize }, config)
}

pub fn trim(
    file: PathBuf,
    layer: Option<LayerId>,
    clip: ClipId,
    edge: ClipEdge,
    delta: f64,
    config: &AppConfig,
) -> anyhow::Result<()> {
    apply(file, layer, EditCommand::TrimEdge { clip, edge, delta }, config)
}

pub fn split(
    file: PathBuf,
    layer: Option<LayerId>,
    clip: ClipId,
    at: f64,
    config: &AppConfig,
) -> anyhow::Result<()> {
    apply(file, layer, EditCommand::Split { clip, at }, config)
}

pub fn delete(
    file: PathBuf,
    layer: Option<LayerId>,
    clip: ClipId,
    config: &AppConfig,
) -> anyhow::Result<()> {
    apply(file, layer, EditCommand::DeleteRipple { clip }, config)
}

fn apply(
    file: PathBuf,
    layer: Option<LayerId>,
    command: EditCommand,
    config: &AppConfig,
) -> anyhow::Result<()> {
    let mut session = EditSession::open(ClipEngine::from_config(config), &file)?;
    let layer_id = resolve_layer(session.timeline(), layer)?;

    let before = session
        .timeline()
        .layer(layer_id)
        .map(|l| (l.len(), l.total_duration()))
        .unwrap_or_default();

    tracing::info!(layer = %layer_id, ?command, "Applying edit");
    let layer = session.apply(layer_id, &command).map_err(TrimlineError::from)?;

    println!(
        "Layer '{}': {} clip(s), {:.3}s -> {} clip(s), {:.3}s",
        layer.name,
        before.0,
        before.1,
        layer.len(),
        layer.total_duration()
    );
    for clip in &layer.clips {
        println!(
            "  {}  [{:>9.3}s, {:>9.3}s)  trim {:.3}/{:.3}",
            clip.id,
            clip.start,
            clip.end(),
            clip.trim_start,
            clip.trim_end
        );
    }

    session.save(&file)?;
    println!("Saved {}", file.display());

    Ok(())
}
