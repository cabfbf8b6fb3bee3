//! Create a new timeline document.

use std::path::PathBuf;

use trimline_clip_model::{ClipKind, Layer, LayerKind, Timeline};

pub fn run(
    file: PathBuf,
    name: String,
    duration: f64,
    clip_kind: ClipKind,
    layer_kind: LayerKind,
) -> anyhow::Result<()> {
    if file.exists() {
        anyhow::bail!("Refusing to overwrite existing file: {}", file.display());
    }
    if !(duration > 0.0) {
        anyhow::bail!("Source duration must be positive, got {duration}");
    }

    let mut timeline = Timeline::new(&name);
    let layer_id = timeline.add_layer(Layer::from_source(&name, layer_kind, clip_kind, duration));
    timeline
        .save(&file)
        .map_err(|e| anyhow::anyhow!("Failed to save timeline: {e}"))?;

    println!("Created timeline '{}' at {}", name, file.display());
    println!("  Layer: {layer_id} ({layer_kind:?})");
    if let Some(clip) = timeline.layers[0].clips.first() {
        println!("  Clip:  {} [0.000s, {:.3}s)", clip.id, clip.end());
    }

    Ok(())
}
