//! List snap points of a layer.

use std::path::PathBuf;

use trimline_clip_engine::{drag_target, ClipEngine};
use trimline_clip_model::LayerId;
use trimline_common::config::AppConfig;

use super::{load_timeline, resolve_layer};

pub fn run(
    file: PathBuf,
    layer: Option<LayerId>,
    near: Option<f64>,
    zoom: f64,
    config: &AppConfig,
) -> anyhow::Result<()> {
    let timeline = load_timeline(&file)?;
    let layer_id = resolve_layer(&timeline, layer)?;
    let layer = timeline
        .layer(layer_id)
        .ok_or_else(|| anyhow::anyhow!("Layer {layer_id} not found"))?;

    let points = ClipEngine::from_config(config).snap_points(layer);
    println!("Snap points on '{}':", layer.name);
    for point in &points {
        println!("  {point:.3}s");
    }

    if let Some(time) = near {
        let hit = drag_target(layer, time, zoom, config.editing.snap_threshold_px);
        println!();
        if hit.snapped {
            println!("{time:.3}s snaps to {:.3}s ({:.0}px)", hit.time, hit.px);
        } else {
            println!(
                "{time:.3}s is not within {}px of a snap point ({:.0}px)",
                config.editing.snap_threshold_px, hit.px
            );
        }
        match hit.clip {
            Some((clip, source)) => println!("  over clip {clip}, source time {source:.3}s"),
            None => println!("  past the end of the layer"),
        }
    }

    Ok(())
}
