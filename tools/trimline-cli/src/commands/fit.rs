//! Compute the zoom that fits the whole timeline.

use std::path::PathBuf;

use trimline_clip_engine::ClipEngine;
use trimline_common::config::AppConfig;

use super::load_timeline;

pub fn run(file: PathBuf, width: f64, config: &AppConfig) -> anyhow::Result<()> {
    let timeline = load_timeline(&file)?;
    let engine = ClipEngine::from_config(config);

    let duration = timeline.duration();
    let zoom = engine.fit_zoom(duration, width);

    println!("Duration: {duration:.3}s");
    println!("Viewport: {width}px");
    println!("Zoom:     {zoom} px/s ({:.0}px of timeline)", zoom * duration);

    Ok(())
}
