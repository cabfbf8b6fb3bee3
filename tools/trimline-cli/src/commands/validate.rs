//! Validate every layer of a timeline document.

use std::path::PathBuf;

use trimline_common::config::AppConfig;

use super::load_timeline;

pub fn run(file: PathBuf, config: &AppConfig) -> anyhow::Result<()> {
    println!("Validating timeline at: {}", file.display());

    let timeline = load_timeline(&file)?;
    let min = config.editing.min_clip_duration;

    let mut issues = vec![];
    for layer in &timeline.layers {
        match layer.check_invariants(min) {
            Ok(()) => println!("  {}: {} clip(s) OK", layer.name, layer.len()),
            Err(violation) => {
                println!("  {}: {violation}", layer.name);
                issues.push(violation);
            }
        }
    }

    if issues.is_empty() {
        println!("\nTimeline is valid.");
        Ok(())
    } else {
        anyhow::bail!("{} layer(s) violate the timeline invariants", issues.len())
    }
}
