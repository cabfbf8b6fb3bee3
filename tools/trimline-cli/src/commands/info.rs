//! Show timeline information.

use std::path::PathBuf;

use super::load_timeline;

pub fn run(file: PathBuf, json: bool) -> anyhow::Result<()> {
    let timeline = load_timeline(&file)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&timeline)?);
        return Ok(());
    }

    println!("Timeline: {}", timeline.name);
    println!("  Version: {}", timeline.version);
    println!("  Modified: {}", timeline.modified_at);
    println!("  Duration: {:.3}s", timeline.duration());
    println!();

    for layer in &timeline.layers {
        let mut flags = vec![];
        if !layer.visible {
            flags.push("hidden");
        }
        if layer.locked {
            flags.push("locked");
        }
        println!(
            "Layer: {} ({:?}) {}{}",
            layer.name,
            layer.kind,
            layer.id,
            if flags.is_empty() {
                String::new()
            } else {
                format!(" [{}]", flags.join(", "))
            }
        );

        if layer.is_empty() {
            println!("  (empty)");
        }
        for clip in &layer.clips {
            println!(
                "  {}  [{:>9.3}s, {:>9.3}s)  trim {:.3}/{:.3} of {:.3}s  {:?} '{}'",
                clip.id,
                clip.start,
                clip.end(),
                clip.trim_start,
                clip.trim_end,
                clip.original_duration,
                clip.kind,
                clip.name
            );
        }
        println!();
    }

    Ok(())
}
