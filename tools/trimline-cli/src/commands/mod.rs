pub mod config;
pub mod edit;
pub mod fit;
pub mod info;
pub mod init;
pub mod snap;
pub mod validate;

pub use trimline_clip_engine::load_timeline;
use trimline_clip_model::{LayerId, Timeline};

/// The requested layer, or the first layer when none is given.
pub fn resolve_layer(timeline: &Timeline, layer: Option<LayerId>) -> anyhow::Result<LayerId> {
    match layer {
        Some(id) if timeline.layer(id).is_some() => Ok(id),
        Some(id) => anyhow::bail!("Layer {id} not found in timeline '{}'", timeline.name),
        None => timeline
            .layers
            .first()
            .map(|l| l.id)
            .ok_or_else(|| anyhow::anyhow!("Timeline '{}' has no layers", timeline.name)),
    }
}
