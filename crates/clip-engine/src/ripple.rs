//! Ripple delete: remove a clip and close the gap it leaves.

use trimline_clip_model::{ClipId, Layer, TIME_EPSILON};

use crate::normalize::finish;

/// Remove a clip and shift every later clip left by its duration.
///
/// Clips before the removed one are untouched. Deleting the last clip
/// yields an empty layer; an unknown id leaves the layer as it was.
pub fn delete_ripple(layer: &Layer, clip_id: ClipId) -> Layer {
    let Some(index) = layer.position(clip_id) else {
        tracing::warn!(clip = %clip_id, layer = %layer.id, "Delete skipped: clip not on layer");
        return finish(layer, layer.clips.clone());
    };

    let mut clips = layer.clips.clone();
    let removed = clips.remove(index);
    let cut = removed.end();

    let mut shifted = 0usize;
    for clip in clips.iter_mut().filter(|c| c.start >= cut - TIME_EPSILON) {
        clip.start -= removed.duration;
        shifted += 1;
    }

    tracing::debug!(
        clip = %clip_id,
        duration = removed.duration,
        shifted,
        "Ripple-deleted clip"
    );
    finish(layer, clips)
}
