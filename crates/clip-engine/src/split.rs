//! Splitting one clip into two at a timeline position.

use trimline_clip_model::{Clip, ClipId, Layer};

use crate::limits::EditLimits;
use crate::normalize::finish;

/// Why a split was refused. The layer is never modified on failure.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SplitError {
    #[error("clip {0} is not on this layer")]
    ClipNotFound(ClipId),

    #[error(
        "split at {split_time}s is within {margin}s of an edge of clip {clip} [{start}s, {end}s)"
    )]
    TooCloseToEdge {
        clip: ClipId,
        split_time: f64,
        start: f64,
        end: f64,
        margin: f64,
    },
}

/// Replace a clip with two contiguous clips cut at `split_time`.
///
/// The head keeps the original start and `trim_start`; the tail keeps the
/// original `trim_end`. Both halves get fresh ids and share the source's
/// `original_duration`. Split points within `limits.split_margin` of either
/// edge are rejected.
pub fn split(
    layer: &Layer,
    clip_id: ClipId,
    split_time: f64,
    limits: &EditLimits,
) -> Result<Layer, SplitError> {
    let index = layer
        .position(clip_id)
        .ok_or(SplitError::ClipNotFound(clip_id))?;
    let clip = &layer.clips[index];

    let margin = limits.split_margin;
    let inside = split_time > clip.start + margin && split_time < clip.end() - margin;
    if !inside {
        return Err(SplitError::TooCloseToEdge {
            clip: clip_id,
            split_time,
            start: clip.start,
            end: clip.end(),
            margin,
        });
    }

    let (head, tail) = cut(clip, split_time);
    tracing::debug!(
        clip = %clip_id,
        split_time,
        head = %head.id,
        tail = %tail.id,
        "Split clip"
    );

    let mut clips = layer.clips.clone();
    clips.splice(index..=index, [head, tail]);
    Ok(finish(layer, clips))
}

fn cut(clip: &Clip, split_time: f64) -> (Clip, Clip) {
    let head_duration = split_time - clip.start;

    let head = Clip {
        id: ClipId::new(),
        duration: head_duration,
        trim_end: clip.original_duration - clip.trim_start - head_duration,
        ..clip.clone()
    };

    let tail = Clip {
        id: ClipId::new(),
        start: split_time,
        duration: clip.end() - split_time,
        trim_start: clip.trim_start + head_duration,
        ..clip.clone()
    };

    (head, tail)
}
