//! Move and resize operations.
//!
//! # Rolling edits
//!
//! A rolling edit moves the cut point between two adjacent clips. One side's
//! visible duration shrinks exactly as much as the other's grows, and the
//! shrinking side hides the same amount behind its trim offset:
//!
//! ```text
//!   before     | A: dur 5, trim_end 2 | B: dur 5, trim_start 0 |
//!   A end +2   | A: dur 7, trim_end 0         | B: dur 3, trim_start 2 |
//! ```
//!
//! The total timeline length is unchanged. When the neighbor cannot absorb
//! the change (it would fall below the minimum duration or expose media
//! before its source start), the neighbor is left alone and the edit
//! degrades to a plain resize; normalization then repositions the neighbor.

use serde::{Deserialize, Serialize};
use trimline_clip_model::{approx_eq, Clip, ClipId, Layer, TIME_EPSILON};

use crate::limits::EditLimits;
use crate::normalize::finish;

/// Field updates for a direct move or resize. `None` leaves a field as is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClipPatch {
    pub start: f64,
    #[serde(default)]
    pub duration: Option<f64>,
    #[serde(default)]
    pub trim_start: Option<f64>,
    #[serde(default)]
    pub trim_end: Option<f64>,
}

impl ClipPatch {
    /// Move a clip without resizing it.
    pub fn move_to(start: f64) -> Self {
        Self {
            start,
            duration: None,
            trim_start: None,
            trim_end: None,
        }
    }

    fn apply(&self, clip: &mut Clip) {
        clip.start = self.start;
        if let Some(duration) = self.duration {
            clip.duration = duration;
        }
        if let Some(trim_start) = self.trim_start {
            clip.trim_start = trim_start;
        }
        if let Some(trim_end) = self.trim_end {
            clip.trim_end = trim_end;
        }
    }
}

/// The full proposed geometry of a clip being resized with a rolling edit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RollingResize {
    pub start: f64,
    pub duration: f64,
    pub trim_start: f64,
    pub trim_end: f64,
}

impl RollingResize {
    pub fn end(&self) -> f64 {
        self.start + self.duration
    }
}

/// Apply the present fields of `patch` to one clip, then normalize.
///
/// No neighbor is adjusted and no bounds are checked. An unknown clip id
/// leaves the layer as it was.
pub fn move_or_resize(layer: &Layer, clip_id: ClipId, patch: ClipPatch) -> Layer {
    let mut clips = layer.clips.clone();
    match clips.iter_mut().find(|c| c.id == clip_id) {
        Some(clip) => {
            patch.apply(clip);
            tracing::debug!(clip = %clip_id, start = patch.start, "Moved clip");
        }
        None => {
            tracing::warn!(clip = %clip_id, layer = %layer.id, "Move skipped: clip not on layer");
        }
    }
    finish(layer, clips)
}

/// Resize one edge of a clip, rolling the shared boundary into its neighbor.
///
/// The end edge counts as moved when `resize.start` matches the clip's
/// current start; the start edge counts as moved when `resize.end()` matches
/// its current end. A moved start on the first clip is pinned to time zero:
/// there is no left neighbor, so the clip is trimmed and the timeline shrinks.
pub fn resize_rolling(
    layer: &Layer,
    clip_id: ClipId,
    resize: RollingResize,
    limits: &EditLimits,
) -> Layer {
    let Some(index) = layer.position(clip_id) else {
        tracing::warn!(clip = %clip_id, layer = %layer.id, "Resize skipped: clip not on layer");
        return finish(layer, layer.clips.clone());
    };

    let old = &layer.clips[index];
    let (old_start, old_end) = (old.start, old.end());
    let mut clips = layer.clips.clone();
    let mut target_start = resize.start;
    let mut rolled = false;

    if approx_eq(resize.start, old_start) {
        let delta = resize.end() - old_end;
        let neighbor = layer
            .clips
            .iter()
            .position(|c| c.id != clip_id && approx_eq(c.start, old_end));
        if let Some(n) = neighbor {
            rolled |= roll_into_right(&mut clips[n], delta, limits);
        }
    }

    if approx_eq(resize.end(), old_end) {
        if index == 0 {
            target_start = 0.0;
        } else {
            let delta = resize.start - old_start;
            let neighbor = layer
                .clips
                .iter()
                .position(|c| c.id != clip_id && approx_eq(c.end(), old_start));
            if let Some(n) = neighbor {
                rolled |= roll_into_left(&mut clips[n], delta, limits);
            }
        }
    }

    let target = &mut clips[index];
    target.start = target_start;
    target.duration = resize.duration;
    target.trim_start = resize.trim_start;
    target.trim_end = resize.trim_end;

    tracing::debug!(
        clip = %clip_id,
        start = target_start,
        duration = resize.duration,
        rolled,
        "Resized clip"
    );
    finish(layer, clips)
}

/// Shift the right neighbor's head by `delta`. Returns whether it was applied.
fn roll_into_right(neighbor: &mut Clip, delta: f64, limits: &EditLimits) -> bool {
    let duration = neighbor.duration - delta;
    let trim_start = neighbor.trim_start + delta;

    if !fits(duration, trim_start, limits) {
        tracing::warn!(
            clip = %neighbor.id,
            delta,
            duration,
            trim_start,
            "Rolling edit rejected by right neighbor, resizing without it"
        );
        return false;
    }

    neighbor.start += delta;
    neighbor.duration = duration;
    neighbor.trim_start = trim_start.max(0.0);
    true
}

/// Shift the left neighbor's tail by `delta`. Returns whether it was applied.
fn roll_into_left(neighbor: &mut Clip, delta: f64, limits: &EditLimits) -> bool {
    let duration = neighbor.duration + delta;
    let trim_end = neighbor.trim_end - delta;

    if !fits(duration, trim_end, limits) {
        tracing::warn!(
            clip = %neighbor.id,
            delta,
            duration,
            trim_end,
            "Rolling edit rejected by left neighbor, resizing without it"
        );
        return false;
    }

    neighbor.duration = duration;
    neighbor.trim_end = trim_end.max(0.0);
    true
}

/// The duration floor is strict. A trim within `TIME_EPSILON` below zero is
/// float noise from rolling back to an untrimmed edge and is stored as zero.
fn fits(duration: f64, trim: f64, limits: &EditLimits) -> bool {
    duration >= limits.min_clip_duration && trim > -TIME_EPSILON
}
