//! The clip engine: every edit operation bound to one set of limits.

use trimline_clip_model::{ClipId, Layer};
use trimline_common::config::AppConfig;

use crate::edit::{self, ClipPatch, RollingResize};
use crate::limits::{EditLimits, ZoomLimits};
use crate::session::EditCommand;
use crate::split::{self, SplitError};
use crate::trim::{propose_edge_trim, ClipEdge};
use crate::{normalize, ripple, snap, zoom_fit};

/// Stateless edit engine. Every call maps a layer to a new layer.
#[derive(Debug, Clone, Default)]
pub struct ClipEngine {
    limits: EditLimits,
    zoom: ZoomLimits,
}

impl ClipEngine {
    /// Create an engine with the given limits.
    pub fn new(limits: EditLimits, zoom: ZoomLimits) -> Self {
        Self { limits, zoom }
    }

    /// Create an engine with default limits.
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Create an engine from the application config.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new((&config.editing).into(), (&config.zoom).into())
    }

    pub fn limits(&self) -> &EditLimits {
        &self.limits
    }

    pub fn zoom_limits(&self) -> &ZoomLimits {
        &self.zoom
    }

    /// Normalize a layer's clips into sorted, gapless order.
    pub fn normalize(&self, layer: &Layer) -> Layer {
        layer.with_clips(normalize::normalize(layer.clips.clone()))
    }

    pub fn move_or_resize(&self, layer: &Layer, clip: ClipId, patch: ClipPatch) -> Layer {
        edit::move_or_resize(layer, clip, patch)
    }

    pub fn resize_rolling(&self, layer: &Layer, clip: ClipId, resize: RollingResize) -> Layer {
        edit::resize_rolling(layer, clip, resize, &self.limits)
    }

    /// Drag one clip edge by `delta` seconds as a rolling edit.
    ///
    /// An unknown clip id leaves the layer as it was.
    pub fn trim_edge(&self, layer: &Layer, clip: ClipId, edge: ClipEdge, delta: f64) -> Layer {
        match layer.clip(clip) {
            Some(target) => {
                let resize = propose_edge_trim(target, edge, delta, &self.limits);
                edit::resize_rolling(layer, clip, resize, &self.limits)
            }
            None => {
                tracing::warn!(clip = %clip, layer = %layer.id, "Trim skipped: clip not on layer");
                self.normalize(layer)
            }
        }
    }

    pub fn split(&self, layer: &Layer, clip: ClipId, split_time: f64) -> Result<Layer, SplitError> {
        split::split(layer, clip, split_time, &self.limits)
    }

    pub fn delete_ripple(&self, layer: &Layer, clip: ClipId) -> Layer {
        ripple::delete_ripple(layer, clip)
    }

    pub fn snap_points(&self, layer: &Layer) -> Vec<f64> {
        snap::snap_points(layer)
    }

    /// Zoom (px per second) fitting `duration` into the viewport.
    pub fn fit_zoom(&self, duration: f64, viewport_width_px: f64) -> f64 {
        zoom_fit::fit_zoom_within(duration, viewport_width_px, &self.zoom)
    }

    /// Run one edit command against a layer.
    pub fn apply(&self, layer: &Layer, command: &EditCommand) -> Result<Layer, SplitError> {
        Ok(match *command {
            EditCommand::Move { clip, patch } => self.move_or_resize(layer, clip, patch),
            EditCommand::ResizeRolling { clip, resize } => self.resize_rolling(layer, clip, resize),
            EditCommand::TrimEdge { clip, edge, delta } => self.trim_edge(layer, clip, edge, delta),
            EditCommand::Split { clip, at } => self.split(layer, clip, at)?,
            EditCommand::DeleteRipple { clip } => self.delete_ripple(layer, clip),
        })
    }
}
