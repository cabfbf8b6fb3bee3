//! Edit session: the single owner of the current timeline state.
//!
//! UI code translates a finished gesture into an [`EditCommand`] and hands it
//! to [`EditSession::apply`], which computes the new layer and swaps it in.
//! Mid-gesture previews go through [`EditSession::preview`] and are simply
//! dropped if the gesture is cancelled.

use std::path::Path;

use serde::{Deserialize, Serialize};
use trimline_clip_model::{ClipId, Layer, LayerId, Timeline};
use trimline_common::error::{TrimlineError, TrimlineResult};

use crate::edit::{ClipPatch, RollingResize};
use crate::engine::ClipEngine;
use crate::split::SplitError;
use crate::trim::ClipEdge;

/// One proposed edit, already expressed in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum EditCommand {
    /// Set a clip's fields directly; no neighbor is adjusted.
    Move { clip: ClipId, patch: ClipPatch },

    /// Resize a clip, rolling the touched boundary into its neighbor.
    ResizeRolling { clip: ClipId, resize: RollingResize },

    /// Drag one edge by a time delta as a rolling edit.
    TrimEdge {
        clip: ClipId,
        edge: ClipEdge,
        delta: f64,
    },

    /// Cut a clip in two at a timeline position.
    Split { clip: ClipId, at: f64 },

    /// Remove a clip and close the gap.
    DeleteRipple { clip: ClipId },
}

/// Why a session refused an edit. The timeline is unchanged on error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SessionError {
    #[error("layer {0} not found")]
    LayerNotFound(LayerId),

    #[error("layer {0} is locked")]
    LayerLocked(LayerId),

    #[error(transparent)]
    Split(#[from] SplitError),
}

impl From<SessionError> for TrimlineError {
    fn from(err: SessionError) -> Self {
        TrimlineError::edit(err.to_string())
    }
}

/// Read a timeline document, distinguishing a missing file from a bad one.
pub fn load_timeline(path: &Path) -> TrimlineResult<Timeline> {
    if !path.exists() {
        return Err(TrimlineError::file_not_found(path));
    }
    Timeline::load(path).map_err(|e| TrimlineError::timeline(format!("Failed to load: {e}")))
}

/// Owns a timeline and serializes edits against it.
#[derive(Debug, Clone)]
pub struct EditSession {
    engine: ClipEngine,
    timeline: Timeline,
}

impl EditSession {
    pub fn new(engine: ClipEngine, timeline: Timeline) -> Self {
        Self { engine, timeline }
    }

    /// Start a session on the timeline document at `path`.
    pub fn open(engine: ClipEngine, path: &Path) -> TrimlineResult<Self> {
        let timeline = load_timeline(path)?;
        tracing::debug!(path = %path.display(), layers = timeline.layers.len(), "Opened timeline");
        Ok(Self::new(engine, timeline))
    }

    /// Write the committed timeline to `path`.
    pub fn save(&self, path: &Path) -> TrimlineResult<()> {
        self.timeline
            .save(path)
            .map_err(|e| TrimlineError::timeline(format!("Failed to save: {e}")))
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn engine(&self) -> &ClipEngine {
        &self.engine
    }

    /// Give up the session and return the committed timeline.
    pub fn into_timeline(self) -> Timeline {
        self.timeline
    }

    /// Compute the result of `command` without committing it.
    pub fn preview(&self, layer_id: LayerId, command: &EditCommand) -> Result<Layer, SessionError> {
        let layer = self.editable_layer(layer_id)?;
        Ok(self.engine.apply(layer, command)?)
    }

    /// Apply `command` to a layer and commit the result.
    pub fn apply(
        &mut self,
        layer_id: LayerId,
        command: &EditCommand,
    ) -> Result<&Layer, SessionError> {
        let next = self.preview(layer_id, command)?;
        self.commit(next)
    }

    /// Normalize every layer, e.g. after loading a hand-edited document.
    pub fn normalize_all(&mut self) {
        for layer in &mut self.timeline.layers {
            *layer = self.engine.normalize(layer);
        }
        self.timeline.touch();
    }

    /// Snap points of one layer.
    pub fn snap_points(&self, layer_id: LayerId) -> Result<Vec<f64>, SessionError> {
        let layer = self
            .timeline
            .layer(layer_id)
            .ok_or(SessionError::LayerNotFound(layer_id))?;
        Ok(self.engine.snap_points(layer))
    }

    /// Zoom that fits the whole timeline into the viewport.
    pub fn fit_zoom(&self, viewport_width_px: f64) -> f64 {
        self.engine
            .fit_zoom(self.timeline.duration(), viewport_width_px)
    }

    fn editable_layer(&self, layer_id: LayerId) -> Result<&Layer, SessionError> {
        let layer = self
            .timeline
            .layer(layer_id)
            .ok_or(SessionError::LayerNotFound(layer_id))?;
        if layer.locked {
            return Err(SessionError::LayerLocked(layer_id));
        }
        Ok(layer)
    }

    fn commit(&mut self, next: Layer) -> Result<&Layer, SessionError> {
        let layer_id = next.id;
        let slot = self
            .timeline
            .layer_mut(layer_id)
            .ok_or(SessionError::LayerNotFound(layer_id))?;
        *slot = next;
        self.timeline.touch();

        tracing::debug!(layer = %layer_id, "Committed edit");
        self.timeline
            .layer(layer_id)
            .ok_or(SessionError::LayerNotFound(layer_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trimline_clip_model::{ClipKind, LayerKind};

    fn session_with(duration: f64) -> (EditSession, LayerId) {
        let mut timeline = Timeline::new("Session");
        let layer_id = timeline.add_layer(Layer::from_source(
            "Screen",
            LayerKind::Video,
            ClipKind::Video,
            duration,
        ));
        (EditSession::new(ClipEngine::with_defaults(), timeline), layer_id)
    }

    fn first_clip(session: &EditSession, layer_id: LayerId) -> ClipId {
        session.timeline().layer(layer_id).unwrap().clips[0].id
    }

    #[test]
    fn test_apply_commits_split() {
        let (mut session, layer_id) = session_with(10.0);
        let clip = first_clip(&session, layer_id);

        let layer = session
            .apply(layer_id, &EditCommand::Split { clip, at: 4.0 })
            .unwrap();
        assert_eq!(layer.len(), 2);
        assert_eq!(session.timeline().layer(layer_id).unwrap().len(), 2);
    }

    #[test]
    fn test_preview_does_not_commit() {
        let (session, layer_id) = session_with(10.0);
        let clip = first_clip(&session, layer_id);

        let preview = session
            .preview(layer_id, &EditCommand::DeleteRipple { clip })
            .unwrap();
        assert!(preview.is_empty());
        assert_eq!(session.timeline().layer(layer_id).unwrap().len(), 1);
    }

    #[test]
    fn test_failed_split_leaves_state() {
        let (mut session, layer_id) = session_with(10.0);
        let clip = first_clip(&session, layer_id);
        let before = session.timeline().clone();

        let err = session
            .apply(layer_id, &EditCommand::Split { clip, at: 9.95 })
            .unwrap_err();
        assert!(matches!(err, SessionError::Split(_)));
        assert_eq!(session.timeline(), &before);
    }

    #[test]
    fn test_locked_layer_refuses_edits() {
        let (session, layer_id) = session_with(10.0);
        let clip = first_clip(&session, layer_id);
        let mut timeline = session.into_timeline();
        timeline.layer_mut(layer_id).unwrap().locked = true;
        let mut session = EditSession::new(ClipEngine::with_defaults(), timeline);

        assert_eq!(
            session
                .apply(layer_id, &EditCommand::DeleteRipple { clip })
                .unwrap_err(),
            SessionError::LayerLocked(layer_id)
        );
    }

    #[test]
    fn test_unknown_layer() {
        let (mut session, _) = session_with(10.0);
        let missing = LayerId::new();
        let err = session
            .apply(
                missing,
                &EditCommand::Split {
                    clip: ClipId::new(),
                    at: 1.0,
                },
            )
            .unwrap_err();
        assert_eq!(err, SessionError::LayerNotFound(missing));
        assert!(session.snap_points(missing).is_err());
    }

    #[test]
    fn test_fit_zoom_uses_timeline_duration() {
        let (session, _) = session_with(30.0);
        assert_eq!(session.fit_zoom(900.0), 50.0);
    }

    #[test]
    fn test_normalize_all_repairs_gaps() {
        let (session, layer_id) = session_with(4.0);
        let mut timeline = session.into_timeline();
        timeline.layer_mut(layer_id).unwrap().clips[0].start = 3.0;
        let mut session = EditSession::new(ClipEngine::with_defaults(), timeline);

        session.normalize_all();
        let layer = session.timeline().layer(layer_id).unwrap();
        assert_eq!(layer.clips[0].start, 0.0);
    }

    #[test]
    fn test_command_json_shape() {
        let clip = ClipId::new();
        let command = EditCommand::TrimEdge {
            clip,
            edge: ClipEdge::End,
            delta: -0.5,
        };
        let json = serde_json::to_value(command).unwrap();
        assert_eq!(json["op"], "trim_edge");
        assert_eq!(json["edge"], "end");
        let back: EditCommand = serde_json::from_value(json).unwrap();
        assert_eq!(back, command);
    }

    #[test]
    fn test_open_missing_file() {
        let path = std::env::temp_dir().join("trimline_session_missing.json");
        let err = EditSession::open(ClipEngine::with_defaults(), &path).unwrap_err();
        assert!(matches!(err, TrimlineError::FileNotFound { .. }));
    }

    #[test]
    fn test_open_unparseable_file() {
        let path = std::env::temp_dir().join("trimline_session_garbage.json");
        std::fs::write(&path, "{ not a timeline").unwrap();
        let err = EditSession::open(ClipEngine::with_defaults(), &path).unwrap_err();
        assert!(matches!(err, TrimlineError::Timeline { .. }));
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_save_and_reopen_keeps_edits() {
        let dir = std::env::temp_dir().join("trimline_session_roundtrip");
        let _ = std::fs::remove_dir_all(&dir);
        let path = dir.join("timeline.json");

        let (mut session, layer_id) = session_with(10.0);
        let clip = first_clip(&session, layer_id);
        session
            .apply(layer_id, &EditCommand::Split { clip, at: 4.0 })
            .unwrap();
        session.save(&path).unwrap();

        let reopened = EditSession::open(ClipEngine::with_defaults(), &path).unwrap();
        assert_eq!(reopened.timeline(), session.timeline());
        assert_eq!(reopened.timeline().layer(layer_id).unwrap().len(), 2);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_session_error_becomes_edit_error() {
        let (_, layer_id) = session_with(1.0);
        let err: TrimlineError = SessionError::LayerLocked(layer_id).into();
        assert!(matches!(err, TrimlineError::Edit { .. }));
        assert!(err.to_string().contains("is locked"));
    }
}
