//! Layers: ordered, gapless sequences of clips on one track.
//!
//! # Invariants
//!
//! A layer is valid when, within [`TIME_EPSILON`](crate::TIME_EPSILON):
//! 1. clips are sorted ascending by `start`;
//! 2. the first clip starts at `0`;
//! 3. every clip starts exactly where its predecessor ends (no gaps, no overlaps);
//! 4. every clip satisfies `trim_start + duration + trim_end == original_duration`,
//!    with non-negative trims and `duration >= min_clip_duration`.
//!
//! An empty layer is valid.

use serde::{Deserialize, Serialize};

use crate::clip::{Clip, ClipKind};
use crate::id::{ClipId, LayerId};
use crate::{approx_eq, TIME_EPSILON};

/// Display kind of a layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LayerKind {
    #[default]
    Video,
    Audio,
    Overlay,
}

/// One track of clips.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    pub id: LayerId,

    /// Display name.
    pub name: String,

    pub kind: LayerKind,

    #[serde(default = "default_true")]
    pub visible: bool,

    /// Locked layers refuse edits.
    #[serde(default)]
    pub locked: bool,

    /// Clips in timeline order.
    #[serde(default)]
    pub clips: Vec<Clip>,
}

fn default_true() -> bool {
    true
}

/// A broken layer invariant, naming the offending clip.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvariantViolation {
    #[error("clip {clip} starts at {start} before its predecessor at {previous_start}")]
    Unsorted {
        clip: ClipId,
        start: f64,
        previous_start: f64,
    },

    #[error("first clip {clip} starts at {start} instead of 0")]
    FirstClipNotAtZero { clip: ClipId, start: f64 },

    #[error("clip {clip} starts at {start} but its predecessor ends at {expected}")]
    Gap {
        clip: ClipId,
        start: f64,
        expected: f64,
    },

    #[error("clip {clip} trims do not add up: off by {error}")]
    TrimMismatch { clip: ClipId, error: f64 },

    #[error("clip {clip} has a negative trim ({trim_start}, {trim_end})")]
    NegativeTrim {
        clip: ClipId,
        trim_start: f64,
        trim_end: f64,
    },

    #[error("clip {clip} is {duration}s long, below the {min}s minimum")]
    TooShort { clip: ClipId, duration: f64, min: f64 },
}

impl Layer {
    /// An empty layer.
    pub fn new(name: impl Into<String>, kind: LayerKind) -> Self {
        Self {
            id: LayerId::new(),
            name: name.into(),
            kind,
            visible: true,
            locked: false,
            clips: vec![],
        }
    }

    /// A layer holding one full-length clip of a source.
    ///
    /// A non-positive source duration yields an empty layer.
    pub fn from_source(
        name: impl Into<String>,
        kind: LayerKind,
        clip_kind: ClipKind,
        source_duration: f64,
    ) -> Self {
        let name = name.into();
        let mut layer = Self::new(name.clone(), kind);
        if source_duration > 0.0 {
            layer
                .clips
                .push(Clip::from_source(name, clip_kind, source_duration));
        }
        layer
    }

    /// Same layer metadata, different clips.
    pub fn with_clips(&self, clips: Vec<Clip>) -> Self {
        Self {
            id: self.id,
            name: self.name.clone(),
            kind: self.kind,
            visible: self.visible,
            locked: self.locked,
            clips,
        }
    }

    pub fn clip(&self, id: ClipId) -> Option<&Clip> {
        self.clips.iter().find(|c| c.id == id)
    }

    /// Index of a clip in timeline order.
    pub fn position(&self, id: ClipId) -> Option<usize> {
        self.clips.iter().position(|c| c.id == id)
    }

    /// The clip under `time`, if any.
    pub fn clip_at(&self, time: f64) -> Option<&Clip> {
        self.clips.iter().find(|c| c.contains(time))
    }

    /// End of the last clip; zero for an empty layer.
    pub fn total_duration(&self) -> f64 {
        self.clips.iter().map(Clip::end).fold(0.0, f64::max)
    }

    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }

    pub fn len(&self) -> usize {
        self.clips.len()
    }

    /// Check every layer invariant, reporting the first violation.
    pub fn check_invariants(&self, min_clip_duration: f64) -> Result<(), InvariantViolation> {
        self.check_gapless()?;

        for clip in &self.clips {
            if clip.trim_start < -TIME_EPSILON || clip.trim_end < -TIME_EPSILON {
                return Err(InvariantViolation::NegativeTrim {
                    clip: clip.id,
                    trim_start: clip.trim_start,
                    trim_end: clip.trim_end,
                });
            }
            let error = clip.trim_error();
            if error >= TIME_EPSILON {
                return Err(InvariantViolation::TrimMismatch {
                    clip: clip.id,
                    error,
                });
            }
            if clip.duration < min_clip_duration - TIME_EPSILON {
                return Err(InvariantViolation::TooShort {
                    clip: clip.id,
                    duration: clip.duration,
                    min: min_clip_duration,
                });
            }
        }
        Ok(())
    }

    /// Check only ordering and gaplessness, the invariants normalization owns.
    pub fn check_gapless(&self) -> Result<(), InvariantViolation> {
        let Some(first) = self.clips.first() else {
            return Ok(());
        };
        if !approx_eq(first.start, 0.0) {
            return Err(InvariantViolation::FirstClipNotAtZero {
                clip: first.id,
                start: first.start,
            });
        }

        for pair in self.clips.windows(2) {
            let (prev, next) = (&pair[0], &pair[1]);
            if next.start < prev.start - TIME_EPSILON {
                return Err(InvariantViolation::Unsorted {
                    clip: next.id,
                    start: next.start,
                    previous_start: prev.start,
                });
            }
            if !approx_eq(next.start, prev.end()) {
                return Err(InvariantViolation::Gap {
                    clip: next.id,
                    start: next.start,
                    expected: prev.end(),
                });
            }
        }
        Ok(())
    }
}
