//! The clip: an interval of source media placed on a layer.
//!
//! A clip shows `duration` seconds of a source that is `original_duration`
//! seconds long. `trim_start` seconds are hidden before the visible part and
//! `trim_end` seconds after it, so at all times
//! `trim_start + duration + trim_end == original_duration`.

use serde::{Deserialize, Serialize};

use crate::id::ClipId;

/// Kind of media a clip carries. Inert metadata for the edit algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ClipKind {
    #[default]
    Video,
    Audio,
    Image,
    Text,
    Effect,
}

/// A single clip on a layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Clip {
    pub id: ClipId,

    /// Display name.
    pub name: String,

    pub kind: ClipKind,

    /// Display color as hex string (for example `#4f8cff`).
    #[serde(default = "default_color")]
    pub color: String,

    /// Position on the timeline (seconds).
    pub start: f64,

    /// Visible length on the timeline (seconds).
    pub duration: f64,

    /// Seconds hidden from the head of the source.
    pub trim_start: f64,

    /// Seconds hidden from the tail of the source.
    pub trim_end: f64,

    /// Length of the untrimmed source media (seconds).
    pub original_duration: f64,
}

fn default_color() -> String {
    "#4f8cff".to_string()
}

impl Clip {
    /// A full-length, untrimmed clip of a source, placed at time zero.
    pub fn from_source(name: impl Into<String>, kind: ClipKind, original_duration: f64) -> Self {
        let original_duration = original_duration.max(0.0);
        Self {
            id: ClipId::new(),
            name: name.into(),
            kind,
            color: default_color(),
            start: 0.0,
            duration: original_duration,
            trim_start: 0.0,
            trim_end: 0.0,
            original_duration,
        }
    }

    /// Timeline position of the clip's right edge.
    pub fn end(&self) -> f64 {
        self.start + self.duration
    }

    /// Whether `time` falls in `[start, end)`.
    pub fn contains(&self, time: f64) -> bool {
        time >= self.start && time < self.end()
    }

    /// How far `trim_start + duration + trim_end` strays from the source length.
    pub fn trim_error(&self) -> f64 {
        (self.trim_start + self.duration + self.trim_end - self.original_duration).abs()
    }

    /// Source-media time shown at the given timeline time, if inside the clip.
    pub fn source_time_at(&self, time: f64) -> Option<f64> {
        self.contains(time).then(|| self.trim_start + (time - self.start))
    }
}
