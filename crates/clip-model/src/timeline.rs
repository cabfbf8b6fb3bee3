//! The timeline document: every layer of an editing session.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::id::LayerId;
use crate::layer::Layer;

/// A multi-layer timeline (`timeline.json`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timeline {
    /// Schema version.
    pub version: String,

    /// Human-readable name.
    pub name: String,

    /// Last modified timestamp (RFC 3339).
    pub modified_at: String,

    /// Layers, topmost first.
    #[serde(default)]
    pub layers: Vec<Layer>,
}

impl Timeline {
    /// An empty timeline.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            version: "1.0".to_string(),
            name: name.into(),
            modified_at: chrono::Utc::now().to_rfc3339(),
            layers: vec![],
        }
    }

    pub fn layer(&self, id: LayerId) -> Option<&Layer> {
        self.layers.iter().find(|l| l.id == id)
    }

    pub fn layer_mut(&mut self, id: LayerId) -> Option<&mut Layer> {
        self.layers.iter_mut().find(|l| l.id == id)
    }

    /// Append a layer and return its id.
    pub fn add_layer(&mut self, layer: Layer) -> LayerId {
        let id = layer.id;
        self.layers.push(layer);
        self.touch();
        id
    }

    /// Length of the longest layer.
    pub fn duration(&self) -> f64 {
        self.layers
            .iter()
            .map(Layer::total_duration)
            .fold(0.0, f64::max)
    }

    /// Mark the timeline as modified now.
    pub fn touch(&mut self) {
        self.modified_at = chrono::Utc::now().to_rfc3339();
    }

    /// Load a timeline document from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TimelineError> {
        let path = path.as_ref().to_path_buf();
        let json = std::fs::read_to_string(&path).map_err(|e| TimelineError::IoError {
            path: path.clone(),
            source: e,
        })?;
        serde_json::from_str(&json).map_err(|e| TimelineError::ParseError { path, source: e })
    }

    /// Save the timeline as pretty-printed JSON, creating parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), TimelineError> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| TimelineError::IoError {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let json = serde_json::to_string_pretty(self).map_err(|e| TimelineError::ParseError {
            path: path.clone(),
            source: e,
        })?;
        std::fs::write(&path, json).map_err(|e| TimelineError::IoError { path, source: e })
    }
}

/// Errors that can occur when reading or writing timeline documents.
#[derive(Debug, thiserror::Error)]
pub enum TimelineError {
    #[error("I/O error at {path}: {source}")]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Parse error in {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: serde_json::Error,
    },
}
