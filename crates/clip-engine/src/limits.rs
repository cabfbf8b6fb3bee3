//! Numeric limits the engine enforces.

use trimline_common::config::{EditingDefaults, ZoomDefaults};

/// Limits on clip edits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EditLimits {
    /// Shortest duration (seconds) a rolling adjustment may leave a neighbor with.
    pub min_clip_duration: f64,

    /// A split point must be more than this many seconds inside the clip.
    pub split_margin: f64,
}

impl Default for EditLimits {
    fn default() -> Self {
        Self {
            min_clip_duration: 0.01,
            split_margin: 0.1,
        }
    }
}

impl From<&EditingDefaults> for EditLimits {
    fn from(defaults: &EditingDefaults) -> Self {
        Self {
            min_clip_duration: defaults.min_clip_duration,
            split_margin: defaults.split_margin,
        }
    }
}

/// Global bounds on the timeline zoom (pixels per second).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomLimits {
    pub min: f64,
    pub max: f64,
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self {
            min: 10.0,
            max: 200.0,
        }
    }
}

impl From<&ZoomDefaults> for ZoomLimits {
    fn from(defaults: &ZoomDefaults) -> Self {
        Self {
            min: defaults.min_px_per_sec,
            max: defaults.max_px_per_sec,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trimline_common::config::AppConfig;

    #[test]
    fn test_defaults_match_app_config() {
        let config = AppConfig::default();
        assert_eq!(EditLimits::from(&config.editing), EditLimits::default());
        assert_eq!(ZoomLimits::from(&config.zoom), ZoomLimits::default());
    }
}
