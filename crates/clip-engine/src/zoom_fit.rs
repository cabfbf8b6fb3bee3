//! Viewport fit: choose a timeline zoom that shows the whole duration.
//!
//! Short timelines need a dense ruler; long ones must compress or the
//! labels overlap. The naive fit (`width / duration`) is clamped to a
//! density band chosen by duration, then to the global zoom limits.

use crate::limits::ZoomLimits;

/// `(upper bound of duration, min px/s, max px/s)`; the last band is open-ended.
const BANDS: [(f64, f64, f64); 5] = [
    (10.0, 100.0, 150.0),
    (60.0, 50.0, 100.0),
    (300.0, 30.0, 60.0),
    (900.0, 20.0, 40.0),
    (f64::INFINITY, 10.0, 25.0),
];

/// Zoom (px per second) that fits `duration` seconds into `viewport_width_px`.
pub fn fit_zoom(duration: f64, viewport_width_px: f64) -> f64 {
    fit_zoom_within(duration, viewport_width_px, &ZoomLimits::default())
}

/// [`fit_zoom`] against explicit global limits.
///
/// A non-positive duration fits at the densest band's maximum.
pub fn fit_zoom_within(duration: f64, viewport_width_px: f64, limits: &ZoomLimits) -> f64 {
    let (band_min, band_max) = band(duration);

    let naive = if duration > 0.0 {
        viewport_width_px / duration
    } else {
        band_max
    };

    // max/min rather than clamp: NaN falls to the lower bound instead of panicking.
    let banded = naive.max(band_min).min(band_max);
    banded.max(limits.min).min(limits.max).round()
}

fn band(duration: f64) -> (f64, f64) {
    BANDS
        .iter()
        .find(|(upper, _, _)| duration < *upper)
        .map(|&(_, min, max)| (min, max))
        .unwrap_or((BANDS[4].1, BANDS[4].2))
}
