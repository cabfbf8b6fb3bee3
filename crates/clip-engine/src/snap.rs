//! Snap index: candidate times a drag may be attracted to.

use trimline_clip_model::{approx_eq, ClipId, Layer};

/// Every clip boundary plus time zero, ascending, without near-duplicates.
pub fn snap_points(layer: &Layer) -> Vec<f64> {
    let mut points = Vec::with_capacity(layer.clips.len() * 2 + 1);
    points.push(0.0);
    for clip in &layer.clips {
        points.push(clip.start);
        points.push(clip.end());
    }

    points.sort_by(f64::total_cmp);
    points.dedup_by(|a, b| approx_eq(*a, *b));
    points
}

/// The snap point closest to `time`, if one lies within `threshold` seconds.
pub fn nearest_snap(points: &[f64], time: f64, threshold: f64) -> Option<f64> {
    points
        .iter()
        .copied()
        .map(|p| (p, (p - time).abs()))
        .filter(|(_, distance)| *distance <= threshold)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(p, _)| p)
}

/// Convert a pixel distance to seconds at the given zoom (px per second).
pub fn px_to_secs(px: f64, zoom: f64) -> f64 {
    if zoom > 0.0 {
        px / zoom
    } else {
        0.0
    }
}

/// Convert seconds to a pixel distance at the given zoom (px per second).
pub fn secs_to_px(secs: f64, zoom: f64) -> f64 {
    secs * zoom
}

/// Where a drag at some timeline time lands on a layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragTarget {
    /// Timeline time after snapping.
    pub time: f64,
    pub snapped: bool,
    /// Offset of `time` from the timeline origin at the drag's zoom.
    pub px: f64,
    /// Clip under `time` and the source time it shows there.
    pub clip: Option<(ClipId, f64)>,
}

/// Resolve a drag at `time`, snapping within `threshold_px` at `zoom` px/s.
pub fn drag_target(layer: &Layer, time: f64, zoom: f64, threshold_px: f64) -> DragTarget {
    let points = snap_points(layer);
    let snap = nearest_snap(&points, time, px_to_secs(threshold_px, zoom));
    let time = snap.unwrap_or(time);
    let clip = layer
        .clip_at(time)
        .and_then(|c| c.source_time_at(time).map(|source| (c.id, source)));

    DragTarget {
        time,
        snapped: snap.is_some(),
        px: secs_to_px(time, zoom),
        clip,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trimline_clip_model::{Clip, ClipKind, LayerKind};

    #[test]
    fn test_empty_layer_snaps_to_zero() {
        let layer = Layer::new("V1", LayerKind::Video);
        assert_eq!(snap_points(&layer), vec![0.0]);
    }

    #[test]
    fn test_boundaries_deduplicated() {
        let mut layer = Layer::new("V1", LayerKind::Video);
        let c1 = Clip::from_source("a", ClipKind::Video, 5.0);
        let mut c2 = Clip::from_source("b", ClipKind::Video, 7.0);
        c2.start = 5.0;
        layer.clips = vec![c1, c2];

        assert_eq!(snap_points(&layer), vec![0.0, 5.0, 12.0]);
    }

    #[test]
    fn test_nearest_snap_within_threshold() {
        let points = [0.0, 5.0, 12.0];
        assert_eq!(nearest_snap(&points, 5.3, 0.5), Some(5.0));
        assert_eq!(nearest_snap(&points, 11.6, 0.5), Some(12.0));
        assert_eq!(nearest_snap(&points, 8.0, 0.5), None);
        assert_eq!(nearest_snap(&[], 1.0, 10.0), None);
    }

    #[test]
    fn test_pixel_conversion() {
        assert!((px_to_secs(8.0, 50.0) - 0.16).abs() < 1e-9);
        assert_eq!(px_to_secs(8.0, 0.0), 0.0);
        assert!((secs_to_px(2.0, 75.0) - 150.0).abs() < 1e-9);
    }

    #[test]
    fn test_drag_target_snaps_and_reports_source() {
        let mut layer = Layer::new("V1", LayerKind::Video);
        let mut c1 = Clip::from_source("a", ClipKind::Video, 6.0);
        c1.trim_start = 1.0;
        c1.duration = 5.0;
        let mut c2 = Clip::from_source("b", ClipKind::Video, 5.0);
        c2.start = 5.0;
        let (id1, id2) = (c1.id, c2.id);
        layer.clips = vec![c1, c2];

        // 8px at 100px/s is 0.08s: 5.05 snaps onto the cut.
        let hit = drag_target(&layer, 5.05, 100.0, 8.0);
        assert!(hit.snapped);
        assert_eq!(hit.time, 5.0);
        assert!((hit.px - 500.0).abs() < 1e-9);
        assert_eq!(hit.clip, Some((id2, 0.0)));

        let free = drag_target(&layer, 2.0, 100.0, 8.0);
        assert!(!free.snapped);
        let (clip, source) = free.clip.unwrap();
        assert_eq!(clip, id1);
        assert!((source - 3.0).abs() < 1e-9);

        assert_eq!(drag_target(&layer, 20.0, 100.0, 8.0).clip, None);
    }
}
