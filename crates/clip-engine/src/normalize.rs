//! Normalization: restore the sorted, gapless layer invariant.
//!
//! Only `start` values are rewritten. Durations and trims pass through
//! untouched, so normalization can never break trim conservation.

use trimline_clip_model::{Clip, Layer};

/// Sort clips by `start` and pack them end to end from time zero.
///
/// The sort is stable: clips sharing a `start` keep their relative order.
/// Normalizing an already normalized sequence returns it unchanged.
pub fn normalize(mut clips: Vec<Clip>) -> Vec<Clip> {
    clips.sort_by(|a, b| a.start.total_cmp(&b.start));

    let mut cursor = 0.0;
    for clip in &mut clips {
        clip.start = cursor;
        cursor += clip.duration;
    }
    clips
}

/// Build the normalized successor of `layer` from an edited clip list.
///
/// Every edit operation ends here.
pub(crate) fn finish(layer: &Layer, clips: Vec<Clip>) -> Layer {
    let next = layer.with_clips(normalize(clips));
    debug_assert!(
        next.check_gapless().is_ok(),
        "normalized layer {} is not gapless: {:?}",
        next.id,
        next.check_gapless()
    );
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use trimline_clip_model::ClipKind;

    fn clip(start: f64, duration: f64) -> Clip {
        let mut clip = Clip::from_source("c", ClipKind::Video, duration);
        clip.start = start;
        clip
    }

    #[test]
    fn test_empty_is_noop() {
        assert!(normalize(vec![]).is_empty());
    }

    #[test]
    fn test_sorts_and_closes_gaps() {
        let clips = vec![clip(20.0, 3.0), clip(2.0, 5.0), clip(9.0, 1.0)];
        let out = normalize(clips);

        let spans: Vec<(f64, f64)> = out.iter().map(|c| (c.start, c.duration)).collect();
        assert_eq!(spans, vec![(0.0, 5.0), (5.0, 1.0), (6.0, 3.0)]);
    }

    #[test]
    fn test_resolves_overlap_without_touching_duration() {
        let out = normalize(vec![clip(0.0, 7.0), clip(5.0, 5.0)]);
        assert_eq!(out[1].start, 7.0);
        assert_eq!(out[1].duration, 5.0);
    }

    #[test]
    fn test_trims_are_preserved() {
        let mut trimmed = clip(3.0, 4.0);
        trimmed.trim_start = 1.5;
        trimmed.trim_end = 0.5;
        trimmed.original_duration = 6.0;

        let out = normalize(vec![trimmed]);
        assert_eq!(out[0].start, 0.0);
        assert_eq!(out[0].trim_start, 1.5);
        assert_eq!(out[0].trim_end, 0.5);
    }

    #[test]
    fn test_idempotent() {
        let once = normalize(vec![clip(4.0, 0.3), clip(1.0, 0.1), clip(2.5, 0.7)]);
        let twice = normalize(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_equal_starts_keep_order() {
        let a = clip(1.0, 2.0);
        let b = clip(1.0, 3.0);
        let (a_id, b_id) = (a.id, b.id);
        let out = normalize(vec![a, b]);
        assert_eq!(out[0].id, a_id);
        assert_eq!(out[1].id, b_id);
    }
}
