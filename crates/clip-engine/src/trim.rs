//! Edge trims: turn a time delta on one clip edge into a full resize proposal.
//!
//! Pixel-to-time conversion happens upstream; this is the time-domain half.
//! The proposal is bounded by the clip's own source: an edge can be pulled
//! out only as far as its trim offset has media hidden, and pushed in only
//! until the clip reaches the minimum duration.

use serde::{Deserialize, Serialize};
use trimline_clip_model::Clip;

use crate::edit::RollingResize;
use crate::limits::EditLimits;

/// Which edge of a clip is being dragged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClipEdge {
    Start,
    End,
}

/// Propose new geometry for `clip` after moving `edge` by `delta` seconds.
///
/// Positive deltas move the edge later in time. The delta is clamped so the
/// result keeps non-negative trims, a non-negative start, and at least
/// `limits.min_clip_duration` of visible media.
pub fn propose_edge_trim(
    clip: &Clip,
    edge: ClipEdge,
    delta: f64,
    limits: &EditLimits,
) -> RollingResize {
    let shrink_room = (clip.duration - limits.min_clip_duration).max(0.0);

    match edge {
        ClipEdge::End => {
            let delta = bounded(delta, -shrink_room, clip.trim_end.max(0.0));
            RollingResize {
                start: clip.start,
                duration: clip.duration + delta,
                trim_start: clip.trim_start,
                trim_end: clip.trim_end - delta,
            }
        }
        ClipEdge::Start => {
            let grow_room = clip.trim_start.max(0.0).min(clip.start.max(0.0));
            let delta = bounded(delta, -grow_room, shrink_room);
            RollingResize {
                start: clip.start + delta,
                duration: clip.duration - delta,
                trim_start: clip.trim_start + delta,
                trim_end: clip.trim_end,
            }
        }
    }
}

fn bounded(value: f64, lo: f64, hi: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.max(lo).min(hi)
}

#[cfg(test)]
mod tests {
    use super::*;
    use trimline_clip_model::ClipKind;

    fn trimmed(start: f64, trim_start: f64, duration: f64, trim_end: f64) -> Clip {
        let mut clip = Clip::from_source("c", ClipKind::Video, trim_start + duration + trim_end);
        clip.start = start;
        clip.trim_start = trim_start;
        clip.duration = duration;
        clip.trim_end = trim_end;
        clip
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_end_extends_into_hidden_tail() {
        let clip = trimmed(0.0, 0.0, 5.0, 3.0);
        let p = propose_edge_trim(&clip, ClipEdge::End, 2.0, &EditLimits::default());
        assert_close(p.start, 0.0);
        assert_close(p.duration, 7.0);
        assert_close(p.trim_end, 1.0);
    }

    #[test]
    fn test_end_cannot_extend_past_source() {
        let clip = trimmed(0.0, 0.0, 5.0, 1.0);
        let p = propose_edge_trim(&clip, ClipEdge::End, 4.0, &EditLimits::default());
        assert_close(p.duration, 6.0);
        assert_close(p.trim_end, 0.0);
    }

    #[test]
    fn test_end_shrink_stops_at_min_duration() {
        let clip = trimmed(0.0, 0.0, 5.0, 0.0);
        let limits = EditLimits::default();
        let p = propose_edge_trim(&clip, ClipEdge::End, -10.0, &limits);
        assert_close(p.duration, limits.min_clip_duration);
        assert_close(p.trim_end, 5.0 - limits.min_clip_duration);
    }

    #[test]
    fn test_start_trim_keeps_end_fixed() {
        let clip = trimmed(4.0, 0.0, 6.0, 0.0);
        let p = propose_edge_trim(&clip, ClipEdge::Start, 1.5, &EditLimits::default());
        assert_close(p.start, 5.5);
        assert_close(p.end(), 10.0);
        assert_close(p.trim_start, 1.5);
    }

    #[test]
    fn test_start_extend_bounded_by_hidden_head_and_zero() {
        let clip = trimmed(4.0, 2.0, 6.0, 0.0);
        let p = propose_edge_trim(&clip, ClipEdge::Start, -5.0, &EditLimits::default());
        assert_close(p.start, 2.0);
        assert_close(p.trim_start, 0.0);

        let clip = trimmed(1.0, 3.0, 6.0, 0.0);
        let p = propose_edge_trim(&clip, ClipEdge::Start, -5.0, &EditLimits::default());
        assert_close(p.start, 0.0);
        assert_close(p.trim_start, 2.0);
    }

    #[test]
    fn test_proposal_conserves_source() {
        let clip = trimmed(3.0, 1.0, 4.0, 2.0);
        for (edge, delta) in [
            (ClipEdge::Start, 0.7),
            (ClipEdge::Start, -0.4),
            (ClipEdge::End, 1.3),
            (ClipEdge::End, -2.2),
        ] {
            let p = propose_edge_trim(&clip, edge, delta, &EditLimits::default());
            assert_close(p.trim_start + p.duration + p.trim_end, 7.0);
        }
    }
}
