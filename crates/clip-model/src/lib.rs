//! Trimline Clip Model
//!
//! Defines the core data contracts for the timeline clip engine:
//! - **Clip:** An interval of source media placed on a layer, with trim offsets
//! - **Layer:** An ordered, gapless sequence of clips on one track
//! - **Timeline:** The document holding every layer of a project
//!
//! All times are `f64` seconds. Two times closer than [`TIME_EPSILON`] are
//! considered equal; the layer invariants are stated against that tolerance.

pub mod clip;
pub mod id;
pub mod layer;
pub mod timeline;

pub use clip::*;
pub use id::*;
pub use layer::*;
pub use timeline::*;

/// Tolerance (seconds) for every "same point in time" decision.
///
/// Neighbor matching, the gapless check, and trim conservation all use this
/// value and nothing else.
pub const TIME_EPSILON: f64 = 1e-4;

/// Whether two times are equal within [`TIME_EPSILON`].
#[inline]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < TIME_EPSILON
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approx_eq_tolerance() {
        assert!(approx_eq(5.0, 5.0 + TIME_EPSILON / 2.0));
        assert!(!approx_eq(5.0, 5.0 + TIME_EPSILON * 2.0));
        assert!(approx_eq(0.1 + 0.2, 0.3));
    }
}
