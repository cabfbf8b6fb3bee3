//! Trimline Clip Engine
//!
//! Keeps a layer of clips internally consistent while it is edited:
//! - **Normalize:** Restore the sorted, gapless invariant after any mutation
//! - **Move / Resize:** Direct field updates, optionally rolling into the neighbor
//! - **Split:** Cut one clip into two contiguous clips over the same source
//! - **Ripple delete:** Remove a clip and close the gap it leaves
//! - **Snap / Fit:** Read-only queries for drag snapping and auto zoom
//!
//! This crate is pure computation: no I/O, no shared state.
//! Every operation takes a layer by reference and returns a new one.

pub mod edit;
pub mod engine;
pub mod limits;
pub mod normalize;
pub mod ripple;
pub mod session;
pub mod snap;
pub mod split;
pub mod trim;
pub mod zoom_fit;

pub use edit::{move_or_resize, resize_rolling, ClipPatch, RollingResize};
pub use engine::ClipEngine;
pub use limits::{EditLimits, ZoomLimits};
pub use normalize::normalize;
pub use ripple::delete_ripple;
pub use session::{load_timeline, EditCommand, EditSession, SessionError};
pub use snap::{drag_target, nearest_snap, snap_points, DragTarget};
pub use split::{split, SplitError};
pub use trim::{propose_edge_trim, ClipEdge};
pub use zoom_fit::fit_zoom;
