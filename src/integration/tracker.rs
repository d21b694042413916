//! Trait for per-object visual trackers.

use crate::imageops::{GrayImage, Point2f};

/// Trait for trackers that follow one already-located object across frames
/// without re-detecting it.
///
/// The pipeline owns exactly one tracker per tracked object, constructed
/// via `Default` when a recognition is admitted. It calls `start` once with
/// the detected pose, then `keep_tracking` on every subsequent frame until
/// that returns `false`. After a failure the tracker is dropped, never
/// restarted.
pub trait ObjectTracker {
    /// Initialize tracking state on the working image at the detected pose.
    fn start(&mut self, image: &GrayImage, pose: &[Point2f]);

    /// Advance one frame. Returns `false` when the object can no longer be
    /// followed.
    fn keep_tracking(&mut self, image: &GrayImage) -> bool;

    /// The current computed pose, in working-image coordinates. Valid after
    /// `start` or a successful `keep_tracking` step.
    fn position(&self) -> &[Point2f];
}
