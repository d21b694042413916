//! Capability contracts connecting detection and tracking backends to the
//! pipeline.
//!
//! The pipeline never looks inside its collaborators: detection is anything
//! that maps an image to recognitions, tracking is anything that follows
//! one object across frames. Both are supplied as trait implementations.

mod detector;
mod tracker;

pub use detector::{DescriptorRegistrar, Detector, KeyPoint, Recognition, ReferenceDescriptors};
pub use tracker::ObjectTracker;
