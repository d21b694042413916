//! Markerless augmented-reality tracking pipeline.
//!
//! Coordinates an expensive reference detector with cheap per-object
//! trackers across video frames: each registered reference image is
//! detected once, handed to its own tracker, and followed frame to frame
//! until the tracker loses it. Regions already claimed by a tracked object
//! are masked out of the detection input, so the detector only spends its
//! budget on unclaimed image area.
//!
//! # Quick start
//!
//! ```ignore
//! use markerless_rs::{Frame, MarkerlessPipeline, PipelineConfig};
//!
//! // MyDetector: Detector, MyTracker: ObjectTracker + Default
//! let config = PipelineConfig::new(1920, 1080, 960);
//! let mut pipeline: MarkerlessPipeline<MyDetector, MyTracker> =
//!     MarkerlessPipeline::new(MyDetector::load()?, config);
//! pipeline.add(&reference_image)?;
//!
//! for (data, width, height) in frames {
//!     let frame = Frame::new(&data, width, height)?;
//!     for item in pipeline.process(&frame) {
//!         println!("reference {} at {:?}", item.ref_id, item.pose);
//!     }
//! }
//! ```
//!
//! # Concepts
//! - [`Detector`] / [`ObjectTracker`]: the two collaborator contracts;
//!   bring your own backends.
//! - [`MarkerlessPipeline`]: the per-frame coordination and its
//!   detected/tracked/lost state machine.
//! - [`PipelineConfig`]: fixed frame geometry and the power-of-two
//!   detection downscale; output poses are always in original-frame
//!   coordinates.

pub mod imageops;
pub mod integration;
pub mod pipeline;

pub use imageops::{Frame, FrameError, GrayImage, Mask, Point2f, Pose, scale_points};
pub use integration::{
    DescriptorRegistrar, Detector, KeyPoint, ObjectTracker, Recognition, ReferenceDescriptors,
};
pub use pipeline::{MarkerlessPipeline, PipelineConfig, QueryItem, TrackStatus};
