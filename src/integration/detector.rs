//! Traits for reference-image recognition backends.

use ndarray::Array2;

use crate::imageops::{GrayImage, Point2f, Pose};

/// One recognized reference object in a query image.
#[derive(Debug, Clone)]
pub struct Recognition {
    /// Identity of the matched reference, as assigned by the detector at
    /// registration time.
    pub ref_id: usize,
    /// Projected contour of the reference in query-image coordinates.
    pub pose: Pose,
}

/// A salient point extracted from a reference image.
#[derive(Debug, Clone, Copy)]
pub struct KeyPoint {
    pub pt: Point2f,
    pub size: f32,
    pub angle: f32,
    pub response: f32,
}

/// Precomputed registration payload: descriptors, their keypoints, and the
/// reference image dimensions they were extracted from.
#[derive(Debug, Clone)]
pub struct ReferenceDescriptors {
    /// One binary descriptor per row, aligned with `keypoints`.
    pub descriptors: Array2<u8>,
    pub keypoints: Vec<KeyPoint>,
    pub width: u32,
    pub height: u32,
}

/// Trait for reference-image recognition backends.
///
/// Implement this trait to connect any feature detector/matcher to the
/// pipeline. The pipeline registers reference images up front and then
/// queries every frame (masked where objects are already claimed).
///
/// # Example
///
/// ```ignore
/// use markerless_rs::{Detector, GrayImage, Recognition};
///
/// struct MyDetector {
///     // Your feature index here
/// }
///
/// impl Detector for MyDetector {
///     type Error = std::io::Error;
///
///     fn query(&mut self, image: &GrayImage) -> Vec<Recognition> {
///         // Match stored references against the image
///         vec![]
///     }
///
///     fn add_reference(&mut self, image: &GrayImage) -> Result<(), Self::Error> {
///         // Extract and store descriptors
///         Ok(())
///     }
/// }
/// ```
pub trait Detector {
    /// Error type for registration failures.
    type Error;

    /// Find registered references in the query image.
    ///
    /// Every reported recognition is admitted by the pipeline as a new
    /// tracked object, so a backend must not report references inside
    /// saturated (masked) regions.
    fn query(&mut self, image: &GrayImage) -> Vec<Recognition>;

    /// Register a new reference image by extracting descriptors from it.
    ///
    /// Registering the same image twice creates two independent references;
    /// deduplication is not this layer's concern.
    fn add_reference(&mut self, image: &GrayImage) -> Result<(), Self::Error>;
}

/// Capability refinement for detectors that can ingest precomputed
/// descriptors directly, skipping re-extraction.
///
/// Backends that persist or share descriptor sets implement this in
/// addition to [`Detector`]; the pipeline exposes precomputed registration
/// only when the bound is satisfied, so a missing capability is a compile
/// error rather than a runtime downcast.
pub trait DescriptorRegistrar: Detector {
    /// Register a reference from an externally supplied descriptor set.
    fn add_reference_data(&mut self, reference: ReferenceDescriptors) -> Result<(), Self::Error>;
}
