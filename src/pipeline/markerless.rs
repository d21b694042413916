//! Per-frame detect/track coordination.

use tracing::debug;

use crate::imageops::{Frame, GrayImage, Mask, scale_points};
use crate::integration::{DescriptorRegistrar, Detector, ObjectTracker, ReferenceDescriptors};

use super::config::PipelineConfig;
use super::slot::{QueryItem, TrackingSlot};
use super::status::TrackStatus;

/// Markerless AR tracking pipeline.
///
/// Coordinates one detector with a dynamic set of per-object trackers.
/// Each frame, already-claimed regions are masked out of the detection
/// input, new recognitions are admitted as tracked objects, every object's
/// tracker is advanced one step, and the poses of everything still tracked
/// are returned in original-frame coordinates.
///
/// Detection runs in a working space bounded by [`PipelineConfig`]; a
/// pipeline instance is tied to one frame geometry for its lifetime.
pub struct MarkerlessPipeline<D, T> {
    detector: D,
    slots: Vec<TrackingSlot<T>>,
    config: PipelineConfig,
}

impl<D, T> MarkerlessPipeline<D, T>
where
    D: Detector,
    T: ObjectTracker + Default,
{
    /// Create a pipeline around a detector backend and a fixed frame
    /// geometry.
    pub fn new(detector: D, config: PipelineConfig) -> Self {
        Self {
            detector,
            slots: Vec::new(),
            config,
        }
    }

    /// Register one reference image with the detector.
    ///
    /// Extraction failures propagate unchanged; nothing is retried at this
    /// layer. Registering the same image twice creates two independent
    /// references.
    pub fn add(&mut self, image: &GrayImage) -> Result<(), D::Error> {
        self.detector.add_reference(image)
    }

    /// Register several reference images; the first failure aborts and
    /// propagates.
    pub fn add_all(&mut self, images: &[GrayImage]) -> Result<(), D::Error> {
        for image in images {
            self.detector.add_reference(image)?;
        }
        Ok(())
    }

    /// Process one color frame and return the pose of every tracked object,
    /// in original-frame coordinates.
    ///
    /// An empty frame yields an empty result and mutates nothing. Only
    /// objects that finish the frame `Tracked` are emitted, in slot
    /// (admission) order; an object whose tracker fails this frame is
    /// dropped from the result and from all future frames, until a fresh
    /// detection re-admits it.
    pub fn process(&mut self, frame: &Frame) -> Vec<QueryItem> {
        if frame.is_empty() {
            return Vec::new();
        }

        let mut query = GrayImage::from_rgb(frame);
        if self.config.is_downscaled() {
            query = query.downsample(self.config.scale());
        }

        // Detection runs on a copy with every claimed region saturated, so
        // the detector spends its budget only on unclaimed image area. The
        // unmasked query stays the tracking input.
        let recognized = if self.slots.is_empty() {
            self.detector.query(&query)
        } else {
            let (qw, qh) = (query.width(), query.height());
            let mut coverage = Mask::zeros(qw, qh);
            for slot in &self.slots {
                coverage.or_assign(&Mask::from_polygon(qw, qh, &slot.object.pose));
            }
            let mut masked = query.clone();
            masked.or_mask(&coverage);
            self.detector.query(&masked)
        };

        if !recognized.is_empty() {
            debug!(count = recognized.len(), "admitting new detections");
        }
        for recognition in recognized {
            self.slots.push(TrackingSlot::admit(recognition));
        }

        // Advance every slot one step and rebuild the slot set from the
        // survivors: keep tracked, drop lost.
        let mut result = Vec::new();
        let mut survivors = Vec::with_capacity(self.slots.len());
        for mut slot in self.slots.drain(..) {
            let alive = match slot.object.status {
                TrackStatus::Detected => {
                    slot.tracker.start(&query, &slot.object.pose);
                    slot.object.status = TrackStatus::Tracked;
                    true
                }
                TrackStatus::Tracked => {
                    let ok = slot.tracker.keep_tracking(&query);
                    if ok {
                        slot.object.pose = slot.tracker.position().to_vec();
                    }
                    ok
                }
                // transitional; never carried across frames
                TrackStatus::Lost => false,
            };

            if alive {
                let pose = if self.config.is_downscaled() {
                    scale_points(&slot.object.pose, self.config.scale() as f32)
                } else {
                    slot.object.pose.clone()
                };
                result.push(QueryItem {
                    ref_id: slot.object.ref_id,
                    pose,
                    status: TrackStatus::Tracked,
                });
                survivors.push(slot);
            } else {
                debug!(ref_id = slot.object.ref_id, "object lost");
            }
        }
        self.slots = survivors;

        result
    }

    /// Number of objects currently claimed by a slot.
    pub fn active_slots(&self) -> usize {
        self.slots.len()
    }

    pub fn config(&self) -> PipelineConfig {
        self.config
    }

    /// Get a reference to the underlying detector.
    pub fn detector(&self) -> &D {
        &self.detector
    }

    /// Get a mutable reference to the underlying detector.
    pub fn detector_mut(&mut self) -> &mut D {
        &mut self.detector
    }
}

impl<D, T> MarkerlessPipeline<D, T>
where
    D: DescriptorRegistrar,
    T: ObjectTracker + Default,
{
    /// Register a reference from precomputed descriptors, skipping
    /// re-extraction. Available only for detector backends that implement
    /// [`DescriptorRegistrar`].
    pub fn add_precomputed(&mut self, reference: ReferenceDescriptors) -> Result<(), D::Error> {
        self.detector.add_reference_data(reference)
    }
}
