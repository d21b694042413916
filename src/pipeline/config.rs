/// Immutable frame geometry and detection budget for a pipeline.
///
/// The working ("query") resolution is fixed at construction: the smallest
/// power-of-two downscale that brings the longer frame side within
/// `max_query_size`. Bounding the query resolution bounds per-frame
/// detection cost on large frames while preserving aspect ratio; output
/// poses are rescaled back, so callers always see original-frame
/// coordinates.
#[derive(Debug, Clone, Copy)]
pub struct PipelineConfig {
    frame_width: u32,
    frame_height: u32,
    scale: u32,
    query_width: u32,
    query_height: u32,
}

impl PipelineConfig {
    pub fn new(frame_width: u32, frame_height: u32, max_query_size: u32) -> Self {
        let longer = frame_width.max(frame_height);
        let mut scale = 1;
        while longer / scale > max_query_size {
            scale *= 2;
        }
        Self {
            frame_width,
            frame_height,
            scale,
            query_width: frame_width / scale,
            query_height: frame_height / scale,
        }
    }

    /// Power-of-two downscale factor between frame and query space.
    pub fn scale(&self) -> u32 {
        self.scale
    }

    pub fn frame_size(&self) -> (u32, u32) {
        (self.frame_width, self.frame_height)
    }

    /// Working resolution detection and tracking run at.
    pub fn query_size(&self) -> (u32, u32) {
        (self.query_width, self.query_height)
    }

    pub fn is_downscaled(&self) -> bool {
        self.scale > 1
    }
}
