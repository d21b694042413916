use ndarray::{Array2, Zip};

use super::frame::Frame;
use super::mask::Mask;

/// Single-channel 8-bit image backed by a row-major `Array2`.
///
/// This is the working buffer detection and tracking run on: the pipeline
/// converts each incoming RGB frame to luma, optionally downsamples it, and
/// hands it to the collaborators.
#[derive(Debug, Clone)]
pub struct GrayImage {
    data: Array2<u8>,
}

impl GrayImage {
    pub fn new(data: Array2<u8>) -> Self {
        Self { data }
    }

    pub fn zeros(width: u32, height: u32) -> Self {
        Self {
            data: Array2::zeros((height as usize, width as usize)),
        }
    }

    /// Convert an RGB frame to luma using the integer BT.601 approximation
    /// (77, 150, 29) / 256. The weights sum to 256, so achromatic pixels map
    /// to their own value exactly.
    pub fn from_rgb(frame: &Frame) -> Self {
        let (w, h) = (frame.width() as usize, frame.height() as usize);
        let src = frame.data();
        let mut data = Array2::zeros((h, w));
        for y in 0..h {
            for x in 0..w {
                let i = (y * w + x) * 3;
                let (r, g, b) = (src[i] as u32, src[i + 1] as u32, src[i + 2] as u32);
                data[[y, x]] = ((77 * r + 150 * g + 29 * b) >> 8) as u8;
            }
        }
        Self { data }
    }

    /// Box-average downsampling by an integer factor. Output dimensions are
    /// the integer quotients; trailing rows/columns that do not fill a whole
    /// block are dropped.
    pub fn downsample(&self, factor: u32) -> GrayImage {
        let f = factor as usize;
        let (h, w) = self.data.dim();
        let (oh, ow) = (h / f, w / f);
        let mut out = Array2::zeros((oh, ow));
        for oy in 0..oh {
            for ox in 0..ow {
                let mut sum = 0u32;
                for dy in 0..f {
                    for dx in 0..f {
                        sum += self.data[[oy * f + dy, ox * f + dx]] as u32;
                    }
                }
                out[[oy, ox]] = (sum / (f * f) as u32) as u8;
            }
        }
        GrayImage { data: out }
    }

    /// Saturate every claimed region: bitwise OR with a binary mask, so
    /// masked pixels read as featureless white to the detector.
    pub fn or_mask(&mut self, mask: &Mask) {
        Zip::from(&mut self.data)
            .and(mask.data())
            .for_each(|p, &m| *p |= m);
    }

    pub fn pixel(&self, x: u32, y: u32) -> u8 {
        self.data[[y as usize, x as usize]]
    }

    pub fn width(&self) -> u32 {
        self.data.ncols() as u32
    }

    pub fn height(&self) -> u32 {
        self.data.nrows() as u32
    }

    pub fn data(&self) -> &Array2<u8> {
        &self.data
    }
}
