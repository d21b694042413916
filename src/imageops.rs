//! Image primitives the pipeline runs on.
//!
//! Plain CPU implementations over `ndarray` buffers: RGB→luma conversion,
//! integer-factor downsampling, polygon mask rasterization, and pose
//! scaling. Deliberately small; anything smarter belongs to the detector
//! and tracker backends.

mod frame;
mod gray;
mod mask;
mod points;

pub use frame::{Frame, FrameError};
pub use gray::GrayImage;
pub use mask::Mask;
pub use points::{Point2f, Pose, scale_points};
