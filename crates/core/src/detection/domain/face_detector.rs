use crate::shared::frame::Frame;
use crate::shared::region::Region;

/// Domain interface for face detection.
///
/// Returns one rectangle per face, in the detector's own order.
/// `&mut self` lets implementations reuse scratch buffers across frames.
pub trait FaceDetector {
    fn detect(&mut self, frame: &Frame) -> Result<Vec<Region>, Box<dyn std::error::Error>>;
}
