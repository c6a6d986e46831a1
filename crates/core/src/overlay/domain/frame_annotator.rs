use crate::overlay::domain::hud::TextLabel;
use crate::shared::frame::Frame;
use crate::shared::region::Region;

/// Domain interface for drawing detections and HUD text onto a frame.
///
/// Implementations modify the frame in place, outlines first, then labels.
pub trait FrameAnnotator {
    fn annotate(
        &self,
        frame: &mut Frame,
        regions: &[Region],
        labels: &[TextLabel],
    ) -> Result<(), Box<dyn std::error::Error>>;
}
