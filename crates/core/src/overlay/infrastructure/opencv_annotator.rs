use opencv::core::{Point, Rect, Scalar};
use opencv::imgproc;
use opencv::prelude::*;

use crate::overlay::domain::frame_annotator::FrameAnnotator;
use crate::overlay::domain::hud::TextLabel;
use crate::shared::frame::Frame;
use crate::shared::region::Region;
use crate::video::infrastructure::mat_convert;

pub const DEFAULT_BOX_COLOR: [u8; 3] = [0, 255, 0];
pub const DEFAULT_BOX_THICKNESS: i32 = 2;
pub const DEFAULT_TEXT_COLOR: [u8; 3] = [0, 0, 255];
pub const DEFAULT_FONT_SCALE: f64 = 0.6;
pub const DEFAULT_TEXT_THICKNESS: i32 = 2;

/// Draws face rectangles and Hershey-simplex labels with OpenCV.
///
/// Each region is outlined from `(x, y)` to `(x + width, y + height)`
/// with the stroke centred on that edge. The frame is copied into one
/// `Mat`, drawn on, and copied back once per call. The `Mat` keeps RGB
/// order, so colors are given as RGB.
pub struct OpenCvAnnotator {
    box_color: [u8; 3],
    box_thickness: i32,
    text_color: [u8; 3],
    font_scale: f64,
    text_thickness: i32,
}

impl OpenCvAnnotator {
    pub fn new(box_color: [u8; 3], box_thickness: i32) -> Self {
        Self {
            box_color,
            box_thickness: box_thickness.max(1),
            text_color: DEFAULT_TEXT_COLOR,
            font_scale: DEFAULT_FONT_SCALE,
            text_thickness: DEFAULT_TEXT_THICKNESS,
        }
    }

    pub fn with_text_style(mut self, color: [u8; 3], font_scale: f64, thickness: i32) -> Self {
        self.text_color = color;
        self.font_scale = font_scale;
        self.text_thickness = thickness.max(1);
        self
    }
}

impl Default for OpenCvAnnotator {
    fn default() -> Self {
        Self::new(DEFAULT_BOX_COLOR, DEFAULT_BOX_THICKNESS)
    }
}

fn scalar([r, g, b]: [u8; 3]) -> Scalar {
    Scalar::new(r as f64, g as f64, b as f64, 0.0)
}

impl FrameAnnotator for OpenCvAnnotator {
    fn annotate(
        &self,
        frame: &mut Frame,
        regions: &[Region],
        labels: &[TextLabel],
    ) -> Result<(), Box<dyn std::error::Error>> {
        if regions.is_empty() && labels.is_empty() {
            return Ok(());
        }

        let mut mat = mat_convert::rgb_mat(frame)?;
        for region in regions {
            // A `Rect` ends one pixel before its bottom-right corner.
            let rect = Rect::new(region.x, region.y, region.width + 1, region.height + 1);
            imgproc::rectangle(
                &mut mat,
                rect,
                scalar(self.box_color),
                self.box_thickness,
                imgproc::LINE_8,
                0,
            )?;
        }
        for label in labels {
            imgproc::put_text(
                &mut mat,
                &label.text,
                Point::new(label.origin.0, label.origin.1),
                imgproc::FONT_HERSHEY_SIMPLEX,
                self.font_scale,
                scalar(self.text_color),
                self.text_thickness,
                imgproc::LINE_8,
                false,
            )?;
        }
        frame.data_mut().copy_from_slice(mat.data_bytes()?);
        Ok(())
    }
}
