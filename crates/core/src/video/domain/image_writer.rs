use std::path::Path;

use crate::shared::frame::Frame;

/// Writes a single frame to an image file. The format follows the extension.
pub trait ImageWriter {
    fn write(&self, path: &Path, frame: &Frame) -> Result<(), Box<dyn std::error::Error>>;
}
