use std::fmt;

use crate::shared::input_source::InputSource;

/// Properties reported by a capture source once it is open.
///
/// Cameras usually report `total_frames == 0`; some backends also
/// report `fps == 0.0` when the rate is unknown.
#[derive(Clone, Debug, PartialEq)]
pub struct VideoMetadata {
    pub width: u32,
    pub height: u32,
    pub fps: f64,
    pub total_frames: usize,
    pub source: InputSource,
}

impl VideoMetadata {
    /// True when the source announced a finite frame count.
    pub fn is_bounded(&self) -> bool {
        self.total_frames > 0
    }
}

impl fmt::Display for VideoMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}x{} @ {:.1} fps",
            self.source, self.width, self.height, self.fps
        )?;
        if self.is_bounded() {
            write!(f, ", {} frames", self.total_frames)?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata(source: InputSource, total_frames: usize) -> VideoMetadata {
        VideoMetadata {
            width: 640,
            height: 480,
            fps: 30.0,
            total_frames,
            source,
        }
    }

    #[test]
    fn test_camera_is_unbounded() {
        let meta = metadata(InputSource::Device(0), 0);
        assert!(!meta.is_bounded());
        assert_eq!(meta.to_string(), "camera 0 (640x480 @ 30.0 fps)");
    }

    #[test]
    fn test_file_reports_frame_count() {
        let meta = metadata(InputSource::Path("clip.mp4".into()), 300);
        assert!(meta.is_bounded());
        assert_eq!(meta.to_string(), "clip.mp4 (640x480 @ 30.0 fps, 300 frames)");
    }
}
