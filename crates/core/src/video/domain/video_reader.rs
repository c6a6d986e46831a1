use crate::shared::frame::Frame;
use crate::shared::input_source::InputSource;
use crate::shared::video_metadata::VideoMetadata;

/// Pulls frames from a camera, video file or stream.
///
/// Implementations handle device and codec details while the pipeline
/// works with the abstract `Frame` and `VideoMetadata` types.
pub trait VideoReader {
    /// Opens the source and returns its metadata.
    fn open(&mut self, source: &InputSource) -> Result<VideoMetadata, Box<dyn std::error::Error>>;

    /// Returns an iterator over frames in capture order.
    ///
    /// The iterator ends at end-of-stream. A read failure is yielded as an
    /// `Err` item; callers treat it as the end of the stream.
    fn frames(
        &mut self,
    ) -> Box<dyn Iterator<Item = Result<Frame, Box<dyn std::error::Error>>> + '_>;

    /// Releases the device or file handle. Safe to call more than once.
    fn close(&mut self);
}
