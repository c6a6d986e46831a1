use opencv::core::Mat;
use opencv::prelude::*;
use opencv::videoio::{self, VideoCapture};
use thiserror::Error;

use crate::shared::frame::Frame;
use crate::shared::input_source::InputSource;
use crate::shared::video_metadata::VideoMetadata;
use crate::video::domain::video_reader::VideoReader;
use crate::video::infrastructure::mat_convert;

#[derive(Error, Debug)]
pub enum CaptureError {
    #[error("cannot open video source {source_desc}: {cause}")]
    Backend {
        source_desc: InputSource,
        #[source]
        cause: opencv::Error,
    },
    #[error("cannot open video source {0}")]
    NotOpened(InputSource),
    #[error("capture has not been opened")]
    Closed,
}

/// Reads frames from a camera index or a file/stream URL via OpenCV
/// `VideoCapture`, converting each BGR frame to RGB.
pub struct OpenCvCaptureReader {
    capture: Option<VideoCapture>,
}

impl OpenCvCaptureReader {
    pub fn new() -> Self {
        Self { capture: None }
    }
}

impl Default for OpenCvCaptureReader {
    fn default() -> Self {
        Self::new()
    }
}

impl VideoReader for OpenCvCaptureReader {
    fn open(&mut self, source: &InputSource) -> Result<VideoMetadata, Box<dyn std::error::Error>> {
        self.close();

        let backend_err = |cause| CaptureError::Backend {
            source_desc: source.clone(),
            cause,
        };
        let capture = match source {
            InputSource::Device(index) => VideoCapture::new(*index, videoio::CAP_ANY),
            InputSource::Path(path) => VideoCapture::from_file(path, videoio::CAP_ANY),
        }
        .map_err(backend_err)?;
        if !capture.is_opened().map_err(backend_err)? {
            return Err(CaptureError::NotOpened(source.clone()).into());
        }

        let prop = |id| capture.get(id).unwrap_or(0.0);
        let metadata = VideoMetadata {
            width: prop(videoio::CAP_PROP_FRAME_WIDTH).max(0.0) as u32,
            height: prop(videoio::CAP_PROP_FRAME_HEIGHT).max(0.0) as u32,
            fps: prop(videoio::CAP_PROP_FPS).max(0.0),
            total_frames: prop(videoio::CAP_PROP_FRAME_COUNT).max(0.0) as usize,
            source: source.clone(),
        };

        self.capture = Some(capture);
        Ok(metadata)
    }

    fn frames(
        &mut self,
    ) -> Box<dyn Iterator<Item = Result<Frame, Box<dyn std::error::Error>>> + '_> {
        let Some(capture) = self.capture.as_mut() else {
            return Box::new(std::iter::once(Err(CaptureError::Closed.into())));
        };

        Box::new(CaptureFrameIter {
            capture,
            buffer: Mat::default(),
            frame_index: 0,
            done: false,
        })
    }

    fn close(&mut self) {
        if let Some(mut capture) = self.capture.take() {
            if let Err(e) = capture.release() {
                log::warn!("Failed to release capture: {e}");
            }
        }
    }
}

impl Drop for OpenCvCaptureReader {
    fn drop(&mut self) {
        self.close();
    }
}

struct CaptureFrameIter<'a> {
    capture: &'a mut VideoCapture,
    buffer: Mat,
    frame_index: usize,
    done: bool,
}

impl Iterator for CaptureFrameIter<'_> {
    type Item = Result<Frame, Box<dyn std::error::Error>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let grabbed = match self.capture.read(&mut self.buffer) {
            Ok(grabbed) => grabbed,
            Err(e) => {
                self.done = true;
                return Some(Err(e.into()));
            }
        };
        if !grabbed || self.buffer.empty() {
            self.done = true;
            return None;
        }

        let index = self.frame_index;
        self.frame_index += 1;
        Some(mat_convert::frame_from_bgr(&self.buffer, index).map_err(Into::into))
    }
}
