//! Live face detection for cameras and video files.
//!
//! Domain traits (`FaceDetector`, `VideoReader`, `FrameSink`, ...) live in
//! each module's `domain`; OpenCV, `image` and filesystem adapters live in
//! `infrastructure`. [`pipeline::live_detection_use_case`] wires them into
//! the frame loop.

pub mod detection;
pub mod overlay;
pub mod pipeline;
pub mod shared;
pub mod video;
