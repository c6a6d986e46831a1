use std::path::Path;
use std::time::Instant;

use crate::detection::domain::face_detector::FaceDetector;
use crate::overlay::domain::frame_annotator::FrameAnnotator;
use crate::overlay::domain::hud;
use crate::pipeline::run_stats::{RunStats, RunSummary, StopReason};
use crate::pipeline::snapshot_writer::SnapshotWriter;
use crate::video::domain::frame_sink::{FrameSink, UserCommand};
use crate::video::domain::video_reader::VideoReader;

/// Callback invoked with the path of each saved snapshot.
pub type SnapshotCallback = Box<dyn FnMut(&Path)>;

/// Runs the detect → annotate → display → poll loop over an opened reader.
///
/// The reader must already be open. Per frame: detect faces, outline
/// them, draw the face count and running FPS, show the frame, then act on
/// at most one user command. The loop ends on end-of-stream, a read
/// error, the quit command or the optional frame limit; in every case,
/// including errors from detection or display, the reader and the sink
/// are closed before `execute` returns.
pub struct LiveDetectionUseCase {
    reader: Box<dyn VideoReader>,
    detector: Box<dyn FaceDetector>,
    annotator: Box<dyn FrameAnnotator>,
    sink: Box<dyn FrameSink>,
    snapshots: Option<SnapshotWriter>,
    frame_limit: Option<u64>,
    on_snapshot: Option<SnapshotCallback>,
}

impl LiveDetectionUseCase {
    pub fn new(
        reader: Box<dyn VideoReader>,
        detector: Box<dyn FaceDetector>,
        annotator: Box<dyn FrameAnnotator>,
        sink: Box<dyn FrameSink>,
    ) -> Self {
        Self {
            reader,
            detector,
            annotator,
            sink,
            snapshots: None,
            frame_limit: None,
            on_snapshot: None,
        }
    }

    /// Enables the snapshot command. Without this it is ignored.
    pub fn with_snapshots(mut self, snapshots: SnapshotWriter) -> Self {
        self.snapshots = Some(snapshots);
        self
    }

    /// Stops after `limit` frames.
    pub fn with_frame_limit(mut self, limit: usize) -> Self {
        self.frame_limit = Some(limit as u64);
        self
    }

    pub fn on_snapshot(mut self, callback: SnapshotCallback) -> Self {
        self.on_snapshot = Some(callback);
        self
    }

    pub fn execute(&mut self) -> Result<RunSummary, Box<dyn std::error::Error>> {
        let mut stats = RunStats::start();
        let outcome = self.run_loop(&mut stats);

        self.reader.close();
        self.sink.close();

        let stop = outcome?;
        Ok(stats.finish(stop))
    }

    fn run_loop(
        &mut self,
        stats: &mut RunStats,
    ) -> Result<StopReason, Box<dyn std::error::Error>> {
        let mut frames = self.reader.frames();

        loop {
            if self.frame_limit.is_some_and(|limit| stats.frames() >= limit) {
                return Ok(StopReason::FrameLimit);
            }

            let mut frame = match frames.next() {
                None => return Ok(StopReason::EndOfStream),
                Some(Err(e)) => return Ok(StopReason::ReadError(e.to_string())),
                Some(Ok(frame)) => frame,
            };

            let detect_start = Instant::now();
            let regions = self.detector.detect(&frame)?;
            log::debug!(
                "frame {}: {} face(s) in {:.1}ms",
                frame.index(),
                regions.len(),
                detect_start.elapsed().as_secs_f64() * 1000.0
            );
            stats.record_frame(regions.len());

            let labels = hud::hud_labels(regions.len(), stats.running_fps());
            self.annotator.annotate(&mut frame, &regions, &labels)?;
            self.sink.show(&frame)?;

            match self.sink.poll_command()? {
                Some(UserCommand::Quit) => return Ok(StopReason::Quit),
                Some(UserCommand::Snapshot) => {
                    if let Some(snapshots) = &self.snapshots {
                        let path = snapshots.save(&frame, stats.faces())?;
                        if let Some(callback) = self.on_snapshot.as_mut() {
                            callback(&path);
                        }
                    }
                }
                None => {}
            }
        }
    }
}
