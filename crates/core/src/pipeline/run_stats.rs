use std::fmt;
use std::time::{Duration, Instant};

/// Why the frame loop stopped. None of these are failures.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StopReason {
    EndOfStream,
    ReadError(String),
    Quit,
    FrameLimit,
}

/// Counters for one run of the frame loop. Only ever increase.
#[derive(Clone, Debug)]
pub struct RunStats {
    frames: u64,
    faces: u64,
    started: Instant,
}

impl RunStats {
    pub fn start() -> Self {
        Self::started_at(Instant::now())
    }

    pub fn started_at(started: Instant) -> Self {
        Self {
            frames: 0,
            faces: 0,
            started,
        }
    }

    pub fn record_frame(&mut self, faces: usize) {
        self.frames += 1;
        self.faces += faces as u64;
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Faces detected across all frames so far.
    pub fn faces(&self) -> u64 {
        self.faces
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Average frames per second since the run started.
    pub fn running_fps(&self) -> f64 {
        average_fps(self.frames, self.elapsed())
    }

    pub fn finish(self, stop: StopReason) -> RunSummary {
        RunSummary {
            frames: self.frames,
            faces: self.faces,
            elapsed: self.elapsed(),
            stop,
        }
    }
}

/// Frames divided by elapsed seconds; zero when no time has passed.
pub fn average_fps(frames: u64, elapsed: Duration) -> f64 {
    let secs = elapsed.as_secs_f64();
    if secs > 0.0 {
        frames as f64 / secs
    } else {
        0.0
    }
}

/// Final report of a run.
#[derive(Clone, Debug, PartialEq)]
pub struct RunSummary {
    pub frames: u64,
    pub faces: u64,
    pub elapsed: Duration,
    pub stop: StopReason,
}

impl RunSummary {
    pub fn average_fps(&self) -> f64 {
        average_fps(self.frames, self.elapsed)
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Processed {} frames in {:.2} seconds (Avg FPS: {:.2})",
            self.frames,
            self.elapsed.as_secs_f64(),
            self.average_fps()
        )?;
        write!(f, "Total faces detected: {}", self.faces)
    }
}
