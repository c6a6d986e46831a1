use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use facecam_core::detection::domain::detection_params::DetectionParams;
use facecam_core::detection::domain::face_detector::FaceDetector;
use facecam_core::detection::infrastructure::cascade_face_detector::CascadeFaceDetector;
use facecam_core::detection::infrastructure::cascade_resolver::{self, CascadeLocations};
use facecam_core::overlay::infrastructure::opencv_annotator::OpenCvAnnotator;
use facecam_core::pipeline::live_detection_use_case::LiveDetectionUseCase;
use facecam_core::pipeline::run_stats::StopReason;
use facecam_core::pipeline::snapshot_writer::SnapshotWriter;
use facecam_core::shared::constants::{
    DEFAULT_MIN_NEIGHBORS, DEFAULT_SCALE_FACTOR, QUIT_KEY, SNAPSHOT_KEY, WINDOW_TITLE,
};
use facecam_core::shared::input_source::InputSource;
use facecam_core::shared::settings::Settings;
use facecam_core::video::domain::frame_sink::FrameSink;
use facecam_core::video::domain::video_reader::VideoReader;
use facecam_core::video::infrastructure::headless_frame_sink::HeadlessFrameSink;
use facecam_core::video::infrastructure::highgui_frame_sink::HighguiFrameSink;
use facecam_core::video::infrastructure::image_file_writer::ImageFileWriter;
use facecam_core::video::infrastructure::opencv_capture_reader::OpenCvCaptureReader;

/// Real-time face detection on a camera or video file using Haar cascades.
#[derive(Parser, Debug)]
#[command(name = "facecam", version)]
struct Cli {
    /// Video source: camera index or file path/URL.
    #[arg(short, long, default_value = "0")]
    input: InputSource,

    /// Directory to save snapshots into (enables the 's' key).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Haar cascade XML file (defaults to the frontal-face cascade).
    #[arg(short, long)]
    cascade: Option<PathBuf>,

    /// Scale factor between detection window sizes (> 1.0).
    #[arg(short, long, default_value_t = DEFAULT_SCALE_FACTOR)]
    scale: f64,

    /// Minimum neighboring candidates to keep a detection.
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_MIN_NEIGHBORS,
        value_parser = clap::value_parser!(u32).range(..=i32::MAX as i64)
    )]
    neighbors: u32,

    /// Run without a window; keys are not read.
    #[arg(long)]
    headless: bool,

    /// Stop after this many frames (0 = no limit).
    #[arg(long, default_value = "0")]
    max_frames: usize,

    /// Never download the default cascade.
    #[arg(long)]
    offline: bool,
}

impl From<Cli> for Settings {
    fn from(cli: Cli) -> Self {
        Settings {
            input: cli.input,
            output_dir: cli.output,
            cascade: cli.cascade,
            scale_factor: cli.scale,
            min_neighbors: cli.neighbors,
            headless: cli.headless,
            max_frames: (cli.max_frames > 0).then_some(cli.max_frames),
            offline: cli.offline,
        }
    }
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::from(Cli::parse());
    log::debug!("{settings:?}");

    let detector = build_detector(&settings)?;

    let mut reader: Box<dyn VideoReader> = Box::new(OpenCvCaptureReader::new());
    let metadata = reader.open(&settings.input)?;
    log::info!("Opened {metadata}");

    let snapshots = match &settings.output_dir {
        Some(dir) => Some(SnapshotWriter::create(dir, Box::new(ImageFileWriter::new()))?),
        None => None,
    };

    let sink = build_sink(&settings)?;
    if !settings.headless {
        println!("Press '{QUIT_KEY}' to quit, '{SNAPSHOT_KEY}' to save a snapshot.");
    }

    let mut use_case = LiveDetectionUseCase::new(
        reader,
        detector,
        Box::new(OpenCvAnnotator::default()),
        sink,
    )
    .on_snapshot(Box::new(|path: &Path| {
        println!("Saved snapshot: {}", path.display())
    }));
    if let Some(snapshots) = snapshots {
        use_case = use_case.with_snapshots(snapshots);
    }
    if let Some(limit) = settings.max_frames {
        use_case = use_case.with_frame_limit(limit);
    }

    let summary = use_case.execute()?;
    match &summary.stop {
        StopReason::EndOfStream => eprintln!("End of stream."),
        StopReason::ReadError(e) => eprintln!("End of stream or error: {e}"),
        StopReason::Quit | StopReason::FrameLimit => {}
    }
    println!("{summary}");

    Ok(())
}

fn build_detector(
    settings: &Settings,
) -> Result<Box<dyn FaceDetector>, Box<dyn std::error::Error>> {
    let locations = CascadeLocations::from_environment(settings.cascade.clone(), settings.offline);
    let cascade_path = cascade_resolver::resolve(&locations)
        .map_err(|e| format!("Failed to load cascade classifier: {e}"))?;

    let params = DetectionParams::new(settings.scale_factor, settings.min_neighbors);
    let detector = CascadeFaceDetector::new(&cascade_path, params)
        .map_err(|e| format!("Failed to load cascade classifier: {e}"))?;
    Ok(Box::new(detector))
}

fn build_sink(settings: &Settings) -> Result<Box<dyn FrameSink>, Box<dyn std::error::Error>> {
    if settings.headless {
        return Ok(Box::new(HeadlessFrameSink::new()));
    }
    let sink = HighguiFrameSink::new(WINDOW_TITLE)
        .map_err(|e| format!("Cannot open display window (try --headless): {e}"))?;
    Ok(Box::new(sink))
}
