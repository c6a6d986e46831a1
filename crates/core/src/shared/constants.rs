/// Resource name of the default frontal-face Haar cascade.
pub const DEFAULT_CASCADE_NAME: &str = "haarcascade_frontalface_default.xml";
pub const DEFAULT_CASCADE_URL: &str =
    "https://raw.githubusercontent.com/opencv/opencv/4.x/data/haarcascades/haarcascade_frontalface_default.xml";

/// Environment variable naming an extra directory searched for cascades.
pub const CASCADE_DIR_ENV: &str = "FACECAM_CASCADE_DIR";

/// Where OpenCV packages commonly install their bundled cascades.
pub const SYSTEM_CASCADE_DIRS: &[&str] = &[
    "/usr/share/opencv4/haarcascades",
    "/usr/local/share/opencv4/haarcascades",
    "/usr/share/opencv/haarcascades",
    "/opt/homebrew/share/opencv4/haarcascades",
];

pub const DEFAULT_SCALE_FACTOR: f64 = 1.1;
pub const DEFAULT_MIN_NEIGHBORS: u32 = 5;

/// Smallest face the detector reports, in pixels.
pub const MIN_FACE_SIZE: (i32, i32) = (30, 30);

pub const WINDOW_TITLE: &str = "Face Detector";

/// Milliseconds the display waits for a keypress each frame.
pub const KEY_POLL_MS: i32 = 1;

pub const QUIT_KEY: char = 'q';
pub const SNAPSHOT_KEY: char = 's';
