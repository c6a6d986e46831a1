use std::path::PathBuf;

use crate::shared::constants::{DEFAULT_MIN_NEIGHBORS, DEFAULT_SCALE_FACTOR};
use crate::shared::input_source::InputSource;

/// Everything a run needs to know, resolved once from the command line.
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub input: InputSource,
    /// Snapshot directory; `None` disables the save key.
    pub output_dir: Option<PathBuf>,
    /// Cascade file overriding the default frontal-face classifier.
    pub cascade: Option<PathBuf>,
    pub scale_factor: f64,
    pub min_neighbors: u32,
    /// Skip the window; frames are discarded and no keys are read.
    pub headless: bool,
    /// Stop after this many frames.
    pub max_frames: Option<usize>,
    /// Never download the default cascade.
    pub offline: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            input: InputSource::default(),
            output_dir: None,
            cascade: None,
            scale_factor: DEFAULT_SCALE_FACTOR,
            min_neighbors: DEFAULT_MIN_NEIGHBORS,
            headless: false,
            max_frames: None,
            offline: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.input, InputSource::Device(0));
        assert_eq!(settings.output_dir, None);
        assert_eq!(settings.cascade, None);
        assert_relative_eq!(settings.scale_factor, 1.1);
        assert_eq!(settings.min_neighbors, 5);
        assert!(!settings.headless);
        assert_eq!(settings.max_frames, None);
        assert!(!settings.offline);
    }
}
