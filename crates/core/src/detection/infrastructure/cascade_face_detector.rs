use std::path::{Path, PathBuf};

use opencv::core::{Rect, Size, Vector};
use opencv::objdetect::CascadeClassifier;
use opencv::prelude::*;
use thiserror::Error;

use crate::detection::domain::detection_params::DetectionParams;
use crate::detection::domain::face_detector::FaceDetector;
use crate::shared::frame::Frame;
use crate::shared::region::Region;
use crate::video::infrastructure::mat_convert;

#[derive(Error, Debug)]
pub enum DetectorError {
    #[error("scale factor must be greater than 1.0, got {0}")]
    InvalidScale(f64),
    #[error("min neighbors {0} is larger than OpenCV supports")]
    InvalidNeighbors(u32),
    #[error("failed to load cascade classifier from {path}: {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: opencv::Error,
    },
    #[error("cascade classifier at {path} is empty or unusable")]
    Empty { path: PathBuf },
}

/// Haar/LBP cascade face detector backed by OpenCV's `CascadeClassifier`.
///
/// Frames are reduced to grayscale and searched at multiple scales.
/// Rectangles below `params.min_size` are never reported.
pub struct CascadeFaceDetector {
    classifier: CascadeClassifier,
    params: DetectionParams,
    min_neighbors: i32,
    found: Vector<Rect>,
}

impl CascadeFaceDetector {
    /// Loads a cascade XML file. Fails if the file cannot be parsed
    /// or yields an empty classifier.
    pub fn new(cascade_path: &Path, params: DetectionParams) -> Result<Self, DetectorError> {
        if params.scale_factor.is_nan() || params.scale_factor <= 1.0 {
            return Err(DetectorError::InvalidScale(params.scale_factor));
        }
        let min_neighbors = i32::try_from(params.min_neighbors)
            .map_err(|_| DetectorError::InvalidNeighbors(params.min_neighbors))?;

        let load_err = |source| DetectorError::Load {
            path: cascade_path.to_path_buf(),
            source,
        };
        let classifier =
            CascadeClassifier::new(&cascade_path.to_string_lossy()).map_err(load_err)?;
        if classifier.empty().map_err(load_err)? {
            return Err(DetectorError::Empty {
                path: cascade_path.to_path_buf(),
            });
        }

        log::info!("Loaded cascade classifier: {}", cascade_path.display());
        Ok(Self {
            classifier,
            params,
            min_neighbors,
            found: Vector::new(),
        })
    }
}

impl FaceDetector for CascadeFaceDetector {
    fn detect(&mut self, frame: &Frame) -> Result<Vec<Region>, Box<dyn std::error::Error>> {
        let gray = mat_convert::gray_mat(frame)?;
        let (min_w, min_h) = self.params.min_size;

        self.found.clear();
        self.classifier.detect_multi_scale(
            &gray,
            &mut self.found,
            self.params.scale_factor,
            self.min_neighbors,
            0,
            Size::new(min_w, min_h),
            Size::default(),
        )?;

        Ok(self
            .found
            .iter()
            .map(|r| Region::new(r.x, r.y, r.width, r.height))
            .filter(|r| r.fits_min_size(min_w, min_h))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::infrastructure::cascade_resolver::{self, CascadeLocations};
    use rstest::rstest;
    use tempfile::TempDir;

    /// Default cascade from the local OpenCV install, if there is one.
    fn installed_cascade() -> Option<PathBuf> {
        cascade_resolver::resolve(&CascadeLocations::from_environment(None, true)).ok()
    }

    #[rstest]
    #[case(1.0)]
    #[case(0.5)]
    #[case(f64::NAN)]
    fn test_rejects_scale_not_above_one(#[case] scale: f64) {
        let result =
            CascadeFaceDetector::new(Path::new("unused.xml"), DetectionParams::new(scale, 5));
        assert!(matches!(result, Err(DetectorError::InvalidScale(_))));
    }

    #[test]
    fn test_rejects_neighbors_beyond_i32() {
        let params = DetectionParams::new(1.1, i32::MAX as u32 + 1);
        let result = CascadeFaceDetector::new(Path::new("unused.xml"), params);
        assert!(matches!(result, Err(DetectorError::InvalidNeighbors(_))));
    }

    #[test]
    fn test_missing_file_is_unusable() {
        let tmp = TempDir::new().unwrap();
        let result = CascadeFaceDetector::new(
            &tmp.path().join("missing.xml"),
            DetectionParams::default(),
        );
        assert!(matches!(
            result,
            Err(DetectorError::Empty { .. }) | Err(DetectorError::Load { .. })
        ));
    }

    #[test]
    fn test_garbage_file_is_unusable() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("garbage.xml");
        std::fs::write(&path, b"not a cascade").unwrap();
        assert!(CascadeFaceDetector::new(&path, DetectionParams::default()).is_err());
    }

    #[test]
    fn test_blank_frame_has_no_faces() {
        let Some(path) = installed_cascade() else {
            return;
        };
        let mut detector = CascadeFaceDetector::new(&path, DetectionParams::default()).unwrap();
        let frame = Frame::filled(160, 120, [90, 90, 90], 0);
        let regions = detector.detect(&frame).unwrap();
        assert!(regions.is_empty());
    }

    #[test]
    fn test_detections_respect_min_size() {
        let Some(path) = installed_cascade() else {
            return;
        };
        let mut detector = CascadeFaceDetector::new(&path, DetectionParams::new(1.05, 0)).unwrap();
        // Checkerboard texture tends to trigger candidates at many scales.
        let (w, h) = (200u32, 160u32);
        let mut data = Vec::with_capacity((w * h * 3) as usize);
        for y in 0..h {
            for x in 0..w {
                let v = if (x / 8 + y / 8) % 2 == 0 { 230 } else { 20 };
                data.extend_from_slice(&[v, v, v]);
            }
        }
        let regions = detector.detect(&Frame::new(data, w, h, 0)).unwrap();
        assert!(regions.iter().all(|r| r.width >= 30 && r.height >= 30));
    }
}
