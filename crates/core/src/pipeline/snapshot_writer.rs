use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};

use crate::shared::frame::Frame;
use crate::video::domain::image_writer::ImageWriter;

/// `snapshot_<YYYYMMDD_HHMMSS>_<faces>.jpg`.
///
/// Names only have second resolution: two snapshots taken within the same
/// second with the same face total get the same name, and the second
/// overwrites the first.
pub fn snapshot_file_name(timestamp: &NaiveDateTime, face_total: u64) -> String {
    format!(
        "snapshot_{}_{face_total}.jpg",
        timestamp.format("%Y%m%d_%H%M%S")
    )
}

/// Saves annotated frames as timestamped JPEGs in one directory.
pub struct SnapshotWriter {
    dir: PathBuf,
    writer: Box<dyn ImageWriter>,
}

impl SnapshotWriter {
    /// Creates `dir` (and parents) up front so the first save cannot fail on it.
    pub fn create(dir: &Path, writer: Box<dyn ImageWriter>) -> std::io::Result<Self> {
        fs::create_dir_all(dir)?;
        Ok(Self {
            dir: dir.to_path_buf(),
            writer,
        })
    }

    /// Writes the frame using the current local time and returns its path.
    pub fn save(
        &self,
        frame: &Frame,
        face_total: u64,
    ) -> Result<PathBuf, Box<dyn std::error::Error>> {
        self.save_at(frame, face_total, &Local::now().naive_local())
    }

    pub fn save_at(
        &self,
        frame: &Frame,
        face_total: u64,
        timestamp: &NaiveDateTime,
    ) -> Result<PathBuf, Box<dyn std::error::Error>> {
        let path = self.dir.join(snapshot_file_name(timestamp, face_total));
        self.writer.write(&path, frame)?;
        log::debug!("Snapshot written: {}", path.display());
        Ok(path)
    }
}
