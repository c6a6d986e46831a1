use opencv::highgui;

use crate::shared::constants::{KEY_POLL_MS, QUIT_KEY, SNAPSHOT_KEY};
use crate::shared::frame::Frame;
use crate::video::domain::frame_sink::{FrameSink, UserCommand};
use crate::video::infrastructure::mat_convert;

/// Shows frames in an OpenCV HighGUI window and reads keys from it.
pub struct HighguiFrameSink {
    window: String,
    key_wait_ms: i32,
    open: bool,
}

impl HighguiFrameSink {
    /// Creates the window immediately so a missing display fails at startup.
    pub fn new(window: &str) -> opencv::Result<Self> {
        highgui::named_window(window, highgui::WINDOW_AUTOSIZE)?;
        Ok(Self {
            window: window.to_string(),
            key_wait_ms: KEY_POLL_MS,
            open: true,
        })
    }
}

impl FrameSink for HighguiFrameSink {
    fn show(&mut self, frame: &Frame) -> Result<(), Box<dyn std::error::Error>> {
        let bgr = mat_convert::bgr_mat(frame)?;
        highgui::imshow(&self.window, &bgr)?;
        Ok(())
    }

    fn poll_command(&mut self) -> Result<Option<UserCommand>, Box<dyn std::error::Error>> {
        let key = highgui::wait_key(self.key_wait_ms)?;
        Ok(command_for_key(key))
    }

    fn close(&mut self) {
        if !self.open {
            return;
        }
        self.open = false;
        if let Err(e) = highgui::destroy_all_windows() {
            log::warn!("Failed to close display window: {e}");
        }
    }
}

impl Drop for HighguiFrameSink {
    fn drop(&mut self) {
        self.close();
    }
}

/// Maps a raw `wait_key` code to a command. Only the low byte is
/// significant; `-1` means no key was pressed.
pub fn command_for_key(key: i32) -> Option<UserCommand> {
    if key < 0 {
        return None;
    }
    match char::from((key & 0xFF) as u8) {
        QUIT_KEY => Some(UserCommand::Quit),
        SNAPSHOT_KEY => Some(UserCommand::Snapshot),
        _ => None,
    }
}
