use crate::shared::frame::Frame;

/// An interactive request read from the display between frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UserCommand {
    Quit,
    Snapshot,
}

/// Where annotated frames go, and where user keypresses come from.
///
/// A window-backed sink shows each frame and polls the keyboard; a
/// headless sink discards frames and never reports a command.
pub trait FrameSink {
    fn show(&mut self, frame: &Frame) -> Result<(), Box<dyn std::error::Error>>;

    /// Waits briefly for one keypress and maps it to a command.
    fn poll_command(&mut self) -> Result<Option<UserCommand>, Box<dyn std::error::Error>>;

    /// Tears down any display surface. Safe to call more than once.
    fn close(&mut self);
}
