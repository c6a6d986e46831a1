use crate::shared::frame::Frame;
use crate::video::domain::frame_sink::{FrameSink, UserCommand};

/// Sink for runs without a display: drops frames and never reads keys.
#[derive(Default)]
pub struct HeadlessFrameSink;

impl HeadlessFrameSink {
    pub fn new() -> Self {
        Self
    }
}

impl FrameSink for HeadlessFrameSink {
    fn show(&mut self, _frame: &Frame) -> Result<(), Box<dyn std::error::Error>> {
        Ok(())
    }

    fn poll_command(&mut self) -> Result<Option<UserCommand>, Box<dyn std::error::Error>> {
        Ok(None)
    }

    fn close(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_frames_and_never_commands() {
        let mut sink = HeadlessFrameSink::new();
        let frame = Frame::filled(2, 2, [0, 0, 0], 0);
        sink.show(&frame).unwrap();
        sink.show(&frame).unwrap();
        assert_eq!(sink.poll_command().unwrap(), None);
        sink.close();
    }
}
