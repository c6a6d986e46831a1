pub const FACES_ORIGIN: (i32, i32) = (10, 20);
pub const FPS_ORIGIN: (i32, i32) = (10, 45);

/// A single line of overlay text.
///
/// `origin` is the bottom-left corner of the text baseline, in pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct TextLabel {
    pub text: String,
    pub origin: (i32, i32),
}

impl TextLabel {
    pub fn new(text: impl Into<String>, origin: (i32, i32)) -> Self {
        Self {
            text: text.into(),
            origin,
        }
    }
}

pub fn faces_label(faces: usize) -> String {
    format!("Faces: {faces}")
}

pub fn fps_label(fps: f64) -> String {
    format!("FPS: {fps:.2}")
}

/// Per-frame face count above the running average FPS,
/// in the top-left corner.
pub fn hud_labels(faces: usize, fps: f64) -> [TextLabel; 2] {
    [
        TextLabel::new(faces_label(faces), FACES_ORIGIN),
        TextLabel::new(fps_label(fps), FPS_ORIGIN),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(faces_label(3), "Faces: 3");
        assert_eq!(fps_label(5.0), "FPS: 5.00");
        assert_eq!(fps_label(29.976), "FPS: 29.98");
        assert_eq!(fps_label(0.0), "FPS: 0.00");
    }

    #[test]
    fn test_hud_places_faces_above_fps() {
        assert_eq!(
            hud_labels(2, 12.5),
            [
                TextLabel::new("Faces: 2", (10, 20)),
                TextLabel::new("FPS: 12.50", (10, 45)),
            ]
        );
    }
}
