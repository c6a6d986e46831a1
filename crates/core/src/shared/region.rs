/// Axis-aligned rectangle around one detected face, in frame pixels.
///
/// `x`/`y` is the top-left corner. Detectors may report rectangles that
/// touch or cross the frame border; consumers clip when they draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Region {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// True when both sides are at least the given minimum.
    pub fn fits_min_size(&self, min_width: i32, min_height: i32) -> bool {
        self.width >= min_width && self.height >= min_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(30, 30, true)]
    #[case(31, 45, true)]
    #[case(29, 30, false)]
    #[case(30, 29, false)]
    #[case(0, 0, false)]
    fn test_fits_min_size(#[case] w: i32, #[case] h: i32, #[case] expected: bool) {
        assert_eq!(Region::new(0, 0, w, h).fits_min_size(30, 30), expected);
    }
}
