use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Where frames come from: a camera device index or a file/stream location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputSource {
    Device(i32),
    Path(String),
}

impl Default for InputSource {
    fn default() -> Self {
        InputSource::Device(0)
    }
}

/// Integer parsing wins; anything that is not an integer is a path.
///
/// Existence is not checked here. The capture adapter reports sources it
/// cannot open.
impl FromStr for InputSource {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().parse::<i32>() {
            Ok(index) => InputSource::Device(index),
            Err(_) => InputSource::Path(s.to_string()),
        })
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Device(index) => write!(f, "camera {index}"),
            InputSource::Path(path) => f.write_str(path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("0", InputSource::Device(0))]
    #[case("2", InputSource::Device(2))]
    #[case(" 1 ", InputSource::Device(1))]
    #[case("-1", InputSource::Device(-1))]
    #[case("video.mp4", InputSource::Path("video.mp4".into()))]
    #[case("/dev/video0", InputSource::Path("/dev/video0".into()))]
    #[case("rtsp://cam.local/stream", InputSource::Path("rtsp://cam.local/stream".into()))]
    #[case("1.5", InputSource::Path("1.5".into()))]
    fn test_parse(#[case] raw: &str, #[case] expected: InputSource) {
        assert_eq!(raw.parse::<InputSource>().unwrap(), expected);
    }

    #[test]
    fn test_default_is_first_camera() {
        assert_eq!(InputSource::default(), InputSource::Device(0));
    }

    #[test]
    fn test_display() {
        assert_eq!(InputSource::Device(3).to_string(), "camera 3");
        assert_eq!(InputSource::Path("a.avi".into()).to_string(), "a.avi");
    }
}
