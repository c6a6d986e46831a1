pub mod constants;
pub mod frame;
pub mod input_source;
pub mod region;
pub mod settings;
pub mod video_metadata;
