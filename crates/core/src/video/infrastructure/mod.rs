pub mod headless_frame_sink;
pub mod highgui_frame_sink;
pub mod image_file_writer;
pub mod mat_convert;
pub mod opencv_capture_reader;
