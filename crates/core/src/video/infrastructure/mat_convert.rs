//! Conversions between [`Frame`] (RGB) and OpenCV `Mat` buffers.

use opencv::core::{Mat, Scalar, CV_8UC3};
use opencv::imgproc;
use opencv::prelude::*;

use crate::shared::frame::{Frame, RGB_CHANNELS};

/// Copies the frame into a new 3-channel `Mat` without reordering channels.
pub fn rgb_mat(frame: &Frame) -> opencv::Result<Mat> {
    let mut mat = Mat::new_rows_cols_with_default(
        frame.height() as i32,
        frame.width() as i32,
        CV_8UC3,
        Scalar::all(0.0),
    )?;
    mat.data_bytes_mut()?.copy_from_slice(frame.data());
    Ok(mat)
}

/// Copies a continuous 3-channel RGB `Mat` back into a frame.
pub fn frame_from_rgb_mat(mat: &Mat, index: usize) -> opencv::Result<Frame> {
    let width = mat.cols().max(0) as u32;
    let height = mat.rows().max(0) as u32;
    let data = mat.data_bytes()?;
    let expected = width as usize * height as usize * RGB_CHANNELS;
    if data.len() != expected {
        return Err(opencv::Error::new(
            opencv::core::StsUnmatchedFormats,
            format!(
                "expected {width}x{height} 8-bit 3-channel image ({expected} bytes), got {} bytes",
                data.len()
            ),
        ));
    }
    Ok(Frame::new(data.to_vec(), width, height, index))
}

/// Converts a BGR capture buffer into an RGB frame.
pub fn frame_from_bgr(bgr: &Mat, index: usize) -> opencv::Result<Frame> {
    let mut rgb = Mat::default();
    imgproc::cvt_color_def(bgr, &mut rgb, imgproc::COLOR_BGR2RGB)?;
    frame_from_rgb_mat(&rgb, index)
}

/// BGR copy of the frame for OpenCV display and encoding.
pub fn bgr_mat(frame: &Frame) -> opencv::Result<Mat> {
    let rgb = rgb_mat(frame)?;
    let mut bgr = Mat::default();
    imgproc::cvt_color_def(&rgb, &mut bgr, imgproc::COLOR_RGB2BGR)?;
    Ok(bgr)
}

/// Single-channel intensity image of the frame.
pub fn gray_mat(frame: &Frame) -> opencv::Result<Mat> {
    let rgb = rgb_mat(frame)?;
    let mut gray = Mat::default();
    imgproc::cvt_color_def(&rgb, &mut gray, imgproc::COLOR_RGB2GRAY)?;
    Ok(gray)
}
