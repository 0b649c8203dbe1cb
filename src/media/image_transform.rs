// SPDX-License-Identifier: MPL-2.0
//! Geometric transformation functions for rotate, flip, crop, and resize.

use crate::error::Result;
use crate::media::ImageData;
use image_rs::{imageops::FilterType, DynamicImage, GenericImageView};

/// Maximum canvas width a freshly loaded image is fitted into.
pub const MAX_FIT_WIDTH: f32 = 900.0;

/// Fraction of the window width available to the canvas on load.
pub const FIT_WINDOW_FRACTION: f32 = 0.9;

/// Rotate an image 90 degrees counter-clockwise (left).
pub fn rotate_left(image: &DynamicImage) -> DynamicImage {
    image.rotate270()
}

/// Rotate an image 90 degrees clockwise (right).
pub fn rotate_right(image: &DynamicImage) -> DynamicImage {
    image.rotate90()
}

/// Rotate an image 180 degrees.
pub fn rotate_half(image: &DynamicImage) -> DynamicImage {
    image.rotate180()
}

/// Flip an image horizontally (mirror left-to-right).
pub fn flip_horizontal(image: &DynamicImage) -> DynamicImage {
    image.fliph()
}

/// Flip an image vertically (mirror top-to-bottom).
pub fn flip_vertical(image: &DynamicImage) -> DynamicImage {
    image.flipv()
}

/// Convert a `DynamicImage` into display data for the canvas.
pub fn dynamic_to_image_data(dynamic: &DynamicImage) -> Result<ImageData> {
    let (width, height) = dynamic.dimensions();
    let rgba_img = dynamic.to_rgba8();
    let pixels = rgba_img.into_vec();

    Ok(ImageData::from_rgba(width, height, pixels))
}

/// Resize the image to the provided dimensions using a high-quality filter.
pub fn resize(image: &DynamicImage, width: u32, height: u32) -> DynamicImage {
    let width = width.max(1);
    let height = height.max(1);
    image.resize_exact(width, height, FilterType::Lanczos3)
}

/// Crop the image to the specified rectangle.
///
/// The rectangle coordinates are clamped to the image boundaries.
/// Returns `None` if the image itself has no pixels to crop from.
pub fn crop(image: &DynamicImage, x: u32, y: u32, width: u32, height: u32) -> Option<DynamicImage> {
    let img_width = image.width();
    let img_height = image.height();

    if img_width == 0 || img_height == 0 {
        return None;
    }

    // Clamp coordinates to image boundaries
    let x = x.min(img_width.saturating_sub(1));
    let y = y.min(img_height.saturating_sub(1));

    let max_width = img_width.saturating_sub(x);
    let max_height = img_height.saturating_sub(y);

    let width = width.min(max_width).max(1);
    let height = height.min(max_height).max(1);

    Some(image.crop_imm(x, y, width, height))
}

/// Fits a freshly decoded image into the editing canvas.
///
/// The target width is `min(window_width * 0.9, 900)`. The scale factor is
/// capped at 1.0, so images narrower than the target are kept at native size
/// (never upscaled). Aspect ratio is always preserved.
pub fn fit_for_canvas(image: &DynamicImage, window_width: f32) -> DynamicImage {
    let scale = fit_scale(image.width(), window_width);
    if scale >= 1.0 {
        return image.clone();
    }

    let width = ((image.width() as f32 * scale).round() as u32).max(1);
    let height = ((image.height() as f32 * scale).round() as u32).max(1);
    image.resize_exact(width, height, FilterType::Lanczos3)
}

/// Computes the load-time scale factor for a given source width.
pub fn fit_scale(source_width: u32, window_width: f32) -> f32 {
    let max_width = (window_width * FIT_WINDOW_FRACTION).min(MAX_FIT_WIDTH);
    if source_width == 0 {
        return 1.0;
    }
    (max_width / source_width as f32).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::DynamicImage;
    use image_rs::ImageBuffer;

    fn create_test_image(width: u32, height: u32) -> DynamicImage {
        let buffer = ImageBuffer::from_pixel(width, height, image_rs::Rgba([0, 0, 0, 0]));
        DynamicImage::ImageRgba8(buffer)
    }

    #[test]
    fn rotate_left_swaps_dimensions() {
        let img = create_test_image(4, 3);
        let rotated = rotate_left(&img);
        assert_eq!(rotated.width(), 3);
        assert_eq!(rotated.height(), 4);
    }

    #[test]
    fn rotate_right_swaps_dimensions() {
        let img = create_test_image(4, 3);
        let rotated = rotate_right(&img);
        assert_eq!(rotated.width(), 3);
        assert_eq!(rotated.height(), 4);
    }

    #[test]
    fn rotate_half_preserves_dimensions() {
        let img = create_test_image(4, 3);
        let rotated = rotate_half(&img);
        assert_eq!(rotated.width(), 4);
        assert_eq!(rotated.height(), 3);
    }

    #[test]
    fn resize_changes_dimensions() {
        let img = create_test_image(8, 4);
        let resized = resize(&img, 4, 2);
        assert_eq!(resized.width(), 4);
        assert_eq!(resized.height(), 2);
    }

    #[test]
    fn crop_within_bounds() {
        let img = create_test_image(10, 8);
        let cropped = crop(&img, 2, 2, 4, 3).expect("valid crop");
        assert_eq!(cropped.width(), 4);
        assert_eq!(cropped.height(), 3);
    }

    #[test]
    fn crop_clamps_to_boundaries() {
        let img = create_test_image(10, 8);
        // Request crop that extends beyond image
        let cropped = crop(&img, 8, 6, 10, 10).expect("clamped crop");
        assert_eq!(cropped.width(), 2);
        assert_eq!(cropped.height(), 2);
    }

    #[test]
    fn crop_entire_image() {
        let img = create_test_image(10, 8);
        let cropped = crop(&img, 0, 0, 10, 8).expect("full crop");
        assert_eq!(cropped.width(), 10);
        assert_eq!(cropped.height(), 8);
    }

    #[test]
    fn flip_horizontal_mirrors_pixels_left_to_right() {
        let mut buffer = ImageBuffer::from_pixel(4, 2, image_rs::Rgba([0, 0, 0, 255]));
        for x in 2..4 {
            for y in 0..2 {
                buffer.put_pixel(x, y, image_rs::Rgba([255, 255, 255, 255]));
            }
        }
        let img = DynamicImage::ImageRgba8(buffer);

        let flipped = flip_horizontal(&img);
        let flipped_rgba = flipped.to_rgba8();

        assert_eq!(flipped_rgba.get_pixel(0, 0).0, [255, 255, 255, 255]);
        assert_eq!(flipped_rgba.get_pixel(3, 0).0, [0, 0, 0, 255]);
    }

    #[test]
    fn flip_vertical_mirrors_pixels_top_to_bottom() {
        let mut buffer = ImageBuffer::from_pixel(2, 4, image_rs::Rgba([0, 0, 0, 255]));
        for x in 0..2 {
            for y in 2..4 {
                buffer.put_pixel(x, y, image_rs::Rgba([255, 255, 255, 255]));
            }
        }
        let img = DynamicImage::ImageRgba8(buffer);

        let flipped = flip_vertical(&img);
        let flipped_rgba = flipped.to_rgba8();

        assert_eq!(flipped_rgba.get_pixel(0, 0).0, [255, 255, 255, 255]);
        assert_eq!(flipped_rgba.get_pixel(0, 3).0, [0, 0, 0, 255]);
    }

    #[test]
    fn fit_scale_never_exceeds_one() {
        // Narrow image in a wide window: no upscaling
        assert!((fit_scale(100, 2000.0) - 1.0).abs() < f32::EPSILON);
        // Wide image: scaled down to the 900px cap
        let scale = fit_scale(1800, 2000.0);
        assert!((scale - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn fit_scale_uses_window_fraction_below_cap() {
        // 90% of a 600px window is 540px
        let scale = fit_scale(1080, 600.0);
        assert!((scale - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn fit_for_canvas_scales_down_preserving_aspect() {
        let img = create_test_image(1800, 900);
        let fitted = fit_for_canvas(&img, 2000.0);
        assert_eq!(fitted.width(), 900);
        assert_eq!(fitted.height(), 450);
    }

    #[test]
    fn fit_for_canvas_keeps_small_images_at_native_size() {
        let img = create_test_image(200, 150);
        let fitted = fit_for_canvas(&img, 2000.0);
        assert_eq!(fitted.width(), 200);
        assert_eq!(fitted.height(), 150);
    }
}
