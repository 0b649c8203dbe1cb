// SPDX-License-Identifier: MPL-2.0
//! Image loading and decoding from various formats (PNG, JPEG, GIF, SVG, etc.).

use crate::error::{Error, Result};
use iced::widget::image;
use image_rs::DynamicImage;
use resvg::usvg;
use std::path::Path;

/// Decoded pixels ready for display by the Iced image widget.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            handle: image::Handle::from_rgba(width, height, pixels),
            width,
            height,
        }
    }
}

/// Loads and decodes an image file into a [`DynamicImage`].
///
/// Raster formats are decoded by the `image` crate; SVG files are
/// rasterized at their intrinsic size via `resvg`.
///
/// # Errors
///
/// Returns an error for unreadable files, unsupported formats, or
/// corrupt image data.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<DynamicImage> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase();

    if extension == "svg" {
        rasterize_svg(path)
    } else {
        image_rs::open(path).map_err(Error::from)
    }
}

/// Rasterizes an SVG file at its intrinsic size.
fn rasterize_svg(path: &Path) -> Result<DynamicImage> {
    let svg_data = std::fs::read(path)?;
    let tree = usvg::Tree::from_data(&svg_data, &usvg::Options::default())
        .map_err(|e| Error::Svg(e.to_string()))?;

    let pixmap_size = tree.size().to_int_size();
    let mut pixmap = tiny_skia::Pixmap::new(pixmap_size.width(), pixmap_size.height())
        .ok_or_else(|| Error::Svg("SVG has zero-sized canvas".to_string()))?;
    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    let png_data = pixmap.encode_png().map_err(|e| Error::Svg(e.to_string()))?;
    image_rs::load_from_memory(&png_data).map_err(Error::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{Rgba, RgbaImage};
    use tempfile::tempdir;

    #[test]
    fn load_image_decodes_png() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("test.png");
        let img = RgbaImage::from_pixel(6, 4, Rgba([10, 20, 30, 255]));
        img.save(&path).expect("write png");

        let loaded = load_image(&path).expect("load png");
        assert_eq!(loaded.width(), 6);
        assert_eq!(loaded.height(), 4);
    }

    #[test]
    fn load_image_rejects_missing_file() {
        let result = load_image("/nonexistent/missing.png");
        assert!(result.is_err());
    }

    #[test]
    fn load_image_rasterizes_svg() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("shape.svg");
        std::fs::write(
            &path,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="8" height="8"><rect width="8" height="8" fill="red"/></svg>"#,
        )
        .expect("write svg");

        let loaded = load_image(&path).expect("load svg");
        assert_eq!(loaded.width(), 8);
        assert_eq!(loaded.height(), 8);
    }

    #[test]
    fn image_data_from_rgba_keeps_dimensions() {
        let pixels = vec![0; 4 * 3 * 4];
        let data = ImageData::from_rgba(4, 3, pixels);
        assert_eq!(data.width, 4);
        assert_eq!(data.height, 3);
    }
}
