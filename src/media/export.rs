// SPDX-License-Identifier: MPL-2.0
//! Lossless export of the edited surface.

use crate::error::{Error, Result};
use image_rs::{DynamicImage, ImageFormat};
use std::io::Cursor;
use std::path::Path;

/// Default filename suggested by the export dialog.
pub const DEFAULT_EXPORT_FILE_NAME: &str = "enhanced.png";

/// Encodes an image as PNG into an in-memory buffer.
///
/// Also used by the undo history, which stores snapshots as encoded PNG.
pub fn encode_png(image: &DynamicImage) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|err| Error::Image(format!("PNG encoding failed: {err}")))?;
    Ok(bytes)
}

/// Decodes a PNG buffer produced by [`encode_png`].
pub fn decode_png(bytes: &[u8]) -> Result<DynamicImage> {
    image_rs::load_from_memory_with_format(bytes, ImageFormat::Png).map_err(Error::from)
}

/// Writes the image to `path` as PNG.
pub fn export_png(image: &DynamicImage, path: &Path) -> Result<()> {
    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|err| Error::Io(format!("Failed to export image: {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{ImageBuffer, Rgba};
    use tempfile::tempdir;

    fn test_image(width: u32, height: u32) -> DynamicImage {
        let buffer = ImageBuffer::from_pixel(width, height, Rgba([12, 34, 56, 255]));
        DynamicImage::ImageRgba8(buffer)
    }

    #[test]
    fn encode_decode_round_trip_preserves_pixels() {
        let img = test_image(5, 7);
        let bytes = encode_png(&img).expect("encode");
        let decoded = decode_png(&bytes).expect("decode");

        assert_eq!(decoded.width(), 5);
        assert_eq!(decoded.height(), 7);
        assert_eq!(decoded.to_rgba8().get_pixel(0, 0).0, [12, 34, 56, 255]);
    }

    #[test]
    fn export_png_writes_file() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("enhanced.png");
        let img = test_image(3, 3);

        export_png(&img, &path).expect("export");
        assert!(path.exists());

        let reloaded = image_rs::open(&path).expect("reload");
        assert_eq!(reloaded.width(), 3);
    }

    #[test]
    fn decode_rejects_garbage() {
        assert!(decode_png(b"not a png").is_err());
    }
}
