// SPDX-License-Identifier: MPL-2.0
//! Image handling: loading, transforming, adjusting, and exporting bitmaps.

pub mod color_adjust;
pub mod export;
pub mod image;
pub mod image_transform;

// Re-export commonly used types
pub use color_adjust::{FilterEffect, FilterPreset};
pub use image::{load_image, ImageData};

/// Supported image extensions.
pub mod extensions {
    /// Image file extensions accepted by the open dialog.
    pub const IMAGE_EXTENSIONS: &[&str] = &[
        "jpg", "jpeg", "png", "gif", "tiff", "tif", "webp", "bmp", "ico", "svg",
    ];
}

/// Returns `true` when the path carries a supported image extension.
pub fn is_supported_image(path: &std::path::Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
        .is_some_and(|ext| extensions::IMAGE_EXTENSIONS.contains(&ext.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn supported_extensions_are_detected_case_insensitively() {
        assert!(is_supported_image(Path::new("photo.jpg")));
        assert!(is_supported_image(Path::new("photo.PNG")));
        assert!(is_supported_image(Path::new("drawing.svg")));
    }

    #[test]
    fn unsupported_extensions_are_rejected() {
        assert!(!is_supported_image(Path::new("movie.mp4")));
        assert!(!is_supported_image(Path::new("notes.txt")));
        assert!(!is_supported_image(Path::new("no_extension")));
    }
}
