// SPDX-License-Identifier: MPL-2.0
//! Canvas overlays drawn on top of the editor surface.

pub mod crop;

pub use crop::CropOverlayRenderer;
