// SPDX-License-Identifier: MPL-2.0
//! Color adjustment chain applied at the render boundary.
//!
//! Adjustments are described as an ordered list of typed [`FilterEffect`]
//! descriptors and only translated into pixel operations here. Effects at
//! identity are expected to be skipped by the caller building the chain.

use crate::domain::editing::{AdjustmentPercent, BlurRadius};
use image_rs::DynamicImage;

/// Named preset filters. Exactly one preset is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterPreset {
    #[default]
    None,
    Grayscale,
    Sepia,
    Invert,
}

impl FilterPreset {
    pub const ALL: [FilterPreset; 4] = [
        Self::None,
        Self::Grayscale,
        Self::Sepia,
        Self::Invert,
    ];

    /// Returns the i18n key for the preset's button label.
    pub const fn i18n_key(self) -> &'static str {
        match self {
            Self::None => "editor-filter-none",
            Self::Grayscale => "editor-filter-grayscale",
            Self::Sepia => "editor-filter-sepia",
            Self::Invert => "editor-filter-invert",
        }
    }
}

/// A single typed effect in the adjustment chain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FilterEffect {
    /// Multiplicative brightness (100% = identity).
    Brightness(AdjustmentPercent),
    /// Contrast around the mid-point (100% = identity).
    Contrast(AdjustmentPercent),
    /// Saturation as a blend between grayscale and the source (100% = identity).
    Saturation(AdjustmentPercent),
    /// Gaussian blur with the given pixel radius.
    Blur(BlurRadius),
    /// Named preset applied after the numeric adjustments.
    Preset(FilterPreset),
}

/// Applies an effect chain to an image, in order.
pub fn apply(image: &DynamicImage, effects: &[FilterEffect]) -> DynamicImage {
    let mut current = image.clone();
    for effect in effects {
        current = apply_effect(&current, *effect);
    }
    current
}

fn apply_effect(image: &DynamicImage, effect: FilterEffect) -> DynamicImage {
    match effect {
        FilterEffect::Brightness(percent) => brightness(image, percent),
        FilterEffect::Contrast(percent) => contrast(image, percent),
        FilterEffect::Saturation(percent) => saturation(image, percent),
        FilterEffect::Blur(radius) => blur(image, radius),
        FilterEffect::Preset(preset) => apply_preset(image, preset),
    }
}

/// Scales each color channel by the percentage factor.
pub fn brightness(image: &DynamicImage, percent: AdjustmentPercent) -> DynamicImage {
    if percent.is_identity() {
        return image.clone();
    }
    let factor = percent.as_factor();
    map_rgb(image, |r, g, b| {
        (
            scale_channel(r, factor),
            scale_channel(g, factor),
            scale_channel(b, factor),
        )
    })
}

/// Adjusts contrast around the channel mid-point.
pub fn contrast(image: &DynamicImage, percent: AdjustmentPercent) -> DynamicImage {
    if percent.is_identity() {
        return image.clone();
    }
    // The image crate expects a signed percentage offset from neutral.
    image.adjust_contrast((percent.value() - 100) as f32)
}

/// Blends between the grayscale and the fully saturated image.
pub fn saturation(image: &DynamicImage, percent: AdjustmentPercent) -> DynamicImage {
    if percent.is_identity() {
        return image.clone();
    }
    let factor = percent.as_factor();
    map_rgb(image, |r, g, b| {
        let gray = luma(r, g, b);
        (
            blend_channel(gray, r, factor),
            blend_channel(gray, g, factor),
            blend_channel(gray, b, factor),
        )
    })
}

/// Applies a Gaussian blur; a zero radius is the identity.
pub fn blur(image: &DynamicImage, radius: BlurRadius) -> DynamicImage {
    if radius.is_identity() {
        return image.clone();
    }
    image.blur(radius.value())
}

/// Applies one of the named presets.
pub fn apply_preset(image: &DynamicImage, preset: FilterPreset) -> DynamicImage {
    match preset {
        FilterPreset::None => image.clone(),
        FilterPreset::Grayscale => image.grayscale(),
        FilterPreset::Sepia => map_rgb(image, sepia_pixel),
        FilterPreset::Invert => {
            let mut inverted = image.clone();
            inverted.invert();
            inverted
        }
    }
}

fn sepia_pixel(r: u8, g: u8, b: u8) -> (u8, u8, u8) {
    let (rf, gf, bf) = (f32::from(r), f32::from(g), f32::from(b));
    (
        clamp_channel(0.393 * rf + 0.769 * gf + 0.189 * bf),
        clamp_channel(0.349 * rf + 0.686 * gf + 0.168 * bf),
        clamp_channel(0.272 * rf + 0.534 * gf + 0.131 * bf),
    )
}

/// Rec. 601 luma of an RGB pixel.
fn luma(r: u8, g: u8, b: u8) -> f32 {
    0.299 * f32::from(r) + 0.587 * f32::from(g) + 0.114 * f32::from(b)
}

fn scale_channel(value: u8, factor: f32) -> u8 {
    clamp_channel(f32::from(value) * factor)
}

fn blend_channel(from: f32, to: u8, factor: f32) -> u8 {
    clamp_channel(from + (f32::from(to) - from) * factor)
}

fn clamp_channel(value: f32) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

/// Maps the RGB channels of every pixel, preserving alpha.
fn map_rgb<F>(image: &DynamicImage, f: F) -> DynamicImage
where
    F: Fn(u8, u8, u8) -> (u8, u8, u8),
{
    let mut rgba = image.to_rgba8();
    for pixel in rgba.pixels_mut() {
        let [r, g, b, a] = pixel.0;
        let (nr, ng, nb) = f(r, g, b);
        pixel.0 = [nr, ng, nb, a];
    }
    DynamicImage::ImageRgba8(rgba)
}
