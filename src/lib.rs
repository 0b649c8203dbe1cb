// SPDX-License-Identifier: MPL-2.0
//! `iced_enhance` is a lightweight photo enhancer built with the Iced GUI
//! framework.
//!
//! It loads a raster image, applies non-destructive filter adjustments and
//! geometric transforms, supports interactive cropping, resizing, a bounded
//! undo history, and lossless PNG export.

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod media;
pub mod ui;
