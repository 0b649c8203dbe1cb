// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

/// Screens the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// No image loaded yet: shows the drop/open hint.
    Empty,
    /// An editing session is active.
    Editor,
}
