// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.

pub mod manager;
pub mod notification;
pub mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, Severity};
pub use toast::Toast;
