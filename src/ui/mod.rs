// SPDX-License-Identifier: MPL-2.0
//! User interface: the thumbnails view, its tiles, and shared styling.

pub mod design_tokens;
pub mod empty_state;
pub mod styles;
pub mod theming;
pub mod thumbnail;
pub mod thumbnails;
