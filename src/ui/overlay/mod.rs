// SPDX-License-Identifier: MPL-2.0
//! Full-screen photo overlay with pinch-to-zoom and swipe-to-dismiss.

pub mod component;
pub mod host;

pub use component::{Effect, ImageSurface, InputEvent, Lifecycle, Message, PhotoOverlay};
pub use host::{input_event, HostSurface, OverlayHost};
