// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! This module contains the overlay's interaction logic separated from the
//! Iced widget tree, so every transition can be driven and checked without
//! a window.

pub mod animation;
pub mod dismiss;
pub mod pan;
pub mod pinch;
pub mod zoom;

// Re-export commonly used types for convenience
pub use animation::{Animated, Easing};
pub use dismiss::{DismissGesture, DismissPhase, DismissThresholds, ExitDirection, Release};
pub use pan::{GesturePhase, PanEvent, PanRecognizer};
pub use pinch::{PinchTracker, PinchUpdate};
pub use zoom::{ZoomScale, ZoomSurface};
