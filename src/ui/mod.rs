// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! The overlay follows the Elm-style "state down, messages up" pattern.
//!
//! - [`overlay`] - Photo overlay component and its host surface
//! - [`state`] - Gesture, zoom and animation state, independent of widgets
//! - [`styles`] - Container styles (dimmer, demo frame)
//! - [`widgets`] - Custom layout widgets
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod overlay;
pub mod state;
pub mod styles;
pub mod widgets;
