// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Dismiss**: Swipe-to-dismiss thresholds and dimmer falloff
//! - **Zoom**: Zoom scale bounds and wheel/double-tap behavior
//! - **Animation**: Fade and slide durations
//! - **Input**: Pan recognition slop and velocity sampling

use std::time::Duration;

// ==========================================================================
// Dismiss Defaults
// ==========================================================================

/// Fraction of the screen height a drag must cover to close on release.
pub const DEFAULT_DISMISS_DISTANCE_RATIO: f32 = 0.25;

/// Minimum configurable dismiss distance ratio.
pub const MIN_DISMISS_DISTANCE_RATIO: f32 = 0.05;

/// Maximum configurable dismiss distance ratio.
pub const MAX_DISMISS_DISTANCE_RATIO: f32 = 0.9;

/// Release velocity (points per second) that closes regardless of distance.
pub const DEFAULT_FLING_VELOCITY: f32 = 800.0;

/// Minimum configurable fling velocity.
pub const MIN_FLING_VELOCITY: f32 = 100.0;

/// Maximum configurable fling velocity.
pub const MAX_FLING_VELOCITY: f32 = 8_000.0;

/// Fraction of the screen height at which the dimmer becomes fully transparent.
pub const DEFAULT_DIMMER_FADE_RATIO: f32 = 0.2;

/// Minimum configurable dimmer fade ratio.
pub const MIN_DIMMER_FADE_RATIO: f32 = 0.05;

/// Maximum configurable dimmer fade ratio.
pub const MAX_DIMMER_FADE_RATIO: f32 = 4.0;

// ==========================================================================
// Zoom Defaults
// ==========================================================================

/// Scale of the photo when the overlay opens (natural size).
pub const MIN_ZOOM_SCALE: f32 = 1.0;

/// Default upper bound for pinch and wheel zoom.
pub const DEFAULT_MAX_ZOOM_SCALE: f32 = 2.0;

/// Largest upper bound a config file may request.
pub const MAX_ZOOM_SCALE_LIMIT: f32 = 8.0;

/// Scale multiplier applied per wheel line.
pub const WHEEL_ZOOM_FACTOR: f32 = 1.1;

/// Pixels of wheel scroll that count as one line.
pub const WHEEL_PIXELS_PER_LINE: f32 = 40.0;

/// Two taps closer together than this toggle between min and max zoom.
pub const DOUBLE_TAP_THRESHOLD: Duration = Duration::from_millis(350);

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Fade-in of the whole overlay after it is attached.
pub const OPEN_FADE_DURATION: Duration = Duration::from_millis(300);

/// Fade-out of the whole overlay before it is detached.
pub const CLOSE_FADE_DURATION: Duration = Duration::from_millis(300);

/// Slide-and-fade of the photo off screen on a swipe close.
pub const EXIT_SLIDE_DURATION: Duration = Duration::from_millis(200);

/// Return of the photo to its resting position after a short drag.
pub const SETTLE_DURATION: Duration = Duration::from_millis(200);

// ==========================================================================
// Input Defaults
// ==========================================================================

/// Distance a pointer must travel before a pan is recognized.
pub const TOUCH_SLOP: f32 = 8.0;

/// Samples older than this (relative to the newest) are ignored for velocity.
pub const VELOCITY_SAMPLE_WINDOW: Duration = Duration::from_millis(100);

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_DISMISS_DISTANCE_RATIO > 0.0);
    assert!(DEFAULT_DISMISS_DISTANCE_RATIO >= MIN_DISMISS_DISTANCE_RATIO);
    assert!(DEFAULT_DISMISS_DISTANCE_RATIO <= MAX_DISMISS_DISTANCE_RATIO);

    assert!(MIN_FLING_VELOCITY > 0.0);
    assert!(DEFAULT_FLING_VELOCITY >= MIN_FLING_VELOCITY);
    assert!(DEFAULT_FLING_VELOCITY <= MAX_FLING_VELOCITY);

    assert!(MIN_DIMMER_FADE_RATIO > 0.0);
    assert!(DEFAULT_DIMMER_FADE_RATIO >= MIN_DIMMER_FADE_RATIO);
    assert!(DEFAULT_DIMMER_FADE_RATIO <= MAX_DIMMER_FADE_RATIO);

    assert!(MIN_ZOOM_SCALE > 0.0);
    assert!(DEFAULT_MAX_ZOOM_SCALE > MIN_ZOOM_SCALE);
    assert!(MAX_ZOOM_SCALE_LIMIT >= DEFAULT_MAX_ZOOM_SCALE);
    assert!(WHEEL_ZOOM_FACTOR > 1.0);

    assert!(TOUCH_SLOP >= 0.0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dismiss_defaults_are_valid() {
        assert_eq!(DEFAULT_DISMISS_DISTANCE_RATIO, 0.25);
        assert_eq!(DEFAULT_FLING_VELOCITY, 800.0);
        assert!(DEFAULT_DIMMER_FADE_RATIO < DEFAULT_DISMISS_DISTANCE_RATIO);
    }

    #[test]
    fn zoom_defaults_are_valid() {
        assert_eq!(MIN_ZOOM_SCALE, 1.0);
        assert_eq!(DEFAULT_MAX_ZOOM_SCALE, 2.0);
    }

    #[test]
    fn close_fade_outlasts_exit_slide() {
        assert!(CLOSE_FADE_DURATION >= EXIT_SLIDE_DURATION);
    }
}
