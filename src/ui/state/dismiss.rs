// SPDX-License-Identifier: MPL-2.0
//! Swipe-to-dismiss state management
//!
//! This module handles the vertical drag that closes the overlay:
//! - Tracking the gesture origin and vertical displacement
//! - Mapping displacement onto dimmer opacity
//! - Deciding on release whether to settle back or close, and in which direction

use crate::config::OverlaySettings;
use iced::Point;

/// Side of the screen the photo leaves through when closing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitDirection {
    Up,
    Down,
}

impl ExitDirection {
    /// Direction of a displacement or velocity. Zero counts as downward.
    #[must_use]
    pub fn from_delta(delta: f32) -> Self {
        if delta < 0.0 {
            ExitDirection::Up
        } else {
            ExitDirection::Down
        }
    }
}

/// Outcome of releasing a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Release {
    /// Return the photo to its resting position.
    Settle,
    /// Commit the dismissal.
    Close(ExitDirection),
}

/// Phases of the dismiss gesture.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DismissPhase {
    #[default]
    Idle,
    /// Following the pointer; `origin` is where the gesture began.
    Dragging { origin: Point },
    /// Animating back to the resting position.
    Settling,
    /// Committed to closing; no further gesture is accepted.
    Closing(ExitDirection),
}

/// Thresholds that decide what a release does, derived from the screen height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DismissThresholds {
    pub screen_height: f32,
    pub distance_ratio: f32,
    pub fling_velocity: f32,
    pub dimmer_fade_ratio: f32,
}

impl DismissThresholds {
    #[must_use]
    pub fn new(screen_height: f32, settings: &OverlaySettings) -> Self {
        Self {
            screen_height,
            distance_ratio: settings.dismiss_distance_ratio,
            fling_velocity: settings.fling_velocity,
            dimmer_fade_ratio: settings.dimmer_fade_ratio,
        }
    }

    /// Minimum displacement that closes on release.
    #[must_use]
    pub fn distance(&self) -> f32 {
        self.screen_height * self.distance_ratio
    }

    /// Dimmer opacity for a drag of `dy` points, clamped to `[0, 1]`.
    ///
    /// Opacity falls linearly with `|dy|` and reaches zero at
    /// `dimmer_fade_ratio * screen_height`.
    #[must_use]
    pub fn dimmer_opacity(&self, dy: f32) -> f32 {
        let fade_distance = self.screen_height * self.dimmer_fade_ratio;
        if fade_distance <= 0.0 {
            return if dy == 0.0 { 1.0 } else { 0.0 };
        }
        (1.0 - dy.abs() / fade_distance).clamp(0.0, 1.0)
    }

    /// Decides what releasing a drag with displacement `dy` and vertical
    /// velocity `vy` does. Distance wins over velocity.
    #[must_use]
    pub fn release(&self, dy: f32, vy: f32) -> Release {
        if dy.abs() >= self.distance() {
            Release::Close(ExitDirection::from_delta(dy))
        } else if vy.abs() >= self.fling_velocity {
            Release::Close(ExitDirection::from_delta(vy))
        } else {
            Release::Settle
        }
    }
}

/// Manages the dismiss gesture phase
#[derive(Debug, Clone, Default)]
pub struct DismissGesture {
    phase: DismissPhase,
}

impl DismissGesture {
    #[must_use]
    pub fn phase(&self) -> DismissPhase {
        self.phase
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DismissPhase::Dragging { .. })
    }

    #[must_use]
    pub fn is_closing(&self) -> bool {
        matches!(self.phase, DismissPhase::Closing(_))
    }

    /// Records the gesture origin. Ignored once closing.
    pub fn begin(&mut self, origin: Point) -> bool {
        if self.is_closing() {
            return false;
        }
        self.phase = DismissPhase::Dragging { origin };
        true
    }

    /// Vertical displacement of `point` from the gesture origin, while dragging.
    #[must_use]
    pub fn displacement(&self, point: Point) -> Option<f32> {
        match self.phase {
            DismissPhase::Dragging { origin } => Some(point.y - origin.y),
            _ => None,
        }
    }

    /// Ends the drag at `point` and moves to `Settling` or `Closing`.
    pub fn end(
        &mut self,
        point: Point,
        vy: f32,
        thresholds: &DismissThresholds,
    ) -> Option<Release> {
        let dy = self.displacement(point)?;
        let release = thresholds.release(dy, vy);
        self.phase = match release {
            Release::Settle => DismissPhase::Settling,
            Release::Close(direction) => DismissPhase::Closing(direction),
        };
        Some(release)
    }

    /// Abandons an in-progress drag. Returns whether a drag was active.
    pub fn cancel(&mut self) -> bool {
        if self.is_dragging() {
            self.phase = DismissPhase::Idle;
            true
        } else {
            false
        }
    }

    /// The settle animation has finished.
    pub fn settled(&mut self) {
        if self.phase == DismissPhase::Settling {
            self.phase = DismissPhase::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    fn thresholds(screen_height: f32) -> DismissThresholds {
        DismissThresholds::new(screen_height, &OverlaySettings::default())
    }

    #[test]
    fn zero_delta_exits_downward() {
        assert_eq!(ExitDirection::from_delta(0.0), ExitDirection::Down);
        assert_eq!(ExitDirection::from_delta(-0.1), ExitDirection::Up);
    }

    #[test]
    fn short_slow_drags_settle() {
        let t = thresholds(800.0);
        for dy in [-199.0, -120.0, -1.0, 0.0, 1.0, 150.0, 199.9] {
            for vy in [-799.0, -10.0, 0.0, 500.0, 799.9] {
                assert_eq!(t.release(dy, vy), Release::Settle, "dy={dy} vy={vy}");
            }
        }
    }

    #[test]
    fn long_drags_close_in_drag_direction() {
        let t = thresholds(800.0);
        for dy in [200.0, 220.0, 799.0] {
            // Distance wins even when the finger flicks the other way.
            assert_eq!(t.release(dy, -2000.0), Release::Close(ExitDirection::Down));
            assert_eq!(t.release(-dy, 2000.0), Release::Close(ExitDirection::Up));
        }
    }

    #[test]
    fn fast_flicks_close_in_velocity_direction() {
        let t = thresholds(800.0);
        for vy in [800.0, 1200.0, 5000.0] {
            assert_eq!(t.release(10.0, vy), Release::Close(ExitDirection::Down));
            assert_eq!(t.release(10.0, -vy), Release::Close(ExitDirection::Up));
        }
    }

    #[test]
    fn dimmer_opacity_fades_out_at_a_fifth_of_the_screen() {
        let t = thresholds(800.0);
        assert_abs_diff_eq!(t.dimmer_opacity(0.0), 1.0);
        assert_abs_diff_eq!(t.dimmer_opacity(80.0), 0.5, epsilon = 1e-6);
        assert_abs_diff_eq!(t.dimmer_opacity(-80.0), 0.5, epsilon = 1e-6);
        assert_abs_diff_eq!(t.dimmer_opacity(160.0), 0.0);
        assert_abs_diff_eq!(t.dimmer_opacity(10_000.0), 0.0);
    }

    #[test]
    fn dimmer_opacity_is_monotonic_in_distance() {
        let t = thresholds(640.0);
        let mut previous = f32::INFINITY;
        for step in 0..=200 {
            let opacity = t.dimmer_opacity(step as f32 * 4.0);
            assert!((0.0..=1.0).contains(&opacity));
            assert!(opacity <= previous);
            previous = opacity;
        }
    }

    #[test]
    fn gesture_tracks_displacement_from_origin() {
        let mut gesture = DismissGesture::default();
        assert!(gesture.displacement(Point::new(0.0, 50.0)).is_none());

        gesture.begin(Point::new(120.0, 300.0));
        assert_eq!(gesture.displacement(Point::new(140.0, 420.0)), Some(120.0));
        assert_eq!(gesture.displacement(Point::new(140.0, 250.0)), Some(-50.0));
    }

    #[test]
    fn end_moves_to_settling_then_idle() {
        let mut gesture = DismissGesture::default();
        gesture.begin(Point::new(0.0, 100.0));

        let release = gesture.end(Point::new(0.0, 250.0), 0.0, &thresholds(800.0));
        assert_eq!(release, Some(Release::Settle));
        assert_eq!(gesture.phase(), DismissPhase::Settling);

        gesture.settled();
        assert_eq!(gesture.phase(), DismissPhase::Idle);
    }

    #[test]
    fn end_without_begin_is_ignored() {
        let mut gesture = DismissGesture::default();
        assert!(gesture.end(Point::new(0.0, 500.0), 0.0, &thresholds(800.0)).is_none());
        assert_eq!(gesture.phase(), DismissPhase::Idle);
    }

    #[test]
    fn closing_rejects_new_gestures() {
        let mut gesture = DismissGesture::default();
        gesture.begin(Point::ORIGIN);
        gesture.end(Point::new(0.0, -300.0), 0.0, &thresholds(800.0));
        assert_eq!(gesture.phase(), DismissPhase::Closing(ExitDirection::Up));

        assert!(!gesture.begin(Point::ORIGIN));
        assert!(!gesture.cancel());
        assert!(gesture.is_closing());
    }

    #[test]
    fn cancel_returns_to_idle() {
        let mut gesture = DismissGesture::default();
        gesture.begin(Point::ORIGIN);
        assert!(gesture.cancel());
        assert_eq!(gesture.phase(), DismissPhase::Idle);
        assert!(!gesture.cancel());
    }
}
