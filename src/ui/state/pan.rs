// SPDX-License-Identifier: MPL-2.0
//! Pan gesture recognition
//!
//! Turns raw press/move/release samples into `Began → Changed → Ended`
//! gesture events with a velocity estimate. A drag is only recognized after
//! it leaves the touch slop; at that moment an admission filter decides
//! whether the gesture begins or fails.

use crate::config::{TOUCH_SLOP, VELOCITY_SAMPLE_WINDOW};
use iced::{Point, Vector};
use std::collections::VecDeque;
use std::time::Instant;

/// Samples kept for velocity estimation, regardless of age.
const MAX_SAMPLES: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    Began,
    Changed,
    Ended,
    Cancelled,
    /// The admission filter rejected the drag.
    Failed,
}

/// A recognized pan update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanEvent {
    pub phase: GesturePhase,
    pub location: Point,
    /// Points per second.
    pub velocity: Vector,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
enum Tracking {
    #[default]
    Idle,
    /// Pressed but still within the slop.
    Possible { start: Point },
    Recognized,
    Rejected,
}

/// Manages pan recognition for one pointer
#[derive(Debug, Clone)]
pub struct PanRecognizer {
    tracking: Tracking,
    samples: VecDeque<(Instant, Point)>,
    slop: f32,
}

impl Default for PanRecognizer {
    fn default() -> Self {
        Self::new(TOUCH_SLOP)
    }
}

impl PanRecognizer {
    #[must_use]
    pub fn new(slop: f32) -> Self {
        Self {
            tracking: Tracking::Idle,
            samples: VecDeque::with_capacity(MAX_SAMPLES),
            slop,
        }
    }

    /// Pointer went down at `point`.
    pub fn press(&mut self, point: Point, now: Instant) {
        self.samples.clear();
        self.record(point, now);
        self.tracking = Tracking::Possible { start: point };
    }

    /// Pointer moved. `admit` is consulted once, with the current velocity,
    /// when the drag leaves the slop.
    pub fn move_to(
        &mut self,
        point: Point,
        now: Instant,
        admit: impl FnOnce(Vector) -> bool,
    ) -> Option<PanEvent> {
        match self.tracking {
            Tracking::Idle | Tracking::Rejected => None,
            Tracking::Possible { start } => {
                self.record(point, now);
                if point.distance(start) <= self.slop {
                    return None;
                }
                let velocity = self.velocity();
                if admit(velocity) {
                    self.tracking = Tracking::Recognized;
                    Some(self.event(GesturePhase::Began, point, velocity))
                } else {
                    self.tracking = Tracking::Rejected;
                    Some(self.event(GesturePhase::Failed, point, velocity))
                }
            }
            Tracking::Recognized => {
                self.record(point, now);
                Some(self.event(GesturePhase::Changed, point, self.velocity()))
            }
        }
    }

    /// Pointer went up at `point`.
    pub fn release(&mut self, point: Point, now: Instant) -> Option<PanEvent> {
        let tracking = std::mem::take(&mut self.tracking);
        if tracking != Tracking::Recognized {
            self.samples.clear();
            return None;
        }
        self.record(point, now);
        let velocity = self.velocity();
        self.samples.clear();
        Some(self.event(GesturePhase::Ended, point, velocity))
    }

    /// The pointer was taken over (e.g. a second finger started a pinch).
    pub fn cancel(&mut self) -> Option<PanEvent> {
        let tracking = std::mem::take(&mut self.tracking);
        let last = self.samples.back().map(|&(_, p)| p);
        self.samples.clear();
        match (tracking, last) {
            (Tracking::Recognized, Some(location)) => Some(PanEvent {
                phase: GesturePhase::Cancelled,
                location,
                velocity: Vector::ZERO,
            }),
            _ => None,
        }
    }

    fn record(&mut self, point: Point, now: Instant) {
        if self.samples.len() == MAX_SAMPLES {
            self.samples.pop_front();
        }
        self.samples.push_back((now, point));
    }

    /// Displacement over the recent sample window, in points per second.
    ///
    /// When the window holds only the newest sample (the pointer rested
    /// before moving), the sample just before it is used instead.
    fn velocity(&self) -> Vector {
        let Some(&(newest_at, newest)) = self.samples.back() else {
            return Vector::ZERO;
        };
        let newest_index = self.samples.len() - 1;
        let in_window = self
            .samples
            .iter()
            .position(|(at, _)| newest_at.saturating_duration_since(*at) <= VELOCITY_SAMPLE_WINDOW)
            .unwrap_or(newest_index);
        let oldest_index = if in_window == newest_index {
            newest_index.saturating_sub(1)
        } else {
            in_window
        };
        let (oldest_at, oldest) = self.samples[oldest_index];

        let dt = newest_at.saturating_duration_since(oldest_at).as_secs_f32();
        if dt <= f32::EPSILON {
            return Vector::ZERO;
        }
        (newest - oldest) * (1.0 / dt)
    }

    fn event(&self, phase: GesturePhase, location: Point, velocity: Vector) -> PanEvent {
        PanEvent {
            phase,
            location,
            velocity,
        }
    }
}
