// SPDX-License-Identifier: MPL-2.0
//! Fixed-duration value transitions.
//!
//! Time is always passed in explicitly, so a transition sampled at the same
//! instant yields the same value. The overlay advances every transition from
//! its frame tick and treats a transition reaching its end as the completion
//! callback.

use iced::Point;
use std::time::{Duration, Instant};

/// Timing curve applied to a transition's progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    #[default]
    Linear,
    /// Fast start, gentle landing.
    EaseOut,
}

impl Easing {
    /// Maps linear progress in `[0, 1]` onto the curve.
    #[must_use]
    pub fn apply(self, progress: f32) -> f32 {
        let t = progress.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
        }
    }
}

/// Values that can be blended between two endpoints.
pub trait Interpolate: Copy {
    #[must_use]
    fn interpolate(self, to: Self, t: f32) -> Self;
}

impl Interpolate for f32 {
    fn interpolate(self, to: Self, t: f32) -> Self {
        self + (to - self) * t
    }
}

impl Interpolate for Point {
    fn interpolate(self, to: Self, t: f32) -> Self {
        Point::new(self.x.interpolate(to.x, t), self.y.interpolate(to.y, t))
    }
}

/// A single in-flight transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition<T> {
    from: T,
    to: T,
    started_at: Instant,
    duration: Duration,
    easing: Easing,
}

impl<T: Interpolate> Transition<T> {
    #[must_use]
    pub fn new(from: T, to: T, started_at: Instant, duration: Duration, easing: Easing) -> Self {
        Self {
            from,
            to,
            started_at,
            duration,
            easing,
        }
    }

    /// Progress in `[0, 1]` at `now`, before easing.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    #[must_use]
    pub fn value_at(&self, now: Instant) -> T {
        let progress = self.progress(now);
        if progress >= 1.0 {
            // Land exactly on the target instead of a float approximation of it.
            return self.to;
        }
        self.from.interpolate(self.to, self.easing.apply(progress))
    }

    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    #[must_use]
    pub fn target(&self) -> T {
        self.to
    }
}

/// A value that is either at rest or moving towards a target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animated<T> {
    current: T,
    transition: Option<Transition<T>>,
}

impl<T: Interpolate> Animated<T> {
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            current: value,
            transition: None,
        }
    }

    /// Value as of the last tick (or the last `set`).
    #[must_use]
    pub fn get(&self) -> T {
        self.current
    }

    /// Where the value will come to rest.
    #[must_use]
    pub fn target(&self) -> T {
        self.transition.map_or(self.current, |t| t.target())
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    /// Jumps to `value`, dropping any running transition.
    pub fn set(&mut self, value: T) {
        self.current = value;
        self.transition = None;
    }

    /// Starts a transition from the current value, replacing any running one.
    pub fn animate_to(&mut self, target: T, now: Instant, duration: Duration, easing: Easing) {
        self.transition = Some(Transition::new(
            self.current,
            target,
            now,
            duration,
            easing,
        ));
    }

    /// Samples the running transition at `now`.
    ///
    /// Returns `true` exactly once, on the tick where the transition completes.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(transition) = self.transition else {
            return false;
        };
        self.current = transition.value_at(now);
        if transition.is_finished(now) {
            self.transition = None;
            true
        } else {
            false
        }
    }
}

impl<T: Interpolate + Default> Default for Animated<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
