// SPDX-License-Identifier: MPL-2.0
//! Two-finger pinch tracking.

use iced::touch::Finger;
use iced::Point;

/// Fingers closer than this at pinch start are ignored: the ratio is too noisy.
const MIN_INITIAL_DISTANCE: f32 = 10.0;

/// Snapshot taken when the second finger lands.
#[derive(Debug, Clone, Copy, PartialEq)]
struct PinchStart {
    distance: f32,
    scale: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PinchUpdate {
    /// Two fingers are down; any single-finger gesture should stop.
    Started,
    /// Requested scale around the finger midpoint.
    Zoom { scale: f32, anchor: Point },
    /// A finger lifted; the zoom gesture is over.
    Ended,
}

/// Tracks up to two fingers and derives a pinch scale from their spread
#[derive(Debug, Clone, Default)]
pub struct PinchTracker {
    fingers: Vec<(Finger, Point)>,
    start: Option<PinchStart>,
}

impl PinchTracker {
    #[must_use]
    pub fn is_pinching(&self) -> bool {
        self.start.is_some()
    }

    /// Number of fingers currently down.
    #[must_use]
    pub fn finger_count(&self) -> usize {
        self.fingers.len()
    }

    /// Whether `finger` is the first (primary) finger down.
    #[must_use]
    pub fn is_primary(&self, finger: Finger) -> bool {
        self.fingers.first().is_some_and(|(id, _)| *id == finger)
    }

    /// A finger landed. `current_scale` is the zoom scale at that moment.
    pub fn press(
        &mut self,
        finger: Finger,
        position: Point,
        current_scale: f32,
    ) -> Option<PinchUpdate> {
        if self.fingers.iter().any(|(id, _)| *id == finger) || self.fingers.len() >= 2 {
            return None;
        }
        self.fingers.push((finger, position));
        if self.fingers.len() < 2 {
            return None;
        }

        let (_, distance) = self.geometry()?;
        if distance < MIN_INITIAL_DISTANCE {
            return None;
        }
        self.start = Some(PinchStart {
            distance,
            scale: current_scale,
        });
        Some(PinchUpdate::Started)
    }

    pub fn moved(&mut self, finger: Finger, position: Point) -> Option<PinchUpdate> {
        let slot = self.fingers.iter_mut().find(|(id, _)| *id == finger)?;
        slot.1 = position;

        let start = self.start?;
        let (anchor, distance) = self.geometry()?;
        Some(PinchUpdate::Zoom {
            scale: start.scale * distance / start.distance,
            anchor,
        })
    }

    /// A finger lifted or was lost.
    pub fn lifted(&mut self, finger: Finger) -> Option<PinchUpdate> {
        let index = self.fingers.iter().position(|(id, _)| *id == finger)?;
        self.fingers.remove(index);
        self.start.take().map(|_| PinchUpdate::Ended)
    }

    /// Midpoint and distance of exactly two fingers.
    fn geometry(&self) -> Option<(Point, f32)> {
        match self.fingers.as_slice() {
            [(_, a), (_, b)] => Some((
                Point::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0),
                a.distance(*b),
            )),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn one_finger_is_not_a_pinch() {
        let mut pinch = PinchTracker::default();
        assert!(pinch.press(Finger(1), Point::new(10.0, 10.0), 1.0).is_none());
        assert!(pinch.is_primary(Finger(1)));
        assert!(!pinch.is_pinching());
        assert!(pinch.moved(Finger(1), Point::new(20.0, 20.0)).is_none());
    }

    #[test]
    fn spreading_fingers_scales_from_start() {
        let mut pinch = PinchTracker::default();
        pinch.press(Finger(1), Point::new(100.0, 200.0), 1.0);
        let started = pinch.press(Finger(2), Point::new(200.0, 200.0), 1.0);
        assert_eq!(started, Some(PinchUpdate::Started));

        match pinch.moved(Finger(2), Point::new(300.0, 200.0)) {
            Some(PinchUpdate::Zoom { scale, anchor }) => {
                assert_abs_diff_eq!(scale, 2.0);
                assert_eq!(anchor, Point::new(200.0, 200.0));
            }
            other => panic!("expected zoom update, got {other:?}"),
        }
    }

    #[test]
    fn lifting_a_finger_ends_the_pinch() {
        let mut pinch = PinchTracker::default();
        pinch.press(Finger(1), Point::new(0.0, 0.0), 1.5);
        pinch.press(Finger(2), Point::new(0.0, 100.0), 1.5);

        assert_eq!(pinch.lifted(Finger(1)), Some(PinchUpdate::Ended));
        assert!(!pinch.is_pinching());
        assert_eq!(pinch.finger_count(), 1);
        assert!(pinch.lifted(Finger(2)).is_none());
    }

    #[test]
    fn fingers_too_close_do_not_start() {
        let mut pinch = PinchTracker::default();
        pinch.press(Finger(1), Point::new(50.0, 50.0), 1.0);
        assert!(pinch.press(Finger(2), Point::new(52.0, 51.0), 1.0).is_none());
        assert!(!pinch.is_pinching());
    }

    #[test]
    fn third_finger_is_ignored() {
        let mut pinch = PinchTracker::default();
        pinch.press(Finger(1), Point::new(0.0, 0.0), 1.0);
        pinch.press(Finger(2), Point::new(100.0, 0.0), 1.0);
        assert!(pinch.press(Finger(3), Point::new(50.0, 50.0), 1.0).is_none());
        assert_eq!(pinch.finger_count(), 2);
    }
}
