// SPDX-License-Identifier: MPL-2.0
//! Zoom surface state management
//!
//! This module handles the zoomable container hosting the photo:
//! - Zoom scale, type-clamped to the configured range
//! - Recentering the scaled photo inside the screen
//! - Scroll offset for panning a photo larger than the screen

use crate::config::{DEFAULT_MAX_ZOOM_SCALE, MIN_ZOOM_SCALE};
use iced::{Point, Size, Vector};

/// Zoom scale, guaranteed to be within `[min, max]` of its surface.
///
/// This type ensures that scale values are always valid, eliminating
/// the need for manual clamping at usage sites.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomScale {
    value: f32,
    min: f32,
    max: f32,
}

impl ZoomScale {
    /// Creates a scale range starting at `min`. `max` below `min` collapses to `min`.
    #[must_use]
    pub fn new(min: f32, max: f32) -> Self {
        Self {
            value: min,
            min,
            max: max.max(min),
        }
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.value
    }

    #[must_use]
    pub fn min(self) -> f32 {
        self.min
    }

    #[must_use]
    pub fn max(self) -> f32 {
        self.max
    }

    /// Returns a copy at `value`, clamped to the range.
    #[must_use]
    pub fn with_value(self, value: f32) -> Self {
        Self {
            value: value.clamp(self.min, self.max),
            ..self
        }
    }
}

impl Default for ZoomScale {
    fn default() -> Self {
        Self::new(MIN_ZOOM_SCALE, DEFAULT_MAX_ZOOM_SCALE)
    }
}

/// Manages the zoomable container around the image surface
#[derive(Debug, Clone)]
pub struct ZoomSurface {
    /// Visible area (the screen).
    bounds: Size,
    /// Size of the image surface at scale 1.
    base_size: Size,
    scale: ZoomScale,
    /// How far the content is scrolled. Zero whenever the content fits.
    offset: Vector,
}

impl ZoomSurface {
    #[must_use]
    pub fn new(bounds: Size, base_size: Size, scale: ZoomScale) -> Self {
        Self {
            bounds,
            base_size,
            scale,
            offset: Vector::ZERO,
        }
    }

    #[must_use]
    pub fn scale(&self) -> ZoomScale {
        self.scale
    }

    /// Whether the photo is shown at its resting scale.
    ///
    /// The minimum is stored exactly, so a clamped-down scale compares equal.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_at_rest(&self) -> bool {
        self.scale.value() == self.scale.min()
    }

    #[must_use]
    pub fn offset(&self) -> Vector {
        self.offset
    }

    /// Rendered size of the image surface at the current scale.
    #[must_use]
    pub fn content_size(&self) -> Size {
        let scale = self.scale.value();
        Size::new(self.base_size.width * scale, self.base_size.height * scale)
    }

    /// Origin of the image surface inside the content that centers it within
    /// the bounds. Never negative: a surface larger than the bounds starts at
    /// zero and is reached by scrolling.
    #[must_use]
    pub fn centered_origin(&self) -> Point {
        let content = self.content_size();
        Point::new(
            ((self.bounds.width - content.width) / 2.0).max(0.0),
            ((self.bounds.height - content.height) / 2.0).max(0.0),
        )
    }

    /// Upper bound of the scroll offset on each axis.
    #[must_use]
    pub fn max_offset(&self) -> Vector {
        let content = self.content_size();
        Vector::new(
            (content.width - self.bounds.width).max(0.0),
            (content.height - self.bounds.height).max(0.0),
        )
    }

    /// Changes the scale keeping the content under `anchor` (screen
    /// coordinates) in place. Returns whether the scale changed.
    pub fn zoom_to(&mut self, scale: f32, anchor: Point) -> bool {
        let old_scale = self.scale.value();
        let new = self.scale.with_value(scale);
        if (new.value() - old_scale).abs() <= f32::EPSILON {
            return false;
        }

        // Point of the unscaled photo currently under the anchor.
        let old_origin = self.centered_origin();
        let local = Vector::new(
            (anchor.x + self.offset.x - old_origin.x) / old_scale,
            (anchor.y + self.offset.y - old_origin.y) / old_scale,
        );

        self.scale = new;
        let new_origin = self.centered_origin();
        let wanted = Vector::new(
            new_origin.x + local.x * new.value() - anchor.x,
            new_origin.y + local.y * new.value() - anchor.y,
        );
        self.offset = self.clamp_offset(wanted);
        true
    }

    /// Scrolls the content by a pointer movement of `delta`.
    pub fn scroll_by(&mut self, delta: Vector) {
        self.offset = self.clamp_offset(self.offset - delta);
    }

    /// Drops the scroll offset, used when snapping back to rest.
    pub fn reset_offset(&mut self) {
        self.offset = Vector::ZERO;
    }

    fn clamp_offset(&self, offset: Vector) -> Vector {
        let max = self.max_offset();
        Vector::new(offset.x.clamp(0.0, max.x), offset.y.clamp(0.0, max.y))
    }
}
