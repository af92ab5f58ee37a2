// SPDX-License-Identifier: MPL-2.0
//! Full-screen photo overlay.
//!
//! The overlay owns a black dimmer, a zoom surface and the image surface on
//! top of it. Input arrives either as raw [`InputEvent`]s (through
//! [`PhotoOverlay::handle`]) or directly through the `on_gesture_*` and
//! `on_zoom*` entry points, which is what the raw path is translated into.
//!
//! ```text
//! Created ──open──▶ Opening ──fade in──▶ Open
//!                      │                   │
//!                      └──────close────────┴──▶ Closing
//!                                                  │
//!                                              fade out
//!                                                  ▼
//!                                           Closed (Detach)
//! ```

use super::host::HostSurface;
use crate::config::{OverlaySettings, DOUBLE_TAP_THRESHOLD, WHEEL_ZOOM_FACTOR};
use crate::photo::Photo;
use crate::ui::state::{
    Animated, DismissGesture, DismissPhase, DismissThresholds, Easing, ExitDirection,
    GesturePhase, PanEvent, PanRecognizer, PinchTracker, PinchUpdate, Release, ZoomScale,
    ZoomSurface,
};
use crate::ui::styles;
use crate::ui::widgets::positioned;
use iced::advanced::image::Renderer as ImageRenderer;
use iced::touch::Finger;
use iced::widget::{image, opaque, Column, Container, Stack};
use iced::{ContentFit, Element, Length, Point, Size, Vector};
use std::time::Instant;

/// Where the overlay is in its attach/detach cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    /// Constructed, not yet attached.
    Created,
    /// Attached and fading in.
    Opening,
    Open,
    /// Fading out; input is ignored.
    Closing,
    /// Fade-out finished; the host has been told to detach.
    Closed,
}

/// The photo layer.
#[derive(Debug, Clone)]
pub struct ImageSurface {
    /// Top-left corner inside the zoom surface's content.
    position: Animated<Point>,
    size: Size,
    opacity: Animated<f32>,
}

impl ImageSurface {
    #[must_use]
    pub fn position(&self) -> Point {
        self.position.get()
    }

    /// Where the current animation (if any) will leave the surface.
    #[must_use]
    pub fn target_position(&self) -> Point {
        self.position.target()
    }

    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    #[must_use]
    pub fn opacity(&self) -> f32 {
        self.opacity.get()
    }
}

/// Raw input, already in the overlay's coordinate space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary mouse button pressed at the last known cursor position.
    PointerPressed,
    PointerMoved(Point),
    PointerReleased,
    FingerPressed { finger: Finger, position: Point },
    FingerMoved { finger: Finger, position: Point },
    FingerLifted { finger: Finger, position: Point },
    /// The platform lost track of a finger; its gesture is cancelled.
    FingerLost { finger: Finger },
    /// Positive lines zoom in.
    WheelScrolled { lines: f32 },
    Escape,
}

/// Messages for the overlay.
#[derive(Debug, Clone)]
pub enum Message {
    Input(InputEvent),
    /// Animation frame.
    Tick(Instant),
    /// Close without a gesture.
    Close,
}

/// Effects produced for the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The overlay finished closing and must be detached.
    Detach,
}

#[derive(Debug, Clone)]
pub struct PhotoOverlay {
    photo: Photo,
    screen: Size,
    settings: OverlaySettings,
    thresholds: DismissThresholds,
    lifecycle: Lifecycle,
    /// Opacity of the whole overlay.
    opacity: Animated<f32>,
    dimmer: f32,
    surface: ImageSurface,
    /// Resting, centered position of the image surface.
    origin: Point,
    zoom: ZoomSurface,
    dismiss: DismissGesture,
    pan: PanRecognizer,
    pinch: PinchTracker,
    cursor: Option<Point>,
    press_point: Option<Point>,
    /// Last position of a drag that scrolls the zoomed photo.
    scroll_from: Option<Point>,
    tap_candidate: bool,
    last_tap: Option<Instant>,
}

impl PhotoOverlay {
    /// Lays the photo out centered at natural size within `screen`.
    ///
    /// A photo larger than the screen is scaled down to fit.
    #[must_use]
    pub fn new(photo: Photo, screen: Size, settings: OverlaySettings) -> Self {
        let base_size = fit_within(photo.size(), screen);
        let zoom = ZoomSurface::new(
            screen,
            base_size,
            ZoomScale::new(settings.min_zoom_scale, settings.max_zoom_scale),
        );
        let origin = zoom.centered_origin();

        Self {
            photo,
            screen,
            settings,
            thresholds: DismissThresholds::new(screen.height, &settings),
            lifecycle: Lifecycle::Created,
            opacity: Animated::new(1.0),
            dimmer: 1.0,
            surface: ImageSurface {
                position: Animated::new(origin),
                size: base_size,
                opacity: Animated::new(1.0),
            },
            origin,
            zoom,
            dismiss: DismissGesture::default(),
            pan: PanRecognizer::new(settings.touch_slop),
            pinch: PinchTracker::default(),
            cursor: None,
            press_point: None,
            scroll_from: None,
            tap_candidate: false,
            last_tap: None,
        }
    }

    /// Attaches the overlay to `host` and fades it in.
    ///
    /// Ownership moves to the host, which drops the overlay once it reports
    /// [`Effect::Detach`].
    pub fn open(mut self, host: &mut impl HostSurface, now: Instant) {
        if self.lifecycle != Lifecycle::Created {
            log::warn!("Ignoring open of an overlay in {:?} state", self.lifecycle);
            return;
        }
        self.opacity.set(0.0);
        self.opacity
            .animate_to(1.0, now, self.settings.open_fade, Easing::Linear);
        self.lifecycle = Lifecycle::Opening;
        log::debug!(
            "Opening photo overlay ({}x{} on {}x{})",
            self.photo.width(),
            self.photo.height(),
            self.screen.width,
            self.screen.height
        );
        host.attach(self);
    }

    /// Fades the overlay out without moving the photo.
    ///
    /// Returns `false` when the overlay is not attached or already closing.
    pub fn close(&mut self, now: Instant) -> bool {
        match self.lifecycle {
            Lifecycle::Opening | Lifecycle::Open => {}
            Lifecycle::Created | Lifecycle::Closing | Lifecycle::Closed => return false,
        }
        self.pan.cancel();
        self.on_gesture_cancel();
        log::debug!("Closing photo overlay");
        self.begin_fade_out(now);
        true
    }

    /// Handle an overlay message.
    pub fn handle(&mut self, message: Message, now: Instant) -> Effect {
        match message {
            Message::Input(event) => {
                self.on_input(event, now);
                Effect::None
            }
            Message::Tick(at) => self.tick(at),
            Message::Close => {
                self.close(now);
                Effect::None
            }
        }
    }

    /// Advances all animations to `now`.
    pub fn tick(&mut self, now: Instant) -> Effect {
        if self.surface.position.tick(now) {
            self.dismiss.settled();
        }
        self.surface.opacity.tick(now);

        if !self.opacity.tick(now) {
            return Effect::None;
        }
        match self.lifecycle {
            Lifecycle::Opening => {
                self.lifecycle = Lifecycle::Open;
                Effect::None
            }
            Lifecycle::Closing => {
                self.lifecycle = Lifecycle::Closed;
                log::debug!("Photo overlay closed");
                Effect::Detach
            }
            Lifecycle::Created | Lifecycle::Open | Lifecycle::Closed => Effect::None,
        }
    }

    // ------------------------------------------------------------------
    // Dismiss gesture
    // ------------------------------------------------------------------

    /// Admission filter for the dismiss pan: only mostly-vertical drags.
    #[must_use]
    pub fn should_begin_gesture(velocity: Vector) -> bool {
        velocity.y.abs() > velocity.x.abs()
    }

    pub fn on_gesture_begin(&mut self, point: Point) {
        if !self.accepts_gestures() {
            return;
        }
        if self.dismiss.begin(point) {
            // Freeze a settle animation that may still be running.
            self.surface.position.set(self.surface.position.get());
        }
    }

    pub fn on_gesture_change(&mut self, point: Point) {
        if !self.accepts_gestures() {
            return;
        }
        let Some(dy) = self.dismiss.displacement(point) else {
            return;
        };
        self.surface
            .position
            .set(Point::new(self.origin.x, self.origin.y + dy));
        self.dimmer = self.thresholds.dimmer_opacity(dy);
    }

    pub fn on_gesture_end(&mut self, point: Point, velocity: Vector, now: Instant) {
        if !self.accepts_gestures() {
            return;
        }
        match self.dismiss.end(point, velocity.y, &self.thresholds) {
            Some(Release::Close(direction)) => {
                log::debug!("Dismissing photo overlay {direction:?} (vy = {:.0})", velocity.y);
                self.commit_close(direction, now);
            }
            Some(Release::Settle) => {
                self.dimmer = 1.0;
                self.surface
                    .position
                    .animate_to(self.origin, now, self.settings.settle, Easing::EaseOut);
            }
            None => {}
        }
    }

    /// Abandons a drag: the photo snaps back and the dimmer is restored.
    pub fn on_gesture_cancel(&mut self) {
        if self.dismiss.cancel() {
            self.surface.position.set(self.origin);
            self.dimmer = 1.0;
        }
    }

    // ------------------------------------------------------------------
    // Zoom surface
    // ------------------------------------------------------------------

    /// The zoom target: the image surface.
    #[must_use]
    pub fn view_for_zooming(&self) -> &ImageSurface {
        &self.surface
    }

    /// Requests `scale` around `anchor` (screen coordinates).
    pub fn on_zoom(&mut self, scale: f32, anchor: Point) {
        if !self.accepts_input() || self.dismiss.phase() != DismissPhase::Idle {
            return;
        }
        if self.zoom.zoom_to(scale, anchor) {
            self.did_zoom();
        }
    }

    /// The zoom gesture finished.
    pub fn on_zoom_end(&mut self) {
        if self.accepts_input() {
            self.did_end_zooming();
        }
    }

    fn did_zoom(&mut self) {
        self.surface.size = self.zoom.content_size();
        self.surface.position.set(self.zoom.centered_origin());
    }

    fn did_end_zooming(&mut self) {
        if self.zoom.is_at_rest() {
            self.zoom.reset_offset();
            self.surface.size = self.zoom.content_size();
            self.surface.position.set(self.origin);
        }
    }

    fn toggle_zoom(&mut self, anchor: Point) {
        let scale = self.zoom.scale();
        let target = if self.zoom.is_at_rest() {
            scale.max()
        } else {
            scale.min()
        };
        self.on_zoom(target, anchor);
        self.on_zoom_end();
    }

    // ------------------------------------------------------------------
    // Raw input
    // ------------------------------------------------------------------

    fn on_input(&mut self, event: InputEvent, now: Instant) {
        if !self.accepts_input() {
            return;
        }
        match event {
            InputEvent::PointerPressed => {
                if let Some(point) = self.cursor {
                    self.pointer_pressed(point, now);
                }
            }
            InputEvent::PointerMoved(point) => self.pointer_moved(point, now),
            InputEvent::PointerReleased => {
                if let Some(point) = self.cursor {
                    self.pointer_released(point, now);
                }
            }
            InputEvent::FingerPressed { finger, position } => {
                let scale = self.zoom.scale().value();
                match self.pinch.press(finger, position, scale) {
                    Some(PinchUpdate::Started) => self.abandon_pointer(),
                    _ if self.pinch.finger_count() == 1 && self.pinch.is_primary(finger) => {
                        self.cursor = Some(position);
                        self.pointer_pressed(position, now);
                    }
                    _ => {}
                }
            }
            InputEvent::FingerMoved { finger, position } => {
                match self.pinch.moved(finger, position) {
                    Some(PinchUpdate::Zoom { scale, anchor }) => self.on_zoom(scale, anchor),
                    _ if !self.pinch.is_pinching() && self.pinch.is_primary(finger) => {
                        self.pointer_moved(position, now);
                    }
                    _ => {}
                }
            }
            InputEvent::FingerLifted { finger, position } => {
                let was_primary = self.pinch.is_primary(finger);
                match self.pinch.lifted(finger) {
                    Some(PinchUpdate::Ended) => self.on_zoom_end(),
                    _ if was_primary => self.pointer_released(position, now),
                    _ => {}
                }
            }
            InputEvent::FingerLost { finger } => {
                let was_primary = self.pinch.is_primary(finger);
                match self.pinch.lifted(finger) {
                    Some(PinchUpdate::Ended) => self.on_zoom_end(),
                    _ if was_primary => self.abandon_pointer(),
                    _ => {}
                }
            }
            InputEvent::WheelScrolled { lines } => {
                if lines == 0.0 {
                    return;
                }
                let anchor = self.cursor.unwrap_or(Point::new(
                    self.screen.width / 2.0,
                    self.screen.height / 2.0,
                ));
                let scale = self.zoom.scale().value() * WHEEL_ZOOM_FACTOR.powf(lines);
                self.on_zoom(scale, anchor);
                self.on_zoom_end();
            }
            InputEvent::Escape => {
                self.close(now);
            }
        }
    }

    fn pointer_pressed(&mut self, point: Point, now: Instant) {
        self.press_point = Some(point);
        self.tap_candidate = true;
        if self.zoom.is_at_rest() {
            self.pan.press(point, now);
        } else {
            self.scroll_from = Some(point);
        }
    }

    fn pointer_moved(&mut self, point: Point, now: Instant) {
        self.cursor = Some(point);
        if self
            .press_point
            .is_some_and(|start| start.distance(point) > self.settings.touch_slop)
        {
            self.tap_candidate = false;
        }

        if let Some(from) = self.scroll_from {
            self.zoom.scroll_by(point - from);
            self.scroll_from = Some(point);
            return;
        }
        if let Some(event) = self.pan.move_to(point, now, Self::should_begin_gesture) {
            self.on_pan(event, now);
        }
    }

    fn pointer_released(&mut self, point: Point, now: Instant) {
        self.cursor = Some(point);
        self.scroll_from = None;
        self.press_point = None;
        if let Some(event) = self.pan.release(point, now) {
            self.on_pan(event, now);
        }
        if std::mem::take(&mut self.tap_candidate) {
            self.register_tap(point, now);
        }
    }

    /// A second finger took over: stop whatever the first one was doing.
    fn abandon_pointer(&mut self) {
        if self.pan.cancel().is_some() {
            self.on_gesture_cancel();
        }
        self.scroll_from = None;
        self.press_point = None;
        self.tap_candidate = false;
    }

    fn register_tap(&mut self, point: Point, now: Instant) {
        let is_double_tap = self
            .last_tap
            .is_some_and(|t| now.saturating_duration_since(t) < DOUBLE_TAP_THRESHOLD);

        if is_double_tap {
            self.last_tap = None; // Reset to avoid triple-tap
            self.toggle_zoom(point);
        } else {
            self.last_tap = Some(now);
        }
    }

    fn on_pan(&mut self, event: PanEvent, now: Instant) {
        match event.phase {
            GesturePhase::Began => self.on_gesture_begin(event.location),
            GesturePhase::Changed => self.on_gesture_change(event.location),
            GesturePhase::Ended => self.on_gesture_end(event.location, event.velocity, now),
            GesturePhase::Cancelled => self.on_gesture_cancel(),
            GesturePhase::Failed => {}
        }
    }

    // ------------------------------------------------------------------
    // Close
    // ------------------------------------------------------------------

    fn commit_close(&mut self, direction: ExitDirection, now: Instant) {
        let target_y = match direction {
            ExitDirection::Down => self.screen.height,
            ExitDirection::Up => -self.surface.size.height,
        };
        let slide = self.settings.exit_slide;
        self.surface.position.animate_to(
            Point::new(self.origin.x, target_y),
            now,
            slide,
            Easing::Linear,
        );
        self.surface
            .opacity
            .animate_to(0.0, now, slide, Easing::Linear);
        self.begin_fade_out(now);
    }

    fn begin_fade_out(&mut self, now: Instant) {
        self.lifecycle = Lifecycle::Closing;
        self.opacity
            .animate_to(0.0, now, self.settings.close_fade, Easing::Linear);
    }

    fn accepts_input(&self) -> bool {
        matches!(self.lifecycle, Lifecycle::Opening | Lifecycle::Open)
    }

    fn accepts_gestures(&self) -> bool {
        self.accepts_input() && self.zoom.is_at_rest()
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    #[must_use]
    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// Opacity of the whole overlay.
    #[must_use]
    pub fn opacity(&self) -> f32 {
        self.opacity.get()
    }

    #[must_use]
    pub fn dimmer_opacity(&self) -> f32 {
        self.dimmer
    }

    #[must_use]
    pub fn origin(&self) -> Point {
        self.origin
    }

    #[must_use]
    pub fn screen(&self) -> Size {
        self.screen
    }

    #[must_use]
    pub fn zoom_scale(&self) -> f32 {
        self.zoom.scale().value()
    }

    #[must_use]
    pub fn zoom_surface(&self) -> &ZoomSurface {
        &self.zoom
    }

    #[must_use]
    pub fn dismiss_phase(&self) -> DismissPhase {
        self.dismiss.phase()
    }

    /// Whether any transition is running; the host ticks only while true.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.opacity.is_animating()
            || self.surface.position.is_animating()
            || self.surface.opacity.is_animating()
    }

    /// Image surface position on screen, after scrolling.
    #[must_use]
    pub fn rendered_position(&self) -> Point {
        self.surface.position.get() - self.zoom.offset()
    }

    pub fn view<'a, M: 'a>(&'a self) -> Element<'a, M> {
        let dimmer = Container::new(Column::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::overlay::dimmer(self.opacity.get() * self.dimmer));

        opaque(
            Stack::new()
                .push(dimmer)
                .push(self.photo_layer())
                .width(Length::Fill)
                .height(Length::Fill),
        )
    }

    /// Screen-sized layer with the photo drawn at its full surface size.
    fn photo_layer<'a, M, Theme, R>(&'a self) -> Element<'a, M, Theme, R>
    where
        M: 'a,
        Theme: 'a,
        R: ImageRenderer<Handle = image::Handle> + 'a,
    {
        let size = self.surface.size;
        let photo = image(self.photo.handle().clone())
            .width(Length::Fixed(size.width))
            .height(Length::Fixed(size.height))
            .content_fit(ContentFit::Contain)
            .opacity(self.opacity.get() * self.surface.opacity.get());

        positioned(photo, self.rendered_position()).into()
    }
}

/// Largest size with the aspect ratio of `natural` that fits in `bounds`,
/// never enlarging.
fn fit_within(natural: Size, bounds: Size) -> Size {
    if natural.width <= bounds.width && natural.height <= bounds.height {
        return natural;
    }
    let scale = (bounds.width / natural.width).min(bounds.height / natural.height);
    Size::new(natural.width * scale, natural.height * scale)
}
