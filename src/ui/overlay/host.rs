// SPDX-License-Identifier: MPL-2.0
//! Hosting surface for the photo overlay.
//!
//! The overlay never reaches for a global window: whoever presents it passes
//! a [`HostSurface`] that supplies the bounds and takes ownership while the
//! overlay is shown.

use super::component::{Effect, InputEvent, Message, PhotoOverlay};
use crate::config::{OverlaySettings, WHEEL_PIXELS_PER_LINE};
use crate::photo::Photo;
use iced::keyboard::{self, key::Named, Key};
use iced::widget::Stack;
use iced::{event, mouse, time, touch, Element, Event, Length, Size, Subscription};
use std::time::{Duration, Instant};

/// Animation tick period while the overlay is animating.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// A surface the overlay can be attached to.
pub trait HostSurface {
    /// Size the overlay covers.
    fn bounds(&self) -> Size;

    /// Takes ownership of an opened overlay and shows it above the content.
    fn attach(&mut self, overlay: PhotoOverlay);

    /// Releases the overlay, if any.
    fn detach(&mut self) -> Option<PhotoOverlay>;
}

/// Window-level host: stacks at most one overlay above the base content.
#[derive(Debug, Clone)]
pub struct OverlayHost {
    bounds: Size,
    settings: OverlaySettings,
    overlay: Option<PhotoOverlay>,
}

impl OverlayHost {
    #[must_use]
    pub fn new(bounds: Size, settings: OverlaySettings) -> Self {
        Self {
            bounds,
            settings,
            overlay: None,
        }
    }

    /// Updates the bounds used for the next overlay.
    ///
    /// An overlay already shown keeps the layout it was opened with.
    pub fn resize(&mut self, bounds: Size) {
        self.bounds = bounds;
    }

    #[must_use]
    pub fn overlay(&self) -> Option<&PhotoOverlay> {
        self.overlay.as_ref()
    }

    #[must_use]
    pub fn is_presenting(&self) -> bool {
        self.overlay.is_some()
    }

    /// Builds an overlay for `photo` sized to this host and opens it here.
    pub fn present(&mut self, photo: Photo, now: Instant) {
        let overlay = PhotoOverlay::new(photo, self.bounds, self.settings);
        overlay.open(self, now);
    }

    /// Closes the attached overlay. Returns `false` when nothing was closed.
    pub fn close(&mut self, now: Instant) -> bool {
        self.overlay
            .as_mut()
            .is_some_and(|overlay| overlay.close(now))
    }

    /// Routes a message to the attached overlay and applies its effect.
    pub fn handle(&mut self, message: Message, now: Instant) {
        let Some(overlay) = self.overlay.as_mut() else {
            return;
        };
        match overlay.handle(message, now) {
            Effect::None => {}
            Effect::Detach => {
                self.detach();
            }
        }
    }

    /// Input while an overlay is shown, plus frame ticks while it animates.
    pub fn subscription(&self) -> Subscription<Message> {
        let Some(overlay) = self.overlay.as_ref() else {
            return Subscription::none();
        };

        let input = event::listen_with(|event, _status, _window| {
            input_event(&event).map(Message::Input)
        });

        if overlay.is_animating() {
            Subscription::batch([input, time::every(FRAME_INTERVAL).map(Message::Tick)])
        } else {
            input
        }
    }

    /// `base` with the overlay, if any, stacked on top.
    pub fn view<'a, M: 'a>(&'a self, base: Element<'a, M>) -> Element<'a, M> {
        match self.overlay.as_ref() {
            Some(overlay) => Stack::new()
                .push(base)
                .push(overlay.view())
                .width(Length::Fill)
                .height(Length::Fill)
                .into(),
            None => base,
        }
    }
}

impl HostSurface for OverlayHost {
    fn bounds(&self) -> Size {
        self.bounds
    }

    fn attach(&mut self, overlay: PhotoOverlay) {
        if self.overlay.is_some() {
            log::warn!("Replacing a photo overlay that was still attached");
        }
        self.overlay = Some(overlay);
    }

    fn detach(&mut self) -> Option<PhotoOverlay> {
        let overlay = self.overlay.take();
        if overlay.is_some() {
            log::debug!("Photo overlay detached");
        }
        overlay
    }
}

/// Maps a native event to overlay input, dropping everything it ignores.
pub fn input_event(event: &Event) -> Option<InputEvent> {
    match event {
        Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(InputEvent::PointerMoved(*position))
        }
        Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
            Some(InputEvent::PointerPressed)
        }
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
            Some(InputEvent::PointerReleased)
        }
        Event::Mouse(mouse::Event::WheelScrolled { delta }) => {
            let lines = match *delta {
                mouse::ScrollDelta::Lines { y, .. } => y,
                mouse::ScrollDelta::Pixels { y, .. } => y / WHEEL_PIXELS_PER_LINE,
            };
            Some(InputEvent::WheelScrolled { lines })
        }
        Event::Touch(touch::Event::FingerPressed { id, position }) => {
            Some(InputEvent::FingerPressed {
                finger: *id,
                position: *position,
            })
        }
        Event::Touch(touch::Event::FingerMoved { id, position }) => Some(InputEvent::FingerMoved {
            finger: *id,
            position: *position,
        }),
        Event::Touch(touch::Event::FingerLifted { id, position }) => {
            Some(InputEvent::FingerLifted {
                finger: *id,
                position: *position,
            })
        }
        Event::Touch(touch::Event::FingerLost { id, .. }) => {
            Some(InputEvent::FingerLost { finger: *id })
        }
        Event::Keyboard(keyboard::Event::KeyPressed {
            key: Key::Named(Named::Escape),
            ..
        }) => Some(InputEvent::Escape),
        _ => None,
    }
}
