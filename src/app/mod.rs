// SPDX-License-Identifier: MPL-2.0
//! Demo shell: a thumbnail that opens the photo overlay when tapped.

mod message;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::photo::Photo;
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::overlay::OverlayHost;
use crate::ui::styles;
use iced::widget::{image, mouse_area, text, Column, Container};
use iced::{window, Alignment, Element, Length, Size, Subscription, Task, Theme};
use std::time::Instant;

pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
pub const MIN_WINDOW_WIDTH: u32 = 320;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

/// Edge of the generated photo shown when no file is given.
const SAMPLE_SIZE: u32 = 480;

#[derive(Debug)]
pub struct App {
    host: OverlayHost,
    thumbnail: Option<Photo>,
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH as f32, MIN_WINDOW_HEIGHT as f32)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an `Fn` boot closure; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || App::new(boot_state.borrow_mut().take().unwrap_or_default());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = load_config(&flags);
        // Replaced by the real window size once `window_size` resolves.
        let bounds = window_settings().size;
        let mut app = Self {
            host: OverlayHost::new(bounds, config.overlay_settings()),
            thumbnail: None,
        };

        let load = match flags.image_path {
            Some(path) => Task::perform(async move { Photo::open(&path) }, Message::PhotoLoaded),
            None => {
                app.thumbnail = sample_photo();
                Task::none()
            }
        };
        (app, Task::batch([window_size(), load]))
    }

    fn title(&self) -> String {
        if self.host.is_presenting() {
            "IcedGlance - Photo".to_string()
        } else {
            "IcedGlance".to_string()
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ThumbnailTapped => {
                if self.host.is_presenting() {
                    return Task::none();
                }
                if let Some(photo) = self.thumbnail.clone() {
                    self.host.present(photo, Instant::now());
                }
            }
            Message::Overlay(message) => self.host.handle(message, Instant::now()),
            Message::PhotoLoaded(Ok(photo)) => self.thumbnail = Some(photo),
            Message::PhotoLoaded(Err(err)) => {
                log::error!("Failed to load photo: {err}");
                self.thumbnail = sample_photo();
            }
            Message::WindowResized(size) => self.host.resize(size),
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        let thumbnail: Element<'_, Message> = match self.thumbnail.as_ref() {
            Some(photo) => mouse_area(
                Container::new(
                    image(photo.handle().clone())
                        .width(Length::Fixed(sizing::THUMBNAIL))
                        .height(Length::Fixed(sizing::THUMBNAIL)),
                )
                .padding(spacing::XS)
                .style(styles::container::thumbnail_frame),
            )
            .on_press(Message::ThumbnailTapped)
            .into(),
            None => text("Loading...").into(),
        };

        let content = Column::new()
            .push(thumbnail)
            .push(text("Tap the photo to open it. Swipe up or down to dismiss."))
            .spacing(spacing::MD)
            .align_x(Alignment::Center);

        let base = Container::new(content)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .padding(spacing::LG)
            .style(styles::container::backdrop);

        self.host.view(base.into())
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            window::resize_events().map(|(_id, size)| Message::WindowResized(size)),
            self.host.subscription().map(Message::Overlay),
        ])
    }
}

/// Reports the size of the main window as a `WindowResized` message.
fn window_size() -> Task<Message> {
    window::latest()
        .and_then(window::size)
        .map(Message::WindowResized)
}

fn load_config(flags: &Flags) -> Config {
    let loaded = match flags.config_path.as_deref() {
        Some(path) => config::load_from_path(path),
        None => config::load(),
    };
    loaded.unwrap_or_else(|err| {
        log::warn!("Using default settings: {err}");
        Config::default()
    })
}

/// Diagonal gradient used when no photo was given.
fn sample_photo() -> Option<Photo> {
    let pixels = (0..SAMPLE_SIZE * SAMPLE_SIZE)
        .flat_map(|i| {
            let (x, y) = (i % SAMPLE_SIZE, i / SAMPLE_SIZE);
            let r = (x * 255 / SAMPLE_SIZE) as u8;
            let b = (y * 255 / SAMPLE_SIZE) as u8;
            [r, 96, b, 255]
        })
        .collect();

    Photo::from_rgba(SAMPLE_SIZE, SAMPLE_SIZE, pixels)
        .map_err(|err| log::error!("Failed to build sample photo: {err}"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::overlay::Lifecycle;
    use std::fs;
    use tempfile::tempdir;

    fn app() -> App {
        App::new(Flags::default()).0
    }

    #[test]
    fn starts_with_sample_thumbnail() {
        let app = app();
        let photo = app.thumbnail.as_ref().expect("sample photo");
        assert_eq!((photo.width(), photo.height()), (SAMPLE_SIZE, SAMPLE_SIZE));
        assert!(!app.host.is_presenting());
        assert_eq!(app.title(), "IcedGlance");
    }

    #[test]
    fn tapping_thumbnail_presents_overlay_once() {
        let mut app = app();
        let _ = app.update(Message::ThumbnailTapped);
        assert!(app.host.is_presenting());
        assert_eq!(app.title(), "IcedGlance - Photo");

        let _ = app.update(Message::ThumbnailTapped);
        let overlay = app.host.overlay().expect("still presenting");
        assert_eq!(overlay.lifecycle(), Lifecycle::Opening);
    }

    #[test]
    fn failed_load_falls_back_to_sample() {
        let mut app = app();
        app.thumbnail = None;
        let _ = app.update(Message::PhotoLoaded(Err(crate::error::Error::Image(
            "unsupported".into(),
        ))));
        assert!(app.thumbnail.is_some());
    }

    #[test]
    fn overlay_starts_sized_to_the_window_settings() {
        let mut app = app();
        let _ = app.update(Message::ThumbnailTapped);
        let overlay = app.host.overlay().expect("presenting");
        assert_eq!(overlay.screen(), window_settings().size);
    }

    #[test]
    fn resize_sizes_the_next_overlay() {
        let mut app = app();
        let _ = app.update(Message::WindowResized(Size::new(600.0, 1000.0)));
        let _ = app.update(Message::ThumbnailTapped);
        let overlay = app.host.overlay().expect("presenting");
        assert_eq!(overlay.screen(), Size::new(600.0, 1000.0));
    }

    #[test]
    fn config_flag_overrides_settings() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("settings.toml");
        fs::write(&path, "fling_velocity = 1500.0\n").expect("write config");

        let config = load_config(&Flags {
            config_path: Some(path),
            image_path: None,
        });
        assert_eq!(config.fling_velocity, Some(1500.0));
    }

    #[test]
    fn missing_config_flag_uses_defaults() {
        let dir = tempdir().expect("tempdir");
        let config = load_config(&Flags {
            config_path: Some(dir.path().join("absent.toml")),
            image_path: None,
        });
        assert_eq!(config, Config::default());
    }
}
