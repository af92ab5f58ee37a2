// SPDX-License-Identifier: MPL-2.0
use iced::{Point, Size, Vector};
use iced_glance::config::{self, Config};
use iced_glance::photo::Photo;
use iced_glance::ui::overlay::{
    Effect, HostSurface, InputEvent, Lifecycle, Message, OverlayHost, PhotoOverlay,
};
use iced_glance::ui::state::{DismissPhase, ExitDirection};
use std::time::{Duration, Instant};
use tempfile::tempdir;

fn photo(width: u32, height: u32) -> Photo {
    Photo::from_rgba(width, height, vec![200; (width * height * 4) as usize])
        .expect("valid pixel buffer")
}

fn at(start: Instant, millis: u64) -> Instant {
    start + Duration::from_millis(millis)
}

/// Presents a 200x300 photo on a 400x800 host and lets it finish fading in.
fn presented(start: Instant) -> OverlayHost {
    let mut host = OverlayHost::new(
        Size::new(400.0, 800.0),
        Config::default().overlay_settings(),
    );
    host.present(photo(200, 300), start);
    host.handle(Message::Tick(at(start, 300)), at(start, 300));
    host
}

fn input(host: &mut OverlayHost, event: InputEvent, now: Instant) {
    host.handle(Message::Input(event), now);
}

/// Slow vertical mouse drag from `(200, 400)` ending `dy` below the point
/// where the pan was recognized.
fn slow_drag(host: &mut OverlayHost, start: Instant, dy: f32) {
    input(host, InputEvent::PointerMoved(Point::new(200.0, 400.0)), at(start, 400));
    input(host, InputEvent::PointerPressed, at(start, 400));
    input(host, InputEvent::PointerMoved(Point::new(200.0, 420.0)), at(start, 420));
    input(host, InputEvent::PointerMoved(Point::new(200.0, 420.0 + dy)), at(start, 700));
    input(host, InputEvent::PointerReleased, at(start, 1000));
}

/// Host that records attach/detach calls.
#[derive(Default)]
struct RecordingHost {
    overlay: Option<PhotoOverlay>,
    detached: usize,
}

impl HostSurface for RecordingHost {
    fn bounds(&self) -> Size {
        Size::new(400.0, 800.0)
    }

    fn attach(&mut self, overlay: PhotoOverlay) {
        self.overlay = Some(overlay);
    }

    fn detach(&mut self) -> Option<PhotoOverlay> {
        self.detached += 1;
        self.overlay.take()
    }
}

#[test]
fn presented_photo_is_centered_at_natural_size() {
    let host = presented(Instant::now());
    let overlay = host.overlay().expect("overlay attached");

    assert_eq!(overlay.lifecycle(), Lifecycle::Open);
    assert_eq!(overlay.origin(), Point::new(100.0, 250.0));
    assert_eq!(overlay.view_for_zooming().size(), Size::new(200.0, 300.0));
    assert_eq!(overlay.opacity(), 1.0);
    assert_eq!(overlay.dimmer_opacity(), 1.0);
}

#[test]
fn short_drag_settles_back() {
    let start = Instant::now();
    let mut host = presented(start);
    slow_drag(&mut host, start, 150.0);

    let overlay = host.overlay().expect("still attached");
    assert_eq!(overlay.dismiss_phase(), DismissPhase::Settling);
    assert_eq!(overlay.dimmer_opacity(), 1.0);

    host.handle(Message::Tick(at(start, 1300)), at(start, 1300));
    let overlay = host.overlay().expect("still attached");
    assert_eq!(overlay.view_for_zooming().position(), Point::new(100.0, 250.0));
    assert_eq!(overlay.dismiss_phase(), DismissPhase::Idle);
    assert_eq!(overlay.lifecycle(), Lifecycle::Open);
}

#[test]
fn long_drag_dismisses_and_detaches() {
    let start = Instant::now();
    let mut host = presented(start);
    slow_drag(&mut host, start, 220.0);

    let overlay = host.overlay().expect("closing overlay stays attached");
    assert_eq!(overlay.dismiss_phase(), DismissPhase::Closing(ExitDirection::Down));
    assert_eq!(overlay.lifecycle(), Lifecycle::Closing);
    assert_eq!(
        overlay.view_for_zooming().target_position(),
        Point::new(100.0, 800.0)
    );

    host.handle(Message::Tick(at(start, 1200)), at(start, 1200));
    let overlay = host.overlay().expect("fade still running");
    assert_eq!(overlay.view_for_zooming().opacity(), 0.0);

    host.handle(Message::Tick(at(start, 1300)), at(start, 1300));
    assert!(!host.is_presenting());
    assert!(!host.close(at(start, 1400)));
}

#[test]
fn drag_dims_in_proportion_to_distance() {
    let start = Instant::now();
    let mut host = presented(start);
    input(&mut host, InputEvent::PointerMoved(Point::new(200.0, 400.0)), at(start, 400));
    input(&mut host, InputEvent::PointerPressed, at(start, 400));
    input(&mut host, InputEvent::PointerMoved(Point::new(200.0, 420.0)), at(start, 420));
    input(&mut host, InputEvent::PointerMoved(Point::new(200.0, 340.0)), at(start, 440));

    let overlay = host.overlay().expect("attached");
    // 80pt of a 160pt fade range.
    assert!((overlay.dimmer_opacity() - 0.5).abs() < 1e-5);
    assert_eq!(overlay.view_for_zooming().position(), Point::new(100.0, 170.0));
}

#[test]
fn external_host_receives_overlay_and_detach() {
    let start = Instant::now();
    let mut host = RecordingHost::default();
    let overlay = PhotoOverlay::new(
        photo(200, 300),
        host.bounds(),
        Config::default().overlay_settings(),
    );
    overlay.open(&mut host, start);

    let overlay = host.overlay.as_mut().expect("attached on open");
    overlay.tick(at(start, 300));
    overlay.on_gesture_begin(Point::new(200.0, 400.0));
    overlay.on_gesture_change(Point::new(200.0, 430.0));
    overlay.on_gesture_end(Point::new(200.0, 430.0), Vector::new(0.0, 1200.0), at(start, 400));
    assert_eq!(overlay.dismiss_phase(), DismissPhase::Closing(ExitDirection::Down));

    let effect = overlay.handle(Message::Tick(at(start, 700)), at(start, 700));
    if effect == Effect::Detach {
        host.detach();
    }
    assert_eq!(host.detached, 1);
    assert!(host.overlay.is_none());
}

#[test]
fn config_file_tunes_dismiss_distance() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");
    let tuned = Config {
        dismiss_distance_ratio: Some(0.5),
        ..Config::default()
    };
    config::save_to_path(&tuned, &path).expect("Failed to write config");
    let loaded = config::load_from_path(&path).expect("Failed to load config");

    let start = Instant::now();
    let mut host = OverlayHost::new(Size::new(400.0, 800.0), loaded.overlay_settings());
    host.present(photo(200, 300), start);
    host.handle(Message::Tick(at(start, 300)), at(start, 300));

    // 220pt is now short of the 400pt threshold.
    slow_drag(&mut host, start, 220.0);
    let overlay = host.overlay().expect("attached");
    assert_eq!(overlay.dismiss_phase(), DismissPhase::Settling);
}

#[test]
fn photo_opens_from_disk() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("photo.png");
    image_rs::RgbaImage::from_pixel(12, 7, image_rs::Rgba([10, 20, 30, 255]))
        .save(&path)
        .expect("Failed to write png");

    let photo = Photo::open(&path).expect("png decodes");
    assert_eq!((photo.width(), photo.height()), (12, 7));
    assert!(Photo::open(&dir.path().join("missing.png")).is_err());
}
