// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use iced::{Point, Size};
use iced_glance::config::OverlaySettings;
use iced_glance::photo::Photo;
use iced_glance::ui::overlay::{InputEvent, Message, OverlayHost};
use std::hint::black_box;
use std::time::{Duration, Instant};

fn dismiss_gesture_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("dismiss_gesture");
    let photo = Photo::from_rgba(64, 64, vec![0; 64 * 64 * 4]).expect("valid pixel buffer");

    group.bench_function("drag_and_settle", |b| {
        b.iter(|| {
            let start = Instant::now();
            let ms = |millis| start + Duration::from_millis(millis);
            let mut host = OverlayHost::new(Size::new(400.0, 800.0), OverlaySettings::default());
            host.present(photo.clone(), start);
            host.handle(Message::Tick(ms(300)), ms(300));

            host.handle(
                Message::Input(InputEvent::PointerMoved(Point::new(200.0, 400.0))),
                ms(400),
            );
            host.handle(Message::Input(InputEvent::PointerPressed), ms(400));
            for step in 1..=60u64 {
                let y = 400.0 + step as f32 * 2.0;
                host.handle(
                    Message::Input(InputEvent::PointerMoved(Point::new(200.0, y))),
                    ms(400 + step * 8),
                );
            }
            host.handle(Message::Input(InputEvent::PointerReleased), ms(1000));
            host.handle(Message::Tick(ms(1300)), ms(1300));
            black_box(host.overlay().map(|overlay| overlay.rendered_position()))
        });
    });

    group.finish();
}

criterion_group!(benches, dismiss_gesture_benchmark);
criterion_main!(benches);
