// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};
use zoomview::{PointerEvent, PointerId, ZoomConfig, ZoomView};
use zoomview_gesture::{GestureRecognizer, GestureState};

const VIEWPORT: Size = Size::new(1080.0, 1920.0);

/// One drag followed by one pinch, `moves` samples each.
fn touch_sequence(moves: usize) -> Vec<PointerEvent> {
    let mut events = Vec::with_capacity(moves * 3 + 6);
    let a = PointerId(0);
    let b = PointerId(1);

    events.push(PointerEvent::down(a, (500.0, 900.0)));
    for i in 0..moves {
        let t = i as f64;
        events.push(PointerEvent::moved(a, (500.0 - t * 2.0, 900.0 - t)));
    }
    events.push(PointerEvent::up(a, Point::new(500.0 - moves as f64 * 2.0, 900.0)));

    events.push(PointerEvent::down(a, (540.0, 960.0)));
    events.push(PointerEvent::down(b, (560.0, 960.0)));
    for i in 0..moves {
        let spread = 20.0 + i as f64 * 3.0;
        events.push(PointerEvent::moved(a, (550.0 - spread * 0.5, 960.0)));
        events.push(PointerEvent::moved(b, (550.0 + spread * 0.5, 960.0)));
    }
    events.push(PointerEvent::up(b, (0.0, 0.0)));
    events.push(PointerEvent::up(a, (0.0, 0.0)));
    events
}

fn bench_recognizer(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture/recognizer");
    let events = touch_sequence(256);
    group.throughput(Throughput::Elements(events.len() as u64));

    let recognizer = GestureRecognizer::default();
    group.bench_function("update", |b| {
        b.iter_batched(
            GestureState::new,
            |mut state| {
                for event in &events {
                    black_box(recognizer.update(&mut state, event));
                }
                state
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

fn bench_session(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture/session");
    let events = touch_sequence(256);
    group.throughput(Throughput::Elements(events.len() as u64));

    group.bench_function("handle_pointer", |b| {
        b.iter_batched(
            || {
                let mut view = ZoomView::new(ZoomConfig::new(0.2, 4.0, true).unwrap());
                view.set_content(Some(Size::new(4032.0, 3024.0)));
                view.reset(VIEWPORT);
                view
            },
            |mut view| {
                for event in &events {
                    black_box(view.handle_pointer(event, VIEWPORT));
                }
                view
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

criterion_group!(benches, bench_recognizer, bench_session);
criterion_main!(benches);
