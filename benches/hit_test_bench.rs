use criterion::{Criterion, criterion_group, criterion_main};
use datazoom_rs::api::{ZoomEngine, ZoomEngineConfig};
use datazoom_rs::core::{Point, SliderLayout, TrackBounds, ZoomWindow};
use datazoom_rs::interaction::classify_pointer;
use datazoom_rs::render::NullRenderer;
use std::hint::black_box;

fn bench_layout_compute(c: &mut Criterion) {
    let mut window = ZoomWindow::slider_default();
    window.resolve_height(1080.0);
    let track = TrackBounds::new(0.0, 1920.0);

    c.bench_function("slider_layout_compute", |b| {
        b.iter(|| SliderLayout::compute(black_box(&window), black_box(track)))
    });
}

fn bench_classify_sweep_1k(c: &mut Criterion) {
    let mut window = ZoomWindow::slider_default();
    window.resolve_height(1080.0);
    let layout = SliderLayout::compute(&window, TrackBounds::new(0.0, 1920.0));

    let points: Vec<Point> = (0..1_000)
        .map(|i| Point::new(f64::from(i) * 1.92, 40.0))
        .collect();

    c.bench_function("classify_pointer_sweep_1k", |b| {
        b.iter(|| {
            for point in &points {
                let _ = classify_pointer(black_box(&layout), black_box(*point));
            }
        })
    });
}

fn bench_drag_gesture_cycle(c: &mut Criterion) {
    let mut engine =
        ZoomEngine::new(NullRenderer::default(), ZoomEngineConfig::new()).expect("engine init");
    engine.resolve_height(1080.0);
    let track = TrackBounds::new(0.0, 1920.0);

    c.bench_function("drag_gesture_cycle", |b| {
        b.iter(|| {
            engine.pointer_down(black_box(Point::new(960.0, 40.0)), track);
            engine.pointer_move(black_box(Point::new(1000.0, 40.0)), track);
            engine.pointer_move(black_box(Point::new(960.0, 40.0)), track);
            engine.pointer_up();
        })
    });
}

criterion_group!(
    benches,
    bench_layout_compute,
    bench_classify_sweep_1k,
    bench_drag_gesture_cycle
);
criterion_main!(benches);
