use criterion::{Criterion, criterion_group, criterion_main};
use draggable_chart::api::{ChartEngine, ChartEngineConfig, ChartKind, InputData, XySeries};
use draggable_chart::core::{
    CategoryScale, CurveMode, DataPoint, LinearScale, PlotArea, PlotGeometry, Viewport,
    fit_cubic_control_points, sample_control_points,
};
use draggable_chart::interaction::ControlPointRef;
use draggable_chart::render::NullRenderer;
use std::hint::black_box;

fn bench_linear_scale_round_trip(c: &mut Criterion) {
    let scale = LinearScale::new(0.0, 10_000.0, 1080.0, 0.0).expect("valid scale");

    c.bench_function("linear_scale_round_trip", |b| {
        b.iter(|| {
            let px = scale.domain_to_pixel(black_box(4_321.123)).expect("to pixel");
            let _ = scale.pixel_to_domain(px).expect("from pixel");
        })
    });
}

fn bench_category_lookup(c: &mut Criterion) {
    let labels: Vec<String> = (0..365).map(|day| format!("day-{day}")).collect();
    let scale = CategoryScale::new(labels, 0.0, 1920.0).expect("valid scale");

    c.bench_function("category_pixel_to_label_365", |b| {
        b.iter(|| {
            let _ = scale.pixel_to_label(black_box(1_234.5)).expect("label");
        })
    });
}

fn cubic_control_points(anchors: usize) -> Vec<DataPoint> {
    let anchors: Vec<DataPoint> = (0..anchors)
        .map(|i| {
            let x = i as f64;
            DataPoint::new(x, (x * 0.37).sin() * 50.0)
        })
        .collect();
    fit_cubic_control_points(&anchors).expect("fit")
}

fn bench_cubic_sampling_1k_segments(c: &mut Criterion) {
    let control = cubic_control_points(1_001);

    c.bench_function("cubic_sampling_1k_segments", |b| {
        b.iter(|| {
            let _ = sample_control_points(black_box(CurveMode::Cubic), black_box(&control));
        })
    });
}

fn bench_spline_fit_1k_anchors(c: &mut Criterion) {
    let anchors: Vec<DataPoint> = (0..1_000)
        .map(|i| DataPoint::new(f64::from(i), f64::from(i % 17)))
        .collect();

    c.bench_function("spline_fit_1k_anchors", |b| {
        b.iter(|| {
            let _ = fit_cubic_control_points(black_box(&anchors)).expect("fit");
        })
    });
}

fn bench_drag_move_cubic_300_segments(c: &mut Criterion) {
    let control = cubic_control_points(301);
    let series = XySeries::from_pairs(
        &control
            .iter()
            .map(|point| (point.x, point.y))
            .collect::<Vec<_>>(),
    );
    let config = ChartEngineConfig::new(Viewport::new(1600, 900), ChartKind::CubicBezier);
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");
    engine.set_plot_geometry(
        PlotGeometry::new(PlotArea::new(0.0, 0.0, 1600.0, 900.0))
            .with_x_range(0.0, 300.0)
            .with_y_range(-60.0, 60.0),
    );
    engine
        .set_data(InputData::Xy(
            [("spline".to_owned(), series)].into_iter().collect(),
        ))
        .expect("set data");
    engine
        .pointer_down(Some(ControlPointRef::new("spline", 450)))
        .expect("pointer down");

    let mut toggle = false;
    c.bench_function("drag_move_cubic_300_segments", |b| {
        b.iter(|| {
            toggle = !toggle;
            let y = if toggle { 400.0 } else { 500.0 };
            let _ = engine
                .pointer_move(black_box(800.0), black_box(y))
                .expect("pointer move");
        })
    });
}

criterion_group!(
    benches,
    bench_linear_scale_round_trip,
    bench_category_lookup,
    bench_cubic_sampling_1k_segments,
    bench_spline_fit_1k_anchors,
    bench_drag_move_cubic_300_segments
);
criterion_main!(benches);
