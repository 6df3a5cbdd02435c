use bez_curve::{elevate, evaluate, evaluate_with, EvalMethod};
use bez_math::{PixelPoint, Point2};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

fn build_control_points(count: usize) -> Vec<PixelPoint> {
    (0..count)
        .map(|i| {
            let x = (i * 80) as i32;
            let y = if i % 2 == 0 { 100 } else { 400 };
            PixelPoint::new(x, y)
        })
        .collect()
}

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate_200_stops");
    for count in [2usize, 4, 10, 20] {
        let points = build_control_points(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &points, |b, points| {
            b.iter(|| {
                let curve = evaluate(black_box(points), black_box(200)).expect("evaluate failed");
                black_box(curve.len())
            })
        });
    }
    group.finish();
}

fn bench_methods(c: &mut Criterion) {
    let points: Vec<Point2> = build_control_points(10)
        .into_iter()
        .map(PixelPoint::to_point2)
        .collect();

    c.bench_function("de_casteljau_10_points", |b| {
        b.iter(|| evaluate_with(black_box(&points), 200, EvalMethod::DeCasteljau))
    });
    c.bench_function("bernstein_10_points", |b| {
        b.iter(|| evaluate_with(black_box(&points), 200, EvalMethod::Bernstein))
    });
    c.bench_function("elevate_10_points", |b| b.iter(|| elevate(black_box(&points))));
}

criterion_group!(benches, bench_evaluate, bench_methods);
criterion_main!(benches);
