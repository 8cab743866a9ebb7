use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use plate_field::constants::STREAMLINE_DENSITY;
use plate_field::fields::{evaluate_parallel_plate_field, ParallelPlates};
use plate_field::plot::{trace_streamlines, StreamlineOptions};

fn bench_field_evaluation(c: &mut Criterion) {
    let mut group = c.benchmark_group("field_evaluation");
    group.sample_size(10);
    let plates = ParallelPlates::with_separation(1.0);

    for grid_points in [100, 200, 400] {
        group.bench_with_input(
            BenchmarkId::new("parallel_plates", grid_points),
            &grid_points,
            |b, &n| b.iter(|| evaluate_parallel_plate_field(&plates, n)),
        );
    }
    group.finish();
}

fn bench_streamlines(c: &mut Criterion) {
    let field = evaluate_parallel_plate_field(&ParallelPlates::with_separation(1.0), 400);
    c.bench_function("trace_streamlines", |b| {
        b.iter(|| trace_streamlines(&field, StreamlineOptions::with_density(STREAMLINE_DENSITY)))
    });
}

criterion_group!(benches, bench_field_evaluation, bench_streamlines);
criterion_main!(benches);
