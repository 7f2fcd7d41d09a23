use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use ndexpr_iter::{make_cursor, DenseExpr, LaneIter, StridedExpr};

fn bench_cursor_sum(c: &mut Criterion) {
    let data: Vec<f64> = (0..4096).map(|i| (i % 97) as f64).collect();

    let dense = DenseExpr::new(&data);
    c.bench_function("span_cursor_sum_4096", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for x in make_cursor(black_box(&dense), 0) {
                acc += x;
            }
            acc
        })
    });

    let strided = StridedExpr::new(&data, [4096], [1], 0).unwrap();
    c.bench_function("elem_cursor_sum_4096", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for x in make_cursor(black_box(&strided), 0) {
                acc += x;
            }
            acc
        })
    });

    c.bench_function("lane_cursor_sum_4096", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for lane in LaneIter::<_, 8>::new(black_box(&dense), 0) {
                let lane: [f64; 8] = lane;
                acc += lane.iter().sum::<f64>();
            }
            acc
        })
    });

    // Every second element: the strided path has to chase the formula.
    let strided2 = StridedExpr::new(&data, [2048], [2], 0).unwrap();
    c.bench_function("elem_cursor_sum_stride2_2048", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for x in make_cursor(black_box(&strided2), 0) {
                acc += x;
            }
            acc
        })
    });
}

criterion_group!(benches, bench_cursor_sum);
criterion_main!(benches);
