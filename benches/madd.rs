use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use madd_bench::dot::{Dot, FusedDot, OneExprDot, TwoStepDot, test_vectors};
use madd_bench::madd::{Fused, MAdd, OneExpr, TwoStep};

const NUM_PAIRS: usize = 256;

fn bench_single<M: MAdd>(c: &mut Criterion, madd: M) {
    c.bench_function(&format!("madd/{}", madd.descr()), |b| {
        let mut x = -0.1;
        b.iter(|| {
            x += 1e-10;
            black_box(madd.madd(black_box(x), black_box(3.0), black_box(-1.0)))
        })
    });
}

fn bench_madd(c: &mut Criterion) {
    bench_single(c, Fused);
    bench_single(c, OneExpr);
    bench_single(c, TwoStep);
}

fn bench_dot_with<D: Dot>(group: &mut criterion::BenchmarkGroup<'_, criterion::measurement::WallTime>) {
    let pairs = test_vectors(NUM_PAIRS);
    group.bench_function(BenchmarkId::from_parameter(D::DESCR), |b| {
        b.iter(|| {
            let mut sum = 0.0;
            for &(a, v) in black_box(&pairs) {
                sum += a.dot::<D>(v);
            }
            black_box(sum)
        })
    });
}

fn bench_dot(c: &mut Criterion) {
    let mut group = c.benchmark_group("dot_256");
    group.throughput(Throughput::Elements(NUM_PAIRS as u64));
    bench_dot_with::<OneExprDot>(&mut group);
    bench_dot_with::<TwoStepDot>(&mut group);
    bench_dot_with::<FusedDot>(&mut group);
    group.finish();
}

criterion_group!(benches, bench_madd, bench_dot);

criterion_main!(benches);
