use criterion::{black_box, criterion_group, criterion_main, Criterion};
use path_mwis::{BlockSummary, Frontier};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_values(rng: &mut StdRng, len: usize) -> Vec<i64> {
    (0..len).map(|_| rng.gen_range(-1_000i64..=1_000)).collect()
}

fn bench_summary_ops(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0x5155_AA55);
    let run = random_values(&mut rng, 4096);
    let (left, right) = run.split_at(run.len() / 2);
    let sigma_left = BlockSummary::from_slice(left);
    let sigma_right = BlockSummary::from_slice(right);
    let frontier = Frontier::start(17);

    let mut group = c.benchmark_group("summary_ops");
    group.bench_function("from_slice_4096", |b| {
        b.iter(|| BlockSummary::from_slice(black_box(&run)));
    });
    group.bench_function("merge", |b| {
        b.iter(|| black_box(&sigma_left).merge(black_box(&sigma_right)));
    });
    group.bench_function("apply", |b| {
        b.iter(|| black_box(&sigma_left).apply(black_box(&frontier)));
    });
    group.finish();
}

criterion_group!(benches, bench_summary_ops);
criterion_main!(benches);
