use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion, Throughput};

use driftmc::simulation::DriftSimulation;
use driftmc::walk::{MetropolisWalk, TargetWeights};
use driftmc::XoshiroSource;

fn bench_drift_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("drift_run");
    let replicates = 200;
    let generations = 20;

    group.throughput(Throughput::Elements((replicates * generations) as u64));

    group.bench_function("run_r200_t20", |b| {
        b.iter_batched(
            || {
                DriftSimulation::builder()
                    .replicates(replicates)
                    .population_size(100)
                    .generations(generations)
                    .initial_count(30)
                    .seed(42)
                    .build()
                    .unwrap()
            },
            |mut sim| black_box(sim.run().unwrap()),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn bench_walk_sample(c: &mut Criterion) {
    let mut group = c.benchmark_group("walk_sample");
    let steps = 100_000;

    group.throughput(Throughput::Elements(steps as u64));

    group.bench_function("sample_100k_steps", |b| {
        let target = TargetWeights::uniform(1, 20).unwrap();
        let walk = MetropolisWalk::new(target, 10, steps).unwrap();
        b.iter_batched(
            || XoshiroSource::seed_from_u64(42),
            |mut rng| black_box(walk.sample(&mut rng)),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_drift_run, bench_walk_sample);
criterion_main!(benches);
