use criterion::{black_box, criterion_group, criterion_main, Criterion};

use hypro_rusty::profile::{ProfileComputer, UnknownResiduePolicy};
use hypro_rusty::scale::{ScaleTable, AMINO_ACIDS};

fn synthetic_sequence(len: usize) -> Vec<u8> {
    AMINO_ACIDS.iter().cycle().take(len).copied().collect()
}

fn bench_compute_profile(c: &mut Criterion) {
    let table = ScaleTable::load("Kyte", true).unwrap();
    let seq = synthetic_sequence(2000);

    let mut group = c.benchmark_group("compute_profile");
    for window in [7usize, 21] {
        let computer = ProfileComputer::new(&table, window, UnknownResiduePolicy::Fail).unwrap();
        group.bench_function(format!("window_{}", window), |b| {
            b.iter(|| computer.compute(black_box(&seq)).unwrap())
        });
    }
    group.finish();
}

fn bench_scale_load(c: &mut Criterion) {
    c.bench_function("load_normalized_scale", |b| {
        b.iter(|| ScaleTable::load(black_box("Kyte"), true).unwrap())
    });
}

criterion_group!(benches, bench_compute_profile, bench_scale_load);
criterion_main!(benches);
