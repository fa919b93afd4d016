use adcp_ensemble::csv::CsvMeta;
use adcp_ensemble::dataset::CorrelationGrid;
use chrono::NaiveDateTime;
use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use rand::Rng;

const BINS: usize = 200;
const BEAMS: usize = 4;

fn random_grid() -> CorrelationGrid {
    let mut rng = rand::thread_rng();
    let mut grid = CorrelationGrid::new(BINS, BEAMS);
    for bin in 0..BINS {
        for beam in 0..BEAMS {
            grid.set(bin, beam, rng.gen_range(0.0..1.0));
        }
    }
    grid
}

fn bench_decode(c: &mut Criterion) {
    let dat = random_grid().encode().unwrap();
    let mut group = c.benchmark_group("correlation");
    group.throughput(Throughput::Bytes(dat.len() as u64));
    group.bench_function("decode", |b| {
        b.iter(|| {
            let mut grid = CorrelationGrid::new(BINS, BEAMS);
            grid.decode(&dat).unwrap();
        });
    });
    group.bench_function("encode", |b| {
        let grid = random_grid();
        b.iter(|| grid.encode().unwrap());
    });
    group.finish();
}

fn bench_export(c: &mut Criterion) {
    let grid = random_grid();
    let meta = CsvMeta::builder()
        .timestamp(NaiveDateTime::default())
        .subsystem_code('2')
        .blank_distance(0.5)
        .bin_size(1.0)
        .build();

    let mut group = c.benchmark_group("export");
    group.bench_function("csv", |b| {
        b.iter(|| grid.encode_csv(&meta));
    });
    group.bench_function("pd0", |b| {
        b.iter(|| {
            for beam in 0..4 {
                let _ = grid.pd0_counts(2, beam);
            }
        });
    });
    group.finish();
}

criterion_group!(benches, bench_decode, bench_export);
criterion_main!(benches);
