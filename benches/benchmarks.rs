//! Performance benchmarks for stdl

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use stdl::test_utils::TestTree;
use stdl::{
    ExtensionFilter, bytes_readable, get_dirs_in, get_files_in, hms_to_seconds, seconds_to_hms,
};

fn bench_duration_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("duration");

    group.bench_function("seconds_to_hms_ms", |b| {
        b.iter(|| seconds_to_hms(black_box(90321.789), black_box(true)))
    });

    group.bench_function("hms_to_seconds_ms", |b| {
        b.iter(|| hms_to_seconds(black_box("25:05:21.789"), black_box(true)))
    });

    group.bench_function("roundtrip", |b| {
        b.iter(|| {
            let text = seconds_to_hms(black_box(-3723.456), true).unwrap();
            hms_to_seconds(&text, true)
        })
    });

    group.finish();
}

fn bench_walk(c: &mut Criterion) {
    let tree = TestTree::new();
    // 4 wide, 4 deep: 341 directories, 2728 files
    tree.populate(4, 4, 8);

    let mut group = c.benchmark_group("walk");
    group.sample_size(20);

    group.bench_function("files_all", |b| {
        b.iter(|| get_files_in(black_box(tree.path()), None, true, false))
    });

    group.bench_function("files_filtered", |b| {
        b.iter(|| {
            let filter = ExtensionFilter::new([".rs"]);
            get_files_in(black_box(tree.path()), Some(filter), true, false)
        })
    });

    group.bench_function("files_absolute", |b| {
        b.iter(|| get_files_in(black_box(tree.path()), None, true, true))
    });

    group.bench_function("dirs_all", |b| {
        b.iter(|| get_dirs_in(black_box(tree.path()), true, false))
    });

    group.finish();
}

fn bench_sizes(c: &mut Criterion) {
    c.bench_function("bytes_readable", |b| {
        b.iter(|| bytes_readable(black_box(5_368_709_120)))
    });
}

criterion_group!(benches, bench_duration_codec, bench_walk, bench_sizes);
criterion_main!(benches);
