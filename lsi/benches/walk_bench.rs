use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lsi::{split, CancelToken, Collector, FileMode, Walker};
use std::path::Path;

fn bench_split(c: &mut Criterion) {
    let mut group = c.benchmark_group("split");

    group.bench_function("absolute_path", |b| {
        b.iter(|| split(black_box(Path::new("/usr/local/share/doc/lsi"))));
    });

    group.bench_function("with_dots", |b| {
        b.iter(|| split(black_box(Path::new("/a/b/../c/./d//e/"))));
    });

    group.bench_function("relative_parents", |b| {
        b.iter(|| split(black_box(Path::new("../../x/y/../z"))));
    });

    group.finish();
}

fn bench_mode(c: &mut Criterion) {
    let mut group = c.benchmark_group("mode");

    for raw in [0o100_644u32, 0o041_777, 0o104_755] {
        group.bench_with_input(BenchmarkId::from_parameter(format!("{raw:o}")), &raw, |b, &raw| {
            b.iter(|| FileMode::from_raw(black_box(raw)).symbolic());
        });
    }

    group.finish();
}

fn bench_walk(c: &mut Criterion) {
    let temp = tempfile::tempdir().unwrap();
    let root = temp.path().canonicalize().unwrap();
    let deep = root.join("a/b/c/d/e/f/g/h");
    std::fs::create_dir_all(&deep).unwrap();

    #[cfg(unix)]
    {
        std::os::unix::fs::symlink("a/b/c/d", root.join("short")).unwrap();
    }

    let walker = Walker::new();
    let mut group = c.benchmark_group("walk");

    group.bench_function("deep_directory", |b| {
        b.iter(|| {
            let mut collector = Collector::new(true);
            walker
                .walk(black_box(&deep), &CancelToken::new(), &mut collector)
                .unwrap();
            collector.into_records().len()
        });
    });

    #[cfg(unix)]
    group.bench_function("through_symlink", |b| {
        let path = root.join("short/e/f");
        b.iter(|| {
            let mut collector = Collector::new(true);
            walker
                .walk(black_box(&path), &CancelToken::new(), &mut collector)
                .unwrap();
            collector.into_records().len()
        });
    });

    group.finish();
}

criterion_group!(benches, bench_split, bench_mode, bench_walk);
criterion_main!(benches);
