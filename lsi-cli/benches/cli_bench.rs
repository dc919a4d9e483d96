use std::path::PathBuf;
use std::process::{Command, Stdio};

use assert_cmd::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lsi::Record;
use lsi_cli::render::{write_text, Columns, Section, TextStyle};
use tempfile::TempDir;

/// A deep directory with a symlink halfway down.
fn fixture() -> (TempDir, PathBuf) {
    let temp = TempDir::new().expect("failed to create temp dir");
    let root = temp.path().canonicalize().expect("failed to canonicalize");
    let deep = root.join("a/b/c/d/e/f");
    std::fs::create_dir_all(&deep).expect("failed to create bench path");

    #[cfg(unix)]
    std::os::unix::fs::symlink("a/b/c", root.join("shortcut")).expect("failed to symlink");

    (temp, root)
}

fn bench_cli_startup(c: &mut Criterion) {
    c.bench_function("cli_startup_version", |b| {
        b.iter(|| {
            let mut cmd = Command::cargo_bin("lsi").expect("failed to locate lsi binary");
            let output = cmd.arg("-v").output().expect("failed to run lsi");
            black_box(output);
        });
    });
}

fn bench_cli_inspect(c: &mut Criterion) {
    let (_temp, root) = fixture();
    let target = root.join("shortcut/d/e/f");

    c.bench_function("cli_inspect_long", |b| {
        b.iter(|| {
            let mut cmd = Command::cargo_bin("lsi").expect("failed to locate lsi binary");
            cmd.stdout(Stdio::null()).stderr(Stdio::null());
            let status = cmd
                .arg("-li")
                .arg(&target)
                .status()
                .expect("failed to execute lsi");
            black_box(status.success());
        });
    });

    c.bench_function("cli_inspect_json", |b| {
        b.iter(|| {
            let mut cmd = Command::cargo_bin("lsi").expect("failed to locate lsi binary");
            let output = cmd
                .args(["--format", "json"])
                .arg(&target)
                .output()
                .expect("failed to execute lsi");
            black_box(output);
        });
    });
}

fn bench_render_text(c: &mut Criterion) {
    let records: Vec<Record> = (0..64)
        .map(|i| {
            Record::builder(format!("dir{i}"), format!("dir{i}"))
                .mode("drwxr-xr-x")
                .devices(1, 1)
                .owner(1000, "someone")
                .group(1000, "staff")
                .size(4096 * i)
                .inode(1_000_000 + i)
                .depth(usize::try_from(i % 4).unwrap_or(0))
                .build()
        })
        .collect();
    let sections = [Section {
        root: PathBuf::from("/bench"),
        records,
        error: None,
    }];
    let style = TextStyle {
        columns: Columns::long().with_inode(true),
        follow: true,
        indent_width: 2,
    };

    c.bench_function("render_text_64", |b| {
        b.iter(|| {
            let mut buf = Vec::with_capacity(8192);
            write_text(&mut buf, black_box(&sections), &style).expect("render failed");
            black_box(buf);
        });
    });
}

criterion_group!(
    cli_benches,
    bench_cli_startup,
    bench_cli_inspect,
    bench_render_text
);
criterion_main!(cli_benches);
