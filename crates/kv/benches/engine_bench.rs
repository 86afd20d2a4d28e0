use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use tempfile::tempdir;

use kv::Kv;

const N: usize = 1_000;
const VAL_SIZE: usize = 100;

fn engine_set(c: &mut Criterion) {
    // Every set fsyncs, so this measures the full durability cost per write.
    c.bench_function("engine_set_1k", |b| {
        b.iter_batched(
            || {
                let dir = tempdir().unwrap();
                let mut kv = Kv::new(dir.path().join("db"));
                kv.open().unwrap();
                (dir, kv)
            },
            |(_dir, mut kv)| {
                for i in 0..N as u64 {
                    kv.set(format!("k{}", i).into_bytes(), vec![b'x'; VAL_SIZE])
                        .unwrap();
                }
            },
            BatchSize::SmallInput,
        );
    });
}

fn engine_set_unchanged(c: &mut Criterion) {
    // Re-setting an identical value skips the log entirely.
    c.bench_function("engine_set_unchanged_1k", |b| {
        b.iter_batched(
            || {
                let dir = tempdir().unwrap();
                let mut kv = Kv::new(dir.path().join("db"));
                kv.open().unwrap();
                for i in 0..N as u64 {
                    kv.set(format!("k{}", i).into_bytes(), vec![b'x'; VAL_SIZE])
                        .unwrap();
                }
                (dir, kv)
            },
            |(_dir, mut kv)| {
                for i in 0..N as u64 {
                    let changed = kv
                        .set(format!("k{}", i).into_bytes(), vec![b'x'; VAL_SIZE])
                        .unwrap();
                    assert!(!changed);
                }
            },
            BatchSize::SmallInput,
        );
    });
}

fn engine_get_hit(c: &mut Criterion) {
    let dir = tempdir().unwrap();
    let mut kv = Kv::new(dir.path().join("db"));
    kv.open().unwrap();
    for i in 0..N as u64 {
        kv.set(format!("k{:06}", i).into_bytes(), vec![b'x'; VAL_SIZE])
            .unwrap();
    }

    c.bench_function("engine_get_hit_1k", |b| {
        b.iter(|| {
            for i in 0..N as u64 {
                let key = format!("k{:06}", i).into_bytes();
                criterion::black_box(kv.get(&key));
            }
        });
    });
}

fn engine_replay_on_open(c: &mut Criterion) {
    // The cost of rebuilding the index from a 5k-record log.
    c.bench_function("engine_replay_5k_records", |b| {
        b.iter_batched(
            || {
                let dir = tempdir().unwrap();
                let path = dir.path().join("db");
                let mut kv = Kv::new(&path);
                kv.open().unwrap();
                for i in 0..5_000u64 {
                    kv.set(
                        format!("k{:06}", i % 1_000).into_bytes(),
                        format!("v{:06}", i).into_bytes(),
                    )
                    .unwrap();
                }
                kv.close();
                (dir, Kv::new(path))
            },
            |(_dir, mut kv)| {
                kv.open().unwrap();
                assert_eq!(kv.len(), 1_000);
            },
            BatchSize::SmallInput,
        );
    });
}

fn engine_mixed_workload(c: &mut Criterion) {
    c.bench_function("engine_mixed_set_get_del_1k", |b| {
        b.iter_batched(
            || {
                let dir = tempdir().unwrap();
                let mut kv = Kv::new(dir.path().join("db"));
                kv.open().unwrap();
                (dir, kv)
            },
            |(_dir, mut kv)| {
                for i in 0..N as u64 {
                    let key = format!("k{:06}", i).into_bytes();
                    kv.set(key.clone(), vec![b'x'; VAL_SIZE]).unwrap();
                    criterion::black_box(kv.get(&key));

                    if i % 5 == 0 {
                        kv.del(&key).unwrap();
                    }
                }
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    benches,
    engine_set,
    engine_set_unchanged,
    engine_get_hit,
    engine_replay_on_open,
    engine_mixed_workload,
);

criterion_main!(benches);
