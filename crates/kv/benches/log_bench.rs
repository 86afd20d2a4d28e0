use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use tempfile::tempdir;

use logfile::{Entry, Log, SyncMode};

const N: usize = 5_000;
const VAL_SIZE: usize = 100;

fn log_append_sync(c: &mut Criterion) {
    c.bench_function("log_append_sync_1k", |b| {
        b.iter_batched(
            || {
                let dir = tempdir().unwrap();
                let mut log = Log::new(dir.path().join("db.log"));
                log.open().unwrap();
                (dir, log)
            },
            |(_dir, mut log)| {
                for i in 0..1_000u64 {
                    log.append(&Entry::put(
                        format!("k{}", i).into_bytes(),
                        vec![b'x'; VAL_SIZE],
                    ))
                    .unwrap();
                }
            },
            BatchSize::SmallInput,
        );
    });
}

fn log_append_nosync(c: &mut Criterion) {
    c.bench_function("log_append_nosync_5k", |b| {
        b.iter_batched(
            || {
                let dir = tempdir().unwrap();
                let mut log = Log::with_sync_mode(dir.path().join("db.log"), SyncMode::Never);
                log.open().unwrap();
                (dir, log)
            },
            |(_dir, mut log)| {
                for i in 0..N as u64 {
                    log.append(&Entry::put(
                        format!("k{}", i).into_bytes(),
                        vec![b'x'; VAL_SIZE],
                    ))
                    .unwrap();
                }
            },
            BatchSize::SmallInput,
        );
    });
}

fn log_append_tombstones(c: &mut Criterion) {
    c.bench_function("log_append_tombstone_nosync_5k", |b| {
        b.iter_batched(
            || {
                let dir = tempdir().unwrap();
                let mut log = Log::with_sync_mode(dir.path().join("db.log"), SyncMode::Never);
                log.open().unwrap();
                (dir, log)
            },
            |(_dir, mut log)| {
                for i in 0..N as u64 {
                    log.append(&Entry::tombstone(format!("k{}", i).into_bytes()))
                        .unwrap();
                }
            },
            BatchSize::SmallInput,
        );
    });
}

fn log_sequential_read(c: &mut Criterion) {
    c.bench_function("log_read_5k", |b| {
        b.iter_batched(
            || {
                let dir = tempdir().unwrap();
                let path = dir.path().join("db.log");
                let mut log = Log::with_sync_mode(&path, SyncMode::Never);
                log.open().unwrap();
                for i in 0..N as u64 {
                    log.append(&Entry::put(
                        format!("k{}", i).into_bytes(),
                        vec![b'x'; VAL_SIZE],
                    ))
                    .unwrap();
                }
                (dir, log)
            },
            |(_dir, mut log)| {
                log.seek_to_first_entry().unwrap();
                let mut count = 0usize;
                while let Some(entry) = log.read_entry().unwrap() {
                    criterion::black_box(entry);
                    count += 1;
                }
                assert_eq!(count, N);
            },
            BatchSize::SmallInput,
        );
    });
}

fn entry_encode(c: &mut Criterion) {
    let entry = Entry::put(b"some-medium-key".to_vec(), vec![b'x'; VAL_SIZE]);
    c.bench_function("entry_encode_100b", |b| {
        b.iter(|| criterion::black_box(entry.encode().unwrap()));
    });
}

fn entry_decode(c: &mut Criterion) {
    let encoded = Entry::put(b"some-medium-key".to_vec(), vec![b'x'; VAL_SIZE])
        .encode()
        .unwrap();
    c.bench_function("entry_decode_100b", |b| {
        b.iter(|| {
            let mut cursor = encoded.as_slice();
            criterion::black_box(Entry::decode(&mut cursor).unwrap())
        });
    });
}

criterion_group!(
    benches,
    log_append_sync,
    log_append_nosync,
    log_append_tombstones,
    log_sequential_read,
    entry_encode,
    entry_decode,
);

criterion_main!(benches);
