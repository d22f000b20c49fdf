//! Stream throughput: plain vs tagged, scalars vs arrays.
//!
//! ```bash
//! cargo bench --bench stream_bench
//! cargo bench --bench stream_bench -- "tagged"
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::time::Duration;

use bdex_core::prelude::*;

const SCALAR_COUNT: usize = 1024;
const ARRAY_LENGTHS: [usize; 3] = [16, 1024, 65_536];

fn plain_scalars(c: &mut Criterion) {
    let mut group = c.benchmark_group("plain_scalars");
    group.throughput(Throughput::Elements(SCALAR_COUNT as u64));

    group.bench_function("put_int32", |b| {
        let mut out = ByteOutStream::with_capacity(SCALAR_COUNT * 4);
        b.iter(|| {
            out.remove_all();
            for i in 0..SCALAR_COUNT as i32 {
                out.put_int32(black_box(i));
            }
        })
    });

    group.bench_function("put_int40", |b| {
        let mut out = ByteOutStream::with_capacity(SCALAR_COUNT * 5);
        b.iter(|| {
            out.remove_all();
            for i in 0..SCALAR_COUNT as i64 {
                out.put_int40(black_box(-i));
            }
        })
    });

    let mut out = ByteOutStream::new();
    for i in 0..SCALAR_COUNT as i32 {
        out.put_int32(i);
    }
    let mut input = ByteInStream::from_bytes(out.data());
    group.bench_function("get_int32", |b| {
        b.iter(|| {
            input.reset();
            let mut v = 0i32;
            for _ in 0..SCALAR_COUNT {
                input.get_int32(&mut v);
            }
            black_box(v)
        })
    });

    group.finish();
}

fn tagged_scalars(c: &mut Criterion) {
    let mut group = c.benchmark_group("tagged_scalars");
    group.throughput(Throughput::Elements(SCALAR_COUNT as u64));

    group.bench_function("put_int32", |b| {
        let mut out = TestOutStream::with_capacity(SCALAR_COUNT * 5);
        b.iter(|| {
            out.remove_all();
            for i in 0..SCALAR_COUNT as i32 {
                out.put_int32(black_box(i));
            }
        })
    });

    let mut out = TestOutStream::new();
    out.put_version(1);
    for i in 0..SCALAR_COUNT as i32 {
        out.put_int32(i);
    }
    let mut input = TestInStream::from_bytes(out.data());
    group.bench_function("get_int32", |b| {
        b.iter(|| {
            input.reset();
            let mut version = 0;
            let mut v = 0i32;
            let _ = input.get_version(&mut version);
            for _ in 0..SCALAR_COUNT {
                let _ = input.get_int32(&mut v);
            }
            black_box(v)
        })
    });

    group.finish();
}

fn arrays(c: &mut Criterion) {
    let mut group = c.benchmark_group("arrays");

    for len in ARRAY_LENGTHS {
        let values: Vec<i64> = (0..len as i64).map(|i| i * 7919 - 1_000_000).collect();
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("plain_put_int48", len), &values, |b, values| {
            let mut out = ByteOutStream::with_capacity(values.len() * 6);
            b.iter(|| {
                out.remove_all();
                out.put_array_int48(black_box(values));
            })
        });

        group.bench_with_input(BenchmarkId::new("tagged_put_int48", len), &values, |b, values| {
            let mut out = TestOutStream::with_capacity(values.len() * 6 + 5);
            b.iter(|| {
                out.remove_all();
                out.put_array_int48(black_box(values));
            })
        });

        let mut out = ByteOutStream::new();
        out.put_array_int48(&values);
        let mut input = ByteInStream::from_bytes(out.data());
        let mut back = vec![0i64; len];
        group.bench_function(BenchmarkId::new("plain_get_int48", len), |b| {
            b.iter(|| {
                input.reset();
                input.get_array_int48(&mut back);
            })
        });

        let mut out = TestOutStream::new();
        out.put_array_int48(&values);
        let mut input = TestInStream::from_bytes(out.data());
        input.set_suppress_version_check(true);
        group.bench_function(BenchmarkId::new("tagged_get_int48", len), |b| {
            b.iter(|| {
                input.reset();
                let _ = input.get_array_int48(&mut back);
            })
        });
    }

    group.finish();
}

fn floats(c: &mut Criterion) {
    let values: Vec<f64> = (0..4096).map(|i| i as f64 * 0.25).collect();
    let mut group = c.benchmark_group("floats");
    group.throughput(Throughput::Bytes((values.len() * 8) as u64));

    group.bench_function("plain_put_float64", |b| {
        let mut out = ByteOutStream::with_capacity(values.len() * 8);
        b.iter(|| {
            out.remove_all();
            out.put_array_float64(black_box(&values));
        })
    });

    group.finish();
}

criterion_group!(
    name = scalars;
    config = Criterion::default().measurement_time(Duration::from_secs(5));
    targets = plain_scalars, tagged_scalars
);

criterion_group!(
    name = bulk;
    config = Criterion::default()
        .measurement_time(Duration::from_secs(5))
        .sample_size(50);
    targets = arrays, floats
);

criterion_main!(scalars, bulk);
