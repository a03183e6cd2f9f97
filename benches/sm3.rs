use cryptal_sm3::hash::sm3;
use cryptal_sm3::merkle::MerkleTree;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_sm3(c: &mut Criterion) {
    c.bench_function("sm3 64 bytes", |b| b.iter(|| sm3(black_box(&[0u8; 64]))));

    let mut group = c.benchmark_group("sm3 throughput");
    for size in [1024usize, 16 * 1024, 1024 * 1024] {
        let data = vec![0xA5u8; size];

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_function(format!("{size} bytes"), |b| b.iter(|| sm3(black_box(&data))));
    }
    group.finish();
}

pub fn bench_merkle(c: &mut Criterion) {
    let leaves: Vec<Vec<u8>> = (0..1024u32).map(|i| i.to_be_bytes().to_vec()).collect();

    c.bench_function("merkle build 1024 leaves", |b| {
        b.iter(|| MerkleTree::new(black_box(leaves.clone())))
    });
}

criterion_group!(benches, bench_sm3, bench_merkle);
criterion_main!(benches);
