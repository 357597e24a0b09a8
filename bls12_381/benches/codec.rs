//! BLS12-381 point encoding benchmarks

use bls12_381::{G1Affine, G1Projective, G2Affine, G2Projective};
use criterion::{
    BenchmarkGroup, Criterion, black_box, criterion_group, criterion_main, measurement::Measurement,
};

fn bench_g1<'a, M: Measurement>(group: &mut BenchmarkGroup<'a, M>) {
    let p = G1Projective::GENERATOR.mul_vartime(&[0x5eed_1234_abcd_0001]).to_affine();
    let compressed = p.to_compressed();
    let uncompressed = p.to_uncompressed();

    group.bench_function("G1 to_compressed", |b| {
        b.iter(|| black_box(p).to_compressed())
    });
    group.bench_function("G1 from_compressed", |b| {
        b.iter(|| G1Affine::from_compressed(black_box(&compressed)))
    });
    group.bench_function("G1 from_uncompressed", |b| {
        b.iter(|| G1Affine::from_uncompressed(black_box(&uncompressed)))
    });
}

fn bench_g2<'a, M: Measurement>(group: &mut BenchmarkGroup<'a, M>) {
    let p = G2Projective::GENERATOR.mul_vartime(&[0x5eed_1234_abcd_0001]).to_affine();
    let compressed = p.to_compressed();
    let uncompressed = p.to_uncompressed();

    group.bench_function("G2 to_compressed", |b| {
        b.iter(|| black_box(p).to_compressed())
    });
    group.bench_function("G2 from_compressed", |b| {
        b.iter(|| G2Affine::from_compressed(black_box(&compressed)))
    });
    group.bench_function("G2 from_uncompressed", |b| {
        b.iter(|| G2Affine::from_uncompressed(black_box(&uncompressed)))
    });
}

fn bench_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("point encoding");
    bench_g1(&mut group);
    bench_g2(&mut group);
    group.finish();
}

criterion_group!(benches, bench_codec);
criterion_main!(benches);
