use criterion::{criterion_group, criterion_main, Criterion};
use huffman_engine::Engine;

const CORPUS: &str = "It was the best of times, it was the worst of times, it was the age of \
wisdom, it was the age of foolishness, it was the epoch of belief, it was the epoch of \
incredulity, it was the season of Light, it was the season of Darkness.";

fn bench_build(c: &mut Criterion) {
    c.bench_function("engine_new", |b| b.iter(|| Engine::new(CORPUS).unwrap()));
}

fn bench_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");
    let engine = Engine::new(CORPUS).unwrap();
    let input = CORPUS.repeat(20);

    group.bench_function("encode", |b| b.iter(|| engine.encode(&input).unwrap()));

    let bits = engine.encode(&input).unwrap();
    group.bench_function("decode", |b| b.iter(|| engine.decode(&bits).unwrap()));
}

criterion_group!(benches, bench_build, bench_codec);
criterion_main!(benches);
