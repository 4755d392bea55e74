use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use itemset_dict::{Apriori, Codec, DatasetGenerator, Dictionary, GeneratorConfig, PatternMiner};

/// Generate a reproducible synthetic basket dataset
fn generate(num_transactions: usize, num_items: usize) -> Vec<Vec<String>> {
    let config = GeneratorConfig::new(num_transactions, num_items, 1, 8).with_seed(12345);
    DatasetGenerator::new(config)
        .expect("valid generator config")
        .generate()
}

fn build_dictionary(data: &[Vec<String>]) -> Dictionary<String> {
    let itemsets = Apriori::new()
        .with_max_len(3)
        .mine(data, 0.05)
        .expect("valid min_support");
    Dictionary::build(itemsets)
}

fn bench_mining(c: &mut Criterion) {
    let sizes = [1_000, 10_000];
    let mut group = c.benchmark_group("mining");

    for size in sizes.iter() {
        let data = generate(*size, 20);

        group.bench_with_input(BenchmarkId::new("Apriori", size), &data, |b, data| {
            b.iter(|| {
                let sets = Apriori::new()
                    .with_max_len(3)
                    .mine(black_box(data), 0.05)
                    .unwrap();
                black_box(sets)
            });
        });
    }

    group.finish();
}

fn bench_compress(c: &mut Criterion) {
    let sizes = [1_000, 10_000, 100_000];
    let mut group = c.benchmark_group("compress");

    for size in sizes.iter() {
        let data = generate(*size, 20);
        let dict = build_dictionary(&data[..data.len().min(1_000)]);
        let codec = Codec::new(&dict);

        group.bench_with_input(BenchmarkId::new("sequential", size), &data, |b, data| {
            b.iter(|| black_box(codec.compress(black_box(data))));
        });

        group.bench_with_input(BenchmarkId::new("parallel_4", size), &data, |b, data| {
            b.iter(|| black_box(codec.compress_parallel(black_box(data), 4)));
        });

        group.bench_with_input(BenchmarkId::new("streaming", size), &data, |b, data| {
            b.iter(|| {
                let entries: usize = codec.compress_iter(black_box(data)).map(|t| t.len()).sum();
                black_box(entries)
            });
        });
    }

    group.finish();
}

fn bench_decompress(c: &mut Criterion) {
    let sizes = [1_000, 10_000, 100_000];
    let mut group = c.benchmark_group("decompress");

    for size in sizes.iter() {
        let data = generate(*size, 20);
        let dict = build_dictionary(&data[..data.len().min(1_000)]);
        let codec = Codec::new(&dict);
        let compressed = codec.compress(&data);

        group.bench_with_input(BenchmarkId::new("Codec", size), &compressed, |b, compressed| {
            b.iter(|| black_box(codec.decompress(black_box(compressed)).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_mining, bench_compress, bench_decompress);
criterion_main!(benches);
