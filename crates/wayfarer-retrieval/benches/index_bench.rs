use criterion::{criterion_group, criterion_main, Criterion};

use wayfarer_core::models::BudgetTier;
use wayfarer_core::traits::IEmbeddingProvider;
use wayfarer_embeddings::TfIdfFallback;
use wayfarer_retrieval::{BudgetPartitioner, EmbeddingIndex};

const TOPICS: [&str; 8] = [
    "temples gardens tea",
    "museums art fashion",
    "beaches surfing nightlife",
    "glaciers hot springs",
    "street food markets",
    "hiking alpine lakes",
    "wine country vineyards",
    "desert souks spices",
];

/// 1K synthetic destinations cycling through a handful of topics.
fn build_corpus(encoder: &TfIdfFallback) -> EmbeddingIndex {
    let n = 1_000;
    let names: Vec<String> = (0..n).map(|i| format!("Destination {i}")).collect();
    let texts: Vec<String> = (0..n)
        .map(|i| format!("{} district {i}", TOPICS[i % TOPICS.len()]))
        .collect();
    EmbeddingIndex::build(encoder, names, &texts).unwrap()
}

fn bench_query_k8(c: &mut Criterion) {
    let encoder = TfIdfFallback::new(384);
    let index = build_corpus(&encoder);
    let query_vec = encoder.embed("ancient temples and history").unwrap();

    c.bench_function("flat_l2_query_1k_k8", |b| {
        b.iter(|| index.query_vector(&query_vec, 8).unwrap());
    });
}

fn bench_suggest(c: &mut Criterion) {
    let encoder = TfIdfFallback::new(384);
    let index = build_corpus(&encoder);
    let partitioner = BudgetPartitioner::new();

    c.bench_function("suggest_medium_1k", |b| {
        b.iter(|| {
            let hits = index.query(&encoder, "beaches nightlife", 8).unwrap();
            partitioner.partition(&hits, BudgetTier::Medium).len()
        });
    });
}

criterion_group!(benches, bench_query_k8, bench_suggest);
criterion_main!(benches);
