use basket_mining::{encode, generate_rules, mine_itemsets, MiningEngine, RuleFilter};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Deterministic synthetic baskets: `count` baskets over `universe` items,
/// skewed so low ids are popular.
fn synthetic_baskets(count: usize, universe: usize) -> Vec<Vec<String>> {
    let mut state: u64 = 0x9e37_79b9_7f4a_7c15;
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        state
    };

    (0..count)
        .map(|_| {
            let len = 2 + (next() % 6) as usize;
            (0..len)
                .map(|_| {
                    let a = next() as usize % universe;
                    let b = next() as usize % universe;
                    format!("item{:03}", a.min(b))
                })
                .collect()
        })
        .collect()
}

fn bench_encode(c: &mut Criterion) {
    let baskets = synthetic_baskets(5_000, 200);
    c.bench_function("encode_5k_baskets", |b| {
        b.iter(|| encode(black_box(&baskets)).unwrap())
    });
}

fn bench_mine_itemsets(c: &mut Criterion) {
    let baskets = synthetic_baskets(5_000, 200);
    let encoded = encode(&baskets).unwrap();
    c.bench_function("mine_itemsets_5k_support_0.02", |b| {
        b.iter(|| mine_itemsets(black_box(&encoded), 0.02, None, None).unwrap())
    });
}

fn bench_generate_rules(c: &mut Criterion) {
    let baskets = synthetic_baskets(5_000, 200);
    let encoded = encode(&baskets).unwrap();
    let itemsets = mine_itemsets(&encoded, 0.02, None, None).unwrap();
    let filter = RuleFilter::confidence(0.3);
    c.bench_function("generate_rules_5k_confidence_0.3", |b| {
        b.iter(|| generate_rules(black_box(&itemsets), &filter).unwrap())
    });
}

fn bench_engine_run(c: &mut Criterion) {
    let baskets = synthetic_baskets(2_000, 100);
    let engine = MiningEngine::with_thresholds(0.03, 0.4);
    c.bench_function("engine_run_2k", |b| {
        b.iter(|| engine.run(black_box(&baskets)).unwrap())
    });
}

criterion_group!(
    benches,
    bench_encode,
    bench_mine_itemsets,
    bench_generate_rules,
    bench_engine_run
);
criterion_main!(benches);
