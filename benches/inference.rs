use criterion::{criterion_group, criterion_main, BatchSize, Criterion, Throughput};

use agridiag::{InferenceEngine, RuleId, RuleRecord, RuleStore};

fn chain_store(rules: u32) -> RuleStore {
    // Worst case for the fixpoint loop: each rule's premise is the
    // previous rule's conclusion, so exactly one new rule fires per pass.
    let records: Vec<RuleRecord> = (0..rules)
        .map(|i| RuleRecord {
            id: RuleId::new(i),
            premises: vec![format!("fact_{i}")],
            conclusion: format!("fact_{}", i + 1),
            cf: 1.0,
        })
        .collect();
    RuleStore::from_records(records).unwrap()
}

fn fanin_store(rules: u32) -> RuleStore {
    // All rules conclude the same disease from distinct symptoms, so
    // every firing exercises the CF combination path.
    let records: Vec<RuleRecord> = (0..rules)
        .map(|i| RuleRecord {
            id: RuleId::new(i),
            premises: vec![format!("symptom_{i}")],
            conclusion: "blight".to_string(),
            cf: 0.5,
        })
        .collect();
    RuleStore::from_records(records).unwrap()
}

fn bench_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("inference/chain");
    for rules in [16u32, 64, 256] {
        let store = chain_store(rules);
        group.throughput(Throughput::Elements(u64::from(rules)));
        group.bench_function(format!("{rules}_rules"), |b| {
            let engine = InferenceEngine::new(&store);
            b.iter_batched(
                || engine.seed(["fact_0"]).unwrap(),
                |mut facts| engine.run(&mut facts),
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_fanin(c: &mut Criterion) {
    let mut group = c.benchmark_group("inference/fanin");
    for rules in [16u32, 64, 256] {
        let store = fanin_store(rules);
        let symptoms: Vec<String> = (0..rules).map(|i| format!("symptom_{i}")).collect();
        group.throughput(Throughput::Elements(u64::from(rules)));
        group.bench_function(format!("{rules}_rules"), |b| {
            let engine = InferenceEngine::new(&store);
            b.iter_batched(
                || engine.seed(symptoms.clone()).unwrap(),
                |mut facts| engine.run(&mut facts),
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_chain, bench_fanin);
criterion_main!(benches);
