use cascade_core::models::{StrandKind, StrandPrediction, StrandResult};
use cascade_core::Confidence;
use cascade_strands::fusion;
use criterion::{criterion_group, criterion_main, Criterion};

/// One result per strand kind, with realistic confidences and payloads.
fn build_results() -> Vec<StrandResult> {
    StrandKind::ALL
        .iter()
        .enumerate()
        .map(|(i, kind)| StrandResult {
            kind: *kind,
            confidence: Confidence::new(0.3 + 0.1 * i as f64),
            prediction: StrandPrediction {
                minutes: 5.0 + 8.0 * i as f64,
                affected_systems: (0..4).map(|s| format!("sys-{}", (i + s) % 8)).collect(),
                prevention_actions: vec![
                    format!("scale {kind} capacity"),
                    "notify on-call".to_string(),
                ],
                pattern: (*kind == StrandKind::Pattern)
                    .then(|| "database_degradation".to_string()),
            },
            reasoning: format!("{kind} observed correlated degradation"),
            latency_ms: 2,
        })
        .collect()
}

fn bench_fuse_all_strands(c: &mut Criterion) {
    let results = build_results();
    c.bench_function("fuse_all_strands", |b| b.iter(|| fusion::fuse(&results)));
}

fn bench_fuse_with_failures(c: &mut Criterion) {
    let mut results = build_results();
    results[1] = StrandResult::failed(StrandKind::Dependency, "worker panicked");
    results[4] = StrandResult::failed(StrandKind::CrossClient, "worker panicked");
    c.bench_function("fuse_with_failed_strands", |b| {
        b.iter(|| fusion::fuse(&results))
    });
}

criterion_group!(benches, bench_fuse_all_strands, bench_fuse_with_failures);
criterion_main!(benches);
