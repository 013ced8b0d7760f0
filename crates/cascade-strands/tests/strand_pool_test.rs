//! End-to-end fan-out tests: default strands over realistic batches,
//! pool join, fusion.

use std::sync::Arc;

use cascade_core::alert::{Alert, Severity};
use cascade_core::models::{StrandKind, StrandResult, Urgency};
use cascade_core::topology::{ClientTier, ClientTopology};
use cascade_core::traits::{IStrand, StrandInput};
use cascade_core::Confidence;
use cascade_strands::{default_analyzers, default_strands, fuse, fuse_failures, StrandPool};
use chrono::{Duration, Utc};

fn db_alert(id: &str, severity: Severity, offset_secs: i64) -> Alert {
    Alert {
        id: id.to_string(),
        client_id: "acme".to_string(),
        system: "database".to_string(),
        severity,
        category: "database".to_string(),
        message: "replication lag rising, deadlock detected".to_string(),
        timestamp: Utc::now() - Duration::minutes(5) + Duration::seconds(offset_secs),
        cascade_risk: Confidence::new(0.6),
    }
}

fn topology() -> ClientTopology {
    let mut topo = ClientTopology::new("acme", ClientTier::Enterprise);
    topo.add_dependency("database", "api");
    topo.add_dependency("database", "reporting");
    topo.add_dependency("api", "web");
    topo.mark_critical("database");
    topo
}

fn escalating_batch() -> Vec<Alert> {
    vec![
        db_alert("a1", Severity::Info, 0),
        db_alert("a2", Severity::Warning, 45),
        db_alert("a3", Severity::Warning, 90),
        db_alert("a4", Severity::Critical, 135),
        db_alert("a5", Severity::Critical, 180),
    ]
}

#[tokio::test]
async fn escalating_database_batch_fuses_to_elevated_urgency() {
    let input = StrandInput::new(escalating_batch(), topology(), vec![]);
    let results = StrandPool::default().run(&default_strands(), input).await;
    assert_eq!(results.len(), 6);

    let fused = fuse(&results);
    assert!(fused.confidence.value() > 0.4);
    assert!(fused.urgency >= Urgency::Medium);
    assert!(!fused.fallback_used);
    assert_eq!(fused.pattern.as_deref(), Some("database_degradation"));
    // The dependency strand sees the blast radius through the topology.
    assert!(fused.affected_systems.iter().any(|s| s == "api"));
    assert_eq!(fused.strand_diagnostics.len(), 6);
}

#[tokio::test]
async fn quiet_batch_fuses_low() {
    let alerts = vec![Alert {
        id: "q1".to_string(),
        client_id: "acme".to_string(),
        system: "backup".to_string(),
        severity: Severity::Low,
        category: "general".to_string(),
        message: "nightly snapshot finished".to_string(),
        timestamp: Utc::now() - Duration::minutes(30),
        cascade_risk: Confidence::new(0.1),
    }];
    let input = StrandInput::new(alerts, ClientTopology::new("acme", ClientTier::Standard), vec![]);
    let results = StrandPool::default().run(&default_strands(), input).await;
    let fused = fuse(&results);
    assert_eq!(fused.urgency, Urgency::Low);
    assert!(fused.confidence.value() < 0.4);
}

#[tokio::test]
async fn one_bad_strand_degrades_not_aborts() {
    struct BrokenStrand;
    impl IStrand for BrokenStrand {
        fn kind(&self) -> StrandKind {
            StrandKind::CrossClient
        }
        fn analyze(&self, _input: &StrandInput) -> StrandResult {
            panic!("injected failure");
        }
    }

    let mut strands = default_strands();
    strands[4] = Arc::new(BrokenStrand);
    let input = StrandInput::new(escalating_batch(), topology(), vec![]);
    let results = StrandPool::default().run(&strands, input).await;

    assert_eq!(results.len(), 6);
    let failed: Vec<_> = results.iter().filter(|r| !r.confidence.is_signal()).collect();
    assert_eq!(failed.len(), 1);
    assert_eq!(failed[0].kind, StrandKind::CrossClient);

    let fused = fuse(&results);
    assert!(!fused.fallback_used);
    assert!(fused.confidence.is_signal());
}

#[tokio::test]
async fn failure_pool_classifies_database_failure() {
    let input = StrandInput::new(escalating_batch(), topology(), vec![]);
    let findings = StrandPool::default()
        .run_failure_analysis(&default_analyzers(), input)
        .await;
    assert_eq!(findings.len(), 8);

    let report = fuse_failures(findings);
    assert_eq!(
        report.dominant,
        Some(cascade_core::models::FailureKind::DatabaseFailure)
    );
    assert_eq!(report.severity, Severity::Critical);
    assert!(report.confidence.value() > 0.5);
}
