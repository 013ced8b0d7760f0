//! Built-in cascade pattern definitions.
//!
//! Each pattern names the failure chain it describes, the keywords that
//! trigger it, the order systems typically fail in, tiered time-to-cascade
//! windows (minutes), and the canonical prevention actions.

use serde::{Deserialize, Serialize};

/// A known cascade pattern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CascadePattern {
    pub name: String,
    /// Keywords counted across the alert and its related window.
    pub triggers: Vec<String>,
    /// Typical order systems fail in once the cascade starts.
    pub system_sequence: Vec<String>,
    /// Tiered time-to-cascade windows, minutes; the first tier is the
    /// primary estimate.
    pub time_tiers_minutes: Vec<f64>,
    pub base_confidence: f64,
    /// Expected resolution time before dependency multipliers, minutes.
    pub base_resolution_minutes: f64,
    pub prevention_actions: Vec<String>,
}

fn pattern(
    name: &str,
    triggers: &[&str],
    sequence: &[&str],
    tiers: &[f64],
    base_confidence: f64,
    base_resolution_minutes: f64,
    actions: &[&str],
) -> CascadePattern {
    CascadePattern {
        name: name.to_string(),
        triggers: triggers.iter().map(|s| s.to_string()).collect(),
        system_sequence: sequence.iter().map(|s| s.to_string()).collect(),
        time_tiers_minutes: tiers.to_vec(),
        base_confidence,
        base_resolution_minutes,
        prevention_actions: actions.iter().map(|s| s.to_string()).collect(),
    }
}

/// The built-in pattern library.
pub fn builtin() -> Vec<CascadePattern> {
    vec![
        pattern(
            "database_degradation",
            &[
                "database", "connection", "pool", "query", "slow", "deadlock", "replication",
                "timeout",
            ],
            &["database", "api", "web"],
            &[15.0, 30.0, 45.0],
            0.8,
            25.0,
            &[
                "scale database connection pool",
                "kill long-running queries",
                "fail over to read replica",
            ],
        ),
        pattern(
            "memory_exhaustion",
            &["memory", "oom", "heap", "swap", "leak", "allocation"],
            &["application", "cache", "api"],
            &[10.0, 20.0, 40.0],
            0.75,
            20.0,
            &[
                "restart leaking service",
                "raise memory limits",
                "enable heap profiling",
            ],
        ),
        pattern(
            "network_partition",
            &[
                "network", "unreachable", "packet", "latency", "dns", "routing", "partition",
            ],
            &["network", "api", "database"],
            &[5.0, 15.0, 30.0],
            0.7,
            35.0,
            &[
                "verify switch and router health",
                "re-route traffic to healthy zone",
                "flush dns caches",
            ],
        ),
        pattern(
            "storage_saturation",
            &["disk", "storage", "volume", "full", "inode", "iops"],
            &["storage", "database", "backup"],
            &[20.0, 40.0, 60.0],
            0.7,
            30.0,
            &[
                "expand volume capacity",
                "purge stale snapshots",
                "throttle log verbosity",
            ],
        ),
        pattern(
            "auth_service_failure",
            &["auth", "authentication", "token", "login", "certificate", "expired"],
            &["auth", "api", "web"],
            &[10.0, 25.0, 45.0],
            0.65,
            15.0,
            &[
                "rotate expired certificates",
                "restart auth service",
                "enable cached session fallback",
            ],
        ),
        pattern(
            "queue_backlog",
            &["queue", "backlog", "consumer", "lag", "broker", "retry"],
            &["queue", "worker", "api"],
            &[25.0, 40.0, 60.0],
            0.6,
            20.0,
            &[
                "scale out consumers",
                "pause non-critical producers",
                "drain dead-letter queue",
            ],
        ),
    ]
}
