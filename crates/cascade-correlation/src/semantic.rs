//! Semantic clustering — cosine similarity over a deterministic
//! bag-of-tokens embedding of "system severity category message".
//!
//! Greedy formation: the earliest unassigned alert seeds a cluster and
//! absorbs every unassigned alert whose similarity to the seed exceeds the
//! threshold. Clusters are sorted by severity desc, then size desc.

use cascade_core::alert::{Alert, Severity};
use cascade_core::config::CorrelationConfig;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Embedding dimensionality. Tokens are hashed into this many buckets.
const EMBED_DIM: usize = 64;

/// Coarse priority label for a cluster, derived from its worst member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClusterPriority {
    Low,
    Medium,
    High,
}

impl ClusterPriority {
    fn from_severity(severity: Severity) -> Self {
        match severity {
            Severity::Critical => ClusterPriority::High,
            Severity::Warning => ClusterPriority::Medium,
            _ => ClusterPriority::Low,
        }
    }
}

/// A group of semantically similar alerts. Every input alert belongs to
/// exactly one cluster before the report cap is applied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertCluster {
    /// Seed alert the cluster formed around.
    pub primary: Alert,
    /// All members, including the primary.
    pub members: Vec<Alert>,
    pub priority: ClusterPriority,
    /// Seconds between the earliest and latest member.
    pub time_span_secs: i64,
}

impl AlertCluster {
    pub fn size(&self) -> usize {
        self.members.len()
    }

    fn build(primary: Alert, members: Vec<Alert>) -> Self {
        let max_severity = members
            .iter()
            .map(|a| a.severity)
            .max()
            .unwrap_or(primary.severity);
        let earliest = members.iter().map(|a| a.timestamp).min();
        let latest = members.iter().map(|a| a.timestamp).max();
        let time_span_secs = match (earliest, latest) {
            (Some(e), Some(l)) => (l - e).num_seconds(),
            _ => 0,
        };
        Self {
            primary,
            members,
            priority: ClusterPriority::from_severity(max_severity),
            time_span_secs,
        }
    }
}

/// Deterministic bag-of-tokens embedding of an alert's identity text.
pub fn embed(alert: &Alert) -> Vec<f32> {
    let text = format!(
        "{} {} {} {}",
        alert.system, alert.severity, alert.category, alert.message
    );
    let mut vector = vec![0.0f32; EMBED_DIM];
    for token in text.split_whitespace() {
        let token = token.to_lowercase();
        let hash = blake3::hash(token.as_bytes());
        let bucket = (hash.as_bytes()[0] as usize) % EMBED_DIM;
        vector[bucket] += 1.0;
    }
    let norm: f32 = vector.iter().map(|v| v * v).sum::<f32>().sqrt();
    if norm > 0.0 {
        for v in &mut vector {
            *v /= norm;
        }
    }
    vector
}

/// Cosine similarity of two embeddings.
pub fn cosine(a: &[f32], b: &[f32]) -> f64 {
    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let na: f32 = a.iter().map(|v| v * v).sum::<f32>().sqrt();
    let nb: f32 = b.iter().map(|v| v * v).sum::<f32>().sqrt();
    if na == 0.0 || nb == 0.0 {
        return 0.0;
    }
    (dot / (na * nb)) as f64
}

/// Cluster alerts by semantic similarity.
///
/// Returns at most `config.max_clusters` clusters, highest priority and
/// largest first. The formation itself partitions the full input.
pub fn cluster(alerts: &[Alert], config: &CorrelationConfig) -> Vec<AlertCluster> {
    if alerts.is_empty() {
        return vec![];
    }

    let embeddings: Vec<Vec<f32>> = alerts.iter().map(embed).collect();
    let mut assigned = vec![false; alerts.len()];
    let mut clusters: Vec<AlertCluster> = Vec::new();

    for i in 0..alerts.len() {
        if assigned[i] {
            continue;
        }
        assigned[i] = true;
        let mut members = vec![alerts[i].clone()];
        for j in (i + 1)..alerts.len() {
            if assigned[j] {
                continue;
            }
            if cosine(&embeddings[i], &embeddings[j]) > config.semantic_threshold {
                assigned[j] = true;
                members.push(alerts[j].clone());
            }
        }
        clusters.push(AlertCluster::build(alerts[i].clone(), members));
    }

    clusters.sort_by(|a, b| {
        b.priority
            .cmp(&a.priority)
            .then_with(|| b.size().cmp(&a.size()))
    });

    debug!(
        input = alerts.len(),
        clusters = clusters.len(),
        "semantic clustering complete"
    );

    clusters.truncate(config.max_clusters);
    clusters
}
