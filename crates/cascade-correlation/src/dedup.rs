//! Exact/near deduplication.
//!
//! Two alerts are duplicates when their signatures (client, system, category,
//! severity) match and their timestamps are within the window. The extended
//! variant additionally requires message-token Jaccard similarity at or
//! above a threshold.

use std::collections::HashSet;

use cascade_core::alert::Alert;
use cascade_core::config::CorrelationConfig;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A primary alert plus the duplicates folded into it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DuplicateGroup {
    pub primary: Alert,
    pub duplicates: Vec<Alert>,
}

/// Output of a dedup pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DedupReport {
    /// One representative per group, in time order.
    pub unique: Vec<Alert>,
    /// Groups that actually folded duplicates (singletons omitted).
    pub groups: Vec<DuplicateGroup>,
    pub total: usize,
    pub duplicate_count: usize,
    /// duplicates / total; 0.0 for an empty input.
    pub noise_reduction: f64,
}

/// Jaccard similarity between two token sets.
fn jaccard(a: &[String], b: &[String]) -> f64 {
    let sa: HashSet<&str> = a.iter().map(String::as_str).collect();
    let sb: HashSet<&str> = b.iter().map(String::as_str).collect();
    let union = sa.union(&sb).count();
    if union == 0 {
        return 1.0;
    }
    sa.intersection(&sb).count() as f64 / union as f64
}

/// Deduplicate a batch of alerts.
///
/// Sorts by time, then greedily folds every qualifying unprocessed alert
/// into the earliest unprocessed one. Idempotent: running the pass again
/// on `unique` finds no further duplicates.
pub fn deduplicate(alerts: &[Alert], config: &CorrelationConfig) -> DedupReport {
    let total = alerts.len();
    if total == 0 {
        return DedupReport {
            unique: vec![],
            groups: vec![],
            total: 0,
            duplicate_count: 0,
            noise_reduction: 0.0,
        };
    }

    let mut sorted: Vec<&Alert> = alerts.iter().collect();
    sorted.sort_by_key(|a| a.timestamp);

    let mut processed = vec![false; sorted.len()];
    let mut unique: Vec<Alert> = Vec::new();
    let mut groups: Vec<DuplicateGroup> = Vec::new();
    let mut duplicate_count = 0usize;

    for i in 0..sorted.len() {
        if processed[i] {
            continue;
        }
        processed[i] = true;
        let primary = sorted[i];
        let primary_tokens = primary.message_tokens();
        let signature = primary.signature();
        let mut duplicates: Vec<Alert> = Vec::new();

        for j in (i + 1)..sorted.len() {
            if processed[j] {
                continue;
            }
            let candidate = sorted[j];
            if candidate.signature() != signature {
                continue;
            }
            let delta = (candidate.timestamp - primary.timestamp).num_seconds().abs();
            if delta > config.dedup_window_secs {
                continue;
            }
            if let Some(threshold) = config.jaccard_threshold {
                if jaccard(&primary_tokens, &candidate.message_tokens()) < threshold {
                    continue;
                }
            }
            processed[j] = true;
            duplicates.push(candidate.clone());
        }

        unique.push(primary.clone());
        if !duplicates.is_empty() {
            duplicate_count += duplicates.len();
            groups.push(DuplicateGroup {
                primary: primary.clone(),
                duplicates,
            });
        }
    }

    debug!(
        total,
        unique = unique.len(),
        duplicates = duplicate_count,
        "dedup pass complete"
    );

    DedupReport {
        noise_reduction: duplicate_count as f64 / total as f64,
        unique,
        groups,
        total,
        duplicate_count,
    }
}
