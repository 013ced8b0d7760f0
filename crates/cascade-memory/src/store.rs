//! The bounded incident store.

use std::collections::{HashMap, VecDeque};
use std::sync::RwLock;

use cascade_core::alert::Severity;
use cascade_core::config::MemoryConfig;
use cascade_core::errors::{CascadeResult, MemoryError};
use cascade_core::models::{IncidentRecord, Outcome, PatternEffectiveness};
use cascade_core::traits::IIncidentStore;
use tracing::{debug, warn};

#[derive(Default)]
struct StoreInner {
    records: VecDeque<IncidentRecord>,
    effectiveness: HashMap<String, PatternEffectiveness>,
}

/// Ring-buffer incident store behind a single `RwLock`.
///
/// Capacity is a hard bound: reaching it evicts the oldest
/// `eviction_fraction` of records in one batch, so steady-state appends
/// stay O(1) amortized and the retained records are always the most recent.
pub struct InMemoryStore {
    inner: RwLock<StoreInner>,
    config: MemoryConfig,
}

impl InMemoryStore {
    pub fn new(config: MemoryConfig) -> Self {
        Self {
            inner: RwLock::new(StoreInner::default()),
            config,
        }
    }

    fn evict_count(&self) -> usize {
        ((self.config.capacity as f64 * self.config.eviction_fraction).ceil() as usize).max(1)
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new(MemoryConfig::default())
    }
}

impl IIncidentStore for InMemoryStore {
    fn append(&self, record: IncidentRecord) -> CascadeResult<()> {
        let mut inner = self.inner.write().map_err(|_| MemoryError::LockPoisoned)?;
        if inner.records.len() >= self.config.capacity {
            let evict = self.evict_count().min(inner.records.len());
            inner.records.drain(..evict);
            debug!(evicted = evict, "incident store at capacity, evicted oldest records");
        }
        inner.records.push_back(record);
        Ok(())
    }

    fn record_outcome(
        &self,
        client_id: &str,
        pattern: Option<&str>,
        outcome: Outcome,
        actual_minutes: Option<f64>,
        recovery_actions: &[String],
    ) -> CascadeResult<()> {
        let mut inner = self.inner.write().map_err(|_| MemoryError::LockPoisoned)?;

        let target = inner.records.iter_mut().rev().find(|r| {
            r.client_id == client_id
                && r.outcome.is_none()
                && (pattern.is_none() || r.pattern.as_deref() == pattern)
        });
        match target {
            Some(record) => {
                record.outcome = Some(outcome);
                record.actual_time_to_event_minutes = actual_minutes;
                record.recovery_actions = recovery_actions.to_vec();
            }
            None => {
                // Feedback can outlive its record after eviction.
                warn!(client_id, ?pattern, "no open incident record for outcome feedback");
            }
        }

        if let Some(name) = pattern {
            inner
                .effectiveness
                .entry(name.to_string())
                .or_default()
                .record(outcome.effectiveness());
        }
        Ok(())
    }

    fn len(&self) -> usize {
        self.inner.read().map(|i| i.records.len()).unwrap_or(0)
    }

    fn recent(&self, limit: usize) -> CascadeResult<Vec<IncidentRecord>> {
        let inner = self.inner.read().map_err(|_| MemoryError::LockPoisoned)?;
        let skip = inner.records.len().saturating_sub(limit);
        Ok(inner.records.iter().skip(skip).cloned().collect())
    }

    fn similar_incidents(
        &self,
        category: &str,
        severity: Severity,
        window: usize,
    ) -> CascadeResult<Vec<IncidentRecord>> {
        Ok(self
            .recent(window)?
            .into_iter()
            .filter(|r| {
                r.max_severity == severity && r.categories.iter().any(|c| c == category)
            })
            .collect())
    }

    fn success_rate(&self, window: usize) -> CascadeResult<f64> {
        let outcomes: Vec<Outcome> = self
            .recent(window)?
            .iter()
            .filter_map(|r| r.outcome)
            .collect();
        // Neutral before any feedback arrives, so the adaptive threshold
        // holds steady instead of drifting on an empty window.
        if outcomes.is_empty() {
            return Ok(0.5);
        }
        Ok(outcomes.iter().filter(|o| o.is_successful()).count() as f64 / outcomes.len() as f64)
    }

    fn pattern_effectiveness(&self, pattern: &str) -> CascadeResult<Option<PatternEffectiveness>> {
        let inner = self.inner.read().map_err(|_| MemoryError::LockPoisoned)?;
        Ok(inner.effectiveness.get(pattern).copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cascade_core::models::DecisionAction;
    use cascade_core::Confidence;
    use chrono::Utc;

    fn record(id: usize, client_id: &str, pattern: Option<&str>) -> IncidentRecord {
        IncidentRecord {
            id: format!("inc-{id}"),
            timestamp: Utc::now(),
            client_id: client_id.to_string(),
            alert_count: 3,
            categories: vec!["database".to_string()],
            max_severity: Severity::Critical,
            predicted_in_minutes: 15.0,
            confidence: Confidence::new(0.7),
            action: DecisionAction::Prevent,
            pattern: pattern.map(String::from),
            outcome: None,
            actual_time_to_event_minutes: None,
            recovery_actions: vec![],
        }
    }

    fn small_store() -> InMemoryStore {
        InMemoryStore::new(MemoryConfig {
            capacity: 10,
            eviction_fraction: 0.2,
            trailing_window: 10,
        })
    }

    #[test]
    fn append_beyond_cap_keeps_only_most_recent() {
        let store = small_store();
        for i in 0..25 {
            store.append(record(i, "acme", None)).unwrap();
        }
        assert!(store.len() <= 10);
        let recent = store.recent(100).unwrap();
        // The retained records are a contiguous, most-recent suffix.
        let last = recent.last().unwrap();
        assert_eq!(last.id, "inc-24");
        let ids: Vec<usize> = recent
            .iter()
            .map(|r| r.id.trim_start_matches("inc-").parse().unwrap())
            .collect();
        assert!(ids.windows(2).all(|w| w[1] == w[0] + 1));
    }

    #[test]
    fn overflow_evicts_a_batch_not_one() {
        let store = small_store();
        for i in 0..=10 {
            store.append(record(i, "acme", None)).unwrap();
        }
        // 10 filled the store; the 11th triggered a 20% eviction first.
        assert_eq!(store.len(), 9);
        assert_eq!(store.recent(1).unwrap()[0].id, "inc-10");
    }

    #[test]
    fn outcome_feedback_updates_record_and_counters() {
        let store = small_store();
        store
            .append(record(0, "acme", Some("database_degradation")))
            .unwrap();
        store
            .record_outcome(
                "acme",
                Some("database_degradation"),
                Outcome::Success,
                Some(12.0),
                &["failed over to replica".to_string()],
            )
            .unwrap();

        let r = &store.recent(1).unwrap()[0];
        assert_eq!(r.outcome, Some(Outcome::Success));
        assert_eq!(r.actual_time_to_event_minutes, Some(12.0));
        assert_eq!(r.recovery_actions.len(), 1);

        let eff = store
            .pattern_effectiveness("database_degradation")
            .unwrap()
            .unwrap();
        assert_eq!(eff.total, 1);
        assert_eq!(eff.successful, 1);
    }

    #[test]
    fn outcome_targets_most_recent_open_record() {
        let store = small_store();
        store.append(record(0, "acme", None)).unwrap();
        store.append(record(1, "acme", None)).unwrap();
        store
            .record_outcome("acme", None, Outcome::Failure, None, &[])
            .unwrap();
        let recent = store.recent(2).unwrap();
        assert_eq!(recent[0].outcome, None);
        assert_eq!(recent[1].outcome, Some(Outcome::Failure));
    }

    #[test]
    fn success_rate_is_neutral_without_feedback() {
        let store = small_store();
        store.append(record(0, "acme", None)).unwrap();
        assert_eq!(store.success_rate(10).unwrap(), 0.5);
    }

    #[test]
    fn success_rate_counts_only_successful_outcomes() {
        let store = small_store();
        for (i, outcome) in [Outcome::Success, Outcome::Partial, Outcome::Failure]
            .into_iter()
            .enumerate()
        {
            store.append(record(i, &format!("c{i}"), None)).unwrap();
            store
                .record_outcome(&format!("c{i}"), None, outcome, None, &[])
                .unwrap();
        }
        // Partial is not successful (effectiveness 0.5 is not > 0.5).
        assert!((store.success_rate(10).unwrap() - 1.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn similar_incidents_match_category_and_severity() {
        let store = small_store();
        store.append(record(0, "acme", None)).unwrap();
        let mut other = record(1, "acme", None);
        other.categories = vec!["network".to_string()];
        store.append(other).unwrap();

        let similar = store
            .similar_incidents("database", Severity::Critical, 10)
            .unwrap();
        assert_eq!(similar.len(), 1);
        assert!(store
            .similar_incidents("database", Severity::Info, 10)
            .unwrap()
            .is_empty());
    }
}
