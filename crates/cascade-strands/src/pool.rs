//! Bounded-concurrency fan-out pool.
//!
//! One task per strand, a semaphore caps concurrency, and a join barrier
//! waits for all of them. A panicking or failing strand degrades to a
//! confidence-0 result; it never aborts the batch.

use std::sync::Arc;
use std::time::Instant;

use cascade_core::config::StrandConfig;
use cascade_core::models::{FailureFinding, StrandResult};
use cascade_core::traits::{IFailureAnalyzer, IStrand, StrandInput};
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::warn;

pub struct StrandPool {
    config: StrandConfig,
}

impl StrandPool {
    pub fn new(config: StrandConfig) -> Self {
        Self { config }
    }

    /// Run every strand over the shared input and join all of them.
    ///
    /// Results come back in strand order. Partial failures are tolerated:
    /// each failed or panicked strand contributes a confidence-0 result.
    pub async fn run(
        &self,
        strands: &[Arc<dyn IStrand>],
        input: StrandInput,
    ) -> Vec<StrandResult> {
        let input = Arc::new(input);
        let semaphore = Arc::new(Semaphore::new(self.config.concurrency.max(1)));
        let mut set: JoinSet<(usize, StrandResult)> = JoinSet::new();

        for (index, strand) in strands.iter().enumerate() {
            let strand = Arc::clone(strand);
            let input = Arc::clone(&input);
            let semaphore = Arc::clone(&semaphore);
            set.spawn(async move {
                // Closed only if the pool is dropped mid-run.
                let _permit = semaphore.acquire_owned().await;
                let start = Instant::now();
                let mut result = strand.analyze(&input);
                result.latency_ms = start.elapsed().as_millis() as u64;
                (index, result)
            });
        }

        let mut results: Vec<Option<StrandResult>> = vec![None; strands.len()];
        while let Some(joined) = set.join_next().await {
            match joined {
                Ok((index, result)) => results[index] = Some(result),
                Err(e) => {
                    // Index lost with the panic; the drain below fills every
                    // still-empty slot with a degraded result.
                    warn!(error = %e, "strand task panicked; degrading to confidence 0");
                }
            }
        }

        results
            .into_iter()
            .enumerate()
            .map(|(i, slot)| {
                slot.unwrap_or_else(|| StrandResult::failed(strands[i].kind(), "task panicked"))
            })
            .collect()
    }

    /// Failure-analysis variant: same fan-out and join-barrier shape, the
    /// output classifies failure modes instead of timing cascades.
    pub async fn run_failure_analysis(
        &self,
        analyzers: &[Arc<dyn IFailureAnalyzer>],
        input: StrandInput,
    ) -> Vec<FailureFinding> {
        let input = Arc::new(input);
        let semaphore = Arc::new(Semaphore::new(self.config.concurrency.max(1)));
        let mut set: JoinSet<(usize, FailureFinding)> = JoinSet::new();

        for (index, analyzer) in analyzers.iter().enumerate() {
            let analyzer = Arc::clone(analyzer);
            let input = Arc::clone(&input);
            let semaphore = Arc::clone(&semaphore);
            set.spawn(async move {
                let _permit = semaphore.acquire_owned().await;
                let start = Instant::now();
                let mut finding = analyzer.analyze(&input);
                finding.latency_ms = start.elapsed().as_millis() as u64;
                (index, finding)
            });
        }

        let mut results: Vec<Option<FailureFinding>> = vec![None; analyzers.len()];
        while let Some(joined) = set.join_next().await {
            match joined {
                Ok((index, finding)) => results[index] = Some(finding),
                Err(e) => {
                    warn!(error = %e, "failure analyzer task panicked; degrading");
                }
            }
        }

        results
            .into_iter()
            .enumerate()
            .map(|(i, slot)| {
                slot.unwrap_or_else(|| {
                    FailureFinding::failed(analyzers[i].kind(), "task panicked")
                })
            })
            .collect()
    }
}

impl Default for StrandPool {
    fn default() -> Self {
        Self::new(StrandConfig::default())
    }
}
