//! The pipeline orchestrator.

use std::sync::{Arc, RwLock};

use cascade_core::alert::normalize_batch;
use cascade_core::config::CascadeConfig;
use cascade_core::errors::CascadeResult;
use cascade_core::models::{
    AlertBatch, Decision, FailureReport, FusedPrediction, IncidentRecord, OutcomeFeedback,
};
use cascade_core::traits::{IFailureAnalyzer, IIncidentStore, IStrand, StrandInput};
use cascade_correlation::{CorrelationEngine, CorrelationReport};
use cascade_decision::DecisionEngine;
use cascade_memory::InMemoryStore;
use cascade_patterns::PatternPredictor;
use cascade_reasoner::{HttpReasoner, Narration, ReasonerService};
use cascade_strands::strands::{
    CrossClientStrand, DependencyStrand, PatternStrand, PredictiveStrand, ResourceStrand,
    TemporalStrand,
};
use cascade_strands::{default_analyzers, fuse, fuse_failures, StrandPool};
use chrono::Utc;
use tracing::{info, info_span, warn, Instrument};

/// Everything one analysis cycle produces.
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    pub correlation: CorrelationReport,
    pub prediction: FusedPrediction,
    pub failures: FailureReport,
    pub narration: Narration,
    pub decision: Decision,
}

/// The alert fusion and decision engine.
///
/// Built explicitly at startup and passed by reference; no global state.
/// Input validation fails fast; everything downstream of it degrades to
/// conservative fallbacks instead of failing the cycle.
pub struct CascadeEngine {
    config: CascadeConfig,
    correlation: CorrelationEngine,
    strands: Vec<Arc<dyn IStrand>>,
    analyzers: Vec<Arc<dyn IFailureAnalyzer>>,
    pool: StrandPool,
    reasoner: Arc<ReasonerService>,
    decision: RwLock<DecisionEngine>,
    store: Arc<dyn IIncidentStore>,
}

impl CascadeEngine {
    pub fn new(config: CascadeConfig) -> Self {
        let reasoner = match HttpReasoner::new(config.reasoner.clone()) {
            Ok(http) if config.reasoner.enabled => {
                ReasonerService::new(Box::new(http), config.reasoner.clone())
            }
            Ok(_) => ReasonerService::disabled(),
            Err(e) => {
                warn!(error = %e, "reasoner client unavailable, using template narration");
                ReasonerService::disabled()
            }
        };
        Self::with_parts(
            config,
            Arc::new(reasoner),
            Arc::new(InMemoryStore::default()),
        )
    }

    /// Explicit wiring for tests and embedders.
    pub fn with_parts(
        config: CascadeConfig,
        reasoner: Arc<ReasonerService>,
        store: Arc<dyn IIncidentStore>,
    ) -> Self {
        let strands: Vec<Arc<dyn IStrand>> = vec![
            Arc::new(TemporalStrand),
            Arc::new(DependencyStrand),
            Arc::new(ResourceStrand),
            Arc::new(PatternStrand::new(PatternPredictor::new(
                config.patterns.clone(),
            ))),
            Arc::new(CrossClientStrand),
            Arc::new(PredictiveStrand),
        ];
        Self {
            correlation: CorrelationEngine::new(config.correlation.clone()),
            strands,
            analyzers: default_analyzers(),
            pool: StrandPool::new(config.strands.clone()),
            reasoner,
            decision: RwLock::new(DecisionEngine::new(config.decision.clone())),
            store,
            config,
        }
    }

    pub fn store(&self) -> &Arc<dyn IIncidentStore> {
        &self.store
    }

    pub fn confidence_threshold(&self) -> f64 {
        self.decision
            .read()
            .map(|d| d.confidence_threshold())
            .unwrap_or(self.config.decision.initial_confidence_threshold)
    }

    /// Run one full analysis cycle.
    ///
    /// Fails only on invalid input. Every later stage degrades: failed
    /// strands contribute confidence 0, an unreachable reasoner falls back
    /// to the template, and a decision-path failure yields the fixed
    /// monitor fallback.
    pub async fn analyze(&self, batch: AlertBatch) -> CascadeResult<AnalysisReport> {
        let client_id = batch.client.client_id.clone();
        let span = info_span!("cascade.analyze", client_id = %client_id, alerts = batch.alerts.len());
        async move {
            // Boundary validation fails fast with an explicit error.
            let alerts = normalize_batch(&batch.alerts, Utc::now())?;

            let correlation = {
                let _span = info_span!("cascade.correlate").entered();
                self.correlation.correlate(&alerts)
            };

            let history = if batch.history.is_empty() {
                self.store
                    .recent(self.config.memory.trailing_window)
                    .unwrap_or_else(|e| {
                        warn!(client_id = %client_id, error = %e, component = "memory",
                              "history unavailable, analyzing without it");
                        Vec::new()
                    })
            } else {
                batch.history
            };

            let input = StrandInput::new(
                correlation.dedup.unique.clone(),
                batch.client.clone(),
                history,
            );

            let (results, findings) = async {
                let results = self.pool.run(&self.strands, input.clone()).await;
                let findings = self
                    .pool
                    .run_failure_analysis(&self.analyzers, input.clone())
                    .await;
                (results, findings)
            }
            .instrument(info_span!("cascade.strands"))
            .await;

            let prediction = fuse(&results);
            let failures = fuse_failures(findings);

            let narration = self.narrate(&prediction).await;

            let decision = {
                let _span = info_span!("cascade.decide").entered();
                match self.decision.read() {
                    Ok(engine) => engine.decide(&input, &prediction),
                    Err(_) => {
                        warn!(client_id = %client_id, alerts = input.alerts.len(),
                              component = "decision", "policy lock poisoned, using fallback");
                        Decision::fallback()
                    }
                }
            };

            let record =
                IncidentRecord::summarize(&client_id, &input.alerts, &prediction, decision.action);
            if let Err(e) = self.store.append(record) {
                warn!(client_id = %client_id, alerts = input.alerts.len(),
                      component = "memory", error = %e, "failed to record incident");
            }

            info!(
                client_id = %client_id,
                unique_alerts = input.alerts.len(),
                confidence = prediction.confidence.value(),
                minutes = prediction.predicted_in_minutes,
                urgency = %prediction.urgency,
                action = %decision.action,
                fallback = prediction.fallback_used || decision.fallback_used,
                "analysis cycle complete"
            );

            Ok(AnalysisReport {
                correlation,
                prediction,
                failures,
                narration,
                decision,
            })
        }
        .instrument(span)
        .await
    }

    async fn narrate(&self, prediction: &FusedPrediction) -> Narration {
        let reasoner = Arc::clone(&self.reasoner);
        let prediction = prediction.clone();
        // The reasoner client is blocking; keep it off the async workers.
        let template = cascade_reasoner::fallback::narrate(&prediction);
        match tokio::task::spawn_blocking(move || reasoner.explain(&prediction)).await {
            Ok(narration) => narration,
            Err(e) => {
                warn!(component = "reasoner", error = %e, "narration task failed, using template");
                Narration {
                    text: template,
                    fallback_used: true,
                    extraction: Default::default(),
                }
            }
        }
    }

    /// Feed an observed outcome back into the learning store and adapt the
    /// decision confidence threshold from the trailing success rate.
    pub fn record_outcome(&self, feedback: OutcomeFeedback) -> CascadeResult<()> {
        let _span = info_span!("cascade.feedback", client_id = %feedback.client_id).entered();
        self.store.record_outcome(
            &feedback.client_id,
            feedback.prediction.pattern.as_deref(),
            feedback.outcome,
            feedback.actual_time_to_event_minutes,
            &feedback.recovery_actions_taken,
        )?;

        let success_rate = self
            .store
            .success_rate(self.config.memory.trailing_window)?;
        match self.decision.write() {
            Ok(mut engine) => engine.adapt(success_rate),
            Err(_) => {
                warn!(component = "decision", "policy lock poisoned, threshold not adapted");
            }
        }
        Ok(())
    }
}
