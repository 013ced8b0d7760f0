//! Fixed-weight impact scorer.

use crate::features::FeatureVector;

// Business impact weights.
const W_BI_SEVERITY: f64 = 0.25;
const W_BI_CASCADE_RISK: f64 = 0.25;
const W_BI_CLIENT_TIER: f64 = 0.20;
const W_BI_CRITICALITY: f64 = 0.20;
const W_BI_BUSINESS_HOURS: f64 = 0.10;

// Cost impact weights.
const W_CI_LOAD: f64 = 0.30;
const W_CI_CRITICALITY: f64 = 0.30;
const W_CI_CLIENT_TIER: f64 = 0.20;
const W_CI_FREQUENCY: f64 = 0.20;

// SLA risk weights.
const W_SLA_CASCADE_RISK: f64 = 0.30;
const W_SLA_CLIENT_TIER: f64 = 0.25;
const W_SLA_SEVERITY: f64 = 0.25;
const W_SLA_BUSINESS_HOURS: f64 = 0.20;

/// The three aggregate scores the selection table runs on, each in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImpactScores {
    pub business_impact: f64,
    pub cost_impact: f64,
    pub sla_risk: f64,
}

impl ImpactScores {
    pub fn from_features(f: &FeatureVector) -> Self {
        let business_impact = W_BI_SEVERITY * f.severity
            + W_BI_CASCADE_RISK * f.cascade_risk
            + W_BI_CLIENT_TIER * f.client_tier
            + W_BI_CRITICALITY * f.system_criticality
            + W_BI_BUSINESS_HOURS * f.business_hours;

        let cost_impact = W_CI_LOAD * f.current_load
            + W_CI_CRITICALITY * f.system_criticality
            + W_CI_CLIENT_TIER * f.client_tier
            + W_CI_FREQUENCY * f.historical_frequency;

        let sla_risk = W_SLA_CASCADE_RISK * f.cascade_risk
            + W_SLA_CLIENT_TIER * f.client_tier
            + W_SLA_SEVERITY * f.severity
            + W_SLA_BUSINESS_HOURS * f.business_hours;

        Self {
            business_impact: business_impact.clamp(0.0, 1.0),
            cost_impact: cost_impact.clamp(0.0, 1.0),
            sla_risk: sla_risk.clamp(0.0, 1.0),
        }
    }
}
