//! Feature extraction: batch + prediction + topology → seven normalized
//! features, each in [0, 1].

use cascade_core::models::FusedPrediction;
use cascade_core::traits::StrandInput;
use chrono::{Datelike, Timelike, Weekday};

/// The feature vector the scorer and the classifier hook both consume.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector {
    /// Weight of the worst alert severity in the batch.
    pub severity: f64,
    /// Fused cascade confidence.
    pub cascade_risk: f64,
    /// Client service-tier weight.
    pub client_tier: f64,
    /// 1.0 during business hours on a weekday, 0.3 otherwise.
    pub business_hours: f64,
    /// Fraction of alerting systems marked business-critical.
    pub system_criticality: f64,
    /// Similar incidents in the supplied history, saturating at 10.
    pub historical_frequency: f64,
    /// Batch size as a proxy for current load, saturating at 20 alerts.
    pub current_load: f64,
}

impl FeatureVector {
    pub fn extract(input: &StrandInput, prediction: &FusedPrediction) -> Self {
        let severity = input
            .alerts
            .iter()
            .map(|a| a.severity.weight())
            .fold(0.0f64, f64::max);

        let weekday = !matches!(input.now.weekday(), Weekday::Sat | Weekday::Sun);
        let business_hours = if weekday && (8..18).contains(&input.now.hour()) {
            1.0
        } else {
            0.3
        };

        let systems = input.alert_systems();
        let system_criticality = if systems.is_empty() {
            0.0
        } else {
            systems
                .iter()
                .filter(|s| input.topology.is_critical(s))
                .count() as f64
                / systems.len() as f64
        };

        let categories: Vec<&str> = input.alerts.iter().map(|a| a.category.as_str()).collect();
        let similar = input
            .history
            .iter()
            .filter(|r| r.categories.iter().any(|c| categories.contains(&c.as_str())))
            .count();

        Self {
            severity,
            cascade_risk: prediction.confidence.value(),
            client_tier: input.topology.tier.weight(),
            business_hours,
            system_criticality,
            historical_frequency: (similar as f64 / 10.0).min(1.0),
            current_load: (input.alerts.len() as f64 / 20.0).min(1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cascade_core::alert::{Alert, Severity};
    use cascade_core::topology::{ClientTier, ClientTopology};
    use cascade_core::Confidence;
    use chrono::Utc;

    fn alert(system: &str, severity: Severity) -> Alert {
        Alert {
            id: format!("{system}-{severity}"),
            client_id: "acme".to_string(),
            system: system.to_string(),
            severity,
            category: "database".to_string(),
            message: "m".to_string(),
            timestamp: Utc::now(),
            cascade_risk: Confidence::new(0.5),
        }
    }

    #[test]
    fn features_are_normalized() {
        let mut topo = ClientTopology::new("acme", ClientTier::Enterprise);
        topo.mark_critical("database");
        let input = StrandInput::new(
            vec![
                alert("database", Severity::Critical),
                alert("api", Severity::Warning),
            ],
            topo,
            vec![],
        );
        let prediction = FusedPrediction::conservative(vec![]);
        let f = FeatureVector::extract(&input, &prediction);

        for value in [
            f.severity,
            f.cascade_risk,
            f.client_tier,
            f.business_hours,
            f.system_criticality,
            f.historical_frequency,
            f.current_load,
        ] {
            assert!((0.0..=1.0).contains(&value), "out of range: {value}");
        }
        assert_eq!(f.severity, 1.0);
        assert_eq!(f.system_criticality, 0.5);
        assert_eq!(f.client_tier, 1.0);
    }

    #[test]
    fn empty_batch_zeroes_load_features() {
        let input = StrandInput::new(
            vec![],
            ClientTopology::new("acme", ClientTier::Standard),
            vec![],
        );
        let f = FeatureVector::extract(&input, &FusedPrediction::conservative(vec![]));
        assert_eq!(f.severity, 0.0);
        assert_eq!(f.system_criticality, 0.0);
        assert_eq!(f.current_load, 0.0);
    }
}
