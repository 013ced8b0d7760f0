//! Dependency strand — risk proportional to how many systems depend on the
//! affected ones (reverse dependency edges).

use cascade_core::constants::clamp_minutes;
use cascade_core::models::{StrandKind, StrandPrediction, StrandResult};
use cascade_core::traits::{IStrand, StrandInput};
use cascade_core::Confidence;

pub struct DependencyStrand;

impl IStrand for DependencyStrand {
    fn kind(&self) -> StrandKind {
        StrandKind::Dependency
    }

    fn analyze(&self, input: &StrandInput) -> StrandResult {
        let systems = input.alert_systems();
        if input.topology.system_count() == 0 {
            return StrandResult {
                kind: self.kind(),
                confidence: Confidence::new(0.1),
                prediction: StrandPrediction {
                    minutes: 40.0,
                    affected_systems: systems.iter().map(|s| s.to_string()).collect(),
                    ..StrandPrediction::default()
                },
                reasoning: "no dependency information for client".to_string(),
                latency_ms: 0,
            };
        }

        let dependents = input.topology.dependent_count(systems.iter().copied());
        let critical_hit = systems.iter().any(|s| input.topology.is_critical(s));
        let risk = (dependents as f64 / 5.0).min(1.0);

        let mut confidence = 0.2 + 0.15 * dependents.min(5) as f64;
        if critical_hit {
            confidence += 0.1;
        }
        let confidence = Confidence::new(confidence.min(0.9));

        StrandResult {
            kind: self.kind(),
            confidence,
            prediction: StrandPrediction {
                minutes: clamp_minutes(25.0 - 10.0 * risk),
                affected_systems: input.topology.blast_radius(systems.iter().copied()),
                prevention_actions: vec![
                    "pre-scale dependent services".to_string(),
                    "enable circuit breakers on downstream calls".to_string(),
                ],
                pattern: None,
            },
            reasoning: format!(
                "{dependents} system(s) depend on the affected set{}",
                if critical_hit {
                    "; a critical system is affected"
                } else {
                    ""
                }
            ),
            latency_ms: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cascade_core::alert::{Alert, Severity};
    use cascade_core::topology::{ClientTier, ClientTopology};
    use chrono::Utc;

    fn alert(system: &str) -> Alert {
        Alert {
            id: format!("a-{system}"),
            client_id: "acme".to_string(),
            system: system.to_string(),
            severity: Severity::Critical,
            category: "database".to_string(),
            message: "down".to_string(),
            timestamp: Utc::now(),
            cascade_risk: Confidence::new(0.5),
        }
    }

    #[test]
    fn confidence_grows_with_dependents() {
        let mut topo = ClientTopology::new("acme", ClientTier::Standard);
        topo.add_dependency("database", "api");
        topo.add_dependency("database", "reporting");
        topo.add_dependency("database", "billing");
        let few = StrandInput::new(vec![alert("reporting")], topo.clone(), vec![]);
        let many = StrandInput::new(vec![alert("database")], topo, vec![]);

        let strand = DependencyStrand;
        assert!(
            strand.analyze(&many).confidence.value() > strand.analyze(&few).confidence.value()
        );
    }

    #[test]
    fn missing_topology_degrades_gracefully() {
        let input = StrandInput::new(
            vec![alert("mystery")],
            ClientTopology::new("acme", ClientTier::Standard),
            vec![],
        );
        let result = DependencyStrand.analyze(&input);
        assert!(result.confidence.is_signal());
        assert!(result.confidence.value() <= 0.2);
    }
}
