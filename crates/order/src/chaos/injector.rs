use crate::{
    abstract_trait::random::DynRandomSource,
    chaos::config::{ChaosConfig, SimulatedFault},
};
use prometheus_client::{
    metrics::{counter::Counter, family::Family},
    registry::Registry,
};
use prometheus_client_derive_encode::EncodeLabelSet;
use std::fmt;

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
pub struct FaultLabels {
    pub status: String,
}

/// Decides, per request, whether to short-circuit with a simulated failure.
pub struct FaultInjector {
    config: ChaosConfig,
    random: DynRandomSource,
    faults_total: Family<FaultLabels, Counter>,
}

impl fmt::Debug for FaultInjector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FaultInjector")
            .field("config", &self.config)
            .field("random", &"<dyn RandomSource>")
            .finish()
    }
}

impl FaultInjector {
    pub fn new(config: ChaosConfig, random: DynRandomSource) -> Self {
        Self {
            config,
            random,
            faults_total: Family::default(),
        }
    }

    pub fn register_metrics(&self, registry: &mut Registry) {
        registry.register(
            "chaos_simulated_faults",
            "Requests short-circuited by fault injection",
            self.faults_total.clone(),
        );
    }

    /// Rolls the dice for one request. `None` means pass through.
    pub fn roll(&self) -> Option<&SimulatedFault> {
        if !self.config.is_active() {
            return None;
        }

        if self.random.next_f64() >= self.config.fault_rate {
            return None;
        }

        let index = self.random.next_index(self.config.faults.len());
        let fault = self.config.faults.get(index)?;

        self.faults_total
            .get_or_create(&FaultLabels {
                status: fault.status.as_u16().to_string(),
            })
            .inc();

        Some(fault)
    }
}
