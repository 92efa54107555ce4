use axum::http::StatusCode;

pub const DEFAULT_FAULT_RATE: f64 = 0.10;

/// A canned failure the injector can answer with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulatedFault {
    pub status: StatusCode,
    pub message: String,
}

impl SimulatedFault {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn defaults() -> Vec<SimulatedFault> {
        vec![
            SimulatedFault::new(
                StatusCode::SERVICE_UNAVAILABLE,
                "Service Unavailable: Database connection pool exhausted",
            ),
            SimulatedFault::new(
                StatusCode::GATEWAY_TIMEOUT,
                "Gateway Timeout: Upstream service did not respond",
            ),
            SimulatedFault::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal Server Error: Transaction deadlock detected",
            ),
        ]
    }
}

/// Immutable fault-injection settings, fixed at construction of the injector.
#[derive(Debug, Clone, PartialEq)]
pub struct ChaosConfig {
    pub enabled: bool,
    /// Probability in `[0, 1]` that a request is short-circuited.
    pub fault_rate: f64,
    /// Drawn from uniformly when a fault fires.
    pub faults: Vec<SimulatedFault>,
}

impl Default for ChaosConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            fault_rate: DEFAULT_FAULT_RATE,
            faults: SimulatedFault::defaults(),
        }
    }
}

impl ChaosConfig {
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    pub fn with_fault_rate(fault_rate: f64) -> Self {
        Self {
            fault_rate: fault_rate.clamp(0.0, 1.0),
            ..Self::default()
        }
    }

    pub fn is_active(&self) -> bool {
        self.enabled && self.fault_rate > 0.0 && !self.faults.is_empty()
    }
}
