//! Randomized fault injection ahead of request handling.

mod config;
mod injector;
mod random;

pub use self::config::{ChaosConfig, DEFAULT_FAULT_RATE, SimulatedFault};
pub use self::injector::{FaultInjector, FaultLabels};
pub use self::random::{FixedRandom, SeededRandom, ThreadRandom};
