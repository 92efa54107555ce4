use crate::{
    abstract_trait::random::DynRandomSource,
    chaos::{ChaosConfig, FaultInjector},
    di::{DependenciesInject, DependenciesInjectDeps},
};
use prometheus_client::registry::Registry;
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub registry: Arc<Registry>,
    pub fault_injector: Arc<FaultInjector>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("deps", &self.di_container)
            .field("registry", &self.registry)
            .field("fault_injector", &self.fault_injector)
            .finish()
    }
}

impl AppState {
    pub fn new(deps: DependenciesInjectDeps, chaos: ChaosConfig, random: DynRandomSource) -> Self {
        let mut registry = Registry::default();

        let di_container = DependenciesInject::new(deps, &mut registry);

        let fault_injector = Arc::new(FaultInjector::new(chaos, random));
        fault_injector.register_metrics(&mut registry);

        Self {
            di_container,
            registry: Arc::new(registry),
            fault_injector,
        }
    }
}
