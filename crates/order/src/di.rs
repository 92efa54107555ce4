use crate::{
    abstract_trait::order::{
        repository::{DynOrderCommandRepository, DynOrderQueryRepository},
        service::{DynOrderCommandService, DynOrderQueryService},
    },
    repository::{InMemoryOrderRepository, OrderCommandRepository, OrderQueryRepository},
    service::order::{OrderCommandService, OrderCommandServiceDeps, OrderQueryService},
};
use prometheus_client::registry::Registry;
use shared::config::ConnectionPool;
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub order_query: DynOrderQueryService,
    pub order_command: DynOrderCommandService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("order_query", &"OrderQueryService")
            .field("order_command", &"OrderCommandService")
            .finish()
    }
}

/// The store behind the services, as a query/command pair.
#[derive(Clone)]
pub struct DependenciesInjectDeps {
    pub query: DynOrderQueryRepository,
    pub command: DynOrderCommandRepository,
}

impl DependenciesInjectDeps {
    pub fn postgres(pool: ConnectionPool) -> Self {
        Self {
            query: Arc::new(OrderQueryRepository::new(pool.clone())),
            command: Arc::new(OrderCommandRepository::new(pool)),
        }
    }

    pub fn in_memory() -> Self {
        let store = InMemoryOrderRepository::new();
        Self {
            query: Arc::new(store.clone()),
            command: Arc::new(store),
        }
    }
}

impl DependenciesInject {
    pub fn new(deps: DependenciesInjectDeps, registry: &mut Registry) -> Self {
        let DependenciesInjectDeps { query, command } = deps;

        let order_query: DynOrderQueryService =
            Arc::new(OrderQueryService::new(query.clone(), registry));

        let order_command: DynOrderCommandService = Arc::new(OrderCommandService::new(
            OrderCommandServiceDeps { query, command },
            registry,
        ));

        Self {
            order_query,
            order_command,
        }
    }
}
