use crate::{
    abstract_trait::order::{
        repository::{DynOrderCommandRepository, DynOrderQueryRepository},
        service::OrderCommandServiceTrait,
    },
    domain::{
        requests::order::{
            CreateOrderRecordRequest, CreateOrderRequest, UpdateOrderRecordRequest,
            UpdateOrderRequest,
        },
        response::order::OrderResponse,
    },
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use shared::{
    errors::{RepositoryError, ServiceError},
    utils::{Method, Metrics, Status as StatusUtils},
};
use tokio::time::Instant;
use tracing::{error, info, warn};

#[derive(Clone)]
pub struct OrderCommandService {
    query: DynOrderQueryRepository,
    command: DynOrderCommandRepository,
    metrics: Metrics,
}

pub struct OrderCommandServiceDeps {
    pub query: DynOrderQueryRepository,
    pub command: DynOrderCommandRepository,
}

impl OrderCommandService {
    pub fn new(deps: OrderCommandServiceDeps, registry: &mut Registry) -> Self {
        let OrderCommandServiceDeps { query, command } = deps;

        let metrics = Metrics::new();
        metrics.register("order_command_service", registry);

        Self {
            query,
            command,
            metrics,
        }
    }

    fn complete(&self, start_time: Instant, method: Method, status: StatusUtils) {
        self.metrics
            .record(method, status, start_time.elapsed().as_secs_f64());
    }

    /// Existence check ahead of any mutation, so a missing id never reaches
    /// the mutating store call.
    async fn ensure_exists(
        &self,
        operation: &'static str,
        id: i64,
        method: Method,
        start_time: Instant,
    ) -> Result<(), ServiceError> {
        match self.query.find_by_id(id).await {
            Ok(Some(_)) => Ok(()),
            Ok(None) => {
                warn!(operation, order_id = id, "⚠️ Order not found");
                self.complete(start_time, method, StatusUtils::Error);
                Err(ServiceError::Repo(RepositoryError::NotFound))
            }
            Err(e) => {
                error!(operation, order_id = id, error = %e, "❌ Failed to look up order");
                self.complete(start_time, method, StatusUtils::Error);
                Err(ServiceError::Repo(e))
            }
        }
    }

    fn fail(
        &self,
        operation: &'static str,
        id: i64,
        method: Method,
        start_time: Instant,
        err: RepositoryError,
    ) -> ServiceError {
        match err {
            RepositoryError::NotFound => {
                warn!(operation, order_id = id, "⚠️ Order disappeared before write");
            }
            ref e => {
                error!(operation, order_id = id, error = %e, "❌ Store write failed");
            }
        }
        self.complete(start_time, method, StatusUtils::Error);
        ServiceError::Repo(err)
    }
}

#[async_trait]
impl OrderCommandServiceTrait for OrderCommandService {
    async fn create_order(&self, req: &CreateOrderRequest) -> Result<OrderResponse, ServiceError> {
        let start_time = Instant::now();
        let method = Method::Post;
        let fields = req.touched_fields();

        info!("🏗️ Creating new order for customer={}", req.customer_name);

        let record = CreateOrderRecordRequest::from(req.clone());

        match self.command.create_order(&record).await {
            Ok(order) => {
                info!(
                    operation = "create",
                    order_id = order.id,
                    fields = ?fields,
                    "✅ Order created"
                );
                self.complete(start_time, method, StatusUtils::Success);
                Ok(OrderResponse::from(order))
            }
            Err(e) => {
                error!(operation = "create", fields = ?fields, error = %e, "❌ Failed to create order");
                self.complete(start_time, method, StatusUtils::Error);
                Err(ServiceError::Repo(e))
            }
        }
    }

    async fn update_order(
        &self,
        id: i64,
        req: &UpdateOrderRequest,
    ) -> Result<OrderResponse, ServiceError> {
        let start_time = Instant::now();
        let method = Method::Patch;
        let fields = req.touched_fields();

        info!("✏️ Updating order ID={} fields={:?}", id, fields);

        if req.is_empty() {
            warn!(operation = "update", order_id = id, "⚠️ Rejected empty update");
            self.complete(start_time, method, StatusUtils::Error);
            return Err(ServiceError::Validation(
                "\"value\" must have at least 1 key".into(),
            ));
        }

        self.ensure_exists("update", id, method, start_time).await?;

        let record = UpdateOrderRecordRequest::new(id, req.clone());

        let order = self
            .command
            .update_order(&record)
            .await
            .map_err(|e| self.fail("update", id, method, start_time, e))?;

        info!(
            operation = "update",
            order_id = id,
            fields = ?fields,
            "🔄 Order updated"
        );
        self.complete(start_time, method, StatusUtils::Success);

        Ok(OrderResponse::from(order))
    }

    async fn delete_order(&self, id: i64) -> Result<(), ServiceError> {
        let start_time = Instant::now();
        let method = Method::Delete;

        info!("🗑️ Deleting order ID={}", id);

        self.ensure_exists("delete", id, method, start_time).await?;

        self.command
            .delete_order(id)
            .await
            .map_err(|e| self.fail("delete", id, method, start_time, e))?;

        info!(operation = "delete", order_id = id, "✅ Order deleted");
        self.complete(start_time, method, StatusUtils::Success);

        Ok(())
    }
}
