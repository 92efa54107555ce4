use crate::{
    abstract_trait::order::{repository::DynOrderQueryRepository, service::OrderQueryServiceTrait},
    domain::{
        filter::OrderFilter, requests::order::FindAllOrders, response::order::OrderResponse,
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
pub struct OrderQueryService {
    query: DynOrderQueryRepository,
    metrics: Metrics,
}

impl OrderQueryService {
    pub fn new(query: DynOrderQueryRepository, registry: &mut Registry) -> Self {
        let metrics = Metrics::new();
        metrics.register("order_query_service", registry);

        Self { query, metrics }
    }

    fn complete(&self, start_time: Instant, status: StatusUtils) {
        self.metrics
            .record(Method::Get, status, start_time.elapsed().as_secs_f64());
    }
}

#[async_trait]
impl OrderQueryServiceTrait for OrderQueryService {
    async fn find_all(&self, req: &FindAllOrders) -> Result<Vec<OrderResponse>, ServiceError> {
        let start_time = Instant::now();
        let filter = OrderFilter::from(req);

        match self.query.find_all(&filter).await {
            Ok(orders) => {
                info!(
                    operation = "list",
                    count = orders.len(),
                    status = ?filter.status,
                    customer_name = ?filter.customer_name,
                    "📦 Listed orders"
                );
                self.complete(start_time, StatusUtils::Success);
                Ok(orders.into_iter().map(OrderResponse::from).collect())
            }
            Err(e) => {
                error!(operation = "list", error = %e, "❌ Failed to list orders");
                self.complete(start_time, StatusUtils::Error);
                Err(ServiceError::Repo(e))
            }
        }
    }

    async fn find_by_id(&self, id: i64) -> Result<OrderResponse, ServiceError> {
        let start_time = Instant::now();

        match self.query.find_by_id(id).await {
            Ok(Some(order)) => {
                info!(operation = "get", order_id = id, "✅ Order found");
                self.complete(start_time, StatusUtils::Success);
                Ok(OrderResponse::from(order))
            }
            Ok(None) => {
                warn!(operation = "get", order_id = id, "⚠️ Order not found");
                self.complete(start_time, StatusUtils::Error);
                Err(ServiceError::Repo(RepositoryError::NotFound))
            }
            Err(e) => {
                error!(operation = "get", order_id = id, error = %e, "❌ Failed to fetch order");
                self.complete(start_time, StatusUtils::Error);
                Err(ServiceError::Repo(e))
            }
        }
    }
}
