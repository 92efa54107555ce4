use crate::domain::{requests::order::FindAllOrders, response::order::OrderResponse};
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynOrderQueryService = Arc<dyn OrderQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait OrderQueryServiceTrait {
    async fn find_all(&self, req: &FindAllOrders) -> Result<Vec<OrderResponse>, ServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<OrderResponse, ServiceError>;
}
