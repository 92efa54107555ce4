use crate::{domain::filter::OrderFilter, model::Order as OrderModel};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynOrderQueryRepository = Arc<dyn OrderQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait OrderQueryRepositoryTrait {
    async fn find_all(&self, filter: &OrderFilter) -> Result<Vec<OrderModel>, RepositoryError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<OrderModel>, RepositoryError>;
}
