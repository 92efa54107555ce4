use crate::{
    abstract_trait::order::repository::{OrderCommandRepositoryTrait, OrderQueryRepositoryTrait},
    domain::{
        filter::OrderFilter,
        requests::order::{CreateOrderRecordRequest, UpdateOrderRecordRequest},
    },
    model::Order as OrderModel,
};
use async_trait::async_trait;
use chrono::Utc;
use shared::errors::RepositoryError;
use sqlx::types::Json;
use std::{collections::BTreeMap, sync::Arc};
use tokio::sync::RwLock;
use tracing::info;

#[derive(Debug, Default)]
struct MemoryState {
    last_id: i64,
    orders: BTreeMap<i64, OrderModel>,
}

/// Process-local order store. Ids increase monotonically and are never reused,
/// even after deletes. Every operation holds the lock for its whole mutation.
#[derive(Debug, Clone, Default)]
pub struct InMemoryOrderRepository {
    state: Arc<RwLock<MemoryState>>,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OrderQueryRepositoryTrait for InMemoryOrderRepository {
    async fn find_all(&self, filter: &OrderFilter) -> Result<Vec<OrderModel>, RepositoryError> {
        let state = self.state.read().await;

        Ok(state
            .orders
            .values()
            .filter(|order| filter.matches(order))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<OrderModel>, RepositoryError> {
        Ok(self.state.read().await.orders.get(&id).cloned())
    }
}

#[async_trait]
impl OrderCommandRepositoryTrait for InMemoryOrderRepository {
    async fn create_order(
        &self,
        req: &CreateOrderRecordRequest,
    ) -> Result<OrderModel, RepositoryError> {
        let mut state = self.state.write().await;

        state.last_id += 1;
        let now = Utc::now();
        let order = OrderModel {
            id: state.last_id,
            customer_name: req.customer_name.clone(),
            total_amount: req.total_amount,
            status: req.status.as_str().to_string(),
            items: Json(req.items.clone()),
            created_at: now,
            updated_at: now,
        };
        state.orders.insert(order.id, order.clone());

        info!("✅ Created order ID {} in memory", order.id);
        Ok(order)
    }

    async fn update_order(
        &self,
        req: &UpdateOrderRecordRequest,
    ) -> Result<OrderModel, RepositoryError> {
        let mut state = self.state.write().await;
        let order = state
            .orders
            .get_mut(&req.id)
            .ok_or(RepositoryError::NotFound)?;

        if let Some(customer_name) = &req.customer_name {
            order.customer_name = customer_name.clone();
        }
        if let Some(total_amount) = req.total_amount {
            order.total_amount = total_amount;
        }
        if let Some(status) = req.status {
            order.status = status.as_str().to_string();
        }
        if let Some(items) = &req.items {
            order.items = Json(items.clone());
        }
        order.updated_at = Utc::now();

        Ok(order.clone())
    }

    async fn delete_order(&self, id: i64) -> Result<(), RepositoryError> {
        self.state
            .write()
            .await
            .orders
            .remove(&id)
            .map(|_| ())
            .ok_or(RepositoryError::NotFound)
    }
}
