use crate::{
    abstract_trait::order::repository::OrderCommandRepositoryTrait,
    domain::requests::order::{CreateOrderRecordRequest, UpdateOrderRecordRequest},
    model::Order as OrderModel,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use sqlx::types::Json;
use tracing::{error, info};

pub struct OrderCommandRepository {
    db: ConnectionPool,
}

impl OrderCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderCommandRepositoryTrait for OrderCommandRepository {
    async fn create_order(
        &self,
        req: &CreateOrderRecordRequest,
    ) -> Result<OrderModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, OrderModel>(
            r#"
            INSERT INTO orders (customer_name, total_amount, status, items, created_at, updated_at)
            VALUES ($1, $2, $3, $4, current_timestamp, current_timestamp)
            RETURNING id, customer_name, total_amount, status, items, created_at, updated_at
            "#,
        )
        .bind(&req.customer_name)
        .bind(req.total_amount)
        .bind(req.status.as_str())
        .bind(Json(&req.items))
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!(
                "❌ Failed to create order for customer {}: {:?}",
                req.customer_name, err
            );
            RepositoryError::from(err)
        })?;

        info!("✅ Created order ID {}", result.id);
        Ok(result)
    }

    async fn update_order(
        &self,
        req: &UpdateOrderRecordRequest,
    ) -> Result<OrderModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        // single statement, so the merge is atomic for the row
        let result = sqlx::query_as::<_, OrderModel>(
            r#"
            UPDATE orders
            SET customer_name = COALESCE($2, customer_name),
                total_amount  = COALESCE($3, total_amount),
                status        = COALESCE($4, status),
                items         = COALESCE($5, items),
                updated_at    = current_timestamp
            WHERE id = $1
            RETURNING id, customer_name, total_amount, status, items, created_at, updated_at
            "#,
        )
        .bind(req.id)
        .bind(req.customer_name.as_deref())
        .bind(req.total_amount)
        .bind(req.status.map(|status| status.as_str()))
        .bind(req.items.as_ref().map(Json))
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to update order ID {}: {:?}", req.id, err);
            RepositoryError::from(err)
        })?
        .ok_or(RepositoryError::NotFound)?;

        info!("🔄 Updated order ID {}", result.id);
        Ok(result)
    }

    async fn delete_order(&self, id: i64) -> Result<(), RepositoryError> {
        info!("❌ Deleting order: {}", id);

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query(
            r#"
            DELETE FROM orders
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to delete order {}: {:?}", id, e);
            RepositoryError::from(e)
        })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
