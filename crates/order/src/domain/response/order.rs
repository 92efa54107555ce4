use crate::model::{Order as OrderModel, OrderItem};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Janet")]
    pub customer_name: String,
    #[schema(example = 50.0)]
    pub total_amount: f64,
    #[schema(example = "pending")]
    pub status: String,
    #[schema(value_type = Vec<Object>)]
    pub items: Vec<OrderItem>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// model to response
impl From<OrderModel> for OrderResponse {
    fn from(value: OrderModel) -> Self {
        OrderResponse {
            id: value.id,
            customer_name: value.customer_name,
            total_amount: value.total_amount,
            status: value.status,
            items: value.items.0,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}
