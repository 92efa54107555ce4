use crate::model::{OrderItem, OrderStatus};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Query string of `GET /orders`. Both filters are optional and combine with AND.
#[derive(Debug, Clone, Default, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FindAllOrders {
    /// Exact status match.
    #[param(example = "shipped")]
    pub status: Option<String>,

    /// Substring match on the customer name.
    #[serde(rename = "customerName")]
    #[param(example = "an")]
    pub customer_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    #[validate(length(min = 3))]
    #[schema(example = "Janet", min_length = 3)]
    pub customer_name: String,

    #[validate(range(exclusive_min = 0.0))]
    #[schema(example = 50.0)]
    pub total_amount: f64,

    #[serde(default)]
    pub status: Option<OrderStatus>,

    #[serde(default)]
    #[schema(value_type = Option<Vec<Object>>, example = json!([{ "name": "Hammer", "price": 50 }]))]
    pub items: Option<Vec<OrderItem>>,
}

impl CreateOrderRequest {
    pub fn touched_fields(&self) -> Vec<&'static str> {
        let mut fields = vec!["customerName", "totalAmount"];
        if self.status.is_some() {
            fields.push("status");
        }
        if self.items.is_some() {
            fields.push("items");
        }
        fields
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderRequest {
    #[serde(default)]
    #[validate(length(min = 3))]
    #[schema(example = "Janet")]
    pub customer_name: Option<String>,

    #[serde(default)]
    #[validate(range(exclusive_min = 0.0))]
    pub total_amount: Option<f64>,

    #[serde(default)]
    #[schema(example = "shipped")]
    pub status: Option<OrderStatus>,

    #[serde(default)]
    #[schema(value_type = Option<Vec<Object>>)]
    pub items: Option<Vec<OrderItem>>,
}

impl UpdateOrderRequest {
    pub fn touched_fields(&self) -> Vec<&'static str> {
        [
            ("customerName", self.customer_name.is_some()),
            ("totalAmount", self.total_amount.is_some()),
            ("status", self.status.is_some()),
            ("items", self.items.is_some()),
        ]
        .into_iter()
        .filter_map(|(name, present)| present.then_some(name))
        .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.touched_fields().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateOrderRecordRequest {
    pub customer_name: String,
    pub total_amount: f64,
    pub status: OrderStatus,
    pub items: Vec<OrderItem>,
}

impl From<CreateOrderRequest> for CreateOrderRecordRequest {
    fn from(req: CreateOrderRequest) -> Self {
        Self {
            customer_name: req.customer_name,
            total_amount: req.total_amount,
            status: req.status.unwrap_or_default(),
            items: req.items.unwrap_or_default(),
        }
    }
}

/// Only `Some` fields are written; everything else keeps its stored value.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateOrderRecordRequest {
    pub id: i64,
    pub customer_name: Option<String>,
    pub total_amount: Option<f64>,
    pub status: Option<OrderStatus>,
    pub items: Option<Vec<OrderItem>>,
}

impl UpdateOrderRecordRequest {
    pub fn new(id: i64, req: UpdateOrderRequest) -> Self {
        Self {
            id,
            customer_name: req.customer_name,
            total_amount: req.total_amount,
            status: req.status,
            items: req.items,
        }
    }
}
