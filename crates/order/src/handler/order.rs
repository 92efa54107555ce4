use crate::{
    abstract_trait::order::service::{DynOrderCommandService, DynOrderQueryService},
    domain::{
        requests::order::{CreateOrderRequest, FindAllOrders, UpdateOrderRequest},
        response::order::OrderResponse,
    },
    middleware::ValidatedJson,
    state::AppState,
};
use axum::{
    Json,
    extract::{
        Extension, Path, Query,
        rejection::{PathRejection, QueryRejection},
    },
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use shared::errors::{ErrorResponse, HttpError};
use std::sync::Arc;
use tracing::warn;
use utoipa_axum::router::OpenApiRouter;

fn parse_id(path: Result<Path<String>, PathRejection>) -> Result<i64, HttpError> {
    let Path(raw) = path.map_err(|rejection| {
        warn!("⚠️ Rejected order path: {}", rejection.body_text());
        HttpError::BadRequest(rejection.body_text())
    })?;

    raw.parse::<i64>().map_err(|_| {
        warn!(id = %raw, "⚠️ Rejected non-numeric order id");
        HttpError::BadRequest("\"id\" must be a number".into())
    })
}

#[utoipa::path(
    get,
    path = "/orders",
    tag = "Order",
    params(FindAllOrders),
    responses(
        (status = 200, description = "Orders matching the filters", body = Vec<OrderResponse>),
        (status = 400, description = "Malformed query string", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_orders(
    Extension(service): Extension<DynOrderQueryService>,
    query: Result<Query<FindAllOrders>, QueryRejection>,
) -> Result<impl IntoResponse, HttpError> {
    let Query(params) = query.map_err(|rejection| {
        warn!("⚠️ Rejected order query: {}", rejection.body_text());
        HttpError::BadRequest(rejection.body_text())
    })?;
    let response = service.find_all(&params).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/orders/{id}",
    tag = "Order",
    params(("id" = i64, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order details", body = OrderResponse),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 404, description = "Order not found", body = ErrorResponse)
    )
)]
pub async fn get_order(
    Extension(service): Extension<DynOrderQueryService>,
    path: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, HttpError> {
    let id = parse_id(path)?;
    let response = service.find_by_id(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/orders",
    tag = "Order",
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Order created", body = OrderResponse),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn create_order(
    Extension(service): Extension<DynOrderCommandService>,
    ValidatedJson(body): ValidatedJson<CreateOrderRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create_order(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    patch,
    path = "/orders/{id}",
    tag = "Order",
    params(("id" = i64, Path, description = "Order ID")),
    request_body = UpdateOrderRequest,
    responses(
        (status = 200, description = "Order updated", body = OrderResponse),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 404, description = "Order not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn update_order(
    Extension(service): Extension<DynOrderCommandService>,
    path: Result<Path<String>, PathRejection>,
    ValidatedJson(body): ValidatedJson<UpdateOrderRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let id = parse_id(path)?;
    let response = service.update_order(id, &body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/orders/{id}",
    tag = "Order",
    params(("id" = i64, Path, description = "Order ID")),
    responses(
        (status = 204, description = "Order deleted"),
        (status = 404, description = "Order not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn delete_order(
    Extension(service): Extension<DynOrderCommandService>,
    path: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, HttpError> {
    let id = parse_id(path)?;
    service.delete_order(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn order_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/orders", get(get_orders).post(create_order))
        .route(
            "/orders/{id}",
            get(get_order).patch(update_order).delete(delete_order),
        )
        .layer(Extension(app_state.di_container.order_query.clone()))
        .layer(Extension(app_state.di_container.order_command.clone()))
}
