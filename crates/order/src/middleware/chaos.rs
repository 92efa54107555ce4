use crate::chaos::FaultInjector;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use shared::errors::HttpError;
use std::sync::Arc;
use tracing::warn;

/// Short-circuits a share of requests with a canned failure before routing.
pub async fn chaos_middleware(
    State(injector): State<Arc<FaultInjector>>,
    req: Request,
    next: Next,
) -> Response {
    if let Some(fault) = injector.roll() {
        warn!(
            simulated = true,
            status = fault.status.as_u16(),
            path = %req.uri().path(),
            method = %req.method(),
            "💥 Simulated failure: {}",
            fault.message
        );

        return HttpError::Simulated {
            status: fault.status,
            message: fault.message.clone(),
        }
        .into_response();
    }

    next.run(req).await
}
