use crate::{
    domain::requests::order::{CreateOrderRequest, UpdateOrderRequest},
    validation::{SchemaMode, ValidationError, validate},
};
use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::errors::HttpError;
use tracing::warn;
use validator::{Validate, ValidationErrors};

/// Payloads that are checked against the order schema before deserializing.
pub trait SchemaPayload: DeserializeOwned + Validate {
    const MODE: SchemaMode;
}

impl SchemaPayload for CreateOrderRequest {
    const MODE: SchemaMode = SchemaMode::Create;
}

impl SchemaPayload for UpdateOrderRequest {
    const MODE: SchemaMode = SchemaMode::Update;
}

/// JSON body extractor that runs the ordered schema checks and rejects with
/// a 400 carrying the first violation.
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: SchemaPayload + Send,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let path = req.uri().path().to_owned();

        let Json(payload) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| {
                warn!(path = %path, "⚠️ Rejected malformed JSON body: {}", rejection.body_text());
                HttpError::BadRequest(format!("Invalid JSON: {}", rejection.body_text()))
            })?;

        validate(&payload, T::MODE).map_err(|ValidationError(message)| {
            warn!(path = %path, "⚠️ Validation failed: {}", message);
            HttpError::BadRequest(message)
        })?;

        let value: T = serde_json::from_value(payload).map_err(|e| {
            warn!(path = %path, "⚠️ Payload did not match the order shape: {}", e);
            HttpError::BadRequest(e.to_string())
        })?;

        value.validate().map_err(|errors| {
            let message = first_validation_message(&errors);
            warn!(path = %path, "⚠️ Validation failed: {}", message);
            HttpError::BadRequest(message)
        })?;

        Ok(Self(value))
    }
}

fn first_validation_message(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .find_map(|(field, field_errors)| {
            field_errors.first().map(|error| {
                error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("\"{field}\" is invalid ({})", error.code))
            })
        })
        .unwrap_or_else(|| "Validation failed".to_string())
}
