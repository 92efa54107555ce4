use crate::errors::{error::ErrorResponse, repository::RepositoryError, service::ServiceError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

pub const INTERNAL_SERVER_ERROR_MESSAGE: &str = "Internal Server Error";

#[derive(Debug)]
pub enum HttpError {
    BadRequest(String),
    NotFound(String),
    MethodNotAllowed(String),
    Internal(String),
    /// A canned failure produced by fault injection, carrying its own status.
    Simulated { status: StatusCode, message: String },
}

impl HttpError {
    pub fn status(&self) -> StatusCode {
        match self {
            HttpError::BadRequest(_) => StatusCode::BAD_REQUEST,
            HttpError::NotFound(_) => StatusCode::NOT_FOUND,
            HttpError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            HttpError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            HttpError::Simulated { status, .. } => *status,
        }
    }
}

impl From<ServiceError> for HttpError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Validation(msg) => HttpError::BadRequest(msg),

            ServiceError::Repo(repo_err) => match repo_err {
                RepositoryError::NotFound => HttpError::NotFound("Order not found".into()),
                // store detail stays in the logs
                RepositoryError::Sqlx(_) | RepositoryError::Custom(_) => {
                    HttpError::Internal(INTERNAL_SERVER_ERROR_MESSAGE.into())
                }
            },
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status();
        let msg = match self {
            HttpError::BadRequest(msg)
            | HttpError::NotFound(msg)
            | HttpError::MethodNotAllowed(msg)
            | HttpError::Internal(msg) => msg,
            HttpError::Simulated { message, .. } => message,
        };

        (status, Json(ErrorResponse::new(msg))).into_response()
    }
}
