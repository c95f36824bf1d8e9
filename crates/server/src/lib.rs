use api_types::ErrorResponse;
use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::IntoResponse,
};
use engine::EngineError;

pub use server::{ServerState, router, run_with_listener};

mod extract;
mod server;
mod transactions;
mod users;
mod views;

pub enum ServerError {
    Engine(EngineError),
    /// The request could not be decoded (malformed JSON body or query, or a
    /// field of the wrong type).
    BadRequest(String),
    Internal(String),
}

fn status_for_engine_error(err: &EngineError) -> StatusCode {
    match err {
        EngineError::MissingField(_) | EngineError::InvalidKind(_) | EngineError::CpfTaken => {
            StatusCode::BAD_REQUEST
        }
        EngineError::UserNotFound | EngineError::TransactionNotFound => StatusCode::NOT_FOUND,
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let (status, body) = match self {
            ServerError::Engine(err) => {
                if err.is_validation() {
                    tracing::warn!("rejected request: {err}");
                }
                (status_for_engine_error(&err), ErrorResponse::new(err.to_string()))
            }
            ServerError::BadRequest(err) => {
                tracing::warn!("malformed request: {err}");
                (StatusCode::BAD_REQUEST, ErrorResponse::new(err))
            }
            ServerError::Internal(err) => {
                tracing::error!("internal server error: {err}");
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse::internal(err))
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<EngineError> for ServerError {
    fn from(value: EngineError) -> Self {
        Self::Engine(value)
    }
}

impl From<JsonRejection> for ServerError {
    fn from(value: JsonRejection) -> Self {
        Self::BadRequest(value.body_text())
    }
}

impl From<serde_json::Error> for ServerError {
    fn from(value: serde_json::Error) -> Self {
        Self::BadRequest(format!(
            "Failed to deserialize the JSON body into the target type: {value}"
        ))
    }
}

impl From<QueryRejection> for ServerError {
    fn from(value: QueryRejection) -> Self {
        Self::BadRequest(value.body_text())
    }
}
