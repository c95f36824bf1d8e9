//! Extractors reporting their failures with the API error body.

use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Query},
};
use engine::EngineError;
use serde::de::DeserializeOwned;
use serde_json::Value;
use uuid::Uuid;

use crate::ServerError;

#[derive(FromRequest)]
#[from_request(via(Json), rejection(ServerError))]
pub(crate) struct ApiJson<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(Query), rejection(ServerError))]
pub(crate) struct ApiQuery<T>(pub T);

/// Reads one field of an untyped body. A missing or ill-typed field reads as
/// `None`.
pub(crate) fn field<T: DeserializeOwned>(body: &Value, name: &str) -> Option<T> {
    body.get(name)
        .and_then(|value| serde_json::from_value(value.clone()).ok())
}

/// Decodes an untyped body into its request struct.
pub(crate) fn decode<T: DeserializeOwned>(body: Value) -> Result<T, ServerError> {
    Ok(serde_json::from_value(body)?)
}

/// A path id that is not a UUID cannot name any user.
pub(crate) fn user_id(raw: &str) -> Result<Uuid, ServerError> {
    Uuid::parse_str(raw).map_err(|_| EngineError::UserNotFound.into())
}

pub(crate) fn transaction_id(raw: &str) -> Result<Uuid, ServerError> {
    Uuid::parse_str(raw).map_err(|_| EngineError::TransactionNotFound.into())
}
