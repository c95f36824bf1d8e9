//! Transactions API endpoints, nested under a user.

use api_types::{
    Envelope,
    transaction::{
        TransactionListResponse, TransactionNew, TransactionQuery, TransactionUpdate,
        TransactionView,
    },
    user::UserView,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use engine::{NewTransactionCmd, TransactionFilter, UpdateTransactionCmd};

use crate::{
    ServerError,
    extract::{ApiJson, ApiQuery, transaction_id, user_id},
    server::ServerState,
    views,
};

pub async fn create(
    State(state): State<ServerState>,
    Path(user): Path<String>,
    ApiJson(payload): ApiJson<TransactionNew>,
) -> Result<(StatusCode, Json<Envelope<Vec<UserView>>>), ServerError> {
    let user_id = user_id(&user)?;
    let cmd = NewTransactionCmd::try_new(payload.title, payload.value, payload.kind)?;
    let mut engine = state.engine.lock().await;

    let id = engine.new_transaction(user_id, cmd)?;
    tracing::debug!("registered transaction {id} for user {user_id}");

    Ok((
        StatusCode::CREATED,
        Json(Envelope::ok(
            "Transaction registered successfully",
            views::users(engine.users()),
        )),
    ))
}

pub async fn get(
    State(state): State<ServerState>,
    Path((user, id)): Path<(String, String)>,
) -> Result<Json<TransactionView>, ServerError> {
    let user_id = user_id(&user)?;
    let id = transaction_id(&id)?;
    let engine = state.engine.lock().await;

    Ok(Json(views::transaction(engine.transaction(user_id, id)?)))
}

/// Lists the ledger of a user. Without filters the balance is included.
pub async fn list(
    State(state): State<ServerState>,
    Path(user): Path<String>,
    ApiQuery(query): ApiQuery<TransactionQuery>,
) -> Result<Json<TransactionListResponse>, ServerError> {
    let user_id = user_id(&user)?;
    let filter = TransactionFilter::new(query.title, query.kind);
    let engine = state.engine.lock().await;

    let transactions = views::transactions(engine.transactions(user_id, filter.as_ref())?);
    let balance = match filter {
        Some(_) => None,
        None => Some(views::balance(engine.balance(user_id)?)),
    };

    Ok(Json(TransactionListResponse {
        transactions,
        balance,
    }))
}

pub async fn update(
    State(state): State<ServerState>,
    Path((user, id)): Path<(String, String)>,
    payload: Result<ApiJson<TransactionUpdate>, ServerError>,
) -> Result<(StatusCode, Json<Envelope<Vec<TransactionView>>>), ServerError> {
    let user_id = user_id(&user)?;
    let id = transaction_id(&id)?;
    let mut engine = state.engine.lock().await;

    engine.transaction(user_id, id)?;
    let ApiJson(payload) = payload?;
    let cmd = UpdateTransactionCmd::try_new(payload.title, payload.value, payload.kind)?;
    engine.update_transaction(user_id, id, cmd)?;
    tracing::debug!("updated transaction {id} for user {user_id}");

    Ok((
        StatusCode::CREATED,
        Json(Envelope::ok(
            "Transaction updated successfully",
            views::transactions(engine.transactions(user_id, None)?),
        )),
    ))
}

pub async fn delete(
    State(state): State<ServerState>,
    Path((user, id)): Path<(String, String)>,
) -> Result<Json<Envelope<Vec<TransactionView>>>, ServerError> {
    let user_id = user_id(&user)?;
    let mut engine = state.engine.lock().await;

    engine.ensure_user_exists(user_id)?;
    let id = transaction_id(&id)?;
    engine.delete_transaction(user_id, id)?;
    tracing::debug!("deleted transaction {id} for user {user_id}");

    Ok(Json(Envelope::ok(
        "Transaction deleted successfully",
        views::transactions(engine.transactions(user_id, None)?),
    )))
}
