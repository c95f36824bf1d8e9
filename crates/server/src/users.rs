//! Users API endpoints

use api_types::{
    Envelope, ErrorResponse,
    user::{CpfValue, UserNew, UserProfile, UserQuery, UserUpdate, UserView},
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use engine::{NewUserCmd, UpdateUserCmd, UserFilter, UserSearch};
use serde_json::Value;

use crate::{
    ServerError,
    extract::{self, ApiJson, ApiQuery, user_id},
    server::ServerState,
    views,
};

/// Registers a user. The CPF guard runs before the rest of the body is
/// decoded.
pub async fn create(
    State(state): State<ServerState>,
    ApiJson(body): ApiJson<Value>,
) -> Result<(StatusCode, Json<Envelope<Vec<UserView>>>), ServerError> {
    let cpf = views::cpf(extract::field::<CpfValue>(&body, "cpf").as_ref());
    let mut engine = state.engine.lock().await;

    engine.ensure_cpf_available(cpf.as_ref())?;
    let payload: UserNew = extract::decode(body)?;
    let cmd = NewUserCmd::try_new(payload.name, cpf, payload.email, payload.age)?;
    let id = engine.new_user(cmd)?;
    tracing::debug!("registered user {id}");

    Ok((
        StatusCode::CREATED,
        Json(Envelope::ok(
            "User registered successfully",
            views::users(engine.users()),
        )),
    ))
}

pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<UserProfile>, ServerError> {
    let id = user_id(&id)?;
    let engine = state.engine.lock().await;

    Ok(Json(views::profile(engine.user(id)?)))
}

/// Lists every user, or returns the single user matching the first
/// satisfied filter among `name`, `email` and `cpf`.
pub async fn list(
    State(state): State<ServerState>,
    ApiQuery(query): ApiQuery<UserQuery>,
) -> Response {
    let filter = UserFilter::new(query.name, query.email, query.cpf);
    let engine = state.engine.lock().await;

    match engine.search_users(&filter) {
        UserSearch::Empty => Json(Envelope::<()>::info("no user registered")).into_response(),
        UserSearch::All(users) => Json(Envelope::ok(
            "Users retrieved successfully",
            views::users(users),
        ))
        .into_response(),
        UserSearch::NoMatch => {
            (StatusCode::NOT_FOUND, Json(ErrorResponse::new("not found"))).into_response()
        }
        UserSearch::Found(user) => Json(views::profile(user)).into_response(),
    }
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    payload: Result<ApiJson<UserUpdate>, ServerError>,
) -> Result<(StatusCode, Json<Envelope<Vec<UserView>>>), ServerError> {
    let id = user_id(&id)?;
    let mut engine = state.engine.lock().await;

    engine.ensure_user_exists(id)?;
    let ApiJson(payload) = payload?;
    let cmd = UpdateUserCmd::try_new(payload.name, payload.email, payload.age)?;
    engine.update_user(id, cmd)?;
    tracing::debug!("updated user {id}");

    Ok((
        StatusCode::CREATED,
        Json(Envelope::ok(
            "User updated successfully",
            views::users(engine.users()),
        )),
    ))
}

pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<Vec<UserView>>>, ServerError> {
    let id = user_id(&id)?;
    let mut engine = state.engine.lock().await;

    engine.delete_user(id)?;
    tracing::debug!("deleted user {id}");

    Ok(Json(Envelope::ok(
        "User deleted successfully",
        views::users(engine.users()),
    )))
}
