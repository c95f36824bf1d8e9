use axum::{
    Router,
    extract::{Path, Request, State},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use tokio::sync::Mutex;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use std::{any::Any, collections::HashMap, sync::Arc};

use crate::{ServerError, extract, transactions, users};
use engine::Engine;

/// Shared handler state.
///
/// The engine sits behind one mutex: a handler holds it for the whole
/// lookup-validate-mutate sequence, so requests never interleave.
#[derive(Clone)]
pub struct ServerState {
    pub engine: Arc<Mutex<Engine>>,
}

impl ServerState {
    pub fn new(engine: Engine) -> Self {
        Self {
            engine: Arc::new(Mutex::new(engine)),
        }
    }
}

/// Rejects the request with 404 unless the `{id}` path segment names a
/// registered user.
async fn require_user(
    State(state): State<ServerState>,
    Path(params): Path<HashMap<String, String>>,
    request: Request,
    next: Next,
) -> Result<Response, ServerError> {
    let raw = params.get("id").map(String::as_str).unwrap_or_default();
    let user_id = extract::user_id(raw)?;
    state.engine.lock().await.ensure_user_exists(user_id)?;

    Ok(next.run(request).await)
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    ServerError::Internal(details).into_response()
}

/// Builds the API mounted under `base_path` (`"/"` or `""` mounts at root).
pub fn router(state: ServerState, base_path: &str) -> Router {
    let guarded = Router::new()
        .route("/{id}/transactions", post(transactions::create))
        .route(
            "/{id}/transactions/{transaction_id}",
            get(transactions::get).put(transactions::update),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), require_user));

    let routes = Router::new()
        .route("/", get(users::list).post(users::create))
        .route(
            "/{id}",
            get(users::get).put(users::update).delete(users::delete),
        )
        .route("/{id}/transactions", get(transactions::list))
        .route(
            "/{id}/transactions/{transaction_id}",
            delete(transactions::delete),
        )
        .merge(guarded);

    let base_path = base_path.trim_matches('/');
    let app = if base_path.is_empty() {
        routes
    } else {
        let base_path = format!("/{base_path}");
        Router::new()
            .route(
                &format!("{base_path}/"),
                get(users::list).post(users::create),
            )
            .nest(&base_path, routes)
    };

    app.layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run_with_listener(
    engine: Engine,
    base_path: &str,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router(ServerState::new(engine), base_path)).await
}
