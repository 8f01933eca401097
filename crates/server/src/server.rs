// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! HTTP routes for the fine collection.
//!
//! | Request                 | Success          | Failure             |
//! |-------------------------|------------------|---------------------|
//! | `GET    /fines`         | 200 `[Fine]`     |                     |
//! | `POST   /fines`         | 201 `Fine`       | 409 duplicate id    |
//! | `PATCH  /fines/{id}`    | 200 `Fine`       | 404 unknown id      |
//! | `DELETE /fines/{id}`    | 204              | 404 unknown id      |
//! | `GET    /health`        | 200              |                     |
//!
//! With an API key configured, `/fines` routes answer 401 without a
//! matching bearer token.

use std::future::Future;
use std::net::SocketAddr;

use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, patch};
use axum::{Json, Router};
use serde_json::json;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use finetrack_core::{Fine, FinePatch};

use crate::state::{ServerState, StateError};

/// Builds the application router over `state`.
pub fn router(state: ServerState) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/health", get(health))
        .route("/fines", get(list_fines).post(create_fine))
        .route("/fines/:id", patch(update_fine).delete(delete_fine))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Binds `addr` and serves until ctrl-c.
pub async fn run(addr: SocketAddr, state: ServerState) -> std::io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!("Listening on {}", listener.local_addr()?);

    serve(listener, state, shutdown_signal()).await
}

/// Serves on an already bound listener until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, state: ServerState, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for ctrl-c: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}

async fn health() -> Response {
    Json(json!({ "ok": true })).into_response()
}

async fn list_fines(State(state): State<ServerState>, headers: HeaderMap) -> Response {
    if let Err(response) = authorize(&state, &headers) {
        return response;
    }
    Json(state.list().await).into_response()
}

async fn create_fine(
    State(state): State<ServerState>,
    headers: HeaderMap,
    Json(fine): Json<Fine>,
) -> Response {
    if let Err(response) = authorize(&state, &headers) {
        return response;
    }
    match state.create(fine).await {
        Ok(fine) => (StatusCode::CREATED, Json(fine)).into_response(),
        Err(e) => error_response(e),
    }
}

async fn update_fine(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(patch): Json<FinePatch>,
) -> Response {
    if let Err(response) = authorize(&state, &headers) {
        return response;
    }
    match state.update(&id, &patch).await {
        Ok(fine) => Json(fine).into_response(),
        Err(e) => error_response(e),
    }
}

async fn delete_fine(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response {
    if let Err(response) = authorize(&state, &headers) {
        return response;
    }
    match state.delete(&id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => error_response(e),
    }
}

fn authorize(state: &ServerState, headers: &HeaderMap) -> Result<(), Response> {
    let value = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());
    if state.authorize(value) {
        Ok(())
    } else {
        Err((
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "missing or invalid bearer token" })),
        )
            .into_response())
    }
}

fn error_response(err: StateError) -> Response {
    let status = match &err {
        StateError::NotFound(_) => StatusCode::NOT_FOUND,
        StateError::AlreadyExists(_) => StatusCode::CONFLICT,
        StateError::Io(_) | StateError::Json(_) => {
            warn!("request failed: {}", err);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    (status, Json(json!({ "error": err.to_string() }))).into_response()
}
