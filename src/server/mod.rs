// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pipegrid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pipegrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! HTTP surface.
//!
//! | Route | Method | Effect |
//! |---|---|---|
//! | `/` | GET | HTML page with the unshuffled board embedded |
//! | `/getGrid` | GET | generates a new puzzle, returns the puzzle view |
//! | `/getSolution` | GET | solution view of the last generated puzzle |
//! | `/getTime` | POST | records `{"time": ...}` on the leaderboard |
//! | `/getLeaderboard` | GET | top leaderboard entries |
//!
//! The session and the leaderboard each sit behind their own lock, held for the whole
//! read-modify-write of a request.

use std::fmt::Write as _;
use std::future::Future;
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::{json, Value};
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::Mutex;
use tracing::{error, info, warn};

use crate::generate::create_grid;
use crate::render::{render_solution, Grid};
use crate::session::{PuzzleSession, SessionError};
use crate::store::{Leaderboard, LineStore, StoreError, TimeValue};

const INDEX_TEMPLATE: &str = include_str!("index.html");

#[derive(Debug)]
struct SessionSlot {
    session: PuzzleSession,
    rng: StdRng,
}

/// Shared state injected into every handler.
pub struct AppState<S> {
    session: Arc<Mutex<SessionSlot>>,
    leaderboard: Arc<Mutex<Leaderboard<S>>>,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            session: self.session.clone(),
            leaderboard: self.leaderboard.clone(),
        }
    }
}

impl<S: LineStore> AppState<S> {
    /// State with an OS-seeded generator and no puzzle yet.
    pub fn new(leaderboard: Leaderboard<S>) -> Self {
        Self::with_rng(leaderboard, StdRng::from_os_rng())
    }

    /// State with a caller-supplied generator, for reproducible puzzles.
    pub fn with_rng(leaderboard: Leaderboard<S>, rng: StdRng) -> Self {
        Self {
            session: Arc::new(Mutex::new(SessionSlot {
                session: PuzzleSession::new(),
                rng,
            })),
            leaderboard: Arc::new(Mutex::new(leaderboard)),
        }
    }

    pub fn leaderboard(&self) -> &Arc<Mutex<Leaderboard<S>>> {
        &self.leaderboard
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Time is required")]
    MissingTime,
    #[error("Request body is not valid JSON: {source}")]
    InvalidBody { source: serde_json::Error },
    #[error("Cannot encode response: {source}")]
    Encode { source: serde_json::Error },
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingTime | Self::InvalidBody { .. } => StatusCode::BAD_REQUEST,
            Self::Store(StoreError::InvalidEntry { .. }) => StatusCode::BAD_REQUEST,
            Self::Session(SessionError::NotGenerated) => StatusCode::CONFLICT,
            Self::Encode { .. } | Self::Store(StoreError::Io { .. }) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();
        if status.is_server_error() {
            error!(%status, error = %message, "request failed");
        } else {
            warn!(%status, error = %message, "request rejected");
        }
        (status, Json(json!({ "error": message }))).into_response()
    }
}

pub fn router<S>(state: AppState<S>) -> Router
where
    S: LineStore + Send + 'static,
{
    Router::new()
        .route("/", get(index))
        .route("/getGrid", get(get_grid::<S>))
        .route("/getSolution", get(get_solution::<S>))
        .route("/getTime", post(submit_time::<S>))
        .route("/getLeaderboard", get(get_leaderboard::<S>))
        .with_state(state)
}

/// Serves `state` on `listener` until `shutdown` resolves.
pub async fn serve<S, F>(
    listener: TcpListener,
    state: AppState<S>,
    shutdown: F,
) -> std::io::Result<()>
where
    S: LineStore + Send + 'static,
    F: Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "serving puzzle API");
    }
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
}

async fn index() -> Result<Html<String>, ApiError> {
    let grid = render_solution(&create_grid());
    let grid_json =
        serde_json::to_string(&grid).map_err(|source| ApiError::Encode { source })?;

    let page = INDEX_TEMPLATE
        .replace("{{grid_rows}}", &grid_rows_html(&grid))
        .replace("{{grid_json}}", &grid_json);
    Ok(Html(page))
}

fn grid_rows_html(grid: &Grid) -> String {
    let mut html = String::new();
    for row in grid.rows() {
        html.push_str("    <tr>");
        for cell in row {
            let _ = write!(html, "<td data-colour=\"{cell}\"></td>");
        }
        html.push_str("</tr>\n");
    }
    html
}

async fn get_grid<S>(State(state): State<AppState<S>>) -> Json<Grid>
where
    S: LineStore + Send + 'static,
{
    let mut slot = state.session.lock().await;
    let SessionSlot { session, rng } = &mut *slot;
    Json(session.generate(rng).clone())
}

async fn get_solution<S>(State(state): State<AppState<S>>) -> Result<Json<Grid>, ApiError>
where
    S: LineStore + Send + 'static,
{
    let slot = state.session.lock().await;
    Ok(Json(slot.session.current_solution()?.clone()))
}

async fn submit_time<S>(
    State(state): State<AppState<S>>,
    body: Bytes,
) -> Result<StatusCode, ApiError>
where
    S: LineStore + Send + 'static,
{
    let time = parse_time(&body)?;

    let mut leaderboard = state.leaderboard.lock().await;
    leaderboard.submit(&time)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Pulls the `time` field out of a submission body. Missing, `null`, or a non-object body all
/// count as no time.
fn parse_time(body: &[u8]) -> Result<TimeValue, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(ApiError::MissingTime);
    }
    let value: Value =
        serde_json::from_slice(body).map_err(|source| ApiError::InvalidBody { source })?;
    value
        .get("time")
        .and_then(TimeValue::from_json)
        .ok_or(ApiError::MissingTime)
}

async fn get_leaderboard<S>(
    State(state): State<AppState<S>>,
) -> Result<Json<Vec<String>>, ApiError>
where
    S: LineStore + Send + 'static,
{
    let leaderboard = state.leaderboard.lock().await;
    Ok(Json(leaderboard.top()?))
}
