//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing::{debug, warn};

use crate::command::{HELP, parse_command};
use crate::domain::{FuelReport, Postcode};
use crate::finder::PageSource;
use crate::lookup::QueryError;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router<S>(state: AppState<S>) -> Router
where
    S: PageSource + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health))
        .route("/commands", get(commands))
        .route("/message", post(handle_message::<S>))
        .route("/fuel/:postcode", get(fuel_report::<S>))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List the commands the bot answers.
async fn commands() -> Json<CommandsResponse> {
    Json(CommandsResponse {
        commands: HELP.iter().map(|line| line.to_string()).collect(),
    })
}

/// Answer a chat message.
///
/// Messages that aren't fuel commands get a `null` reply so the router
/// can pass them on to other handlers.
async fn handle_message<S>(
    State(state): State<AppState<S>>,
    Json(req): Json<MessageRequest>,
) -> Json<MessageResponse>
where
    S: PageSource + Send + Sync + 'static,
{
    let Some(postcode) = parse_command(&req.text) else {
        debug!(text = %req.text, "not a fuel command");
        return Json(MessageResponse { reply: None });
    };

    let reply = state.lookup.reply(&postcode).await;
    Json(MessageResponse { reply: Some(reply) })
}

/// Structured fuel report for a postcode.
async fn fuel_report<S>(
    State(state): State<AppState<S>>,
    Path(postcode): Path<String>,
) -> Result<Json<FuelReport>, AppError>
where
    S: PageSource + Send + Sync + 'static,
{
    let postcode = Postcode::parse(&postcode).map_err(|e| AppError::BadRequest {
        message: format!("{e}: {postcode}"),
    })?;

    let report = state.lookup.report(&postcode).await?;
    Ok(Json(report))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    BadGateway { message: String },
}

impl From<QueryError> for AppError {
    fn from(e: QueryError) -> Self {
        AppError::BadGateway {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::BadGateway { message } => (StatusCode::BAD_GATEWAY, message),
        };

        warn!(status = status.as_u16(), %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
