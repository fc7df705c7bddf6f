use axum::{Json, extract::rejection::JsonRejection, http::StatusCode, response::IntoResponse};
use engine::{EngineError, PageRequest};

use api_types::page::PageQuery;
use serde::Serialize;
pub use server::{ServerState, router, run, run_with_listener, spawn_with_listener};

mod convert;
mod customers;
mod debts;
mod server;
mod validation;

pub enum ServerError {
    Engine(EngineError),
    Validation(Vec<String>),
    Malformed,
    Generic(String),
}

#[derive(Serialize)]
struct Error {
    error: String,
}

fn status_for_engine_error(err: &EngineError) -> StatusCode {
    match err {
        // The observed contract surfaces missing records as a client error,
        // not 404.
        EngineError::KeyNotFound(_) | EngineError::InvalidSort(_) => StatusCode::BAD_REQUEST,
        EngineError::ExistingKey(_) => StatusCode::CONFLICT,
        EngineError::PasswordHash(_) | EngineError::Database(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

fn message_for_engine_error(err: EngineError) -> String {
    match err {
        EngineError::Database(db_err) => {
            tracing::error!("database error: {db_err}");
            "internal server error".to_string()
        }
        EngineError::PasswordHash(msg) => {
            tracing::error!("password hashing failed: {msg}");
            "internal server error".to_string()
        }
        other => other.to_string(),
    }
}

/// Aggregate every violated field's message into one response body.
fn message_for_violations(violations: &[String]) -> String {
    let mut message = String::from("Error occurred");
    for violation in violations {
        message.push_str(". ");
        message.push_str(violation);
    }
    message
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            ServerError::Engine(err) => {
                (status_for_engine_error(&err), message_for_engine_error(err))
            }
            ServerError::Validation(violations) => {
                (StatusCode::BAD_REQUEST, message_for_violations(&violations))
            }
            ServerError::Malformed => (
                StatusCode::BAD_REQUEST,
                "Error occurred. Cannot deserialize HTTP message".to_string(),
            ),
            ServerError::Generic(err) => (StatusCode::BAD_REQUEST, err),
        };

        (status, Json(Error { error })).into_response()
    }
}

impl From<EngineError> for ServerError {
    fn from(value: EngineError) -> Self {
        Self::Engine(value)
    }
}

impl From<JsonRejection> for ServerError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::error!("cannot deserialize request body: {rejection}");
        Self::Malformed
    }
}

/// Translate the raw pagination query into a store page request.
///
/// Directions other than `desc` are read as ascending.
fn page_request(query: &PageQuery) -> PageRequest {
    let sort = query.sort.as_deref().map(|sort| {
        let (field, direction) = sort.split_once(',').unwrap_or((sort, "asc"));
        engine::Sort {
            field: field.trim().to_string(),
            descending: direction.trim().eq_ignore_ascii_case("desc"),
        }
    });

    PageRequest {
        page: query.page.unwrap_or(0),
        size: query.size.unwrap_or(20),
        sort,
    }
}
