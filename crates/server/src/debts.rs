//! Debt API endpoints.

use api_types::debt::{DebtData, DebtForm};
use api_types::page::PageQuery;
use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::{StatusCode, header},
};
use engine::NewDebt;

use crate::{ServerError, convert, page_request, server::ServerState, validation};

pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Vec<DebtData>>, ServerError> {
    tracing::info!("GET request: /debts");
    let debts = state.engine.debts(&page_request(&query)).await?;

    Ok(Json(debts.iter().map(convert::debt_data).collect()))
}

pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> Result<Json<DebtData>, ServerError> {
    tracing::info!("GET request: /debts/{id}");
    let debt = state.engine.debt(id).await?;

    Ok(Json(convert::debt_data(&debt)))
}

pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<DebtForm>, JsonRejection>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<DebtData>), ServerError> {
    tracing::info!("POST request: /debts");
    let Json(form) = payload?;
    validation::debt_form(&form)?;

    let debt = state.engine.create_debt(&new_debt(form)).await?;
    let location = format!("/debts/{}", debt.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(convert::debt_data(&debt)),
    ))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    payload: Result<Json<DebtForm>, JsonRejection>,
) -> Result<Json<DebtData>, ServerError> {
    tracing::info!("PUT request: /debts/{id}");
    let Json(form) = payload?;
    validation::debt_form(&form)?;

    let debt = state.engine.update_debt(id, &new_debt(form)).await?;

    Ok(Json(convert::debt_data(&debt)))
}

pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ServerError> {
    tracing::info!("DELETE request: /debts/{id}");
    state.engine.delete_debt(id).await?;

    Ok(StatusCode::OK)
}

fn new_debt(form: DebtForm) -> NewDebt {
    NewDebt {
        amount: form.amount,
        currency_code: form.currency,
        due_date: form.due_date,
        customer_id: form.customer_id,
    }
}
