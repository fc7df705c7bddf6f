//! Customer API endpoints.

use api_types::customer::{CustomerData, CustomerForm};
use api_types::page::PageQuery;
use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::{StatusCode, header},
};
use engine::NewCustomer;

use crate::{ServerError, convert, page_request, server::ServerState, validation};

pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Vec<CustomerData>>, ServerError> {
    tracing::info!("GET request: /customers");
    let customers = state.engine.customers(&page_request(&query)).await?;

    Ok(Json(customers.iter().map(convert::customer_data).collect()))
}

pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> Result<Json<CustomerData>, ServerError> {
    tracing::info!("GET request: /customers/{id}");
    let customer = state.engine.customer(id).await?;

    Ok(Json(convert::customer_data(&customer)))
}

pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<CustomerForm>, JsonRejection>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<CustomerData>), ServerError> {
    tracing::info!("POST request: /customers");
    let Json(form) = payload?;
    validation::customer_form(&form)?;

    let customer = state.engine.create_customer(&new_customer(form)).await?;
    let location = format!("/customers/{}", customer.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(convert::customer_data(&customer)),
    ))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    payload: Result<Json<CustomerForm>, JsonRejection>,
) -> Result<Json<CustomerData>, ServerError> {
    tracing::info!("PUT request: /customers/{id}");
    let Json(form) = payload?;
    validation::customer_form(&form)?;

    let customer = state.engine.update_customer(id, &new_customer(form)).await?;

    Ok(Json(convert::customer_data(&customer)))
}

pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ServerError> {
    tracing::info!("DELETE request: /customers/{id}");
    state.engine.delete_customer(id).await?;

    Ok(StatusCode::OK)
}

fn new_customer(form: CustomerForm) -> NewCustomer {
    NewCustomer {
        name: form.name,
        surname: form.surname,
        country: form.country,
        email: form.email,
        password: form.password,
    }
}
