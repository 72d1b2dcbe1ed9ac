//! Axum HTTP handlers for the web server
//!
//! Provides the `/contacts` collection and `/contacts/person/{id}` item endpoints, and general metadata endpoints.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use axum_extra::{headers::Host, typed_header::TypedHeaderRejection, TypedHeader};
use serde::Serialize;
use tracing::info;

use crate::domain::person::{parse_person_id, CONTACTS_PATH};
use crate::domain::{PersonId, PersonPayload, PersonResource};
use crate::errors::AppError;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct DiscoveryResponse {
    pub name: &'static str,
    pub version: &'static str,
    pub contacts_endpoint: &'static str,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

pub async fn discovery() -> Json<DiscoveryResponse> {
    Json(DiscoveryResponse {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        contacts_endpoint: CONTACTS_PATH,
    })
}

pub async fn list_contacts(
    State(state): State<AppState>,
    host: Result<TypedHeader<Host>, TypedHeaderRejection>,
) -> Result<Json<Vec<PersonResource>>, AppError> {
    let base_url = resolve_base_url(&state, host.ok());
    let people = state.contact_store.list().await?;

    Ok(Json(
        people
            .into_iter()
            .map(|person| PersonResource::from_person(person, &base_url))
            .collect(),
    ))
}

pub async fn create_contact(
    State(state): State<AppState>,
    host: Result<TypedHeader<Host>, TypedHeaderRejection>,
    body: Bytes,
) -> Result<Response, AppError> {
    let payload = parse_payload(&body)?;
    let base_url = resolve_base_url(&state, host.ok());
    let person = state.contact_store.create(payload.name).await?;
    let resource = PersonResource::from_person(person, &base_url);

    info!(person_id = resource.id, href = %resource.href, "contact created");

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, resource.href.clone())],
        Json(resource),
    )
        .into_response())
}

pub async fn get_person(
    State(state): State<AppState>,
    host: Result<TypedHeader<Host>, TypedHeaderRejection>,
    Path(raw_id): Path<String>,
) -> Result<Json<PersonResource>, AppError> {
    let id = person_id(&raw_id)?;
    let base_url = resolve_base_url(&state, host.ok());
    let person = state.contact_store.get(id).await?;

    Ok(Json(PersonResource::from_person(person, &base_url)))
}

/// The body is checked before the store lookup, so a malformed body is a 400
/// even when the id names nobody.
pub async fn update_person(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    body: Bytes,
) -> Result<StatusCode, AppError> {
    let id = person_id(&raw_id)?;
    let payload = parse_payload(&body)?;
    state.contact_store.rename(id, payload.name).await?;

    info!(person_id = id, "contact updated");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_person(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = person_id(&raw_id)?;
    state.contact_store.remove(id).await?;

    info!(person_id = id, "contact deleted");
    Ok(StatusCode::NO_CONTENT)
}

fn person_id(raw_id: &str) -> Result<PersonId, AppError> {
    parse_person_id(raw_id).ok_or_else(|| AppError::person_not_found(raw_id))
}

fn parse_payload(body: &[u8]) -> Result<PersonPayload, AppError> {
    serde_json::from_slice(body).map_err(|err| {
        AppError::bad_request("invalid_payload", format!("invalid person payload: {err}"))
    })
}

/// Configured base URL wins, then the request's `Host`; with neither, hrefs
/// stay root-relative. A `Host` that fails to decode counts as absent.
fn resolve_base_url(state: &AppState, host: Option<TypedHeader<Host>>) -> String {
    if let Some(base_url) = state.base_url.as_deref() {
        return base_url.to_string();
    }

    match host {
        Some(TypedHeader(host)) => match host.port() {
            Some(port) => format!("http://{}:{port}", host.hostname()),
            None => format!("http://{}", host.hostname()),
        },
        None => String::new(),
    }
}
