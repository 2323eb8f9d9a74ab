//! Handlers for `/api/contacts` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`    | `/api/contacts` | All contacts |
//! | `POST`   | `/api/contacts` | 201, 409 if the phone is taken |
//! | `GET`    | `/api/contacts/:contact_id` | 404 if not found |
//! | `PATCH`  | `/api/contacts/:contact_id` | 404 if not found, 409 if the phone belongs to another contact |
//! | `DELETE` | `/api/contacts/:contact_id` | 204, 404 if not found |
//! | `GET`    | `/api/contacts/name/:name` | Exact match |
//! | `GET`    | `/api/contacts/sur_name/:sur_name` | Exact match |
//! | `GET`    | `/api/contacts/email/:email` | Exact match |

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use tracing::{info, warn};

use crate::api::extract::{JsonBody, PathParam};
use crate::api::AppState;
use crate::domain::validation::{validate_email, validate_id, validate_name};
use crate::domain::{Contact, ContactFields};
use crate::error::{is_unique_violation, AppError};

pub async fn list_contacts(State(state): State<AppState>) -> Result<Json<Vec<Contact>>, AppError> {
    let contacts = state.repo.list_contacts().await?;
    Ok(Json(contacts))
}

pub async fn get_contact_by_id(
    PathParam(contact_id): PathParam<i64>,
    State(state): State<AppState>,
) -> Result<Json<Contact>, AppError> {
    let contact = find_contact(&state, contact_id).await?;
    Ok(Json(contact))
}

pub async fn get_contact_by_name(
    PathParam(name): PathParam<String>,
    State(state): State<AppState>,
) -> Result<Json<Contact>, AppError> {
    validate_name("name", &name)?;
    let contact = state
        .repo
        .get_by_name(&name)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(contact))
}

pub async fn get_contact_by_sur_name(
    PathParam(sur_name): PathParam<String>,
    State(state): State<AppState>,
) -> Result<Json<Contact>, AppError> {
    validate_name("sur_name", &sur_name)?;
    let contact = state
        .repo
        .get_by_sur_name(&sur_name)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(contact))
}

pub async fn get_contact_by_email(
    PathParam(email): PathParam<String>,
    State(state): State<AppState>,
) -> Result<Json<Contact>, AppError> {
    validate_email("email", &email)?;
    let contact = state
        .repo
        .get_by_email(&email)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(contact))
}

pub async fn create_contact(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<ContactFields>,
) -> Result<(StatusCode, Json<Contact>), AppError> {
    body.validate()?;

    if state.repo.get_by_phone(&body.phone).await?.is_some() {
        warn!(phone = %body.phone, "Rejecting contact with a phone already in use");
        return Err(phone_taken(&body.phone));
    }

    // The pre-check can race with a concurrent insert; the UNIQUE constraint settles it.
    let contact = state.repo.create(&body).await.map_err(|e| {
        if is_unique_violation(&e) {
            warn!(phone = %body.phone, "Concurrent insert took the phone first");
            phone_taken(&body.phone)
        } else {
            AppError::from(e)
        }
    })?;

    info!(contact_id = contact.id, "Created contact");
    Ok((StatusCode::CREATED, Json(contact)))
}

pub async fn update_contact(
    PathParam(contact_id): PathParam<i64>,
    State(state): State<AppState>,
    JsonBody(body): JsonBody<ContactFields>,
) -> Result<Json<Contact>, AppError> {
    body.validate()?;
    let existing = find_contact(&state, contact_id).await?;

    if let Some(holder) = state.repo.get_by_phone(&body.phone).await? {
        if holder.id != existing.id {
            warn!(
                contact_id = existing.id,
                holder_id = holder.id,
                phone = %body.phone,
                "Rejecting update to a phone owned by another contact"
            );
            return Err(phone_owned_by(holder.id, &body.phone));
        }
    }

    let contact = match state.repo.update(&existing, &body).await {
        Ok(contact) => contact,
        Err(sqlx::Error::RowNotFound) => return Err(AppError::NotFound),
        Err(e) if is_unique_violation(&e) => {
            let holder_id = state
                .repo
                .get_by_phone(&body.phone)
                .await?
                .map(|c| c.id);
            return Err(match holder_id {
                Some(id) => phone_owned_by(id, &body.phone),
                None => phone_taken(&body.phone),
            });
        }
        Err(e) => return Err(e.into()),
    };

    info!(contact_id = contact.id, "Updated contact");
    Ok(Json(contact))
}

pub async fn delete_contact(
    PathParam(contact_id): PathParam<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    let existing = find_contact(&state, contact_id).await?;
    state.repo.delete(&existing).await?;

    info!(contact_id = existing.id, "Deleted contact");
    Ok(StatusCode::NO_CONTENT)
}

async fn find_contact(state: &AppState, contact_id: i64) -> Result<Contact, AppError> {
    validate_id("contact_id", contact_id)?;
    state
        .repo
        .get_by_id(contact_id)
        .await?
        .ok_or(AppError::NotFound)
}

fn phone_taken(phone: &str) -> AppError {
    AppError::Conflict(format!("Phone {} already exist!", phone))
}

fn phone_owned_by(contact_id: i64, phone: &str) -> AppError {
    AppError::Conflict(format!(
        "Another contact id={} already had phone {}!",
        contact_id, phone
    ))
}
