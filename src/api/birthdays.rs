use axum::extract::State;
use axum::Json;

use crate::api::AppState;
use crate::domain::Contact;
use crate::error::AppError;

/// `GET /api/week_birthday/a`: contacts whose birthday shares this ISO week
/// and this month. Empty list when nobody matches.
pub async fn get_week_birthdays(
    State(state): State<AppState>,
) -> Result<Json<Vec<Contact>>, AppError> {
    let contacts = state.repo.get_week_birthdays().await?;
    Ok(Json(contacts))
}
