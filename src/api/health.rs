use axum::extract::State;
use axum::Json;
use tracing::error;

use crate::api::AppState;
use crate::error::AppError;

pub async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({"message": "Application started"}))
}

/// Round-trips `SELECT 1` through the pool. Failure details are logged, not returned.
pub async fn healthchecker(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, AppError> {
    match state.repo.ping().await {
        Ok(Some(_)) => Ok(Json(
            serde_json::json!({"message": "Welcome to the contact book API!"}),
        )),
        Ok(None) => {
            error!("Health check query returned no rows");
            Err(AppError::StorageUnavailable(
                "Database is not configured correctly".into(),
            ))
        }
        Err(e) => {
            error!(error = %e, "Health check query failed");
            Err(AppError::StorageUnavailable(
                "Error connecting to the database".into(),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_root_reports_started() {
        let Json(body) = root().await;
        assert_eq!(body["message"], "Application started");
    }
}
