pub mod birthdays;
pub mod contacts;
pub mod extract;
pub mod health;

use crate::db::Repository;
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
}

impl AppState {
    pub fn new(repo: Arc<Repository>) -> Self {
        Self { repo }
    }
}

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(health::root))
        .route("/api/healthchecker", get(health::healthchecker))
        .route(
            "/api/contacts",
            get(contacts::list_contacts).post(contacts::create_contact),
        )
        .route(
            "/api/contacts/:contact_id",
            get(contacts::get_contact_by_id)
                .patch(contacts::update_contact)
                .delete(contacts::delete_contact),
        )
        .route("/api/contacts/name/:name", get(contacts::get_contact_by_name))
        .route(
            "/api/contacts/sur_name/:sur_name",
            get(contacts::get_contact_by_sur_name),
        )
        .route(
            "/api/contacts/email/:email",
            get(contacts::get_contact_by_email),
        )
        .route("/api/week_birthday/a", get(birthdays::get_week_birthdays))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
