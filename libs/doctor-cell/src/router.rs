use std::sync::Arc;

use axum::{routing::get, Router};

use crate::handlers;
use crate::services::DoctorCatalog;

pub fn doctor_routes(catalog: Arc<DoctorCatalog>) -> Router {
    Router::new()
        .route("/", get(handlers::search_doctors))
        .route("/specializations", get(handlers::list_specializations))
        .route("/{doctor_id}", get(handlers::get_doctor_profile))
        .route("/{doctor_id}/slots", get(handlers::get_doctor_slots))
        .with_state(catalog)
}
