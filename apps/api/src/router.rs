use std::sync::Arc;

use axum::{routing::get, Router};

use appointment_cell::router::appointment_routes;
use appointment_cell::services::{AppointmentBookingService, AppointmentStore};
use doctor_cell::router::doctor_routes;
use doctor_cell::services::DoctorCatalog;
use shared_config::AppConfig;

pub fn create_router(config: &AppConfig, catalog: Arc<DoctorCatalog>) -> Router {
    let booking = AppointmentBookingService::new(config, catalog.clone(), AppointmentStore::new());

    Router::new()
        .route("/", get(|| async { "Doctor booking API is running!" }))
        .nest("/doctors", doctor_routes(catalog))
        .nest("/appointments", appointment_routes(Arc::new(booking)))
}
