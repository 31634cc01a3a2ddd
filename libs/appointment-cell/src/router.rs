// libs/appointment-cell/src/router.rs
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;
use crate::services::AppointmentBookingService;

pub fn appointment_routes(service: Arc<AppointmentBookingService>) -> Router {
    Router::new()
        .route("/", get(handlers::get_appointment_state))
        .route(
            "/doctors/{doctor_id}",
            get(handlers::get_doctor_appointments).post(handlers::book_appointment),
        )
        .route("/doctors/{doctor_id}/options", get(handlers::get_booking_options))
        .route("/{appointment_id}", get(handlers::get_appointment))
        .route("/{appointment_id}/cancel", post(handlers::cancel_appointment))
        .with_state(service)
}
