// libs/appointment-cell/src/handlers.rs
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::WithRejection;
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use shared_models::error::AppError;

use crate::models::{AppointmentError, AppointmentForm};
use crate::services::{AppointmentBookingService, AppointmentState, BookingDraft};

#[derive(Debug, Default, Deserialize)]
pub struct SubmitQuery {
    /// Hold the response until the booking lands in the store.
    #[serde(default)]
    pub wait: bool,
}

impl From<AppointmentError> for AppError {
    fn from(err: AppointmentError) -> Self {
        match err {
            AppointmentError::NotFound | AppointmentError::DoctorNotFound => {
                AppError::NotFound(err.to_string())
            }
            AppointmentError::DoctorUnavailable(_) => AppError::Conflict(err.to_string()),
            AppointmentError::SlotNotAvailable { .. } => AppError::BadRequest(err.to_string()),
            AppointmentError::InvalidForm(errors) => AppError::InvalidFields(errors.to_field_map()),
            AppointmentError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

// ==============================================================================
// BOOKING HANDLERS
// ==============================================================================

#[axum::debug_handler]
pub async fn book_appointment(
    State(service): State<Arc<AppointmentBookingService>>,
    Path(doctor_id): Path<String>,
    WithRejection(Query(query), _): WithRejection<Query<SubmitQuery>, AppError>,
    WithRejection(Json(form), _): WithRejection<Json<AppointmentForm>, AppError>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let pending = service.submit(&doctor_id, form).await?;
    let receipt = pending.receipt.clone();

    if query.wait {
        let appointment = pending.wait().await?;
        return Ok((
            StatusCode::CREATED,
            Json(json!({
                "success": true,
                "receipt": receipt,
                "appointment": appointment
            })),
        ));
    }

    Ok((
        StatusCode::ACCEPTED,
        Json(json!({
            "success": true,
            "receipt": receipt,
            "message": "Appointment request received"
        })),
    ))
}

#[axum::debug_handler]
pub async fn get_booking_options(
    State(service): State<Arc<AppointmentBookingService>>,
    Path(doctor_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let doctor = service
        .catalog()
        .get(&doctor_id)
        .map_err(|_| AppointmentError::DoctorNotFound)?;
    let draft = BookingDraft::new(doctor);

    Ok(Json(json!({
        "doctor_id": doctor.id,
        "doctor_name": doctor.name,
        "bookable": doctor.is_bookable(),
        "dates": draft.offered_dates()
    })))
}

// ==============================================================================
// APPOINTMENT STATE HANDLERS
// ==============================================================================

#[axum::debug_handler]
pub async fn get_appointment_state(
    State(service): State<Arc<AppointmentBookingService>>,
) -> Result<Json<AppointmentState>, AppError> {
    Ok(Json(service.store().snapshot().await))
}

#[axum::debug_handler]
pub async fn get_appointment(
    State(service): State<Arc<AppointmentBookingService>>,
    WithRejection(Path(appointment_id), _): WithRejection<Path<Uuid>, AppError>,
) -> Result<Json<Value>, AppError> {
    let appointment = service
        .store()
        .get(appointment_id)
        .await
        .ok_or(AppointmentError::NotFound)?;

    Ok(Json(json!(appointment)))
}

#[axum::debug_handler]
pub async fn cancel_appointment(
    State(service): State<Arc<AppointmentBookingService>>,
    WithRejection(Path(appointment_id), _): WithRejection<Path<Uuid>, AppError>,
) -> Result<Json<Value>, AppError> {
    let cancelled = service.cancel(appointment_id).await?;

    Ok(Json(json!({
        "success": true,
        "appointment": cancelled,
        "message": "Appointment cancelled successfully"
    })))
}

#[axum::debug_handler]
pub async fn get_doctor_appointments(
    State(service): State<Arc<AppointmentBookingService>>,
    Path(doctor_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let appointments = service.store().list_for_doctor(&doctor_id).await;

    Ok(Json(json!({
        "doctor_id": doctor_id,
        "appointments": appointments,
        "total": appointments.len()
    })))
}
