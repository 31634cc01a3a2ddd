use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use axum_extra::extract::WithRejection;
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::{json, Value};

use shared_models::error::AppError;

use crate::models::{parse_iso_date, DoctorError, DoctorProfile, SearchFilters};
use crate::services::{summarize, DoctorCatalog};

#[derive(Debug, Deserialize)]
pub struct SlotQuery {
    pub date: String,
}

impl From<DoctorError> for AppError {
    fn from(err: DoctorError) -> Self {
        match err {
            DoctorError::NotFound => AppError::NotFound(err.to_string()),
            DoctorError::InvalidDate(_) => AppError::BadRequest(err.to_string()),
            DoctorError::CatalogLoad(_) => AppError::Internal(err.to_string()),
        }
    }
}

pub fn parse_date(raw: &str) -> Result<NaiveDate, DoctorError> {
    parse_iso_date(raw).ok_or_else(|| DoctorError::InvalidDate(raw.to_string()))
}

#[axum::debug_handler]
pub async fn search_doctors(
    State(catalog): State<Arc<DoctorCatalog>>,
    WithRejection(Query(filters), _): WithRejection<Query<SearchFilters>, AppError>,
) -> Result<Json<Value>, AppError> {
    let doctors = catalog.search(&filters);
    let summary = summarize(&doctors);

    Ok(Json(json!({
        "doctors": doctors,
        "summary": summary,
        "specializations": catalog.specializations(),
        "filters": filters,
    })))
}

#[axum::debug_handler]
pub async fn list_specializations(
    State(catalog): State<Arc<DoctorCatalog>>,
) -> Result<Json<Value>, AppError> {
    Ok(Json(json!({
        "specializations": catalog.specializations()
    })))
}

#[axum::debug_handler]
pub async fn get_doctor_profile(
    State(catalog): State<Arc<DoctorCatalog>>,
    Path(doctor_id): Path<String>,
) -> Result<Json<DoctorProfile>, AppError> {
    let doctor = catalog.get(&doctor_id)?.clone();
    Ok(Json(DoctorProfile::from(doctor)))
}

#[axum::debug_handler]
pub async fn get_doctor_slots(
    State(catalog): State<Arc<DoctorCatalog>>,
    Path(doctor_id): Path<String>,
    WithRejection(Query(query), _): WithRejection<Query<SlotQuery>, AppError>,
) -> Result<Json<Value>, AppError> {
    let date = parse_date(&query.date)?;
    let slots = catalog.slots_for(&doctor_id, date)?;

    Ok(Json(json!({
        "doctor_id": doctor_id,
        "date": date,
        "available_slots": slots,
        "total_slots": slots.len()
    })))
}
