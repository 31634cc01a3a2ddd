// libs/appointment-cell/src/models.rs
use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

// ==============================================================================
// CORE APPOINTMENT MODELS
// ==============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Appointment {
    pub id: Uuid,
    pub doctor_id: String,
    pub doctor_name: String,
    pub patient_name: String,
    pub email: String,
    pub date: NaiveDate,
    pub time: String,
    pub status: AppointmentStatus,
    pub created_at: DateTime<Utc>,
}

impl Appointment {
    /// Bookings are confirmed as soon as they land in the store.
    pub fn confirm(new: NewAppointment) -> Self {
        Self {
            id: Uuid::new_v4(),
            doctor_id: new.doctor_id,
            doctor_name: new.doctor_name,
            patient_name: new.patient_name,
            email: new.email,
            date: new.date,
            time: new.time,
            status: AppointmentStatus::Confirmed,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Confirmed,
    Pending,
    Cancelled,
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentStatus::Confirmed => write!(f, "confirmed"),
            AppointmentStatus::Pending => write!(f, "pending"),
            AppointmentStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Appointment payload before the store assigns id, status and timestamp.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewAppointment {
    pub doctor_id: String,
    pub doctor_name: String,
    pub patient_name: String,
    pub email: String,
    pub date: NaiveDate,
    pub time: String,
}

// ==============================================================================
// BOOKING FORM
// ==============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppointmentForm {
    #[serde(default)]
    pub patient_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    PatientName,
    Email,
    Date,
    Time,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::PatientName,
        FormField::Email,
        FormField::Date,
        FormField::Time,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::PatientName => "patient_name",
            FormField::Email => "email",
            FormField::Date => "date",
            FormField::Time => "time",
        }
    }
}

/// Per-field validation messages. A field without a message is valid.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FormErrors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn len(&self) -> usize {
        FormField::ALL.iter().filter(|f| self.get(**f).is_some()).count()
    }

    pub fn get(&self, field: FormField) -> Option<&str> {
        self.slot(field).as_deref()
    }

    pub fn set(&mut self, field: FormField, message: impl Into<String>) {
        *self.slot_mut(field) = Some(message.into());
    }

    pub fn clear(&mut self, field: FormField) {
        *self.slot_mut(field) = None;
    }

    pub fn to_field_map(&self) -> BTreeMap<String, String> {
        FormField::ALL
            .into_iter()
            .filter_map(|field| {
                self.get(field)
                    .map(|msg| (field.as_str().to_string(), msg.to_string()))
            })
            .collect()
    }

    fn slot(&self, field: FormField) -> &Option<String> {
        match field {
            FormField::PatientName => &self.patient_name,
            FormField::Email => &self.email,
            FormField::Date => &self.date,
            FormField::Time => &self.time,
        }
    }

    fn slot_mut(&mut self, field: FormField) -> &mut Option<String> {
        match field {
            FormField::PatientName => &mut self.patient_name,
            FormField::Email => &mut self.email,
            FormField::Date => &mut self.date,
            FormField::Time => &mut self.time,
        }
    }
}

// ==============================================================================
// RESPONSE DTOs
// ==============================================================================

/// What the patient sees right after submitting, before the booking lands.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookingReceipt {
    pub doctor_id: String,
    pub doctor_name: String,
    pub patient_name: String,
    pub email: String,
    pub date: NaiveDate,
    pub date_label: String,
    pub time: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OfferedDate {
    pub date: NaiveDate,
    pub label: String,
    pub slot_count: usize,
}

// ==============================================================================
// ERRORS
// ==============================================================================

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppointmentError {
    #[error("Appointment not found")]
    NotFound,

    #[error("Doctor not found")]
    DoctorNotFound,

    #[error("{0} is not accepting bookings")]
    DoctorUnavailable(String),

    #[error("Time slot {time} is not offered on {date}")]
    SlotNotAvailable { date: String, time: String },

    #[error("Invalid booking form: {} field error(s)", .0.len())]
    InvalidForm(FormErrors),

    #[error("Booking task failed: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_map_omits_valid_fields() {
        let mut errors = FormErrors::default();
        errors.set(FormField::Email, "Email is required");
        errors.set(FormField::Time, "Please select a time slot");

        let map = errors.to_field_map();
        assert_eq!(map.len(), 2);
        assert_eq!(map["email"], "Email is required");
        assert!(!map.contains_key("patient_name"));

        errors.clear(FormField::Email);
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn form_errors_serialize_without_nulls() {
        let mut errors = FormErrors::default();
        errors.set(FormField::Date, "Please select a date");
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json, serde_json::json!({ "date": "Please select a date" }));
    }

    #[test]
    fn confirmed_on_creation() {
        let appointment = Appointment::confirm(NewAppointment {
            doctor_id: "1".into(),
            doctor_name: "Dr. Sarah Johnson".into(),
            patient_name: "Jane".into(),
            email: "jane@example.com".into(),
            date: NaiveDate::from_ymd_opt(2025, 1, 20).unwrap(),
            time: "09:00".into(),
        });
        assert_eq!(appointment.status, AppointmentStatus::Confirmed);
        assert_eq!(appointment.status.to_string(), "confirmed");
    }
}
