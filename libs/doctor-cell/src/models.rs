use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Doctor {
    pub id: String,
    pub name: String,
    pub specialization: String,
    pub image: String,
    pub status: DoctorStatus,
    pub rating: f32,
    pub experience: u32,
    pub education: String,
    pub about: String,
    #[serde(default)]
    pub availability: Vec<TimeSlot>,
}

impl Doctor {
    pub fn has_available_slots(&self) -> bool {
        self.availability.iter().any(|day| !day.slots.is_empty())
    }

    /// Doctors on leave cannot be booked even if slots are listed.
    pub fn is_bookable(&self) -> bool {
        self.has_available_slots() && self.status != DoctorStatus::OnLeave
    }

    /// Slots of the first availability entry for `date`.
    pub fn slots_for(&self, date: NaiveDate) -> &[String] {
        self.availability
            .iter()
            .find(|day| day.date == date)
            .map(|day| day.slots.as_slice())
            .unwrap_or(&[])
    }

    pub fn offers_slot(&self, date: NaiveDate, time: &str) -> bool {
        self.slots_for(date).iter().any(|slot| slot == time)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum DoctorStatus {
    Available,
    Busy,
    OnLeave,
}

impl DoctorStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DoctorStatus::Available => "available",
            DoctorStatus::Busy => "busy",
            DoctorStatus::OnLeave => "on-leave",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DoctorStatus::Available => "Available",
            DoctorStatus::Busy => "Limited Slots",
            DoctorStatus::OnLeave => "On Leave",
        }
    }
}

impl fmt::Display for DoctorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One day of a doctor's availability. Slots are kept in listed order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimeSlot {
    pub date: NaiveDate,
    pub slots: Vec<String>,
}

/// Catalog query. An empty field places no constraint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchFilters {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub specialization: String,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogSummary {
    pub total: usize,
    pub available: usize,
    pub busy: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityDay {
    pub date: NaiveDate,
    pub label: String,
    pub slots: Vec<String>,
}

// DTO for the profile view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoctorProfile {
    pub doctor: Doctor,
    pub status_label: String,
    pub bookable: bool,
    pub availability: Vec<AvailabilityDay>,
}

impl From<Doctor> for DoctorProfile {
    fn from(doctor: Doctor) -> Self {
        let availability = doctor
            .availability
            .iter()
            .map(|day| AvailabilityDay {
                date: day.date,
                label: format_long_date(day.date),
                slots: day.slots.clone(),
            })
            .collect();

        Self {
            status_label: doctor.status.label().to_string(),
            bookable: doctor.is_bookable(),
            availability,
            doctor,
        }
    }
}

/// Parses a calendar date written exactly as `YYYY-MM-DD`.
pub fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    if raw.len() != 10 {
        return None;
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Renders e.g. `Monday, January 20, 2025`.
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DoctorError {
    #[error("Doctor not found")]
    NotFound,

    #[error("Doctor catalog could not be loaded: {0}")]
    CatalogLoad(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),
}
