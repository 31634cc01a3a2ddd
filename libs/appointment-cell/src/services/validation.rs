// =====================================================================================
// BOOKING FORM VALIDATION
// =====================================================================================

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::models::{AppointmentForm, FormErrors, FormField};

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Four independent required-field checks; email also gets a shape check.
pub fn validate_form(form: &AppointmentForm) -> FormErrors {
    let mut errors = FormErrors::default();

    if form.patient_name.trim().is_empty() {
        errors.set(FormField::PatientName, "Patient name is required");
    }

    if form.email.trim().is_empty() {
        errors.set(FormField::Email, "Email is required");
    } else if !is_valid_email(&form.email) {
        errors.set(FormField::Email, "Please enter a valid email address");
    }

    if form.date.is_empty() {
        errors.set(FormField::Date, "Please select a date");
    }

    if form.time.is_empty() {
        errors.set(FormField::Time, "Please select a time slot");
    }

    debug!("Form validation found {} error(s)", errors.len());
    errors
}
