// libs/appointment-cell/src/services/draft.rs
use chrono::NaiveDate;

use doctor_cell::models::{format_long_date, parse_iso_date, Doctor};

use crate::models::{AppointmentError, AppointmentForm, FormErrors, FormField, OfferedDate};
use crate::services::validation::validate_form;

/// Slot selection state for booking one doctor.
#[derive(Debug, Clone)]
pub struct BookingDraft<'a> {
    doctor: &'a Doctor,
    form: AppointmentForm,
    errors: FormErrors,
}

impl<'a> BookingDraft<'a> {
    pub fn new(doctor: &'a Doctor) -> Self {
        Self::from_form(doctor, AppointmentForm::default())
    }

    pub fn from_form(doctor: &'a Doctor, form: AppointmentForm) -> Self {
        Self {
            doctor,
            form,
            errors: FormErrors::default(),
        }
    }

    pub fn doctor(&self) -> &Doctor {
        self.doctor
    }

    pub fn form(&self) -> &AppointmentForm {
        &self.form
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn into_form(self) -> AppointmentForm {
        self.form
    }

    /// Editing a field clears its pending error.
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::PatientName => self.form.patient_name = value,
            FormField::Email => self.form.email = value,
            FormField::Date => self.form.date = value,
            FormField::Time => self.form.time = value,
        }
        self.errors.clear(field);
    }

    /// A new date invalidates whatever time was picked for the old one.
    pub fn select_date(&mut self, date: impl Into<String>) {
        self.set_field(FormField::Date, date);
        self.set_field(FormField::Time, String::new());
    }

    pub fn select_time(&mut self, slot: &str) -> Result<(), AppointmentError> {
        let offered = self
            .selected_date()
            .is_some_and(|date| self.doctor.offers_slot(date, slot));
        if !offered {
            return Err(AppointmentError::SlotNotAvailable {
                date: self.form.date.clone(),
                time: slot.to_string(),
            });
        }
        self.set_field(FormField::Time, slot);
        Ok(())
    }

    pub fn offered_dates(&self) -> Vec<OfferedDate> {
        self.doctor
            .availability
            .iter()
            .map(|day| OfferedDate {
                date: day.date,
                label: format_long_date(day.date),
                slot_count: day.slots.len(),
            })
            .collect()
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        parse_iso_date(&self.form.date)
    }

    pub fn available_slots(&self) -> &[String] {
        match self.selected_date() {
            Some(date) => self.doctor.slots_for(date),
            None => &[],
        }
    }

    /// Runs the form checks, then checks the picked date and time against the
    /// doctor's availability. Returns true when the draft can be submitted.
    pub fn validate(&mut self) -> bool {
        let mut errors = validate_form(&self.form);

        if errors.get(FormField::Date).is_none() {
            let offered_date = self
                .selected_date()
                .filter(|date| self.doctor.availability.iter().any(|day| day.date == *date));

            match offered_date {
                None => errors.set(FormField::Date, "Selected date is not available"),
                Some(date) => {
                    if errors.get(FormField::Time).is_none()
                        && !self.doctor.offers_slot(date, &self.form.time)
                    {
                        errors.set(FormField::Time, "Selected time slot is not available");
                    }
                }
            }
        }

        self.errors = errors;
        self.errors.is_empty()
    }
}
