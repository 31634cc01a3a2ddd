// libs/appointment-cell/src/services/booking.rs
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info, warn};
use uuid::Uuid;

use doctor_cell::models::{format_long_date, DoctorError};
use doctor_cell::services::DoctorCatalog;
use shared_config::AppConfig;

use crate::models::{
    Appointment, AppointmentError, AppointmentForm, BookingReceipt, NewAppointment,
};
use crate::services::draft::BookingDraft;
use crate::services::store::{AppointmentAction, AppointmentStore};

/// A submitted booking that has not landed in the store yet.
#[derive(Debug)]
pub struct PendingBooking {
    pub receipt: BookingReceipt,
    handle: JoinHandle<Appointment>,
}

impl PendingBooking {
    /// Waits for the delayed add and returns the stored appointment.
    pub async fn wait(self) -> Result<Appointment, AppointmentError> {
        self.handle
            .await
            .map_err(|e| AppointmentError::Internal(e.to_string()))
    }
}

pub struct AppointmentBookingService {
    catalog: Arc<DoctorCatalog>,
    store: AppointmentStore,
    delay: Duration,
}

impl AppointmentBookingService {
    pub fn new(config: &AppConfig, catalog: Arc<DoctorCatalog>, store: AppointmentStore) -> Self {
        Self {
            catalog,
            store,
            delay: config.booking_delay(),
        }
    }

    pub fn catalog(&self) -> &DoctorCatalog {
        &self.catalog
    }

    pub fn store(&self) -> &AppointmentStore {
        &self.store
    }

    /// Validate the form against the doctor's slots, mark the store as loading
    /// and schedule the confirmed appointment after the configured delay.
    pub async fn submit(
        &self,
        doctor_id: &str,
        form: AppointmentForm,
    ) -> Result<PendingBooking, AppointmentError> {
        debug!("Booking request for doctor {} on {} {}", doctor_id, form.date, form.time);

        let doctor = self.catalog.get(doctor_id).map_err(|e| match e {
            DoctorError::NotFound => AppointmentError::DoctorNotFound,
            other => AppointmentError::Internal(other.to_string()),
        })?;

        if !doctor.is_bookable() {
            warn!("Rejected booking for {} ({})", doctor.name, doctor.status);
            return Err(AppointmentError::DoctorUnavailable(doctor.name.clone()));
        }

        let mut draft = BookingDraft::from_form(doctor, form);
        if !draft.validate() {
            return Err(AppointmentError::InvalidForm(draft.errors().clone()));
        }
        let date = draft
            .selected_date()
            .ok_or_else(|| AppointmentError::Internal("validated draft lost its date".into()))?;
        let form = draft.into_form();

        let new_appointment = NewAppointment {
            doctor_id: doctor.id.clone(),
            doctor_name: doctor.name.clone(),
            patient_name: form.patient_name,
            email: form.email,
            date,
            time: form.time,
        };

        let receipt = BookingReceipt {
            doctor_id: new_appointment.doctor_id.clone(),
            doctor_name: new_appointment.doctor_name.clone(),
            patient_name: new_appointment.patient_name.clone(),
            email: new_appointment.email.clone(),
            date,
            date_label: format_long_date(date),
            time: new_appointment.time.clone(),
            message: format!(
                "A confirmation email has been sent to {}",
                new_appointment.email
            ),
        };

        self.store.dispatch(AppointmentAction::SetLoading(true)).await;

        let store = self.store.clone();
        let delay = self.delay;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let appointment = Appointment::confirm(new_appointment);
            info!(
                "Appointment {} confirmed with {} on {} at {}",
                appointment.id, appointment.doctor_name, appointment.date, appointment.time
            );
            store.dispatch(AppointmentAction::Add(appointment.clone())).await;
            appointment
        });

        Ok(PendingBooking { receipt, handle })
    }

    pub async fn cancel(&self, appointment_id: Uuid) -> Result<Appointment, AppointmentError> {
        if !self.store.cancel(appointment_id).await {
            return Err(AppointmentError::NotFound);
        }
        info!("Appointment {} cancelled", appointment_id);

        self.store
            .get(appointment_id)
            .await
            .ok_or(AppointmentError::NotFound)
    }
}
