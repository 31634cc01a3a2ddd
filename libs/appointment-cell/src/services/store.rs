// libs/appointment-cell/src/services/store.rs
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::models::{Appointment, AppointmentStatus};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppointmentState {
    pub appointments: Vec<Appointment>,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppointmentAction {
    Add(Appointment),
    SetLoading(bool),
    SetError(Option<String>),
    Cancel(Uuid),
}

/// Pure state transition. Cancelling an unknown id leaves the state as it was.
pub fn reduce(mut state: AppointmentState, action: AppointmentAction) -> AppointmentState {
    match action {
        AppointmentAction::Add(appointment) => {
            state.appointments.push(appointment);
            state.loading = false;
            state.error = None;
        }
        AppointmentAction::SetLoading(loading) => {
            state.loading = loading;
        }
        AppointmentAction::SetError(error) => {
            state.error = error;
            state.loading = false;
        }
        AppointmentAction::Cancel(id) => {
            for appointment in state.appointments.iter_mut().filter(|a| a.id == id) {
                appointment.status = AppointmentStatus::Cancelled;
            }
        }
    }
    state
}

/// Shared handle to the in-memory appointment state.
#[derive(Debug, Clone, Default)]
pub struct AppointmentStore {
    state: Arc<RwLock<AppointmentState>>,
}

impl AppointmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn dispatch(&self, action: AppointmentAction) {
        let mut guard = self.state.write().await;
        apply(&mut guard, action);
    }

    pub async fn snapshot(&self) -> AppointmentState {
        self.state.read().await.clone()
    }

    pub async fn get(&self, id: Uuid) -> Option<Appointment> {
        self.state
            .read()
            .await
            .appointments
            .iter()
            .find(|a| a.id == id)
            .cloned()
    }

    /// Returns whether any appointment carried `id`.
    pub async fn cancel(&self, id: Uuid) -> bool {
        let mut guard = self.state.write().await;
        let found = guard.appointments.iter().any(|a| a.id == id);
        apply(&mut guard, AppointmentAction::Cancel(id));
        found
    }

    pub async fn list_for_doctor(&self, doctor_id: &str) -> Vec<Appointment> {
        self.state
            .read()
            .await
            .appointments
            .iter()
            .filter(|a| a.doctor_id == doctor_id)
            .cloned()
            .collect()
    }
}

fn apply(state: &mut AppointmentState, action: AppointmentAction) {
    debug!("Applying {:?}", action);
    let current = std::mem::take(state);
    *state = reduce(current, action);
}
