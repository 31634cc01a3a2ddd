// libs/doctor-cell/src/services/catalog.rs
use std::collections::BTreeSet;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::{debug, info};

use crate::models::{CatalogSummary, Doctor, DoctorError, DoctorStatus, SearchFilters};
use crate::services::seed::seed_doctors;

/// Free-text match on name or specialization, exact status, exact specialization.
pub fn matches(doctor: &Doctor, filters: &SearchFilters) -> bool {
    let matches_query = filters.query.is_empty() || {
        let query = filters.query.to_lowercase();
        doctor.name.to_lowercase().contains(&query)
            || doctor.specialization.to_lowercase().contains(&query)
    };

    let matches_status = filters.status.is_empty() || doctor.status.as_str() == filters.status;

    let matches_specialization =
        filters.specialization.is_empty() || doctor.specialization == filters.specialization;

    matches_query && matches_status && matches_specialization
}

pub fn summarize(doctors: &[Doctor]) -> CatalogSummary {
    CatalogSummary {
        total: doctors.len(),
        available: doctors.iter().filter(|d| d.status == DoctorStatus::Available).count(),
        busy: doctors.iter().filter(|d| d.status == DoctorStatus::Busy).count(),
    }
}

/// Read-only doctor roster.
#[derive(Debug, Clone)]
pub struct DoctorCatalog {
    doctors: Vec<Doctor>,
}

impl Default for DoctorCatalog {
    fn default() -> Self {
        Self::new(seed_doctors())
    }
}

impl DoctorCatalog {
    pub fn new(doctors: Vec<Doctor>) -> Self {
        Self { doctors }
    }

    /// Load a roster from a JSON array of doctors.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading doctor catalog {}", path.display()))?;
        let doctors: Vec<Doctor> = serde_json::from_str(&raw)
            .with_context(|| format!("parsing doctor catalog {}", path.display()))?;

        info!("Loaded {} doctors from {}", doctors.len(), path.display());
        Ok(Self::new(doctors))
    }

    /// Uses the file at `path` when given, the built-in roster otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, DoctorError> {
        match path {
            Some(path) => {
                Self::from_json_file(path).map_err(|e| DoctorError::CatalogLoad(format!("{:#}", e)))
            }
            None => Ok(Self::default()),
        }
    }

    pub fn all(&self) -> &[Doctor] {
        &self.doctors
    }

    pub fn len(&self) -> usize {
        self.doctors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.doctors.is_empty()
    }

    pub fn get(&self, doctor_id: &str) -> Result<&Doctor, DoctorError> {
        self.doctors
            .iter()
            .find(|d| d.id == doctor_id)
            .ok_or(DoctorError::NotFound)
    }

    pub fn search(&self, filters: &SearchFilters) -> Vec<Doctor> {
        let found: Vec<Doctor> = self
            .doctors
            .iter()
            .filter(|d| matches(d, filters))
            .cloned()
            .collect();

        debug!("Search {:?} matched {} of {} doctors", filters, found.len(), self.doctors.len());
        found
    }

    pub fn specializations(&self) -> Vec<String> {
        self.doctors
            .iter()
            .map(|d| d.specialization.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn slots_for(&self, doctor_id: &str, date: NaiveDate) -> Result<Vec<String>, DoctorError> {
        Ok(self.get(doctor_id)?.slots_for(date).to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filters(query: &str, status: &str, specialization: &str) -> SearchFilters {
        SearchFilters {
            query: query.into(),
            status: status.into(),
            specialization: specialization.into(),
        }
    }

    #[test]
    fn empty_filters_return_everything_in_order() {
        let catalog = DoctorCatalog::default();
        let ids: Vec<_> = catalog.search(&SearchFilters::default()).into_iter().map(|d| d.id).collect();
        assert_eq!(ids, ["1", "2", "3", "4", "5", "6"]);
    }

    #[test]
    fn query_is_case_insensitive_on_name_and_specialization() {
        let catalog = DoctorCatalog::default();

        let by_name = catalog.search(&filters("sarah", "", ""));
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].name, "Dr. Sarah Johnson");

        let by_spec = catalog.search(&filters("NEURO", "", ""));
        assert_eq!(by_spec.len(), 1);
        assert_eq!(by_spec[0].specialization, "Neurologist");
    }

    #[test]
    fn specialization_filter_is_exact() {
        let catalog = DoctorCatalog::default();
        assert_eq!(catalog.search(&filters("", "", "Pediatrician")).len(), 1);
        assert!(catalog.search(&filters("", "", "pediatrician")).is_empty());
        assert!(catalog.search(&filters("", "", "Pediatric")).is_empty());
    }

    #[test]
    fn unknown_status_matches_nothing() {
        let catalog = DoctorCatalog::default();
        assert!(catalog.search(&filters("", "retired", "")).is_empty());
        assert_eq!(catalog.search(&filters("", "on-leave", "")).len(), 1);
    }

    #[test]
    fn filter_fields_commute() {
        let catalog = DoctorCatalog::default();
        let combined = filters("dr", "available", "Cardiologist");
        let expected = catalog.search(&combined);

        let single = [
            filters("dr", "", ""),
            filters("", "available", ""),
            filters("", "", "Cardiologist"),
        ];
        let orders = [[0, 1, 2], [0, 2, 1], [1, 0, 2], [1, 2, 0], [2, 0, 1], [2, 1, 0]];

        for order in orders {
            let mut remaining = catalog.all().to_vec();
            for idx in order {
                remaining.retain(|d| matches(d, &single[idx]));
            }
            assert_eq!(remaining, expected, "order {:?}", order);
        }
    }

    #[test]
    fn summary_counts_available_and_busy() {
        let catalog = DoctorCatalog::default();
        let summary = summarize(catalog.all());
        assert_eq!(summary, CatalogSummary { total: 6, available: 4, busy: 1 });
    }

    #[test]
    fn specializations_are_sorted_and_distinct() {
        let mut doctors = seed_doctors();
        let mut twin = doctors[0].clone();
        twin.id = "7".into();
        doctors.push(twin);

        let specs = DoctorCatalog::new(doctors).specializations();
        assert_eq!(
            specs,
            [
                "Cardiologist",
                "Dermatologist",
                "Gastroenterologist",
                "Neurologist",
                "Orthopedic Surgeon",
                "Pediatrician"
            ]
        );
    }

    #[test]
    fn unknown_doctor_is_not_found() {
        let catalog = DoctorCatalog::default();
        assert_eq!(catalog.get("42").unwrap_err(), DoctorError::NotFound);
    }
}
